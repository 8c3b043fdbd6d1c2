//! # ABI Constants
//!
//! Fixed numbers both sides of the host/module boundary agree on.

use crate::frame::PaletteColor;

/// Logical surface width in index cells. 320x180 keeps the 16:9 aspect the
/// presenter letterboxes to.
pub const SURFACE_WIDTH: usize = 320;

/// Logical surface height in index cells.
pub const SURFACE_HEIGHT: usize = 180;

/// Total index cells in the surface.
pub const SURFACE_LEN: usize = SURFACE_WIDTH * SURFACE_HEIGHT;

/// Number of palette entries. Indices are masked to this range on lookup.
pub const PALETTE_LEN: usize = 8;

/// The single symbol a game module must export.
///
/// Signature: [`crate::link::TickFn`]. No other symbols are resolved.
pub const TICK_SYMBOL: &str = "vessel_tick";

/// File stem of the game module binary, resolved relative to the host's
/// working directory. Platform prefix/suffix (`lib`/`.so`/`.dll`) are added
/// by the loader.
pub const MODULE_STEM: &str = "vessel_game";

/// Palette the host starts with. A module is free to overwrite it each frame
/// through the link.
pub const DEFAULT_PALETTE: [PaletteColor; PALETTE_LEN] = [
    PaletteColor::from_hex(0x0000_00),
    PaletteColor::from_hex(0x5555_55),
    PaletteColor::from_hex(0x7C34_F4),
    PaletteColor::from_hex(0x54DF_BB),
    PaletteColor::from_hex(0xFFFF_FF),
    PaletteColor::from_hex(0xFFCD_E2),
    PaletteColor::from_hex(0xFE7F_B8),
    PaletteColor::from_hex(0xFFF4_8D),
];
