//! # Draw State
//!
//! The index-buffer/palette abstraction handed to the presenter: a fixed-size
//! 2D array of small integer indices plus a bounded palette of colors.

use bytemuck::{Pod, Zeroable};

use crate::constants::{PALETTE_LEN, SURFACE_LEN};

/// One palette entry, 8-bit RGBA.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct PaletteColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel. The presenter treats the surface as opaque.
    pub a: u8,
}

impl PaletteColor {
    /// Builds an opaque color from a `0xRRGGBB` literal.
    #[must_use]
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 0xFF,
        }
    }
}

/// Borrowed view of one frame's draw state, produced by the scheduler after
/// the module tick and consumed by the presenter.
pub struct PaletteFrame<'a> {
    /// The index surface, row-major, `SURFACE_LEN` cells.
    pub indices: &'a [u8],
    /// The palette to resolve indices against.
    pub palette: &'a [PaletteColor; PALETTE_LEN],
}

impl<'a> PaletteFrame<'a> {
    /// Builds a frame view.
    ///
    /// # Panics
    ///
    /// Panics if `indices` is not exactly [`SURFACE_LEN`] cells; a mismatched
    /// surface is a programming error, not a runtime condition.
    #[must_use]
    pub fn new(indices: &'a [u8], palette: &'a [PaletteColor; PALETTE_LEN]) -> Self {
        assert_eq!(
            indices.len(),
            SURFACE_LEN,
            "index surface must be exactly {SURFACE_LEN} cells"
        );
        Self { indices, palette }
    }
}
