//! # VESSEL Shared
//!
//! The entire contract between the host process and the separately compiled
//! game module lives here: the tick symbol name, the [`FrameLink`] layout,
//! the index-surface dimensions, and the palette types.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on:
//! - `wgpu` or any GPU crate
//! - `winit` or any windowing crate
//! - anything that assumes it is running inside the host
//!
//! Game modules are rebuilt and reloaded underneath a running host. There is
//! no versioning handshake: ABI compatibility between host and module builds
//! is the module author's responsibility, and keeping this crate small is
//! what makes that responsibility tractable.

#![deny(missing_docs)]
// Note: unsafe code is allowed in the link module for the C ABI boundary.
#![allow(unsafe_code)]

pub mod constants;
pub mod frame;
pub mod link;
pub mod math;

pub use constants::{
    DEFAULT_PALETTE, MODULE_STEM, PALETTE_LEN, SURFACE_HEIGHT, SURFACE_LEN, SURFACE_WIDTH,
    TICK_SYMBOL,
};
pub use frame::{PaletteColor, PaletteFrame};
pub use link::{FrameLink, TickFn};
pub use math::{letterbox, Viewport};
