//! # Frame Link
//!
//! The value passed to a game module's tick function once per frame. It loans
//! the module the frame arena's remaining span and the draw state for exactly
//! the duration of the call.
//!
//! Everything here is plain C layout. The module side of the boundary is a
//! separately compiled binary, so no Rust lifetimes cross it; the retention
//! rules are part of the contract instead:
//!
//! - pointers in a [`FrameLink`] are valid only until the tick call returns
//! - the frame span is invalidated wholesale when the host clears the frame
//!   arena at the top of the next iteration
//! - the module must not free, grow, or alias these spans

use crate::frame::PaletteColor;

/// The single entry point a game module exports, under the name
/// [`crate::constants::TICK_SYMBOL`].
///
/// Called exactly once per frame, synchronously; the host does not proceed to
/// presentation until it returns.
pub type TickFn = unsafe extern "C" fn(link: *mut FrameLink);

/// Per-frame loan handed across the ABI.
#[repr(C)]
#[derive(Debug)]
pub struct FrameLink {
    /// Base of the frame arena span loaned to the module.
    pub frame_memory: *mut u8,
    /// Bytes available at `frame_memory` this frame.
    pub frame_capacity: usize,
    /// Base of the index surface, row-major.
    pub surface_indices: *mut u8,
    /// Cells at `surface_indices`. Always `SURFACE_LEN` in practice.
    pub surface_len: usize,
    /// Base of the palette the presenter will resolve indices against.
    pub palette: *mut PaletteColor,
    /// Entries at `palette`. Always `PALETTE_LEN` in practice.
    pub palette_len: usize,
}

impl FrameLink {
    /// The frame scratch span as a slice.
    ///
    /// # Safety
    ///
    /// Callable only inside the tick call that received this link, and only
    /// while no other slice from the same link is live.
    #[must_use]
    pub unsafe fn frame_scratch(&mut self) -> &mut [u8] {
        core::slice::from_raw_parts_mut(self.frame_memory, self.frame_capacity)
    }

    /// The index surface as a slice.
    ///
    /// # Safety
    ///
    /// Same rules as [`FrameLink::frame_scratch`].
    #[must_use]
    pub unsafe fn surface(&mut self) -> &mut [u8] {
        core::slice::from_raw_parts_mut(self.surface_indices, self.surface_len)
    }

    /// The palette as a slice.
    ///
    /// # Safety
    ///
    /// Same rules as [`FrameLink::frame_scratch`].
    #[must_use]
    pub unsafe fn palette(&mut self) -> &mut [PaletteColor] {
        core::slice::from_raw_parts_mut(self.palette, self.palette_len)
    }
}
