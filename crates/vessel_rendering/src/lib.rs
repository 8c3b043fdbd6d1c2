//! # VESSEL Rendering
//!
//! The presentation side of the host: takes the index-buffer/palette draw
//! state the scheduler produced and turns it into a presented frame,
//! letterboxed to the window's client area.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ indices (320x180 R8) ─▶ texture upload                   │
//! │ palette (8 colors)   ─▶ uniform upload                   │
//! │                        fullscreen triangle               │
//! │                        fs: palette[texel & 7]            │
//! │                        viewport = letterbox rect         │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A dropped frame is not an event worth dying over: lost or outdated
//! surfaces are reconfigured and skipped, and other presentation failures
//! bubble up for the scheduler to report and carry on past.

#![deny(missing_docs)]
#![deny(unsafe_code)]

mod error;
mod renderer;

pub use error::RenderError;
pub use renderer::PaletteRenderer;
