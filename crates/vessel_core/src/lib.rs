//! # VESSEL Core
//!
//! Deterministic memory for the host process. The entire memory model is two
//! instances of one type: a bump [`Arena`] reserved once at startup.
//!
//! ## Architecture Rules
//!
//! 1. **No allocator in the frame loop** - every per-frame byte comes from an
//!    arena whose cursor is reset at the top of the frame
//! 2. **Offsets, not pointers** - callers hold integer offsets into the arena
//!    and go through bounds-checked accessors; the raw base pointer exists
//!    only for the FFI boundary with the loaded game module
//! 3. **Violations are fatal** - capacity overruns and out-of-order rollbacks
//!    are programming errors, not recoverable conditions, and panic

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod memory;

pub use memory::{Arena, Mark};
