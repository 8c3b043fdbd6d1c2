//! # VESSEL Host
//!
//! The process that owns the OS window, the GPU context, and process memory,
//! and calls into a separately compiled game module once per frame.
//!
//! ```text
//! Frame N:
//! ┌─────────────────────────────────────────────────────────────┐
//! │ 1. DRAIN OS EVENTS (platform layer)                         │
//! │    └─ close request? -> Terminating, skip the rest          │
//! │ 2. POLL MODULE TIMESTAMP                                    │
//! │    └─ newer on disk? -> load-then-swap, warn on failure     │
//! │ 3. CLEAR FRAME ARENA                                        │
//! │ 4. TICK: hand the module a FrameLink, exactly once          │
//! │ 5. PRESENT via the palette blit (skip if zero-area surface) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is an explicit value threaded through APIs: the [`Host`]
//! context is constructed at startup and owns both arenas, the loader, and
//! the installed module. There is no global state, so tests build as many
//! hosts as they like.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod host;
pub mod scheduler;
pub mod workdir;

#[cfg(feature = "client")]
mod render_target;

pub use config::HostConfig;
pub use error::SetupError;
pub use host::{Host, HostStats};
pub use scheduler::{FrameOutcome, LoopState, PresentError, PresentTarget};
