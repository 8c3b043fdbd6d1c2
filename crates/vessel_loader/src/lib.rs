//! # VESSEL Loader
//!
//! Loads the separately compiled game module into the process and swaps it
//! underneath the running frame loop when the on-disk binary changes.
//!
//! ## The two rules everything here serves
//!
//! 1. **Never call into a half-loaded or stale module.** A load either
//!    completes the whole protocol (copy, map, resolve, timestamp) or leaves
//!    no observable state at all.
//! 2. **Never leave the host without a working module.** Reload is
//!    load-then-swap-then-unload-old; a failed rebuild keeps the previous
//!    module installed and ticking.
//!
//! ## Why copy-then-load
//!
//! The build tool rewrites the module binary at its canonical path while the
//! host runs. Loading that path directly would either fail while the file is
//! held open or map a half-written image. The loader instead copies the file
//! to a loader-owned, generation-numbered name and maps the copy, leaving the
//! canonical path free for the next rebuild.

#![deny(missing_docs)]
// Note: unsafe code is confined to the dynamic-linker backend and the tick
// dispatch, the two places the C ABI is crossed.
#![allow(unsafe_code)]

pub mod backend;
pub mod error;
pub mod loader;
pub mod module;

pub use backend::{DylibBackend, ModuleBackend};
pub use error::{LoadError, LoadResult};
pub use loader::{platform_module_path, ModuleLoader};
pub use module::{GameModule, Tickable};
