//! # Loaded Module
//!
//! The owned handle to one successfully loaded game module: the mapped image,
//! the resolved tick entry point, and the source file's version marker.

use std::path::PathBuf;
use std::time::SystemTime;

use vessel_shared::{FrameLink, TickFn};

/// The capability the scheduler dispatches through each frame: accept a frame
/// link, return nothing.
///
/// Exactly one resolved implementation exists at a time; resolving it is the
/// loader's job, never the scheduler's.
pub trait Tickable {
    /// Runs one frame of module logic. Synchronous and blocking.
    fn tick(&mut self, link: &mut FrameLink);
}

/// One loaded game module.
///
/// Invariant: `tick_fn` was resolved from `image` and is valid exactly as
/// long as `image` is alive. Dropping the module unloads the image, so the
/// two can never be observed apart. There is never more than one of these
/// installed in a host at a time.
pub struct GameModule<I> {
    /// The mapped executable image. Never read, only kept alive: `tick_fn`
    /// dangles the moment this drops.
    _image: I,
    /// The resolved entry point.
    tick_fn: TickFn,
    /// Last-modified time of the *canonical* module file when this was
    /// loaded, not of the loader-owned copy.
    timestamp: SystemTime,
    /// The loader-owned copy this image was mapped from; the loader deletes
    /// it after the image is unloaded.
    copy_path: PathBuf,
}

impl<I> GameModule<I> {
    /// Assembles a module from the parts the load protocol produced.
    pub(crate) fn new(image: I, tick_fn: TickFn, timestamp: SystemTime, copy_path: PathBuf) -> Self {
        Self {
            _image: image,
            tick_fn,
            timestamp,
            copy_path,
        }
    }

    /// The source file's modification time recorded at load.
    #[must_use]
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }

    /// The loader-owned copy backing this module's image.
    #[must_use]
    pub fn copy_path(&self) -> &std::path::Path {
        &self.copy_path
    }
}

impl<I> std::fmt::Debug for GameModule<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameModule")
            .field("tick_fn", &self.tick_fn)
            .field("timestamp", &self.timestamp)
            .field("copy_path", &self.copy_path)
            .finish_non_exhaustive()
    }
}

impl<I> Tickable for GameModule<I> {
    fn tick(&mut self, link: &mut FrameLink) {
        // SAFETY: tick_fn was resolved from the owned image, which is alive for
        // the duration of this call; the link's pointers are valid for the
        // same duration by the scheduler's construction.
        unsafe { (self.tick_fn)(link) }
    }
}
