//! # Host Context
//!
//! The single explicit value that replaces what a C host would keep in a
//! process-wide globals struct: both arenas, the module loader, the installed
//! module, and the draw state. Constructed at startup, threaded through the
//! scheduler by parameter, never ambient.

use vessel_core::Arena;
use vessel_loader::{DylibBackend, GameModule, ModuleBackend, ModuleLoader};
use vessel_shared::{PaletteColor, DEFAULT_PALETTE, PALETTE_LEN, SURFACE_LEN};

use crate::config::HostConfig;
use crate::error::SetupError;
use crate::scheduler::LoopState;

/// The host context.
///
/// Generic over the loader backend so every scheduler behavior is testable
/// without a window, a GPU, or a real shared library.
pub struct Host<B: ModuleBackend = DylibBackend> {
    /// Process-lifetime arena. Backs the index surface.
    pub(crate) persistent: Arena,
    /// Per-frame arena, cleared at the top of every iteration and loaned to
    /// the module for the duration of one tick.
    pub(crate) frame_arena: Arena,
    /// Watches the canonical module file and runs the load protocol.
    pub(crate) loader: ModuleLoader<B>,
    /// The one installed module. Replaced wholesale on reload.
    pub(crate) module: GameModule<B::Image>,
    /// Palette the presenter resolves indices against. Module-writable.
    pub(crate) palette: [PaletteColor; PALETTE_LEN],
    /// Offset of the index surface inside `persistent`.
    pub(crate) surface_offset: usize,
    /// Frame loop state.
    pub(crate) state: LoopState,
    /// Frames completed so far.
    pub(crate) frame_count: u64,
}

/// Arena and frame counters for diagnostics and shutdown assertions.
#[derive(Clone, Copy, Debug)]
pub struct HostStats {
    /// Frames completed.
    pub frame_count: u64,
    /// High-water mark of the frame arena over the whole run.
    pub frame_arena_high_watermark: usize,
    /// Capacity of the frame arena.
    pub frame_arena_capacity: usize,
    /// High-water mark of the persistent arena.
    pub persistent_high_watermark: usize,
    /// Capacity of the persistent arena.
    pub persistent_capacity: usize,
}

impl Host<DylibBackend> {
    /// Builds a host over the OS dynamic linker and performs the initial
    /// module load.
    ///
    /// # Errors
    ///
    /// Fatal setup errors only; see [`SetupError`].
    pub fn new(config: &HostConfig) -> Result<Self, SetupError> {
        Self::with_backend(config, DylibBackend)
    }
}

impl<B: ModuleBackend> Host<B> {
    /// Builds a host with an explicit loader backend. Test seam.
    ///
    /// # Errors
    ///
    /// Fatal setup errors only; see [`SetupError`].
    pub fn with_backend(config: &HostConfig, backend: B) -> Result<Self, SetupError> {
        if config.persistent_arena_bytes < SURFACE_LEN {
            return Err(SetupError::ArenaTooSmall {
                got: config.persistent_arena_bytes,
                need: SURFACE_LEN,
            });
        }

        let mut persistent = Arena::new(config.persistent_arena_bytes);
        let frame_arena = Arena::new(config.frame_arena_bytes);
        let surface_offset = persistent.push(SURFACE_LEN, 1);

        let mut loader = ModuleLoader::with_backend(backend, config.module_path());
        let module = loader.load()?;

        Ok(Self {
            persistent,
            frame_arena,
            loader,
            module,
            palette: DEFAULT_PALETTE,
            surface_offset,
            state: LoopState::Running,
            frame_count: 0,
        })
    }

    /// Records a window close request. Takes effect at the top of the next
    /// frame; Terminating is absorbing.
    pub fn handle_close_requested(&mut self) {
        self.state = LoopState::Terminating;
    }

    /// Current loop state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames completed so far.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Counters for diagnostics.
    #[must_use]
    pub fn stats(&self) -> HostStats {
        HostStats {
            frame_count: self.frame_count,
            frame_arena_high_watermark: self.frame_arena.high_watermark(),
            frame_arena_capacity: self.frame_arena.capacity(),
            persistent_high_watermark: self.persistent.high_watermark(),
            persistent_capacity: self.persistent.capacity(),
        }
    }
}
