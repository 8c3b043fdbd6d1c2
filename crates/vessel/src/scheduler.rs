//! # Frame Scheduler
//!
//! One iteration of the host's main loop, as a method on the host context.
//! The platform layer (winit, in the binary) drains OS events and calls
//! [`Host::run_frame`] once per iteration; everything between "events
//! drained" and "frame presented" happens here, in strict sequence, on one
//! thread, with no suspension point.

use tracing::{info, warn};
use vessel_loader::{ModuleBackend, Tickable};
use vessel_shared::{letterbox, FrameLink, PaletteFrame, Viewport, PALETTE_LEN, SURFACE_LEN};

use crate::host::Host;

/// Frame loop state. Terminating is absorbing: once entered, every further
/// [`Host::run_frame`] reports [`FrameOutcome::ShuttingDown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Normal operation; frames are being produced.
    Running,
    /// A close request was received; the loop should exit and tear down.
    Terminating,
}

/// What one call to [`Host::run_frame`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The module ticked and a frame was submitted for presentation.
    Presented,
    /// The module ticked but the surface had zero area; nothing was drawn.
    /// The platform layer should yield the time slice instead of spinning.
    Skipped,
    /// The host is Terminating; the platform layer should exit its loop.
    ShuttingDown,
}

/// The presentation seam. The production implementation is the wgpu palette
/// renderer; tests install a recorder.
pub trait PresentTarget {
    /// Presents one frame of draw state into the given viewport.
    ///
    /// # Errors
    ///
    /// Presentation failure is a recoverable runtime condition: the
    /// scheduler reports it and the loop continues, since a single dropped
    /// frame should not end the session.
    fn present(&mut self, frame: &PaletteFrame<'_>, viewport: Viewport) -> Result<(), PresentError>;
}

/// A failed presentation, already detached from whatever GPU error produced
/// it; the scheduler only ever reports these.
#[derive(Debug, thiserror::Error)]
#[error("presentation failed: {0}")]
pub struct PresentError(pub String);

impl<B: ModuleBackend> Host<B> {
    /// Runs one frame: reload poll, arena reset, module tick, present.
    ///
    /// `client_width`/`client_height` are the window's current client area;
    /// zero area (minimized) skips rendering entirely. The module is ticked
    /// exactly once per call, synchronously; no pointer it receives through
    /// the link is valid after the call returns.
    pub fn run_frame(
        &mut self,
        client_width: u32,
        client_height: u32,
        target: &mut dyn PresentTarget,
    ) -> FrameOutcome {
        if self.state == LoopState::Terminating {
            return FrameOutcome::ShuttingDown;
        }

        if self.loader.check_for_update() {
            info!("module binary changed on disk, reloading");
            match self.loader.reload(&mut self.module) {
                Ok(()) => info!("module reloaded"),
                Err(e) => warn!(error = %e, "module reload failed, keeping previous module"),
            }
        }

        self.frame_arena.clear();

        // Steady idle frame: the surface enters every tick as palette entry
        // 0; a module that draws nothing presents solid background.
        self.persistent
            .slice_mut(self.surface_offset, SURFACE_LEN)
            .fill(0);

        let mut link = FrameLink {
            frame_memory: self.frame_arena.base_ptr(),
            frame_capacity: self.frame_arena.remaining(),
            surface_indices: self
                .persistent
                .slice_mut(self.surface_offset, SURFACE_LEN)
                .as_mut_ptr(),
            surface_len: SURFACE_LEN,
            palette: self.palette.as_mut_ptr(),
            palette_len: PALETTE_LEN,
        };
        self.module.tick(&mut link);
        self.frame_count += 1;

        let viewport = letterbox(client_width, client_height);
        if viewport.is_empty() {
            return FrameOutcome::Skipped;
        }

        let frame = PaletteFrame::new(
            self.persistent.slice_mut(self.surface_offset, SURFACE_LEN),
            &self.palette,
        );
        match target.present(&frame, viewport) {
            Ok(()) => FrameOutcome::Presented,
            Err(e) => {
                // A dropped frame is reported, never fatal; any later frame
                // may recover.
                warn!(error = %e, "presentation failed, continuing");
                FrameOutcome::Presented
            }
        }
    }
}
