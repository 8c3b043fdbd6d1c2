//! Wires the wgpu presenter into the scheduler's presentation seam.

use vessel_rendering::PaletteRenderer;
use vessel_shared::{PaletteFrame, Viewport};

use crate::scheduler::{PresentError, PresentTarget};

impl PresentTarget for PaletteRenderer {
    fn present(&mut self, frame: &PaletteFrame<'_>, viewport: Viewport) -> Result<(), PresentError> {
        PaletteRenderer::present(self, frame, viewport).map_err(|e| PresentError(e.to_string()))
    }
}
