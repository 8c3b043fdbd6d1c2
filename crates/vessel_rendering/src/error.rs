//! # Rendering Error Types

use thiserror::Error;

/// Errors from GPU setup and presentation.
///
/// Setup variants are fatal to the host; [`RenderError::Present`] is a
/// recoverable per-frame condition.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Creating the rendering surface for the window failed.
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(String),

    /// No GPU adapter compatible with the surface was found.
    #[error("no suitable GPU adapter found")]
    NoAdapter,

    /// Acquiring a device from the adapter failed.
    #[error("failed to acquire GPU device: {0}")]
    RequestDevice(String),

    /// Presenting a frame failed in a way reconfiguring does not cover.
    #[error("failed to present frame: {0}")]
    Present(wgpu::SurfaceError),
}
