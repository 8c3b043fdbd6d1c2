//! # Dynamic-Linker Backend
//!
//! The seam between the load protocol and the OS dynamic linker. The loader
//! is generic over this trait so its protocol logic is testable without a
//! real shared library; the host installs [`DylibBackend`].

use std::path::Path;

use libloading::Library;
use vessel_shared::TickFn;

use crate::error::{LoadError, LoadResult};

/// Abstraction over the dynamic-linking facility.
pub trait ModuleBackend {
    /// An owned executable image. Dropping it unloads the image.
    type Image;

    /// Maps the file at `path` into the process as an executable image.
    fn load_image(&self, path: &Path) -> LoadResult<Self::Image>;

    /// Resolves the tick entry point from the image loaded from `path`.
    ///
    /// The returned function pointer is valid only while `image` is alive;
    /// [`crate::GameModule`] owns both and upholds that pairing.
    fn resolve_tick(&self, image: &Self::Image, path: &Path, symbol: &str) -> LoadResult<TickFn>;
}

/// Production backend over the OS dynamic linker.
#[derive(Debug, Default, Clone, Copy)]
pub struct DylibBackend;

impl ModuleBackend for DylibBackend {
    type Image = Library;

    fn load_image(&self, path: &Path) -> LoadResult<Library> {
        // SAFETY: the image is a build artifact of this workspace's own game
        // module crate; its initializers are the trivial ones Rust emits.
        unsafe { Library::new(path) }.map_err(|e| LoadError::ImageLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn resolve_tick(&self, image: &Library, path: &Path, symbol: &str) -> LoadResult<TickFn> {
        // SAFETY: the symbol's signature is fixed by the vessel_shared ABI
        // contract; a module exporting it with another signature is undefined
        // behavior on its own head, exactly as with any C plugin interface.
        let resolved = unsafe { image.get::<TickFn>(symbol.as_bytes()) };
        match resolved {
            Ok(sym) => Ok(*sym),
            Err(e) => Err(LoadError::MissingSymbol {
                path: path.to_path_buf(),
                symbol: symbol.to_owned(),
                reason: e.to_string(),
            }),
        }
    }
}
