//! # Load Protocol
//!
//! The ordered four-step load, the once-per-frame update poll, and the
//! load-then-swap reload.

use std::env::consts::{DLL_PREFIX, DLL_SUFFIX};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, info};
use vessel_shared::{MODULE_STEM, TICK_SYMBOL};

use crate::backend::{DylibBackend, ModuleBackend};
use crate::error::{LoadError, LoadResult};
use crate::module::GameModule;

/// Owns the module file paths and drives the load protocol.
///
/// Copies are generation-numbered (`vessel_game_loaded.0.so`,
/// `vessel_game_loaded.1.so`, ...) so a fresh load never has to overwrite the
/// copy the still-installed module's image is mapped from. Stale copies are
/// deleted once their image is unloaded.
pub struct ModuleLoader<B: ModuleBackend = DylibBackend> {
    backend: B,
    /// Canonical module path; the build tool rewrites this file freely.
    source_path: PathBuf,
    /// Modification time most recently *observed* on the canonical file,
    /// whether or not the corresponding load succeeded. Consuming the
    /// observation here is what makes [`ModuleLoader::check_for_update`]
    /// fire exactly once per replacement.
    last_seen: Option<SystemTime>,
    /// Counter for loader-owned copy filenames.
    generation: u64,
}

/// The platform filename of the game module, e.g. `libvessel_game.so` on
/// Linux or `vessel_game.dll` on Windows, relative to the working directory.
#[must_use]
pub fn platform_module_path() -> PathBuf {
    PathBuf::from(format!("{DLL_PREFIX}{MODULE_STEM}{DLL_SUFFIX}"))
}

impl ModuleLoader<DylibBackend> {
    /// Creates a loader over the OS dynamic linker for the module at `source_path`.
    #[must_use]
    pub fn new(source_path: PathBuf) -> Self {
        Self::with_backend(DylibBackend, source_path)
    }
}

impl<B: ModuleBackend> ModuleLoader<B> {
    /// Creates a loader with an explicit backend. Test seam.
    #[must_use]
    pub fn with_backend(backend: B, source_path: PathBuf) -> Self {
        Self {
            backend,
            source_path,
            last_seen: None,
            generation: 0,
        }
    }

    /// The canonical module path this loader watches.
    #[must_use]
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Runs the full load protocol:
    ///
    /// 1. copy the canonical file to a loader-owned, generation-numbered name
    /// 2. map the copy as an executable image
    /// 3. resolve the tick symbol, unloading the image if it is absent
    /// 4. record the *canonical* file's modification time as the version marker
    ///
    /// A failure at any step releases everything the attempt acquired and
    /// returns without touching any previously installed module.
    pub fn load(&mut self) -> LoadResult<GameModule<B::Image>> {
        let copy_path = self.next_copy_path();

        fs::copy(&self.source_path, &copy_path).map_err(|source| LoadError::Copy {
            from: self.source_path.clone(),
            to: copy_path.clone(),
            source,
        })?;

        let image = match self.backend.load_image(&copy_path) {
            Ok(image) => image,
            Err(e) => {
                let _ = fs::remove_file(&copy_path);
                return Err(e);
            }
        };

        let tick_fn = match self.backend.resolve_tick(&image, &copy_path, TICK_SYMBOL) {
            Ok(f) => f,
            Err(e) => {
                // No partial state survives: unload first, then drop the copy.
                drop(image);
                let _ = fs::remove_file(&copy_path);
                return Err(e);
            }
        };

        let timestamp = match source_mtime(&self.source_path) {
            Ok(t) => t,
            Err(e) => {
                drop(image);
                let _ = fs::remove_file(&copy_path);
                return Err(e);
            }
        };

        self.last_seen = Some(timestamp);
        info!(module = %self.source_path.display(), copy = %copy_path.display(), "module loaded");
        Ok(GameModule::new(image, tick_fn, timestamp, copy_path))
    }

    /// Polls the canonical file's modification time.
    ///
    /// Returns true exactly once per on-disk replacement: the observation is
    /// consumed even if the reload that follows fails, so a broken rebuild is
    /// reported once instead of every frame. Two rebuilds landing within the
    /// OS timestamp granularity can be missed; accepted limitation of polling.
    ///
    /// Unreadable metadata (file mid-replacement, deleted, permissions) means
    /// "no update this frame"; the next poll will see whatever settles.
    pub fn check_for_update(&mut self) -> bool {
        let Ok(mtime) = source_mtime_quiet(&self.source_path) else {
            return false;
        };
        match self.last_seen {
            Some(seen) if mtime > seen => {
                self.last_seen = Some(mtime);
                true
            }
            Some(_) => false,
            // Nothing was ever loaded; load(), not polling, initializes us.
            None => false,
        }
    }

    /// Replaces `current` with a freshly loaded module.
    ///
    /// Load-then-swap-then-unload-old: the old module stays installed and
    /// callable until the new one has completed the whole protocol. On
    /// failure `current` is untouched and the error is returned for the
    /// caller to report; it is never fatal to the running host.
    pub fn reload(&mut self, current: &mut GameModule<B::Image>) -> LoadResult<()> {
        let fresh = self.load()?;
        let old = std::mem::replace(current, fresh);
        let stale_copy = old.copy_path().to_path_buf();
        // Unload the old image before deleting the copy it was mapped from;
        // some platforms keep the file locked until then.
        drop(old);
        let _ = fs::remove_file(&stale_copy);
        debug!(copy = %stale_copy.display(), "stale module copy removed");
        Ok(())
    }

    fn next_copy_path(&mut self) -> PathBuf {
        let generation = self.generation;
        self.generation += 1;

        let stem = self
            .source_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(MODULE_STEM);
        let ext = self
            .source_path
            .extension()
            .and_then(|s| s.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_default();
        self.source_path
            .with_file_name(format!("{stem}_loaded.{generation}{ext}"))
    }
}

fn source_mtime(path: &Path) -> LoadResult<SystemTime> {
    source_mtime_quiet(path).map_err(|source| LoadError::Timestamp {
        path: path.to_path_buf(),
        source,
    })
}

fn source_mtime_quiet(path: &Path) -> std::io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Tickable;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use vessel_shared::FrameLink;

    /// An "image" that counts itself while mapped.
    struct FakeImage {
        live: Arc<AtomicUsize>,
    }

    impl FakeImage {
        fn map(live: &Arc<AtomicUsize>) -> Self {
            live.fetch_add(1, Ordering::SeqCst);
            Self {
                live: Arc::clone(live),
            }
        }
    }

    impl Drop for FakeImage {
        fn drop(&mut self) {
            self.live.fetch_sub(1, Ordering::SeqCst);
        }
    }

    /// Backend whose linker behavior is scripted by the test.
    struct FakeBackend {
        live_images: Arc<AtomicUsize>,
        resolve_succeeds: Arc<std::sync::atomic::AtomicBool>,
        tick_fn: vessel_shared::TickFn,
    }

    unsafe extern "C" fn noop_tick(_link: *mut FrameLink) {}

    impl FakeBackend {
        fn new() -> Self {
            Self {
                live_images: Arc::new(AtomicUsize::new(0)),
                resolve_succeeds: Arc::new(std::sync::atomic::AtomicBool::new(true)),
                tick_fn: noop_tick,
            }
        }
    }

    impl ModuleBackend for FakeBackend {
        type Image = FakeImage;

        fn load_image(&self, path: &Path) -> LoadResult<FakeImage> {
            if path.exists() {
                Ok(FakeImage::map(&self.live_images))
            } else {
                Err(LoadError::ImageLoad {
                    path: path.to_path_buf(),
                    reason: "no such file".into(),
                })
            }
        }

        fn resolve_tick(
            &self,
            _image: &FakeImage,
            path: &Path,
            symbol: &str,
        ) -> LoadResult<vessel_shared::TickFn> {
            if self.resolve_succeeds.load(Ordering::SeqCst) {
                Ok(self.tick_fn)
            } else {
                Err(LoadError::MissingSymbol {
                    path: path.to_path_buf(),
                    symbol: symbol.to_owned(),
                    reason: "symbol not found".into(),
                })
            }
        }
    }

    fn module_file(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("vessel_game.so");
        fs::write(&path, b"not really a shared object").unwrap();
        path
    }

    /// Pushes the module file's mtime strictly past the loader's marker.
    fn touch_newer(path: &Path) {
        let newer = SystemTime::now() + Duration::from_secs(5);
        let file = fs::OpenOptions::new().write(true).open(path).unwrap();
        file.set_modified(newer).unwrap();
    }

    #[test]
    fn test_load_copies_then_maps() {
        let dir = tempfile::tempdir().unwrap();
        let source = module_file(&dir);
        let backend = FakeBackend::new();
        let live = Arc::clone(&backend.live_images);
        let mut loader = ModuleLoader::with_backend(backend, source);

        let module = loader.load().unwrap();
        assert_eq!(live.load(Ordering::SeqCst), 1);
        assert!(module.copy_path().exists());
        assert_ne!(module.copy_path(), loader.source_path());

        drop(module);
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_source_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FakeBackend::new();
        let live = Arc::clone(&backend.live_images);
        let mut loader =
            ModuleLoader::with_backend(backend, dir.path().join("vessel_game.so"));

        let err = loader.load().unwrap_err();
        assert!(matches!(err, LoadError::Copy { .. }));
        assert_eq!(live.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_missing_symbol_releases_image_and_copy() {
        let dir = tempfile::tempdir().unwrap();
        let source = module_file(&dir);
        let backend = FakeBackend::new();
        backend.resolve_succeeds.store(false, Ordering::SeqCst);
        let live = Arc::clone(&backend.live_images);
        let mut loader = ModuleLoader::with_backend(backend, source.clone());

        let err = loader.load().unwrap_err();
        assert!(matches!(err, LoadError::MissingSymbol { .. }));
        // No partial state: image unloaded, copy removed, canonical untouched.
        assert_eq!(live.load(Ordering::SeqCst), 0);
        assert!(source.exists());
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("vessel_game.so")]);
    }

    #[test]
    fn test_check_for_update_fires_once_per_replacement() {
        let dir = tempfile::tempdir().unwrap();
        let source = module_file(&dir);
        let mut loader = ModuleLoader::with_backend(FakeBackend::new(), source.clone());
        let _module = loader.load().unwrap();

        assert!(!loader.check_for_update());

        touch_newer(&source);
        assert!(loader.check_for_update());
        // Observation consumed: quiet until the next replacement.
        assert!(!loader.check_for_update());
        assert!(!loader.check_for_update());
    }

    #[test]
    fn test_reload_swaps_and_releases_old() {
        let dir = tempfile::tempdir().unwrap();
        let source = module_file(&dir);
        let backend = FakeBackend::new();
        let live = Arc::clone(&backend.live_images);
        let mut loader = ModuleLoader::with_backend(backend, source.clone());

        let mut module = loader.load().unwrap();
        let old_copy = module.copy_path().to_path_buf();
        let old_stamp = module.timestamp();

        touch_newer(&source);
        assert!(loader.check_for_update());
        loader.reload(&mut module).unwrap();

        assert_eq!(live.load(Ordering::SeqCst), 1);
        assert!(module.timestamp() > old_stamp);
        assert!(!old_copy.exists());
        assert!(module.copy_path().exists());
    }

    #[test]
    fn test_failed_reload_keeps_old_module() {
        let dir = tempfile::tempdir().unwrap();
        let source = module_file(&dir);
        let backend = FakeBackend::new();
        let live = Arc::clone(&backend.live_images);
        let resolve = Arc::clone(&backend.resolve_succeeds);
        let mut loader = ModuleLoader::with_backend(backend, source.clone());

        let mut module = loader.load().unwrap();
        let old_copy = module.copy_path().to_path_buf();
        let old_stamp = module.timestamp();

        // The rebuild produced a binary without the tick symbol.
        resolve.store(false, Ordering::SeqCst);
        touch_newer(&source);
        assert!(loader.check_for_update());
        let err = loader.reload(&mut module).unwrap_err();
        assert!(matches!(err, LoadError::MissingSymbol { .. }));

        // Previous module untouched and still callable.
        assert_eq!(live.load(Ordering::SeqCst), 1);
        assert_eq!(module.timestamp(), old_stamp);
        assert_eq!(module.copy_path(), old_copy);
        let mut link = dummy_link();
        module.tick(&mut link);
    }

    fn dummy_link() -> FrameLink {
        FrameLink {
            frame_memory: std::ptr::null_mut(),
            frame_capacity: 0,
            surface_indices: std::ptr::null_mut(),
            surface_len: 0,
            palette: std::ptr::null_mut(),
            palette_len: 0,
        }
    }

    #[test]
    fn test_platform_module_path_uses_stem() {
        let path = platform_module_path();
        assert!(path.to_str().unwrap().contains(MODULE_STEM));
    }
}
