use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{PersistenceError, PersistenceResult};
use crate::surface::{Color, Surface};

/// Byte storage addressed by path
pub trait ImageStore {
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Stores images on the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore;

impl ImageStore for FileStore {
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        fs::write(path, bytes)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

/// Keeps images in memory and remembers every write, in order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: HashMap<PathBuf, Vec<u8>>,
    writes: Vec<PathBuf>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, as if it already existed
    pub fn insert(&mut self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.files.insert(path.into(), bytes);
    }

    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Paths written so far, one entry per write
    pub fn writes(&self) -> &[PathBuf] {
        &self.writes
    }

    pub fn write_count(&self, path: &Path) -> usize {
        self.writes.iter().filter(|p| p.as_path() == path).count()
    }
}

impl ImageStore for MemoryStore {
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()> {
        self.files.insert(path.to_path_buf(), bytes.to_vec());
        self.writes.push(path.to_path_buf());
        Ok(())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }
}

/// Shape of the canvas created when nothing can be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankCanvas {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl BlankCanvas {
    pub fn create(&self) -> Surface {
        Surface::new(self.width, self.height, self.background)
    }
}

/// Saves surfaces to the user-triggered target and the exit-time auto-save target
#[derive(Debug, Clone)]
pub struct Persistence<S: ImageStore = FileStore> {
    store: S,
    save_path: PathBuf,
    autosave_path: PathBuf,
}

impl<S: ImageStore> Persistence<S> {
    pub fn new(store: S, save_path: impl Into<PathBuf>, autosave_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            save_path: save_path.into(),
            autosave_path: autosave_path.into(),
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn autosave_path(&self) -> &Path {
        &self.autosave_path
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Encode `surface` and write it to `path`
    pub fn save_to(&mut self, surface: &Surface, path: &Path) -> PersistenceResult<()> {
        let bytes = surface.encode()?;
        self.store
            .write(path, &bytes)
            .map_err(|source| PersistenceError::Io {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Write to the save target
    pub fn save(&mut self, surface: &Surface) -> PersistenceResult<PathBuf> {
        let path = self.save_path.clone();
        self.save_to(surface, &path)?;
        log::info!("Saved: {}", path.display());
        Ok(path)
    }

    /// Write to the auto-save target
    pub fn autosave(&mut self, surface: &Surface) -> PersistenceResult<PathBuf> {
        let path = self.autosave_path.clone();
        self.save_to(surface, &path)?;
        log::info!("Auto-saved: {}", path.display());
        Ok(path)
    }

    /// Read and decode the image at `path`
    pub fn load(&self, path: &Path) -> PersistenceResult<Surface> {
        let bytes = self.store.read(path).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Surface::decode(&bytes)?)
    }

    /// Load the starting surface, falling back to a blank canvas.
    ///
    /// A loaded image is resampled to `resize` when given.
    pub fn load_or_blank(
        &self,
        path: Option<&Path>,
        resize: Option<(u32, u32)>,
        blank: BlankCanvas,
    ) -> Surface {
        let Some(path) = path else {
            return blank.create();
        };

        match self.load(path) {
            Ok(surface) => {
                log::info!(
                    "Loaded {} ({}x{})",
                    path.display(),
                    surface.width(),
                    surface.height()
                );
                match resize {
                    Some((width, height)) if surface.dimensions() != (width, height) => {
                        surface.resized(width, height)
                    }
                    _ => surface,
                }
            }
            Err(PersistenceError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                log::info!("No image at {}, starting with a blank canvas", path.display());
                blank.create()
            }
            Err(err) => {
                log::warn!("Could not load {}: {}; starting with a blank canvas", path.display(), err);
                blank.create()
            }
        }
    }
}
