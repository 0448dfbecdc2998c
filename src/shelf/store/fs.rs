use super::{decode_books, encode_books, StorageBackend};
use crate::error::{Result, ShelfError};
use crate::model::Book;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const REQUIRED_EXT: &str = "json";

pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Bind to `path`, creating the file (and its parent directories) if missing.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        if !has_required_ext(&path) {
            return Err(ShelfError::UnsupportedFormat(path));
        }

        let backend = Self { path };
        if !backend.path.exists() {
            backend.ensure_dir(&backend.parent_dir())?;
            backend.save(&[])?;
            info!("Created empty book store at {}", backend.path.display());
        }
        Ok(backend)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "books.json".to_string());
        self.parent_dir()
            .join(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

fn has_required_ext(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(REQUIRED_EXT))
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<Vec<Book>> {
        let content = fs::read(&self.path).map_err(ShelfError::Io)?;
        let books = decode_books(&content, &self.location())?;
        debug!("Loaded {} book(s) from {}", books.len(), self.path.display());
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> Result<()> {
        let content = encode_books(books)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShelfError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShelfError::Io(e));
        }

        debug!("Saved {} book(s) to {}", books.len(), self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
