use super::VaultBackend;
use crate::error::{Result, VaultError};
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    root: PathBuf,
    file_ext: String,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_ext: ".md".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    fn note_filename(&self, title: &str) -> String {
        format!("{}{}", title, self.file_ext)
    }

    fn title_from_filename<'a>(&self, name: &'a str) -> Option<&'a str> {
        if name.starts_with('.') {
            return None;
        }
        name.strip_suffix(self.file_ext.as_str())
            .filter(|stem| !stem.is_empty())
    }
}

impl VaultBackend for FsBackend {
    fn ensure_vault(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(VaultError::Io)?;
            log::debug!("created vault at {}", self.root.display());
        }
        Ok(())
    }

    fn list_titles(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut titles = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(VaultError::Io)? {
            let entry = entry.map_err(VaultError::Io)?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Some(title) = path
                .file_name()
                .and_then(|s| s.to_str())
                .and_then(|name| self.title_from_filename(name))
            {
                titles.push(title.to_string());
            }
        }
        // read_dir order is platform dependent
        titles.sort();
        Ok(titles)
    }

    fn read_note(&self, title: &str) -> Result<Option<Vec<u8>>> {
        match fs::read(self.note_path(title)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(VaultError::Io(e)),
        }
    }

    fn note_exists(&self, title: &str) -> Result<bool> {
        self.note_path(title).try_exists().map_err(VaultError::Io)
    }

    fn write_note(&self, title: &str, content: &str) -> Result<()> {
        self.ensure_vault()?;
        let target_path = self.note_path(title);

        // Atomic write
        let tmp_path = self.root.join(format!(".note-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(VaultError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &target_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(VaultError::Io(e));
        }
        Ok(())
    }

    fn delete_note(&self, title: &str) -> Result<()> {
        match fs::remove_file(self.note_path(title)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(VaultError::Io(e)),
        }
    }

    fn note_path(&self, title: &str) -> PathBuf {
        self.root.join(self.note_filename(title))
    }

    fn modified_at(&self, title: &str) -> Result<Option<DateTime<Utc>>> {
        match fs::metadata(self.note_path(title)) {
            Ok(meta) => Ok(meta.modified().ok().map(DateTime::<Utc>::from)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(VaultError::Io(e)),
        }
    }
}
