//! # Load/Save Controller
//!
//! [`ConfigFile`] ties a [`ConfigModel`] to a [`Storage`] handle and a path,
//! and owns the [`Document`] in between.
//!
//! ## Lifecycle
//!
//! ```text
//!   Unloaded ──load()──▶ Loaded ──save()──▶ Loaded
//!      │
//!      └──load(), file missing──▶ LoadedEmpty ──save()──▶ Loaded
//! ```
//!
//! ## Failure Policy
//!
//! Two conditions are expected during a first run or an installation and are
//! absorbed here:
//!
//! - **Missing file on load**: the document becomes empty, `is_loaded()`
//!   reports `false`, and the model is still fully usable.
//! - **Permission denied on save**: logged, reported as `Ok(false)`, and the
//!   in-memory document is left as it was so the caller can retry.
//!
//! Everything else surfaces as [`Error::ReadFailure`] or
//! [`Error::WriteFailure`]. The whole text is rendered before anything is
//! written, so a failed save never produces a truncated file by itself.

use crate::attributes::{AttributeDef, AttributeValue, ConfigModel};
use crate::document::Document;
use crate::error::{Error, Result};
use crate::parser::{parse, serialize};
use crate::store::{FsStorage, Storage};
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Where a [`ConfigFile`] is in its load/save lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loaded,
    /// `load()` found no file; the document is empty but usable.
    LoadedEmpty,
}

/// A configuration file of model `M`, read and written through `S`.
#[derive(Debug)]
pub struct ConfigFile<M: ConfigModel, S: Storage = FsStorage> {
    storage: S,
    path: PathBuf,
    document: Document,
    state: LoadState,
    _model: PhantomData<M>,
}

impl<M: ConfigModel, S: Storage> ConfigFile<M, S> {
    pub fn new(storage: S, path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            path: path.into(),
            document: Document::new(),
            state: LoadState::Unloaded,
            _model: PhantomData,
        }
    }

    pub fn with_default_path(storage: S) -> Self {
        Self::new(storage, M::DEFAULT_PATH)
    }

    /// Instantiates and loads in one call. A missing file is not an error.
    pub fn open(storage: S, path: impl Into<PathBuf>) -> Result<Self> {
        let mut file = Self::new(storage, path);
        file.load()?;
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// True only after a load (or save) that actually found the file.
    pub fn is_loaded(&self) -> bool {
        self.document.is_loaded()
    }

    /// Replaces the document with the file's content.
    pub fn load(&mut self) -> Result<()> {
        match self.storage.read_to_string(&self.path) {
            Ok(text) => {
                self.document.replace_all(parse(&text));
                self.document.set_loaded(true);
                self.state = LoadState::Loaded;
                tracing::debug!(
                    model = M::NAME,
                    path = %self.path.display(),
                    entries = self.document.len(),
                    "Loaded configuration"
                );
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    model = M::NAME,
                    "{} couldn't be loaded. Probably the file does not exist yet.",
                    self.path.display()
                );
                self.document.clear();
                self.document.set_loaded(false);
                self.state = LoadState::LoadedEmpty;
                Ok(())
            }
            Err(source) => Err(Error::ReadFailure {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Writes the document, creating the parent directory first if needed.
    ///
    /// Returns `Ok(false)` when the write was refused for lack of permission.
    pub fn save(&mut self) -> Result<bool> {
        let text = serialize(&self.document);

        match self.write_text(&text) {
            Ok(()) => {
                self.document.set_loaded(true);
                self.state = LoadState::Loaded;
                tracing::debug!(
                    model = M::NAME,
                    path = %self.path.display(),
                    bytes = text.len(),
                    "Saved configuration"
                );
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                tracing::info!(
                    model = M::NAME,
                    "Permission denied when writing to {}",
                    self.path.display()
                );
                Ok(false)
            }
            Err(source) => Err(Error::WriteFailure {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_text(&self, text: &str) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.storage.is_dir(dir) {
                tracing::debug!(dir = %dir.display(), "Creating missing directory");
                self.storage.create_dir_all(dir)?;
            }
        }
        self.storage.write(&self.path, text)
    }

    /// The document as it would be written by [`save`](Self::save).
    pub fn to_text(&self) -> String {
        serialize(&self.document)
    }

    /// Effective value of attribute `name`.
    pub fn get(&self, name: &str) -> Result<&str> {
        Ok(M::attribute(name)?.read(&self.document))
    }

    /// Stores `value` for attribute `name`.
    ///
    /// Values must fit on one line and carry no surrounding whitespace, since
    /// neither would survive a save and reload.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let def = M::attribute(name)?;
        let value = value.into();
        check_line_value(def, &value)?;
        def.write(&mut self.document, value);
        Ok(())
    }

    /// Like [`set`](Self::set), but runs the model's validation first.
    pub fn set_checked(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let def = M::attribute(name)?;
        let value = value.into();
        check_line_value(def, &value)?;
        M::validate(def, &value)?;
        def.write(&mut self.document, value);
        Ok(())
    }

    /// Removes the key behind `name`. Returns whether it was present.
    pub fn unset(&mut self, name: &str) -> Result<bool> {
        Ok(M::attribute(name)?.clear(&mut self.document))
    }

    /// Every declared attribute with its effective value, in table order.
    pub fn attributes(&self) -> Vec<AttributeValue> {
        M::ATTRIBUTES
            .iter()
            .map(|def| def.snapshot(&self.document))
            .collect()
    }

    /// Keys present in the file that no attribute maps to, in file order.
    pub fn unknown_keys(&self) -> Vec<&str> {
        self.document
            .keys()
            .filter(|key| !M::is_mapped_key(key))
            .collect()
    }
}

fn check_line_value(def: &AttributeDef, value: &str) -> Result<()> {
    if value.contains(['\r', '\n']) || value.trim() != value {
        return Err(Error::InvalidValue {
            attribute: def.name,
            value: value.to_string(),
        });
    }
    Ok(())
}
