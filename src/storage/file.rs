// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durable storage backed by a JSON object on disk.
//!
//! Each write rewrites the whole file through a temporary sibling and a
//! rename, so readers never observe a partially written map.
//!
//! I/O is synchronous `std::fs`. Every credential lookup reads the file, so
//! each backend request pays one small blocking read on the calling task.
//! Keep the store on local disk.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::KeyValueStore;
use crate::error::{PortalError, Result};

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(PortalError::Storage(format!(
                    "read {}: {e}",
                    self.path.display()
                )))
            }
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw)
            .map_err(|e| PortalError::Storage(format!("parse {}: {e}", self.path.display())))
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                PortalError::Storage(format!("create {}: {e}", parent.display()))
            })?;
        }

        let body = serde_json::to_string_pretty(entries)
            .map_err(|e| PortalError::Storage(format!("serialize store: {e}")))?;

        let tmp = self.temp_path();
        fs::write(&tmp, body)
            .map_err(|e| PortalError::Storage(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| PortalError::Storage(format!("rename {}: {e}", tmp.display())))
    }

    /// `<file>.<pid>.tmp` next to the store, distinct from the store path
    /// whatever its extension.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("store"));
        name.push(format!(".{}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }

    fn modify(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> bool) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| PortalError::Storage("store lock poisoned".to_string()))?;

        let mut entries = self.load()?;
        if f(&mut entries) {
            self.save(&entries)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.modify(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.modify(|entries| entries.remove(key).is_some())
    }
}
