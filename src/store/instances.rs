//! File-backed store for widget instance settings

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::widget::InstanceRecord;

use super::InstanceStore;

/// Keeps every instance record of the widget in a single JSON object keyed by
/// instance number. A missing file reads as an empty store.
pub struct JsonInstanceStore {
    path: PathBuf,
    records: BTreeMap<u32, InstanceRecord>,
}

impl JsonInstanceStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!("Opened instance store {} ({} records)", path.display(), records.len());
        Ok(Self { path, records })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl InstanceStore for JsonInstanceStore {
    fn load(&self, number: u32) -> Result<Option<InstanceRecord>> {
        Ok(self.records.get(&number).cloned())
    }

    fn save(&mut self, number: u32, record: &InstanceRecord) -> Result<()> {
        self.records.insert(number, record.clone());
        self.flush()
    }

    fn remove(&mut self, number: u32) -> Result<()> {
        if self.records.remove(&number).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
