//! Hint cache: per-number lists of generated hints, written once and read on every replay.
//!
//! The registry receives the cache as an injected `Arc<dyn HintCache>`.
//! Entries hold the unfiltered hint list; sampling happens on the way out.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use tracing::{debug, info, instrument};

use crate::domain::Hint;
use crate::error::CacheError;

pub trait HintCache: Send + Sync {
  fn lookup(&self, number: i64) -> Option<Vec<Hint>>;

  /// Record the hint list of `number`. Storing an existing number again replaces it.
  fn store(&self, number: i64, hints: &[Hint]) -> Result<(), CacheError>;
}

/// Process-local cache; the default when no cache file is configured.
#[derive(Default)]
pub struct MemoryHintCache {
  entries: RwLock<HashMap<i64, Vec<Hint>>>,
}

impl MemoryHintCache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
  }
}

impl HintCache for MemoryHintCache {
  fn lookup(&self, number: i64) -> Option<Vec<Hint>> {
    self.entries.read().unwrap_or_else(PoisonError::into_inner).get(&number).cloned()
  }

  fn store(&self, number: i64, hints: &[Hint]) -> Result<(), CacheError> {
    self.entries
      .write()
      .unwrap_or_else(PoisonError::into_inner)
      .insert(number, hints.to_vec());
    Ok(())
  }
}

/// JSON document on disk mapping each number to its hint list.
///
/// The whole document is held in memory and rewritten (temp file + rename) on every store.
pub struct FileHintCache {
  path: PathBuf,
  entries: RwLock<BTreeMap<i64, Vec<Hint>>>,
}

impl FileHintCache {
  /// Open the cache at `path`, starting empty when the file does not exist yet.
  #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
  pub fn open(path: impl AsRef<Path>) -> Result<Self, CacheError> {
    let path = path.as_ref().to_path_buf();
    let entries = match std::fs::read_to_string(&path) {
      Ok(s) => serde_json::from_str::<BTreeMap<i64, Vec<Hint>>>(&s)?,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
      Err(e) => return Err(e.into()),
    };
    info!(target: "hints", path = %path.display(), numbers = entries.len(), "Hint cache file opened");
    Ok(Self { path, entries: RwLock::new(entries) })
  }

  fn persist(&self, entries: &BTreeMap<i64, Vec<Hint>>) -> Result<(), CacheError> {
    let body = serde_json::to_string_pretty(entries)?;
    let tmp = self.path.with_extension("json.tmp");
    std::fs::write(&tmp, body)?;
    std::fs::rename(&tmp, &self.path)?;
    Ok(())
  }
}

impl HintCache for FileHintCache {
  fn lookup(&self, number: i64) -> Option<Vec<Hint>> {
    self.entries.read().unwrap_or_else(PoisonError::into_inner).get(&number).cloned()
  }

  fn store(&self, number: i64, hints: &[Hint]) -> Result<(), CacheError> {
    let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
    entries.insert(number, hints.to_vec());
    self.persist(&entries)?;
    debug!(target: "hints", number, hints = hints.len(), "Hint cache entry written");
    Ok(())
  }
}
