//! Filesystem repository storing the pipeline document under a storage key.
//!
//! Each key maps to `<key>.json` inside a capability-restricted directory.
//! Writes go to a sibling temporary file that is renamed over the target, so
//! a reader never observes a partially written document.

use async_trait::async_trait;
use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::pipeline::{
    domain::{PipelineSnapshot, StorageKey},
    ports::{PipelineRepository, PipelineRepositoryError, PipelineRepositoryResult},
    versioning::{decode_snapshot, encode_snapshot},
};

/// Location of the pipeline document on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRepositoryConfig {
    /// Directory holding the storage files; created if missing.
    pub directory: Utf8PathBuf,
    /// Storage slot the document is written under.
    pub key: StorageKey,
}

impl FileRepositoryConfig {
    /// Creates a configuration using the default storage key.
    #[must_use]
    pub fn new(directory: impl Into<Utf8PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            key: StorageKey::default(),
        }
    }

    /// Sets the storage key.
    #[must_use]
    pub fn with_key(mut self, key: StorageKey) -> Self {
        self.key = key;
        self
    }

    /// Returns the file name the document is stored in.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.key)
    }
}

/// Filesystem-backed pipeline repository.
#[derive(Debug, Clone)]
pub struct FilePipelineRepository {
    dir: Arc<Dir>,
    file_name: String,
    write_guard: Arc<Mutex<()>>,
}

impl FilePipelineRepository {
    /// Opens (creating if needed) the configured directory.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineRepositoryError::Persistence`] when the directory
    /// cannot be created or opened.
    pub fn open(config: &FileRepositoryConfig) -> PipelineRepositoryResult<Self> {
        Dir::create_ambient_dir_all(&config.directory, ambient_authority())
            .map_err(PipelineRepositoryError::persistence)?;
        let dir = Dir::open_ambient_dir(&config.directory, ambient_authority())
            .map_err(PipelineRepositoryError::persistence)?;
        debug!(directory = %config.directory, key = %config.key, "opened pipeline storage");
        Ok(Self::from_dir(dir, &config.key))
    }

    /// Uses an already opened directory.
    #[must_use]
    pub fn from_dir(dir: Dir, key: &StorageKey) -> Self {
        Self {
            dir: Arc::new(dir),
            file_name: format!("{key}.json"),
            write_guard: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the file name the document is stored in.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    async fn run_blocking<F, T>(&self, f: F) -> PipelineRepositoryResult<T>
    where
        F: FnOnce(&Dir, &str) -> io::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || f(&dir, &file_name))
            .await
            .map_err(PipelineRepositoryError::persistence)?
            .map_err(PipelineRepositoryError::persistence)
    }
}

#[async_trait]
impl PipelineRepository for FilePipelineRepository {
    async fn load(&self) -> PipelineRepositoryResult<Option<PipelineSnapshot>> {
        let contents = self
            .run_blocking(|dir, file_name| match dir.read_to_string(file_name) {
                Ok(contents) => Ok(Some(contents)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err),
            })
            .await?;

        let Some(raw) = contents else {
            debug!(file = %self.file_name, "no stored pipeline document");
            return Ok(None);
        };
        let snapshot = decode_snapshot(&raw)?;
        debug!(
            file = %self.file_name,
            candidates = snapshot.candidates().len(),
            "loaded pipeline document"
        );
        Ok(Some(snapshot))
    }

    async fn save(&self, snapshot: &PipelineSnapshot) -> PipelineRepositoryResult<()> {
        let encoded = encode_snapshot(snapshot)?;
        let candidate_count = snapshot.candidates().len();
        let _guard = self.write_guard.lock().await;
        self.run_blocking(move |dir, file_name| {
            let temp_name = format!("{file_name}.tmp");
            dir.write(&temp_name, encoded.as_bytes())?;
            dir.rename(&temp_name, dir, file_name)
        })
        .await?;
        debug!(file = %self.file_name, candidates = candidate_count, "saved pipeline document");
        Ok(())
    }
}
