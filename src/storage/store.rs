use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Listing body used when the root holds no files or can't be read.
pub const NO_FILES_PLACEHOLDER: &str = "no files on server";

/// Result of [`FileStore::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// The root directory was created
    Created,
    /// Something already existed at the root path
    AlreadyExists,
}

/// Read-only access to the storage root.
///
/// Cheap to clone; every connection task gets its own copy. Nothing is cached,
/// each listing and read goes to disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory. An existing entry is not an error.
    pub async fn init(&self) -> anyhow::Result<InitOutcome> {
        match tokio::fs::create_dir(&self.root).await {
            Ok(()) => Ok(InitOutcome::Created),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(InitOutcome::AlreadyExists),
            Err(e) => Err(e)
                .with_context(|| format!("can't create directory {}", self.root.display())),
        }
    }

    /// Names of the non-directory entries directly inside the root, sorted.
    ///
    /// Symlinks are reported by their own type and not followed. A root that
    /// can't be read yields an empty list.
    pub async fn list(&self) -> Vec<String> {
        match self.read_names().await {
            Ok(mut names) => {
                names.sort();
                names
            }
            Err(e) => {
                tracing::error!(root = %self.root.display(), "can't list storage root: {}", e);
                Vec::new()
            }
        }
    }

    async fn read_names(&self) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;

        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        Ok(names)
    }

    /// Listing response body: space-joined names, or the placeholder.
    pub async fn listing_body(&self) -> String {
        let names = self.list().await;
        if names.is_empty() {
            NO_FILES_PLACEHOLDER.to_string()
        } else {
            names.join(" ")
        }
    }

    /// Path a resource name resolves to.
    ///
    /// This is a plain `<root>/<name>` string join: a leading `/` in `name`
    /// stays under the root, but `..` segments are not rejected and can
    /// escape it.
    pub fn resolve(&self, name: &str) -> PathBuf {
        let mut path = OsString::from(self.root.as_os_str());
        path.push("/");
        path.push(name);
        PathBuf::from(path)
    }

    /// Reads a whole file from the root.
    pub async fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        tokio::fs::read(self.resolve(name)).await
    }
}
