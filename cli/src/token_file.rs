//! File-backed credential storage.
//!
//! One file, one raw token. Defaults to `<config dir>/plagiarism/token`.

#[cfg(test)]
#[path = "token_file_test.rs"]
mod token_file_test;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use session::{CredentialStore, StorageError};

/// Default token location, if the platform has a config directory.
pub fn default_token_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("plagiarism").join("token"))
}

#[derive(Clone, Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() { None } else { Some(token.to_owned()) }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not read token file");
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        }
        let mut file = open_owner_only(&self.path).map_err(|e| StorageError::Write(e.to_string()))?;
        file.write_all(token.as_bytes()).map_err(|e| StorageError::Write(e.to_string()))?;
        Ok(())
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), error = %e, "could not remove token file"),
        }
    }
}

/// Open `path` for overwrite, readable by the owner only before any byte lands.
fn open_owner_only(path: &Path) -> io::Result<fs::File> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // The creation mode does not apply to a file that already exists.
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    Ok(file)
}
