//! Browser `localStorage` credential persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the session store's [`CredentialStore`] with `localStorage["token"]`
//! so a reload can restore the session. Native builds have no storage: loads
//! find nothing and saves fail.

#[cfg(feature = "csr")]
use session::TOKEN_STORAGE_KEY;
use session::{CredentialStore, StorageError};

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

/// [`CredentialStore`] over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentialStore;

impl CredentialStore for BrowserCredentialStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage().ok()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
            if raw.trim().is_empty() { None } else { Some(raw) }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(TOKEN_STORAGE_KEY, token).map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(StorageError::Unavailable("not available outside the browser".to_owned()))
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            match local_storage() {
                Ok(storage) => {
                    if let Err(e) = storage.remove_item(TOKEN_STORAGE_KEY) {
                        log::warn!("failed to clear stored credential: {e:?}");
                    }
                }
                Err(e) => log::warn!("{e}"),
            }
        }
    }
}
