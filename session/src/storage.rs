//! Durable credential storage contract.
//!
//! One key, one raw token string; absence means logged out. The browser
//! client backs this with `localStorage`, the CLI with a token file.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::StorageError;

/// Key under which the bearer token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Persistence for the session credential.
pub trait CredentialStore {
    /// Read the stored token, if any. Blank values count as absent.
    fn load(&self) -> Option<String>;

    /// Overwrite the stored token.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the write cannot be completed.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Remove the stored token. Removing an absent token is not an error.
    fn clear(&self);
}

/// In-process store. Clones share the same slot, which lets tests simulate a
/// reload by building a second store over the same storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryCredentialStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(token.to_owned()))) }
    }

    /// Current raw value, including blank values `load` would hide.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone().filter(|token| !token.trim().is_empty())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}
