//! Sign-in and sign-up form validation.
//!
//! The store does not re-check its inputs; these helpers are the only gate
//! between what a user typed and a network call.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::backend::AuthBackend;
use crate::error::{AuthFailure, AuthResult};
use crate::storage::CredentialStore;
use crate::store::SessionStore;

pub const MIN_PASSWORD_LEN: usize = 6;

/// First failing precondition, in the order the forms report them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Enter a valid email")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl From<ValidationError> for AuthFailure {
    fn from(err: ValidationError) -> Self {
        AuthFailure::invalid_input(err.to_string())
    }
}

/// Email and password that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Address shape `\S+@\S+\.\S+`, matched anywhere in the input.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email.split_whitespace().any(token_has_address_shape)
}

fn token_has_address_shape(token: &str) -> bool {
    let bytes = token.as_bytes();
    let Some(at) = bytes.iter().skip(1).position(|&b| b == b'@').map(|p| p + 1) else {
        return false;
    };
    bytes.iter().enumerate().any(|(i, &b)| b == b'.' && i >= at + 2 && i + 1 < bytes.len())
}

/// Validate the sign-in form.
///
/// # Errors
///
/// Returns the first failing [`ValidationError`].
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::EmailInvalid);
    }
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Validate the sign-up form.
///
/// # Errors
///
/// Returns the first failing [`ValidationError`].
pub fn validate_register_input(email: &str, password: &str, confirm: &str) -> Result<Credentials, ValidationError> {
    let credentials = validate_login_input(email, password)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(credentials)
}

/// Validate, then sign in.
///
/// # Errors
///
/// Returns an `InvalidInput` failure without contacting the backend when
/// validation fails, otherwise whatever [`SessionStore::login`] returns.
pub async fn submit_login<B, S>(store: &SessionStore<B, S>, email: &str, password: &str) -> AuthResult
where
    B: AuthBackend,
    S: CredentialStore,
{
    let input = validate_login_input(email, password)?;
    store.login(&input.email, &input.password).await
}

/// Validate, then create the account.
///
/// # Errors
///
/// Returns an `InvalidInput` failure without contacting the backend when
/// validation fails, otherwise whatever [`SessionStore::register`] returns.
pub async fn submit_register<B, S>(
    store: &SessionStore<B, S>,
    email: &str,
    password: &str,
    confirm: &str,
) -> AuthResult
where
    B: AuthBackend,
    S: CredentialStore,
{
    let input = validate_register_input(email, password, confirm)?;
    store.register(&input.email, &input.password).await
}
