//! API key lookup.
//!
//! The key comes from `GEMINI_API_KEY` when set, otherwise from the OS
//! keyring. It is never written to the config file.

use crate::error::AssistantError;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const API_KEY_ENTRY: &str = "gemini_api_key";

pub mod keyring_store {
    use crate::error::AssistantError;

    const SERVICE: &str = "infinity-timer";

    pub fn get(key: &str) -> Result<Option<String>, AssistantError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.get_password() {
            Ok(pw) => Ok(Some(pw)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(key: &str, value: &str) -> Result<(), AssistantError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        entry.set_password(value)?;
        Ok(())
    }

    pub fn delete(key: &str) -> Result<(), AssistantError> {
        let entry = keyring::Entry::new(SERVICE, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the API key: environment first, then keyring.
///
/// # Errors
/// [`AssistantError::MissingApiKey`] if neither source has one.
pub fn api_key() -> Result<String, AssistantError> {
    if let Some(key) = non_empty(std::env::var(API_KEY_ENV).ok()) {
        return Ok(key);
    }
    match keyring_store::get(API_KEY_ENTRY) {
        Ok(stored) => non_empty(stored).ok_or(AssistantError::MissingApiKey),
        Err(e) => {
            tracing::debug!(error = %e, "keyring unavailable");
            Err(AssistantError::MissingApiKey)
        }
    }
}

/// Store the API key in the OS keyring.
///
/// # Errors
/// Fails if the key is blank or the keyring rejects the write.
pub fn store_api_key(key: &str) -> Result<(), AssistantError> {
    let key = non_empty(Some(key.to_string())).ok_or(AssistantError::MissingApiKey)?;
    keyring_store::set(API_KEY_ENTRY, &key)
}

/// Remove the stored API key. Missing entries are not an error.
///
/// # Errors
/// Fails if the keyring cannot be reached.
pub fn clear_api_key() -> Result<(), AssistantError> {
    keyring_store::delete(API_KEY_ENTRY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_treated_as_missing() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("   ".into())), None);
        assert_eq!(non_empty(Some(" abc \n".into())).as_deref(), Some("abc"));
    }

    #[test]
    fn blank_key_is_not_stored() {
        assert!(matches!(
            store_api_key("  "),
            Err(AssistantError::MissingApiKey)
        ));
    }
}
