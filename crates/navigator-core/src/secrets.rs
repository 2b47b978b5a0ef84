use navigator_types::{config::API_KEY_SECRET, NavigatorError, Result};

use crate::ports::SecretPort;

/// Fetch the API credential. Absence is fatal at startup.
pub fn load_api_key(store: &dyn SecretPort) -> Result<String> {
    match store.get_secret(API_KEY_SECRET)? {
        Some(key) if !key.trim().is_empty() => {
            log::info!("Loaded {} from {} secrets", API_KEY_SECRET, store.backend_name());
            Ok(key.trim().to_string())
        }
        _ => {
            log::error!("{} is not set in {} secrets", API_KEY_SECRET, store.backend_name());
            Err(NavigatorError::MissingCredential(API_KEY_SECRET.to_string()))
        }
    }
}
