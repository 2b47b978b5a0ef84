//! Secret store adapters.
//!
//! In the browser the host page defines `window.NAVIGATOR_SECRETS`
//! (e.g. from an untracked `secrets.js`) before the WASM module starts.

use std::collections::HashMap;

use wasm_bindgen::JsValue;

use navigator_core::ports::SecretPort;
use navigator_types::{NavigatorError, Result};

pub const SECRETS_GLOBAL: &str = "NAVIGATOR_SECRETS";

/// Reads secrets from a plain object on `window`.
pub struct WindowSecrets {
    global: String,
}

impl WindowSecrets {
    pub fn new() -> Self {
        Self::with_global(SECRETS_GLOBAL)
    }

    pub fn with_global(global: impl Into<String>) -> Self {
        Self {
            global: global.into(),
        }
    }
}

impl Default for WindowSecrets {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretPort for WindowSecrets {
    fn get_secret(&self, name: &str) -> Result<Option<String>> {
        let window = web_sys::window()
            .ok_or_else(|| NavigatorError::JsInterop("no window object".to_string()))?;

        let secrets = js_sys::Reflect::get(&window, &JsValue::from_str(&self.global))
            .map_err(|e| NavigatorError::JsInterop(format!("{:?}", e)))?;
        if secrets.is_undefined() || secrets.is_null() {
            return Ok(None);
        }

        let value = js_sys::Reflect::get(&secrets, &JsValue::from_str(name))
            .map_err(|e| NavigatorError::JsInterop(format!("{:?}", e)))?;
        Ok(value.as_string())
    }

    fn backend_name(&self) -> &str {
        "window"
    }
}

/// Fixed in-memory secrets.
#[derive(Default)]
pub struct MemorySecrets {
    values: HashMap<String, String>,
}

impl MemorySecrets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl SecretPort for MemorySecrets {
    fn get_secret(&self, name: &str) -> Result<Option<String>> {
        Ok(self.values.get(name).cloned())
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}
