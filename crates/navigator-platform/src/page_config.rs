//! Optional configuration override supplied by the host page as
//! `window.NAVIGATOR_CONFIG = { history_window: 4, llm: { ... } }`.

use gloo_utils::format::JsValueSerdeExt;
use wasm_bindgen::JsValue;

use navigator_types::{config::NavigatorConfig, NavigatorError, Result};

pub const CONFIG_GLOBAL: &str = "NAVIGATOR_CONFIG";

/// `Ok(None)` when the page defines no override.
pub fn load_page_config() -> Result<Option<NavigatorConfig>> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };

    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| NavigatorError::JsInterop(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }

    let config = if let Some(json) = value.as_string() {
        NavigatorConfig::from_json(&json)?
    } else {
        let config: NavigatorConfig = value.into_serde()?;
        config.validate()?;
        config
    };

    log::info!(
        "Page config override: model {}, history window {}",
        config.llm.model,
        config.history_window
    );
    Ok(Some(config))
}
