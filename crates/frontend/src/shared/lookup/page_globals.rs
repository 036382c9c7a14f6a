//! Data the server-rendered page hands to the lookup widgets through `window`.

use contracts::shared::lookup::{ContentTypeRegistry, LookupConfig};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

const CONTENT_TYPES_GLOBAL: &str = "AVAILABLE_CONTENT_TYPES";
const CONFIG_GLOBAL: &str = "LOOKUP_CONFIG";

/// `window.AVAILABLE_CONTENT_TYPES`, empty when the page defines none.
pub fn load_content_types() -> ContentTypeRegistry {
    match read_global::<ContentTypeRegistry>(CONTENT_TYPES_GLOBAL) {
        Ok(Some(registry)) => registry,
        Ok(None) => {
            log::debug!("{} not defined, generic lookups are disabled", CONTENT_TYPES_GLOBAL);
            ContentTypeRegistry::default()
        }
        Err(e) => {
            log::warn!("Could not read {}: {}", CONTENT_TYPES_GLOBAL, e);
            ContentTypeRegistry::default()
        }
    }
}

/// Embedded defaults, overridden key by key by `window.LOOKUP_CONFIG`.
pub fn load_config() -> LookupConfig {
    match read_global::<LookupConfig>(CONFIG_GLOBAL) {
        Ok(Some(config)) => {
            log::info!("Using lookup config from {}", CONFIG_GLOBAL);
            config
        }
        Ok(None) => LookupConfig::default_config(),
        Err(e) => {
            log::warn!("Could not read {}: {}", CONFIG_GLOBAL, e);
            LookupConfig::default_config()
        }
    }
}

fn read_global<T: DeserializeOwned>(name: &str) -> Result<Option<T>, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|e| format!("{e:?}"))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| e.to_string())
}
