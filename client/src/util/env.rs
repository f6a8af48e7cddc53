//! Host-injected configuration.
//!
//! The page is expected to define `window.ENV = { N8N_WEBHOOK_URL: "..." }`
//! before the WASM bundle runs. A missing object, missing key, non-string
//! value, or blank string all mean "unconfigured".

use chat::WidgetConfig;
#[cfg(feature = "csr")]
use chat::config::WEBHOOK_URL_ENV;

/// Name of the global object holding injected settings.
#[cfg(feature = "csr")]
const ENV_GLOBAL: &str = "ENV";

/// Read [`WidgetConfig`] from `window.ENV`.
pub fn read_widget_config() -> WidgetConfig {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsValue;

        let raw = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(ENV_GLOBAL)).ok())
            .filter(JsValue::is_object)
            .and_then(|env| js_sys::Reflect::get(&env, &JsValue::from_str(WEBHOOK_URL_ENV)).ok())
            .and_then(|value| value.as_string());
        WidgetConfig::from_raw(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        WidgetConfig::default()
    }
}
