use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Failures inside the page features. None of these reach the visitor; the
/// wiring layer logs them and disables the affected feature.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("failed to fetch {url}: HTTP {status}")]
    FetchStatus { url: String, status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("could not parse markup: {0}")]
    Markup(String),

    #[error("storage write failed: {0}")]
    Storage(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|err| String::from(err.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        SiteError::Dom(message)
    }
}
