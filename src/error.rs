use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("{0} not available")]
    Missing(&'static str),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        BrowserError::Js(message)
    }
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported file type '{0}' (allowed: py, java, cpp, js, txt)")]
    UnsupportedExtension(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(String),

    #[error("history limit {value} outside {min}..={max}")]
    HistoryLimit { value: usize, min: usize, max: usize },

    #[error("unknown log level '{0}'")]
    LogLevel(String),
}
