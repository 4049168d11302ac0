use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;
use crate::types::{Language, Theme};

/// Name of the optional global object the host page can define to override defaults.
pub const WINDOW_KEY: &str = "codeConverterConfig";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub history_limit: usize,
    pub history_limit_min: usize,
    pub history_limit_max: usize,
    pub default_from: Language,
    pub default_to: Language,
    pub theme: Theme,
    pub log_level: String,
    pub toast_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: 10,
            history_limit_min: 3,
            history_limit_max: 30,
            default_from: Language::Python,
            default_to: Language::JavaScript,
            theme: Theme::Light,
            log_level: "info".to_string(),
            toast_ms: 2500,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        let config: Self = serde_wasm_bindgen::from_value(value)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `window.codeConverterConfig`, falling back to defaults when absent or invalid.
    pub fn load() -> Self {
        let value = web_sys::window()
            .and_then(|w| js_sys::Reflect::get(&w, &JsValue::from_str(WINDOW_KEY)).ok())
            .filter(|v| !v.is_undefined() && !v.is_null());

        match value {
            None => Self::default(),
            Some(value) => Self::from_js(value).unwrap_or_else(|e| {
                log::warn!("ignoring {}: {}", WINDOW_KEY, e);
                Self::default()
            }),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.history_limit_min, self.history_limit_max);
        if min == 0 || min > max || !(min..=max).contains(&self.history_limit) {
            return Err(ConfigError::HistoryLimit { value: self.history_limit, min, max });
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn clamp_history_limit(&self, value: usize) -> usize {
        value.clamp(self.history_limit_min, self.history_limit_max)
    }
}
