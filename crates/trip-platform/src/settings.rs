//! Configuration and session lookup backed by `localStorage`.
//!
//! A saved `trip:config` overrides the compiled-in defaults. The session
//! token is written by the surrounding site under `token`; this crate only
//! reads it.

use trip_types::{Result, TripError, config::TripConfig, session::SessionContext};

pub const CONFIG_STORAGE_KEY: &str = "trip:config";
pub const TOKEN_STORAGE_KEY: &str = "token";

fn local_storage() -> Result<web_sys::Storage> {
    gloo_utils::window()
        .local_storage()
        .map_err(|e| TripError::JsInterop(format!("{:?}", e)))?
        .ok_or_else(|| TripError::Config("localStorage unavailable".to_string()))
}

fn read_item(key: &str) -> Result<Option<String>> {
    local_storage()?
        .get_item(key)
        .map_err(|e| TripError::JsInterop(format!("{:?}", e)))
}

/// Parse a stored config, falling back to defaults when absent or corrupt.
pub fn decode_config(raw: Option<&str>) -> TripConfig {
    match raw {
        Some(text) => match serde_json::from_str(text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring corrupt saved config ({}), using defaults", e);
                TripConfig::default()
            }
        },
        None => TripConfig::default(),
    }
}

pub fn load_config() -> TripConfig {
    match read_item(CONFIG_STORAGE_KEY) {
        Ok(raw) => {
            if raw.is_some() {
                log::info!("Loaded saved config");
            }
            decode_config(raw.as_deref())
        }
        Err(e) => {
            log::warn!("Config storage unavailable ({}), using defaults", e);
            TripConfig::default()
        }
    }
}

pub fn save_config(config: &TripConfig) -> Result<()> {
    let text = serde_json::to_string(config)?;
    local_storage()?
        .set_item(CONFIG_STORAGE_KEY, &text)
        .map_err(|e| TripError::JsInterop(format!("{:?}", e)))
}

pub fn load_session() -> SessionContext {
    match read_item(TOKEN_STORAGE_KEY) {
        Ok(Some(token)) => SessionContext::with_token(token),
        Ok(None) => SessionContext::anonymous(),
        Err(e) => {
            log::warn!("Cannot read session token: {}", e);
            SessionContext::anonymous()
        }
    }
}
