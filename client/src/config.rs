//! Client configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment, so settings are read with
//! `option_env!` when the crate is compiled:
//!
//! - `USERDECK_API_BASE`: remote API root (default `https://reqres.in/api`)
//! - `USERDECK_API_KEY`: optional value for the `x-api-key` header
//! - `USERDECK_TOAST_MS`: toast lifetime in milliseconds (default 3000)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "https://reqres.in/api";
pub const DEFAULT_TOAST_MS: u32 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash.
    pub api_base: String,
    pub api_key: Option<String>,
    pub toast_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("USERDECK_API_BASE"),
            option_env!("USERDECK_API_KEY"),
            option_env!("USERDECK_TOAST_MS"),
        )
    }

    fn from_values(api_base: Option<&str>, api_key: Option<&str>, toast_ms: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_owned();
        let api_key = api_key.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
        let toast_ms = toast_ms
            .and_then(|v| v.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TOAST_MS);
        Self { api_base, api_key, toast_ms }
    }
}
