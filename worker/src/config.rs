use hangman_protocol as protocol;
use worker::Env;

use crate::ProxyError;

pub const APP_ID_SECRET: &str = "DICTIONARY_APP_ID";
pub const APP_KEY_SECRET: &str = "DICTIONARY_APP_KEY";
pub const BASE_URL_VAR: &str = "DICTIONARY_BASE_URL";

/// Upstream dictionary settings read from the worker environment.
#[derive(Clone, Debug, PartialEq)]
pub struct ProxyConfig {
    pub app_id: String,
    pub app_key: String,
    pub base_url: String,
}

impl ProxyConfig {
    pub fn from_env(env: &Env) -> Result<Self, ProxyError> {
        let app_id = env
            .secret(APP_ID_SECRET)
            .map_err(|_| ProxyError::MissingCredential(APP_ID_SECRET))?
            .to_string();
        let app_key = env
            .secret(APP_KEY_SECRET)
            .map_err(|_| ProxyError::MissingCredential(APP_KEY_SECRET))?
            .to_string();
        let base_url = env
            .var(BASE_URL_VAR)
            .map(|var| var.to_string())
            .unwrap_or_else(|_| {
                log::debug!("{} not set, using default", BASE_URL_VAR);
                protocol::DICTIONARY_ENTRIES_URL.to_string()
            });

        Ok(Self {
            app_id,
            app_key,
            base_url,
        })
    }

    pub fn entry_url(&self, term: &str) -> String {
        protocol::dictionary_entry_url(&self.base_url, term)
    }
}
