//! Requests to the word source and the hint proxy.

use gloo::net::http::Request;
use hangman_protocol as protocol;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] gloo::net::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("response has no {0}")]
    Missing(&'static str),
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    log::trace!("GET {}", url);
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    Ok(response.json::<T>().await?)
}

/// One random lowercase word.
pub(crate) async fn random_word(url: &str) -> Result<String, FetchError> {
    get_json::<protocol::WordList>(url)
        .await?
        .into_first_word()
        .ok_or(FetchError::Missing("word"))
}

/// First dictionary definition of `word`, looked up through the proxy.
pub(crate) async fn definition(proxy_origin: &str, word: &str) -> Result<String, FetchError> {
    get_json::<protocol::DictionaryEntries>(&protocol::hint_url(proxy_origin, word))
        .await?
        .into_first_definition()
        .ok_or(FetchError::Missing("definition"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code() {
        assert_eq!(FetchError::Status(502).to_string(), "HTTP error! status: 502");
        assert_eq!(
            FetchError::Missing("definition").to_string(),
            "response has no definition"
        );
    }
}
