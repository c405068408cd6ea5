//! Wire shapes shared by the game client and the hint proxy.

use serde::{Deserialize, Serialize};

/// Public endpoint handing out one random word per request.
pub const WORD_API_URL: &str = "https://random-word-api.herokuapp.com/word?number=1";

/// Where the hint proxy listens during local development.
pub const DEFAULT_PROXY_ORIGIN: &str = "http://localhost:3000";

/// Upstream dictionary lookup, the term is appended as the last path segment.
pub const DICTIONARY_ENTRIES_URL: &str =
    "https://od-api-sandbox.oxforddictionaries.com/api/v2/entries/en-gb";

pub const HINT_ROUTE_PREFIX: &str = "/api/word/";

/// Path on the proxy for looking up `term`.
pub fn hint_path(term: &str) -> String {
    format!("{HINT_ROUTE_PREFIX}{term}")
}

pub fn hint_url(proxy_origin: &str, term: &str) -> String {
    format!("{}{}", proxy_origin.trim_end_matches('/'), hint_path(term))
}

/// Extracts the term from a proxy request path such as `/api/word/cat`.
///
/// Only a single non-empty segment of ASCII letters is accepted.
pub fn parse_hint_path(path: &str) -> Option<&str> {
    let term = path.strip_prefix(HINT_ROUTE_PREFIX)?;
    if !term.is_empty() && term.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(term)
    } else {
        None
    }
}

pub fn dictionary_entry_url(base_url: &str, term: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), term.to_ascii_lowercase())
}

/// Response of the random word endpoint: a JSON array of words.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList(pub Vec<String>);

impl WordList {
    pub fn into_first_word(self) -> Option<String> {
        self.0
            .into_iter()
            .next()
            .map(|word| word.to_lowercase())
    }
}

/// The parts of a dictionary entries response the client reads.
///
/// Everything not listed here is ignored when decoding.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntries {
    #[serde(default)]
    pub results: Vec<HeadwordEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadwordEntry {
    #[serde(default)]
    pub lexical_entries: Vec<LexicalEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LexicalEntry {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub senses: Vec<Sense>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub definitions: Vec<String>,
}

impl DictionaryEntries {
    /// `results[0].lexicalEntries[0].entries[0].senses[0].definitions[0]`
    pub fn first_definition(&self) -> Option<&str> {
        self.results
            .first()?
            .lexical_entries
            .first()?
            .entries
            .first()?
            .senses
            .first()?
            .definitions
            .first()
            .map(String::as_str)
    }

    pub fn into_first_definition(self) -> Option<String> {
        self.first_definition().map(str::to_owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_path_round_trips_through_parser() {
        assert_eq!(hint_path("cat"), "/api/word/cat");
        assert_eq!(parse_hint_path("/api/word/cat"), Some("cat"));
    }

    #[test]
    fn parse_hint_path_rejects_other_shapes() {
        assert_eq!(parse_hint_path("/api/word/"), None);
        assert_eq!(parse_hint_path("/api/word/a/b"), None);
        assert_eq!(parse_hint_path("/api/word/c%20t"), None);
        assert_eq!(parse_hint_path("/other"), None);
    }

    #[test]
    fn hint_url_joins_origin_without_double_slash() {
        assert_eq!(
            hint_url("http://localhost:3000/", "dog"),
            "http://localhost:3000/api/word/dog"
        );
    }

    #[test]
    fn dictionary_url_appends_lowercase_term() {
        assert_eq!(
            dictionary_entry_url(DICTIONARY_ENTRIES_URL, "Cat"),
            "https://od-api-sandbox.oxforddictionaries.com/api/v2/entries/en-gb/cat"
        );
    }

    #[test]
    fn word_list_takes_first_word_lowercased() {
        let words: WordList = serde_json::from_str(r#"["Quixotic","ignored"]"#).unwrap();
        assert_eq!(words.into_first_word().as_deref(), Some("quixotic"));

        let empty: WordList = serde_json::from_str("[]").unwrap();
        assert_eq!(empty.into_first_word(), None);
    }

    #[test]
    fn first_definition_follows_nested_shape() {
        let body = r#"{
            "id": "cat",
            "metadata": {"provider": "Oxford University Press"},
            "results": [{
                "id": "cat",
                "language": "en-gb",
                "lexicalEntries": [{
                    "entries": [{
                        "senses": [{
                            "definitions": ["a small domesticated carnivorous mammal"],
                            "id": "m_en_gbus0160320.006"
                        }]
                    }],
                    "lexicalCategory": {"id": "noun", "text": "Noun"}
                }]
            }]
        }"#;

        let entries: DictionaryEntries = serde_json::from_str(body).unwrap();

        assert_eq!(
            entries.first_definition(),
            Some("a small domesticated carnivorous mammal")
        );
    }

    #[test]
    fn missing_levels_yield_no_definition() {
        let shapes = [
            r#"{}"#,
            r#"{"results": []}"#,
            r#"{"results": [{"lexicalEntries": []}]}"#,
            r#"{"results": [{"lexicalEntries": [{"entries": [{"senses": [{}]}]}]}]}"#,
        ];
        for body in shapes {
            let entries: DictionaryEntries = serde_json::from_str(body).unwrap();
            assert_eq!(entries.into_first_definition(), None, "{body}");
        }
    }
}
