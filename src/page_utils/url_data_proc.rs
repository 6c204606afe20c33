use super::CResult;
use crate::ScrapeError;
use reqwest::Url;
use url::form_urlencoded::byte_serialize;

pub const RATE_LIMITED: u16 = 429;

/// builds `<endpoint>?q=<query>` with the query escaped the way html forms do it (space -> '+').
pub fn search_url(endpoint: &str, query: &str) -> CResult<Url> {
    let escaped: String = byte_serialize(query.as_bytes()).collect();
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    Url::parse(&format!("{endpoint}{sep}q={escaped}"))
        .map_err(|e| ScrapeError::Config(format!("invalid endpoint {endpoint:?}: {e}")))
}

/// one query: a primary term and a modifier term separated by a single space.
pub fn join_query(primary: &str, modifier: &str) -> String {
    format!("{primary} {modifier}")
}

/// Raw answer of the search engine for a single query.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub status: u16,
    pub reason: String,
    pub html: String,
}

impl SearchResponse {
    pub fn is_rate_limited(&self) -> bool {
        self.status == RATE_LIMITED
    }
    pub fn get_html(&self) -> &str {
        &self.html
    }
}

/// An extracted search result as an ordered list of `(column, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultItem(pub Vec<(String, String)>);

impl ResultItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// replaces the value in place when `key` exists, appends it otherwise.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn get_link(&self) -> Option<&str> {
        self.get("link")
    }

    pub fn get_title(&self) -> Option<&str> {
        self.get("title")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_form_escaped() {
        let url = search_url("https://www.google.com/search", "AT&T careers").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.google.com/search?q=AT%26T+careers"
        );
    }

    #[test]
    fn set_keeps_position_of_existing_key() {
        let mut item = ResultItem::new();
        item.set("link", "a");
        item.set("title", "b");
        item.set("link", "c");
        assert_eq!(item.keys().collect::<Vec<_>>(), ["link", "title"]);
        assert_eq!(item.get_link(), Some("c"));
    }
}
