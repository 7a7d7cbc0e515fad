use std::str::FromStr;

use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::Uri;

use crate::Error;

/// A URL decomposed for signing.
///
/// Query parameters are held as decoded pairs so they can be sorted and
/// re-encoded canonically, no matter how the input string spelled them.
#[derive(Debug, Clone)]
pub struct SignableUrl {
    /// URL scheme, if the URL is absolute.
    pub scheme: Option<Scheme>,
    /// URL authority, if the URL is absolute.
    pub authority: Option<Authority>,
    /// URL path.
    pub path: String,
    /// Decoded query parameters, in their current serialization order.
    pub query: Vec<(String, String)>,
}

impl SignableUrl {
    /// Parse a URL string into its signable parts.
    pub fn parse(url: &str) -> crate::Result<Self> {
        let uri = Uri::from_str(url)
            .map_err(|e| Error::url_invalid(format!("failed to parse url: {url}")).with_source(e))?;

        Ok(Self::build(uri))
    }

    /// Build a signable URL from an already parsed URI.
    pub fn build(uri: Uri) -> Self {
        let parts = uri.into_parts();
        let paq = parts
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        SignableUrl {
            scheme: parts.scheme,
            authority: parts.authority,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    /// Get the first value for a query parameter.
    pub fn query_get(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a query parameter, replacing any existing values.
    pub fn query_set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.query.retain(|(k, _)| *k != key);
        self.query.push((key, value.into()));
    }

    /// Push a new query pair into the query list.
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Remove all values of a query parameter.
    pub fn query_remove(&mut self, key: &str) {
        self.query.retain(|(k, _)| k != key);
    }

    /// Sort query pairs so serialization is canonical.
    pub fn canonicalize_query(&mut self) {
        self.query.sort();
    }

    /// Serialize back into a URL string, query in its current order.
    pub fn url_string(&self) -> String {
        // 64 is specially chosen to avoid reallocation for most URLs.
        let mut s = String::with_capacity(64);

        if let (Some(scheme), Some(authority)) = (&self.scheme, &self.authority) {
            s.push_str(scheme.as_str());
            s.push_str("://");
            s.push_str(authority.as_str());
        }

        s.push_str(&self.path);

        if !self.query.is_empty() {
            let mut serializer = form_urlencoded::Serializer::new(String::new());
            for (k, v) in &self.query {
                serializer.append_pair(k, v);
            }

            s.push('?');
            s.push_str(&serializer.finish());
        }

        s
    }
}
