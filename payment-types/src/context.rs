//! Explicit per-request trace context.

use std::collections::HashMap;

/// Baggage that accompanied the request through the distributed trace.
///
/// The transport adapter extracts it once at the boundary and hands it to
/// the service by reference; nothing here is ambient or mutable.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    baggage: HashMap<String, String>,
}

impl RequestContext {
    /// An empty context (no baggage).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a context from extracted baggage entries.
    pub fn from_baggage<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            baggage: entries.into_iter().collect(),
        }
    }

    /// Adds a single baggage entry.
    pub fn with_baggage_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.baggage.insert(key.into(), value.into());
        self
    }

    /// Looks up a baggage entry by key.
    pub fn baggage_entry(&self, key: &str) -> Option<&str> {
        self.baggage.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baggage_lookup() {
        let ctx = RequestContext::new().with_baggage_entry("synthetic_request", "true");
        assert_eq!(ctx.baggage_entry("synthetic_request"), Some("true"));
        assert_eq!(ctx.baggage_entry("other"), None);
    }

    #[test]
    fn test_from_baggage() {
        let ctx = RequestContext::from_baggage(vec![
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]);
        assert_eq!(ctx.baggage_entry("b"), Some("2"));
    }
}
