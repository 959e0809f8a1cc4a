use serde::Deserialize;

/// A single quotation as served by the remote quote service.
///
/// Decoded fresh from every fetch response and owned by the event that
/// carries it. Fields beyond `content` and `author` in the payload are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    /// The quotation text.
    pub content: String,
    /// Who said it.
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_payload_and_ignores_extra_fields() {
        let payload = r#"{
            "_id": "MoKBZDhfEIbD",
            "content": "Simplicity is the soul of efficiency.",
            "author": "Austin Freeman",
            "tags": ["famous-quotes"],
            "length": 38
        }"#;
        let quote: Quote = serde_json::from_str(payload).unwrap();
        assert_eq!(quote.content, "Simplicity is the soul of efficiency.");
        assert_eq!(quote.author, "Austin Freeman");
    }

    #[test]
    fn rejects_payload_missing_author() {
        let payload = r#"{ "content": "no attribution" }"#;
        assert!(serde_json::from_str::<Quote>(payload).is_err());
    }

    #[test]
    fn rejects_non_object_payload() {
        assert!(serde_json::from_str::<Quote>(r#""just a string""#).is_err());
    }
}
