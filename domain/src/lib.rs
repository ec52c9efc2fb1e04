use chrono::{DateTime, Utc}; // Creation timestamps and date-range bounds
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use uuid::Uuid;

// --- Document ID ---
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random identifier (UUID v4, hyphenated).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<DocumentId> for String {
    fn from(doc_id: DocumentId) -> Self {
        doc_id.0
    }
}

// Lets id-keyed maps be queried with a plain &str
impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// --- Author ---

/// The author of a document. Always embedded by value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

// --- Document ---

/// The unit of storage.
///
/// `id` and `created` stay `None` until the document is saved; the store fills
/// both in. Once assigned, neither changes on later updates.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub id: Option<DocumentId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates an unsaved document (no id, no creation time).
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            created: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<DocumentId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// The id as a string slice, if one has been assigned.
    pub fn id_str(&self) -> Option<&str> {
        self.id.as_ref().map(DocumentId::as_str)
    }
}

// --- Search Request ---

/// Declarative search criteria. Every field is optional: an empty list or a
/// `None` bound places no constraint on the result.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Title must start with at least one of these.
    #[serde(default)]
    pub title_prefixes: Vec<String>,
    /// Content must contain every one of these.
    #[serde(default)]
    pub contains_contents: Vec<String>,
    /// Author id must equal every one of these.
    #[serde(default)]
    pub author_ids: Vec<String>,
    /// Inclusive lower bound on `created`.
    #[serde(default)]
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created`.
    #[serde(default)]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_contains_contents<I, S>(mut self, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contains_contents = contents.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_author_ids<I, S>(mut self, author_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.author_ids = author_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_created_from(mut self, from: DateTime<Utc>) -> Self {
        self.created_from = Some(from);
        self
    }

    pub fn with_created_to(mut self, to: DateTime<Utc>) -> Self {
        self.created_to = Some(to);
        self
    }

    /// True when no criterion is set, i.e. every document matches.
    pub fn is_unconstrained(&self) -> bool {
        self.title_prefixes.is_empty()
            && self.contains_contents.is_empty()
            && self.author_ids.is_empty()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn generated_ids_are_distinct_uuids() {
        let first = DocumentId::generate();
        let second = DocumentId::generate();
        assert_ne!(first, second);
        assert!(Uuid::parse_str(first.as_str()).is_ok());
    }

    #[test]
    fn document_id_borrows_as_str() {
        let id = DocumentId::new("doc-1");
        let borrowed: &str = id.borrow();
        assert_eq!(borrowed, "doc-1");
        assert_eq!(id.to_string(), "doc-1");
    }

    #[test]
    fn new_document_is_unsaved() {
        let doc = Document::new("Title", "Body", Author::new("a1", "Ann"));
        assert!(doc.id.is_none());
        assert!(doc.created.is_none());
        assert_eq!(doc.id_str(), None);
        assert_eq!(doc.author.id, "a1");
    }

    #[test]
    fn default_request_is_unconstrained() {
        assert!(SearchRequest::default().is_unconstrained());
        assert!(!SearchRequest::new().with_title_prefixes(["x"]).is_unconstrained());
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(!SearchRequest::new().with_created_to(ts).is_unconstrained());
    }

    #[test]
    fn search_request_deserializes_with_missing_fields() {
        let request: SearchRequest = serde_json::from_value(json!({
            "titlePrefixes": ["Hello"],
            "createdFrom": "2024-03-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(request.title_prefixes, vec!["Hello".to_string()]);
        assert!(request.contains_contents.is_empty());
        assert!(request.author_ids.is_empty());
        assert_eq!(
            request.created_from,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
        );
        assert!(request.created_to.is_none());
    }

    #[test]
    fn document_serializes_in_camel_case() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let doc = Document::new("T", "C", Author::new("a1", "Ann"))
            .with_id("doc-1")
            .with_created(created);

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["id"], json!("doc-1"));
        assert_eq!(value["author"]["name"], json!("Ann"));
        assert_eq!(value["created"], json!("2024-03-01T12:00:00Z"));
    }
}
