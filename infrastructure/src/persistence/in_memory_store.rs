// ./infrastructure/src/persistence/in_memory_store.rs
use crate::config::StoreConfig;
use crate::search::matches;
use application::DocumentRepository;
use chrono::Utc;
use domain::{Document, DocumentId, SearchRequest};
use indexmap::IndexMap;
use tracing::{debug, instrument};

/// In-memory document store.
///
/// A single insertion-ordered map serves both as the id index and as the
/// ordered collection: lookups are O(1), iteration follows save order, and
/// replacing a value keeps its position.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    // Document ID -> Document, in insertion order
    documents: IndexMap<DocumentId, Document>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            documents: IndexMap::new(),
        }
    }

    pub fn with_config(config: &StoreConfig) -> Self {
        debug!(initial_capacity = config.initial_capacity, "Creating in-memory document store");
        Self {
            documents: IndexMap::with_capacity(config.initial_capacity),
        }
    }

    /// Position of a stored document in save order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.documents.get_index_of(id)
    }
}

impl DocumentRepository for InMemoryDocumentStore {
    #[instrument(skip(self, document), fields(doc_id = ?document.id_str()))]
    fn save(&mut self, mut document: Document) -> Document {
        let existing = document
            .id
            .as_ref()
            .and_then(|id| self.documents.get_mut(id));

        match existing {
            Some(stored) => {
                // created is immutable once the document has been stored
                document.created = stored.created.or(document.created);
                document.created.get_or_insert_with(Utc::now);
                *stored = document.clone();
                debug!("Replaced stored document in place");
            }
            None => {
                document.created.get_or_insert_with(Utc::now);
                let id = DocumentId::generate();
                document.id = Some(id.clone());
                self.documents.insert(id, document.clone());
                debug!(new_id = %document.id_str().unwrap_or_default(), position = self.documents.len() - 1, "Appended new document");
            }
        }
        document
    }

    #[instrument(skip(self))]
    fn find_by_id(&self, id: &str) -> Option<Document> {
        let found = self.documents.get(id).cloned();
        debug!(found = found.is_some(), "Looked up document by id");
        found
    }

    #[instrument(skip(self))]
    fn search(&self, request: &SearchRequest) -> Vec<Document> {
        let hits: Vec<Document> = self
            .documents
            .values()
            .filter(|doc| matches(request, doc))
            .cloned()
            .collect();
        debug!(
            scanned = self.documents.len(),
            hits = hits.len(),
            "In-memory search finished."
        );
        hits
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}
