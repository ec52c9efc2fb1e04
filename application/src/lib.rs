use domain::{Document, SearchRequest};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, error, instrument};

// --- Application Errors ---
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("Lock poisoned: {0}")]
    LockPoisoned(&'static str),
}

// --- Infrastructure Interfaces (Traits) ---

/// Interface for storing, retrieving and searching documents.
///
/// Operations are synchronous and infallible. Mutation takes `&mut self`, so
/// sharing a repository across threads goes through [`DocumentManager`].
pub trait DocumentRepository: Send {
    /// Upserts a document, returning it with `id` and `created` populated.
    ///
    /// A document whose id is unset or unknown is stored under a freshly
    /// generated id and appended. A known id replaces the stored document in
    /// place, keeping its position and its original creation time.
    fn save(&mut self, document: Document) -> Document;
    /// Retrieves a document by its ID. Absence is `None`, not an error.
    fn find_by_id(&self, id: &str) -> Option<Document>;
    /// Returns every stored document matching the request, in insertion order.
    fn search(&self, request: &SearchRequest) -> Vec<Document>;
    /// Number of stored documents.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// --- Application Services ---

/// Thread-safe container around a [`DocumentRepository`].
///
/// A single mutex guards all operations; semantics are those of the wrapped
/// repository. Clones share the same underlying store.
#[derive(Clone)]
pub struct DocumentManager {
    repo: Arc<Mutex<dyn DocumentRepository>>,
}

impl DocumentManager {
    pub fn new<R: DocumentRepository + 'static>(repo: R) -> Self {
        Self {
            repo: Arc::new(Mutex::new(repo)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, dyn DocumentRepository + 'static>, ApplicationError> {
        self.repo.lock().map_err(|_| {
            error!("Document store lock poisoned by a panicking holder");
            ApplicationError::LockPoisoned("document store")
        })
    }

    #[instrument(skip(self, document), fields(doc_id = ?document.id_str()))]
    pub fn save(&self, document: Document) -> Result<Document, ApplicationError> {
        let saved = self.lock()?.save(document);
        debug!(saved_id = ?saved.id_str(), "Document saved through manager");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub fn find_by_id(&self, id: &str) -> Result<Option<Document>, ApplicationError> {
        Ok(self.lock()?.find_by_id(id))
    }

    #[instrument(skip(self, request))]
    pub fn search(&self, request: &SearchRequest) -> Result<Vec<Document>, ApplicationError> {
        let hits = self.lock()?.search(request);
        debug!(hits = hits.len(), "Search through manager finished");
        Ok(hits)
    }

    pub fn len(&self) -> Result<usize, ApplicationError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, ApplicationError> {
        Ok(self.lock()?.is_empty())
    }
}
