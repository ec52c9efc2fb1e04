// Module declarations
pub mod config;
pub mod persistence;
pub mod search;

// Re-export implementations
pub use config::StoreConfig;
pub use persistence::InMemoryDocumentStore;
