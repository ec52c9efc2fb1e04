use serde::Deserialize;

/// Tuning knobs for [`crate::InMemoryDocumentStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Number of documents to reserve room for up front.
    #[serde(default)]
    pub initial_capacity: usize,
}

impl StoreConfig {
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: StoreConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn capacity_is_read_from_camel_case_key() {
        let config: StoreConfig =
            serde_json::from_value(json!({ "initialCapacity": 64 })).unwrap();
        assert_eq!(config, StoreConfig::with_initial_capacity(64));
    }
}
