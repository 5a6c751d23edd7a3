//! Fixed connection settings for the user store.

/// Where users live. The values are fixed; the CLI exposes no way to change them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            uri: "mongodb://localhost:27017/".to_string(),
            database: "user".to_string(),
            collection: "users".to_string(),
        }
    }
}
