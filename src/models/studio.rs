use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Studio {
    pub id: i64,
    pub nama_studio: String,
    /// "regular", "premium", ... free-form on the wire.
    pub tipe: Option<String>,
}
