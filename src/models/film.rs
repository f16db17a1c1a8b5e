use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    pub id: i64,
    pub judul: String,
    /// Duration in minutes.
    pub durasi: Option<u32>,
    pub rating_usia: Option<String>,
    pub poster_url: Option<String>,
    pub sinopsis: Option<String>,
}
