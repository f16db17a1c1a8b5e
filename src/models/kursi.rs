use serde::{Deserialize, Serialize};

/// A physical seat in a studio. Position is a 1-based (row, column) pair;
/// `kode_kursi` is the printed code shown to customers (e.g. "A5").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kursi {
    pub id: i64,
    pub kode_kursi: String,
    pub row_number: u32,
    pub col_number: u32,
}
