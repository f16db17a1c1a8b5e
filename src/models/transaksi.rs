use serde::{Deserialize, Serialize};

/// A ticket purchase as the backend records it. `kode_booking` is the code
/// the customer presents at the counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaksi {
    pub id: i64,
    pub kode_booking: String,
    /// "pending", "paid", "cancelled", ... owned by the backend.
    pub status: String,
    pub total_harga: Option<i64>,
}

/// Body for POST /transaksis.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTransaksi {
    pub jadwal_id: i64,
    pub kursi_ids: Vec<i64>,
}

/// Response of POST /payment/{id}/snap-token. Unlike the read endpoints this
/// one is not wrapped in a `data` envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapToken {
    pub snap_token: String,
    pub redirect_url: Option<String>,
}

/// Payload of GET /payment/{id}/check-status.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentStatus {
    pub status: String,
}
