//! Transaction and payment endpoints.

use super::ApiClient;
use crate::error::ClientError;
use crate::models::{CreateTransaksi, Kursi, PaymentStatus, SnapToken, Transaksi};

impl ApiClient {
    /// GET /jadwals/{id}/booked-seats — seats already taken for a showtime.
    pub async fn get_booked_seats(&self, jadwal_id: i64) -> Result<Vec<Kursi>, ClientError> {
        self.get_data(&format!("/jadwals/{}/booked-seats", jadwal_id))
            .await
    }

    /// POST /transaksis — create the pending transaction. The backend owns
    /// seat locking and double-sale prevention; a conflict comes back as an
    /// API error here.
    pub async fn create_transaksi(
        &self,
        jadwal_id: i64,
        kursi_ids: Vec<i64>,
    ) -> Result<Transaksi, ClientError> {
        let body = CreateTransaksi {
            jadwal_id,
            kursi_ids,
        };
        self.post_data("/transaksis", &body).await
    }

    /// GET /my-tickets?filter=...
    pub async fn get_my_tickets(&self, filter: &str) -> Result<Vec<Transaksi>, ClientError> {
        self.get_data(&format!("/my-tickets?filter={}", filter))
            .await
    }

    /// POST /payment/{id}/snap-token — server-issued opaque token for the
    /// Midtrans widget. Not wrapped in the usual envelope.
    pub async fn create_snap_token(&self, transaksi_id: i64) -> Result<SnapToken, ClientError> {
        self.post_raw(&format!("/payment/{}/snap-token", transaksi_id))
            .await
    }

    /// GET /payment/{id}/check-status — last status the backend saw from
    /// Midtrans ("pending", "paid", ...).
    pub async fn check_midtrans_status(
        &self,
        transaksi_id: i64,
    ) -> Result<PaymentStatus, ClientError> {
        self.get_data(&format!("/payment/{}/check-status", transaksi_id))
            .await
    }
}
