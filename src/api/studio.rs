//! Public studio endpoints.

use super::ApiClient;
use crate::error::ClientError;
use crate::models::Kursi;

impl ApiClient {
    /// GET /studios/{id}/kursis — the full seat roster of one studio,
    /// independent of any showtime.
    pub async fn get_kursi_by_studio(&self, studio_id: i64) -> Result<Vec<Kursi>, ClientError> {
        self.get_data(&format!("/studios/{}/kursis", studio_id)).await
    }
}
