//! Public film and schedule endpoints.

use super::ApiClient;
use crate::error::ClientError;
use crate::models::{Film, Jadwal};

impl ApiClient {
    /// GET /films/now-playing
    pub async fn get_now_playing(&self) -> Result<Vec<Film>, ClientError> {
        self.get_data("/films/now-playing").await
    }

    /// GET /films/{id} — full detail for one film.
    pub async fn get_film(&self, film_id: i64) -> Result<Film, ClientError> {
        self.get_data(&format!("/films/{}", film_id)).await
    }

    /// GET /films/{id}/jadwals — schedules for one film.
    pub async fn get_jadwals_by_film(&self, film_id: i64) -> Result<Vec<Jadwal>, ClientError> {
        self.get_data(&format!("/films/{}/jadwals", film_id)).await
    }
}
