use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Studio;

/// Ticket price attached to a showtime. Rupiah, whole numbers only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Harga {
    pub id: i64,
    pub harga: i64,
}

/// A scheduled screening: film in a studio at a time, with a price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jadwal {
    pub id: i64,
    pub tanggal: Option<NaiveDate>,
    /// Start time as the API sends it, e.g. "14:30".
    pub jam_mulai: Option<String>,
    pub studio: Option<Studio>,
    pub harga: Option<Harga>,
}

impl Jadwal {
    /// Per-seat price, falling back to 0 when the schedule has no price
    /// attached (the API can omit it for draft schedules).
    pub fn ticket_price(&self) -> i64 {
        self.harga.as_ref().map(|h| h.harga).unwrap_or(0)
    }

    pub fn studio_id(&self) -> Option<i64> {
        self.studio.as_ref().map(|s| s.id)
    }
}
