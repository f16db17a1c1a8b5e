//! Session state for one booking attempt.
//!
//! The session owns the chosen film, showtime, and seat map. It is a plain
//! value owned by the caller (the terminal view in this crate), not a
//! process-wide store, so it can be driven and inspected in isolation.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::{Film, Jadwal, Kursi};
use crate::seatmap::{BookingSummary, SeatMap, SeatStatus};

/// Everything the checkout step needs, handed over when the user confirms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutData {
    pub jadwal_id: i64,
    pub selected_seats: Vec<i64>,
    pub selected_seat_codes: Vec<String>,
    pub total_harga: i64,
}

/// Token for one issued fetch pair. Results are applied only while the token
/// is still the latest, so a superseded fetch can never overwrite newer
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

#[derive(Debug, Default)]
pub struct BookingSession {
    selected_film: Option<Film>,
    selected_jadwal: Option<Jadwal>,
    seat_map: Option<SeatMap>,
    epoch: u64,
}

impl BookingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_film(&mut self, film: Film) {
        info!("film selected: {} ({})", film.judul, film.id);
        self.selected_film = Some(film);
        self.selected_jadwal = None;
        self.seat_map = None;
        self.epoch += 1;
    }

    /// Choosing a showtime drops any grid built for the previous one.
    pub fn select_jadwal(&mut self, jadwal: Jadwal) {
        info!("jadwal selected: {}", jadwal.id);
        self.selected_jadwal = Some(jadwal);
        self.seat_map = None;
        self.epoch += 1;
    }

    pub fn film(&self) -> Option<&Film> {
        self.selected_film.as_ref()
    }

    pub fn jadwal(&self) -> Option<&Jadwal> {
        self.selected_jadwal.as_ref()
    }

    pub fn seat_map(&self) -> Option<&SeatMap> {
        self.seat_map.as_ref()
    }

    /// Start a fetch pair for the current showtime. Returns the request
    /// token plus the (studio, jadwal) ids to fetch with, or
    /// `IncompleteBooking` when no showtime with a studio is selected.
    pub fn begin_load(&mut self) -> Result<(LoadTicket, i64, i64), ClientError> {
        let jadwal = self
            .selected_jadwal
            .as_ref()
            .ok_or(ClientError::IncompleteBooking)?;
        let studio_id = jadwal.studio_id().ok_or(ClientError::IncompleteBooking)?;
        self.epoch += 1;
        Ok((LoadTicket { epoch: self.epoch }, studio_id, jadwal.id))
    }

    /// Apply a completed fetch pair. Stale pairs (issued before the latest
    /// `begin_load` or showtime change) are dropped; returns whether the
    /// grid was replaced.
    pub fn apply_roster(
        &mut self,
        ticket: LoadTicket,
        seats: Vec<Kursi>,
        booked: Vec<Kursi>,
    ) -> bool {
        if ticket.epoch != self.epoch {
            warn!(
                "dropping stale seat roster (epoch {} != {})",
                ticket.epoch, self.epoch
            );
            return false;
        }
        let booked_ids: HashSet<i64> = booked.into_iter().map(|k| k.id).collect();
        info!(
            "seat roster applied: {} seats, {} booked",
            seats.len(),
            booked_ids.len()
        );
        self.seat_map = Some(SeatMap::build(seats, &booked_ids));
        true
    }

    /// Fetch the roster and the booked-set concurrently and build the grid.
    /// Both fetches must succeed; on any failure no grid is shown at all.
    pub async fn load_seats(&mut self, api: &ApiClient) -> Result<(), ClientError> {
        let (ticket, studio_id, jadwal_id) = self.begin_load()?;
        let (seats, booked) = tokio::try_join!(
            api.get_kursi_by_studio(studio_id),
            api.get_booked_seats(jadwal_id),
        )
        .map_err(|e| ClientError::SeatLoad(Box::new(e)))?;
        self.apply_roster(ticket, seats, booked);
        Ok(())
    }

    pub fn toggle(&mut self, seat_id: i64) -> Option<SeatStatus> {
        self.seat_map.as_mut()?.toggle(seat_id)
    }

    pub fn summary(&self) -> BookingSummary {
        let unit_price = self
            .selected_jadwal
            .as_ref()
            .map(Jadwal::ticket_price)
            .unwrap_or(0);
        let count = self
            .seat_map
            .as_ref()
            .map(SeatMap::selected_count)
            .unwrap_or(0);
        BookingSummary::compute(count, unit_price)
    }

    /// Snapshot for the checkout step. `None` while the selection is empty,
    /// mirroring the disabled "Continue to Payment" button.
    pub fn checkout_data(&self) -> Option<CheckoutData> {
        let jadwal = self.selected_jadwal.as_ref()?;
        let map = self.seat_map.as_ref()?;
        if map.selected_count() == 0 {
            return None;
        }
        let summary = map.summary(jadwal.ticket_price());
        Some(CheckoutData {
            jadwal_id: jadwal.id,
            selected_seats: map.selected_ids(),
            selected_seat_codes: map.selected_codes(),
            total_harga: summary.total,
        })
    }

    /// Reset after checkout or when the user walks away.
    pub fn clear(&mut self) {
        self.selected_film = None;
        self.selected_jadwal = None;
        self.seat_map = None;
        self.epoch += 1;
    }
}
