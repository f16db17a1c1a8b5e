//! Seat map construction and selection state.
//!
//! Turns the flat seat roster of a studio plus the booked-set of one showtime
//! into a row-major grid, and tracks which seats the user has picked. All of
//! it is synchronous and in-memory; the backend decides the actual booking at
//! transaction time, this map only drives the picker.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::Kursi;

/// Tri-state seat status within one showtime. Exactly one holds per seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Available,
    Selected,
    Booked,
}

/// A seat plus its current status in the grid.
#[derive(Debug, Clone)]
pub struct SeatState {
    pub kursi: Kursi,
    pub status: SeatStatus,
}

/// Derived totals for the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingSummary {
    pub seat_count: usize,
    pub unit_price: i64,
    pub total: i64,
}

impl BookingSummary {
    /// Pure: `total = seat_count * unit_price`. Safe to call on every
    /// selection change.
    pub fn compute(seat_count: usize, unit_price: i64) -> Self {
        BookingSummary {
            seat_count,
            unit_price,
            total: seat_count as i64 * unit_price,
        }
    }
}

/// Display label for a 1-based row number: 1 -> "A", 26 -> "Z".
///
/// Rows past 26 continue spreadsheet-style ("AA", "AB", ...). No studio in
/// production is that large; the continuation just keeps the function total.
pub fn row_label(row_number: u32) -> String {
    let mut n = row_number;
    let mut buf = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        buf.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    buf.reverse();
    // row_number 0 never comes from the API (positions are 1-based)
    if buf.is_empty() {
        buf.push(b'?');
    }
    String::from_utf8(buf).unwrap_or_default()
}

/// Row-major seat grid for one (studio, showtime) pair.
///
/// Rows are keyed by `row_number`, so presentation order matches the numeric
/// row order (which equals alphabetical label order for rows A..Z).
#[derive(Debug, Default)]
pub struct SeatMap {
    rows: BTreeMap<u32, Vec<SeatState>>,
    // seat id -> (row_number, index within the row)
    index: HashMap<i64, (u32, usize)>,
    selected: HashSet<i64>,
}

impl SeatMap {
    /// Build the grid from the full roster and the booked-set of the
    /// showtime. Booked ids that are not part of the roster are inert.
    /// Status is assigned once here; a changed booked-set needs a rebuild.
    pub fn build(seats: Vec<Kursi>, booked_ids: &HashSet<i64>) -> Self {
        let mut rows: BTreeMap<u32, Vec<SeatState>> = BTreeMap::new();
        for kursi in seats {
            let status = if booked_ids.contains(&kursi.id) {
                SeatStatus::Booked
            } else {
                SeatStatus::Available
            };
            rows.entry(kursi.row_number)
                .or_default()
                .push(SeatState { kursi, status });
        }

        let mut index = HashMap::new();
        for (row_number, row) in rows.iter_mut() {
            row.sort_by_key(|s| s.kursi.col_number);
            for (i, seat) in row.iter().enumerate() {
                index.insert(seat.kursi.id, (*row_number, i));
            }
        }

        SeatMap {
            rows,
            index,
            selected: HashSet::new(),
        }
    }

    /// Flip a seat between available and selected. Booked seats and unknown
    /// ids are no-ops. Returns the status after the call, if the seat exists.
    pub fn toggle(&mut self, seat_id: i64) -> Option<SeatStatus> {
        let &(row, i) = self.index.get(&seat_id)?;
        let seat = &mut self.rows.get_mut(&row)?[i];
        match seat.status {
            SeatStatus::Booked => {}
            SeatStatus::Available => {
                seat.status = SeatStatus::Selected;
                self.selected.insert(seat_id);
            }
            SeatStatus::Selected => {
                seat.status = SeatStatus::Available;
                self.selected.remove(&seat_id);
            }
        }
        Some(seat.status)
    }

    pub fn status_of(&self, seat_id: i64) -> Option<SeatStatus> {
        let &(row, i) = self.index.get(&seat_id)?;
        Some(self.rows[&row][i].status)
    }

    /// Look a seat up by its printed code, e.g. "A5".
    pub fn find_by_code(&self, code: &str) -> Option<i64> {
        self.rows
            .values()
            .flatten()
            .find(|s| s.kursi.kode_kursi.eq_ignore_ascii_case(code))
            .map(|s| s.kursi.id)
    }

    /// Rows in presentation order, with derived labels.
    pub fn rows(&self) -> impl Iterator<Item = (String, &[SeatState])> + '_ {
        self.rows
            .iter()
            .map(|(row, seats)| (row_label(*row), seats.as_slice()))
    }

    /// Widest row, used only for the column header when rendering.
    pub fn max_cols(&self) -> usize {
        self.rows.values().map(Vec::len).max().unwrap_or(0)
    }

    pub fn seat_count(&self) -> usize {
        self.index.len()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Ids of the current selection, ascending for a stable handoff order.
    pub fn selected_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Printed codes of the current selection, sorted for display.
    pub fn selected_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .rows
            .values()
            .flatten()
            .filter(|s| self.selected.contains(&s.kursi.id))
            .map(|s| s.kursi.kode_kursi.clone())
            .collect();
        codes.sort();
        codes
    }

    pub fn summary(&self, unit_price: i64) -> BookingSummary {
        BookingSummary::compute(self.selected.len(), unit_price)
    }

    /// Drop the whole selection, keeping statuses consistent.
    pub fn clear_selection(&mut self) {
        for row in self.rows.values_mut() {
            for seat in row.iter_mut() {
                if seat.status == SeatStatus::Selected {
                    seat.status = SeatStatus::Available;
                }
            }
        }
        self.selected.clear();
    }
}
