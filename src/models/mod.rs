pub mod film;
pub mod jadwal;
pub mod kursi;
pub mod studio;
pub mod transaksi;

pub use film::Film;
pub use jadwal::{Harga, Jadwal};
pub use kursi::Kursi;
pub use studio::Studio;
pub use transaksi::{CreateTransaksi, PaymentStatus, SnapToken, Transaksi};

use serde::Deserialize;

/// Response envelope: every read endpoint wraps its payload in `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct ApiData<T> {
    pub data: T,
}
