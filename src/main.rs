use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ambamax_client::{
    booking::{BookingSession, CheckoutData},
    config::Config,
    models::Jadwal,
    seatmap::{SeatMap, SeatStatus},
    services::payment::{begin_checkout, PaymentWatcher, Settlement, SnapOutcome, ADMIN_FEE},
    AppState,
};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AMBAMAX terminal storefront");

    let state = AppState::new(config)?;
    let watcher = PaymentWatcher::from_config(&state.config.payment, state.api.clone());
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("=== AMBAMAX ===");
    loop {
        match run_booking_flow(state.as_ref(), &watcher, &mut input).await {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => {
                error!("booking flow failed: {e:#}");
                println!("Terjadi kesalahan: {e}");
            }
        }
    }
    println!("Sampai jumpa!");
    Ok(())
}

/// One pass through the storefront: film -> jadwal -> seats -> checkout.
/// Returns false when the user quits.
async fn run_booking_flow(
    state: &AppState,
    watcher: &PaymentWatcher,
    input: &mut Input,
) -> Result<bool> {
    let mut session = BookingSession::new();

    let films = state.api.get_now_playing().await?;
    if films.is_empty() {
        println!("Tidak ada film yang sedang tayang.");
        return Ok(false);
    }

    println!("\nNow Playing:");
    for (i, film) in films.iter().enumerate() {
        let durasi = film.durasi.map(|d| format!(" - {} min", d)).unwrap_or_default();
        println!("  {}. {}{}", i + 1, film.judul, durasi);
    }

    let picked = match pick(input, "Pilih film (nomor, q untuk keluar): ", &films).await? {
        Some(f) => f.clone(),
        None => return Ok(false),
    };

    // the list endpoint is a summary; the detail view carries the synopsis
    let film = state.api.get_film(picked.id).await?;
    if let Some(rating) = &film.rating_usia {
        println!("\n{} [{}]", film.judul, rating);
    } else {
        println!("\n{}", film.judul);
    }
    if let Some(sinopsis) = &film.sinopsis {
        println!("{}", sinopsis);
    }

    let jadwals = state.api.get_jadwals_by_film(film.id).await?;
    if jadwals.is_empty() {
        println!("Belum ada jadwal untuk film ini.");
        return Ok(true);
    }

    println!("\nJadwal {}:", film.judul);
    for (i, jadwal) in jadwals.iter().enumerate() {
        println!("  {}. {}", i + 1, describe_jadwal(jadwal));
    }

    let jadwal = match pick(input, "Pilih jadwal (nomor, q untuk keluar): ", &jadwals).await? {
        Some(j) => j.clone(),
        None => return Ok(false),
    };

    session.select_film(film);
    session.select_jadwal(jadwal);

    // Both fetches must succeed before any grid is shown.
    if let Err(e) = session.load_seats(&state.api).await {
        error!("seat load failed: {e}");
        println!("Failed to load seats. Silakan coba lagi.");
        return Ok(true);
    }

    seat_loop(state, watcher, input, &mut session).await
}

/// Seat picker: toggle by code until the user pays or backs out.
async fn seat_loop(
    state: &AppState,
    watcher: &PaymentWatcher,
    input: &mut Input,
    session: &mut BookingSession,
) -> Result<bool> {
    loop {
        if let Some(map) = session.seat_map() {
            render_seat_map(map);
        }
        let summary = session.summary();
        println!(
            "Dipilih: {} kursi x {} = {}",
            summary.seat_count,
            rupiah(summary.unit_price),
            rupiah(summary.total)
        );

        let line = match prompt(input, "Kursi (mis. A5) | bayar | batal: ").await? {
            Some(line) => line,
            None => return Ok(false),
        };

        match line.as_str() {
            "batal" => {
                session.clear();
                return Ok(true);
            }
            "bayar" => {
                let Some(data) = session.checkout_data() else {
                    println!("Pilih kursi dulu.");
                    continue;
                };
                checkout(state, watcher, input, &data).await?;
                session.clear();
                return Ok(true);
            }
            code => {
                let Some(map) = session.seat_map() else { continue };
                match map.find_by_code(code) {
                    Some(id) => {
                        if session.toggle(id) == Some(SeatStatus::Booked) {
                            println!("Kursi {} sudah dibooking.", code);
                        }
                    }
                    None => println!("Kursi {} tidak ditemukan.", code),
                }
            }
        }
    }
}

async fn checkout(
    state: &AppState,
    watcher: &PaymentWatcher,
    input: &mut Input,
    data: &CheckoutData,
) -> Result<()> {
    println!("\n--- Order Summary ---");
    println!("Seats : {}", data.selected_seat_codes.join(", "));
    println!("Ticket ({}x): {}", data.selected_seats.len(), rupiah(data.total_harga));
    println!("Admin Fee   : {}", rupiah(ADMIN_FEE));
    println!("Grand Total : {}", rupiah(data.total_harga + ADMIN_FEE));

    let handoff = match begin_checkout(&state.api, data).await {
        Ok(h) => h,
        Err(e) => {
            error!("checkout failed: {e}");
            println!("Gagal membuat transaksi: {e}");
            return Ok(());
        }
    };

    println!("Kode booking: {}", handoff.transaksi.kode_booking);
    if let Some(url) = &handoff.redirect_url {
        println!("Selesaikan pembayaran di: {}", url);
    } else {
        println!("Snap token: {}", handoff.snap_token);
    }

    // The widget runs outside this process; it reports back one of four
    // outcomes.
    let outcome = loop {
        let line = match prompt(input, "Hasil widget [s]uccess/[p]ending/[e]rror/[c]lose: ").await? {
            Some(line) => line,
            None => return Ok(()),
        };
        match line.as_str() {
            "s" => break SnapOutcome::Success,
            "p" => break SnapOutcome::Pending,
            "e" => break SnapOutcome::Error,
            "c" => break SnapOutcome::Closed,
            _ => continue,
        }
    };

    match outcome {
        SnapOutcome::Success => {
            println!("Menunggu konfirmasi pembayaran...");
            match watcher.wait_for_settlement(handoff.transaksi.id).await {
                Settlement::Paid => {
                    println!("Payment confirmed! Kode booking: {}", handoff.transaksi.kode_booking);
                }
                Settlement::Unresolved { last_status } => {
                    println!(
                        "Payment received but status update is delayed (last: {}). Cek My Tickets sebentar lagi.",
                        last_status.as_deref().unwrap_or("unknown")
                    );
                }
            }
        }
        SnapOutcome::Pending => {
            println!("Payment is pending. Selesaikan pembayaran Anda.");
        }
        SnapOutcome::Error => {
            println!("Payment failed. Silakan coba lagi.");
        }
        SnapOutcome::Closed => {
            // one delayed check, like the widget's onClose path
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            match state.api.check_midtrans_status(handoff.transaksi.id).await {
                Ok(payment) if payment.status == "paid" => println!("Payment confirmed!"),
                Ok(payment) => println!("Payment status: {}", payment.status),
                Err(e) => info!("status check after close failed: {e}"),
            }
        }
    }
    Ok(())
}

fn render_seat_map(map: &SeatMap) {
    println!("\n============ SCREEN ============");
    print!("    ");
    for col in 1..=map.max_cols() {
        print!("{:>4}", col);
    }
    println!();
    for (label, row) in map.rows() {
        print!("{:>3} ", label);
        for seat in row {
            let cell = match seat.status {
                SeatStatus::Available => ".",
                SeatStatus::Selected => "+",
                SeatStatus::Booked => "x",
            };
            print!("{:>4}", cell);
        }
        println!();
    }
    println!("( . available / + selected / x booked )");
}

fn describe_jadwal(jadwal: &Jadwal) -> String {
    let jam = jadwal.jam_mulai.as_deref().unwrap_or("N/A");
    let studio = jadwal
        .studio
        .as_ref()
        .map(|s| s.nama_studio.as_str())
        .unwrap_or("N/A");
    format!("{} - {} - {}", jam, studio, rupiah(jadwal.ticket_price()))
}

/// "Rp45.000" with dot thousands separators, like the id-ID formatter.
fn rupiah(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}Rp{}", sign, out)
}

async fn prompt(input: &mut Input, text: &str) -> Result<Option<String>> {
    use std::io::Write;
    print!("{text}");
    std::io::stdout().flush()?;
    Ok(input.next_line().await?.map(|l| l.trim().to_lowercase()))
}

/// Numbered pick from a list; None on "q" or EOF.
async fn pick<'a, T>(input: &mut Input, text: &str, items: &'a [T]) -> Result<Option<&'a T>> {
    loop {
        let Some(line) = prompt(input, text).await? else {
            return Ok(None);
        };
        if line == "q" {
            return Ok(None);
        }
        if let Ok(n) = line.parse::<usize>() {
            if n >= 1 && n <= items.len() {
                return Ok(Some(&items[n - 1]));
            }
        }
        println!("Pilihan tidak valid.");
    }
}
