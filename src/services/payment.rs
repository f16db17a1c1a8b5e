//! Checkout handoff and payment-status reconciliation.
//!
//! The actual payment runs in the Midtrans widget, outside this process. Our
//! side of the contract is small: create the transaction, fetch the snap
//! token, and after the widget reports success, poll the status endpoint a
//! bounded number of times until the backend has seen the settlement.

use std::time::Duration;

use tracing::{info, warn};

use crate::api::ApiClient;
use crate::booking::CheckoutData;
use crate::config::PaymentConfig;
use crate::error::ClientError;
use crate::models::Transaksi;

/// Flat fee added on top of the ticket total at checkout.
pub const ADMIN_FEE: i64 = 2_500;

/// The four callbacks the payment widget can fire. Produced by the widget,
/// consumed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapOutcome {
    Success,
    Pending,
    Error,
    Closed,
}

/// Result of the bounded status polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    Paid,
    /// Attempts exhausted without seeing "paid"; the backend may still
    /// settle it later. Carries the last status we saw, if any.
    Unresolved { last_status: Option<String> },
}

/// Everything needed to hand the user over to the widget.
#[derive(Debug, Clone)]
pub struct CheckoutHandoff {
    pub transaksi: Transaksi,
    pub snap_token: String,
    pub redirect_url: Option<String>,
    pub grand_total: i64,
}

/// Create the pending transaction and obtain the widget token.
pub async fn begin_checkout(
    api: &ApiClient,
    data: &CheckoutData,
) -> Result<CheckoutHandoff, ClientError> {
    let transaksi = api
        .create_transaksi(data.jadwal_id, data.selected_seats.clone())
        .await?;
    info!(
        "transaksi {} created, kode_booking={}",
        transaksi.id, transaksi.kode_booking
    );

    let snap = api.create_snap_token(transaksi.id).await?;

    Ok(CheckoutHandoff {
        grand_total: data.total_harga + ADMIN_FEE,
        transaksi,
        snap_token: snap.snap_token,
        redirect_url: snap.redirect_url,
    })
}

/// Polls the payment status after the widget reports success.
#[derive(Debug, Clone)]
pub struct PaymentWatcher {
    api: ApiClient,
    max_attempts: u32,
    interval: Duration,
}

impl PaymentWatcher {
    pub fn from_config(config: &PaymentConfig, api: ApiClient) -> Self {
        PaymentWatcher {
            api,
            max_attempts: config.poll_max_attempts,
            interval: Duration::from_secs(config.poll_interval_seconds),
        }
    }

    /// Poll until the backend reports "paid" or attempts run out. One check
    /// per interval; attempt errors are logged and counted, not fatal. This
    /// is best-effort reconciliation, the settlement itself is the
    /// backend's job.
    ///
    /// The future is cancellation-safe: drop it (or race it in `select!`)
    /// and no further requests are made.
    pub async fn wait_for_settlement(&self, transaksi_id: i64) -> Settlement {
        let mut last_status = None;

        for attempt in 1..=self.max_attempts {
            tokio::time::sleep(self.interval).await;

            match self.api.check_midtrans_status(transaksi_id).await {
                Ok(payment) => {
                    info!(
                        "status check {}/{} for transaksi {}: {}",
                        attempt, self.max_attempts, transaksi_id, payment.status
                    );
                    if payment.status == "paid" {
                        return Settlement::Paid;
                    }
                    last_status = Some(payment.status);
                }
                Err(e) => {
                    warn!(
                        "status check {}/{} for transaksi {} failed: {}",
                        attempt, self.max_attempts, transaksi_id, e
                    );
                }
            }
        }

        Settlement::Unresolved { last_status }
    }

    /// Same polling wrapped in a hard deadline, for callers that must not
    /// outlive the polling window even if individual requests hang.
    pub async fn wait_with_deadline(&self, transaksi_id: i64) -> Settlement {
        let deadline = self.interval * (self.max_attempts + 1);
        match tokio::time::timeout(deadline, self.wait_for_settlement(transaksi_id)).await {
            Ok(settlement) => settlement,
            Err(_) => {
                warn!("payment watch for transaksi {} hit its deadline", transaksi_id);
                Settlement::Unresolved { last_status: None }
            }
        }
    }
}
