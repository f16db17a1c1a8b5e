use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ambamax_client::api::ApiClient;
use ambamax_client::booking::CheckoutData;
use ambamax_client::config::PaymentConfig;
use ambamax_client::services::payment::{
    begin_checkout, PaymentWatcher, Settlement, ADMIN_FEE,
};

fn fast_watcher(api: ApiClient) -> PaymentWatcher {
    // zero spacing keeps the bounded-attempts behavior without the waiting
    PaymentWatcher::from_config(
        &PaymentConfig {
            poll_max_attempts: 5,
            poll_interval_seconds: 0,
        },
        api,
    )
}

fn status_body(status: &str) -> serde_json::Value {
    json!({ "data": { "status": status } })
}

#[tokio::test]
async fn settles_once_the_backend_reports_paid() {
    let server = MockServer::start().await;
    // first two polls still pending, then the webhook lands server-side
    Mock::given(method("GET"))
        .and(path("/payment/99/check-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body("pending")))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/payment/99/check-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body("paid")))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let settlement = fast_watcher(api).wait_for_settlement(99).await;
    assert_eq!(settlement, Settlement::Paid);
}

#[tokio::test]
async fn gives_up_after_the_attempt_budget() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payment/99/check-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body("pending")))
        .expect(5)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let settlement = fast_watcher(api).wait_for_settlement(99).await;
    assert_eq!(
        settlement,
        Settlement::Unresolved {
            last_status: Some("pending".to_string())
        }
    );
}

#[tokio::test]
async fn attempt_errors_are_counted_not_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payment/99/check-status"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .up_to_n_times(4)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/payment/99/check-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body("paid")))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let settlement = fast_watcher(api).wait_for_settlement(99).await;
    assert_eq!(settlement, Settlement::Paid);
}

#[tokio::test]
async fn deadline_variant_still_settles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/payment/7/check-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_body("paid")))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let watcher = PaymentWatcher::from_config(
        &PaymentConfig {
            poll_max_attempts: 3,
            poll_interval_seconds: 1,
        },
        api,
    );
    let settlement = watcher.wait_with_deadline(7).await;
    assert_eq!(settlement, Settlement::Paid);
}

#[tokio::test]
async fn checkout_creates_transaksi_then_fetches_the_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transaksis"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": 42, "kode_booking": "AMB-42", "status": "pending", "total_harga": 90000 }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/payment/42/snap-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snap_token": "tok-42", "redirect_url": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let data = CheckoutData {
        jadwal_id: 10,
        selected_seats: vec![1, 3],
        selected_seat_codes: vec!["A1".to_string(), "B1".to_string()],
        total_harga: 90_000,
    };

    let handoff = begin_checkout(&api, &data).await.unwrap();
    assert_eq!(handoff.transaksi.kode_booking, "AMB-42");
    assert_eq!(handoff.snap_token, "tok-42");
    assert_eq!(handoff.grand_total, 90_000 + ADMIN_FEE);
}
