use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ambamax_client::api::ApiClient;
use ambamax_client::booking::BookingSession;
use ambamax_client::error::ClientError;
use ambamax_client::models::{Harga, Jadwal, Studio};
use ambamax_client::seatmap::SeatStatus;

fn kursi_json(id: i64, code: &str, row: u32, col: u32) -> serde_json::Value {
    json!({ "id": id, "kode_kursi": code, "row_number": row, "col_number": col })
}

fn jadwal_for(server_jadwal_id: i64, studio_id: i64, harga: i64) -> Jadwal {
    Jadwal {
        id: server_jadwal_id,
        tanggal: None,
        jam_mulai: Some("19:30".to_string()),
        studio: Some(Studio {
            id: studio_id,
            nama_studio: "Studio 1".to_string(),
            tipe: Some("regular".to_string()),
        }),
        harga: Some(Harga { id: 1, harga }),
    }
}

#[tokio::test]
async fn unwraps_the_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/studios/7/kursis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [kursi_json(1, "A1", 1, 1), kursi_json(2, "A2", 1, 2)]
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let seats = api.get_kursi_by_studio(7).await.unwrap();
    assert_eq!(seats.len(), 2);
    assert_eq!(seats[0].kode_kursi, "A1");
    assert_eq!(seats[1].col_number, 2);
}

#[tokio::test]
async fn sends_the_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/my-tickets"))
        .and(header("authorization", "Bearer rahasia"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap().with_token("rahasia");
    let tickets = api.get_my_tickets("all").await.unwrap();
    assert!(tickets.is_empty());
}

#[tokio::test]
async fn surfaces_the_backend_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transaksis"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "message": "Kursi sudah dibooking" })),
        )
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let err = api.create_transaksi(1, vec![5]).await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Kursi sudah dibooking");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_transaksi_posts_the_seat_ids() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transaksis"))
        .and(body_json(json!({ "jadwal_id": 10, "kursi_ids": [1, 3] })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": 99, "kode_booking": "AMB-99", "status": "pending", "total_harga": 90000 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let transaksi = api.create_transaksi(10, vec![1, 3]).await.unwrap();
    assert_eq!(transaksi.kode_booking, "AMB-99");
}

#[tokio::test]
async fn snap_token_is_read_outside_the_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/payment/99/snap-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "snap_token": "tok-abc", "redirect_url": "https://pay.example/tok-abc"
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let snap = api.create_snap_token(99).await.unwrap();
    assert_eq!(snap.snap_token, "tok-abc");
    assert_eq!(snap.redirect_url.as_deref(), Some("https://pay.example/tok-abc"));
}

#[tokio::test]
async fn load_seats_joins_both_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/studios/3/kursis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                kursi_json(1, "A1", 1, 1),
                kursi_json(2, "A2", 1, 2),
                kursi_json(3, "B1", 2, 1)
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jadwals/10/booked-seats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [kursi_json(2, "A2", 1, 2)]
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let mut session = BookingSession::new();
    session.select_jadwal(jadwal_for(10, 3, 45_000));
    session.load_seats(&api).await.unwrap();

    let map = session.seat_map().unwrap();
    assert_eq!(map.seat_count(), 3);
    assert_eq!(map.status_of(2), Some(SeatStatus::Booked));
    assert_eq!(map.status_of(1), Some(SeatStatus::Available));
}

#[tokio::test]
async fn no_grid_when_one_fetch_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/studios/3/kursis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [kursi_json(1, "A1", 1, 1)]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jadwals/10/booked-seats"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "Server error"
        })))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri()).unwrap();
    let mut session = BookingSession::new();
    session.select_jadwal(jadwal_for(10, 3, 45_000));

    let err = session.load_seats(&api).await.unwrap_err();
    assert!(matches!(err, ClientError::SeatLoad(_)));
    assert!(session.seat_map().is_none());
}
