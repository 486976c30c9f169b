use axum::{
    Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use shared::{
    ClientConfig, Error, HttpShiftApi, ShiftApi,
    models::{NewShift, ShiftQuery},
};
use tokio::net::TcpListener;

async fn list_shifts(Query(query): Query<ShiftQuery>) -> Response {
    match query.user_id {
        1 => Json(json!([
            {
                "id": 11,
                "user_id": 1,
                "username": "mario",
                "date": format!("{}-{:02}-20", query.year, query.month),
                "start_time": "14:00:00",
                "end_time": "22:00:00",
                "location": "Torino"
            },
            {
                "id": 10,
                "user_id": 1,
                "username": "mario",
                "date": format!("{}-{:02}-02", query.year, query.month),
                "start_time": "06:00:00",
                "end_time": "12:00:00",
                "location": null
            }
        ]))
        .into_response(),
        2 => Json(json!([])).into_response(),
        3 => (StatusCode::NOT_FOUND, Json(json!({ "message": "User not found" }))).into_response(),
        4 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => Json(json!({ "unexpected": true })).into_response(),
    }
}

async fn create_shift(Json(shift): Json<NewShift>) -> Response {
    if shift.location == "reject" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Invalid date or time format." })),
        )
            .into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "message": "Shift created successfully",
            "shift": {
                "id": 99,
                "user_id": shift.user_id,
                "date": shift.date,
                "start_time": format!("{}:00", shift.start_time),
                "end_time": format!("{}:00", shift.end_time),
                "location": shift.location
            }
        })),
    )
        .into_response()
}

async fn serve() -> HttpShiftApi {
    let router = Router::new().route("/shifts", get(list_shifts).post(create_shift));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    HttpShiftApi::new(&ClientConfig::for_origin(format!("http://{}/", addr))).unwrap()
}

fn query(user_id: i64) -> ShiftQuery {
    ShiftQuery {
        user_id,
        year: 2024,
        month: 10,
    }
}

fn new_shift(location: &str) -> NewShift {
    NewShift {
        user_id: 1,
        date: "2024-10-21".to_string(),
        start_time: "09:00".to_string(),
        end_time: "17:00".to_string(),
        location: location.to_string(),
    }
}

#[tokio::test]
async fn lists_shifts_in_service_order() {
    let api = serve().await;
    let shifts = api.list_shifts(query(1)).await.unwrap();
    assert_eq!(shifts.len(), 2);
    assert_eq!(shifts[0].date, "2024-10-20");
    assert_eq!(shifts[0].location.as_deref(), Some("Torino"));
    assert_eq!(shifts[0].username.as_deref(), Some("mario"));
    assert_eq!(shifts[1].date, "2024-10-02");
    assert_eq!(shifts[1].location, None);
    assert_eq!(shifts[1].status, None);
}

#[tokio::test]
async fn empty_list_is_ok() {
    let api = serve().await;
    assert!(api.list_shifts(query(2)).await.unwrap().is_empty());
}

#[tokio::test]
async fn error_status_keeps_service_message() {
    let api = serve().await;
    let err = api.list_shifts(query(3)).await.unwrap_err();
    assert!(matches!(err, Error::Rejected { status: 404, .. }));
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn error_status_without_body_reports_status() {
    let api = serve().await;
    let err = api.list_shifts(query(4)).await.unwrap_err();
    assert!(matches!(err, Error::Rejected { status: 500, message: None }));
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn unexpected_shape_is_malformed() {
    let api = serve().await;
    let err = api.list_shifts(query(5)).await.unwrap_err();
    assert!(matches!(err, Error::Malformed(_)));
}

#[tokio::test]
async fn create_returns_the_stored_shift() {
    let api = serve().await;
    let created = api.create_shift(&new_shift("Milano")).await.unwrap();
    assert_eq!(created.message.as_deref(), Some("Shift created successfully"));
    let shift = created.shift.unwrap();
    assert_eq!(shift.id, Some(99));
    assert_eq!(shift.start_time, "09:00:00");
    assert_eq!(shift.location.as_deref(), Some("Milano"));
}

#[tokio::test]
async fn create_rejection_carries_message() {
    let api = serve().await;
    let err = api.create_shift(&new_shift("reject")).await.unwrap_err();
    assert_eq!(err.server_message(), Some("Invalid date or time format."));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let api = HttpShiftApi::new(&ClientConfig::for_origin(format!("http://{}", addr))).unwrap();
    let err = api.list_shifts(query(1)).await.unwrap_err();
    assert!(matches!(err, Error::Reqwest(_)));
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = HttpShiftApi::new(&ClientConfig::for_origin("not a url")).err().unwrap();
    assert!(matches!(err, Error::InvalidUrl(_)));
}
