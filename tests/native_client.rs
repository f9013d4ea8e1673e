#![cfg(feature = "no-wasm")]

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

use activity_signup_core::app::{SignupOutcome, SignupPage, CONNECTION_ERROR};
use activity_signup_core::client::request::NoWasmClient;
use activity_signup_core::config::ClientConfig;
use activity_signup_core::error::ErrorKind;
use activity_signup_core::interface::{ActivitiesApi, HttpClient, Surface};
use activity_signup_core::model::dtos::SignupReply;
use activity_signup_core::model::structs::{Activity, ActivityMap, SignupForm};
use activity_signup_core::ui::terminal::TerminalSurface;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Default)]
struct Backend {
    activities: ActivityMap,
    activity_gets: usize,
    signup_uris: Vec<String>,
    signup_bodies: Vec<Value>,
    signup_queries: Vec<HashMap<String, String>>,
}

type Shared = Arc<Mutex<Backend>>;

fn seed() -> ActivityMap {
    let mut map = ActivityMap::new();
    map.insert(
        "Chess Club".to_string(),
        Activity {
            description: "Weekly matches".to_string(),
            schedule: "Fridays 3-4pm".to_string(),
            max_participants: 10,
            participants: vec!["a@x.com".to_string(), "b@x.com".to_string()],
        },
    );
    map.insert(
        "Swimming Club".to_string(),
        Activity {
            description: "Swimming training and competitions".to_string(),
            schedule: "Mondays and Wednesdays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 1,
            participants: vec!["lily@x.com".to_string()],
        },
    );
    map
}

async fn list_activities(State(backend): State<Shared>) -> Json<ActivityMap> {
    let mut backend = backend.lock().unwrap();
    backend.activity_gets += 1;
    Json(backend.activities.clone())
}

async fn signup(
    State(backend): State<Shared>,
    Path(name): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    uri: Uri,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut backend = backend.lock().unwrap();
    backend.signup_uris.push(uri.path().to_string());
    backend.signup_bodies.push(body.clone());
    backend.signup_queries.push(query);

    let email = body["email"].as_str().unwrap_or_default().to_string();
    let Some(activity) = backend.activities.get_mut(&name) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Activity not found"})),
        );
    };
    if activity.participants.len() >= activity.max_participants as usize {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Activity is full"})),
        );
    }
    if activity.participants.contains(&email) {
        return (StatusCode::BAD_REQUEST, Json(json!({})));
    }
    activity.participants.push(email.clone());
    (
        StatusCode::OK,
        Json(json!({"message": format!("Signed up {email} for {name}")})),
    )
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

async fn backend() -> (String, Shared) {
    let shared = Arc::new(Mutex::new(Backend {
        activities: seed(),
        ..Backend::default()
    }));
    let app = Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:name/signup", post(signup))
        .with_state(Arc::clone(&shared));
    (serve(app).await, shared)
}

fn client(base_url: &str) -> NoWasmClient {
    NoWasmClient::new(ClientConfig::with_base_url(base_url)).unwrap()
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn fetches_activities_in_server_order() {
    let (url, _) = backend().await;

    let activities = client(&url).fetch_activities().await.unwrap();

    let names: Vec<&str> = activities.keys().map(String::as_str).collect();
    assert_eq!(names, ["Chess Club", "Swimming Club"]);
    assert_eq!(activities["Chess Club"].available_spots(), 8);
}

#[tokio::test]
async fn signup_encodes_name_and_sends_email() {
    let (url, shared) = backend().await;

    let reply = client(&url).signup("Chess Club", "c@x.com").await.unwrap();

    assert_eq!(
        reply,
        SignupReply::Accepted {
            message: "Signed up c@x.com for Chess Club".to_string()
        }
    );
    let backend = shared.lock().unwrap();
    assert_eq!(backend.signup_uris, ["/activities/Chess%20Club/signup"]);
    assert_eq!(backend.signup_bodies, [json!({"email": "c@x.com"})]);
    assert!(backend.signup_queries[0].is_empty());
}

#[tokio::test]
async fn email_rides_in_query_when_enabled() {
    let (url, shared) = backend().await;
    let config = ClientConfig::with_base_url(&url).email_in_query(true);
    let client = NoWasmClient::new(config).unwrap();

    let reply = client.signup("Chess Club", "c@x.com").await.unwrap();

    assert!(matches!(reply, SignupReply::Accepted { .. }));
    let backend = shared.lock().unwrap();
    assert_eq!(backend.signup_queries[0]["email"], "c@x.com");
    assert_eq!(backend.signup_bodies, [json!({"email": "c@x.com"})]);
}

#[tokio::test]
async fn business_errors_come_back_as_rejections() {
    let (url, _) = backend().await;
    let client = client(&url);

    let full = client.signup("Swimming Club", "c@x.com").await.unwrap();
    assert_eq!(
        full,
        SignupReply::Rejected {
            status: 400,
            detail: Some("Activity is full".to_string())
        }
    );

    let missing = client.signup("Knitting", "c@x.com").await.unwrap();
    assert_eq!(
        missing,
        SignupReply::Rejected {
            status: 404,
            detail: Some("Activity not found".to_string())
        }
    );

    let no_detail = client.signup("Chess Club", "a@x.com").await.unwrap();
    assert_eq!(
        no_detail,
        SignupReply::Rejected {
            status: 400,
            detail: None
        }
    );
}

#[tokio::test]
async fn non_json_answers_are_errors() {
    let app = Router::new()
        .route(
            "/activities",
            get(|| async { (StatusCode::OK, "<html>maintenance</html>") }),
        )
        .route(
            "/activities/:name/signup",
            post(|| async { (StatusCode::BAD_GATEWAY, "Bad Gateway") }),
        );
    let url = serve(app).await;
    let client = client(&url);

    assert!(client.fetch_activities().await.is_err());

    let err = client.signup("Chess Club", "c@x.com").await.unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::SerdeJsonError(_)));
}

#[tokio::test]
async fn failing_activities_status_is_an_error() {
    let app = Router::new().route(
        "/activities",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) }),
    );
    let url = serve(app).await;

    let err = client(&url).fetch_activities().await.unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ServerError { status: 500 }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client(&url).fetch_activities().await.unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ReqwestError(_)));
}

#[tokio::test]
async fn signup_page_round_trip() {
    let (url, shared) = backend().await;
    let out = SharedBuf::default();
    let config = ClientConfig::with_base_url(&url);
    let page = SignupPage::new(client(&url), TerminalSurface::new(out.clone()), config);

    page.surface().fill_form(SignupForm::new("c@x.com", "Chess Club"));
    assert_eq!(page.handle_signup().await, SignupOutcome::Accepted);

    let text = out.text();
    assert!(text.contains("[success] Signed up c@x.com for Chess Club\n"));
    assert!(text.contains("Available Spots: 7 of 10\n"));
    assert!(text.contains("  - c@x.com\n"));
    assert_eq!(page.surface().read_form(), SignupForm::default());
    assert_eq!(shared.lock().unwrap().activity_gets, 1);
}

#[tokio::test]
async fn signup_page_reports_unreachable_server() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let out = SharedBuf::default();
    let page = SignupPage::new(
        client(&url),
        TerminalSurface::new(out.clone()),
        ClientConfig::with_base_url(&url),
    );
    page.surface().fill_form(SignupForm::new("c@x.com", "Chess Club"));

    assert_eq!(page.handle_signup().await, SignupOutcome::Unreachable);
    assert!(out.text().contains(&format!("[error] {CONNECTION_ERROR}\n")));
}
