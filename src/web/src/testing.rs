use crate::config::WebConfig;
use crate::routes::ServerRoutes;
use crate::PicksAppData;
use axum::body::Body;
use axum::extract::Query;
use axum::http::{header, HeaderMap, Request, StatusCode, Uri};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Days, NaiveTime, Utc};
use http_body_util::BodyExt;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

pub struct Upstream {
    pub base_url: String,
}

/// Serves a small FPL look-alike on an ephemeral port.
///
/// Matchweek 29 is over, 30 runs today and tomorrow, 31 is next week.
/// `/api/fixtures/` and `/secret` sit inside and outside a base URL with a path.
pub async fn spawn_upstream() -> Upstream {
    let router = Router::new()
        .route("/bootstrap-static/", get(bootstrap))
        .route("/fixtures/", get(fixtures))
        .route("/echo/{*rest}", get(echo))
        .route("/plain", get(|| async { "not json" }))
        .route("/api/fixtures/", get(|| async { Json(json!(["fixtures"])) }))
        .route("/secret", get(|| async { Json(json!({"secret": "outside base"})) }));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Upstream {
        base_url: format!("http://{}", addr),
    }
}

pub fn test_app(upstream: &Upstream) -> Router {
    app_with(WebConfig::with_fpl_api_url(Some(upstream.base_url.clone())))
}

pub fn test_app_without_upstream() -> Router {
    app_with(WebConfig::with_fpl_api_url(None))
}

pub fn test_app_with_base(base_url: String) -> Router {
    app_with(WebConfig::with_fpl_api_url(Some(base_url)))
}

pub fn app_with(config: WebConfig) -> Router {
    let routes = ServerRoutes::create(&config);
    let data = PicksAppData::new(config).unwrap();

    routes.with_state(data)
}

pub async fn get_raw(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, headers, body) = get_raw(app, uri).await;

    assert!(
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json")),
        "expected JSON response for {}",
        uri
    );

    (status, serde_json::from_str(&body).unwrap())
}

async fn bootstrap() -> Json<Value> {
    Json(json!({
        "events": [],
        "teams": [
            {"id": 1, "name": "Arsenal", "short_name": "ARS"},
            {"id": 6, "name": "Chelsea", "short_name": "CHE"},
            {"id": 7, "name": "Crystal Palace", "short_name": "CRY"},
            {"id": 12, "name": "Liverpool", "short_name": "LIV"}
        ]
    }))
}

#[derive(Deserialize)]
struct FixturesQuery {
    event: Option<i64>,
}

async fn fixtures(Query(query): Query<FixturesQuery>) -> Json<Value> {
    let all = fixture_list();

    match query.event {
        Some(event) => Json(Value::Array(
            all.into_iter()
                .filter(|fixture| fixture["event"] == json!(event))
                .collect(),
        )),
        None => Json(Value::Array(all)),
    }
}

async fn echo(uri: Uri, headers: HeaderMap) -> Json<Value> {
    Json(json!({
        "path": uri.path(),
        "query": uri.query(),
        "user_agent": headers.get(header::USER_AGENT).and_then(|v| v.to_str().ok()),
    }))
}

fn kickoff(days_from_today: i64, time: (u32, u32)) -> String {
    let today = Utc::now().date_naive();
    let day = if days_from_today >= 0 {
        today.checked_add_days(Days::new(days_from_today as u64))
    } else {
        today.checked_sub_days(Days::new(days_from_today.unsigned_abs()))
    }
    .unwrap();

    let time = NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap();
    let instant: DateTime<Utc> = day.and_time(time).and_utc();

    instant.to_rfc3339()
}

fn fixture_list() -> Vec<Value> {
    vec![
        json!({
            "id": 291, "event": 29, "team_h": 7, "team_a": 1,
            "team_h_score": 0, "team_a_score": 0, "finished": true,
            "kickoff_time": kickoff(-10, (15, 0))
        }),
        json!({
            "id": 301, "event": 30, "team_h": 1, "team_a": 6,
            "team_h_score": 2, "team_a_score": 1, "finished": true,
            "kickoff_time": kickoff(0, (0, 0))
        }),
        json!({
            "id": 302, "event": 30, "team_h": 12, "team_a": 7,
            "team_h_score": null, "team_a_score": null, "finished": false,
            "kickoff_time": kickoff(1, (15, 0))
        }),
        json!({
            "id": 311, "event": 31, "team_h": 6, "team_a": 12,
            "team_h_score": null, "team_a_score": null, "finished": false,
            "kickoff_time": kickoff(7, (19, 45))
        }),
        json!({
            "id": 399, "event": null, "team_h": 7, "team_a": 6,
            "finished": false, "kickoff_time": null
        }),
    ]
}
