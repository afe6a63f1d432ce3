pub mod routes;

use crate::PicksAppData;
use askama::Template;
use axum::response::IntoResponse;
use picks_core::Points;

pub fn home_routes() -> axum::Router<PicksAppData> {
    routes::routes()
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub title: &'static str,
    pub exact_points: u8,
    pub result_points: u8,
    pub miss_points: u8,
}

/// `GET /`: landing page linking to `/predict`.
pub async fn home_action() -> impl IntoResponse {
    HomeTemplate {
        title: "PREMIER LEAGUE 2024/2025",
        exact_points: Points::ExactScore.value(),
        result_points: Points::CorrectResult.value(),
        miss_points: Points::None.value(),
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::{get_raw, test_app_without_upstream};
    use axum::http::{header, StatusCode};

    #[tokio::test]
    async fn test_home_page() {
        let (status, headers, body) = get_raw(test_app_without_upstream(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html")));
        assert!(body.contains("PREMIER LEAGUE 2024/2025"));
        assert!(body.contains(r#"<a class="start" href="/predict">Start Predicting</a>"#));
        assert!(body.contains("How to Play"));
        assert!(body.contains("Exact score: 3 points"));
        assert!(body.contains("Correct result: 1 point"));
    }
}
