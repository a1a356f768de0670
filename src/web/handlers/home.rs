//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the landing page.
///
/// Renders `templates/index.html`: a single form that posts to `/shorten`
/// through `/static/script.js` and shows the resulting short link.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
struct HomeTemplate {}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}
