//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Renders `templates/index.html`: a form posting to `/api/shorten`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub base_url: String,
}

/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        base_url: state.base_url.clone(),
    }
}
