use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use chrono::Local;
use tracing::info;

use crate::AppState;

/// Create the info page router
pub fn router() -> Router<AppState> {
    Router::new().route("/info", get(get_info))
}

/// Render the info page body for a given count and timestamp
pub fn render_info(count: usize, timestamp: &str) -> String {
    format!(
        "<p>Phonebook has info for {} people</p><p>{}</p>",
        count, timestamp
    )
}

/// Summary page with the current entry count and server time
pub async fn get_info(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /info");

    match state.person_service.count_persons().await {
        Ok(count) => {
            let now = Local::now().format("%a %b %d %Y %H:%M:%S GMT%z").to_string();
            Html(render_info(count, &now)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
