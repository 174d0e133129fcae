use axum::extract::State;
use axum::response::Html;

use super::views::render_page;
use super::AppState;

pub(crate) async fn overview_handler(State(state): State<AppState>) -> Html<String> {
    // Render from a snapshot so the lock is not held while building HTML.
    let snapshot = state.directory().clone();
    Html(render_page(&snapshot))
}
