//! Axum route handlers for the review page.

use askama::Template;
use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect},
    Json,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::upload::PDF_MEDIA_TYPE;
use crate::models::{Review, SelectedFile};
use crate::review::render_review;
use crate::session::{self, Screen};
use crate::state::AppState;
use crate::upload::panel::render_upload;
use crate::upload::TOO_LARGE_MESSAGE;

/// Multipart field the page's file input posts.
const FILE_FIELD: &str = "file";

#[derive(Template)]
#[template(path = "page.html")]
struct Page<'a> {
    title: &'a str,
    body: String,
    show_reset: bool,
}

/// GET /
///
/// Root container: the upload box when no review is held, otherwise the
/// review plus the reset button.
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let session = state.session.lock().await;
    let (body, show_reset) = match session.screen() {
        Screen::Upload(view) => (render_upload(view)?, false),
        Screen::Review(review) => (render_review(Some(review))?, true),
    };
    drop(session);

    let page = Page {
        title: "Resume Review",
        body,
        show_reset,
    };
    Ok(Html(page.render()?))
}

/// POST /upload
///
/// Select file. An empty file input is a no-op. A file over the upload limit
/// gets the inline error and leaves the current selection in place.
pub async fn handle_select(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, AppError> {
    let outcome = match read_file_field(multipart).await {
        Ok(Some(file)) => state.session.lock().await.select(file, &state.previews),
        Ok(None) => {
            debug!("File input submitted without a file");
            return Ok(Redirect::to("/"));
        }
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            warn!("Upload over {} bytes rejected", state.config.max_upload_bytes);
            state.session.lock().await.reject_selection(TOO_LARGE_MESSAGE)
        }
        Err(e) => return Err(e.into()),
    };
    debug!("Selection outcome: {outcome:?}");
    Ok(Redirect::to("/"))
}

/// Reads the first `file` field. `None` when the input was left empty.
async fn read_file_field(
    mut multipart: Multipart,
) -> Result<Option<SelectedFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        if file_name.is_empty() && bytes.is_empty() {
            return Ok(None);
        }
        return Ok(Some(SelectedFile::new(file_name, content_type.as_deref(), bytes)));
    }
    Ok(None)
}

/// POST /review
///
/// Submit for review. Returns once the backend has answered; the page then
/// shows either the review or the inline error.
pub async fn handle_submit(State(state): State<AppState>) -> Redirect {
    let outcome = session::submit(state.session.clone(), state.analyzer.clone()).await;
    info!("Submit outcome: {outcome:?}");
    Redirect::to("/")
}

/// POST /reset
pub async fn handle_reset(State(state): State<AppState>) -> Redirect {
    state.session.lock().await.reset();
    Redirect::to("/")
}

/// GET /preview/:id
///
/// Serves a live preview inline. Revoked previews are gone for good.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let blob = state
        .previews
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Preview {id} not found")))?;
    debug!("Serving preview {id} ('{}')", blob.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, PDF_MEDIA_TYPE),
            (header::CONTENT_DISPOSITION, "inline"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        blob.bytes,
    ))
}

/// GET /api/v1/review
pub async fn handle_get_review(State(state): State<AppState>) -> Result<Json<Review>, AppError> {
    let review = state.session.lock().await.review().cloned();
    review
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No review available".to_string()))
}
