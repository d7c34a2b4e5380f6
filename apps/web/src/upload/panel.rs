use askama::Template;

use super::UploadView;

/// Render model for the upload box.
#[derive(Template)]
#[template(path = "upload_view.html")]
pub struct UploadPanel<'a> {
    pub error: Option<&'a str>,
    pub preview_url: Option<String>,
    pub analyzing: bool,
}

impl<'a> UploadPanel<'a> {
    pub fn from_view(view: &'a UploadView) -> Self {
        Self {
            error: view.error(),
            preview_url: view.session().map(|s| s.preview.url()),
            analyzing: view.is_analyzing(),
        }
    }
}

pub fn render_upload(view: &UploadView) -> askama::Result<String> {
    UploadPanel::from_view(view).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelectedFile;
    use crate::upload::preview::PreviewStore;
    use crate::upload::INVALID_TYPE_MESSAGE;
    use bytes::Bytes;

    fn pdf() -> SelectedFile {
        SelectedFile::new("cv.pdf", Some("application/pdf"), Bytes::from_static(b"%PDF"))
    }

    #[test]
    fn test_idle_view_has_no_preview_or_submit() {
        let html = render_upload(&UploadView::new()).unwrap();
        assert!(html.contains("Click to upload a PDF resume"));
        assert!(!html.contains("<iframe"));
        assert!(!html.contains("Review Resume"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_validation_error_is_shown() {
        let store = PreviewStore::new();
        let mut view = UploadView::new();
        view.select(
            SelectedFile::new("a.txt", Some("text/plain"), Bytes::new()),
            &store,
        );
        let html = render_upload(&view).unwrap();
        assert!(html.contains(INVALID_TYPE_MESSAGE));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_selected_view_shows_preview_and_enabled_submit() {
        let store = PreviewStore::new();
        let mut view = UploadView::new();
        view.select(pdf(), &store);
        let id = view.session().unwrap().preview.id();

        let html = render_upload(&view).unwrap();

        assert!(html.contains("<iframe"));
        assert!(html.contains(&id.to_string()));
        assert!(html.contains("Review Resume"));
        assert!(!html.contains(" disabled"));
    }

    #[test]
    fn test_analyzing_view_disables_controls() {
        let store = PreviewStore::new();
        let mut view = UploadView::new();
        view.select(pdf(), &store);
        view.begin_submit();

        let html = render_upload(&view).unwrap();

        assert!(html.contains("<button type=\"submit\" disabled>"));
        assert!(html.contains("Analyzing..."));
        assert!(!html.contains("Review Resume"));
        assert!(html.contains("accept=\".pdf\""));
    }
}
