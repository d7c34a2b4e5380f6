//! Review view — read-only rendering of an analysis result.

use askama::Template;

use crate::models::Review;

#[derive(Template)]
#[template(path = "review_view.html")]
pub struct ReviewView<'a> {
    pub review: Option<&'a Review>,
}

/// Renders the review, or the "no review available" placeholder.
pub fn render_review(review: Option<&Review>) -> askama::Result<String> {
    ReviewView { review }.render()
}
