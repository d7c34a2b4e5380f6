//! Root container — holds "current review or none" and switches views.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::analysis::ResumeAnalyzer;
use crate::models::{Review, SelectedFile};
use crate::upload::preview::PreviewStore;
use crate::upload::{SelectOutcome, UploadView};

#[derive(Debug)]
pub enum Screen {
    Upload(UploadView),
    Review(Review),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Upload(UploadView::new())
    }
}

/// Result of a submit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing selected, already analyzing, or a review is on screen.
    NotSubmitted,
    Reviewed,
    Failed,
}

#[derive(Debug, Default)]
pub struct Session {
    screen: Screen,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn review(&self) -> Option<&Review> {
        match &self.screen {
            Screen::Review(review) => Some(review),
            Screen::Upload(_) => None,
        }
    }

    pub fn upload_view_mut(&mut self) -> Option<&mut UploadView> {
        match &mut self.screen {
            Screen::Upload(view) => Some(view),
            Screen::Review(_) => None,
        }
    }

    /// Selection is only meaningful while the upload view is mounted.
    pub fn select(&mut self, file: SelectedFile, previews: &PreviewStore) -> SelectOutcome {
        match self.upload_view_mut() {
            Some(view) => view.select(file, previews),
            None => SelectOutcome::Ignored,
        }
    }

    pub fn reject_selection(&mut self, message: &str) -> SelectOutcome {
        match self.upload_view_mut() {
            Some(view) => view.reject(message),
            None => SelectOutcome::Ignored,
        }
    }

    /// Replaces the upload view with the review. The upload view, and its
    /// preview, are dropped here.
    pub fn show_review(&mut self, review: Review) {
        info!(
            "Review received: verdict={}, score={}",
            review.verdict, review.score
        );
        self.screen = Screen::Review(review);
    }

    /// "Get review for another resume": discard the review, mount a fresh
    /// upload view. No-op while uploading.
    pub fn reset(&mut self) -> bool {
        if let Screen::Review(_) = self.screen {
            self.screen = Screen::default();
            debug!("Session reset to upload view");
            true
        } else {
            false
        }
    }
}

/// Runs one submission against `analyzer`. The session lock is released while
/// the request is in flight; the `Analyzing` state keeps other submits out.
///
/// The request and the hand-off back into the session run on their own task,
/// so the view leaves `Analyzing` even if the caller is dropped mid-flight.
pub async fn submit(
    session: Arc<Mutex<Session>>,
    analyzer: Arc<dyn ResumeAnalyzer>,
) -> SubmitOutcome {
    let ticket = {
        let mut guard = session.lock().await;
        match guard.upload_view_mut().and_then(UploadView::begin_submit) {
            Some(ticket) => ticket,
            None => return SubmitOutcome::NotSubmitted,
        }
    };

    let task = tokio::spawn(async move {
        let outcome = analyzer.submit(&ticket.file).await;

        let mut guard = session.lock().await;
        let review = match guard.upload_view_mut() {
            Some(view) => view.finish_submit(outcome),
            None => None,
        };
        match review {
            Some(review) => {
                guard.show_review(review);
                SubmitOutcome::Reviewed
            }
            None => SubmitOutcome::Failed,
        }
    });

    match task.await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Submit task failed: {e}");
            SubmitOutcome::Failed
        }
    }
}
