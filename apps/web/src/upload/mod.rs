//! Upload view — select a PDF, preview it, submit it for analysis.
//!
//! The view is an explicit state machine. Network I/O is split out of it: a
//! submission is `begin_submit` (take the in-flight slot), the caller awaits the
//! analyzer with no lock held, then `finish_submit` applies the outcome.

pub mod panel;
pub mod preview;

use tracing::{info, warn};

use crate::analysis::AnalysisError;
use crate::models::{Review, SelectedFile};
use preview::{PreviewHandle, PreviewStore};

pub const INVALID_TYPE_MESSAGE: &str = "Only PDF files are supported.";
pub const TOO_LARGE_MESSAGE: &str = "File is too large.";

/// The accepted file together with the preview that displays it.
#[derive(Debug)]
pub struct FileSession {
    pub file: SelectedFile,
    pub preview: PreviewHandle,
}

#[derive(Debug)]
pub enum UploadView {
    Idle { error: Option<String> },
    Selected { session: FileSession, error: Option<String> },
    Analyzing { session: FileSession },
}

impl Default for UploadView {
    fn default() -> Self {
        UploadView::Idle { error: None }
    }
}

/// What happened to a file selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Accepted,
    Rejected,
    /// A submission is in flight; the file input is disabled.
    Ignored,
}

/// Handed out by `begin_submit`; carries what the analyzer needs.
#[derive(Debug)]
pub struct SubmitTicket {
    pub file: SelectedFile,
}

impl UploadView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, file: SelectedFile, previews: &PreviewStore) -> SelectOutcome {
        if self.is_analyzing() {
            warn!("Ignoring selection of '{}' while analyzing", file.file_name);
            return SelectOutcome::Ignored;
        }

        if !file.is_pdf() {
            info!(
                "Rejected '{}' with media type {:?}",
                file.file_name, file.content_type
            );
            self.set_error(INVALID_TYPE_MESSAGE.to_string());
            return SelectOutcome::Rejected;
        }

        let preview = previews.create(&file);
        // Assigning drops the previous state, and with it any previous preview.
        *self = UploadView::Selected {
            session: FileSession { file, preview },
            error: None,
        };
        SelectOutcome::Accepted
    }

    /// A selection that never produced a file, such as an upload cut off by
    /// the body limit. The current selection and preview stay.
    pub fn reject(&mut self, message: &str) -> SelectOutcome {
        if self.is_analyzing() {
            return SelectOutcome::Ignored;
        }
        self.set_error(message.to_string());
        SelectOutcome::Rejected
    }

    /// Moves `Selected` to `Analyzing`. `None` when nothing is selected or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        match std::mem::take(self) {
            UploadView::Selected { session, .. } => {
                let ticket = SubmitTicket {
                    file: session.file.clone(),
                };
                *self = UploadView::Analyzing { session };
                Some(ticket)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Applies the analyzer's outcome. On success the review is returned for
    /// the root container; on failure the view goes back to `Selected` with the
    /// same file and preview and an inline message.
    pub fn finish_submit(&mut self, outcome: Result<Review, AnalysisError>) -> Option<Review> {
        let session = match std::mem::take(self) {
            UploadView::Analyzing { session } => session,
            other => {
                *self = other;
                return None;
            }
        };

        match outcome {
            Ok(review) => {
                *self = UploadView::Selected {
                    session,
                    error: None,
                };
                Some(review)
            }
            Err(e) => {
                warn!("Analysis of '{}' failed: {e}", session.file.file_name);
                *self = UploadView::Selected {
                    session,
                    error: Some(e.user_message()),
                };
                None
            }
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, UploadView::Analyzing { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UploadView::Idle { error } | UploadView::Selected { error, .. } => error.as_deref(),
            UploadView::Analyzing { .. } => None,
        }
    }

    pub fn session(&self) -> Option<&FileSession> {
        match self {
            UploadView::Idle { .. } => None,
            UploadView::Selected { session, .. } | UploadView::Analyzing { session } => {
                Some(session)
            }
        }
    }

    fn set_error(&mut self, message: String) {
        match self {
            UploadView::Idle { error } | UploadView::Selected { error, .. } => {
                *error = Some(message)
            }
            UploadView::Analyzing { .. } => {}
        }
    }
}
