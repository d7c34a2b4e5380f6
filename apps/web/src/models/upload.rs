use bytes::Bytes;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// A single file chosen by the user, as received from the file input.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub file_name: String,
    /// Media type declared by the browser. Not verified against the content.
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<&str>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.map(str::to_string),
            bytes,
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|ct| ct.trim().eq_ignore_ascii_case(PDF_MEDIA_TYPE))
            .unwrap_or(false)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_media_type_is_accepted() {
        let file = SelectedFile::new("cv.pdf", Some("application/pdf"), Bytes::from_static(b"%PDF"));
        assert!(file.is_pdf());
    }

    #[test]
    fn test_media_type_parameters_are_ignored() {
        let file = SelectedFile::new("cv.pdf", Some("Application/PDF; name=cv"), Bytes::new());
        assert!(file.is_pdf());
    }

    #[test]
    fn test_pdf_extension_alone_is_not_enough() {
        let file = SelectedFile::new("cv.pdf", Some("application/octet-stream"), Bytes::new());
        assert!(!file.is_pdf());
        let untyped = SelectedFile::new("cv.pdf", None, Bytes::new());
        assert!(!untyped.is_pdf());
    }

    #[test]
    fn test_other_document_types_are_rejected() {
        let docx = SelectedFile::new(
            "cv.docx",
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            Bytes::new(),
        );
        assert!(!docx.is_pdf());
    }
}
