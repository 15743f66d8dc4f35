use std::path::{Path, PathBuf};
use tokio::fs;

pub const NO_RESUME_PLACEHOLDER: &str = "No resume provided";
pub const RESUME_UNAVAILABLE_PLACEHOLDER: &str = "Resume unavailable";

/// Best-effort resume retrieval. Every failure mode degrades to a
/// placeholder; scheduling never aborts because a resume is missing or
/// unreadable.
#[derive(Clone)]
pub struct ResumeService {
    uploads_dir: PathBuf,
}

impl ResumeService {
    pub fn new(uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            uploads_dir: uploads_dir.into(),
        }
    }

    pub async fn resolve(&self, resume_path: Option<&str>) -> String {
        let Some(resume_path) = resume_path else {
            return NO_RESUME_PLACEHOLDER.to_string();
        };

        let full_path = self.uploads_dir.join(resume_path);
        match extract_resume_text(&full_path).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!(
                    path = resume_path,
                    "No text extractor for resume format, using placeholder"
                );
                RESUME_UNAVAILABLE_PLACEHOLDER.to_string()
            }
            Err(e) => {
                tracing::warn!(path = resume_path, error = %e, "Failed to read resume");
                RESUME_UNAVAILABLE_PLACEHOLDER.to_string()
            }
        }
    }
}

/// Pluggable extraction step. Plain text is read directly; binary formats
/// return `None` until an extractor (pdftotext or similar) is wired in.
async fn extract_resume_text(path: &Path) -> std::io::Result<Option<String>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "txt" => fs::read_to_string(path).await.map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("resume-test-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn no_path_yields_no_resume_placeholder() {
        let service = ResumeService::new(scratch_dir());
        assert_eq!(service.resolve(None).await, NO_RESUME_PLACEHOLDER);
    }

    #[tokio::test]
    async fn missing_file_degrades_to_unavailable_placeholder() {
        let service = ResumeService::new(scratch_dir());
        let text = service.resolve(Some("does-not-exist.txt")).await;
        assert_eq!(text, RESUME_UNAVAILABLE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn plain_text_resume_is_read_verbatim() {
        let dir = scratch_dir();
        std::fs::write(dir.join("resume.txt"), "Five years of Rust.").unwrap();

        let service = ResumeService::new(dir);
        let text = service.resolve(Some("resume.txt")).await;
        assert_eq!(text, "Five years of Rust.");
    }

    #[tokio::test]
    async fn unextractable_format_degrades_to_unavailable_placeholder() {
        let dir = scratch_dir();
        std::fs::write(dir.join("resume.pdf"), b"%PDF-1.4").unwrap();

        let service = ResumeService::new(dir);
        let text = service.resolve(Some("resume.pdf")).await;
        assert_eq!(text, RESUME_UNAVAILABLE_PLACEHOLDER);
    }
}
