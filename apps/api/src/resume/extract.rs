use thiserror::Error;

/// Fewer characters than this after trimming means the document had no
/// usable text layer.
pub const MIN_TEXT_CHARS: usize = 10;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{0}")]
    Pdf(String),

    #[error("PDF parser aborted: {0}")]
    Aborted(String),

    #[error("PDF appears to be empty or unreadable")]
    Empty,
}

/// Pulls the text layer out of a PDF and lower-cases it.
///
/// The parser is synchronous and can panic on malformed input, so it runs on
/// the blocking pool and a panic surfaces as [`ExtractError::Aborted`].
pub async fn pdf_text(bytes: Vec<u8>) -> Result<String, ExtractError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| ExtractError::Aborted(e.to_string()))?
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    usable_text(text)
}

pub(crate) fn usable_text(text: String) -> Result<String, ExtractError> {
    if text.trim().chars().count() < MIN_TEXT_CHARS {
        return Err(ExtractError::Empty);
    }
    Ok(text.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_only_text_is_empty() {
        assert!(matches!(
            usable_text("  \n\n  short ".to_string()),
            Err(ExtractError::Empty)
        ));
    }

    #[test]
    fn test_text_is_lowercased() {
        let text = usable_text("Jane Doe, Senior ENGINEER".to_string()).unwrap();
        assert_eq!(text, "jane doe, senior engineer");
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_rejected() {
        let result = pdf_text(b"definitely not a pdf".to_vec()).await;
        assert!(matches!(
            result,
            Err(ExtractError::Pdf(_)) | Err(ExtractError::Aborted(_))
        ));
    }
}
