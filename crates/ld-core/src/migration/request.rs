use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::MigrationFormat;

/// Payload for one import submission.
///
/// Constructed once per upload, sent once, discarded after the request
/// settles. `data` is the raw decoded file content: a JSON string for the
/// JSON-based formats, raw markup for the HTML export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationRequest {
    pub format: MigrationFormat,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("import payload is empty")]
pub struct EmptyPayload;

impl MigrationRequest {
    /// A request is never built around an empty payload; the caller surfaces
    /// this as a validation error instead of sending it.
    pub fn new(format: MigrationFormat, data: impl Into<String>) -> Result<Self, EmptyPayload> {
        let data = data.into();
        if data.is_empty() {
            return Err(EmptyPayload);
        }
        Ok(Self { format, data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_is_rejected() {
        assert_eq!(
            MigrationRequest::new(MigrationFormat::Linkwarden, ""),
            Err(EmptyPayload)
        );
    }

    #[test]
    fn test_payload_is_carried_verbatim() {
        let request = MigrationRequest::new(MigrationFormat::HtmlFile, "<html></html>").unwrap();
        assert_eq!(request.format, MigrationFormat::HtmlFile);
        assert_eq!(request.data, "<html></html>");
    }
}
