//! Search result records and their wire format

use crate::error::{SnapError, SnapResult};
use serde::{Deserialize, Serialize};

/// One search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    /// Stable identifier assigned by the remote API
    pub id: String,

    /// URL of the small-resolution variant
    pub thumbnail_url: String,
}

impl ImageRecord {
    pub fn new(id: impl Into<String>, thumbnail_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            thumbnail_url: thumbnail_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<WireImage>,
}

#[derive(Debug, Deserialize)]
struct WireImage {
    id: String,
    urls: WireUrls,
}

#[derive(Debug, Deserialize)]
struct WireUrls {
    small: String,
}

impl From<WireImage> for ImageRecord {
    fn from(image: WireImage) -> Self {
        Self {
            id: image.id,
            thumbnail_url: image.urls.small,
        }
    }
}

/// Decode a search response body, keeping server order
pub fn decode_results(body: &[u8]) -> SnapResult<Vec<ImageRecord>> {
    let response: SearchResponse = serde_json::from_slice(body).map_err(SnapError::Decode)?;
    Ok(response.results.into_iter().map(ImageRecord::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_single_result() {
        let body = br#"{"results":[{"id":"a1","urls":{"small":"https://x/a1.jpg"}}]}"#;
        let records = decode_results(body).unwrap();
        assert_eq!(records, vec![ImageRecord::new("a1", "https://x/a1.jpg")]);
    }

    #[test]
    fn keeps_response_order_and_ignores_extra_fields() {
        let body = br#"{
            "total": 3,
            "total_pages": 1,
            "results": [
                {"id": "c", "width": 10, "urls": {"raw": "r", "small": "https://x/c"}},
                {"id": "a", "urls": {"small": "https://x/a", "thumb": "t"}},
                {"id": "b", "urls": {"small": "https://x/b"}}
            ]
        }"#;
        let ids: Vec<_> = decode_results(body)
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_results_is_ok() {
        assert!(decode_results(br#"{"results":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_results_key_is_decode_error() {
        let err = decode_results(br#"{"total":0}"#).unwrap_err();
        assert!(matches!(err, SnapError::Decode(_)));
    }

    #[test]
    fn missing_nested_small_is_decode_error() {
        let err = decode_results(br#"{"results":[{"id":"a1","urls":{"thumb":"t"}}]}"#).unwrap_err();
        assert!(matches!(err, SnapError::Decode(_)));
    }

    #[test]
    fn wrong_id_type_is_decode_error() {
        let err = decode_results(br#"{"results":[{"id":7,"urls":{"small":"s"}}]}"#).unwrap_err();
        assert!(matches!(err, SnapError::Decode(_)));
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = decode_results(b"<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, SnapError::Decode(_)));
    }
}
