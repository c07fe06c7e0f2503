//! Request records and their validation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// The loosely-typed request as received from a caller.
///
/// Every field is optional here; [`RequestRecord::validate`] decides whether
/// the combination makes a usable [`Request`].
///
/// # Example
///
/// ```rust
/// use shape_service::{Request, RequestRecord};
///
/// let record: RequestRecord =
///     serde_json::from_str(r#"{"type": "text", "data": "a small toy car"}"#).unwrap();
/// assert_eq!(
///     record.validate().unwrap(),
///     Request::Text { prompt: "a small toy car".into() }
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// `"text"` or `"image"`.
    #[serde(rename = "type", default)]
    pub input_type: Option<String>,
    /// Prompt text for text requests.
    #[serde(default)]
    pub data: Option<String>,
    /// Input file for image requests.
    #[serde(default)]
    pub image_path: Option<PathBuf>,
}

impl RequestRecord {
    /// Builds a text request record.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            input_type: Some("text".into()),
            data: Some(prompt.into()),
            image_path: None,
        }
    }

    /// Builds an image request record.
    pub fn image(path: impl Into<PathBuf>) -> Self {
        Self {
            input_type: Some("image".into()),
            data: None,
            image_path: Some(path.into()),
        }
    }

    /// Parses a record from JSON.
    ///
    /// # Errors
    ///
    /// Malformed JSON is reported as a validation error.
    pub fn from_json(json: &str) -> ServiceResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ServiceError::validation(format!("Malformed request: {}", e)))
    }

    /// Checks the record and converts it into a [`Request`].
    ///
    /// # Errors
    ///
    /// - `Invalid input type` when `type` is missing or not `text`/`image`
    /// - a validation error when the field required by the type is missing
    pub fn validate(&self) -> ServiceResult<Request> {
        match self.input_type.as_deref() {
            Some("text") => {
                let prompt = self
                    .data
                    .clone()
                    .ok_or_else(|| ServiceError::validation("Text request requires 'data'"))?;
                Ok(Request::Text { prompt })
            }
            Some("image") => {
                let image_path = self.image_path.clone().ok_or_else(|| {
                    ServiceError::validation("Image request requires 'image_path'")
                })?;
                Ok(Request::Image { image_path })
            }
            _ => Err(ServiceError::validation("Invalid input type")),
        }
    }
}

/// A validated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Generate from a text prompt.
    Text { prompt: String },
    /// Generate from an image on disk.
    Image { image_path: PathBuf },
}

impl TryFrom<&RequestRecord> for Request {
    type Error = ServiceError;

    fn try_from(record: &RequestRecord) -> ServiceResult<Self> {
        record.validate()
    }
}
