use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Code returned when an image had no extractable text and was analyzed
/// directly.
pub const CODE_IMAGE_DIRECT: i32 = 1;

/// JSON body returned by the advice backend.
///
/// Only `code` and `message` are always present; upload replies also carry
/// `success` and `filename`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResponse {
    #[serde(default)]
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl AdviceResponse {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Negative codes are errors; an explicit `success: false` is too.
    pub fn is_error(&self) -> bool {
        self.code < 0 || self.success == Some(false)
    }

    pub fn into_message(self) -> String {
        self.message
    }
}
