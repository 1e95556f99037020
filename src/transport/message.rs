use serde::{Deserialize, Serialize, Serializer};

/// Error text sent with `422` replies.
pub const INVALID_EXPRESSION: &str = "Expression is not valid";
/// Error text sent with `500` replies.
pub const INTERNAL_ERROR: &str = "Internal server error";
/// Largest magnitude below which every whole `f64` is an exact integer
/// (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Body of a calculation request: `{"expression": "1 + 1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The arithmetic expression to evaluate.
    pub expression: String,
}

/// Body of a successful reply: `{"result": 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculateResponse {
    /// The value of the expression.
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
}

/// Writes whole values that are exact integers as JSON integers, so `4.0`
/// goes out as `4`. Everything else is written as a float.
#[allow(clippy::trivially_copy_pass_by_ref, clippy::cast_possible_truncation)]
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Body of a failed reply: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// One of [`INVALID_EXPRESSION`] or [`INTERNAL_ERROR`].
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error body with the given text.
    #[must_use]
    pub fn new(error: &str) -> Self {
        Self { error: error.to_string() }
    }
}
