use log::{debug, error};
use serde::Serialize;
use tiny_http::Method;

use crate::{
    config::{ServerConfig, SyntaxStatusPolicy},
    error::{EvaluationError, ParseError},
    evaluate,
    transport::message::{
        CalculateRequest,
        CalculateResponse,
        ErrorResponse,
        INTERNAL_ERROR,
        INVALID_EXPRESSION,
    },
};

/// A status code and an optional JSON body, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// HTTP status code.
    pub status: u16,
    /// Serialized JSON body; `None` sends an empty body.
    pub body:   Option<String>,
}

impl Reply {
    /// A reply without a body.
    #[must_use]
    pub const fn empty(status: u16) -> Self {
        Self { status,
               body: None }
    }

    /// A reply carrying `value` serialized as JSON.
    ///
    /// Falls back to an empty `500` if serialization fails.
    #[must_use]
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status,
                               body: Some(body) },
            Err(e) => {
                error!("failed to serialize reply body: {e}");
                Self::empty(500)
            },
        }
    }
}

/// Maps an evaluation error to the status code the endpoint answers with.
///
/// Runtime errors always answer `500`. Syntax errors answer `422`, except
/// that [`SyntaxStatusPolicy::Compatible`] answers `500` when the input ended
/// where an operand was still expected.
///
/// # Example
/// ```
/// use calcd::{config::SyntaxStatusPolicy, evaluate, transport::handler::status_for};
///
/// let err = evaluate("1 +").unwrap_err();
/// assert_eq!(status_for(&err, SyntaxStatusPolicy::Compatible), 500);
/// assert_eq!(status_for(&err, SyntaxStatusPolicy::Uniform), 422);
/// ```
#[must_use]
pub const fn status_for(error: &EvaluationError, policy: SyntaxStatusPolicy) -> u16 {
    match (error, policy) {
        (EvaluationError::Runtime(_), _)
        | (EvaluationError::Syntax(ParseError::UnexpectedEndOfInput { .. }),
           SyntaxStatusPolicy::Compatible) => 500,
        (EvaluationError::Syntax(_), _) => 422,
    }
}

/// Handles one request addressed to `path`.
///
/// Anything but the configured route answers `404`; the route itself is
/// served by [`handle_calculate`].
#[must_use]
pub fn dispatch(method: &Method, path: &str, body: &[u8], config: &ServerConfig) -> Reply {
    if path != config.route {
        return Reply::empty(404);
    }
    handle_calculate(method, body, config.syntax_status)
}

/// Handles a request to the calculation endpoint.
///
/// # Returns
/// - `405` for any method but `POST`.
/// - `400` if the body is not a [`CalculateRequest`] or the expression is
///   blank.
/// - `200` with a [`CalculateResponse`] on success.
/// - `422` or `500` with an [`ErrorResponse`] on failure, see
///   [`status_for`].
#[must_use]
pub fn handle_calculate(method: &Method, body: &[u8], policy: SyntaxStatusPolicy) -> Reply {
    if *method != Method::Post {
        return Reply::empty(405);
    }

    let request: CalculateRequest = match serde_json::from_slice(body) {
        Ok(request) => request,
        Err(e) => {
            debug!("rejecting malformed request body: {e}");
            return Reply::empty(400);
        },
    };

    if request.expression.trim().is_empty() {
        debug!("rejecting blank expression");
        return Reply::empty(400);
    }

    match evaluate(&request.expression) {
        Ok(result) => Reply::json(200, &CalculateResponse { result }),
        Err(e) => {
            let status = status_for(&e, policy);
            debug!("{:?} failed with {status}: {e}", request.expression);
            let message = if status == 422 { INVALID_EXPRESSION } else { INTERNAL_ERROR };
            Reply::json(status, &ErrorResponse::new(message))
        },
    }
}
