/// Wire types of the calculation endpoint.
///
/// Declares the JSON request and response bodies and the fixed error
/// strings clients match on.
pub mod message;
/// Request handling without sockets.
///
/// Turns a method, path and body into a status code and an optional JSON
/// body. Everything observable about the endpoint is decided here, which
/// keeps it testable without binding a port.
///
/// # Responsibilities
/// - Routes by path and method.
/// - Decodes the request and invokes [`crate::evaluate`].
/// - Maps evaluation errors to status codes according to the configured
///   [`SyntaxStatusPolicy`].
///
/// [`SyntaxStatusPolicy`]: crate::config::SyntaxStatusPolicy
pub mod handler;
/// The blocking HTTP listener.
///
/// Accepts connections with `tiny_http`, enforces the body size limit and
/// writes the replies produced by [`handler`].
pub mod server;
