use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use clap::ValueEnum;

/// Default listen address of the HTTP server.
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));
/// Default path that accepts calculation requests.
pub const DEFAULT_ROUTE: &str = "/api/v1/calculate";
/// Default upper bound on the size of a request body.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Selects the status code reported for syntax errors.
///
/// Deployed clients expect an expression that ends where an operand is
/// still required (such as `1 +`) to answer `500`, the same as division by
/// zero, while every other syntax error answers `422`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SyntaxStatusPolicy {
    /// `422` for syntax errors, except a missing trailing operand, which
    /// answers `500`.
    #[default]
    Compatible,
    /// `422` for every syntax error.
    Uniform,
}

/// Settings for the HTTP front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind. Port `0` picks a free port.
    pub addr:           SocketAddr,
    /// Path of the calculation endpoint.
    pub route:          String,
    /// Requests with a larger body are refused with `413`.
    pub max_body_bytes: usize,
    /// How syntax errors map to status codes.
    pub syntax_status:  SyntaxStatusPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { addr:           DEFAULT_ADDR,
               route:          DEFAULT_ROUTE.to_string(),
               max_body_bytes: DEFAULT_MAX_BODY_BYTES,
               syntax_status:  SyntaxStatusPolicy::default(), }
    }
}
