use std::{
    io::{self, Read},
    net::SocketAddr,
};

use log::{debug, info, warn};
use tiny_http::{Header, Request, Response, Server};

use crate::{
    config::ServerConfig,
    transport::handler::{Reply, dispatch},
};

/// Errors raised by the HTTP listener itself, as opposed to errors in a
/// single request, which are answered and logged.
#[derive(Debug)]
pub enum ServerError {
    /// The listen socket could not be opened.
    Bind {
        /// The requested address.
        addr:   SocketAddr,
        /// Why binding failed.
        reason: String,
    },
    /// Receiving the next request failed.
    Io(io::Error),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bind { addr, reason } => write!(f, "Cannot listen on {addr}: {reason}."),
            Self::Io(e) => write!(f, "Server I/O error: {e}."),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Bind { .. } => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for ServerError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// A bound calculation server.
///
/// Requests are served one at a time on the calling thread.
pub struct CalcServer {
    server: Server,
    config: ServerConfig,
}

impl CalcServer {
    /// Opens the listen socket described by `config`.
    ///
    /// # Errors
    /// Returns [`ServerError::Bind`] if the address cannot be bound.
    pub fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let server = Server::http(config.addr).map_err(|e| {
                                                  ServerError::Bind { addr:   config.addr,
                                                                      reason: e.to_string(), }
                                              })?;
        let server = Self { server, config };
        if let Some(addr) = server.local_addr() {
            info!("listening on http://{addr}{}", server.config.route);
        }
        Ok(server)
    }

    /// Returns the address actually bound, which differs from the
    /// configured one when port `0` was requested.
    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Blocks until one request arrives, answers it and returns.
    ///
    /// Failing to write the reply is logged and not treated as an error.
    ///
    /// # Errors
    /// Returns [`ServerError::Io`] if receiving a request fails.
    pub fn handle_next(&self) -> Result<(), ServerError> {
        let mut request = self.server.recv()?;

        let method = request.method().clone();
        let path = request.url()
                          .split('?')
                          .next()
                          .unwrap_or_default()
                          .to_string();

        let reply = match read_body(&mut request, self.config.max_body_bytes) {
            Ok(Some(body)) => dispatch(&method, &path, &body, &self.config),
            Ok(None) => {
                warn!("{method} {path}: body exceeds {} bytes", self.config.max_body_bytes);
                Reply::empty(413)
            },
            Err(e) => {
                warn!("{method} {path}: failed to read body: {e}");
                Reply::empty(400)
            },
        };

        debug!("{method} {path} -> {}", reply.status);
        if let Err(e) = send(request, reply) {
            warn!("{method} {path}: failed to send response: {e}");
        }
        Ok(())
    }

    /// Serves requests until receiving one fails.
    ///
    /// # Errors
    /// Returns the first [`ServerError::Io`] from [`Self::handle_next`].
    pub fn run(&self) -> Result<(), ServerError> {
        loop {
            self.handle_next()?;
        }
    }
}

/// Reads the request body, refusing to buffer more than `limit` bytes.
///
/// # Returns
/// - `Ok(Some(body))` if the body fits.
/// - `Ok(None)` if it is larger than `limit`.
fn read_body(request: &mut Request, limit: usize) -> io::Result<Option<Vec<u8>>> {
    if request.body_length().is_some_and(|len| len > limit) {
        return Ok(None);
    }

    let mut body = Vec::new();
    request.as_reader()
           .take(read_cap(limit))
           .read_to_end(&mut body)?;

    if body.len() > limit {
        return Ok(None);
    }
    Ok(Some(body))
}

/// Number of bytes to read so that a body one byte over `limit` is noticed.
///
/// Saturates for limits at or near `usize::MAX`.
fn read_cap(limit: usize) -> u64 {
    u64::try_from(limit).map_or(u64::MAX, |limit| limit.saturating_add(1))
}

fn send(request: Request, reply: Reply) -> io::Result<()> {
    match reply.body {
        Some(body) => {
            let mut response = Response::from_data(body.into_bytes()).with_status_code(reply.status);
            if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
                response.add_header(header);
            }
            request.respond(response)
        },
        None => request.respond(Response::empty(reply.status)),
    }
}
