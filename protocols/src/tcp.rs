use std::io;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::ProbeError;

/// Attempts a full TCP handshake with `host:port` within `limit`.
///
/// `host` may be a hostname; resolution happens inside the connect and
/// counts against the limit.
pub async fn connect(host: &str, port: u16, limit: Duration) -> Result<(), ProbeError> {
    match timeout(limit, TcpStream::connect((host, port))).await {
        Ok(Ok(_stream)) => Ok(()),
        Ok(Err(e)) if e.kind() == io::ErrorKind::ConnectionRefused => Err(ProbeError::Refused),
        Ok(Err(e)) => Err(ProbeError::Io(e)),
        Err(_elapsed) => Err(ProbeError::TimedOut),
    }
}
