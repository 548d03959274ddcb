use std::time::Duration;

use tokio::net::UdpSocket;
use tokio::time::timeout;

use crate::ProbeError;

/// Binds an ephemeral socket and connects it to `host:port` within `limit`.
///
/// No datagram is exchanged: success only means the local stack accepted
/// the association, not that anything is listening on the far end.
pub async fn connect(host: &str, port: u16, limit: Duration) -> Result<(), ProbeError> {
    let attempt = async {
        let socket: UdpSocket = UdpSocket::bind(("0.0.0.0", 0)).await?;
        socket.connect((host, port)).await
    };

    match timeout(limit, attempt).await {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(ProbeError::Io(e)),
        Err(_elapsed) => Err(ProbeError::TimedOut),
    }
}
