//! # Liveness Prober
//!
//! Best-effort reachability gate run before dispatch. TCP connect first; a
//! refused connection falls back to a UDP connect. The UDP association
//! cannot actually verify a listener, so a UDP "open" is an approximation,
//! not a guarantee.

use std::time::Duration;

use async_trait::async_trait;
use passprobe_common::config::Config;
use passprobe_common::network::target::Target;
use passprobe_common::{fail, success};
use passprobe_protocols::{ProbeError, tcp, udp};
use tracing::debug;

/// Connect-level transport, injectable for tests.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn tcp_connect(&self, host: &str, port: u16, limit: Duration) -> Result<(), ProbeError>;

    async fn udp_connect(&self, host: &str, port: u16, limit: Duration) -> Result<(), ProbeError>;
}

/// The real network stack.
pub struct NetTransport;

#[async_trait]
impl Transport for NetTransport {
    async fn tcp_connect(
        &self,
        host: &str,
        port: u16,
        limit: Duration,
    ) -> Result<(), ProbeError> {
        tcp::connect(host, port, limit).await
    }

    async fn udp_connect(
        &self,
        host: &str,
        port: u16,
        limit: Duration,
    ) -> Result<(), ProbeError> {
        udp::connect(host, port, limit).await
    }
}

/// Reports whether `target` looks reachable on its resolved port.
pub async fn alive(target: &Target, cfg: &Config) -> bool {
    alive_with(&NetTransport, target, cfg).await
}

/// [`alive`] against an explicit transport.
pub async fn alive_with(transport: &dyn Transport, target: &Target, cfg: &Config) -> bool {
    // A missing port is a configuration gap, not a network failure; there
    // is nothing to connect to.
    let Some(port) = target.port else {
        fail!("{} No port specified.", target.host);
        return false;
    };

    match transport.tcp_connect(&target.host, port, cfg.timeout).await {
        Ok(()) => {
            success!("[TCP] {}:{} is open.", target.host, port);
            true
        }
        Err(ProbeError::Refused) => {
            match transport.udp_connect(&target.host, port, cfg.timeout).await {
                Ok(()) => {
                    success!("[UDP] {}:{} is open.", target.host, port);
                    true
                }
                Err(e) => closed(target, port, e),
            }
        }
        Err(e) => closed(target, port, e),
    }
}

fn closed(target: &Target, port: u16, error: ProbeError) -> bool {
    fail!("{}:{} is closed.", target.host, port);
    debug!("probe failed: {error}");
    false
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
