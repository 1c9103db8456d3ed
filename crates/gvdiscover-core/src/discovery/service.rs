//! Discovery engine: broadcast the request, collect acknowledgements.

use std::io::ErrorKind;
use std::time::Duration;

use futures::future;
use tokio::time::timeout;
use tracing::{debug, trace};

use super::socket::DiscoverySocket;
use crate::device::DeviceInfo;
use crate::error::{DiscoverError, Result};
use crate::protocol::{self, DISCOVERY_CMD, GVCP_PORT, MAX_ACK_SIZE};

/// Per-socket attempt budget: how many malformed or foreign datagrams a
/// worker discards before giving up even if time remains. A readiness
/// timeout does not consume retries, it ends the worker.
const ATTEMPTS_PER_SOCKET: u32 = 10;

/// Discovery engine owning one socket per broadcast-capable interface.
pub struct Discoverer {
    sockets: Vec<DiscoverySocket>,
}

impl Discoverer {
    /// Bind a discovery socket on every broadcast-capable interface.
    ///
    /// Fails if interface enumeration fails, if a usable interface cannot
    /// be bound, or if no usable interface exists at all.
    pub fn new() -> Result<Self> {
        let sockets = DiscoverySocket::for_all_interfaces(GVCP_PORT)?;
        if sockets.is_empty() {
            return Err(DiscoverError::NoInterfaces);
        }

        Ok(Self { sockets })
    }

    /// Build an engine over an explicit set of sockets, e.g. to discover
    /// on a single chosen interface.
    pub fn with_sockets(sockets: Vec<DiscoverySocket>) -> Self {
        Self { sockets }
    }

    /// The owned sockets, in enumeration order.
    pub fn sockets(&self) -> &[DiscoverySocket] {
        &self.sockets
    }

    /// Send the discovery command once per socket, in enumeration order.
    ///
    /// An interface with no route to its broadcast address is skipped;
    /// any other send failure propagates. Success means "attempted on all
    /// sockets", not "delivered".
    pub async fn broadcast_request(&self) -> Result<()> {
        for socket in &self.sockets {
            match socket.send(&DISCOVERY_CMD).await {
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::NetworkUnreachable => {
                    debug!(
                        "skipping interface {} with unreachable broadcast {}",
                        socket.interface(),
                        socket.target()
                    );
                }
                Err(source) => {
                    return Err(DiscoverError::Send {
                        address: socket.interface(),
                        source,
                    });
                }
            }
        }

        Ok(())
    }

    /// Collect acknowledgements, one worker per socket, all concurrent.
    ///
    /// `timeout_per_socket` bounds each worker's wait for a single
    /// datagram; the attempt budget bounds how much noise a worker
    /// tolerates. Returns the per-socket results in enumeration order,
    /// with invalid entries for silent interfaces, plus a flag that is
    /// true iff at least one entry is valid. Total wall-clock time is
    /// bounded by roughly one `timeout_per_socket`, not the per-socket
    /// sum.
    pub async fn get_response(
        &self,
        timeout_per_socket: Duration,
    ) -> Result<(bool, Vec<DeviceInfo>)> {
        let workers = self
            .sockets
            .iter()
            .map(|socket| collect_one(socket, timeout_per_socket));

        // join_all keeps the input order, so results line up with sockets.
        let outcomes = future::join_all(workers).await;

        let mut found_any = false;
        let mut results = Vec::with_capacity(outcomes.len());
        for outcome in outcomes {
            let info = outcome?;
            found_any |= info.is_valid();
            results.push(info);
        }

        Ok((found_any, results))
    }
}

/// Bounded receive loop for one socket.
async fn collect_one(socket: &DiscoverySocket, wait: Duration) -> Result<DeviceInfo> {
    let mut info = DeviceInfo::new();
    let mut attempts = ATTEMPTS_PER_SOCKET;
    let mut buf = [0u8; MAX_ACK_SIZE];

    while !info.is_valid() && attempts > 0 {
        attempts -= 1;

        match timeout(wait, socket.recv_from(&mut buf)).await {
            Ok(Ok((received, from))) => match protocol::parse_ack(&buf[..received]) {
                Some(payload) => {
                    trace!(
                        "acknowledgement from {} on interface {}",
                        from,
                        socket.interface()
                    );
                    info.set(payload);
                }
                None => {
                    trace!(
                        "discarding {} stray bytes from {} on interface {}",
                        received,
                        from,
                        socket.interface()
                    );
                }
            },
            Ok(Err(source)) => {
                return Err(DiscoverError::Receive {
                    address: socket.interface(),
                    source,
                });
            }
            // A socket that stayed silent for a full wait stays abandoned;
            // only noisy datagrams are worth retrying.
            Err(_) => attempts = 0,
        }
    }

    Ok(info)
}
