//! Per-interface broadcast socket.
//!
//! socket2 handles the option setup (bind, broadcast, non-blocking), then
//! the socket is handed to tokio for async send/receive.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use if_addrs::IfAddr;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;

use crate::error::{DiscoverError, Result};

/// One UDP socket bound to one local interface, sending to that
/// interface's broadcast address.
pub struct DiscoverySocket {
    socket: UdpSocket,
    interface: Ipv4Addr,
    target: SocketAddrV4,
}

impl DiscoverySocket {
    /// Bind a broadcast-enabled, non-blocking socket to `interface`,
    /// targeting `target` for outgoing requests.
    pub fn bind(interface: Ipv4Addr, target: SocketAddrV4) -> Result<Self> {
        let socket = create_socket(interface).map_err(|source| DiscoverError::Bind {
            address: interface,
            source,
        })?;

        Ok(Self {
            socket,
            interface,
            target,
        })
    }

    /// Bind one socket per broadcast-capable local interface.
    ///
    /// `port` is the destination port requests are broadcast to. Loopback
    /// and interfaces without a broadcast address are skipped; a bind
    /// failure on a usable interface is not absorbed.
    pub fn for_all_interfaces(port: u16) -> Result<Vec<Self>> {
        let interfaces = if_addrs::get_if_addrs().map_err(DiscoverError::Enumerate)?;

        let mut sockets = Vec::new();
        for interface in interfaces {
            if interface.is_loopback() {
                continue;
            }
            let IfAddr::V4(addr) = interface.addr else {
                continue;
            };
            let Some(broadcast) = addr.broadcast else {
                continue;
            };

            sockets.push(Self::bind(addr.ip, SocketAddrV4::new(broadcast, port))?);
        }

        Ok(sockets)
    }

    /// Address of the interface this socket is bound to.
    pub fn interface(&self) -> Ipv4Addr {
        self.interface
    }

    /// Destination of outgoing discovery requests.
    pub fn target(&self) -> SocketAddrV4 {
        self.target
    }

    /// Local address the socket actually bound (the port is ephemeral).
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Send one datagram to the broadcast target.
    pub async fn send(&self, datagram: &[u8]) -> std::io::Result<usize> {
        self.socket.send_to(datagram, SocketAddr::V4(self.target)).await
    }

    /// Receive one datagram.
    pub async fn recv_from(&self, buf: &mut [u8]) -> std::io::Result<(usize, SocketAddr)> {
        self.socket.recv_from(buf).await
    }
}

fn create_socket(interface: Ipv4Addr) -> std::io::Result<UdpSocket> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;

    socket.set_broadcast(true)?;

    let addr: SocketAddr = SocketAddrV4::new(interface, 0).into();
    socket.bind(&addr.into())?;

    socket.set_nonblocking(true)?;

    UdpSocket::from_std(socket.into())
}
