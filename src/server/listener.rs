// Listener module
// Binds the single TCP listener a release serves on

use std::io;
use std::net::SocketAddr;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Pending connections the kernel queues before `accept`
const BACKLOG: i32 = 128;

/// Bind a `TcpListener` for one release.
///
/// `SO_REUSEADDR` lets a restarted process rebind while old sockets sit in
/// `TIME_WAIT`. `SO_REUSEPORT` is not set, so binding a port held by a
/// running blue or green process fails with `AddrInUse`.
///
/// An IPv6 wildcard address also accepts IPv4 clients. Port 0 picks an
/// ephemeral port.
pub fn bind_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;

    // Windows SO_REUSEADDR allows stealing a bound port
    #[cfg(unix)]
    socket.set_reuse_address(true)?;

    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    TcpListener::from_std(socket.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ephemeral_port() {
        let listener = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_second_bind_on_same_port_fails() {
        let first = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = first.local_addr().unwrap();

        let err = bind_listener(addr).expect_err("port already held by a running release");
        assert_eq!(err.kind(), io::ErrorKind::AddrInUse);
    }
}
