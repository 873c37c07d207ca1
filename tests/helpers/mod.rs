#![allow(dead_code)]

pub mod test_utils {
    use std::net::SocketAddr;
    use std::time::Instant;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Everything one client sent, chunk by chunk as it was read, up to EOF
    #[derive(Debug, Default)]
    pub struct Received {
        pub chunks: Vec<(Instant, Vec<u8>)>,
    }

    impl Received {
        pub fn data(&self) -> Vec<u8> {
            self.chunks.iter().flat_map(|(_, c)| c.iter().copied()).collect()
        }
    }

    /// Accepts `connections` clients one after another and records what each sent.
    /// Each connection is only finished once the client closes it, so a completed
    /// handle also proves the sockets were closed.
    pub async fn spawn_capture_server(connections: usize) -> (u16, JoinHandle<Vec<Received>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("Failed to bind capture server");
        let port = listener.local_addr().unwrap().port();

        let handle = tokio::spawn(async move {
            let mut all = Vec::new();
            for _ in 0..connections {
                let (mut socket, _) = listener.accept().await.expect("accept failed");
                let mut received = Received::default();
                let mut buf = [0u8; 16 * 1024];
                loop {
                    match socket.read(&mut buf).await {
                        Ok(0) => break,
                        Ok(n) => received.chunks.push((Instant::now(), buf[..n].to_vec())),
                        Err(_) => break,
                    }
                }
                all.push(received);
            }
            all
        });

        (port, handle)
    }

    /// A loopback port with nothing listening on it
    pub async fn closed_port() -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        drop(listener);
        addr.port()
    }

    pub fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).expect("output should be UTF-8")
    }
}
