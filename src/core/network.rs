// Connection lifecycle for the payload actions: one fresh socket per send, always closed

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::core::types::{NetworkError, NetworkResult, Target};

/// Opens a new TCP connection to the target
pub async fn connect(target: &Target) -> NetworkResult<TcpStream> {
    debug!(%target, "connecting");
    let stream = TcpStream::connect(target.addr()?)
        .await
        .map_err(NetworkError::ConnectionFailed)?;
    debug!(%target, local = ?stream.local_addr().ok(), "connected");
    Ok(stream)
}

/// Sends FIN and drops the stream. A failed shutdown still drops (and so closes) the socket.
pub async fn close(mut stream: TcpStream) {
    if let Err(e) = stream.shutdown().await {
        debug!("shutdown failed, dropping socket anyway: {}", e);
    }
}

/// Writes one whole buffer and flushes it
pub async fn write_chunk<S>(stream: &mut S, data: &[u8]) -> NetworkResult<usize>
where
    S: AsyncWrite + Unpin,
{
    stream.write_all(data).await?;
    stream.flush().await?;
    debug!(bytes = data.len(), "wrote chunk");
    Ok(data.len())
}

/// Connect, write `data` once, close.
/// On a write error the stream is dropped on return, which closes it.
pub async fn send_bytes(target: &Target, data: &[u8]) -> NetworkResult<usize> {
    let mut stream = connect(target).await?;
    let written = write_chunk(&mut stream, data).await?;
    close(stream).await;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_send_bytes_delivers_and_closes() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            // read_to_end only returns once the client has closed
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let written = send_bytes(&Target::new("127.0.0.1", port), b"ping\n").await.unwrap();
        assert_eq!(written, 5);
        assert_eq!(server.await.unwrap(), b"ping\n");
    }

    #[tokio::test]
    async fn test_connect_refused_is_connection_failed() {
        // Bind then drop to get a port with nothing behind it
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };

        match connect(&Target::new("127.0.0.1", port)).await {
            Err(NetworkError::ConnectionFailed(_)) => {}
            other => panic!("expected ConnectionFailed, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_write_chunk_on_mock() {
        let mut mock = tokio_test::io::Builder::new().write(b"abc").build();
        assert_eq!(write_chunk(&mut mock, b"abc").await.unwrap(), 3);
    }
}
