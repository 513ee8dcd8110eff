#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use tokio::io::{AsyncReadExt, AsyncWriteExt};
#[cfg(test)]
use tokio::net::{TcpListener, TcpStream};

#[cfg(test)]
use crate::core::config::MinIOConfig;
#[cfg(test)]
use crate::modules::storage::MinIOClient;

/// Responder for the stub backend: maps the HTTP method of each incoming
/// request to a canned status and XML body.
#[cfg(test)]
pub type StubResponder = fn(&str) -> (u16, &'static str);

/// Spawn a one-shot HTTP backend on a random local port and return its
/// endpoint URL. Lives until the test runtime shuts down.
#[cfg(test)]
pub async fn spawn_stub_backend(respond: StubResponder) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(serve_connection(socket, respond));
        }
    });

    format!("http://{}", addr)
}

#[cfg(test)]
pub fn stub_storage_client(endpoint: &str) -> Arc<MinIOClient> {
    let config = MinIOConfig {
        endpoint: endpoint.to_string(),
        access_key: "test".to_string(),
        secret_key: "test".to_string(),
        region: "us-east-1".to_string(),
    };

    Arc::new(MinIOClient::new(config).unwrap())
}

#[cfg(test)]
async fn serve_connection(mut socket: TcpStream, respond: StubResponder) {
    let mut buf: Vec<u8> = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        // Read up to the end of the request headers
        let header_end = loop {
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
        let method = head.split_whitespace().next().unwrap_or("").to_string();
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        // Drain the request body before answering
        while buf.len() < header_end + content_length {
            match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => return,
                Ok(n) => buf.extend_from_slice(&chunk[..n]),
            }
        }
        buf.drain(..header_end + content_length);

        let (status, body) = respond(&method);
        let body = if method == "HEAD" { "" } else { body };
        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/xml\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        );
        if socket.write_all(response.as_bytes()).await.is_err() {
            return;
        }
    }
}
