//! A one-route HTTP stub for exercising the API caller without the network.

use std::sync::{Arc, Mutex, Once};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

static NO_PROXY: Once = Once::new();

pub struct StubServer {
    /// Query base pointing at the stub, with a fixed test key.
    pub base: String,
    /// Request lines received so far (`GET /query?... HTTP/1.1`).
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Answers every request with `status` and `body`.
pub async fn serve(status: u16, body: impl Into<String>) -> StubServer {
    // Keep an ambient HTTP proxy from swallowing loopback requests. Set once,
    // before the first client of the test binary reads the environment.
    NO_PROXY.call_once(|| std::env::set_var("NO_PROXY", "127.0.0.1,localhost"));

    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => head.extend_from_slice(&chunk[..n]),
                }
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            if let Some(line) = String::from_utf8_lossy(&head).lines().next() {
                seen.lock().unwrap().push(line.to_string());
            }

            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    StubServer {
        base: format!("http://{}/query?apikey=TESTKEY&", addr),
        requests,
    }
}
