//! Minimal one-route HTTP server serving canned responses.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the server does with each accepted connection.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with the given status and body.
    Body { status: u16, body: String },
    /// Read the request, then hold the connection open without answering.
    Stall(Duration),
}

impl Reply {
    pub fn json(body: impl Into<String>) -> Self {
        Self::Body {
            status: 200,
            body: body.into(),
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Body {
            status,
            body: body.into(),
        }
    }
}

pub struct CannedServer {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl CannedServer {
    /// Serve `replies` in order, one per connection; the last one repeats.
    pub async fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let mut served = 0usize;
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let reply = replies
                    .get(served)
                    .or_else(|| replies.last())
                    .cloned()
                    .expect("at least one reply");
                served += 1;

                tokio::spawn(async move {
                    let mut buf = vec![0u8; 8192];
                    let _ = socket.read(&mut buf).await;

                    match reply {
                        Reply::Body { status, body } => {
                            let response = format!(
                                "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                                body.len()
                            );
                            let _ = socket.write_all(response.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        }
                        Reply::Stall(duration) => {
                            tokio::time::sleep(duration).await;
                        }
                    }
                });
            }
        });

        Self { addr, handle }
    }

    /// API root to put in `bazaar.api_url`.
    pub fn api_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for CannedServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
