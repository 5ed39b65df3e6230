//! Minimal HTTP/1.1 stub standing in for the token and Helix endpoints.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tracing_subscriber::fmt::MakeWriter;

use stream_census::CensusConfig;

/// A request as seen by the stub
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

#[derive(Clone)]
struct Route {
    method: &'static str,
    path: &'static str,
    status: u16,
    body: String,
}

/// Canned-response HTTP server on an ephemeral local port
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

/// Route table builder
#[derive(Default)]
pub struct StubBuilder {
    routes: Vec<Route>,
}

impl StubBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, method: &'static str, path: &'static str, status: u16, body: impl Into<String>) -> Self {
        self.routes.push(Route {
            method,
            path,
            status,
            body: body.into(),
        });
        self
    }

    pub async fn start(self) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
        let addr = listener.local_addr().expect("stub address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(self.routes);

        let recorded = requests.clone();
        let handle = tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    return;
                };
                let routes = routes.clone();
                let recorded = recorded.clone();
                tokio::spawn(async move {
                    let _ = serve(socket, &routes, &recorded).await;
                });
            }
        });

        StubServer {
            base_url: format!("http://{}", addr),
            requests,
            handle,
        }
    }
}

impl StubServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests().into_iter().filter(|r| r.path == path).collect()
    }

    /// Configuration pointing both endpoints at this stub
    pub fn config(&self) -> CensusConfig {
        let base = self.base_url.clone();
        CensusConfig::from_lookup(move |key| match key {
            "CLIENT_ID" => Some("stub-client".to_string()),
            "CLIENT_SECRET" => Some("stub-secret".to_string()),
            "CENSUS_TOKEN_URL" => Some(format!("{}/oauth2/token", base)),
            "CENSUS_API_BASE" => Some(format!("{}/helix", base)),
            "CENSUS_HTTP_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        })
        .expect("stub config")
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve(
    mut socket: TcpStream,
    routes: &[Route],
    recorded: &Mutex<Vec<RecordedRequest>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();
    let (path, query) = match target.split_once('?') {
        Some((p, q)) => (p.to_string(), q.to_string()),
        None => (target.clone(), String::new()),
    };

    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_lowercase(), v.trim().to_string()))
        .collect();

    let content_length: usize = headers
        .get("content-length")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body_end = buf.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

    recorded.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query,
        headers,
        body,
    });

    let (status, payload) = routes
        .iter()
        .find(|r| r.method == method && r.path == path)
        .map(|r| (r.status, r.body.clone()))
        .unwrap_or((404, r#"{"error":"Not Found","status":404,"message":"no route"}"#.to_string()));

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        payload.len(),
        payload
    );
    socket.write_all(response.as_bytes()).await?;
    socket.shutdown().await
}

/// In-memory log sink for asserting on emitted events
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Plain-text subscriber writing into this capture. Install it with
    /// `tracing::subscriber::set_default` for the current test thread.
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).to_string()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub const TOKEN_OK: &str = r#"{"access_token":"stub-token","expires_in":5011271,"token_type":"bearer"}"#;

pub const CATEGORIES_OK: &str = r#"{"data":[
    {"id":"509670","name":"Science & Technology","box_art_url":"https://example.invalid/a.jpg"},
    {"id":"1469308723","name":"Software and Game Development","box_art_url":"https://example.invalid/b.jpg"}
]}"#;

/// Streams body with the given viewer counts, in the given order
pub fn streams_body(viewers: &[u64], cursor: Option<&str>) -> String {
    let data: Vec<String> = viewers
        .iter()
        .enumerate()
        .map(|(i, v)| {
            format!(
                r#"{{"id":"{i}","user_id":"{i}","user_login":"dev{i}","user_name":"Dev{i}","game_id":"1469308723","game_name":"Software and Game Development","type":"live","title":"stream {i}","tags":[],"viewer_count":{v},"started_at":"2026-10-16T08:00:00Z","language":"en","thumbnail_url":"","is_mature":false}}"#
            )
        })
        .collect();
    let pagination = match cursor {
        Some(c) => format!(r#"{{"cursor":"{c}"}}"#),
        None => "{}".to_string(),
    };
    format!(r#"{{"data":[{}],"pagination":{}}}"#, data.join(","), pagination)
}
