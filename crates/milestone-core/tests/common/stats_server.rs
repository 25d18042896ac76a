//! Minimal HTTP/1.1 server that serves a fixed stats page for integration tests.
//!
//! Every GET gets the same status line and body. Counts requests so tests can
//! assert how often the source actually went to the network.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

pub struct StatsServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
}

impl StatsServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Serves `body` with `200 OK`.
pub fn start(body: &str) -> StatsServer {
    start_with_status(200, body)
}

/// Starts a server in a background thread. The server runs until the process exits.
pub fn start_with_status(status: u16, body: &str) -> StatsServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body.to_string());
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            hits_srv.fetch_add(1, Ordering::SeqCst);
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, status, &body));
        }
    });
    StatsServer {
        url: format!("http://127.0.0.1:{}/500million", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, status: u16, body: &str) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html; charset=UTF-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// Stats page as the live site renders it.
pub fn stats_page(downloads: u64, per_second: f64, updated_at: i64) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<body>\n<div id=\"counter\"></div>\n<script>\n    var stats = {{\"total\":{{\"downloads\":{},\"perSecond\":{}}},\"updatedAt\":{}}};\n</script>\n</body>\n</html>\n",
        downloads, per_second, updated_at
    )
}
