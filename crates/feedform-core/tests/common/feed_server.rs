//! Minimal HTTP/1.1 server standing in for a route instance in integration tests.
//!
//! Answers `GET /<known prefix>/...` with an RSS document and an ETag, and
//! anything else with 404. Every request path is recorded.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;

pub struct FeedServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

/// Starts a server in a background thread that serves feeds under `/<prefix>/`.
/// The server runs until the process exits.
pub fn start(prefix: &str) -> FeedServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let served_prefix = format!("/{prefix}/");
    let log = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let log = Arc::clone(&log);
            let served_prefix = served_prefix.clone();
            thread::spawn(move || handle(stream, &served_prefix, &log));
        }
    });
    FeedServer {
        base_url: format!("http://127.0.0.1:{port}"),
        requests,
    }
}

fn handle(mut stream: std::net::TcpStream, served_prefix: &str, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(request) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    log.lock().unwrap().push(path.clone());

    if !path.starts_with(served_prefix) {
        let _ = stream.write_all(b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }

    let body = format!(
        "<?xml version=\"1.0\"?><rss version=\"2.0\"><channel><title>Feed for {path}</title></channel></rss>"
    );
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/rss+xml\r\nETag: \"feed-{}\"\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        path.len(),
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}
