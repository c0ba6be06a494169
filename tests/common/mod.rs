//! One-shot local HTTP stub standing in for the COTOHA API

#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

/// A request as the stub saw it
#[derive(Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

/// Serves the given `(status, body)` replies in order, one per connection
pub struct StubServer {
    pub base_url: String,
    requests: Receiver<Recorded>,
    handle: Option<JoinHandle<()>>,
}

impl StubServer {
    pub fn start(replies: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || {
            for (status, body) in replies {
                let (stream, _) = match listener.accept() {
                    Ok(conn) => conn,
                    Err(_) => return,
                };
                let recorded = serve_one(stream, status, &body);
                if tx.send(recorded).is_err() {
                    return;
                }
            }
        });

        Self {
            base_url,
            requests: rx,
            handle: Some(handle),
        }
    }

    /// Requests received so far, waiting for the server thread to finish
    pub fn finish(mut self) -> Vec<Recorded> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("stub server thread");
        }
        self.requests.try_iter().collect()
    }
}

pub fn token_reply(token: &str) -> (u16, String) {
    (200, format!(r#"{{"access_token":"{}","token_type":"bearer"}}"#, token))
}

pub fn sentiment_reply(body: &str) -> (u16, String) {
    (200, body.to_string())
}

fn serve_one(stream: TcpStream, status: u16, body: &str) -> Recorded {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((k, v)) = line.split_once(':') {
            headers.push((k.trim().to_string(), v.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);
    let mut buf = vec![0u8; length];
    reader.read_exact(&mut buf).unwrap();

    let reason = if status == 200 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let mut stream = reader.into_inner();
    stream.write_all(response.as_bytes()).unwrap();
    stream.flush().unwrap();

    Recorded {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&buf).into_owned(),
    }
}
