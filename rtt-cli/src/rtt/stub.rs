//! Local HTTP stub for exercising the real [`RttClient`](super::RttClient).
//!
//! Each connection is answered on its own thread with `Connection: close`,
//! so a slow reply never holds up the others.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// What the stub received.
#[derive(Debug, Clone)]
pub struct StubRequest {
    pub path: String,
    pub authorization: Option<String>,
}

/// How the stub answers.
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Status and body, sent after `delay_ms`.
    Respond {
        status: u16,
        body: String,
        delay_ms: u64,
    },
    /// Close the connection without sending anything.
    Hangup,
}

impl StubReply {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        StubReply::Respond {
            status,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn delayed(delay_ms: u64, body: &str) -> Self {
        StubReply::Respond {
            status: 200,
            body: body.to_string(),
            delay_ms,
        }
    }
}

/// Start a stub on an ephemeral local port and return its base URL.
///
/// The listener thread lives for the rest of the test process.
pub fn serve<F>(route: F) -> String
where
    F: Fn(&StubRequest) -> StubReply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let route = Arc::new(route);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(stream) = stream else { break };
            let route = Arc::clone(&route);
            thread::spawn(move || answer(stream, route.as_ref()));
        }
    });

    format!("http://{addr}")
}

fn answer<F>(mut stream: TcpStream, route: &F)
where
    F: Fn(&StubRequest) -> StubReply,
{
    let Some(request) = read_request(&stream) else {
        return;
    };

    match route(&request) {
        StubReply::Hangup => {}
        StubReply::Respond {
            status,
            body,
            delay_ms,
        } => {
            if delay_ms > 0 {
                thread::sleep(Duration::from_millis(delay_ms));
            }
            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            // The client may have timed out and gone already.
            let _ = stream.write_all(response.as_bytes());
        }
    }
}

/// Request line and headers; GET requests carry no body.
fn read_request(stream: &TcpStream) -> Option<StubRequest> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let path = request_line.split_whitespace().nth(1)?.to_string();

    let mut authorization = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).ok()? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("authorization") {
                authorization = Some(value.trim().to_string());
            }
        }
    }

    Some(StubRequest {
        path,
        authorization,
    })
}
