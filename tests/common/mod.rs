//! One-shot HTTP stub standing in for the Person service.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

/// What the stub received.
pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim().eq_ignore_ascii_case(name).then(|| value.trim())
        })
    }
}

/// Accepts exactly one connection, records the request, and answers with a
/// fixed status and body.
pub struct StubServer {
    pub url: String,
    handle: JoinHandle<CapturedRequest>,
}

impl StubServer {
    pub fn respond(status_line: &str, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/soap", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status_line}\r\n\
             Content-Type: application/soap+xml; charset=utf-8\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let captured = read_request(&mut BufReader::new(stream.try_clone().unwrap()));
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            captured
        });

        Self { url, handle }
    }

    /// Waits for the exchange to finish and returns the captured request.
    pub fn request(self) -> CapturedRequest {
        self.handle.join().unwrap()
    }
}

fn read_request(reader: &mut impl BufRead) -> CapturedRequest {
    let mut head = String::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
            break;
        }
        head.push_str(&line);
    }

    let request = CapturedRequest {
        head,
        body: String::new(),
    };
    let length = request
        .header("content-length")
        .map_or(0, |v| v.parse::<usize>().unwrap());

    let mut body = vec![0; length];
    reader.read_exact(&mut body).unwrap();

    CapturedRequest {
        body: String::from_utf8(body).unwrap(),
        ..request
    }
}
