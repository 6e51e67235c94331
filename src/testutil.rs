use std::io::{Read, Write};
use std::net::TcpListener;

/// One-shot HTTP/1.1 stub server.
///
/// Binds an ephemeral local port and answers a single request with the
/// given status line and body, then exits. Returns the base URL to point
/// a client at.
pub fn spawn_stub(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf);
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len(),
        );
        stream.write_all(response.as_bytes()).unwrap();
    });

    format!("http://{addr}")
}
