//! Minimal HTTP/1.1 framing for the word service.
//!
//! Parses exactly what the four CRUD endpoints need: the request line, a
//! Content-Length header, and the body. Every response is JSON and the
//! connection is closed after one exchange.

use anyhow::{Context, bail, ensure};
use serde::Serialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Upper bound on request bodies, to keep allocations bounded.
const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn json<T: Serialize>(status: u16, value: &T) -> Self {
        let body = serde_json::to_vec(value).expect("serialize response body");
        Self { status, body }
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    }
}

/// Read one request from the connection. Unknown headers are skipped; query
/// strings stay attached to the path and are stripped during routing.
pub async fn read_request<R>(reader: &mut R) -> anyhow::Result<Request>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let read = reader.read_line(&mut line).await?;
    if read == 0 {
        bail!("connection closed before request line");
    }

    let mut parts = line.split_whitespace();
    let method = parts.next().context("missing request method")?.to_string();
    let path = parts.next().context("missing request path")?.to_string();

    let mut content_length = 0usize;
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header).await? == 0 {
            break;
        }
        let header = header.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':')
            && name.trim().eq_ignore_ascii_case("content-length")
        {
            content_length = value
                .trim()
                .parse()
                .context("unparseable Content-Length")?;
        }
    }

    ensure!(
        content_length <= MAX_BODY_BYTES,
        "request body of {content_length} bytes exceeds limit"
    );

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).await?;

    Ok(Request { method, path, body })
}

pub async fn write_response<W>(writer: &mut W, response: &Response) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason_phrase(response.status),
        response.body.len(),
    );
    writer.write_all(head.as_bytes()).await?;
    writer.write_all(&response.body).await?;
    writer.flush().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    async fn parse(raw: &str) -> anyhow::Result<Request> {
        let mut reader = BufReader::new(raw.as_bytes());
        read_request(&mut reader).await
    }

    #[tokio::test]
    async fn parses_a_bodyless_request() {
        let request = parse("GET /api/words HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/api/words");
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn parses_a_json_body_via_content_length() {
        let body = r#"{"source":"casa","target":"house"}"#;
        let raw = format!(
            "POST /api/words HTTP/1.1\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        let request = parse(&raw).await.unwrap();
        assert_eq!(request.method, "POST");
        assert_eq!(request.body, body.as_bytes());
    }

    #[tokio::test]
    async fn header_names_are_case_insensitive() {
        let raw = "POST /api/words HTTP/1.1\r\ncontent-LENGTH: 2\r\n\r\nhi";
        let request = parse(raw).await.unwrap();
        assert_eq!(request.body, b"hi");
    }

    #[tokio::test]
    async fn rejects_oversized_bodies() {
        let raw = format!(
            "POST /api/words HTTP/1.1\r\nContent-Length: {}\r\n\r\n",
            MAX_BODY_BYTES + 1
        );
        assert!(parse(&raw).await.is_err());
    }

    #[tokio::test]
    async fn rejects_an_empty_connection() {
        assert!(parse("").await.is_err());
    }

    #[tokio::test]
    async fn writes_status_line_and_length() {
        let response = Response::json(200, &serde_json::json!({"message": "ok"}));
        let mut out = Vec::new();
        write_response(&mut out, &response).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Type: application/json\r\n"));
        assert!(text.ends_with(r#"{"message":"ok"}"#));
    }
}
