//! HTTP/1.1 framing for the catalog server: one request per connection,
//! answered with `connection: close`.

use std::io::ErrorKind;
use std::time::SystemTime;

use catalog_api::limits::{enforce_max_header_size, enforce_max_message_size};
use catalog_api::status::StatusCode;
use memchr::{memchr, memmem::Finder};
use tokio::io::{AsyncRead, AsyncReadExt};

const HEAD_END: &[u8] = b"\r\n\r\n";
const READ_CHUNK: usize = 4096;
const SERVER_NAME: &str = "catalogd";

#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    /// Request target as sent, query string included.
    pub path: String,
    /// Names are lowercased.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self { method: method.into(), path: path.into(), headers: Vec::new(), body: Vec::new() }
    }

    pub fn with_body(mut self, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        self.headers.push(("content-type".to_string(), content_type.to_string()));
        self.body = body.into();
        self
    }

    /// Path without the query string.
    pub fn route(&self) -> &str {
        match self.path.find('?') {
            Some(i) => &self.path[..i],
            None => &self.path,
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    fn content_length(&self) -> Result<usize, StatusCode> {
        match self.header("content-length") {
            None => Ok(0),
            Some(v) => v.parse().map_err(|_| StatusCode::BadRequest),
        }
    }
}

/// Read one request. The error is the status to answer with: 413 when the
/// head or the declared body is over the limit, 400 for malformed or
/// truncated input.
pub async fn read_request<S>(stream: &mut S) -> Result<Request, StatusCode>
where
    S: AsyncRead + Unpin,
{
    let mut buf = Vec::with_capacity(READ_CHUNK);
    let head_len = read_head(stream, &mut buf).await?;
    let mut req = parse_head(&buf[..head_len])?;

    let body_len = req.content_length()?;
    if body_len == 0 {
        return Ok(req);
    }
    let total = head_len.checked_add(body_len).ok_or(StatusCode::RequestEntityTooLarge)?;
    enforce_max_message_size(total).map_err(|_| StatusCode::RequestEntityTooLarge)?;

    let mut body = buf.split_off(head_len);
    let have = body.len().min(body_len);
    body.resize(body_len, 0);
    stream.read_exact(&mut body[have..]).await.map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => StatusCode::BadRequest,
        _ => StatusCode::InternalServerError,
    })?;
    req.body = body;
    Ok(req)
}

/// Fill `buf` until it holds the whole head; returns the head length
/// including the blank line. Bytes past it belong to the body.
async fn read_head<S>(stream: &mut S, buf: &mut Vec<u8>) -> Result<usize, StatusCode>
where
    S: AsyncRead + Unpin,
{
    let finder = Finder::new(HEAD_END);
    let mut scanned: usize = 0;
    loop {
        let filled = buf.len();
        buf.resize(filled + READ_CHUNK, 0);
        let n = stream
            .read(&mut buf[filled..])
            .await
            .map_err(|_| StatusCode::InternalServerError)?;
        buf.truncate(filled + n);
        if n == 0 {
            return Err(StatusCode::BadRequest);
        }

        // The terminator can straddle two reads.
        let from = scanned.saturating_sub(HEAD_END.len() - 1);
        if let Some(pos) = finder.find(&buf[from..]) {
            let head_len = from + pos + HEAD_END.len();
            enforce_max_header_size(head_len).map_err(|_| StatusCode::RequestEntityTooLarge)?;
            return Ok(head_len);
        }
        enforce_max_header_size(buf.len()).map_err(|_| StatusCode::RequestEntityTooLarge)?;
        scanned = buf.len();
    }
}

fn parse_head(head: &[u8]) -> Result<Request, StatusCode> {
    let text = std::str::from_utf8(head).map_err(|_| StatusCode::BadRequest)?;
    let mut lines = text.split("\r\n").filter(|l| !l.is_empty());

    let request_line = lines.next().ok_or(StatusCode::BadRequest)?;
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(path)) = (parts.next(), parts.next()) else {
        return Err(StatusCode::BadRequest);
    };
    let mut req = Request::new(method, path);

    for line in lines {
        let colon = memchr(b':', line.as_bytes()).ok_or(StatusCode::BadRequest)?;
        let name = line[..colon].trim().to_ascii_lowercase();
        let value = line[colon + 1..].trim().to_string();
        req.headers.push((name, value));
    }
    Ok(req)
}

#[derive(Debug, Clone)]
pub struct Response {
    pub code: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Response {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Status line, fixed headers, then the handler's headers. JSON is the
    /// default content type; content-length is always computed here.
    pub fn into_bytes(self) -> Vec<u8> {
        let date = httpdate::fmt_http_date(SystemTime::now());
        let mut out = Vec::with_capacity(256 + self.body.len());
        out.extend_from_slice(
            format!("HTTP/1.1 {} {}\r\n", self.code.as_u16(), self.code.reason()).as_bytes(),
        );
        push_header(&mut out, "server", SERVER_NAME);
        push_header(&mut out, "date", &date);
        push_header(&mut out, "connection", "close");
        push_header(&mut out, "access-control-allow-origin", "*");
        if self.header("content-type").is_none() {
            push_header(&mut out, "content-type", "application/json");
        }
        for (name, value) in &self.headers {
            if !name.eq_ignore_ascii_case("content-length") {
                push_header(&mut out, name, value);
            }
        }
        push_header(&mut out, "content-length", &self.body.len().to_string());
        out.extend_from_slice(b"\r\n");
        out.extend_from_slice(&self.body);
        out
    }
}

/// Bodiless response, used when the request could not be read.
pub fn make_empty_response(code: StatusCode) -> Vec<u8> {
    Response { code, headers: Vec::new(), body: Vec::new() }.into_bytes()
}

fn push_header(out: &mut Vec<u8>, name: &str, value: &str) {
    out.extend_from_slice(name.as_bytes());
    out.extend_from_slice(b": ");
    out.extend_from_slice(value.as_bytes());
    out.extend_from_slice(b"\r\n");
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}
