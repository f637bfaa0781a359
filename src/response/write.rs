use bytes::BufMut;

use crate::headers::standard::SET_COOKIE;
use crate::response::Parts;

/// Serialize response preamble, the status line, headers, cookies and the blank line.
///
/// Every line is terminated by CRLF.
pub fn write_head<B: BufMut>(parts: &Parts, mut bufm: B) {
    let mut code = itoa::Buffer::new();
    bufm.put_slice(code.format(parts.status.code()).as_bytes());
    bufm.put_slice(b" ");
    bufm.put_slice(parts.status.reason().as_bytes());
    bufm.put_slice(b"\r\n");

    for (name, value) in parts.headers.iter() {
        bufm.put_slice(name.as_bytes());
        bufm.put_slice(b": ");
        bufm.put_slice(value.as_bytes());
        bufm.put_slice(b"\r\n");
    }

    for cookie in parts.cookies.iter() {
        bufm.put_slice(SET_COOKIE.as_bytes());
        bufm.put_slice(b": ");
        bufm.put_slice(cookie.as_bytes());
        bufm.put_slice(b"\r\n");
    }

    bufm.put_slice(b"\r\n");
}

/// Returns the exact length of the serialized preamble.
pub fn head_len(parts: &Parts) -> usize {
    const CRLF: usize = 2;
    const SEP: usize = 2;

    let status = itoa::Buffer::new().format(parts.status.code()).len() + 1 + parts.status.reason().len();
    let headers = parts
        .headers
        .iter()
        .map(|(name, value)| name.len() + SEP + value.len() + CRLF)
        .sum::<usize>();
    let cookies = parts
        .cookies
        .iter()
        .map(|cookie| SET_COOKIE.len() + SEP + cookie.len() + CRLF)
        .sum::<usize>();

    status + CRLF + headers + cookies + CRLF
}
