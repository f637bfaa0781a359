//! HTTP/1.1 Response Emitter
//!
//! Serializes a status line, a header block, cookies and a body onto an already open
//! [`Write`][std::io::Write] channel.
//!
//! ```rust
//! use emitter::{Response, Status};
//!
//! let mut res = Response::new(Vec::new());
//! res.set_status(Status::OK)
//!     .set_header("Content-Type", "text/plain")
//!     .set_content("hi");
//! res.send().unwrap();
//!
//! assert_eq!(
//!     res.get_ref().as_slice(),
//!     b"200 OK\r\nContent-Length: 2\r\nContent-Type: text/plain\r\n\r\nhi",
//! );
//! ```
#![warn(missing_debug_implementations)]

mod log;

pub mod http;
pub mod headers;
pub mod body;
pub mod response;

pub use http::Status;
pub use headers::{CookieList, HeaderMap};
pub use body::{ChunkedEncoder, Content, DEFAULT_CHUNK_SIZE};
pub use response::{Response, SendError};
