//! HTTP Protocol.
mod status;

pub use status::Status;
