//! HTTP Header Map and Cookie List.
mod name;
mod map;
mod iter;
mod cookie;

pub use name::standard;
pub use map::HeaderMap;
pub use iter::Iter;
pub use cookie::{CookieList, Cookies};

#[cfg(test)]
mod test;
