use super::{CookieList, HeaderMap};

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<HeaderMap>();
    is_send_sync::<CookieList>();
};

#[test]
fn header_map() {
    let mut map = HeaderMap::new();
    assert!(map.is_empty());

    assert!(map.insert("Content-Type", "text/plain").is_none());
    assert!(map.contains_key("content-type"));
    assert!(map.contains_key("CONTENT-TYPE"));
    assert_eq!(map.get("Content-type"), Some("text/plain"));

    assert!(map.insert("Accept", "*/*").is_none());
    assert!(map.insert("host", "example.com").is_none());
    assert_eq!(map.len(), 3);

    // Remove

    assert_eq!(map.remove("ACCEPT").as_deref(), Some("*/*"));
    assert!(!map.contains_key("accept"));
    assert!(map.remove("accept").is_none());
    assert_eq!(map.len(), 2);

    // Clear

    map.clear();
    assert_eq!(map.len(), 0);
    assert!(map.is_empty());
    assert!(!map.contains_key("content-type"));
    assert!(!map.contains_key("host"));
}

#[test]
fn header_map_overwrite_ignore_case() {
    let mut map = HeaderMap::new();

    map.insert("x-token", "one");
    assert_eq!(map.insert("X-Token", "two").as_deref(), Some("one"));
    assert_eq!(map.insert("X-TOKEN", "three").as_deref(), Some("two"));

    assert_eq!(map.len(), 1);
    assert_eq!(map.get("x-token"), Some("three"));

    // the most recent casing is kept for serialization
    let fields = map.iter().collect::<Vec<_>>();
    assert_eq!(fields, [("X-TOKEN", "three")]);
}

#[test]
fn header_map_sorted_ignore_case() {
    let mut map = HeaderMap::new();
    map.insert("content-type", "text/plain");
    map.insert("Accept", "*/*");
    map.insert("X-Request-Id", "42");
    map.insert("Content-Length", "2");
    map.insert("date", "today");

    let names = map.iter().map(|(name, _)| name).collect::<Vec<_>>();
    assert_eq!(
        names,
        ["Accept", "Content-Length", "content-type", "date", "X-Request-Id"]
    );
    assert_eq!(map.iter().len(), 5);
}

#[test]
fn cookie_list() {
    let mut cookies = CookieList::new();
    assert!(cookies.is_empty());

    cookies.push("session=abc");
    cookies.push("theme=dark");
    cookies.push(String::from("session=abc"));

    assert_eq!(cookies.len(), 3);
    assert_eq!(
        cookies.iter().collect::<Vec<_>>(),
        ["session=abc", "theme=dark", "session=abc"]
    );
}
