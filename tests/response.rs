use std::num::NonZeroUsize;

use emitter::{Response, Status};

/// Split a response into its preamble and body.
fn split(output: &[u8]) -> (&str, &[u8]) {
    let end = output
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("preamble terminator");
    let head = std::str::from_utf8(&output[..end + 4]).unwrap();
    (head, &output[end + 4..])
}

/// Decode a decimal sized chunk stream, returns the payload and every chunk size.
fn decode_chunks(mut body: &[u8]) -> (Vec<u8>, Vec<usize>) {
    let mut payload = Vec::new();
    let mut sizes = Vec::new();
    loop {
        let eol = body.windows(2).position(|w| w == b"\r\n").expect("chunk size line");
        let size: usize = std::str::from_utf8(&body[..eol]).unwrap().parse().unwrap();
        body = &body[eol + 2..];

        if size == 0 {
            assert_eq!(body, b"\r\n", "empty trailer section");
            return (payload, sizes);
        }

        payload.extend_from_slice(&body[..size]);
        assert_eq!(&body[size..size + 2], b"\r\n", "chunk terminator");
        body = &body[size + 2..];
        sizes.push(size);
    }
}

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

#[test]
fn chunked_stream_reconstructs_source() {
    for chunk_size in [1, 3, 4, 7, 64, 8192] {
        for len in [0, 1, 3, 4, 5, 63, 64, 65, 1000, 20_000] {
            let source = sample(len);

            let mut res = Response::new(Vec::new());
            res.set_chunk_size(NonZeroUsize::new(chunk_size).unwrap())
                .set_chunked_content(std::io::Cursor::new(source.clone()));
            res.send().unwrap();

            let output = res.into_inner();
            let (head, body) = split(&output);
            assert_eq!(head, "200 OK\r\nTransfer-Encoding: chunked\r\n\r\n");

            let (payload, sizes) = decode_chunks(body);
            assert_eq!(payload, source);

            if let Some((last, full)) = sizes.split_last() {
                assert!(full.iter().all(|&size| size == chunk_size));
                let expected = match len % chunk_size {
                    0 => chunk_size,
                    rem => rem,
                };
                assert_eq!(*last, expected);
            } else {
                assert_eq!(len, 0);
            }
        }
    }
}

#[test]
fn fixed_content_length_matches_body() {
    for len in [0, 1, 2, 100, 9000] {
        let source = sample(len);

        let mut res = Response::new(Vec::new());
        res.set_content(source.clone());
        res.send().unwrap();

        let output = res.into_inner();
        let (head, body) = split(&output);
        assert_eq!(head, format!("200 OK\r\nContent-Length: {len}\r\n\r\n"));
        assert_eq!(body, source);
    }
}

#[test]
fn full_response() {
    let mut res = Response::new(Vec::new());
    res.set_status(Status::new(201, "Created"))
        .add_cookie("session=abc; Path=/; HttpOnly")
        .set_header("location", "/items/1")
        .set_header("Content-Type", "application/json")
        .add_cookie("theme=dark")
        .set_header("Location", "/items/2")
        .set_content(r#"{"id":2}"#);
    res.send().unwrap();

    let output = String::from_utf8(res.into_inner()).unwrap();
    assert_eq!(
        output,
        "201 Created\r\n\
         Content-Length: 8\r\n\
         Content-Type: application/json\r\n\
         Location: /items/2\r\n\
         Set-Cookie: session=abc; Path=/; HttpOnly\r\n\
         Set-Cookie: theme=dark\r\n\
         \r\n\
         {\"id\":2}"
    );
}
