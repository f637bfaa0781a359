use std::io::{self, BufRead, BufReader, BufWriter, Read};
use std::net::{TcpListener, TcpStream};
use std::num::NonZeroUsize;

use emitter::headers::standard::CONTENT_TYPE;
use emitter::{Response, SendError, Status};

fn main() -> io::Result<()> {
    env_logger::init();

    let listener = TcpListener::bind("127.0.0.1:3000")?;
    log::info!("listening on {}", listener.local_addr()?);

    for stream in listener.incoming() {
        let stream = stream?;
        if let Err(err) = handle(stream) {
            log::error!("{err}");
        }
    }

    Ok(())
}

fn handle(stream: TcpStream) -> Result<(), SendError> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut line = String::new();
    reader.read_line(&mut line)?;
    let path = line.split_whitespace().nth(1).unwrap_or("/").to_owned();

    // skip the remaining request headers
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 || line == "\r\n" {
            break;
        }
    }

    let mut res = Response::new(BufWriter::new(stream));
    match path.as_str() {
        "/" => {
            res.set_header(CONTENT_TYPE, "text/plain").set_text("hello\n");
        }
        "/stream" => {
            res.set_header(CONTENT_TYPE, "text/plain")
                .set_chunk_size(NonZeroUsize::new(16).unwrap())
                .set_chunked_content(io::repeat(b'x').take(100));
        }
        "/cookie" => {
            res.add_cookie("session=abc; Path=/").add_cookie("theme=dark");
        }
        "/manifest" => {
            if let Err(err) = res.set_content_file("Cargo.toml") {
                log::warn!("{err}");
                res.set_status(Status::INTERNAL_SERVER_ERROR);
            }
        }
        _ => {
            res.set_status(Status::NOT_FOUND).set_text("not found\n");
        }
    }
    res.send()
}
