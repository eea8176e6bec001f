use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::io::{BufRead, BufReader, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::process::{Command, Output};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

pub const CSRF_TOKEN: &str = "csrf-token-1";
pub const CONSENT_COOKIE: &str = "cassette_consent=";

const DEVICES_JSON: &str = r#"[
  {"id": "devA", "is_active": true, "is_restricted": false,
   "name": "Kitchen speaker", "type": "Speaker", "volume_percent": 40}
]"#;

const EXPORT_JSON: &str = r#"{"userID": "user-1", "playerStates": []}"#;

const STATES_JSON: &str = r#"[
  {"trackName": "Track A", "albumName": "Album A", "artistName": "Artist",
   "progress": 1000, "duration": 2000, "suspendedAtTs": 100},
  {"trackName": "Track B", "albumName": "Album B", "artistName": "Artist",
   "progress": 1000, "duration": 2000, "suspendedAtTs": 300},
  {"trackName": "Track C", "albumName": "Album C", "artistName": "Artist",
   "progress": 1000, "duration": 2000, "suspendedAtTs": 200}
]"#;

/// Knobs for misbehaving-backend scenarios.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerOptions {
    /// Answer the token endpoint without the CSRF header.
    pub omit_token_header: bool,
}

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ServerHandle {
    /// Request lines (`METHOD path`) in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawn a lightweight fake Cassette backend for tests.
///
/// It replays the real backend's contract at the boundary: every route wants
/// the consent cookie, mutating routes additionally want the CSRF header the
/// token endpoint handed out.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_backend() -> Result<(String, ServerHandle), String> {
    spawn_backend_with(ServerOptions::default())
}

/// Like [`spawn_backend`], with explicit behavior knobs.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_backend_with(options: ServerOptions) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let requests_for_thread = Arc::clone(&requests);

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let log = Arc::clone(&requests_for_thread);
                    thread::spawn(move || handle_client(stream, &log, options));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
            requests,
        },
    ))
}

fn handle_client(stream: TcpStream, log: &Arc<Mutex<Vec<String>>>, options: ServerOptions) {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    let mut parts = request_line.split_whitespace();
    let (Some(method), Some(path)) = (parts.next(), parts.next()) else {
        return;
    };
    let method = method.to_owned();
    let path = path.to_owned();

    let mut headers: BTreeMap<String, String> = BTreeMap::new();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).is_err() {
            return;
        }
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        if let Some((name, value)) = trimmed.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_owned());
        }
    }

    if let Ok(mut entries) = log.lock() {
        entries.push(format!("{} {}", method, path));
    }

    let stream = reader.into_inner();
    respond(stream, &method, &path, &headers, options);
}

fn respond(
    mut stream: TcpStream,
    method: &str,
    path: &str,
    headers: &BTreeMap<String, String>,
    options: ServerOptions,
) {
    let consent_ok = headers
        .get("cookie")
        .is_some_and(|cookie| cookie.contains(CONSENT_COOKIE) && !cookie.contains("OPTED_OUT"));
    if !consent_ok {
        write_response(&mut stream, "403 Forbidden", &[], "consent required");
        return;
    }

    match (method, path) {
        ("HEAD", "/csrfToken") => {
            if options.omit_token_header {
                write_response(&mut stream, "200 OK", &[], "");
            } else {
                let token_header = format!("X-Cassette-CSRF: {}", CSRF_TOKEN);
                write_response(&mut stream, "200 OK", &[&token_header], "");
            }
        }
        ("GET", "/activeDevices") => {
            write_response(&mut stream, "200 OK", &[], DEVICES_JSON);
        }
        ("GET", "/playerStates") => {
            write_response(&mut stream, "200 OK", &[], STATES_JSON);
        }
        ("GET", "/you") => {
            write_response(&mut stream, "200 OK", &[], EXPORT_JSON);
        }
        _ => {
            let csrf_ok = headers
                .get("x-cassette-csrf")
                .is_some_and(|token| token == CSRF_TOKEN);
            if !csrf_ok {
                write_response(&mut stream, "403 Forbidden", &[], "missing or stale CSRF token");
                return;
            }
            // Only three slots exist in the fixture.
            if method == "DELETE" && path == "/playerStates/9" {
                write_response(&mut stream, "404 Not Found", &[], "no such slot");
                return;
            }
            write_response(&mut stream, "204 No Content", &[], "");
        }
    }
}

fn write_response(stream: &mut TcpStream, status: &str, extra_headers: &[&str], body: &str) {
    let mut extra = String::new();
    for header in extra_headers {
        extra.push_str(header);
        extra.push_str("\r\n");
    }
    let response = format!(
        "HTTP/1.1 {status}\r\n{extra}Content-Type: application/json\r\nContent-Length: {length}\r\nConnection: close\r\n\r\n{body}",
        length = body.len(),
    );

    if stream.write_all(response.as_bytes()).is_err() {
        return;
    }
    if stream.flush().is_err() {
        return;
    }
    drop(stream.shutdown(Shutdown::Both));
}

/// Run the `cassette` binary and capture output.
///
/// # Errors
///
/// Returns an error if the binary cannot be executed.
pub fn run_cassette<I, S>(args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = cassette_bin()?;
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .map_err(|err| format!("run cassette failed: {}", err))
}

fn cassette_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_cassette").map_or_else(
        || Err("CARGO_BIN_EXE_cassette missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
