use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::Error;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use log::{info, warn};

use super::AppContext;

/// Append-only sink for request/response/error lines. Ordering across
/// concurrent requests is best-effort by arrival of the write call.
pub struct RequestLog {
    sink: Mutex<File>,
}

impl RequestLog {
    pub fn open(path: &str) -> Result<RequestLog, Error> {
        if let Some(dir) = Path::new(path).parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(RequestLog {
            sink: Mutex::new(file),
        })
    }

    pub fn write_line(&self, message: &str) {
        info!("{}", message);

        match self.sink.lock() {
            Ok(mut file) => {
                if let Err(err) = writeln!(file, "[{}] {}", Utc::now().to_rfc3339(), message) {
                    warn!("Failed to append to request log: {}", err);
                }
            }
            Err(_) => warn!("Request log mutex poisoned, dropping line"),
        }
    }
}

/// Middleware logging every request and its response status/duration.
pub async fn log_requests(
    State(ctx): State<Arc<AppContext>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    ctx.request_log
        .write_line(&format!("REQUEST: {} {}", method, path));

    let response = next.run(request).await;

    let status = response.status();
    ctx.request_log.write_line(&format!(
        "RESPONSE: {} {} | Status: {} | Time: {}ms",
        method,
        path,
        status.as_u16(),
        start.elapsed().as_millis()
    ));

    if status.is_server_error() {
        ctx.request_log.write_line(&format!(
            "ERROR: {} {} answered with status {}",
            method,
            path,
            status.as_u16()
        ));
    }

    response
}
