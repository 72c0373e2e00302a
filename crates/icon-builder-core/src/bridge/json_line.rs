//! Newline-delimited JSON transport to the host process.
//!
//! Each request is one line `{"id", "cmd", "args"}`; each reply is one line
//! `{"id", "ok"}` or `{"id", "error"}`. Replies are matched by id, so any
//! number of requests may be outstanding and the host may answer in any
//! order.

use crate::{
    BridgeError, CoreResult,
    bridge::{BridgeCommand, HostBridge, decode_picked_path, decode_preview},
};

use std::{
    collections::HashMap,
    panic::Location,
    path::Path,
    process::Stdio,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use async_trait::async_trait;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader},
    process::{Child, ChildStderr, Command},
    sync::{Mutex, oneshot},
    task::JoinHandle,
};
use tracing::{debug, info, instrument, warn};

/// Reply as reported by the host, before it is tied to a command.
enum HostReply {
    Ok(Value),
    Failed(String),
    // Carried an id but not the reply shape.
    Malformed(String),
}

#[derive(Default)]
struct Outstanding {
    closed: bool,
    waiters: HashMap<u64, oneshot::Sender<HostReply>>,
}

#[derive(Serialize)]
struct WireRequest {
    id: u64,
    cmd: &'static str,
    args: Value,
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    ok: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

/// [`HostBridge`] speaking JSON lines over a pair of byte streams.
pub struct JsonLineBridge {
    writer: Mutex<Box<dyn AsyncWrite + Send + Unpin>>,
    outstanding: Arc<Mutex<Outstanding>>,
    next_id: AtomicU64,
    tasks: Vec<JoinHandle<()>>,
    // Never read; held so the host is killed when the bridge is dropped.
    _child: Mutex<Option<Child>>,
}

impl JsonLineBridge {
    /// Run the protocol over `reader` (host output) and `writer` (host input).
    ///
    /// Must be called from within a tokio runtime; a reader task is spawned
    /// immediately.
    pub fn new<R, W>(reader: R, writer: W) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        let outstanding = Arc::new(Mutex::new(Outstanding::default()));
        let reader_task = tokio::spawn(read_replies(reader, Arc::clone(&outstanding)));

        Self {
            writer: Mutex::new(Box::new(writer)),
            outstanding,
            next_id: AtomicU64::new(1),
            tasks: vec![reader_task],
            _child: Mutex::new(None),
        }
    }

    /// Launch `program` as the host and talk to it over its stdio.
    ///
    /// The host's stderr is forwarded to the log. The host is killed when
    /// the bridge is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::Spawn`] if the program cannot be started.
    #[track_caller]
    #[instrument(skip(args))]
    pub fn spawn(program: &Path, args: &[String]) -> CoreResult<Self> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| BridgeError::Spawn {
                program: program.to_path_buf(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| BridgeError::protocol("host stdin is not piped"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| BridgeError::protocol("host stdout is not piped"))?;
        let stderr = child.stderr.take();

        info!(program = ?program, pid = ?child.id(), "Host process started");

        let mut bridge = Self::new(stdout, stdin);
        if let Some(stderr) = stderr {
            bridge.tasks.push(tokio::spawn(forward_host_stderr(stderr)));
        }
        bridge._child = Mutex::new(Some(child));

        Ok(bridge)
    }

    #[instrument(skip(self), fields(cmd = command.name()))]
    async fn call(&self, command: BridgeCommand) -> CoreResult<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let request = WireRequest {
            id,
            cmd: command.name(),
            args: command.args(),
        };
        let mut line = serde_json::to_vec(&request)
            .map_err(|e| BridgeError::protocol(format!("failed to encode request: {}", e)))?;
        line.push(b'\n');

        let (reply_tx, reply_rx) = oneshot::channel();
        {
            let mut outstanding = self.outstanding.lock().await;
            if outstanding.closed {
                return Err(BridgeError::host_exited());
            }
            outstanding.waiters.insert(id, reply_tx);
        }

        if let Err(e) = self.write_line(&line).await {
            self.outstanding.lock().await.waiters.remove(&id);
            return Err(e);
        }

        debug!(id, "Request sent to host");

        match reply_rx.await {
            Ok(HostReply::Ok(value)) => Ok(value),
            Ok(HostReply::Failed(reason)) => Err(BridgeError::HostFailed {
                command: command.name(),
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            Ok(HostReply::Malformed(reason)) => Err(BridgeError::protocol(format!(
                "malformed reply to {}: {}",
                command.name(),
                reason
            ))),
            Err(_) => Err(BridgeError::host_exited()),
        }
    }

    async fn write_line(&self, line: &[u8]) -> CoreResult<()> {
        let mut writer = self.writer.lock().await;
        writer.write_all(line).await?;
        writer.flush().await?;
        Ok(())
    }
}

impl Drop for JsonLineBridge {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

#[async_trait]
impl HostBridge for JsonLineBridge {
    async fn select_image(&self) -> CoreResult<Option<String>> {
        decode_picked_path(self.call(BridgeCommand::SelectImage).await?)
    }

    async fn get_preview(&self, image_path: &str) -> CoreResult<String> {
        let command = BridgeCommand::GetPreview {
            image_path: image_path.to_string(),
        };
        decode_preview(self.call(command).await?)
    }

    async fn select_directory(&self) -> CoreResult<Option<String>> {
        decode_picked_path(self.call(BridgeCommand::SelectDirectory).await?)
    }

    async fn generate_icon_set(&self, image_path: &str, target_dir: &str) -> CoreResult<()> {
        let command = BridgeCommand::GenerateIconSet {
            image_path: image_path.to_string(),
            target_dir: target_dir.to_string(),
        };
        self.call(command).await.map(|_| ())
    }
}

/// Route host replies to their waiting callers until the host output closes.
///
/// Once closed, every outstanding and future request fails with
/// [`BridgeError::HostExited`].
async fn read_replies<R>(reader: R, outstanding: Arc<Mutex<Outstanding>>)
where
    R: AsyncRead + Send + Unpin + 'static,
{
    let mut lines = BufReader::new(reader).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if line.trim().is_empty() {
                    continue;
                }

                let value = match serde_json::from_str::<Value>(&line) {
                    Ok(value) => value,
                    Err(e) => {
                        warn!(error = %e, "Skipping undecodable host line");
                        continue;
                    }
                };

                let Some(id) = value.get("id").and_then(Value::as_u64) else {
                    warn!(line = %line, "Skipping host line without a request id");
                    continue;
                };

                let reply = match serde_json::from_value::<WireResponse>(value) {
                    Ok(WireResponse {
                        error: Some(reason),
                        ..
                    }) => HostReply::Failed(reason),
                    Ok(WireResponse { ok, .. }) => HostReply::Ok(ok.unwrap_or(Value::Null)),
                    Err(e) => {
                        warn!(id, error = %e, "Malformed host reply");
                        HostReply::Malformed(e.to_string())
                    }
                };

                let waiter = outstanding.lock().await.waiters.remove(&id);
                match waiter {
                    Some(reply_tx) => {
                        if reply_tx.send(reply).is_err() {
                            debug!(id, "Caller stopped waiting for host reply");
                        }
                    }
                    None => warn!(id, "Host replied to unknown request"),
                }
            }
            Ok(None) => {
                info!("Host output closed");
                break;
            }
            Err(e) => {
                warn!(error = ?e, "Failed to read from host");
                break;
            }
        }
    }

    let mut outstanding = outstanding.lock().await;
    outstanding.closed = true;
    if !outstanding.waiters.is_empty() {
        warn!(
            dropped = outstanding.waiters.len(),
            "Host closed with requests outstanding"
        );
    }
    // Dropping the senders wakes every waiter with HostExited.
    outstanding.waiters.clear();
}

async fn forward_host_stderr(stderr: ChildStderr) {
    let mut lines = BufReader::new(stderr).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        debug!(host_stderr = %line, "Host diagnostic");
    }
}
