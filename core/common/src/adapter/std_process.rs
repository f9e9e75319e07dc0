//! 標準サブプロセス実行（std::process::Command を委譲）

use crate::error::Error;
use crate::ports::outbound::{Process, ProcessOutcome};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// 子プロセスの終了確認間隔
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// 標準ライブラリの Command を使う Process 実装
#[derive(Debug, Clone, Default)]
pub struct StdProcess;

impl Process for StdProcess {
    fn run_quiet_with_timeout(
        &self,
        program: &Path,
        args: &[String],
        timeout: Duration,
    ) -> Result<ProcessOutcome, Error> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                Error::io_msg(format!(
                    "Failed to execute '{}': {}",
                    program.display(),
                    e
                ))
            })?;

        let deadline = Instant::now() + timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(ProcessOutcome::Exited(status.code().unwrap_or(1))),
                Ok(None) => {
                    let now = Instant::now();
                    if now >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Ok(ProcessOutcome::TimedOut);
                    }
                    std::thread::sleep(POLL_INTERVAL.min(deadline - now));
                }
                Err(e) => {
                    let _ = child.kill();
                    return Err(Error::io_msg(format!(
                        "Failed to wait for '{}': {}",
                        program.display(),
                        e
                    )));
                }
            }
        }
    }
}
