//! サブプロセス実行 Outbound ポート
//!
//! 外部コマンド起動を trait で抽象化する。

use crate::error::Error;
use std::path::Path;
use std::time::Duration;

/// 時間制限付き実行の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// 時間内に終了した（シグナル終了時は 1）
    Exited(i32),
    /// 制限時間を超えたため kill した
    TimedOut,
}

/// サブプロセス実行の抽象
///
/// 実装は `common::adapter::StdProcess`（std::process::Command）など。
pub trait Process: Send + Sync {
    /// 標準入出力を捨てて実行し、`timeout` を超えたら kill する
    fn run_quiet_with_timeout(
        &self,
        program: &Path,
        args: &[String],
        timeout: Duration,
    ) -> Result<ProcessOutcome, Error>;
}
