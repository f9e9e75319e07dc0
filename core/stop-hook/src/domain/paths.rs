//! フックが読み書きするファイルの場所（カレントディレクトリ基準）

use std::path::{Path, PathBuf};

/// ログディレクトリ名
pub const LOG_DIR_NAME: &str = "claude-toolkit-logs";
/// イベントログのファイル名
pub const STOP_LOG_FILE_NAME: &str = "stop.json";
/// 変換済み transcript のファイル名
pub const CHAT_FILE_NAME: &str = "chat.json";
/// 既定の transcript ファイル名
pub const TRANSCRIPT_FILE_NAME: &str = "transcript.jsonl";

/// 解決済みのパス一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookPaths {
    pub log_dir: PathBuf,
    pub stop_log: PathBuf,
    pub chat_log: PathBuf,
    pub transcript: PathBuf,
}

impl HookPaths {
    /// `base` 直下の既定レイアウト
    pub fn under(base: &Path) -> Self {
        let log_dir = base.join(LOG_DIR_NAME);
        Self {
            stop_log: log_dir.join(STOP_LOG_FILE_NAME),
            chat_log: log_dir.join(CHAT_FILE_NAME),
            transcript: base.join(TRANSCRIPT_FILE_NAME),
            log_dir,
        }
    }

    /// transcript の場所を差し替える（相対パスは `base` 基準）
    pub fn with_transcript(mut self, base: &Path, transcript: Option<&Path>) -> Self {
        if let Some(path) = transcript {
            self.transcript = base.join(path);
        }
        self
    }
}
