//! CLI から決まる実行内容

use std::path::PathBuf;

/// stop フック 1 回分のオプション
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopOptions {
    /// --chat: transcript を chat.json に変換する
    pub chat: bool,
    /// --transcript: transcript の場所（未指定なら ./transcript.jsonl）
    pub transcript: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookCommand {
    Help,
    Stop(StopOptions),
}
