//! エラーハンドリング
//!
//! ポート・アダプター・ユースケースは全てこの `Error` を返す。
//! フックは終了コードで失敗を伝えないため、終了コードは持たない。

use thiserror::Error as ThisError;

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// ファイル・プロセス等の I/O 失敗
    #[error("{0}")]
    Io(String),
    /// JSON の解析・生成失敗
    #[error("invalid JSON: {0}")]
    Json(String),
    /// コマンドライン引数の不正
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数・カレントディレクトリ等の解決失敗
    #[error("{0}")]
    Env(String),
    /// 上記以外（タイムアウト等）
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// 使い方の誤り（Usage を表示すべきエラー）か
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
