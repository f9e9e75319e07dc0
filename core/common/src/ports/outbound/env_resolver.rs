//! 環境変数解決 Outbound ポート
//!
//! usecase はこの trait 経由でのみ環境変数・カレントディレクトリにアクセスする。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を読む。未設定・空文字は None
    fn var(&self, name: &str) -> Option<String>;

    /// カレントディレクトリを返す（ログ・transcript のパス計算用）
    fn current_dir(&self) -> Result<PathBuf, Error>;

    /// 実行ファイルが置かれたディレクトリ（同梱ヘルパーの探索用）
    fn executable_dir(&self) -> Result<PathBuf, Error>;
}
