//! 完了アナウンス Outbound ポート

use common::error::Error;

/// 文言を読み上げる
///
/// 実装は `adapter::TtsScriptAnnouncer`（外部ヘルパー起動）やテスト用の記録スタブ。
/// 呼び出し側はエラーを握りつぶす前提。
pub trait Announcer: Send + Sync {
    fn announce(&self, text: &str) -> Result<(), Error>;
}
