//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::domain::StopOptions;
use crate::usecase::StopHookReport;

/// stop フックを 1 回実行する Inbound ポート
///
/// 失敗は全てレポートに畳み込まれ、呼び出し側へは伝播しない。
pub trait RunStopHook {
    fn run(&self, input: &str, options: &StopOptions) -> StopHookReport;
}
