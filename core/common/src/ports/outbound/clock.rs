//! 時刻取得 Outbound ポート
//!
//! usecase はこの trait 経由で「現在時刻」を取得する。

use chrono::{DateTime, Local};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在時刻（ローカルタイムゾーン）
    fn now(&self) -> DateTime<Local>;

    /// 現在時刻を ISO8601（オフセットなし・マイクロ秒）で返す。例: 2026-10-19T14:03:07.123456
    fn now_local_iso8601(&self) -> String {
        self.now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
