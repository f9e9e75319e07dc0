//! ポート定義
//!
//! common はライブラリなので outbound（外界に依頼するための trait）だけを持つ。
//! inbound はそれぞれの実行ファイル側で定義する。

pub mod outbound;
