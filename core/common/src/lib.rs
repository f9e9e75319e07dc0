//! stop-hook 共通ライブラリ
//!
//! フック本体が外界に触れるためのポート（trait）と標準アダプター、共通エラー型。

/// エラーハンドリング
pub mod error;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;
