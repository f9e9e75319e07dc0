//! 候補から 1 つ選ぶ Outbound ポート

/// 候補列から 1 つ選ぶ（空なら None）
pub trait MessagePicker: Send + Sync {
    fn pick<'a>(&self, candidates: &[&'a str]) -> Option<&'a str>;
}
