//! 完了アナウンスの文言

/// 読み上げ候補（ここから 1 つをランダムに選ぶ）
pub const COMPLETION_MESSAGES: [&str; 5] = [
    "Work complete!",
    "All done!",
    "Task finished!",
    "Job complete!",
    "Ready for next task!",
];
