//! rand による MessagePicker 実装

use crate::ports::outbound::MessagePicker;
use rand::seq::SliceRandom;

/// スレッドローカル乱数で一様に選ぶ
#[derive(Debug, Clone, Default)]
pub struct RandomMessagePicker;

impl MessagePicker for RandomMessagePicker {
    fn pick<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        candidates.choose(&mut rand::thread_rng()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::COMPLETION_MESSAGES;

    #[test]
    fn test_pick_returns_a_candidate() {
        let picker = RandomMessagePicker;
        for _ in 0..20 {
            let picked = picker.pick(&COMPLETION_MESSAGES).unwrap();
            assert!(COMPLETION_MESSAGES.contains(&picked));
        }
    }

    #[test]
    fn test_pick_empty() {
        assert_eq!(RandomMessagePicker.pick(&[]), None);
    }
}
