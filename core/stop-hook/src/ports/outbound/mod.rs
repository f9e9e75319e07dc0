//! Outbound ポート: アプリが外界（読み上げ・乱択）を使うための trait

pub mod announcer;
pub mod message_picker;

pub use announcer::Announcer;
pub use message_picker::MessagePicker;
