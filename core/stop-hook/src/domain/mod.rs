//! stop-hook 固有のドメイン型（型と不変条件）

pub mod command;
pub mod completion_message;
pub mod event_log;
pub mod event_record;
pub mod paths;
pub mod transcript;
pub mod tts;

pub use command::{HookCommand, StopOptions};
pub use completion_message::COMPLETION_MESSAGES;
pub use event_log::EventLog;
pub use event_record::EventRecord;
pub use paths::HookPaths;
pub use transcript::Transcript;
pub use tts::{TtsHelper, TTS_API_KEY_ENV};
