//! ユースケース層（ポート経由でのみ外界に触れる）

pub mod announce;
pub mod convert_transcript;
pub mod record_event;
pub mod stop_hook;

pub use announce::AnnounceCompletionUseCase;
pub use convert_transcript::ConvertTranscriptUseCase;
pub use record_event::RecordEventUseCase;
pub use stop_hook::{StepStatus, StopHookReport, StopHookUseCase};
