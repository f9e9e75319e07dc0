//! stop フック本体: 各ステップを独立に実行し、失敗は握りつぶしてログにだけ残す
//!
//! 1. stdin のイベントを解析（失敗したら以降は何もしない）
//! 2. イベントログへ追記（失敗したら以降は何もしない）
//! 3. --chat 指定時のみ transcript 変換
//! 4. 完了アナウンス

use super::announce::{AnnounceCompletionUseCase, AnnounceOutcome};
use super::convert_transcript::{ConvertTranscriptUseCase, TranscriptOutcome};
use super::record_event::RecordEventUseCase;
use crate::domain::{EventRecord, HookPaths, StopOptions};
use crate::ports::inbound::RunStopHook;
use common::error::Error;
use common::ports::outbound::{EnvResolver, Log, LogLevel, LogRecord};
use std::sync::Arc;

/// 1 ステップの結果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StepStatus {
    Completed,
    /// 前提（transcript・ヘルパー・API キー）が無いので何もしなかった
    Skipped,
    Failed(Error),
    /// 要求されていない、または前のステップで中断した
    #[default]
    NotAttempted,
}

/// 1 回分の実行結果
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopHookReport {
    pub event: StepStatus,
    pub transcript: StepStatus,
    pub announce: StepStatus,
}

impl StopHookReport {
    /// ホストのセッションを妨げないよう、結果に関わらず常に 0
    pub fn exit_code(&self) -> i32 {
        0
    }
}

pub struct StopHookUseCase {
    env: Arc<dyn EnvResolver>,
    record_event: RecordEventUseCase,
    convert_transcript: ConvertTranscriptUseCase,
    announce: AnnounceCompletionUseCase,
    log: Arc<dyn Log>,
}

impl StopHookUseCase {
    pub fn new(
        env: Arc<dyn EnvResolver>,
        record_event: RecordEventUseCase,
        convert_transcript: ConvertTranscriptUseCase,
        announce: AnnounceCompletionUseCase,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            env,
            record_event,
            convert_transcript,
            announce,
            log,
        }
    }

    fn emit(&self, level: LogLevel, kind: &str, message: &str, err: Option<&Error>) {
        let mut record = LogRecord::new(level, message).layer("usecase").kind(kind);
        if let Some(e) = err {
            record = record.field("error", e.to_string());
        }
        let _ = self.log.log(&record);
    }

    fn record(&self, input: &str, options: &StopOptions) -> Result<(HookPaths, usize), Error> {
        let record = EventRecord::parse(input)?;
        let cwd = self.env.current_dir()?;
        let paths = HookPaths::under(&cwd).with_transcript(&cwd, options.transcript.as_deref());
        let count = self.record_event.run(&paths, record)?;
        Ok((paths, count))
    }

    fn transcript_step(&self, paths: &HookPaths) -> StepStatus {
        match self.convert_transcript.run(paths) {
            Ok(TranscriptOutcome::Written { entries, skipped }) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Debug, "chat transcript written")
                        .layer("usecase")
                        .kind("transcript")
                        .field("entries", entries)
                        .field("skipped", skipped),
                );
                StepStatus::Completed
            }
            Ok(TranscriptOutcome::Missing) => {
                self.emit(LogLevel::Debug, "transcript", "no transcript to convert", None);
                StepStatus::Skipped
            }
            Err(e) => {
                self.emit(LogLevel::Warn, "transcript", "transcript conversion failed", Some(&e));
                StepStatus::Failed(e)
            }
        }
    }

    fn announce_step(&self) -> StepStatus {
        match self.announce.run() {
            Ok(AnnounceOutcome::Announced(message)) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Debug, "completion announced")
                        .layer("usecase")
                        .kind("announce")
                        .field("message", message),
                );
                StepStatus::Completed
            }
            Ok(AnnounceOutcome::NoScript) => {
                self.emit(LogLevel::Debug, "announce", "TTS helper script not found", None);
                StepStatus::Skipped
            }
            Ok(AnnounceOutcome::NoApiKey) => {
                self.emit(LogLevel::Debug, "announce", "TTS API key not set", None);
                StepStatus::Skipped
            }
            Err(e) => {
                self.emit(LogLevel::Info, "announce", "completion announcement failed", Some(&e));
                StepStatus::Failed(e)
            }
        }
    }
}

impl RunStopHook for StopHookUseCase {
    fn run(&self, input: &str, options: &StopOptions) -> StopHookReport {
        let mut report = StopHookReport::default();

        let paths = match self.record(input, options) {
            Ok((paths, count)) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Debug, "event recorded")
                        .layer("usecase")
                        .kind("event_log")
                        .field("path", paths.stop_log.display().to_string())
                        .field("entries", count),
                );
                report.event = StepStatus::Completed;
                paths
            }
            Err(e) => {
                self.emit(LogLevel::Warn, "event_log", "event not recorded", Some(&e));
                report.event = StepStatus::Failed(e);
                return report;
            }
        };

        if options.chat {
            report.transcript = self.transcript_step(&paths);
        }
        report.announce = self.announce_step();
        report
    }
}
