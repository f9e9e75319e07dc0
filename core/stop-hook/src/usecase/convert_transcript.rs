//! transcript.jsonl を chat.json（JSON 配列）に変換するユースケース

use crate::domain::{HookPaths, Transcript};
use common::error::Error;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptOutcome {
    /// transcript が無いので何もしなかった
    Missing,
    /// chat.json を書いた
    Written { entries: usize, skipped: usize },
}

pub struct ConvertTranscriptUseCase {
    fs: Arc<dyn FileSystem>,
    log: Arc<dyn Log>,
}

impl ConvertTranscriptUseCase {
    pub fn new(fs: Arc<dyn FileSystem>, log: Arc<dyn Log>) -> Self {
        Self { fs, log }
    }

    pub fn run(&self, paths: &HookPaths) -> Result<TranscriptOutcome, Error> {
        if !self.fs.exists(&paths.transcript) {
            return Ok(TranscriptOutcome::Missing);
        }
        let content = self.fs.read_to_string(&paths.transcript)?;
        let transcript = Transcript::from_jsonl(&content);
        if transcript.skipped() > 0 {
            let _ = self.log.log(
                &LogRecord::new(LogLevel::Debug, "skipped unparsable transcript lines")
                    .layer("usecase")
                    .kind("transcript")
                    .field("skipped", transcript.skipped()),
            );
        }
        self.fs
            .write(&paths.chat_log, &transcript.to_pretty_json()?)?;
        Ok(TranscriptOutcome::Written {
            entries: transcript.entries().len(),
            skipped: transcript.skipped(),
        })
    }
}
