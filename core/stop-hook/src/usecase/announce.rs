//! 完了アナウンスのユースケース
//!
//! ヘルパースクリプトが存在し、かつ API キーがあるときだけ読み上げる。

use crate::domain::{TtsHelper, COMPLETION_MESSAGES, TTS_API_KEY_ENV};
use crate::ports::outbound::{Announcer, MessagePicker};
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnounceOutcome {
    Announced(&'static str),
    /// ヘルパースクリプトが見つからない
    NoScript,
    /// ELEVENLABS_API_KEY が未設定
    NoApiKey,
}

pub struct AnnounceCompletionUseCase {
    fs: Arc<dyn FileSystem>,
    env: Arc<dyn EnvResolver>,
    picker: Arc<dyn MessagePicker>,
    announcer: Arc<dyn Announcer>,
    helper: TtsHelper,
}

impl AnnounceCompletionUseCase {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        env: Arc<dyn EnvResolver>,
        picker: Arc<dyn MessagePicker>,
        announcer: Arc<dyn Announcer>,
        helper: TtsHelper,
    ) -> Self {
        Self {
            fs,
            env,
            picker,
            announcer,
            helper,
        }
    }

    pub fn run(&self) -> Result<AnnounceOutcome, Error> {
        if !self.fs.exists(&self.helper.script) {
            return Ok(AnnounceOutcome::NoScript);
        }
        if self.env.var(TTS_API_KEY_ENV).is_none() {
            return Ok(AnnounceOutcome::NoApiKey);
        }
        let message = self
            .picker
            .pick(&COMPLETION_MESSAGES)
            .ok_or_else(|| Error::system("no completion message to announce"))?;
        self.announcer.announce(message)?;
        Ok(AnnounceOutcome::Announced(message))
    }
}
