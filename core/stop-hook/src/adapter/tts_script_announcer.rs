//! 外部 TTS ヘルパーを `uv run <script> <message>` で起動する Announcer 実装

use crate::domain::TtsHelper;
use crate::ports::outbound::Announcer;
use common::error::Error;
use common::ports::outbound::{Process, ProcessOutcome};
use std::sync::Arc;

pub struct TtsScriptAnnouncer {
    process: Arc<dyn Process>,
    helper: TtsHelper,
}

impl TtsScriptAnnouncer {
    pub fn new(process: Arc<dyn Process>, helper: TtsHelper) -> Self {
        Self { process, helper }
    }
}

impl Announcer for TtsScriptAnnouncer {
    fn announce(&self, text: &str) -> Result<(), Error> {
        let outcome = self.process.run_quiet_with_timeout(
            &self.helper.launcher,
            &self.helper.args(text),
            self.helper.timeout,
        )?;
        match outcome {
            ProcessOutcome::Exited(0) => Ok(()),
            ProcessOutcome::Exited(code) => Err(Error::system(format!(
                "TTS helper '{}' exited with code {}",
                self.helper.script.display(),
                code
            ))),
            ProcessOutcome::TimedOut => Err(Error::system(format!(
                "TTS helper '{}' timed out after {}s",
                self.helper.script.display(),
                self.helper.timeout.as_secs()
            ))),
        }
    }
}
