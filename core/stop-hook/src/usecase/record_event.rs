//! イベントをログ（stop.json）へ追記するユースケース

use crate::domain::event_log::ParsedLog;
use crate::domain::{EventLog, EventRecord, HookPaths};
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log, LogLevel, LogRecord};
use std::path::Path;
use std::sync::Arc;

pub struct RecordEventUseCase {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
}

impl RecordEventUseCase {
    pub fn new(fs: Arc<dyn FileSystem>, clock: Arc<dyn Clock>, log: Arc<dyn Log>) -> Self {
        Self { fs, clock, log }
    }

    /// ログディレクトリを用意し、既存ログに時刻付きイベントを足して全体を書き戻す。
    /// 戻り値は書き込み後の件数。
    pub fn run(&self, paths: &HookPaths, mut record: EventRecord) -> Result<usize, Error> {
        self.fs.create_dir_all(&paths.log_dir)?;
        let mut event_log = self.load(&paths.stop_log)?;
        record.stamp(self.clock.now_local_iso8601());
        event_log.push(record);
        self.fs
            .write(&paths.stop_log, &event_log.to_pretty_json()?)?;
        Ok(event_log.len())
    }

    /// 既存ログを読む。無ければ空、JSON として壊れていれば捨てて空から始める。
    /// JSON だが配列でない場合はエラー（ファイルには触れない）
    fn load(&self, path: &Path) -> Result<EventLog, Error> {
        if !self.fs.exists(path) {
            return Ok(EventLog::default());
        }
        let content = self.fs.read_to_string(path)?;
        match EventLog::parse(&content)? {
            ParsedLog::Entries(event_log) => Ok(event_log),
            ParsedLog::Corrupt(reason) => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, "existing event log discarded")
                        .layer("usecase")
                        .kind("event_log")
                        .field("path", path.display().to_string())
                        .field("reason", reason),
                );
                Ok(EventLog::default())
            }
        }
    }
}
