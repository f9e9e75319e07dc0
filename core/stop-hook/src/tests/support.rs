//! ユースケーステスト用のスタブと組み立て

use crate::domain::TtsHelper;
use crate::ports::outbound::{Announcer, MessagePicker};
use crate::usecase::{
    AnnounceCompletionUseCase, ConvertTranscriptUseCase, RecordEventUseCase, StopHookUseCase,
};
use chrono::{DateTime, Local, TimeZone};
use common::adapter::StdFileSystem;
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log, LogRecord};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub const FIXED_TIMESTAMP: &str = "2026-10-19T12:00:00.000000";

pub struct FixedClock;

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }
}

/// カレントディレクトリと環境変数を固定した EnvResolver
pub struct TestEnv {
    cwd: PathBuf,
    vars: HashMap<String, String>,
}

impl TestEnv {
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvResolver for TestEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|v| !v.is_empty()).cloned()
    }

    fn current_dir(&self) -> Result<PathBuf, Error> {
        Ok(self.cwd.clone())
    }

    fn executable_dir(&self) -> Result<PathBuf, Error> {
        Ok(self.cwd.join("hooks"))
    }
}

/// 読み上げ要求を記録する Announcer（`fail` なら毎回エラー）
#[derive(Default)]
pub struct RecordingAnnouncer {
    pub spoken: Mutex<Vec<String>>,
    pub fail: bool,
}

impl RecordingAnnouncer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, text: &str) -> Result<(), Error> {
        self.spoken.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(Error::system("TTS helper 'tts.py' timed out after 10s"));
        }
        Ok(())
    }
}

/// 常に先頭を選ぶ
pub struct FirstPicker;

impl MessagePicker for FirstPicker {
    fn pick<'a>(&self, candidates: &[&'a str]) -> Option<&'a str> {
        candidates.first().copied()
    }
}

/// 出力されたログレコードを溜める
#[derive(Default)]
pub struct RecordingLog {
    pub records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub fn kinds_at_warn_or_worse(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.level <= common::ports::outbound::LogLevel::Warn)
            .filter_map(|r| r.kind.clone())
            .collect()
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// テスト用に組み立てたフック一式
pub struct Harness {
    pub use_case: StopHookUseCase,
    pub announcer: Arc<RecordingAnnouncer>,
    pub log: Arc<RecordingLog>,
}

pub fn harness(env: TestEnv, script: &Path) -> Harness {
    harness_with(env, script, RecordingAnnouncer::default())
}

pub fn harness_with(env: TestEnv, script: &Path, announcer: RecordingAnnouncer) -> Harness {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env: Arc<dyn EnvResolver> = Arc::new(env);
    let announcer = Arc::new(announcer);
    let log = Arc::new(RecordingLog::default());
    let log_port: Arc<dyn Log> = Arc::clone(&log) as Arc<dyn Log>;

    let use_case = StopHookUseCase::new(
        Arc::clone(&env),
        RecordEventUseCase::new(Arc::clone(&fs), Arc::new(FixedClock), Arc::clone(&log_port)),
        ConvertTranscriptUseCase::new(Arc::clone(&fs), Arc::clone(&log_port)),
        AnnounceCompletionUseCase::new(
            fs,
            env,
            Arc::new(FirstPicker),
            Arc::clone(&announcer) as Arc<dyn Announcer>,
            TtsHelper::new(script),
        ),
        log_port,
    );
    Harness {
        use_case,
        announcer,
        log,
    }
}

pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
