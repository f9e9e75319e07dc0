//! 人間向けログ（LogRecord → stderr へ要点のみ出力）
//!
//! フックの stdout はホストが読むことがあるため、診断は必ず stderr に出す。
//! fields の全量は出さず要点のみ（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};
use std::io::Write;

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields を短い文字列にする
fn fields_summary(record: &LogRecord) -> Option<String> {
    let fields = record.fields.as_ref().filter(|f| !f.is_empty())?;
    let s = serde_json::to_string(fields).ok()?;
    if s.len() <= FIELDS_SUMMARY_MAX {
        return Some(s);
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    Some(format!("{}... (len={})", truncated, s.len()))
}

/// 1 レコードを 1 行に整形する
pub fn format_line(prog: &str, record: &LogRecord) -> String {
    let mut line = format!("{}: {}: ", prog, record.level.as_str());
    if let Some(kind) = &record.kind {
        line.push('[');
        line.push_str(kind);
        line.push_str("] ");
    }
    line.push_str(&record.message);
    if let Some(summary) = fields_summary(record) {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

/// stderr へ出力する Log 実装
///
/// `min_level` より詳細なレコード（Debug など）は捨てる。
pub struct StderrLog {
    prog: String,
    min_level: LogLevel,
}

impl StderrLog {
    pub fn new(prog: impl Into<String>, min_level: LogLevel) -> Self {
        Self {
            prog: prog.into(),
            min_level,
        }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.min_level
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if !self.enabled(record.level) {
            return Ok(());
        }
        let line = format_line(&self.prog, record);
        let mut err = std::io::stderr().lock();
        writeln!(err, "{}", line).map_err(|e| Error::io_msg(e.to_string()))
    }
}
