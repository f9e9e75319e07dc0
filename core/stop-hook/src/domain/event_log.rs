//! イベントログ（stop.json）: イベントの JSON 配列
//!
//! 毎回全件読み込み → 1 件追加 → 全件書き戻し。ロックはしないので
//! 同時に複数のフックが走ると後勝ちで追記が失われうる。

use super::event_record::EventRecord;
use common::error::Error;
use serde_json::Value;

/// 既存ログファイルの解析結果
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLog {
    Entries(EventLog),
    /// JSON として読めない（理由つき）。空から始め直してよい
    Corrupt(String),
}

/// 順序付きのイベント列
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    entries: Vec<Value>,
}

impl EventLog {
    /// 既存ファイルの内容を解析する。
    /// JSON として壊れていれば `Corrupt`、JSON だが配列でなければエラー（上書きしない）
    pub fn parse(content: &str) -> Result<ParsedLog, Error> {
        match serde_json::from_str::<Value>(content) {
            Ok(Value::Array(entries)) => Ok(ParsedLog::Entries(Self { entries })),
            Ok(_) => Err(Error::json("existing event log is not a JSON array")),
            Err(e) => Ok(ParsedLog::Corrupt(e.to_string())),
        }
    }

    pub fn push(&mut self, record: EventRecord) {
        self.entries.push(record.into_value());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// インデント 2 の整形 JSON（末尾改行なし）
    pub fn to_pretty_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_array() {
        let ParsedLog::Entries(log) = EventLog::parse(r#"[{"a":1},{"b":2}]"#).unwrap() else {
            panic!("expected entries");
        };
        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[1], json!({"b": 2}));
    }

    #[test]
    fn test_parse_garbage_is_corrupt() {
        assert!(matches!(EventLog::parse("not json"), Ok(ParsedLog::Corrupt(_))));
        assert!(matches!(EventLog::parse(""), Ok(ParsedLog::Corrupt(_))));
    }

    #[test]
    fn test_parse_non_array_is_error() {
        assert!(matches!(EventLog::parse(r#"{"a":1}"#), Err(Error::Json(_))));
        assert!(EventLog::parse("42").is_err());
    }

    #[test]
    fn test_big_numbers_survive_rewrite() {
        let content = r#"[{"old_id":18446744073709551616,"ratio":0.1,"neg":-9223372036854775809}]"#;
        let ParsedLog::Entries(log) = EventLog::parse(content).unwrap() else {
            panic!("expected entries");
        };
        let text = log.to_pretty_json().unwrap();
        assert!(text.contains("\"old_id\": 18446744073709551616"), "{}", text);
        assert!(text.contains("\"ratio\": 0.1"), "{}", text);
        assert!(text.contains("\"neg\": -9223372036854775809"), "{}", text);
    }

    #[test]
    fn test_push_and_pretty_json() {
        let mut log = EventLog::default();
        assert_eq!(log.len(), 0);
        let mut rec = EventRecord::parse(r#"{"session_id":"abc"}"#).unwrap();
        rec.stamp("2026-10-19T10:00:00.000000");
        log.push(rec);
        assert_eq!(
            log.to_pretty_json().unwrap(),
            "[\n  {\n    \"session_id\": \"abc\",\n    \"timestamp\": \"2026-10-19T10:00:00.000000\"\n  }\n]"
        );
    }

    #[test]
    fn test_empty_log_renders_as_empty_array() {
        assert_eq!(EventLog::default().to_pretty_json().unwrap(), "[]");
    }
}
