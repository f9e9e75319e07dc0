//! フックに渡されたイベント 1 件（入力オブジェクト + 処理時刻）

use common::error::Error;
use serde_json::{Map, Value};

/// 処理時刻を入れるキー
pub const TIMESTAMP_KEY: &str = "timestamp";

/// stdin から受け取ったイベント
///
/// 中身は任意の JSON オブジェクト。`timestamp` 以外のキーには触れない。
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord(Map<String, Value>);

impl EventRecord {
    /// stdin の内容を解析する。JSON でない・オブジェクトでない場合はエラー
    pub fn parse(input: &str) -> Result<Self, Error> {
        match serde_json::from_str::<Value>(input)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::json(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// 処理時刻を付与する（既存の `timestamp` は上書き、キー位置は維持）
    pub fn stamp(&mut self, timestamp: impl Into<String>) {
        self.0
            .insert(TIMESTAMP_KEY.to_string(), Value::String(timestamp.into()));
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
