//! transcript.jsonl → chat.json 変換（1 行 1 JSON を配列にまとめる）

use common::error::Error;
use serde_json::Value;

/// JSONL から読み取った transcript
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<Value>,
    skipped: usize,
}

impl Transcript {
    /// 各行を前後の空白を除いて解析する。空行は無視、解析できない行はスキップして数える
    pub fn from_jsonl(content: &str) -> Self {
        let mut transcript = Self::default();
        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match serde_json::from_str::<Value>(line) {
                Ok(value) => transcript.entries.push(value),
                Err(_) => transcript.skipped += 1,
            }
        }
        transcript
    }

    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    /// 解析できずに捨てた行数
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// インデント 2 の整形 JSON 配列
    pub fn to_pretty_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
