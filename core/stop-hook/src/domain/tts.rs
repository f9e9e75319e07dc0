//! 外部 TTS ヘルパーの起動設定

use std::path::{Path, PathBuf};
use std::time::Duration;

/// アナウンスを有効にする API キーの環境変数
pub const TTS_API_KEY_ENV: &str = "ELEVENLABS_API_KEY";
/// ヘルパースクリプトを起動するランチャー
pub const DEFAULT_LAUNCHER: &str = "uv";
/// 実行ファイルのディレクトリから見たヘルパースクリプトの位置
pub const DEFAULT_SCRIPT_RELATIVE: [&str; 3] = ["utils", "tts", "elevenlabs_tts.py"];
/// ヘルパーの実行時間上限
pub const TTS_TIMEOUT: Duration = Duration::from_secs(10);

/// `<launcher> run <script> <message>` で起動するヘルパー
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsHelper {
    pub launcher: PathBuf,
    pub script: PathBuf,
    pub timeout: Duration,
}

impl TtsHelper {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            launcher: PathBuf::from(DEFAULT_LAUNCHER),
            script: script.into(),
            timeout: TTS_TIMEOUT,
        }
    }

    /// 明示指定が無ければ `hook_dir/utils/tts/elevenlabs_tts.py`
    pub fn resolve(explicit: Option<&Path>, hook_dir: &Path) -> Self {
        let script = match explicit {
            Some(path) => path.to_path_buf(),
            None => DEFAULT_SCRIPT_RELATIVE
                .iter()
                .fold(hook_dir.to_path_buf(), |p, part| p.join(part)),
        };
        Self::new(script)
    }

    /// ランチャーに渡す引数
    pub fn args(&self, message: &str) -> Vec<String> {
        vec![
            "run".to_string(),
            self.script.to_string_lossy().into_owned(),
            message.to_string(),
        ]
    }
}
