//! 配線: 標準アダプタで StopHookUseCase を組み立てる

use std::sync::Arc;

use common::adapter::{
    FileJsonLog, StdClock, StdEnvResolver, StdFileSystem, StdProcess, StderrLog,
};
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log, LogLevel, Process};

use crate::adapter::{RandomMessagePicker, TtsScriptAnnouncer};
use crate::cli::Config;
use crate::domain::TtsHelper;
use crate::ports::outbound::{Announcer, MessagePicker};
use crate::usecase::{
    AnnounceCompletionUseCase, ConvertTranscriptUseCase, RecordEventUseCase, StopHookUseCase,
};

/// 診断ログを JSONL で書き出すファイル（未設定なら stderr）
pub const DEBUG_LOG_ENV: &str = "STOP_HOOK_DEBUG_LOG";

pub struct App {
    pub stop_hook: StopHookUseCase,
    pub logger: Arc<dyn Log>,
}

/// 診断ログの出力先を決める
fn build_logger(fs: Arc<dyn FileSystem>, env: &dyn EnvResolver, verbose: bool) -> Arc<dyn Log> {
    match env.var(DEBUG_LOG_ENV) {
        Some(path) => Arc::new(FileJsonLog::new(fs, path)),
        None => {
            let min_level = if verbose { LogLevel::Debug } else { LogLevel::Warn };
            Arc::new(StderrLog::new("stop-hook", min_level))
        }
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_stop_hook(config: &Config) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let process: Arc<dyn Process> = Arc::new(StdProcess);
    let logger = build_logger(Arc::clone(&fs), env.as_ref(), config.verbose);

    // 実行ファイルの場所が取れなければカレントディレクトリ基準の相対パスになる
    let hook_dir = env.executable_dir().unwrap_or_default();
    let helper = TtsHelper::resolve(config.tts_script.as_deref(), &hook_dir);

    let announcer: Arc<dyn Announcer> =
        Arc::new(TtsScriptAnnouncer::new(process, helper.clone()));
    let picker: Arc<dyn MessagePicker> = Arc::new(RandomMessagePicker);

    let stop_hook = StopHookUseCase::new(
        Arc::clone(&env),
        RecordEventUseCase::new(Arc::clone(&fs), clock, Arc::clone(&logger)),
        ConvertTranscriptUseCase::new(Arc::clone(&fs), Arc::clone(&logger)),
        AnnounceCompletionUseCase::new(fs, env, picker, announcer, helper),
        Arc::clone(&logger),
    );
    App { stop_hook, logger }
}
