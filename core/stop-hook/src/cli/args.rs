use crate::domain::{HookCommand, StopOptions};
use clap::builder::ArgAction;
use clap::value_parser;
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// --chat: transcript.jsonl を claude-toolkit-logs/chat.json に変換する
    pub chat: bool,
    /// -v / --verbose: debug レベルの診断も stderr に出す
    pub verbose: bool,
    /// --transcript: transcript の場所（既定 ./transcript.jsonl）
    pub transcript: Option<PathBuf>,
    /// --tts-script: TTS ヘルパースクリプトの場所（既定 <実行ファイルのディレクトリ>/utils/tts/elevenlabs_tts.py）
    pub tts_script: Option<PathBuf>,
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("stop-hook")
        .about("Session stop hook: log the event, optionally convert the transcript, announce completion")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("chat")
                .long("chat")
                .help("Convert transcript.jsonl into claude-toolkit-logs/chat.json")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit debug diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("transcript")
                .long("transcript")
                .value_name("path")
                .help("Transcript source (default: ./transcript.jsonl)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("tts-script")
                .long("tts-script")
                .value_name("path")
                .help("TTS helper script run as `uv run <path> <message>`")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        chat: matches.get_flag("chat"),
        verbose: matches.get_flag("verbose"),
        transcript: matches.get_one::<PathBuf>("transcript").cloned(),
        tts_script: matches.get_one::<PathBuf>("tts-script").cloned(),
    }
}

/// コマンドラインを解析する
pub fn parse_args() -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// テスト用: 引数スライスから解析する
#[cfg(test)]
pub fn parse_args_from(args: &[&str]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args.iter().copied())
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// Config を HookCommand に変換する
pub fn config_to_command(config: &Config) -> HookCommand {
    if config.help {
        return HookCommand::Help;
    }
    HookCommand::Stop(StopOptions {
        chat: config.chat,
        transcript: config.transcript.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(!config.help);
        assert!(!config.chat);
        assert!(!config.verbose);
        assert!(config.transcript.is_none());
        assert!(config.tts_script.is_none());
    }

    #[test]
    fn test_parse_args_no_args() {
        let config = parse_args_from(&["stop-hook"]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config_to_command(&config),
            HookCommand::Stop(StopOptions::default())
        );
    }

    #[test]
    fn test_parse_args_chat() {
        let config = parse_args_from(&["stop-hook", "--chat"]).unwrap();
        assert!(config.chat);
        assert_eq!(
            config_to_command(&config),
            HookCommand::Stop(StopOptions {
                chat: true,
                transcript: None,
            })
        );
    }

    #[test]
    fn test_parse_args_paths() {
        let config = parse_args_from(&[
            "stop-hook",
            "--chat",
            "--transcript",
            "logs/t.jsonl",
            "--tts-script",
            "/opt/tts.py",
            "-v",
        ])
        .unwrap();
        assert!(config.verbose);
        assert_eq!(config.transcript, Some(PathBuf::from("logs/t.jsonl")));
        assert_eq!(config.tts_script, Some(PathBuf::from("/opt/tts.py")));
    }

    #[test]
    fn test_parse_args_help_wins() {
        let config = parse_args_from(&["stop-hook", "--chat", "-h"]).unwrap();
        assert_eq!(config_to_command(&config), HookCommand::Help);
    }

    #[test]
    fn test_parse_args_unknown_option() {
        let err = parse_args_from(&["stop-hook", "--unknown"]).unwrap_err();
        assert!(err.is_usage(), "unknown option must be a usage error");
    }

    #[test]
    fn test_parse_args_missing_value() {
        let err = parse_args_from(&["stop-hook", "--transcript"]).unwrap_err();
        assert!(err.is_usage());
    }
}
