mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::process;

use cli::{config_to_command, parse_args};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{HookCommand, StopOptions};
use ports::inbound::RunStopHook;
use usecase::{StepStatus, StopHookReport};
use wiring::{wire_stop_hook, App};

/// フックは何があっても 0 で終わる（ホストのセッションを止めない）
const EXIT_CODE: i32 = 0;

/// HookCommand をディスパッチする Runner
struct Runner {
    app: App,
}

impl Runner {
    fn run(&self, options: &StopOptions) -> StopHookReport {
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("chat", options.chat),
        );

        let report = match read_stdin() {
            Ok(input) => self.app.stop_hook.run(&input, options),
            Err(e) => {
                let _ = self.app.logger.log(
                    &LogRecord::new(LogLevel::Warn, "failed to read stdin")
                        .layer("cli")
                        .kind("error")
                        .field("error", e.to_string()),
                );
                StopHookReport {
                    event: StepStatus::Failed(e),
                    ..Default::default()
                }
            }
        };

        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("event", status_name(&report.event))
                .field("transcript", status_name(&report.transcript))
                .field("announce", status_name(&report.announce))
                .field("exit_code", report.exit_code()),
        );
        report
    }
}

fn status_name(status: &StepStatus) -> &'static str {
    match status {
        StepStatus::Completed => "completed",
        StepStatus::Skipped => "skipped",
        StepStatus::Failed(_) => "failed",
        StepStatus::NotAttempted => "not_attempted",
    }
}

fn read_stdin() -> Result<String, Error> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
    Ok(input)
}

fn main() {
    // .env は任意（無くても既存の環境変数だけで動く）
    let _ = dotenvy::dotenv();

    if panic::catch_unwind(AssertUnwindSafe(run)).is_err() {
        eprintln!("stop-hook: unexpected internal error (ignored)");
    }
    process::exit(EXIT_CODE);
}

fn run() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("stop-hook: {}", e);
            if e.is_usage() {
                print_usage();
            }
            return;
        }
    };
    match config_to_command(&config) {
        HookCommand::Help => print_help(),
        HookCommand::Stop(options) => {
            let runner = Runner {
                app: wire_stop_hook(&config),
            };
            runner.run(&options);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: stop-hook [--chat] [--transcript <path>] [--tts-script <path>] [-v] < event.json");
}

fn print_help() {
    println!("Usage: stop-hook [options] < event.json");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  --chat                     Convert ./transcript.jsonl into ./claude-toolkit-logs/chat.json");
    println!("  --transcript <path>        Transcript source used with --chat (default: ./transcript.jsonl)");
    println!("  --tts-script <path>        TTS helper run as `uv run <path> <message>`");
    println!("                             (default: <hook dir>/utils/tts/elevenlabs_tts.py)");
    println!("  -v, --verbose              Emit debug diagnostics to stderr");
    println!();
    println!("Environment:");
    println!("  ELEVENLABS_API_KEY   Enables the spoken completion announcement (with the TTS helper present).");
    println!("  STOP_HOOK_DEBUG_LOG  Append diagnostics to this file as JSONL instead of stderr.");
    println!("  A .env file in the current directory (or a parent) is loaded first.");
    println!();
    println!("Description:");
    println!("  Reads one JSON event from stdin and appends it, with a timestamp,");
    println!("  to ./claude-toolkit-logs/stop.json. Always exits with status 0.");
}
