//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::interface::cli::kv_shell::parse_assignment;

#[derive(Debug, Parser)]
#[command(name = "loopcmd")]
#[command(about = "Interactive command loop over a shared key/value context")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Prompt shown before each input line
    #[arg(long)]
    prompt: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Seed the context before the first prompt
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Run these command lines in order instead of reading the terminal
    #[arg(long = "exec", value_name = "LINE")]
    exec: Vec<String>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and searched config paths
    Config,
}

pub enum CliAction {
    InspectConfig,
    Loop(LoopOptions),
}

/// 루프 세션 실행 옵션.
#[derive(Debug, Clone, Default)]
pub struct LoopOptions {
    pub prompt: Option<String>,
    pub no_color: bool,
    pub seeds: Vec<(String, Value)>,
    /// `Some`이면 터미널 대신 이 줄들을 순서대로 실행한다.
    pub script: Option<Vec<String>>,
}

impl Cli {
    pub fn parse_action() -> Result<CliAction, String> {
        Cli::parse().into_action()
    }

    fn into_action(self) -> Result<CliAction, String> {
        if let Some(Commands::Config) = self.command {
            return Ok(CliAction::InspectConfig);
        }

        let seeds = self
            .set
            .iter()
            .map(|raw| parse_assignment(raw).map_err(|err| format!("invalid --set: {err}")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CliAction::Loop(LoopOptions {
            prompt: self.prompt,
            no_color: self.no_color,
            seeds,
            script: (!self.exec.is_empty()).then_some(self.exec),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn action(args: &[&str]) -> Result<CliAction, String> {
        Cli::try_parse_from(args)
            .map_err(|err| err.to_string())?
            .into_action()
    }

    #[test]
    fn test_config_subcommand() {
        assert!(matches!(action(&["loopcmd", "config"]), Ok(CliAction::InspectConfig)));
    }

    #[test]
    fn test_loop_options() {
        let Ok(CliAction::Loop(options)) = action(&[
            "loopcmd",
            "--prompt",
            "kv> ",
            "--no-color",
            "--set",
            "a=1",
            "--exec",
            "get a",
            "--exec",
            "quit",
        ]) else {
            panic!("expected loop action");
        };

        assert_eq!(options.prompt.as_deref(), Some("kv> "));
        assert!(options.no_color);
        assert_eq!(options.seeds, vec![("a".to_string(), json!(1))]);
        assert_eq!(
            options.script,
            Some(vec!["get a".to_string(), "quit".to_string()])
        );
    }

    #[test]
    fn test_interactive_by_default() {
        let Ok(CliAction::Loop(options)) = action(&["loopcmd"]) else {
            panic!("expected loop action");
        };
        assert!(options.script.is_none());
        assert!(options.seeds.is_empty());
    }

    #[test]
    fn test_invalid_seed_is_rejected() {
        let Err(msg) = action(&["loopcmd", "--set", "oops"]) else {
            panic!("expected error");
        };
        assert!(msg.contains("invalid --set"));
    }
}
