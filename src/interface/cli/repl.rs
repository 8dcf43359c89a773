//! `loopcmd` 대화형 루프 실행.

use std::io::{self, IsTerminal};

use anyhow::Result;

use crate::application::config::{ColorMode, LoopConfig};
use crate::application::ports::Output;
use crate::application::session::{ExitStatus, LoopSession};
use crate::interface::cli::command::LoopOptions;
use crate::interface::cli::composition::AppComposition;
use crate::interface::cli::kv_shell::KeyValueShell;

/// 설정을 해석해 키/값 쉘 세션 하나를 끝까지 실행한다.
pub fn run_loop(composition: &AppComposition, options: LoopOptions) -> Result<ExitStatus> {
    let overrides = LoopConfig {
        prompt: options.prompt,
        color: options.no_color.then_some(ColorMode::Never),
        ..LoopConfig::default()
    };
    let config = composition.loop_config_usecase().resolve(overrides)?;

    let interactive = options.script.is_none() && io::stdin().is_terminal();
    let mut output = composition.output(config.color_mode());
    let mut reader = composition.line_reader(options.script);

    let mut session = LoopSession::new(KeyValueShell::new(options.seeds), config.session_settings());
    if interactive {
        print_welcome(&mut output)?;
    }

    session.run(reader.as_mut(), &mut output)
}

fn print_welcome(output: &mut dyn Output) -> Result<()> {
    output.comment("loopcmd interactive shell")?;
    output.writeln("type `help` to list commands, `quit` or Ctrl-D to leave")?;
    output.writeln("")
}
