//! 루프 세션 디스패처(상태 머신).
//!
//! 한 줄 읽기 → 입력 검증 → 핸들러 호출을 `Terminated`가 될 때까지 반복한다.
//! 검증 오류와 핸들러 오류는 한 지점에서 표시하고 루프를 계속하며,
//! 종료 신호(`Flow::Terminate`)만 루프 경계까지 도달해 세션을 끝낸다.

use anyhow::{Context as _, Result, anyhow};
use tracing::{debug, error, warn};

use crate::application::builtins::{self, HelpLayout};
use crate::application::config::{DEFAULT_FAREWELL, DEFAULT_MAX_ATTEMPTS, DEFAULT_PROMPT};
use crate::application::console::Console;
use crate::application::ports::{LineReader, Output};
use crate::application::prompt::{AskRequest, Asked};
use crate::application::registry::Registry;
use crate::domain::command::Flow;
use crate::domain::context::Context;
use crate::domain::error::{InputError, describe_error};
use crate::domain::input::validate_input;

/// 구체적인 루프 하나의 정의.
pub trait LoopProgram {
    type Context: Context + Default + 'static;

    /// 세션 시작 시 컨텍스트를 한 번 만든다.
    fn new_context(&self) -> Self::Context {
        Self::Context::default()
    }

    /// 내장 명령 다음에 이 루프의 명령을 등록한다.
    fn configure(&self, registry: &mut Registry<Self::Context>);

    /// 첫 프롬프트 전에 한 번 실행된다.
    fn initialize(&self, _console: &mut Console<'_>, _context: &mut Self::Context) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// 세션이 외부에 보고하는 종료 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// 종료 신호 없이 루프를 빠져나온 내부 불변식 위반.
    InvariantViolation,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::InvariantViolation => 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub prompt: String,
    pub farewell: String,
    pub max_attempts: Option<usize>,
    pub help: HelpLayout,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            farewell: DEFAULT_FAREWELL.to_string(),
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            help: HelpLayout::default(),
        }
    }
}

/// 반복 한 번의 실패. 복구 가능한 오류만 표시 후 계속한다.
enum IterationError {
    Recoverable(anyhow::Error),
    Fatal(anyhow::Error),
}

/// 프로그램 하나에 대한 루프 세션.
pub struct LoopSession<P: LoopProgram> {
    program: P,
    registry: Registry<P::Context>,
    settings: SessionSettings,
    state: SessionState,
}

impl<P: LoopProgram> LoopSession<P> {
    /// 내장 명령을 먼저 등록한 뒤 프로그램의 명령을 등록한다.
    pub fn new(program: P, settings: SessionSettings) -> Self {
        let mut registry = Registry::new();
        builtins::register_builtins(&mut registry, settings.help);
        program.configure(&mut registry);

        Self {
            program,
            registry,
            settings,
            state: SessionState::Running,
        }
    }

    pub fn program(&self) -> &P {
        &self.program
    }

    pub fn registry(&self) -> &Registry<P::Context> {
        &self.registry
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 프로그램의 팩토리로 컨텍스트를 만들고 세션을 끝까지 실행한다.
    pub fn run(&mut self, input: &mut dyn LineReader, output: &mut dyn Output) -> Result<ExitStatus> {
        let mut context = self.program.new_context();
        self.run_with_context(input, output, &mut context)
    }

    /// 호출자가 소유한 컨텍스트로 세션을 실행한다.
    /// 읽기/출력 포트 자체의 실패와 `initialize` 실패만 `Err`로 반환한다.
    pub fn run_with_context(
        &mut self,
        input: &mut dyn LineReader,
        output: &mut dyn Output,
        context: &mut P::Context,
    ) -> Result<ExitStatus> {
        let Self {
            program,
            registry,
            settings,
            state,
        } = self;

        let completions = registry.names();
        let mut console = Console::new(input, output, registry.specs());
        program
            .initialize(&mut console, context)
            .context("failed to initialize loop")?;

        *state = SessionState::Running;
        debug!(commands = registry.len(), "loop session started");

        while *state == SessionState::Running {
            match run_iteration(&mut console, registry, settings, &completions, context) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Terminate) => *state = SessionState::Terminated,
                Err(IterationError::Recoverable(err)) => {
                    warn!(error = %format!("{err:#}"), "command failed");
                    console.error_block(&describe_error(&err))?;
                }
                Err(IterationError::Fatal(err)) => return Err(err),
            }
        }

        match *state {
            SessionState::Terminated => {
                console.comment(&settings.farewell)?;
                debug!("loop session terminated");
                Ok(ExitStatus::Success)
            }
            SessionState::Running => {
                error!("loop exited without a termination signal");
                Ok(ExitStatus::InvariantViolation)
            }
        }
    }
}

fn run_iteration<C>(
    console: &mut Console<'_>,
    registry: &Registry<C>,
    settings: &SessionSettings,
    completions: &[&str],
    context: &mut C,
) -> Result<Flow, IterationError> {
    let commands = registry.specs();
    let request = AskRequest::new(&settings.prompt)
        .with_completions(completions)
        .with_max_attempts(settings.max_attempts);

    let asked = console
        .ask(&request, |raw| validate_input(raw, commands))
        .map_err(IterationError::Fatal)?;

    let parsed = match asked {
        Asked::Answer(Some(parsed)) => parsed,
        Asked::Answer(None) => return Ok(Flow::Continue),
        Asked::Rejected(err) => return Err(IterationError::Recoverable(err.into())),
        Asked::Closed => {
            // 입력 종료는 quit과 같이 취급한다.
            debug!("input closed");
            return Ok(Flow::Terminate);
        }
    };

    let Some(command) = registry.lookup(&parsed.name) else {
        return Err(IterationError::Recoverable(anyhow!(InputError::InvalidCommand {
            name: parsed.name,
        })));
    };

    debug!(command = %parsed.name, mode = %command.spec.mode, "dispatching command");
    command
        .invoke(console, context, parsed.argument())
        .map_err(IterationError::Recoverable)
}
