//! loopcmd library root.
//! 명령 루프 디스패처를 Clean Architecture 계층으로 외부에 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use application::console::Console;
pub use application::prompt::{AskRequest, Asked};
pub use application::registry::Registry;
pub use application::session::{ExitStatus, LoopProgram, LoopSession, SessionSettings};
pub use domain::command::{ArgMode, Flow};
pub use domain::context::{Context, MapContext};
pub use domain::error::InputError;

use infrastructure::adapters::{TerminalLineReader, TerminalOutput};
use interface::cli::AppComposition;

/// 병합된 설정과 터미널 입출력으로 프로그램 하나를 실행한다.
pub fn run_interactive<P: LoopProgram>(program: P) -> Result<ExitStatus> {
    let composition = AppComposition::default();
    let config = composition
        .loop_config_usecase()
        .resolve(Default::default())?;

    let mut output = TerminalOutput::new(config.color_mode());
    let mut session = LoopSession::new(program, config.session_settings());
    session.run(&mut TerminalLineReader, &mut output)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json() -> Result<String> {
    AppComposition::default().loop_config_usecase().inspect()
}
