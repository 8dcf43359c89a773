//! CLI 인터페이스 모듈 묶음.
//! 입력 파싱/루프 실행/조립을 한 네임스페이스로 관리한다.

pub mod command;
pub mod composition;
pub mod kv_shell;
pub mod repl;

pub use command::{Cli, CliAction, LoopOptions};
pub use composition::AppComposition;
pub use kv_shell::KeyValueShell;
pub use repl::run_loop;
