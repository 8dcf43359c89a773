//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod scripted;
mod terminal_output;
mod terminal_reader;

pub use config_repository::JsonConfigRepository;
pub use scripted::{BufferOutput, OutputLine, ScriptedReader};
pub use terminal_output::TerminalOutput;
pub use terminal_reader::TerminalLineReader;
