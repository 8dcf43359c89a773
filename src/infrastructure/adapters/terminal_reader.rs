//! 터미널 줄 입력 포트 구현 어댑터.

use anyhow::Result;

use crate::application::ports::LineReader;
use crate::infrastructure::line_editor;

/// raw mode 편집기(TTY) 또는 stdin 줄 읽기(non-TTY)로 입력을 받는다.
#[derive(Debug, Default)]
pub struct TerminalLineReader;

impl LineReader for TerminalLineReader {
    fn read_line(&mut self, prompt: &str, completions: &[&str]) -> Result<Option<String>> {
        line_editor::read_line(prompt, completions)
    }
}
