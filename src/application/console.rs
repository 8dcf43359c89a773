//! 핸들러에 전달되는 입출력 핸들 묶음.

use anyhow::Result;

use crate::application::ports::{LineReader, Output};
use crate::application::prompt::{self, AskRequest, Asked};
use crate::domain::command::CommandSpec;

/// 한 세션 동안 핸들러가 사용하는 입력/출력과 등록 명령 목록.
pub struct Console<'a> {
    input: &'a mut dyn LineReader,
    output: &'a mut dyn Output,
    commands: &'a [CommandSpec],
}

impl<'a> Console<'a> {
    pub fn new(
        input: &'a mut dyn LineReader,
        output: &'a mut dyn Output,
        commands: &'a [CommandSpec],
    ) -> Self {
        Self {
            input,
            output,
            commands,
        }
    }

    /// 등록 순서대로 정렬된 명령 메타데이터.
    pub fn commands(&self) -> &'a [CommandSpec] {
        self.commands
    }

    pub fn writeln(&mut self, line: &str) -> Result<()> {
        self.output.writeln(line)
    }

    pub fn comment(&mut self, line: &str) -> Result<()> {
        self.output.comment(line)
    }

    pub fn error_block(&mut self, message: &str) -> Result<()> {
        self.output.error_block(message)
    }

    pub fn read_line(&mut self, prompt: &str, completions: &[&str]) -> Result<Option<String>> {
        self.input.read_line(prompt, completions)
    }

    /// 검증 함수가 통과할 때까지 질문한다. 자세한 규칙은 [`prompt::ask`] 참고.
    pub fn ask<T, E, F>(&mut self, request: &AskRequest<'_>, validator: F) -> Result<Asked<T, E>>
    where
        F: FnMut(&str) -> Result<T, E>,
        E: std::error::Error + 'static,
    {
        prompt::ask(&mut *self.input, &mut *self.output, request, validator)
    }
}
