//! 미리 정한 입력 줄을 순서대로 돌려주는 리더와 메모리 출력 버퍼.
//! `--exec` 실행과 테스트에서 터미널 대신 사용한다.

use std::collections::VecDeque;

use anyhow::Result;

use crate::application::ports::{LineReader, Output};

/// 주어진 줄을 다 읽으면 입력 종료(`None`)를 알리는 리더.
#[derive(Debug, Default)]
pub struct ScriptedReader {
    lines: VecDeque<String>,
    prompts: Vec<String>,
    last_completions: Vec<String>,
    echo: bool,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// 읽은 줄을 프롬프트와 함께 stdout에 보여준다.
    pub fn with_echo(mut self) -> Self {
        self.echo = true;
        self
    }

    /// 지금까지 표시된 프롬프트.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn last_completions(&self) -> &[String] {
        &self.last_completions
    }

    /// 아직 읽지 않은 줄 수.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str, completions: &[&str]) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        self.last_completions = completions.iter().map(ToString::to_string).collect();

        let line = self.lines.pop_front();
        if self.echo
            && let Some(line) = &line
        {
            println!("{prompt}{line}");
        }
        Ok(line)
    }
}

/// 출력 한 줄과 그 표시 방식.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Plain(String),
    Comment(String),
    Error(String),
}

/// 출력을 메모리에 기록하는 어댑터.
#[derive(Debug, Default)]
pub struct BufferOutput {
    lines: Vec<OutputLine>,
}

impl BufferOutput {
    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn plain_lines(&self) -> Vec<&str> {
        self.pick_lines(|line| match line {
            OutputLine::Plain(text) => Some(text),
            _ => None,
        })
    }

    pub fn comments(&self) -> Vec<&str> {
        self.pick_lines(|line| match line {
            OutputLine::Comment(text) => Some(text),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<&str> {
        self.pick_lines(|line| match line {
            OutputLine::Error(text) => Some(text),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn pick_lines<'a>(&'a self, pick: impl Fn(&'a OutputLine) -> Option<&'a String>) -> Vec<&'a str> {
        self.lines
            .iter()
            .filter_map(pick)
            .map(String::as_str)
            .collect()
    }
}

impl Output for BufferOutput {
    fn writeln(&mut self, line: &str) -> Result<()> {
        self.lines.push(OutputLine::Plain(line.to_string()));
        Ok(())
    }

    fn comment(&mut self, line: &str) -> Result<()> {
        self.lines.push(OutputLine::Comment(line.to_string()));
        Ok(())
    }

    fn error_block(&mut self, message: &str) -> Result<()> {
        self.lines.push(OutputLine::Error(message.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_reader_runs_dry() {
        let mut reader = ScriptedReader::new(["one", "two"]);
        assert_eq!(reader.read_line("> ", &["a"]).unwrap().as_deref(), Some("one"));
        assert_eq!(reader.read_line(">> ", &[]).unwrap().as_deref(), Some("two"));
        assert_eq!(reader.read_line(">>> ", &[]).unwrap(), None);
        assert_eq!(reader.prompts(), ["> ", ">> ", ">>> "]);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_buffer_output_keeps_kinds_apart() {
        let mut output = BufferOutput::default();
        output.writeln("plain").unwrap();
        output.error_block("bad").unwrap();
        output.comment("Bye").unwrap();

        assert_eq!(output.plain_lines(), vec!["plain"]);
        assert_eq!(output.errors(), vec!["bad"]);
        assert_eq!(output.comments(), vec!["Bye"]);
        assert_eq!(output.lines().len(), 3);
    }
}
