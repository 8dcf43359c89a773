//! 터미널 출력 포트 구현 어댑터.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::execute;
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use unicode_width::UnicodeWidthStr;

use crate::application::config::ColorMode;
use crate::application::ports::Output;

/// stdout에 쓰는 출력 어댑터. 색상 사용 여부는 생성 시 결정한다.
pub struct TerminalOutput {
    styled: bool,
}

impl TerminalOutput {
    pub fn new(color: ColorMode) -> Self {
        let styled = match color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                io::stdout().is_terminal()
                    && !env::var("TERM").is_ok_and(|term| term.eq_ignore_ascii_case("dumb"))
            }
        };
        Self { styled }
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }
}

impl Output for TerminalOutput {
    fn writeln(&mut self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        Ok(())
    }

    fn comment(&mut self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.styled {
            execute!(out, SetForegroundColor(Color::Yellow))?;
            write!(out, "{line}")?;
            execute!(out, ResetColor)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    fn error_block(&mut self, message: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if !self.styled {
            for line in plain_error_lines(message) {
                writeln!(out, "{line}")?;
            }
            return Ok(());
        }

        for line in format_block(message) {
            execute!(
                out,
                SetBackgroundColor(Color::DarkRed),
                SetForegroundColor(Color::White),
                SetAttribute(Attribute::Bold)
            )?;
            write!(out, "{line}")?;
            execute!(out, SetAttribute(Attribute::Reset), ResetColor)?;
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

/// 색상 없이 출력할 때 오류 줄마다 `error: `를 붙인다.
fn plain_error_lines(message: &str) -> Vec<String> {
    if message.is_empty() {
        return vec!["error:".to_string()];
    }
    message.lines().map(|line| format!("error: {line}")).collect()
}

/// 오류 메시지를 위아래 여백이 있는 같은 폭의 블록 줄로 만든다.
fn format_block(message: &str) -> Vec<String> {
    let body: Vec<&str> = if message.is_empty() {
        vec![""]
    } else {
        message.lines().collect()
    };
    let inner = body
        .iter()
        .map(|line| UnicodeWidthStr::width(*line))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(" ".repeat(inner + 4));
    for line in body {
        let pad = inner - UnicodeWidthStr::width(line);
        lines.push(format!("  {line}{}  ", " ".repeat(pad)));
    }
    lines.push(" ".repeat(inner + 4));
    lines
}
