//! 터미널 한 줄 입력기.
//! TTY에서는 raw mode로 직접 편집하며 등록 명령 이름을 자동 완성한다.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType};
use tracing::debug;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 프롬프트를 표시하고 한 줄을 읽는다.
/// - TTY + 지원 터미널: 실시간 완성 힌트 + Tab 완성
/// - non-TTY/미지원 터미널: 일반 라인 입력
pub fn read_line(prompt: &str, completions: &[&str]) -> Result<Option<String>> {
    if !supports_interactive_input() {
        return read_line_fallback(prompt);
    }

    match read_line_interactive(prompt, completions) {
        Ok(v) => Ok(v),
        Err(err) => {
            debug!(error = %err, "interactive input failed, falling back to plain input");
            read_line_fallback(prompt)
        }
    }
}

pub(crate) fn supports_interactive_input() -> bool {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 UI를 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(trim_newline(line)))
}

fn read_line_interactive(prompt: &str, completions: &[&str]) -> Result<Option<String>> {
    let mut stdout = io::stdout();
    let _guard = InputGuard::enter(&mut stdout)?;

    let mut buffer = EditBuffer::default();

    loop {
        let ghost = completion_hint(buffer.text(), completions);
        render_line(&mut stdout, prompt, &buffer, ghost.as_deref())?;

        let key = match event::read()? {
            Event::Paste(text) => {
                text.chars()
                    .filter(|ch| !matches!(ch, '\n' | '\r'))
                    .for_each(|ch| buffer.insert(ch));
                continue;
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => {
                finish_line(&mut stdout)?;
                return Ok(Some(buffer.into_text()));
            }
            KeyCode::Char('c') if ctrl => {
                finish_line(&mut stdout)?;
                return Ok(None);
            }
            KeyCode::Char('d') if ctrl && buffer.is_empty() => {
                finish_line(&mut stdout)?;
                return Ok(None);
            }
            KeyCode::Char('u') if ctrl => buffer.replace(String::new()),
            KeyCode::Backspace => buffer.backspace(),
            KeyCode::Delete => buffer.delete(),
            KeyCode::Left => buffer.move_left(),
            // 줄 끝에서 오른쪽 화살표는 힌트를 받아들인다.
            KeyCode::Right => match ghost {
                Some(hint) if buffer.at_end() => buffer.append(&hint),
                _ => buffer.move_right(),
            },
            KeyCode::Home => buffer.move_home(),
            KeyCode::End => buffer.move_end(),
            KeyCode::Tab => {
                if let Some(completed) = complete(buffer.text(), completions) {
                    buffer.replace(completed);
                }
            }
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                buffer.insert(ch);
            }
            _ => {}
        }
    }
}

/// 편집 중인 한 줄과 문자 단위 커서.
#[derive(Debug, Default)]
struct EditBuffer {
    text: String,
    cursor: usize,
}

impl EditBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn into_text(self) -> String {
        self.text
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn at_end(&self) -> bool {
        self.cursor == self.char_len()
    }

    fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    fn append(&mut self, suffix: &str) {
        self.text.push_str(suffix);
        self.cursor = self.char_len();
    }

    fn replace(&mut self, text: String) {
        self.text = text;
        self.cursor = self.char_len();
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.remove_at(self.cursor);
        }
    }

    fn delete(&mut self) {
        self.remove_at(self.cursor);
    }

    fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    fn remove_at(&mut self, char_idx: usize) {
        let start = self.byte_offset(char_idx);
        let end = self.byte_offset(char_idx + 1);
        if start < end {
            self.text.replace_range(start..end, "");
        }
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(idx, _)| idx)
    }

    /// 커서 앞부분의 표시 폭.
    fn width_before_cursor(&self) -> usize {
        self.text
            .chars()
            .take(self.cursor)
            .map(char_display_width)
            .sum()
    }
}

/// 명령 이름을 입력 중일 때 접두어가 일치하는 후보.
fn matching_candidates<'a>(input: &str, completions: &[&'a str]) -> Vec<&'a str> {
    if input.is_empty() || input.contains(char::is_whitespace) {
        return Vec::new();
    }

    completions
        .iter()
        .copied()
        .filter(|candidate| candidate.starts_with(input))
        .collect()
}

/// 첫 후보의 남은 부분(회색 힌트로 표시).
fn completion_hint(input: &str, completions: &[&str]) -> Option<String> {
    let first = *matching_candidates(input, completions).first()?;
    let rest = &first[input.len()..];
    (!rest.is_empty()).then(|| rest.to_string())
}

/// Tab 완성 결과.
/// 후보가 하나면 이름 + 공백, 여러 개면 공통 접두어까지 확장한다.
fn complete(input: &str, completions: &[&str]) -> Option<String> {
    let matches = matching_candidates(input, completions);
    match matches.as_slice() {
        [] => None,
        [only] => Some(format!("{only} ")),
        [first, rest @ ..] => {
            let common = rest
                .iter()
                .fold(first.to_string(), |acc, cand| common_prefix(&acc, cand));
            (common.len() > input.len()).then_some(common)
        }
    }
}

fn common_prefix(a: &str, b: &str) -> String {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .collect()
}

fn render_line(
    stdout: &mut io::Stdout,
    prompt: &str,
    buffer: &EditBuffer,
    ghost: Option<&str>,
) -> Result<()> {
    let (w, _) = terminal::size().unwrap_or((120, 40));
    let width = (w as usize).max(20);
    let prompt_width = display_width(prompt);
    let available = width.saturating_sub(prompt_width + 1);
    let shown = tail_with_ellipsis_display(buffer.text(), available);

    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    write!(stdout, "{prompt}{shown}")?;

    if let Some(ghost) = ghost {
        let room = available.saturating_sub(display_width(&shown));
        let ghost = clip_display(ghost, room);
        if !ghost.is_empty() {
            execute!(stdout, SetForegroundColor(Color::DarkGrey))?;
            write!(stdout, "{ghost}")?;
            execute!(stdout, ResetColor)?;
        }
    }

    let col = cursor_col(buffer, available) + prompt_width;
    execute!(stdout, cursor::MoveToColumn(col as u16), cursor::Show)?;
    stdout.flush()?;
    Ok(())
}

fn cursor_col(buffer: &EditBuffer, available: usize) -> usize {
    if display_width(buffer.text()) <= available {
        return buffer.width_before_cursor();
    }

    // 넘친 줄은 끝부분만 보이므로 커서를 표시된 끝에 둔다.
    display_width(&tail_with_ellipsis_display(buffer.text(), available))
}

fn finish_line(stdout: &mut io::Stdout) -> Result<()> {
    // raw mode에서는 줄바꿈이 캐리지 리턴을 포함하지 않는다.
    write!(stdout, "\r\n")?;
    stdout.flush()?;
    Ok(())
}

/// 폭을 넘는 입력은 앞을 `...`로 줄이고 끝부분을 보여준다.
fn tail_with_ellipsis_display(text: &str, max_width: usize) -> String {
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut budget = max_width - 3;
    let keep = text
        .chars()
        .rev()
        .take_while(|ch| {
            let cw = char_display_width(*ch);
            let fits = cw <= budget;
            if fits {
                budget -= cw;
            }
            fits
        })
        .count();
    let skip = text.chars().count() - keep;
    format!("...{}", text.chars().skip(skip).collect::<String>())
}

fn clip_display(text: &str, max_width: usize) -> String {
    let mut used = 0usize;
    text.chars()
        .take_while(|ch| {
            used += char_display_width(*ch);
            used <= max_width
        })
        .collect()
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

// unicode-width 크레이트로 터미널 표시 폭을 계산한다.
fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

fn char_display_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

struct InputGuard;

impl InputGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout, cursor::Show)?;
        Ok(Self)
    }
}

impl Drop for InputGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, ResetColor);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}
