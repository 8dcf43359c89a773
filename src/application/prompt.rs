//! 검증 함수 기반 질문 헬퍼.
//! `LineReader`의 한 줄 읽기 위에 기본값/재시도/완성 후보 규칙을 얹는다.

use anyhow::Result;

use crate::application::ports::{LineReader, Output};
use crate::domain::error::error_kind_of;

/// 질문 한 번의 설정.
#[derive(Debug, Clone, Copy)]
pub struct AskRequest<'a> {
    pub prompt: &'a str,
    /// 입력 중 자동 완성 후보
    pub completions: &'a [&'a str],
    /// 공백 응답 대신 검증 함수에 넘길 값
    pub default: Option<&'a str>,
    /// 최대 시도 횟수(`None`이면 무제한)
    pub max_attempts: Option<usize>,
}

impl<'a> AskRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            prompt,
            completions: &[],
            default: None,
            max_attempts: None,
        }
    }

    pub fn with_completions(mut self, completions: &'a [&'a str]) -> Self {
        self.completions = completions;
        self
    }

    pub fn with_default(mut self, default: &'a str) -> Self {
        self.default = Some(default);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// 질문 결과.
#[derive(Debug)]
pub enum Asked<T, E> {
    /// 검증을 통과한 값
    Answer(T),
    /// 허용 횟수를 모두 소진했을 때의 마지막 검증 오류
    Rejected(E),
    /// 입력 스트림 종료
    Closed,
}

/// 검증 함수가 통과할 때까지 한 줄씩 질문한다.
///
/// 마지막 시도 이전의 검증 실패는 오류 블록으로 표시하고 다시 묻는다.
/// 마지막 실패는 표시하지 않고 `Asked::Rejected`로 돌려준다.
/// 읽기/출력 실패는 `Err`로 전파한다.
pub fn ask<T, E, F>(
    input: &mut dyn LineReader,
    output: &mut dyn Output,
    request: &AskRequest<'_>,
    mut validator: F,
) -> Result<Asked<T, E>>
where
    F: FnMut(&str) -> Result<T, E>,
    E: std::error::Error + 'static,
{
    let max_attempts = request.max_attempts.map(|max| max.max(1));
    let mut attempt = 0usize;

    loop {
        attempt += 1;
        let Some(line) = input.read_line(request.prompt, request.completions)? else {
            return Ok(Asked::Closed);
        };

        let answer = match request.default {
            Some(default) if line.trim().is_empty() => default.to_string(),
            _ => line,
        };

        match validator(&answer) {
            Ok(value) => return Ok(Asked::Answer(value)),
            Err(err) => {
                if max_attempts.is_some_and(|max| attempt >= max) {
                    return Ok(Asked::Rejected(err));
                }
                output.error_block(&format!("{}: {err}", error_kind_of(&err)))?;
            }
        }
    }
}
