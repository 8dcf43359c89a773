//! 입력 한 줄을 명령 이름과 인자 텍스트로 해석하고 인자 모드를 검사한다.

use crate::domain::command::{ArgMode, CommandSpec, ParsedInput};
use crate::domain::error::InputError;

/// 입력을 첫 공백 구간 기준으로 (명령 후보, 나머지)로 나눈다.
/// 앞쪽 공백과 줄바꿈 문자는 제거하고, 나머지 텍스트는 그대로 둔다.
pub fn split_input(raw: &str) -> (&str, Option<&str>) {
    let line = raw.trim_end_matches(['\n', '\r']).trim_start();

    match line.find(char::is_whitespace) {
        None => (line, None),
        Some(idx) => (&line[..idx], Some(line[idx..].trim_start())),
    }
}

/// 등록된 명령 목록을 기준으로 입력을 검증한다.
///
/// - 빈 입력: `Ok(None)` (오류 아님)
/// - 미등록 명령: `InvalidCommand`
/// - `Required` 모드인데 인자가 비어 있음: `MissingArgument`
/// - `None` 모드인데 인자가 있음: `UnexpectedArgument`
pub fn validate_input(
    raw: &str,
    commands: &[CommandSpec],
) -> Result<Option<ParsedInput>, InputError> {
    let (name, remainder) = split_input(raw);
    if name.is_empty() {
        return Ok(None);
    }

    let Some(spec) = commands.iter().find(|spec| spec.name == name) else {
        return Err(InputError::InvalidCommand {
            name: name.to_string(),
        });
    };

    let blank = remainder.is_none_or(|rest| rest.trim().is_empty());
    match spec.mode {
        ArgMode::Required if blank => Err(InputError::MissingArgument {
            command: spec.name.clone(),
        }),
        ArgMode::None if !blank => Err(InputError::UnexpectedArgument {
            command: spec.name.clone(),
            given: remainder.unwrap_or_default().to_string(),
        }),
        _ => Ok(Some(ParsedInput {
            name: spec.name.clone(),
            argument: remainder.map(ToString::to_string),
        })),
    }
}
