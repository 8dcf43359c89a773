//! 입력 검증 오류와 오류 종류 분류.

use thiserror::Error;

/// 디스패치 이전, 입력 검증 단계에서 발생하는 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("unknown command \"{name}\"")]
    InvalidCommand { name: String },

    #[error("the command \"{command}\" needs one or many arguments, nothing given")]
    MissingArgument { command: String },

    #[error("the command \"{command}\" doesn't accept arguments, \"{given}\" given")]
    UnexpectedArgument { command: String, given: String },
}

impl InputError {
    /// 화면 표시에 쓰는 오류 종류 이름.
    pub fn kind(&self) -> &'static str {
        match self {
            InputError::InvalidCommand { .. } => "InvalidCommand",
            InputError::MissingArgument { .. } => "MissingArgument",
            InputError::UnexpectedArgument { .. } => "UnexpectedArgument",
        }
    }
}

/// 오류 체인을 따라가며 사람이 읽을 종류 이름을 고른다.
pub fn error_kind(err: &anyhow::Error) -> &'static str {
    error_kind_of(err.as_ref())
}

/// `error_kind`의 `dyn Error` 버전.
pub fn error_kind_of(err: &(dyn std::error::Error + 'static)) -> &'static str {
    for cause in std::iter::successors(Some(err), |e| e.source()) {
        if let Some(input) = cause.downcast_ref::<InputError>() {
            return input.kind();
        }
        if cause.is::<std::io::Error>() {
            return "IoError";
        }
        if cause.is::<serde_json::Error>() {
            return "JsonError";
        }
        if cause.is::<std::num::ParseIntError>() || cause.is::<std::num::ParseFloatError>() {
            return "ParseError";
        }
    }
    "Error"
}

/// 오류 블록에 표시할 `"<kind>: <message>"` 문자열을 만든다.
pub fn describe_error(err: &anyhow::Error) -> String {
    format!("{}: {err:#}", error_kind(err))
}
