//! 명령 메타데이터와 핸들러 실행 결과 값 객체.

use std::fmt;

/// 명령 뒤에 오는 인자 텍스트의 허용 정책.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgMode {
    /// 비어 있지 않은 인자가 반드시 필요하다.
    Required,
    /// 인자가 있어도 되고 없어도 된다.
    Optional,
    /// 인자를 허용하지 않는다.
    None,
}

impl ArgMode {
    /// help/로그 표기용 짧은 라벨.
    pub fn label(self) -> &'static str {
        match self {
            ArgMode::Required => "required",
            ArgMode::Optional => "optional",
            ArgMode::None => "none",
        }
    }
}

impl fmt::Display for ArgMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 등록된 명령의 핸들러를 제외한 메타데이터.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    pub mode: ArgMode,
    pub description: String,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>, mode: ArgMode, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode,
            description: description.into(),
        }
    }
}

/// 검증을 통과한 입력 한 줄.
///
/// `argument`가 `None`이면 명령 뒤에 구분 공백이 아예 없었다는 뜻이고,
/// `Some("")`은 구분 공백은 있었지만 내용이 비어 있었다는 뜻이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub name: String,
    pub argument: Option<String>,
}

impl ParsedInput {
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }
}

/// 핸들러 호출 후 루프가 취할 다음 동작.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// 세션 종료 신호. 일반 오류 경로로는 절대 전달되지 않는다.
    Terminate,
}
