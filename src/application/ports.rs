//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;

use crate::application::config::LoopConfig;

/// 한 줄 입력을 읽는 포트.
pub trait LineReader {
    /// 프롬프트를 표시하고 한 줄을 읽는다.
    /// 입력 스트림이 닫히면 `Ok(None)`을 반환한다.
    fn read_line(&mut self, prompt: &str, completions: &[&str]) -> Result<Option<String>>;
}

/// 콘솔 출력 포트.
pub trait Output {
    fn writeln(&mut self, line: &str) -> Result<()>;
    /// 강조 표시 줄(종료 인사 등).
    fn comment(&mut self, line: &str) -> Result<()>;
    /// 눈에 띄는 오류 블록.
    fn error_block(&mut self, message: &str) -> Result<()>;
}

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository {
    fn load(&self) -> Result<LoopConfig>;
    fn inspect_pretty_json(&self) -> Result<String>;
}
