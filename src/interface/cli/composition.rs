//! 애플리케이션 조립(composition root) 모듈.

use crate::application::config::ColorMode;
use crate::application::ports::LineReader;
use crate::application::usecases::loop_config::LoopConfigUseCase;
use crate::infrastructure::adapters::{
    JsonConfigRepository, ScriptedReader, TerminalLineReader, TerminalOutput,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
        }
    }
}

impl AppComposition {
    /// 루프 설정 유스케이스를 생성한다.
    pub fn loop_config_usecase(&self) -> LoopConfigUseCase<'_> {
        LoopConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 스크립트가 있으면 스크립트 리더를, 없으면 터미널 리더를 만든다.
    pub fn line_reader(&self, script: Option<Vec<String>>) -> Box<dyn LineReader> {
        match script {
            Some(lines) => Box::new(ScriptedReader::new(lines).with_echo()),
            None => Box::new(TerminalLineReader),
        }
    }

    pub fn output(&self, color: ColorMode) -> TerminalOutput {
        TerminalOutput::new(color)
    }
}
