//! 루프 세션 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

use crate::application::builtins::HelpLayout;
use crate::application::session::SessionSettings;

pub const DEFAULT_PROMPT: &str = "loop > ";
pub const DEFAULT_FAREWELL: &str = "Bye";
pub const DEFAULT_MAX_ATTEMPTS: usize = 1;

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct LoopConfig {
    /// 입력 프롬프트 문자열
    pub prompt: Option<String>,
    /// 종료 시 출력할 인사
    pub farewell: Option<String>,
    /// 입력 검증 최대 시도 횟수(0이면 무제한)
    pub max_attempts: Option<usize>,
    /// help 출력 정렬
    #[serde(default)]
    pub help: HelpConfig,
    /// 색상 출력 정책(auto/always/never)
    pub color: Option<ColorMode>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct HelpConfig {
    pub tab_length: Option<usize>,
    pub max_tabs: Option<usize>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl LoopConfig {
    pub fn prompt(&self) -> String {
        self.prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
    }

    pub fn farewell(&self) -> String {
        self.farewell
            .clone()
            .unwrap_or_else(|| DEFAULT_FAREWELL.to_string())
    }

    /// `None`이면 무제한 재시도.
    pub fn max_attempts(&self) -> Option<usize> {
        match self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS) {
            0 => None,
            n => Some(n),
        }
    }

    pub fn help_layout(&self) -> HelpLayout {
        let defaults = HelpLayout::default();
        HelpLayout {
            tab_length: self.help.tab_length.unwrap_or(defaults.tab_length),
            max_tabs: self.help.max_tabs.unwrap_or(defaults.max_tabs),
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.unwrap_or_default()
    }

    /// 디스패처가 사용할 최종 설정으로 해석한다.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            prompt: self.prompt(),
            farewell: self.farewell(),
            max_attempts: self.max_attempts(),
            help: self.help_layout(),
        }
    }

    /// 우선순위가 높은 설정의 값이 있으면 덮어쓴다.
    pub fn merge_from(&mut self, other: LoopConfig) {
        if other.prompt.is_some() {
            self.prompt = other.prompt;
        }
        if other.farewell.is_some() {
            self.farewell = other.farewell;
        }
        if other.max_attempts.is_some() {
            self.max_attempts = other.max_attempts;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
        self.help.merge_from(other.help);
    }
}

impl HelpConfig {
    pub fn merge_from(&mut self, other: HelpConfig) {
        if other.tab_length.is_some() {
            self.tab_length = other.tab_length;
        }
        if other.max_tabs.is_some() {
            self.max_tabs = other.max_tabs;
        }
    }
}
