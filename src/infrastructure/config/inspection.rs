//! 설정 진단 출력 모델.

use std::path::PathBuf;

use serde::Serialize;

use crate::application::config::{ColorMode, LoopConfig};

use super::loader::LoadedConfig;

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
    pub effective: EffectiveSettings,
    pub raw: LoopConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveSettings {
    pub prompt: String,
    pub farewell: String,
    /// `null`이면 무제한
    pub max_attempts: Option<usize>,
    pub help_tab_stop: usize,
    pub color: ColorMode,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let config = loaded.config;
        let effective = EffectiveSettings {
            prompt: config.prompt(),
            farewell: config.farewell(),
            max_attempts: config.max_attempts(),
            help_tab_stop: config.help_layout().tab_stop(),
            color: config.color_mode(),
        };

        Self {
            searched_paths: loaded.searched_paths,
            loaded_paths: loaded.loaded_paths,
            effective,
            raw: config,
        }
    }
}
