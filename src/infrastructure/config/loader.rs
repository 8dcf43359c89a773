//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::config::LoopConfig;

pub const CONFIG_ENV: &str = "LOOPCMD_CONFIG";

#[derive(Debug, Clone)]
pub(crate) struct LoadedConfig {
    pub config: LoopConfig,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 기본 경로 목록을 순회해 JSON 설정을 병합한다.
pub(crate) fn load_merged_config() -> Result<LoadedConfig> {
    load_from_paths(config_paths())
}

/// 주어진 경로를 낮은 우선순위부터 병합한다. 없는 파일은 건너뛴다.
pub(crate) fn load_from_paths(paths: Vec<PathBuf>) -> Result<LoadedConfig> {
    let mut merged = LoopConfig::default();
    let mut loaded_paths = Vec::new();

    for path in &paths {
        if !path.exists() {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let parsed: LoopConfig = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
        merged.merge_from(parsed);
        debug!(path = %path.display(), "loaded config");
        loaded_paths.push(path.to_path_buf());
    }

    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 시스템 + 사용자 + 프로젝트 + 명시 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    // 낮은 우선순위 -> 높은 우선순위 순서로 병합됨.
    let mut paths = vec![PathBuf::from("/etc/loopcmd/config.json")];

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("loopcmd").join("config.json"));
    }

    paths.push(PathBuf::from(".loopcmd/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(Path::new(&path).to_path_buf());
    }

    dedup_paths(paths)
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::application::config::ColorMode;

    #[test]
    fn test_later_files_override_earlier() {
        let dir = tempfile::tempdir().unwrap();
        let low = dir.path().join("low.json");
        let high = dir.path().join("high.json");
        let missing = dir.path().join("missing.json");
        fs::write(&low, r#"{"prompt": "low> ", "farewell": "low bye", "color": "always"}"#).unwrap();
        fs::write(&high, r#"{"farewell": "high bye", "help": {"max_tabs": 2}}"#).unwrap();

        let loaded = load_from_paths(vec![low.clone(), missing.clone(), high.clone()]).unwrap();

        assert_eq!(loaded.loaded_paths, vec![low, high]);
        assert_eq!(loaded.searched_paths.len(), 3);
        assert_eq!(loaded.config.prompt(), "low> ");
        assert_eq!(loaded.config.farewell(), "high bye");
        assert_eq!(loaded.config.help_layout().max_tabs, 2);
        assert_eq!(loaded.config.color_mode(), ColorMode::Always);
    }

    #[test]
    fn test_malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{ not json").unwrap();

        let err = load_from_paths(vec![bad.clone()]).unwrap_err();
        assert!(format!("{err:#}").contains(&bad.display().to_string()));
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let loaded = load_from_paths(Vec::new()).unwrap();
        assert!(loaded.loaded_paths.is_empty());
        assert_eq!(loaded.config, LoopConfig::default());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let paths = dedup_paths(vec![
            PathBuf::from("a"),
            PathBuf::from("b"),
            PathBuf::from("a"),
        ]);
        assert_eq!(paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }
}
