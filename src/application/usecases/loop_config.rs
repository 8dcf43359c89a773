//! 설정 저장소에서 루프 설정을 읽어 실행 인자와 합치는 유스케이스.

use anyhow::Result;

use crate::application::config::LoopConfig;
use crate::application::ports::ConfigRepository;

/// 병합된 파일 설정 위에 실행 시점 설정을 덮어쓴다.
pub struct LoopConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> LoopConfigUseCase<'a> {
    /// 파일 설정 + `overrides`의 최종 설정을 반환한다.
    pub fn resolve(&self, overrides: LoopConfig) -> Result<LoopConfig> {
        let mut config = self.config_repo.load()?;
        config.merge_from(overrides);
        Ok(config)
    }

    /// 설정 진단 결과를 JSON 문자열로 반환한다.
    pub fn inspect(&self) -> Result<String> {
        self.config_repo.inspect_pretty_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRepo(LoopConfig);

    impl ConfigRepository for FixedRepo {
        fn load(&self) -> Result<LoopConfig> {
            Ok(self.0.clone())
        }

        fn inspect_pretty_json(&self) -> Result<String> {
            Ok(serde_json::to_string_pretty(&self.0)?)
        }
    }

    #[test]
    fn test_overrides_win_over_file_config() {
        let repo = FixedRepo(LoopConfig {
            prompt: Some("file> ".to_string()),
            farewell: Some("later".to_string()),
            ..LoopConfig::default()
        });
        let usecase = LoopConfigUseCase { config_repo: &repo };

        let resolved = usecase
            .resolve(LoopConfig {
                prompt: Some("cli> ".to_string()),
                ..LoopConfig::default()
            })
            .unwrap();
        assert_eq!(resolved.prompt(), "cli> ");
        assert_eq!(resolved.farewell(), "later");
        assert!(usecase.inspect().unwrap().contains("\"file> \""));
    }
}
