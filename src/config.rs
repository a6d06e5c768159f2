use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::units::YeastKind;

/// 설정 파일 기본 경로.
pub const DEFAULT_CONFIG_PATH: &str = "yeast.toml";

/// 애플리케이션 설정을 표현한다. 프로그램이 이 파일을 쓰지는 않는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 시작 시 원본 종류
    pub default_from: YeastKind,
    /// 시작 시 대상 종류
    pub default_to: YeastKind,
    /// UI 언어 코드(auto/en/ko). auto면 시스템 로케일을 따른다.
    pub language: String,
    /// 추가 언어팩 디렉터리
    pub locales_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_from: YeastKind::ActiveDry,
            default_to: YeastKind::Fresh,
            language: "auto".to_string(),
            locales_dir: None,
        }
    }
}

/// 설정 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 반환한다.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    if path.exists() {
        let cfg = load_from(path)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    } else {
        debug!(path = %path.display(), "no configuration file, using defaults");
        Ok(Config::default())
    }
}

/// 지정한 파일에서 설정을 읽는다.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// TOML 문자열을 설정으로 해석한다. 빠진 항목은 기본값으로 채운다.
pub fn parse(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}
