//! 애플리케이션 설정 구조체.
//!
//! 창 제목/크기, 대상 사이트, 프로필 디렉토리 경로를 정의한다.
//! 선택적으로 JSON 파일에서 로드하며, 없는 필드는 기본값을 쓴다.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::error::CoreError;

/// 기본 대상 사이트
pub const DEFAULT_BASE_URL: &str = "https://www.webtoons.com/";

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 메인 창 설정
    #[serde(default)]
    pub window: WindowConfig,
    /// 대상 사이트 설정
    #[serde(default)]
    pub site: SiteConfig,
    /// 프로필 저장소 설정
    #[serde(default)]
    pub storage: StorageConfig,
}

/// 메인 창 설정 (논리 픽셀)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Webtoons Desktop Mobile".to_string(),
            x: 100.0,
            y: 100.0,
            width: 800.0,
            height: 600.0,
        }
    }
}

/// 대상 사이트 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// 언어 세그먼트가 붙기 전의 기본 URL
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// 기본 URL 파싱. 경로가 `/`로 끝나지 않으면 붙인다
    /// (`Url::join`이 마지막 세그먼트를 대체하지 않도록).
    pub fn base_url(&self) -> Result<Url, CoreError> {
        let mut url = Url::parse(self.base_url.trim())?;
        if url.cannot_be_a_base() {
            return Err(CoreError::Config(format!(
                "기본 URL로 사용할 수 없음: {}",
                self.base_url
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

/// 프로필 저장소 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 프로필 디렉토리 직접 지정 (없으면 플랫폼 기본 경로)
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    /// 기본 설정
    pub fn default_config() -> Self {
        Self::default()
    }

    /// 설정 파일 로드
    ///
    /// 경로가 없거나 파일이 존재하지 않으면 기본 설정을 반환한다.
    /// 파일이 있지만 파싱에 실패하면 에러.
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let Some(path) = path else {
            return Ok(Self::default_config());
        };
        if !path.exists() {
            info!("설정 파일 없음, 기본 설정 사용: {}", path.display());
            return Ok(Self::default_config());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("설정 파일 읽기 실패: {}: {}", path.display(), e))
        })?;
        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            CoreError::Config(format!("설정 파일 파싱 실패: {}: {}", path.display(), e))
        })?;

        // 잘못된 URL은 창을 띄우기 전에 걸러낸다
        config.site.base_url()?;

        debug!("설정 파일 로드 완료: {}", path.display());
        Ok(config)
    }
}
