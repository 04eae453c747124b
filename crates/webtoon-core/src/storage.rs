//! 프로필 디렉토리 경로.
//!
//! 브라우저 엔진의 캐시/쿠키 디렉토리이자 언어 설정 파일의 위치.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::info;

use crate::error::CoreError;

/// 프로필 디렉토리 이름
pub const STORAGE_DIR_NAME: &str = "webtoon_profile";

/// 프로필 디렉토리 위치
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    path: PathBuf,
}

impl StorageLocation {
    /// 지정된 디렉토리를 그대로 사용
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 프로필 디렉토리 결정 (지정 경로 또는 플랫폼별 기본 경로)
    ///
    /// # 플랫폼별 기본 경로:
    /// - macOS: `~/Library/Application Support/com.webtoons.desktop-mobile/webtoon_profile`
    /// - Windows: `%APPDATA%\webtoons\desktop-mobile\data\webtoon_profile`
    /// - Linux: `~/.local/share/desktop-mobile/webtoon_profile`
    ///
    /// 플랫폼 데이터 디렉토리를 찾을 수 없으면 에러 (시작 시 치명적).
    pub fn resolve(data_dir: Option<&Path>) -> Result<Self, CoreError> {
        if let Some(dir) = data_dir {
            return Ok(Self::new(dir));
        }
        Self::from_project_dirs(ProjectDirs::from("com", "webtoons", "desktop-mobile"))
    }

    fn from_project_dirs(dirs: Option<ProjectDirs>) -> Result<Self, CoreError> {
        let dirs = dirs.ok_or_else(|| {
            CoreError::Config(
                "플랫폼 데이터 디렉토리를 찾을 수 없음 (--data-dir로 지정 필요)".to_string(),
            )
        })?;
        Ok(Self::new(dirs.data_dir().join(STORAGE_DIR_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 디렉토리가 없으면 생성
    ///
    /// 실패하면 엔진에 캐시/저장 경로를 줄 수 없으므로 치명적이다.
    pub fn ensure(&self) -> Result<&Path, CoreError> {
        if !self.path.exists() {
            fs::create_dir_all(&self.path).map_err(|source| CoreError::StorageDir {
                path: self.path.clone(),
                source,
            })?;
            info!("프로필 디렉토리 생성: {}", self.path.display());
        }
        if !self.path.is_dir() {
            return Err(CoreError::StorageDir {
                path: self.path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "디렉토리가 아닌 파일이 존재함",
                ),
            });
        }
        Ok(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let loc = StorageLocation::resolve(Some(Path::new("/tmp/custom"))).unwrap();
        assert_eq!(loc.path(), Path::new("/tmp/custom"));
    }

    #[test]
    fn default_dir_ends_with_profile_name() {
        // HOME이 없는 환경에서는 에러가 정상
        if let Ok(loc) = StorageLocation::resolve(None) {
            assert!(loc.path().ends_with(STORAGE_DIR_NAME));
        }
    }

    #[test]
    fn missing_platform_dir_is_an_error() {
        let err = StorageLocation::from_project_dirs(None).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(err.to_string().contains("--data-dir"));
    }

    #[test]
    fn ensure_is_idempotent_on_existing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let loc = StorageLocation::new(temp_dir.path());
        assert_eq!(loc.ensure().unwrap(), temp_dir.path());
        assert_eq!(loc.ensure().unwrap(), temp_dir.path());
    }

    #[test]
    fn ensure_creates_nested_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let loc = StorageLocation::new(temp_dir.path().join("a").join(STORAGE_DIR_NAME));

        let path = loc.ensure().unwrap();
        assert!(path.is_dir());
        // 두 번째 호출도 성공
        assert!(loc.ensure().is_ok());
    }

    #[test]
    fn ensure_fails_when_path_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join(STORAGE_DIR_NAME);
        fs::write(&file, "x").unwrap();

        let err = StorageLocation::new(&file).ensure().unwrap_err();
        assert!(matches!(err, CoreError::StorageDir { .. }));
    }
}
