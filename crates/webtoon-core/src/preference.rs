//! 언어 설정 저장소.
//!
//! `<프로필 디렉토리>/config.txt` 파일 하나에 언어 코드만 기록한다.
//! 헤더, 버전, 이스케이프 없음.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::CoreError;
use crate::models::language::Language;

/// 설정 파일 이름
pub const PREFERENCE_FILE_NAME: &str = "config.txt";

/// 단일 값 언어 설정 저장소
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// 프로필 디렉토리 기준 저장소 생성
    pub fn new(storage_dir: &Path) -> Self {
        Self {
            path: storage_dir.join(PREFERENCE_FILE_NAME),
        }
    }

    /// 설정 파일 경로 반환
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 저장된 언어 로드
    ///
    /// 실패하지 않는다. 파일이 없거나 읽을 수 없거나 알 수 없는 코드이면
    /// 기본 언어(`en`)를 반환한다.
    pub fn load(&self) -> Language {
        match fs::read_to_string(&self.path) {
            Ok(content) => content.trim().parse().unwrap_or_else(|e| {
                warn!("언어 설정 무시, 기본값 사용: {e}");
                Language::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("언어 설정 파일 없음: {}", self.path.display());
                Language::default()
            }
            Err(e) => {
                warn!(
                    "언어 설정 파일 읽기 실패, 기본값 사용: {}: {e}",
                    self.path.display()
                );
                Language::default()
            }
        }
    }

    /// 언어 저장 (기존 내용을 통째로 덮어씀)
    pub fn save(&self, language: Language) -> Result<(), CoreError> {
        fs::write(&self.path, language.code())?;
        debug!("언어 설정 저장 완료: {} -> {}", language, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_dir_loads_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(temp_dir.path());
        assert_eq!(store.load(), Language::En);
    }

    #[test]
    fn nonexistent_dir_loads_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(&temp_dir.path().join("missing"));
        assert_eq!(store.load(), Language::En);
    }

    #[test]
    fn save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(temp_dir.path());

        store.save(Language::Fr).unwrap();
        assert_eq!(store.load(), Language::Fr);
    }

    #[test]
    fn repeated_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(temp_dir.path());

        store.save(Language::ZhHant).unwrap();
        store.save(Language::Es).unwrap();
        store.save(Language::Es).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "es");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(temp_dir.path());
        fs::write(store.path(), "  th\r\n").unwrap();

        assert_eq!(store.load(), Language::Th);
    }

    #[test]
    fn unknown_code_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = PreferenceStore::new(temp_dir.path());
        fs::write(store.path(), "klingon").unwrap();

        assert_eq!(store.load(), Language::En);
    }

    #[test]
    fn unreadable_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        // 파일 자리에 디렉토리 → 읽기 실패
        fs::create_dir(temp_dir.path().join(PREFERENCE_FILE_NAME)).unwrap();
        let store = PreferenceStore::new(temp_dir.path());

        assert_eq!(store.load(), Language::En);
        assert!(store.save(Language::De).is_err());
    }
}
