//! # webtoon-app
//!
//! Webtoons 데스크톱 셸 바이너리 진입점.
//! CLI 파싱, 로깅 초기화, 설정 로드, 프로필 디렉토리 준비 후 Tauri 셸 실행.

// 릴리스 빌드에서 Windows 콘솔 창 숨김
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod engine;
mod picker;
mod shell;
mod toolbar;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use webtoon_core::config::AppConfig;
use webtoon_core::storage::StorageLocation;

/// Webtoons 데스크톱 셸
///
/// webtoons.com을 모바일/데스크톱 레이아웃으로 보여주는 단일 창 브라우저
#[derive(Parser, Debug)]
#[command(name = "webtoon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 (JSON, 없으면 기본값)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// 프로필 디렉토리 지정 (기본: 플랫폼 데이터 디렉토리/webtoon_profile)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info")]
    log_level: String,
}

/// CLI 인자로 설정 오버라이드
fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(dir) = &args.data_dir {
        config.storage.data_dir = Some(dir.clone());
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_filter = format!(
        "webtoon={},webtoon_core={}",
        args.log_level, args.log_level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter)),
        )
        .init();

    info!("Webtoons 데스크톱 셸 시작");

    let mut config = AppConfig::load(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    // 프로필 디렉토리 준비 실패는 치명적 (엔진 캐시/저장 경로 필요)
    let storage = StorageLocation::resolve(config.storage.data_dir.as_deref())?;
    let storage_dir = storage
        .ensure()
        .context("프로필 디렉토리를 준비할 수 없음")?;
    info!("데이터 저장 경로: {}", storage_dir.display());

    shell::run(config, storage)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn defaults_without_flags() {
        let args = Args::try_parse_from(["webtoon"]).unwrap();
        assert_eq!(args.log_level, "info");
        assert!(args.config.is_none());
        assert!(args.data_dir.is_none());
    }

    #[test]
    fn data_dir_flag_overrides_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let args = Args::try_parse_from([
            OsString::from("webtoon"),
            OsString::from("--data-dir"),
            temp_dir.path().as_os_str().to_os_string(),
        ])
        .unwrap();

        let mut config = AppConfig::default_config();
        apply_overrides(&mut config, &args);
        assert_eq!(config.storage.data_dir.as_deref(), Some(temp_dir.path()));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["webtoon", "--desktop"]).is_err());
    }
}
