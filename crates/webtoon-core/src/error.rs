//! 셸 핵심 에러 타입.
//!
//! 앱 crate는 최상위에서 `anyhow`로 감싼다.

use std::path::PathBuf;
use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 프로필 디렉토리 생성 실패 (시작 시 치명적)
    #[error("저장 디렉토리 생성 실패: {}: {source}", .path.display())]
    StorageDir {
        /// 생성하려던 경로
        path: PathBuf,
        /// 원인
        #[source]
        source: std::io::Error,
    },

    /// 지원하지 않는 언어 코드
    #[error("지원하지 않는 언어 코드: {0:?}")]
    InvalidLanguage(String),

    /// URL 파싱 실패
    #[error("잘못된 URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// 브라우저 엔진 명령 실패
    #[error("브라우저 엔진 에러: {0}")]
    Engine(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),
}
