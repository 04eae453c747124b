//! # webtoon-core
//!
//! Webtoons 데스크톱 셸의 도메인 모델, 포트(trait) 정의, 세션, 에러 타입.
//! 브라우저 엔진(Tauri 웹뷰)과 무관하게 테스트 가능한 핵심 동작을 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 언어 코드, User-Agent 모드
//! - [`ports`] — 브라우저 엔진 / 언어 선택 프롬프트 인터페이스
//! - [`session`] — 셸 세션 (툴바 액션 → 엔진 명령)
//! - [`preference`] — 언어 설정 파일 저장소
//! - [`storage`] — 프로필 디렉토리 경로
//! - [`site`] — 대상 URL 계산
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`error`] — 핵심 에러 타입 (thiserror)

pub mod config;
pub mod error;
pub mod models;
pub mod ports;
pub mod preference;
pub mod session;
pub mod site;
pub mod storage;

#[cfg(test)]
mod tests {
    use crate::models::language::Language;
    use crate::models::user_agent::UserAgentMode;

    #[test]
    fn session_defaults() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(UserAgentMode::default(), UserAgentMode::Mobile);
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.window.title, "Webtoons Desktop Mobile");
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
        assert_eq!(config.site.base_url, "https://www.webtoons.com/");
        assert!(config.storage.data_dir.is_none());
    }
}
