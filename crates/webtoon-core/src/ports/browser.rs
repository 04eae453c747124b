//! 브라우저 엔진 포트.
//!
//! 렌더링, 네트워크, 히스토리는 엔진 내부 몫이다. 셸은 설정값과
//! 이동 명령만 전달한다.

use std::path::Path;

use url::Url;

use crate::error::CoreError;

/// 내장 웹뷰 인터페이스
pub trait BrowserEngine {
    /// 캐시/영구 저장소/쿠키 디렉토리 지정 (영구 쿠키 정책 포함)
    fn configure_storage(&mut self, storage_dir: &Path) -> Result<(), CoreError>;

    /// HTTP User-Agent 설정. 다음 이동부터 적용된다.
    fn set_user_agent(&mut self, user_agent: &str) -> Result<(), CoreError>;

    /// URL로 이동
    fn navigate(&mut self, url: &Url) -> Result<(), CoreError>;

    /// 뒤로
    fn back(&mut self) -> Result<(), CoreError>;

    /// 앞으로
    fn forward(&mut self) -> Result<(), CoreError>;

    /// 새로고침
    fn reload(&mut self) -> Result<(), CoreError>;

    /// 현재 URL (아직 페이지가 없으면 `None`)
    fn current_url(&self) -> Option<Url>;
}
