//! 포트 인터페이스 (trait).
//!
//! 세션은 이 trait들을 통해서만 외부 협력자(웹뷰, 대화상자)를 다룬다.
//! 구현: `webtoon-app` crate (Tauri 웹뷰, 언어 선택 창).
//!
//! 모든 호출은 UI 스레드에서 일어나므로 동기 trait이다.

pub mod browser;
pub mod prompt;
