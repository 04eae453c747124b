//! 언어 선택 프롬프트 포트.

use crate::models::language::Language;

/// 선택 대화상자의 결과. 취소는 에러가 아니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// 사용자가 확인한 언어
    Selected(Language),
    /// 사용자가 취소하거나 창을 닫음
    Cancelled,
}

/// 대화상자에 넘길 선택지
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageChoice {
    pub options: &'static [Language],
    pub default_index: usize,
}

/// 모달 언어 선택 인터페이스
///
/// 결과를 그 자리에서 돌려주는 동기 프롬프트용이다 (테스트, 블로킹 대화상자).
/// Tauri 선택 창처럼 결과가 나중에 명령으로 돌아오는 경우에는 이 trait 대신
/// `ShellSession::language_choice`로 선택지를 넘기고
/// `ShellSession::apply_language_choice`로 결과를 적용한다.
pub trait LanguagePrompt {
    /// 고정 목록에서 하나를 고르게 한다
    fn select(&mut self, options: &[Language], default_index: usize) -> PromptOutcome;
}
