//! 셸 세션.
//!
//! 현재 언어, User-Agent 모드, 프로필 디렉토리, 엔진 핸들을 한 객체가 소유한다.
//! 툴바 핸들러는 전역 상태 대신 이 객체를 통해 엔진과 설정 저장소를 다룬다.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use url::Url;

use crate::error::CoreError;
use crate::models::language::Language;
use crate::models::user_agent::UserAgentMode;
use crate::ports::browser::BrowserEngine;
use crate::ports::prompt::{LanguageChoice, LanguagePrompt, PromptOutcome};
use crate::preference::PreferenceStore;
use crate::site::site_url;
use crate::storage::StorageLocation;

/// 애플리케이션 세션
pub struct ShellSession<E> {
    engine: E,
    store: PreferenceStore,
    base_url: Url,
    storage_dir: PathBuf,
    language: Language,
    user_agent: UserAgentMode,
}

impl<E: BrowserEngine> ShellSession<E> {
    /// 세션 초기화
    ///
    /// 1. 프로필 디렉토리 생성 (실패 시 치명적)
    /// 2. 엔진 캐시/저장소 경로 설정
    /// 3. 모바일 User-Agent 설정
    /// 4. 저장된 언어 로드 후 `<base><language>/`로 이동
    pub fn initialize(
        mut engine: E,
        storage: &StorageLocation,
        base_url: Url,
    ) -> Result<Self, CoreError> {
        let storage_dir = storage.ensure()?.to_path_buf();
        engine.configure_storage(&storage_dir)?;

        let user_agent = UserAgentMode::default();
        engine.set_user_agent(user_agent.user_agent())?;

        let store = PreferenceStore::new(&storage_dir);
        let language = store.load();

        let mut session = Self {
            engine,
            store,
            base_url,
            storage_dir,
            language,
            user_agent,
        };
        let url = session.home_url()?;
        info!("초기 URL 로드: {url}");
        session.engine.navigate(&url)?;
        Ok(session)
    }

    /// 현재 언어 기준 시작 URL
    pub fn home_url(&self) -> Result<Url, CoreError> {
        site_url(&self.base_url, self.language)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn user_agent_mode(&self) -> UserAgentMode {
        self.user_agent
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn go_back(&mut self) -> Result<(), CoreError> {
        debug!("뒤로");
        self.engine.back()
    }

    pub fn reload(&mut self) -> Result<(), CoreError> {
        debug!("새로고침");
        self.engine.reload()
    }

    pub fn go_forward(&mut self) -> Result<(), CoreError> {
        debug!("앞으로");
        self.engine.forward()
    }

    /// User-Agent 모드 전환 후 현재 URL로 다시 이동
    ///
    /// 새 헤더는 다음 요청부터 적용되므로 이미 렌더링된 페이지는 그대로다.
    pub fn toggle_user_agent(&mut self) -> Result<UserAgentMode, CoreError> {
        let next = self.user_agent.toggled();
        self.engine.set_user_agent(next.user_agent())?;
        self.user_agent = next;

        let url = match self.engine.current_url() {
            Some(url) => url,
            None => self.home_url()?,
        };
        info!("User-Agent {:?} 전환, URL 다시 로드: {url}", next);
        self.engine.navigate(&url)?;
        Ok(next)
    }

    /// 언어 선택 대화상자에 넘길 선택지 (현재 언어가 기본 선택)
    pub fn language_choice(&self) -> LanguageChoice {
        LanguageChoice {
            options: &Language::ALL,
            default_index: self.language.index(),
        }
    }

    /// 대화상자 결과 적용
    ///
    /// 취소면 아무것도 바꾸지 않는다. 저장 실패는 로그만 남기고
    /// 이번 세션의 이동은 그대로 진행한다.
    pub fn apply_language_choice(&mut self, outcome: PromptOutcome) -> Result<(), CoreError> {
        let language = match outcome {
            PromptOutcome::Selected(language) => language,
            PromptOutcome::Cancelled => {
                debug!("언어 선택 취소");
                return Ok(());
            }
        };

        if let Err(e) = self.store.save(language) {
            warn!("언어 설정 저장 실패 (재시작 후 유지되지 않음): {e}");
        }
        self.language = language;

        let url = self.home_url()?;
        info!("언어 변경, URL 이동: {url}");
        self.engine.navigate(&url)
    }

    /// 동기 프롬프트를 띄우고 결과를 적용
    ///
    /// `language_choice` → `LanguagePrompt::select` → `apply_language_choice`와 같다.
    pub fn change_language<P>(&mut self, prompt: &mut P) -> Result<PromptOutcome, CoreError>
    where
        P: LanguagePrompt + ?Sized,
    {
        let choice = self.language_choice();
        let outcome = prompt.select(choice.options, choice.default_index);
        self.apply_language_choice(outcome)?;
        Ok(outcome)
    }
}
