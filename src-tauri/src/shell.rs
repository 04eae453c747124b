//! 셸 런너.
//!
//! Tauri 런타임을 띄우고 툴바 메뉴 이벤트를 세션 동작으로 연결한다.
//! 모든 핸들러는 메인(UI) 스레드에서 실행된다.

use anyhow::{Context, Result};
use parking_lot::Mutex;
use tauri::menu::MenuEvent;
use tauri::{AppHandle, Manager};
use tracing::{info, warn};
use webtoon_core::config::AppConfig;
use webtoon_core::error::CoreError;
use webtoon_core::ports::prompt::PromptOutcome;
use webtoon_core::session::ShellSession;
use webtoon_core::storage::StorageLocation;

use crate::engine::TauriBrowserEngine;
use crate::picker;
use crate::toolbar::{Toolbar, ToolbarAction};

/// Tauri 관리 상태: 세션 + 툴바 핸들
pub struct ShellState {
    session: Mutex<ShellSession<TauriBrowserEngine>>,
    toolbar: Toolbar,
}

impl ShellState {
    fn new(session: ShellSession<TauriBrowserEngine>, toolbar: Toolbar) -> Self {
        Self {
            session: Mutex::new(session),
            toolbar,
        }
    }

    /// 툴바 동작 실행
    fn dispatch(&self, app: &AppHandle, action: ToolbarAction) -> Result<()> {
        let mut session = self.session.lock();
        match action {
            ToolbarAction::Back => session.go_back()?,
            ToolbarAction::Reload => session.reload()?,
            ToolbarAction::Forward => session.go_forward()?,
            ToolbarAction::ToggleUserAgent => {
                let result = session.toggle_user_agent();
                // 실패해도 체크 표시는 실제 모드를 따른다
                self.toolbar.sync_user_agent(session.user_agent_mode());
                result?;
            }
            ToolbarAction::SelectLanguage => {
                let choice = session.language_choice();
                picker::open(app, session.engine().window(), &choice)?;
            }
        }
        Ok(())
    }

    /// 언어 선택 창의 결과 적용
    pub fn apply_language_choice(&self, outcome: PromptOutcome) -> Result<(), CoreError> {
        self.session.lock().apply_language_choice(outcome)
    }
}

fn handle_menu_event(app: &AppHandle, event: MenuEvent) {
    let Some(action) = ToolbarAction::from_id(event.id().as_ref()) else {
        return;
    };
    let Some(state) = app.try_state::<ShellState>() else {
        warn!("셸 초기화 전 툴바 이벤트 무시: {action:?}");
        return;
    };
    if let Err(e) = state.dispatch(app, action) {
        warn!("툴바 동작 실패 ({action:?}): {e:#}");
    }
}

/// 셸 실행 (이벤트 루프가 끝날 때까지 반환하지 않음)
///
/// 프로필 디렉토리는 호출 전에 준비되어 있어야 한다.
pub fn run(config: AppConfig, storage: StorageLocation) -> Result<()> {
    let base_url = config.site.base_url()?;
    let window = config.window;

    tauri::Builder::default()
        .invoke_handler(tauri::generate_handler![picker::language_selected])
        .on_menu_event(handle_menu_event)
        .setup(move |app| {
            let handle = app.handle().clone();
            let toolbar = Toolbar::build(&handle)?;
            let engine = TauriBrowserEngine::new(handle, window).with_menu(toolbar.menu().clone());

            let session = ShellSession::initialize(engine, &storage, base_url)?;
            info!(
                "셸 준비 완료 (언어: {}, 프로필: {})",
                session.language(),
                session.storage_dir().display()
            );
            app.manage(ShellState::new(session, toolbar));
            Ok(())
        })
        .run(tauri::generate_context!())
        .context("Tauri 애플리케이션 실행 실패")?;

    info!("셸 종료");
    Ok(())
}
