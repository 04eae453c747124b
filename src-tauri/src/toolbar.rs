//! 툴바.
//!
//! 네이티브 메뉴를 툴바로 사용한다: 뒤로, 새로고침, 앞으로,
//! 데스크톱 모드 토글, 언어 선택.

use tauri::menu::{
    CheckMenuItem, CheckMenuItemBuilder, Menu, MenuBuilder, MenuItemBuilder, SubmenuBuilder,
};
use tauri::{AppHandle, Wry};
use tracing::warn;
use webtoon_core::models::user_agent::UserAgentMode;

/// 툴바 동작
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Back,
    Reload,
    Forward,
    ToggleUserAgent,
    SelectLanguage,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 5] = [
        ToolbarAction::Back,
        ToolbarAction::Reload,
        ToolbarAction::Forward,
        ToolbarAction::ToggleUserAgent,
        ToolbarAction::SelectLanguage,
    ];

    /// 메뉴 항목 ID
    pub fn id(self) -> &'static str {
        match self {
            ToolbarAction::Back => "toolbar.back",
            ToolbarAction::Reload => "toolbar.reload",
            ToolbarAction::Forward => "toolbar.forward",
            ToolbarAction::ToggleUserAgent => "toolbar.user-agent",
            ToolbarAction::SelectLanguage => "toolbar.language",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    fn label(self) -> &'static str {
        match self {
            ToolbarAction::Back => "Back",
            ToolbarAction::Reload => "Reload",
            ToolbarAction::Forward => "Forward",
            ToolbarAction::ToggleUserAgent => "Desktop Mode",
            ToolbarAction::SelectLanguage => "Select Language",
        }
    }

    fn accelerator(self) -> &'static str {
        match self {
            ToolbarAction::Back => "Alt+Left",
            ToolbarAction::Reload => "F5",
            ToolbarAction::Forward => "Alt+Right",
            ToolbarAction::ToggleUserAgent => "CmdOrCtrl+U",
            ToolbarAction::SelectLanguage => "CmdOrCtrl+L",
        }
    }
}

/// 메인 창에 붙는 메뉴와 토글 항목 핸들
pub struct Toolbar {
    menu: Menu<Wry>,
    desktop_mode: CheckMenuItem<Wry>,
}

impl Toolbar {
    pub fn build(app: &AppHandle) -> tauri::Result<Self> {
        let item = |action: ToolbarAction| {
            MenuItemBuilder::with_id(action.id(), action.label())
                .accelerator(action.accelerator())
                .build(app)
        };
        let back = item(ToolbarAction::Back)?;
        let reload = item(ToolbarAction::Reload)?;
        let forward = item(ToolbarAction::Forward)?;
        let select_language = item(ToolbarAction::SelectLanguage)?;

        let toggle = ToolbarAction::ToggleUserAgent;
        let desktop_mode = CheckMenuItemBuilder::with_id(toggle.id(), toggle.label())
            .accelerator(toggle.accelerator())
            .checked(UserAgentMode::default().is_desktop())
            .build(app)?;

        let browse = SubmenuBuilder::new(app, "Browse")
            .item(&back)
            .item(&reload)
            .item(&forward)
            .separator()
            .item(&desktop_mode)
            .build()?;
        let language = SubmenuBuilder::new(app, "Language")
            .item(&select_language)
            .build()?;
        let menu = MenuBuilder::new(app).item(&browse).item(&language).build()?;

        Ok(Self { menu, desktop_mode })
    }

    pub fn menu(&self) -> &Menu<Wry> {
        &self.menu
    }

    /// 체크 표시를 현재 모드에 맞춘다 (클릭 시 자동 토글과 어긋나지 않도록)
    pub fn sync_user_agent(&self, mode: UserAgentMode) {
        if let Err(e) = self.desktop_mode.set_checked(mode.is_desktop()) {
            warn!("데스크톱 모드 체크 상태 갱신 실패: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for action in ToolbarAction::ALL {
            assert_eq!(ToolbarAction::from_id(action.id()), Some(action));
        }
    }

    #[test]
    fn unknown_id_is_ignored() {
        assert_eq!(ToolbarAction::from_id("quit"), None);
        assert_eq!(ToolbarAction::from_id(""), None);
    }

    #[test]
    fn accelerators_are_unique() {
        let mut keys: Vec<&str> = ToolbarAction::ALL.iter().map(|a| a.accelerator()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ToolbarAction::ALL.len());
    }
}
