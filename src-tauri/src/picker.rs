//! 언어 선택 대화상자.
//!
//! 메인 창에 붙은 작은 창에 번들된 `language.html`을 띄우고,
//! 선택지는 초기화 스크립트로 넘긴다. 결과는 `language_selected` 명령으로 돌아온다.
//! 취소 버튼, Esc, 창 닫기는 모두 아무것도 바꾸지 않는다.

use serde::Serialize;
use tauri::{AppHandle, State, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tracing::{debug, warn};
use webtoon_core::error::CoreError;
use webtoon_core::models::language::Language;
use webtoon_core::ports::prompt::{LanguageChoice, PromptOutcome};

use crate::shell::ShellState;

/// 대화상자 창 라벨 (capabilities/default.json과 일치해야 함)
pub const PICKER_LABEL: &str = "language-picker";

const PICKER_TITLE: &str = "Select Language";

#[derive(Debug, Serialize)]
struct PickerOption {
    code: &'static str,
    name: &'static str,
}

#[derive(Debug, Serialize)]
struct PickerPayload {
    options: Vec<PickerOption>,
    selected: usize,
}

/// 페이지 로드 전에 실행되어 선택지를 전역 변수로 심는 스크립트
pub fn init_script(choice: &LanguageChoice) -> Result<String, CoreError> {
    let payload = PickerPayload {
        options: choice
            .options
            .iter()
            .map(|l| PickerOption {
                code: l.code(),
                name: l.display_name(),
            })
            .collect(),
        selected: choice.default_index.min(choice.options.len().saturating_sub(1)),
    };
    let json = serde_json::to_string(&payload)?;
    Ok(format!("window.__LANGUAGE_PICKER__ = {json};"))
}

/// 페이지가 보낸 코드를 결과로 변환 (`None`은 취소)
pub fn outcome_from_code(code: Option<&str>) -> Result<PromptOutcome, CoreError> {
    match code {
        None => Ok(PromptOutcome::Cancelled),
        Some(code) => Ok(PromptOutcome::Selected(code.parse::<Language>()?)),
    }
}

/// 대화상자 열기. 이미 열려 있으면 앞으로 가져온다.
pub fn open(
    app: &AppHandle,
    parent: Option<&WebviewWindow>,
    choice: &LanguageChoice,
) -> anyhow::Result<()> {
    use tauri::Manager;

    if let Some(existing) = app.get_webview_window(PICKER_LABEL) {
        existing.set_focus()?;
        return Ok(());
    }

    let mut builder =
        WebviewWindowBuilder::new(app, PICKER_LABEL, WebviewUrl::App("language.html".into()))
            .title(PICKER_TITLE)
            .inner_size(320.0, 160.0)
            .resizable(false)
            .minimizable(false)
            .maximizable(false)
            .center()
            .focused(true)
            .initialization_script(&init_script(choice)?);
    if let Some(parent) = parent {
        builder = builder.parent(parent)?;
    }
    builder.build()?;
    debug!("언어 선택 창 열림 (기본: {})", choice.default_index);
    Ok(())
}

/// 언어 선택 창이 보내는 결과
#[tauri::command]
pub fn language_selected(
    window: WebviewWindow,
    shell: State<'_, ShellState>,
    code: Option<String>,
) -> Result<(), String> {
    if window.label() != PICKER_LABEL {
        return Err(format!("허용되지 않은 창: {}", window.label()));
    }

    let result = outcome_from_code(code.as_deref())
        .and_then(|outcome| shell.apply_language_choice(outcome));

    if let Err(e) = window.close() {
        warn!("언어 선택 창 닫기 실패: {e}");
    }
    result.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(default_index: usize) -> LanguageChoice {
        LanguageChoice {
            options: &Language::ALL,
            default_index,
        }
    }

    #[test]
    fn script_embeds_all_options() {
        let script = init_script(&choice(3)).unwrap();
        assert!(script.starts_with("window.__LANGUAGE_PICKER__ = {"));
        assert!(script.ends_with("};"));
        assert!(script.contains(r#""code":"zh-hant""#));
        assert!(script.contains(r#""selected":3"#));
    }

    #[test]
    fn script_payload_is_valid_json() {
        let script = init_script(&choice(0)).unwrap();
        let json = script
            .trim_start_matches("window.__LANGUAGE_PICKER__ = ")
            .trim_end_matches(';');
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(value["options"].as_array().unwrap().len(), 7);
        assert_eq!(value["options"][0]["code"], "en");
    }

    #[test]
    fn out_of_range_default_is_clamped() {
        let script = init_script(&choice(42)).unwrap();
        assert!(script.contains(r#""selected":6"#));
    }

    #[test]
    fn missing_code_means_cancel() {
        assert_eq!(outcome_from_code(None).unwrap(), PromptOutcome::Cancelled);
    }

    #[test]
    fn code_maps_to_language() {
        assert_eq!(
            outcome_from_code(Some("fr")).unwrap(),
            PromptOutcome::Selected(Language::Fr)
        );
        assert!(outcome_from_code(Some("pt")).is_err());
    }

    #[test]
    fn remote_pages_get_no_global_tauri_object() {
        let conf: serde_json::Value =
            serde_json::from_str(include_str!("../tauri.conf.json")).unwrap();
        assert_eq!(conf["app"]["withGlobalTauri"], false);

        // 선택 창은 전역 객체 없이 내부 IPC로만 결과를 보낸다
        let page = include_str!("../../dist/language.html");
        assert!(page.contains("__TAURI_INTERNALS__.invoke(\"language_selected\""));
        assert!(!page.contains("window.__TAURI__."));
    }
}
