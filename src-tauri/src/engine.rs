//! Tauri 웹뷰 기반 브라우저 엔진 어댑터.
//!
//! wry 웹뷰는 생성 시점에 User-Agent와 데이터 디렉토리가 고정된다.
//! 그래서 웹뷰가 이미 있을 때 이 값들이 바뀌면 다음 이동에서 같은 위치/크기로
//! 창을 새로 만들고 이전 창을 닫는다.

use std::path::{Path, PathBuf};

use tauri::menu::Menu;
use tauri::{AppHandle, WebviewUrl, WebviewWindow, WebviewWindowBuilder, Wry};
use tracing::{debug, info, warn};
use url::Url;
use webtoon_core::config::WindowConfig;
use webtoon_core::error::CoreError;
use webtoon_core::ports::browser::BrowserEngine;

/// 메인 창 라벨 접두사 (재생성마다 번호가 붙음)
const MAIN_LABEL_PREFIX: &str = "main";

fn engine_err(e: tauri::Error) -> CoreError {
    CoreError::Engine(e.to_string())
}

/// 다음 이동에서 할 일
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPlan {
    /// 첫 창 생성
    Create,
    /// 설정이 바뀐 창을 새로 만들고 이전 창을 닫음
    Rebuild,
    /// 기존 웹뷰에서 그대로 이동
    Navigate,
}

/// 웹뷰 생성 설정과 재생성 필요 여부
#[derive(Debug, Default)]
struct WebviewSettings {
    data_dir: Option<PathBuf>,
    user_agent: Option<String>,
    /// 현재 웹뷰가 설정과 어긋나 재생성이 필요함
    stale: bool,
    generation: u32,
}

impl WebviewSettings {
    fn set_data_dir(&mut self, dir: &Path, has_webview: bool) {
        if self.data_dir.as_deref() != Some(dir) {
            self.data_dir = Some(dir.to_path_buf());
            self.stale |= has_webview;
        }
    }

    fn set_user_agent(&mut self, user_agent: &str, has_webview: bool) {
        if self.user_agent.as_deref() != Some(user_agent) {
            self.user_agent = Some(user_agent.to_string());
            self.stale |= has_webview;
        }
    }

    fn plan(&self, has_webview: bool) -> NavPlan {
        match (has_webview, self.stale) {
            (false, _) => NavPlan::Create,
            (true, true) => NavPlan::Rebuild,
            (true, false) => NavPlan::Navigate,
        }
    }

    fn next_label(&mut self) -> String {
        self.generation += 1;
        format!("{MAIN_LABEL_PREFIX}-{}", self.generation)
    }

    /// 새 창 생성 결과 반영
    ///
    /// 성공하면 새 창을 슬롯에 넣고 닫아야 할 이전 창을 돌려준다.
    /// 실패하면 이전 창을 되돌려 놓고 `stale`은 유지한다.
    fn install<W>(
        &mut self,
        slot: &mut Option<W>,
        old: Option<W>,
        built: Result<W, CoreError>,
    ) -> Result<Option<W>, CoreError> {
        match built {
            Ok(webview) => {
                *slot = Some(webview);
                self.stale = false;
                Ok(old)
            }
            Err(e) => {
                *slot = old;
                Err(e)
            }
        }
    }
}

/// Tauri 웹뷰 엔진
pub struct TauriBrowserEngine {
    app: AppHandle,
    window: WindowConfig,
    menu: Option<Menu<Wry>>,
    settings: WebviewSettings,
    webview: Option<WebviewWindow>,
}

impl TauriBrowserEngine {
    pub fn new(app: AppHandle, window: WindowConfig) -> Self {
        Self {
            app,
            window,
            menu: None,
            settings: WebviewSettings::default(),
            webview: None,
        }
    }

    /// 메인 창에 붙일 툴바 메뉴
    pub fn with_menu(mut self, menu: Menu<Wry>) -> Self {
        self.menu = Some(menu);
        self
    }

    /// 현재 메인 창
    pub fn window(&self) -> Option<&WebviewWindow> {
        self.webview.as_ref()
    }

    fn require_webview(&self) -> Result<&WebviewWindow, CoreError> {
        self.webview
            .as_ref()
            .ok_or_else(|| CoreError::Engine("웹뷰가 아직 생성되지 않음".to_string()))
    }

    fn build_window(&mut self, url: &Url) -> Result<WebviewWindow, CoreError> {
        let label = self.settings.next_label();

        let mut builder =
            WebviewWindowBuilder::new(&self.app, &label, WebviewUrl::External(url.clone()))
                .title(&self.window.title)
                .position(self.window.x, self.window.y)
                .inner_size(self.window.width, self.window.height)
                .focused(true);
        if let Some(user_agent) = &self.settings.user_agent {
            builder = builder.user_agent(user_agent);
        }
        if let Some(dir) = &self.settings.data_dir {
            builder = builder.data_directory(dir.clone());
        }
        if let Some(menu) = &self.menu {
            builder = builder.menu(menu.clone());
        }

        let webview = builder.build().map_err(engine_err)?;
        debug!("웹뷰 창 생성: {label}");
        Ok(webview)
    }

    /// 재생성 전에 현재 창의 위치/크기를 논리 픽셀로 기억한다
    fn remember_geometry(&mut self, webview: &WebviewWindow) {
        let scale = match webview.scale_factor() {
            Ok(scale) => scale,
            Err(e) => {
                warn!("배율 조회 실패, 이전 창 크기 유지: {e}");
                return;
            }
        };
        if let Ok(pos) = webview.outer_position() {
            let pos = pos.to_logical::<f64>(scale);
            self.window.x = pos.x;
            self.window.y = pos.y;
        }
        if let Ok(size) = webview.inner_size() {
            let size = size.to_logical::<f64>(scale);
            self.window.width = size.width;
            self.window.height = size.height;
        }
    }

    fn create(&mut self, url: &Url) -> Result<(), CoreError> {
        let built = self.build_window(url);
        self.settings.install(&mut self.webview, None, built)?;
        Ok(())
    }

    fn rebuild(&mut self, url: &Url) -> Result<(), CoreError> {
        let old = self.webview.take();
        if let Some(old) = &old {
            self.remember_geometry(old);
        }

        // 새 창을 먼저 띄워야 마지막 창이 닫혀 앱이 종료되는 일이 없다
        let built = self.build_window(url);
        let old = self.settings.install(&mut self.webview, old, built)?;

        if let Some(old) = old {
            if let Err(e) = old.destroy() {
                warn!("이전 웹뷰 창 종료 실패: {e}");
            }
        }
        Ok(())
    }

    fn eval(&self, script: &str) -> Result<(), CoreError> {
        self.require_webview()?.eval(script).map_err(engine_err)
    }
}

impl BrowserEngine for TauriBrowserEngine {
    fn configure_storage(&mut self, storage_dir: &Path) -> Result<(), CoreError> {
        let has_webview = self.webview.is_some();
        self.settings.set_data_dir(storage_dir, has_webview);
        Ok(())
    }

    fn set_user_agent(&mut self, user_agent: &str) -> Result<(), CoreError> {
        let has_webview = self.webview.is_some();
        self.settings.set_user_agent(user_agent, has_webview);
        Ok(())
    }

    fn navigate(&mut self, url: &Url) -> Result<(), CoreError> {
        match self.settings.plan(self.webview.is_some()) {
            NavPlan::Create => self.create(url),
            NavPlan::Rebuild => {
                info!("웹뷰 설정 변경, 창 재생성: {url}");
                self.rebuild(url)
            }
            NavPlan::Navigate => self
                .require_webview()?
                .navigate(url.clone())
                .map_err(engine_err),
        }
    }

    fn back(&mut self) -> Result<(), CoreError> {
        self.eval("window.history.back()")
    }

    fn forward(&mut self) -> Result<(), CoreError> {
        self.eval("window.history.forward()")
    }

    fn reload(&mut self) -> Result<(), CoreError> {
        self.eval("window.location.reload()")
    }

    fn current_url(&self) -> Option<Url> {
        let webview = self.webview.as_ref()?;
        match webview.url() {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("현재 URL 조회 실패: {e}");
                None
            }
        }
    }
}
