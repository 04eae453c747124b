//! User-Agent 모드.
//!
//! 세션 동안 메모리에만 유지되며 매 실행마다 모바일로 시작한다.

/// 모바일 User-Agent (사이트 호환성을 위해 정확히 일치해야 함)
pub const MOBILE_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; Mobile) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/87.0.4280.101 Mobile Safari/537.36";

/// 데스크톱 User-Agent
pub const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// 원격 사이트가 제공할 레이아웃을 결정하는 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserAgentMode {
    /// 모바일 레이아웃 (기본값)
    #[default]
    Mobile,
    /// 데스크톱 레이아웃
    Desktop,
}

impl UserAgentMode {
    /// 반대 모드
    pub fn toggled(self) -> Self {
        match self {
            UserAgentMode::Mobile => UserAgentMode::Desktop,
            UserAgentMode::Desktop => UserAgentMode::Mobile,
        }
    }

    /// 엔진에 설정할 User-Agent 문자열
    pub fn user_agent(self) -> &'static str {
        match self {
            UserAgentMode::Mobile => MOBILE_USER_AGENT,
            UserAgentMode::Desktop => DESKTOP_USER_AGENT,
        }
    }

    pub fn is_desktop(self) -> bool {
        self == UserAgentMode::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_user_agent() {
        let start = UserAgentMode::default();
        let twice = start.toggled().toggled();
        assert_eq!(twice, start);
        assert_eq!(twice.user_agent(), MOBILE_USER_AGENT);
    }

    #[test]
    fn modes_map_to_distinct_strings() {
        assert_eq!(UserAgentMode::Desktop.user_agent(), DESKTOP_USER_AGENT);
        assert!(MOBILE_USER_AGENT.contains("Mobile Safari"));
        assert!(!DESKTOP_USER_AGENT.contains("Mobile"));
    }
}
