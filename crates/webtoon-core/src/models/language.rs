//! 언어 설정 모델.
//!
//! webtoons.com URL의 로케일 세그먼트로 쓰이는 고정된 언어 코드 집합.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 지원 언어
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    /// 영어 (기본값)
    #[default]
    En,
    /// 스페인어
    Es,
    /// 프랑스어
    Fr,
    /// 독일어
    De,
    /// 중국어 번체
    ZhHant,
    /// 태국어
    Th,
    /// 인도네시아어
    Id,
}

impl Language {
    /// 선택 대화상자에 표시되는 순서
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::ZhHant,
        Language::Th,
        Language::Id,
    ];

    /// URL 세그먼트 및 설정 파일에 기록되는 코드
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::ZhHant => "zh-hant",
            Language::Th => "th",
            Language::Id => "id",
        }
    }

    /// 언어 이름 (해당 언어로)
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::ZhHant => "中文 (繁體)",
            Language::Th => "ภาษาไทย",
            Language::Id => "Bahasa Indonesia",
        }
    }

    /// [`Language::ALL`] 안에서의 위치
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|l| l == self)
            .unwrap_or_default()
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| CoreError::InvalidLanguage(code.to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
