//! 대상 URL 계산.

use url::Url;

use crate::error::CoreError;
use crate::models::language::Language;

/// `<base><language>/` 형태의 이동 URL
///
/// `base`는 `/`로 끝나야 한다 ([`crate::config::SiteConfig::base_url`] 참조).
pub fn site_url(base: &Url, language: Language) -> Result<Url, CoreError> {
    Ok(base.join(&format!("{}/", language.code()))?)
}
