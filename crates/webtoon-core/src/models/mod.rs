//! 도메인 모델.

pub mod language;
pub mod user_agent;
