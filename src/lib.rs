//! 콘텐츠 카탈로그와 화면 구성 로직을 라이브러리로 분리하여 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod catalog;
pub mod config;
pub mod i18n;
pub mod session;
pub mod ui_cli;
pub mod view;
