//! 단위 변환 엔진을 라이브러리로 분리하여 CLI 외의 화면에서도 그대로 쓸 수 있게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod format;
pub mod history;
pub mod i18n;
pub mod quantity;
pub mod ui_cli;
pub mod units;
