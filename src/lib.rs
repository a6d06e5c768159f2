//! 이스트 환산 로직을 라이브러리로 분리하여 CLI 와 GUI 가 같은 계산을 쓰게 한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod converter;
pub mod format;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod ui_cli;
pub mod units;

pub use converter::Converter;
pub use units::YeastKind;
