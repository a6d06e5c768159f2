use tracing::debug;

use crate::units::{convert_yeast, YeastKind};

/// 이스트 종류 문자열 해석 시 발생 가능한 오류.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// 알 수 없는 이스트 종류 문자열
    #[error("알 수 없는 이스트 종류: {0}")]
    UnknownKind(String),
}

/// 문자열로 전달된 종류명을 enum으로 변환한다.
///
/// `Active Dry`, `active-dry`, `ad`, `instant`, `i`, `fresh`, `f` 등을 사용할 수 있다.
pub fn parse_kind(s: &str) -> Result<YeastKind, ConversionError> {
    YeastKind::parse(s).ok_or_else(|| ConversionError::UnknownKind(s.trim().to_string()))
}

/// 문자열로 전달된 종류명을 해석한 뒤 양을 환산한다.
pub fn convert(value: f64, from_kind_str: &str, to_kind_str: &str) -> Result<f64, ConversionError> {
    let from = parse_kind(from_kind_str)?;
    let to = parse_kind(to_kind_str)?;
    let result = convert_yeast(value, from, to);
    debug!(value, %from, %to, result, "yeast conversion");
    Ok(result)
}
