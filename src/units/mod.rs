//! 단위 정의 및 변환 모듈 모음. 질량은 항상 g이다.

pub mod yeast;

pub use yeast::{convert_yeast, multiplier, YeastKind};

/// 입력/출력 양쪽에 붙는 단위 표기.
pub const GRAM_SUFFIX: &str = "g";
