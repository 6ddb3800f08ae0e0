//! 한글 로마자 변환 라이브러리
//!
//! 완성형 한글을 국립국어원 로마자 표기법 기준으로 변환합니다.
//! 비음화, 유음화, 연음, 격음화, 구개음화 발음 규칙의 적용 여부와
//! 출력 대소문자 형식을 옵션으로 선택합니다.
//!
//! ```
//! use koroman::{romanize, CasingOption, RomanizeOptions};
//!
//! let options = RomanizeOptions::default();
//! assert_eq!(romanize("안녕하세요", &options), "annyeonghaseyo");
//!
//! let options = RomanizeOptions {
//!     use_pronunciation_rules: true,
//!     casing_option: CasingOption::CapitalizeWord,
//! };
//! assert_eq!(romanize("한글 로마자", &options), "Hangeul Romaja");
//! ```

pub mod core;
pub mod options;

pub use crate::core::{
    apply_pronunciation_rules, apply_roman_mapping, compose_jamos, format_roman, romanize,
    split_hangul_to_jamos, Choseong, Jamo, JamoSplit, JamoToken, JamoTriple, Jongseong,
    Jungseong, JAMO_SEPARATOR,
};
pub use crate::options::{CasingOption, RomanizeOptions};
