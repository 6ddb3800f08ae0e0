//! 한글 로마자 변환 파이프라인
//!
//! # 개요
//!
//! 변환은 세 단계로 진행됩니다:
//!
//! 1. **자모 분해**: 완성형 음절을 결합용 자모로 분해
//!    (`split_hangul_to_jamos`)
//! 2. **발음 규칙**: 자모 스트림에 비음화, 유음화, 연음, 격음화,
//!    구개음화 규칙을 정해진 순서대로 적용 (`apply_pronunciation_rules`)
//! 3. **로마자 매핑**: 자모를 로마자 표기로 치환하고
//!    (`apply_roman_mapping`) 대소문자를 정리 (`format_roman`)
//!
//! `romanize`가 세 단계를 하나로 묶습니다. 분해의 역방향인
//! `compose_jamos`도 제공합니다.
//!
//! # 사용 예시
//!
//! ```
//! use koroman::{romanize, RomanizeOptions};
//!
//! let options = RomanizeOptions::default();
//! assert_eq!(romanize("문래역", &options), "mullaeyeok");
//! assert_eq!(romanize("악크", &options), "ak-keu");
//! ```

mod compose;
mod decompose;
mod format;
mod jamo;
mod roman;
mod romanizer;
mod rules;
mod unicode;

// 공개 인터페이스
pub use compose::compose_jamos;
pub use decompose::{split_hangul_to_jamos, JamoSplit, JamoToken, JamoTriple, JAMO_SEPARATOR};
pub use format::format_roman;
pub use jamo::{Choseong, Jamo, Jongseong, Jungseong};
pub use roman::apply_roman_mapping;
pub use romanizer::romanize;
pub use rules::apply_pronunciation_rules;
pub use unicode::{compose_syllable, decompose_syllable, is_hangul_syllable};
