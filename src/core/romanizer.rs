//! 한글 -> 로마자 통합 변환기

use crate::core::decompose::split_hangul_to_jamos;
use crate::core::format::format_roman;
use crate::core::roman::apply_roman_mapping;
use crate::core::rules::apply_pronunciation_rules;
use crate::options::RomanizeOptions;

/// 한글 문자열을 로마자 문자열로 변환
///
/// 분해 -> (발음 규칙) -> 로마자 매핑 -> 대소문자 정리 순서로 진행합니다.
/// 한글이 아닌 문자는 변환 없이 통과하지만 대소문자 옵션의 영향은 받습니다.
///
/// # Examples
///
/// ```
/// use koroman::{romanize, RomanizeOptions};
///
/// let options = RomanizeOptions::default();
/// assert_eq!(romanize("한글", &options), "hangeul");
/// assert_eq!(romanize("선릉역", &options), "seolleungyeok");
/// ```
pub fn romanize(input: &str, options: &RomanizeOptions) -> String {
    let split = split_hangul_to_jamos(input);

    let jamo_text = if options.use_pronunciation_rules {
        apply_pronunciation_rules(&split.jamo_string)
    } else {
        split.jamo_string
    };
    log::trace!("자모 문자열: {}", jamo_text);

    let roman = apply_roman_mapping(&jamo_text);
    format_roman(&roman, options.casing_option)
}
