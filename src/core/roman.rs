//! 자모 -> 로마자 치환

use crate::core::jamo::Jamo;

/// 자모 문자열을 로마자 문자열로 치환
///
/// 초성/중성/종성은 각자 자리의 표기로 바뀝니다. 초성 ㅇ은 소리가 없어
/// 빈 문자열이 되고, 자모가 아닌 문자는 그대로 남습니다.
pub fn apply_roman_mapping(jamo_text: &str) -> String {
    let mut result = String::with_capacity(jamo_text.len());
    for c in jamo_text.chars() {
        match Jamo::classify(c) {
            Jamo::Choseong(cho) => result.push_str(cho.roman()),
            Jamo::Jungseong(jung) => result.push_str(jung.roman()),
            Jamo::Jongseong(jong) => result.push_str(jong.roman()),
            Jamo::Other(other) => result.push(other),
        }
    }
    result
}
