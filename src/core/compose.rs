//! 결합용 자모 -> 완성형 한글 조합

use crate::core::decompose::{JamoToken, JamoTriple};
use crate::core::jamo::{Choseong, Jongseong, Jungseong};
use crate::core::unicode::compose_syllable;

/// 조합할 수 없는 삼중쌍 자리에 넣는 대체 문자
const INVALID_SYLLABLE_PLACEHOLDER: char = '?';

/// 삼중쌍 하나를 완성형 음절로 조합 (자모 표에 없는 문자면 None)
fn compose_triple(triple: &JamoTriple) -> Option<char> {
    let cho = Choseong::from_char(triple.choseong)?;
    let jung = Jungseong::from_char(triple.jungseong)?;
    let jong_index = match triple.jongseong {
        None => 0,
        Some(c) => Jongseong::from_char(c)?.index() + 1,
    };
    compose_syllable(cho.index(), jung.index(), jong_index)
}

/// 토큰 나열을 다시 완성형 문자열로 조합
///
/// `Syllable` 토큰은 완성형 음절로 조합하고, 자모 표에 없는 문자가
/// 끼어 조합할 수 없는 삼중쌍은 `?`로 대신합니다. `Other` 토큰은
/// 그대로 이어 붙입니다.
///
/// # Examples
///
/// ```
/// use koroman::{compose_jamos, split_hangul_to_jamos};
///
/// let split = split_hangul_to_jamos("한글 2024");
/// assert_eq!(compose_jamos(&split.tokens), "한글 2024");
/// ```
pub fn compose_jamos(tokens: &[JamoToken]) -> String {
    let mut result = String::new();
    for token in tokens {
        match token {
            JamoToken::Syllable(triple) => match compose_triple(triple) {
                Some(c) => result.push(c),
                None => {
                    log::debug!("조합할 수 없는 자모 삼중쌍: {:?}", triple);
                    result.push(INVALID_SYLLABLE_PLACEHOLDER);
                }
            },
            JamoToken::Other(c) => result.push(*c),
        }
    }
    result
}
