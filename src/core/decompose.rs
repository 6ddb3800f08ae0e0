//! 완성형 한글 -> 결합용 자모 분해

use crate::core::jamo::{Choseong, Jongseong, Jungseong};
use crate::core::unicode::decompose_syllable;

/// 표시용 자모 문자열에서 자모 사이에 끼우는 구분 문자 (Hair Space)
///
/// 결합용 자모를 그대로 이어 붙이면 글꼴이 다시 음절로 합쳐 그리므로,
/// 낱자 그대로 보여야 하는 문자열에는 이 문자를 사이에 끼웁니다.
/// 구분 문자는 삼중쌍 안에만 들어가고 글자와 글자 사이에는 넣지 않습니다.
pub const JAMO_SEPARATOR: char = '\u{200A}';

/// 음절 하나에서 분해된 자모 삼중쌍
///
/// 각 자리는 결합용 자모 문자를 그대로 담습니다. 조합 쪽에서 임의의
/// 문자를 받아 검증할 수 있도록 자모 타입이 아닌 `char`를 사용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JamoTriple {
    /// 초성 문자
    pub choseong: char,
    /// 중성 문자
    pub jungseong: char,
    /// 종성 문자 (받침 없으면 None)
    pub jongseong: Option<char>,
}

/// 분해 결과의 토큰 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoToken {
    /// 한글 음절에서 분해된 자모 삼중쌍
    Syllable(JamoTriple),
    /// 분해 대상이 아닌 문자 (그대로 통과)
    Other(char),
}

/// 문자열 전체의 분해 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JamoSplit {
    /// 입력 문자 순서대로 나열한 토큰 (조합 입력으로 재사용 가능)
    pub tokens: Vec<JamoToken>,
    /// 결합용 자모를 그대로 이어 붙인 문자열 (발음 규칙/로마자 매핑 입력)
    pub jamo_string: String,
    /// 자모 사이에 구분 문자를 끼운 표시용 문자열
    pub plain_jamo_string: String,
}

/// 음절 하나를 자모 삼중쌍으로 분해 (완성형 한글이 아니면 None)
fn decompose_char(c: char) -> Option<JamoTriple> {
    let (cho_index, jung_index, jong_index) = decompose_syllable(c)?;
    let cho = Choseong::from_index(cho_index)?;
    let jung = Jungseong::from_index(jung_index)?;
    // 종성 인덱스 0은 받침 없음, 1부터가 실제 종성
    let jong = match jong_index {
        0 => None,
        i => Jongseong::from_index(i - 1),
    };
    Some(JamoTriple {
        choseong: cho.to_char(),
        jungseong: jung.to_char(),
        jongseong: jong.map(Jongseong::to_char),
    })
}

/// 문자열의 완성형 한글을 모두 결합용 자모로 분해
///
/// 한글 음절이 아닌 문자(라틴 문자, 숫자, 공백, 문장부호 등)는
/// 토큰과 두 문자열 모두에 원래 자리 그대로 남습니다.
///
/// # Examples
///
/// ```
/// use koroman::split_hangul_to_jamos;
///
/// let split = split_hangul_to_jamos("한글");
/// assert_eq!(
///     split.jamo_string,
///     "\u{1112}\u{1161}\u{11AB}\u{1100}\u{1173}\u{11AF}"
/// );
/// ```
pub fn split_hangul_to_jamos(input: &str) -> JamoSplit {
    let mut tokens = Vec::new();
    let mut jamo_string = String::new();
    let mut plain_jamo_string = String::new();

    for c in input.chars() {
        match decompose_char(c) {
            Some(triple) => {
                jamo_string.push(triple.choseong);
                jamo_string.push(triple.jungseong);

                plain_jamo_string.push(triple.choseong);
                plain_jamo_string.push(JAMO_SEPARATOR);
                plain_jamo_string.push(triple.jungseong);

                if let Some(jong) = triple.jongseong {
                    jamo_string.push(jong);
                    plain_jamo_string.push(JAMO_SEPARATOR);
                    plain_jamo_string.push(jong);
                }

                tokens.push(JamoToken::Syllable(triple));
            }
            None => {
                jamo_string.push(c);
                plain_jamo_string.push(c);
                tokens.push(JamoToken::Other(c));
            }
        }
    }

    JamoSplit {
        tokens,
        jamo_string,
        plain_jamo_string,
    }
}
