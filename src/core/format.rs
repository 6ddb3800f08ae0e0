//! 로마자 출력의 대소문자 정리

use crate::options::CasingOption;

/// 첫 문자만 ASCII 대문자로 변환 (나머지는 그대로)
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// 로마자 문자열에 대소문자 옵션을 적용
///
/// 단어는 공백(` `)으로만, 줄은 `\n`으로만 나눕니다. 탭이나 캐리지
/// 리턴은 경계가 아니므로 바로 뒤의 문자는 대문자가 되지 않습니다.
/// 대소문자 변환은 ASCII에만 적용됩니다.
pub fn format_roman(text: &str, casing: CasingOption) -> String {
    match casing {
        CasingOption::Uppercase => text.to_ascii_uppercase(),
        CasingOption::CapitalizeLine => text
            .split('\n')
            .map(capitalize_first)
            .collect::<Vec<_>>()
            .join("\n"),
        CasingOption::CapitalizeWord => text
            .split('\n')
            .map(|line| {
                line.split(' ')
                    .map(capitalize_first)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n"),
        CasingOption::Lowercase => text.to_ascii_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        assert_eq!(format_roman("AbC", CasingOption::Lowercase), "abc");
        assert_eq!(format_roman("hangeul", CasingOption::Lowercase), "hangeul");
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(format_roman("hangeul", CasingOption::Uppercase), "HANGEUL");
    }

    #[test]
    fn test_capitalize_word() {
        assert_eq!(
            format_roman("hangeul romaja", CasingOption::CapitalizeWord),
            "Hangeul Romaja"
        );
        // 단어의 나머지 글자는 그대로
        assert_eq!(format_roman("aB cD", CasingOption::CapitalizeWord), "AB CD");
        // 이어진 공백은 그대로 유지
        assert_eq!(
            format_roman("ab  cd", CasingOption::CapitalizeWord),
            "Ab  Cd"
        );
        // 탭은 단어 경계가 아님
        assert_eq!(
            format_roman("ab\tcd", CasingOption::CapitalizeWord),
            "Ab\tcd"
        );
        // 줄이 바뀌면 첫 단어부터 다시 대문자
        assert_eq!(
            format_roman("ab cd\nef gh", CasingOption::CapitalizeWord),
            "Ab Cd\nEf Gh"
        );
    }

    #[test]
    fn test_capitalize_line() {
        assert_eq!(
            format_roman("ab cd\nef gh", CasingOption::CapitalizeLine),
            "Ab cd\nEf gh"
        );
        // \r\n 줄바꿈이면 \r은 앞 줄 끝에 남고 다음 줄 첫 글자가 대문자
        assert_eq!(
            format_roman("abc\r\ndef", CasingOption::CapitalizeLine),
            "Abc\r\nDef"
        );
        // 빈 줄은 빈 줄로 유지
        assert_eq!(format_roman("a\n\nb", CasingOption::CapitalizeLine), "A\n\nB");
    }

    #[test]
    fn test_non_ascii_untouched() {
        // ASCII 밖의 문자는 대소문자 변환 대상이 아님
        assert_eq!(format_roman("한a", CasingOption::Uppercase), "한A");
        assert_eq!(format_roman("한b c", CasingOption::CapitalizeWord), "한b C");
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_roman("", CasingOption::Lowercase), "");
        assert_eq!(format_roman("", CasingOption::CapitalizeWord), "");
        assert_eq!(format_roman("", CasingOption::CapitalizeLine), "");
    }

    #[test]
    fn test_casing_idempotent() {
        // 같은 옵션을 두 번 적용해도 결과는 동일
        let upper = format_roman("hangeul romaja 123", CasingOption::Uppercase);
        assert_eq!(format_roman(&upper, CasingOption::Uppercase), upper);

        let lower = format_roman("HANGEUL ROMAJA 123", CasingOption::Lowercase);
        assert_eq!(format_roman(&lower, CasingOption::Lowercase), lower);
    }
}
