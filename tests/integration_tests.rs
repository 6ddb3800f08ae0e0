//! 통합 테스트 - 로마자 변환 파이프라인

use koroman::{compose_jamos, romanize, split_hangul_to_jamos, CasingOption, RomanizeOptions};

#[test]
fn test_basic_romanization() {
    let options = RomanizeOptions::default();
    assert_eq!(romanize("한글", &options), "hangeul");
    assert_eq!(romanize("로마자", &options), "romaja");
    assert_eq!(romanize("안녕하세요", &options), "annyeonghaseyo");
    assert_eq!(romanize("테스트", &options), "teseuteu");
}

#[test]
fn test_pronunciation_rules_applied() {
    let options = RomanizeOptions::default();
    assert_eq!(romanize("문래", &options), "mullae"); // ㄴ+ㄹ -> ㄹㄹ
    assert_eq!(romanize("문래역", &options), "mullaeyeok");
    assert_eq!(romanize("선릉역", &options), "seolleungyeok");
    assert_eq!(romanize("신라", &options), "silla"); // ㄹㄹ -> ll
    assert_eq!(romanize("역량", &options), "yeongnyang"); // ㄱ+ㄹ -> ㅇ+ㄴ
    assert_eq!(romanize("독립문", &options), "dongnimmun");
    assert_eq!(romanize("밥물", &options), "bammul"); // ㅂ+ㅁ -> ㅁ+ㅁ
    assert_eq!(romanize("학여울", &options), "hangnyeoul"); // ㄱ+여 -> ㅇ+녀
}

#[test]
fn test_pronunciation_rules_disabled() {
    let options = RomanizeOptions {
        use_pronunciation_rules: false,
        ..RomanizeOptions::default()
    };
    assert_eq!(romanize("문래역", &options), "munraeyeok");
    assert_eq!(romanize("선릉역", &options), "seonreungyeok");
    assert_eq!(romanize("굳이", &options), "gudi");
    assert_eq!(romanize("역량", &options), "yeokryang");
    assert_eq!(romanize("해돋이", &options), "haedodi");
}

#[test]
fn test_palatalization() {
    let options = RomanizeOptions::default();
    assert_eq!(romanize("굳이", &options), "guji"); // ㄷ+이 -> 지
    assert_eq!(romanize("해돋이", &options), "haedoji");
    assert_eq!(romanize("같이", &options), "gachi"); // ㅌ+이 -> 치
}

#[test]
fn test_liaison() {
    let options = RomanizeOptions::default();
    assert_eq!(romanize("좋은", &options), "joeun"); // ㅎ 탈락
    assert_eq!(romanize("값어치", &options), "gapseochi"); // ㅄ -> ㅂ+ㅅ 연음
    assert_eq!(romanize("넋이", &options), "neoksi");
    assert_eq!(romanize("꽃잎", &options), "kkochip");
}

#[test]
fn test_aspiration() {
    let options = RomanizeOptions::default();
    assert_eq!(romanize("놓다", &options), "nota"); // ㅎ+ㄷ -> ㅌ
    assert_eq!(romanize("좋다", &options), "jota");
    assert_eq!(romanize("축하", &options), "chuka"); // ㄱ+ㅎ -> ㅋ
    assert_eq!(romanize("입학", &options), "ipak");
}

#[test]
fn test_complex_jongseong() {
    let options = RomanizeOptions::default();
    assert_eq!(romanize("앉다", &options), "anda"); // ㄵ -> ㄴ
    assert_eq!(romanize("읽다", &options), "ilda"); // ㄺ -> ㄹ
    assert_eq!(romanize("없다", &options), "eopda"); // ㅄ -> ㅂ
}

#[test]
fn test_casing_options() {
    let upper = RomanizeOptions {
        casing_option: CasingOption::Uppercase,
        ..RomanizeOptions::default()
    };
    assert_eq!(romanize("한글", &upper), "HANGEUL");
    assert_eq!(romanize("한글123영어", &upper), "HANGEUL123YEONGEO");

    let word = RomanizeOptions {
        casing_option: CasingOption::CapitalizeWord,
        ..RomanizeOptions::default()
    };
    assert_eq!(
        romanize("한글 로마자 안녕하세요", &word),
        "Hangeul Romaja Annyeonghaseyo"
    );

    let line = RomanizeOptions {
        casing_option: CasingOption::CapitalizeLine,
        ..RomanizeOptions::default()
    };
    assert_eq!(
        romanize("한글 로마자 안녕하세요", &line),
        "Hangeul romaja annyeonghaseyo"
    );
}

#[test]
fn test_multiline_text() {
    let input = "안녕하세요 반갑습니다\n줄바꿈 테스트\r\n캐리지리턴 테스트\n\r라인피드 테스트";

    let options = RomanizeOptions::default();
    assert_eq!(
        romanize(input, &options),
        "annyeonghaseyo bangapseumnida\njulbakkum teseuteu\r\nkaerijiriteon teseuteu\n\rrainpideu teseuteu"
    );

    // 줄 분리는 '\n' 기준이라 '\r'은 앞 줄 끝에 남음
    let line = RomanizeOptions {
        casing_option: CasingOption::CapitalizeLine,
        ..RomanizeOptions::default()
    };
    assert_eq!(
        romanize(input, &line),
        "Annyeonghaseyo bangapseumnida\nJulbakkum teseuteu\r\nKaerijiriteon teseuteu\n\rrainpideu teseuteu"
    );

    let word = RomanizeOptions {
        casing_option: CasingOption::CapitalizeWord,
        ..RomanizeOptions::default()
    };
    assert_eq!(
        romanize(input, &word),
        "Annyeonghaseyo Bangapseumnida\nJulbakkum Teseuteu\r\nKaerijiriteon Teseuteu\n\rrainpideu Teseuteu"
    );
}

#[test]
fn test_mixed_input() {
    let options = RomanizeOptions::default();
    assert_eq!(romanize("Hello, 월드!", &options), "hello, woldeu!");
    assert_eq!(romanize("abc DEF 123 !@#", &options), "abc def 123 !@#"); // 기본 소문자 적용
    assert_eq!(romanize("👍한글", &options), "👍hangeul");
}

#[test]
fn test_passthrough_identity() {
    // 대소문자가 없는 문자열은 원문 그대로
    let options = RomanizeOptions::default();
    assert_eq!(romanize("123 !@# ...", &options), "123 !@# ...");
    assert_eq!(romanize("2024-08-24 12:00", &options), "2024-08-24 12:00");
    assert_eq!(romanize("\t\r\n", &options), "\t\r\n");
}

#[test]
fn test_empty_string() {
    assert_eq!(romanize("", &RomanizeOptions::default()), "");
}

#[test]
fn test_split_compose_roundtrip() {
    let split = split_hangul_to_jamos("한글 테스트 2024");
    assert_eq!(compose_jamos(&split.tokens), "한글 테스트 2024");

    // 가(U+AC00)부터 힣(U+D7A3)까지 전 음절 왕복
    for c in '가'..='힣' {
        let input = c.to_string();
        let split = split_hangul_to_jamos(&input);
        assert_eq!(compose_jamos(&split.tokens), input);
    }
}

#[test]
fn test_jamo_string_forms() {
    let split = split_hangul_to_jamos("한글");
    assert_eq!(
        split.jamo_string,
        "\u{1112}\u{1161}\u{11AB}\u{1100}\u{1173}\u{11AF}"
    );
    // 표시용 문자열은 자모 사이에 Hair Space 구분 문자 포함
    assert_eq!(
        split.plain_jamo_string,
        "\u{1112}\u{200A}\u{1161}\u{200A}\u{11AB}\u{1100}\u{200A}\u{1173}\u{200A}\u{11AF}"
    );
}

#[test]
fn test_options_from_json() {
    let options =
        RomanizeOptions::from_json(r#"{"usePronunciationRules":false,"casingOption":"uppercase"}"#);
    assert!(!options.use_pronunciation_rules);
    assert_eq!(options.casing_option, CasingOption::Uppercase);
    assert_eq!(romanize("문래역", &options), "MUNRAEYEOK");

    // 생략한 필드는 기본값
    let options = RomanizeOptions::from_json(r#"{"casingOption":"capitalize-word"}"#);
    assert!(options.use_pronunciation_rules);
    assert_eq!(romanize("한글 로마자", &options), "Hangeul Romaja");

    // 깨진 JSON은 기본 옵션으로 처리
    let options = RomanizeOptions::from_json("not json");
    assert_eq!(options, RomanizeOptions::default());
    assert_eq!(romanize("한글", &options), "hangeul");
}
