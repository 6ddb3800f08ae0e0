//! 결합용 한글 자모(초성/중성/종성) 타입과 로마자 표기
//!
//! 발음 규칙과 로마자 매핑은 완성형 음절이 아니라 결합용 자모
//! (U+1100 ~ U+11C2) 스트림 위에서 동작합니다.

/// 결합용 초성 시작 코드포인트 (ᄀ)
const CHOSEONG_BASE: u32 = 0x1100;
/// 결합용 중성 시작 코드포인트 (ᅡ)
const JUNGSEONG_BASE: u32 = 0x1161;
/// 결합용 종성 시작 코드포인트 (ᆨ)
const JONGSEONG_BASE: u32 = 0x11A8;

/// 초성 자모 (19개)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choseong {
    Giyeok,      // ㄱ
    SsangGiyeok, // ㄲ
    Nieun,       // ㄴ
    Digeut,      // ㄷ
    SsangDigeut, // ㄸ
    Rieul,       // ㄹ
    Mieum,       // ㅁ
    Bieup,       // ㅂ
    SsangBieup,  // ㅃ
    Siot,        // ㅅ
    SsangSiot,   // ㅆ
    Ieung,       // ㅇ
    Jieut,       // ㅈ
    SsangJieut,  // ㅉ
    Chieut,      // ㅊ
    Kieuk,       // ㅋ
    Tieut,       // ㅌ
    Pieup,       // ㅍ
    Hieut,       // ㅎ
}

impl Choseong {
    /// 유니코드 순서(= 초성 인덱스 순서)대로 나열한 전체 초성
    pub const ALL: [Choseong; 19] = [
        Choseong::Giyeok,
        Choseong::SsangGiyeok,
        Choseong::Nieun,
        Choseong::Digeut,
        Choseong::SsangDigeut,
        Choseong::Rieul,
        Choseong::Mieum,
        Choseong::Bieup,
        Choseong::SsangBieup,
        Choseong::Siot,
        Choseong::SsangSiot,
        Choseong::Ieung,
        Choseong::Jieut,
        Choseong::SsangJieut,
        Choseong::Chieut,
        Choseong::Kieuk,
        Choseong::Tieut,
        Choseong::Pieup,
        Choseong::Hieut,
    ];

    /// 초성 인덱스(0~18)로 변환
    pub fn index(self) -> u32 {
        self as u32
    }

    /// 초성 인덱스에서 변환 (범위 밖이면 None)
    pub fn from_index(index: u32) -> Option<Choseong> {
        Choseong::ALL.get(index as usize).copied()
    }

    /// 결합용 초성 문자에서 변환 (초성이 아니면 None)
    pub fn from_char(c: char) -> Option<Choseong> {
        let index = (c as u32).checked_sub(CHOSEONG_BASE)?;
        Choseong::from_index(index)
    }

    /// 결합용 초성 문자로 변환 (U+1100 ~ U+1112)
    pub fn to_char(self) -> char {
        //             ㄱ   ㄲ   ㄴ   ㄷ   ㄸ   ㄹ   ㅁ   ㅂ   ㅃ   ㅅ
        const CHARS: [char; 19] = [
            '\u{1100}', '\u{1101}', '\u{1102}', '\u{1103}', '\u{1104}',
            '\u{1105}', '\u{1106}', '\u{1107}', '\u{1108}', '\u{1109}',
            // ㅆ   ㅇ   ㅈ   ㅉ   ㅊ   ㅋ   ㅌ   ㅍ   ㅎ
            '\u{110A}', '\u{110B}', '\u{110C}', '\u{110D}', '\u{110E}',
            '\u{110F}', '\u{1110}', '\u{1111}', '\u{1112}',
        ];
        CHARS[self as usize]
    }

    /// 초성 위치 로마자 표기
    pub fn roman(self) -> &'static str {
        match self {
            Choseong::Giyeok => "g",       // ㄱ
            Choseong::SsangGiyeok => "kk", // ㄲ
            Choseong::Nieun => "n",        // ㄴ
            Choseong::Digeut => "d",       // ㄷ
            Choseong::SsangDigeut => "tt", // ㄸ
            Choseong::Rieul => "r",        // ㄹ
            Choseong::Mieum => "m",        // ㅁ
            Choseong::Bieup => "b",        // ㅂ
            Choseong::SsangBieup => "pp",  // ㅃ
            Choseong::Siot => "s",         // ㅅ
            Choseong::SsangSiot => "ss",   // ㅆ
            Choseong::Ieung => "",         // ㅇ (음가 없음)
            Choseong::Jieut => "j",        // ㅈ
            Choseong::SsangJieut => "jj",  // ㅉ
            Choseong::Chieut => "ch",      // ㅊ
            Choseong::Kieuk => "k",        // ㅋ
            Choseong::Tieut => "t",        // ㅌ
            Choseong::Pieup => "p",        // ㅍ
            Choseong::Hieut => "h",        // ㅎ
        }
    }
}

/// 중성 자모 (21개)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jungseong {
    A,   // ㅏ
    Ae,  // ㅐ
    Ya,  // ㅑ
    Yae, // ㅒ
    Eo,  // ㅓ
    E,   // ㅔ
    Yeo, // ㅕ
    Ye,  // ㅖ
    O,   // ㅗ
    Wa,  // ㅘ
    Wae, // ㅙ
    Oe,  // ㅚ
    Yo,  // ㅛ
    U,   // ㅜ
    Wo,  // ㅝ
    We,  // ㅞ
    Wi,  // ㅟ
    Yu,  // ㅠ
    Eu,  // ㅡ
    Ui,  // ㅢ
    I,   // ㅣ
}

impl Jungseong {
    /// 유니코드 순서(= 중성 인덱스 순서)대로 나열한 전체 중성
    pub const ALL: [Jungseong; 21] = [
        Jungseong::A,
        Jungseong::Ae,
        Jungseong::Ya,
        Jungseong::Yae,
        Jungseong::Eo,
        Jungseong::E,
        Jungseong::Yeo,
        Jungseong::Ye,
        Jungseong::O,
        Jungseong::Wa,
        Jungseong::Wae,
        Jungseong::Oe,
        Jungseong::Yo,
        Jungseong::U,
        Jungseong::Wo,
        Jungseong::We,
        Jungseong::Wi,
        Jungseong::Yu,
        Jungseong::Eu,
        Jungseong::Ui,
        Jungseong::I,
    ];

    /// 중성 인덱스(0~20)로 변환
    pub fn index(self) -> u32 {
        self as u32
    }

    /// 중성 인덱스에서 변환 (범위 밖이면 None)
    pub fn from_index(index: u32) -> Option<Jungseong> {
        Jungseong::ALL.get(index as usize).copied()
    }

    /// 결합용 중성 문자에서 변환 (중성이 아니면 None)
    pub fn from_char(c: char) -> Option<Jungseong> {
        let index = (c as u32).checked_sub(JUNGSEONG_BASE)?;
        Jungseong::from_index(index)
    }

    /// 결합용 중성 문자로 변환 (U+1161 ~ U+1175)
    pub fn to_char(self) -> char {
        //             ㅏ   ㅐ   ㅑ   ㅒ   ㅓ   ㅔ   ㅕ   ㅖ   ㅗ   ㅘ
        const CHARS: [char; 21] = [
            '\u{1161}', '\u{1162}', '\u{1163}', '\u{1164}', '\u{1165}',
            '\u{1166}', '\u{1167}', '\u{1168}', '\u{1169}', '\u{116A}',
            // ㅙ   ㅚ   ㅛ   ㅜ   ㅝ   ㅞ   ㅟ   ㅠ   ㅡ   ㅢ   ㅣ
            '\u{116B}', '\u{116C}', '\u{116D}', '\u{116E}', '\u{116F}',
            '\u{1170}', '\u{1171}', '\u{1172}', '\u{1173}', '\u{1174}',
            '\u{1175}',
        ];
        CHARS[self as usize]
    }

    /// 중성 로마자 표기
    pub fn roman(self) -> &'static str {
        match self {
            Jungseong::A => "a",     // ㅏ
            Jungseong::Ae => "ae",   // ㅐ
            Jungseong::Ya => "ya",   // ㅑ
            Jungseong::Yae => "yae", // ㅒ
            Jungseong::Eo => "eo",   // ㅓ
            Jungseong::E => "e",     // ㅔ
            Jungseong::Yeo => "yeo", // ㅕ
            Jungseong::Ye => "ye",   // ㅖ
            Jungseong::O => "o",     // ㅗ
            Jungseong::Wa => "wa",   // ㅘ
            Jungseong::Wae => "wae", // ㅙ
            Jungseong::Oe => "oe",   // ㅚ
            Jungseong::Yo => "yo",   // ㅛ
            Jungseong::U => "u",     // ㅜ
            Jungseong::Wo => "wo",   // ㅝ
            Jungseong::We => "we",   // ㅞ
            Jungseong::Wi => "wi",   // ㅟ
            Jungseong::Yu => "yu",   // ㅠ
            Jungseong::Eu => "eu",   // ㅡ
            Jungseong::Ui => "ui",   // ㅢ
            Jungseong::I => "i",     // ㅣ
        }
    }
}

/// 종성 자모 (27개, "종성 없음"은 Option으로 표현)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jongseong {
    Giyeok,      // ㄱ
    SsangGiyeok, // ㄲ
    GiyeokSiot,  // ㄳ
    Nieun,       // ㄴ
    NieunJieut,  // ㄵ
    NieunHieut,  // ㄶ
    Digeut,      // ㄷ
    Rieul,       // ㄹ
    RieulGiyeok, // ㄺ
    RieulMieum,  // ㄻ
    RieulBieup,  // ㄼ
    RieulSiot,   // ㄽ
    RieulTieut,  // ㄾ
    RieulPieup,  // ㄿ
    RieulHieut,  // ㅀ
    Mieum,       // ㅁ
    Bieup,       // ㅂ
    BieupSiot,   // ㅄ
    Siot,        // ㅅ
    SsangSiot,   // ㅆ
    Ieung,       // ㅇ
    Jieut,       // ㅈ
    Chieut,      // ㅊ
    Kieuk,       // ㅋ
    Tieut,       // ㅌ
    Pieup,       // ㅍ
    Hieut,       // ㅎ
}

impl Jongseong {
    /// 유니코드 순서대로 나열한 전체 종성
    ///
    /// 음절 산술의 종성 인덱스는 0이 "종성 없음"이므로,
    /// 이 배열의 위치에 1을 더한 값이 음절 종성 인덱스가 됩니다.
    pub const ALL: [Jongseong; 27] = [
        Jongseong::Giyeok,
        Jongseong::SsangGiyeok,
        Jongseong::GiyeokSiot,
        Jongseong::Nieun,
        Jongseong::NieunJieut,
        Jongseong::NieunHieut,
        Jongseong::Digeut,
        Jongseong::Rieul,
        Jongseong::RieulGiyeok,
        Jongseong::RieulMieum,
        Jongseong::RieulBieup,
        Jongseong::RieulSiot,
        Jongseong::RieulTieut,
        Jongseong::RieulPieup,
        Jongseong::RieulHieut,
        Jongseong::Mieum,
        Jongseong::Bieup,
        Jongseong::BieupSiot,
        Jongseong::Siot,
        Jongseong::SsangSiot,
        Jongseong::Ieung,
        Jongseong::Jieut,
        Jongseong::Chieut,
        Jongseong::Kieuk,
        Jongseong::Tieut,
        Jongseong::Pieup,
        Jongseong::Hieut,
    ];

    /// 배열 위치(0~26)로 변환 (음절 종성 인덱스 - 1)
    pub fn index(self) -> u32 {
        self as u32
    }

    /// 배열 위치에서 변환 (범위 밖이면 None)
    pub fn from_index(index: u32) -> Option<Jongseong> {
        Jongseong::ALL.get(index as usize).copied()
    }

    /// 결합용 종성 문자에서 변환 (종성이 아니면 None)
    pub fn from_char(c: char) -> Option<Jongseong> {
        let index = (c as u32).checked_sub(JONGSEONG_BASE)?;
        Jongseong::from_index(index)
    }

    /// 결합용 종성 문자로 변환 (U+11A8 ~ U+11C2)
    pub fn to_char(self) -> char {
        //             ㄱ   ㄲ   ㄳ   ㄴ   ㄵ   ㄶ   ㄷ   ㄹ   ㄺ   ㄻ
        const CHARS: [char; 27] = [
            '\u{11A8}', '\u{11A9}', '\u{11AA}', '\u{11AB}', '\u{11AC}',
            '\u{11AD}', '\u{11AE}', '\u{11AF}', '\u{11B0}', '\u{11B1}',
            // ㄼ   ㄽ   ㄾ   ㄿ   ㅀ   ㅁ   ㅂ   ㅄ   ㅅ   ㅆ
            '\u{11B2}', '\u{11B3}', '\u{11B4}', '\u{11B5}', '\u{11B6}',
            '\u{11B7}', '\u{11B8}', '\u{11B9}', '\u{11BA}', '\u{11BB}',
            // ㅇ   ㅈ   ㅊ   ㅋ   ㅌ   ㅍ   ㅎ
            '\u{11BC}', '\u{11BD}', '\u{11BE}', '\u{11BF}', '\u{11C0}',
            '\u{11C1}', '\u{11C2}',
        ];
        CHARS[self as usize]
    }

    /// 종성 위치 로마자 표기
    ///
    /// 발음 규칙을 모두 거친 뒤에는 겹받침이 남지 않지만, 규칙을 끄고
    /// 쓰는 경우를 위해 겹받침도 대표음으로 표기합니다.
    pub fn roman(self) -> &'static str {
        match self {
            Jongseong::Giyeok => "k",      // ㄱ
            Jongseong::SsangGiyeok => "k", // ㄲ
            Jongseong::GiyeokSiot => "k",  // ㄳ
            Jongseong::Nieun => "n",       // ㄴ
            Jongseong::NieunJieut => "n",  // ㄵ
            Jongseong::NieunHieut => "n",  // ㄶ
            Jongseong::Digeut => "d",      // ㄷ
            Jongseong::Rieul => "l",       // ㄹ
            Jongseong::RieulGiyeok => "k", // ㄺ
            Jongseong::RieulMieum => "m",  // ㄻ
            Jongseong::RieulBieup => "p",  // ㄼ
            Jongseong::RieulSiot => "t",   // ㄽ
            Jongseong::RieulTieut => "t",  // ㄾ
            Jongseong::RieulPieup => "p",  // ㄿ
            Jongseong::RieulHieut => "h",  // ㅀ
            Jongseong::Mieum => "m",       // ㅁ
            Jongseong::Bieup => "p",       // ㅂ
            Jongseong::BieupSiot => "p",   // ㅄ
            Jongseong::Siot => "t",        // ㅅ
            Jongseong::SsangSiot => "t",   // ㅆ
            Jongseong::Ieung => "ng",      // ㅇ
            Jongseong::Jieut => "t",       // ㅈ
            Jongseong::Chieut => "t",      // ㅊ
            Jongseong::Kieuk => "k",       // ㅋ
            Jongseong::Tieut => "t",       // ㅌ
            Jongseong::Pieup => "p",       // ㅍ
            Jongseong::Hieut => "h",       // ㅎ
        }
    }
}

/// 자모 스트림의 기호 하나
///
/// 발음 규칙과 로마자 매핑은 문자열을 이 기호의 나열로 보고 처리합니다.
/// 한글 자모가 아닌 문자(공백, 문장부호, 라틴 문자 등)는 `Other`로
/// 분류되어 그대로 통과합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    Choseong(Choseong),
    Jungseong(Jungseong),
    Jongseong(Jongseong),
    /// 자모가 아닌 문자
    Other(char),
}

impl Jamo {
    /// 문자 하나를 스트림 기호로 분류
    pub fn classify(c: char) -> Jamo {
        if let Some(cho) = Choseong::from_char(c) {
            return Jamo::Choseong(cho);
        }
        if let Some(jung) = Jungseong::from_char(c) {
            return Jamo::Jungseong(jung);
        }
        if let Some(jong) = Jongseong::from_char(c) {
            return Jamo::Jongseong(jong);
        }
        Jamo::Other(c)
    }

    /// 기호를 다시 문자로 되돌림
    pub fn to_char(self) -> char {
        match self {
            Jamo::Choseong(cho) => cho.to_char(),
            Jamo::Jungseong(jung) => jung.to_char(),
            Jamo::Jongseong(jong) => jong.to_char(),
            Jamo::Other(c) => c,
        }
    }
}
