//! 표준 발음 규칙 적용
//!
//! 결합용 자모 문자열에 비음화, 유음화, 연음, 격음화, 구개음화,
//! 겹받침 분해 같은 발음 규칙을 적용합니다. 규칙은 고정된 표이고,
//! 표에 적힌 순서대로 정확히 한 번씩 적용됩니다.
//!
//! 규칙 하나는 스트림을 왼쪽에서 오른쪽으로 한 번 훑으며 겹치지 않는
//! 매칭을 모두 치환합니다. 치환으로 생긴 기호는 같은 규칙이 다시
//! 검사하지 않고, 다음 규칙부터 보게 됩니다.

use crate::core::jamo::{Choseong, Jamo, Jongseong, Jungseong};

/// 패턴 기호 하나의 매칭 조건
#[derive(Debug, Clone, Copy)]
enum Pat {
    /// 이 집합에 속한 초성
    Cho(&'static [Choseong]),
    /// 이 집합에 속한 중성
    Jung(&'static [Jungseong]),
    /// 이 집합에 속한 종성
    Jong(&'static [Jongseong]),
    /// 아무 종성
    AnyJong,
    /// 정확히 이 문자
    Other(char),
}

/// 매칭 구간 바로 다음 기호에 대한 비소비 조건
#[derive(Debug, Clone, Copy)]
enum Look {
    /// 조건 없음
    None,
    /// 다음 기호가 이 집합의 초성
    Cho(&'static [Choseong]),
    /// 다음 기호가 이 집합의 중성
    Jung(&'static [Jungseong]),
    /// 다음 기호가 존재하고 공백이 아님
    BeforeNonSpace,
}

/// 매칭된 구간을 무엇으로 바꾸는지
#[derive(Debug, Clone, Copy)]
enum Rep {
    /// 고정된 기호열로 치환 (빈 배열이면 삭제)
    Syms(&'static [Jamo]),
    /// 첫 기호만 남기고 나머지는 탈락
    KeepFirst,
}

/// 발음 규칙 하나: 대안 패턴 + 전방 탐색 + 치환
struct Rule {
    /// 대안 패턴 (앞의 것부터 시도)
    alts: &'static [&'static [Pat]],
    look: Look,
    rep: Rep,
}

/// 비음화를 일으키는 초성 (ㄴ, ㅁ)
const NASAL_ONSETS: &[Choseong] = &[Choseong::Nieun, Choseong::Mieum];

/// ㄴ 첨가를 일으키는 ㅣ계 이중모음 (ㅑ ㅒ ㅕ ㅖ ㅛ ㅠ)
const IOTIZED_VOWELS: &[Jungseong] = &[
    Jungseong::Ya,
    Jungseong::Yae,
    Jungseong::Yeo,
    Jungseong::Ye,
    Jungseong::Yo,
    Jungseong::Yu,
];

/// 발음 규칙 표
///
/// 뒤의 규칙은 앞의 규칙이 끝난 결과 위에서 동작하므로 순서를 바꾸면
/// 결과가 달라집니다. 특히 겹받침 분해(ㄳ ㄵ ...)는 비음화 뒤,
/// 연음과 격음화 앞에 와야 합니다.
static RULES: [Rule; 45] = [
    // 쓰지 않는 종성 채움 문자(U+11A7)는 먼저 제거
    Rule {
        alts: &[&[Pat::Other('\u{11A7}')]],
        look: Look::None,
        rep: Rep::Syms(&[]),
    },
    //
    // 비음화: ㄴ/ㅁ 앞의 장애음 받침은 콧소리로
    //
    // ㅂ·ㅍ·ㅄ·ㄼ·ㄿ 받침 -> ㅁ
    Rule {
        alts: &[&[Pat::Jong(&[
            Jongseong::Bieup,
            Jongseong::Pieup,
            Jongseong::BieupSiot,
            Jongseong::RieulBieup,
            Jongseong::RieulPieup,
        ])]],
        look: Look::Cho(NASAL_ONSETS),
        rep: Rep::Syms(&[Jamo::Jongseong(Jongseong::Mieum)]),
    },
    // ㄷ·ㅌ·ㅈ·ㅊ·ㅅ·ㅆ·ㅎ 받침 -> ㄴ
    Rule {
        alts: &[&[Pat::Jong(&[
            Jongseong::Digeut,
            Jongseong::Tieut,
            Jongseong::Jieut,
            Jongseong::Chieut,
            Jongseong::Siot,
            Jongseong::SsangSiot,
            Jongseong::Hieut,
        ])]],
        look: Look::Cho(NASAL_ONSETS),
        rep: Rep::Syms(&[Jamo::Jongseong(Jongseong::Nieun)]),
    },
    // ㄱ·ㄲ·ㅋ·ㄳ·ㄺ 받침 -> ㅇ
    Rule {
        alts: &[&[Pat::Jong(&[
            Jongseong::Giyeok,
            Jongseong::SsangGiyeok,
            Jongseong::Kieuk,
            Jongseong::GiyeokSiot,
            Jongseong::RieulGiyeok,
        ])]],
        look: Look::Cho(NASAL_ONSETS),
        rep: Rep::Syms(&[Jamo::Jongseong(Jongseong::Ieung)]),
    },
    //
    // ㄴ 첨가: ㅣ계 이중모음 앞의 빈 초성
    //
    // ㄱ받침 + ㅇ초성 (+ ㅑㅒㅕㅖㅛㅠ) -> ㅇ받침 + ㄴ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Giyeok]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::Jung(IOTIZED_VOWELS),
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Ieung),
            Jamo::Choseong(Choseong::Nieun),
        ]),
    },
    // ㄹ받침 + ㅇ초성 (+ ㅑㅒㅕㅖㅛㅠ) -> ㄹ받침 + ㄹ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Rieul]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::Jung(IOTIZED_VOWELS),
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Rieul),
            Jamo::Choseong(Choseong::Rieul),
        ]),
    },
    //
    // ㄹ 초성의 비음화와 유음화
    //
    // ㄱ/ㅇ받침 + ㄹ초성 -> ㅇ받침 + ㄴ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Giyeok, Jongseong::Ieung]),
            Pat::Cho(&[Choseong::Rieul]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Ieung),
            Jamo::Choseong(Choseong::Nieun),
        ]),
    },
    // ㄴ받침 + ㄹ초성 (+ ㅗ) -> ㄴㄴ
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Nieun]),
            Pat::Cho(&[Choseong::Rieul]),
        ]],
        look: Look::Jung(&[Jungseong::O]),
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Nieun),
            Jamo::Choseong(Choseong::Nieun),
        ]),
    },
    // ㄹ받침 + ㄴ초성, ㄴ받침 + ㄹ초성 -> ㄹㄹ (유음화)
    Rule {
        alts: &[
            &[
                Pat::Jong(&[Jongseong::Rieul]),
                Pat::Cho(&[Choseong::Nieun]),
            ],
            &[
                Pat::Jong(&[Jongseong::Nieun]),
                Pat::Cho(&[Choseong::Rieul]),
            ],
        ],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Rieul),
            Jamo::Choseong(Choseong::Rieul),
        ]),
    },
    // ㅁ/ㅂ받침 + ㄹ초성 -> ㅁ받침 + ㄴ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Mieum, Jongseong::Bieup]),
            Pat::Cho(&[Choseong::Rieul]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Mieum),
            Jamo::Choseong(Choseong::Nieun),
        ]),
    },
    // ㄺ받침 + ㄹ초성 -> ㄱ받침 + ㄹ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::RieulGiyeok]),
            Pat::Cho(&[Choseong::Rieul]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Giyeok),
            Jamo::Choseong(Choseong::Rieul),
        ]),
    },
    //
    // 같은 계열 파열음이 받침/초성으로 이어지면 하이픈으로 분리
    //
    // ㄱ받침 + ㅋ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Giyeok]),
            Pat::Cho(&[Choseong::Kieuk]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Giyeok),
            Jamo::Other('-'),
            Jamo::Choseong(Choseong::Kieuk),
        ]),
    },
    // ㅂ받침 + ㅍ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Bieup]),
            Pat::Cho(&[Choseong::Pieup]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Bieup),
            Jamo::Other('-'),
            Jamo::Choseong(Choseong::Pieup),
        ]),
    },
    // ㄷ받침 + ㅌ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Digeut]),
            Pat::Cho(&[Choseong::Tieut]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Digeut),
            Jamo::Other('-'),
            Jamo::Choseong(Choseong::Tieut),
        ]),
    },
    //
    // 겹받침 분해: 이후 규칙(연음, 격음화, 마지막 정리)은 낱자 기준
    //
    // ㄳ -> ㄱㅅ
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::GiyeokSiot])]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Giyeok),
            Jamo::Jongseong(Jongseong::Siot),
        ]),
    },
    // ㄵ -> ㄴㅈ
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::NieunJieut])]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Nieun),
            Jamo::Jongseong(Jongseong::Jieut),
        ]),
    },
    // ㄶ -> ㄴㅎ
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::NieunHieut])]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Nieun),
            Jamo::Jongseong(Jongseong::Hieut),
        ]),
    },
    // ㄺ -> ㄹㄱ
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::RieulGiyeok])]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Rieul),
            Jamo::Jongseong(Jongseong::Giyeok),
        ]),
    },
    // ㄻ -> ㄹㅁ
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::RieulMieum])]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Rieul),
            Jamo::Jongseong(Jongseong::Mieum),
        ]),
    },
    // ㄼ -> ㄹㅂ
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::RieulBieup])]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Rieul),
            Jamo::Jongseong(Jongseong::Bieup),
        ]),
    },
    // ㄽ -> ㄹㅅ
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::RieulSiot])]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Rieul),
            Jamo::Jongseong(Jongseong::Siot),
        ]),
    },
    // ㄾ -> ㄹㅌ
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::RieulTieut])]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Rieul),
            Jamo::Jongseong(Jongseong::Tieut),
        ]),
    },
    // ㄿ -> ㄹㅍ
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::RieulPieup])]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Rieul),
            Jamo::Jongseong(Jongseong::Pieup),
        ]),
    },
    // ㅀ -> ㄹㅎ
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::RieulHieut])]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Rieul),
            Jamo::Jongseong(Jongseong::Hieut),
        ]),
    },
    // ㅄ -> ㅂㅅ
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::BieupSiot])]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Jongseong(Jongseong::Bieup),
            Jamo::Jongseong(Jongseong::Siot),
        ]),
    },
    //
    // 구개음화: ㄷ/ㅌ 받침 + 이 -> 지/치
    //
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Digeut]),
            Pat::Cho(&[Choseong::Ieung]),
            Pat::Jung(&[Jungseong::I]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Choseong(Choseong::Jieut),
            Jamo::Jungseong(Jungseong::I),
        ]),
    },
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Tieut]),
            Pat::Cho(&[Choseong::Ieung]),
            Pat::Jung(&[Jungseong::I]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[
            Jamo::Choseong(Choseong::Chieut),
            Jamo::Jungseong(Jungseong::I),
        ]),
    },
    //
    // 연음: 받침이 뒤따르는 빈 초성(ㅇ) 자리로 이동
    //
    // ㄱ받침 + ㅇ -> ㄱ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Giyeok]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Giyeok)]),
    },
    // ㄲ받침 + ㅇ -> ㄲ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::SsangGiyeok]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::SsangGiyeok)]),
    },
    // ㄷ받침 + ㅇ -> ㄷ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Digeut]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Digeut)]),
    },
    // ㄹ받침 + ㅇ -> ㄹ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Rieul]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Rieul)]),
    },
    // ㅂ받침 + ㅇ -> ㅂ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Bieup]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Bieup)]),
    },
    // ㅅ받침 + ㅇ -> ㅅ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Siot]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Siot)]),
    },
    // ㅆ받침 + ㅇ -> ㅆ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::SsangSiot]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::SsangSiot)]),
    },
    // ㅈ받침 + ㅇ -> ㅈ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Jieut]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Jieut)]),
    },
    // ㅊ받침 + ㅇ -> ㅊ초성
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Chieut]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Chieut)]),
    },
    // ㅎ받침 + ㅇ -> 둘 다 탈락
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Hieut]),
            Pat::Cho(&[Choseong::Ieung]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[]),
    },
    //
    // ㅎ 격음화: ㅎ + 평음은 거센소리로
    //
    // ㅎ받침 + ㄱ, ㄱ받침 + ㅎ -> ㅋ
    Rule {
        alts: &[
            &[
                Pat::Jong(&[Jongseong::Hieut]),
                Pat::Cho(&[Choseong::Giyeok]),
            ],
            &[
                Pat::Jong(&[Jongseong::Giyeok]),
                Pat::Cho(&[Choseong::Hieut]),
            ],
        ],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Kieuk)]),
    },
    // ㅎ받침 + ㄷ, ㄷ받침 + ㅎ -> ㅌ
    Rule {
        alts: &[
            &[
                Pat::Jong(&[Jongseong::Hieut]),
                Pat::Cho(&[Choseong::Digeut]),
            ],
            &[
                Pat::Jong(&[Jongseong::Digeut]),
                Pat::Cho(&[Choseong::Hieut]),
            ],
        ],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Tieut)]),
    },
    // ㅎ받침 + ㅈ, ㅈ받침 + ㅎ -> ㅊ
    Rule {
        alts: &[
            &[
                Pat::Jong(&[Jongseong::Hieut]),
                Pat::Cho(&[Choseong::Jieut]),
            ],
            &[
                Pat::Jong(&[Jongseong::Jieut]),
                Pat::Cho(&[Choseong::Hieut]),
            ],
        ],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Chieut)]),
    },
    // ㅎ받침 + ㅂ -> ㅂ (격음화 없이 ㅎ만 탈락)
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Hieut]),
            Pat::Cho(&[Choseong::Bieup]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Bieup)]),
    },
    // ㅂ받침 + ㅎ -> ㅍ
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Bieup]),
            Pat::Cho(&[Choseong::Hieut]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Choseong(Choseong::Pieup)]),
    },
    //
    // 마무리 정리
    //
    // ㄹ받침 + ㄹ초성은 로마자 ll로 표기
    Rule {
        alts: &[&[
            Pat::Jong(&[Jongseong::Rieul]),
            Pat::Cho(&[Choseong::Rieul]),
        ]],
        look: Look::None,
        rep: Rep::Syms(&[Jamo::Other('l'), Jamo::Other('l')]),
    },
    // 남은 ㅎ받침은 묵음 (어말이나 공백 앞이면 유지)
    Rule {
        alts: &[&[Pat::Jong(&[Jongseong::Hieut])]],
        look: Look::BeforeNonSpace,
        rep: Rep::Syms(&[]),
    },
    // 받침이 두 개 겹쳐 남았으면 첫째만 유지
    Rule {
        alts: &[&[Pat::AnyJong, Pat::AnyJong]],
        look: Look::None,
        rep: Rep::KeepFirst,
    },
];

impl Pat {
    /// 기호 하나가 이 조건에 맞는지
    fn matches(self, sym: Jamo) -> bool {
        match (self, sym) {
            (Pat::Cho(set), Jamo::Choseong(cho)) => set.contains(&cho),
            (Pat::Jung(set), Jamo::Jungseong(jung)) => set.contains(&jung),
            (Pat::Jong(set), Jamo::Jongseong(jong)) => set.contains(&jong),
            (Pat::AnyJong, Jamo::Jongseong(_)) => true,
            (Pat::Other(want), Jamo::Other(c)) => want == c,
            _ => false,
        }
    }
}

impl Look {
    /// 매칭 구간 바로 다음 기호가 조건에 맞는지
    fn matches(self, next: Option<Jamo>) -> bool {
        match (self, next) {
            (Look::None, _) => true,
            (Look::Cho(set), Some(Jamo::Choseong(cho))) => set.contains(&cho),
            (Look::Jung(set), Some(Jamo::Jungseong(jung))) => set.contains(&jung),
            // 자모 기호는 공백이 아님
            (Look::BeforeNonSpace, Some(Jamo::Other(c))) => !c.is_whitespace(),
            (Look::BeforeNonSpace, Some(_)) => true,
            _ => false,
        }
    }
}

impl Rule {
    /// at 위치에서 매칭을 시도하고, 성공하면 소비한 기호 수를 반환
    fn match_at(&self, stream: &[Jamo], at: usize) -> Option<usize> {
        'alts: for alt in self.alts {
            if at + alt.len() > stream.len() {
                continue;
            }
            for (offset, pat) in alt.iter().enumerate() {
                if !pat.matches(stream[at + offset]) {
                    continue 'alts;
                }
            }
            // 패턴이 맞아도 전방 탐색이 어긋나면 다음 대안을 시도
            if self.look.matches(stream.get(at + alt.len()).copied()) {
                return Some(alt.len());
            }
        }
        None
    }

    /// 스트림을 한 번 훑으며 겹치지 않는 매칭을 모두 치환
    fn apply(&self, stream: &[Jamo]) -> Vec<Jamo> {
        let mut result = Vec::with_capacity(stream.len());
        let mut i = 0;
        while i < stream.len() {
            match self.match_at(stream, i) {
                Some(consumed) => {
                    match self.rep {
                        Rep::Syms(syms) => result.extend_from_slice(syms),
                        Rep::KeepFirst => result.push(stream[i]),
                    }
                    i += consumed;
                }
                None => {
                    result.push(stream[i]);
                    i += 1;
                }
            }
        }
        result
    }
}

/// 결합용 자모 문자열에 발음 규칙 표 전체를 순서대로 적용
///
/// 자모가 아닌 문자는 그대로 통과하지만, 규칙이 만들어 내는
/// 하이픈(`-`)과 로마자 `l`은 결과에 섞여 나옵니다. 입력이 빈
/// 문자열이면 빈 문자열을 반환합니다.
pub fn apply_pronunciation_rules(jamo_text: &str) -> String {
    let mut stream: Vec<Jamo> = jamo_text.chars().map(Jamo::classify).collect();
    for rule in RULES.iter() {
        stream = rule.apply(&stream);
    }
    stream.into_iter().map(Jamo::to_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::decompose::split_hangul_to_jamos;

    /// 완성형 문자열의 결합용 자모 문자열
    fn jamos(text: &str) -> String {
        split_hangul_to_jamos(text).jamo_string
    }

    /// 분해 + 발음 규칙 적용
    fn pronounce(text: &str) -> String {
        apply_pronunciation_rules(&jamos(text))
    }

    #[test]
    fn test_nasalization() {
        assert_eq!(pronounce("밥물"), jamos("밤물")); // ㅂ + ㅁ
        assert_eq!(pronounce("국물"), jamos("궁물")); // ㄱ + ㅁ
        assert_eq!(pronounce("설날"), "\u{1109}\u{1165}ll\u{1161}\u{11AF}"); // ㄹ + ㄴ -> ll
    }

    #[test]
    fn test_rieul_onset() {
        assert_eq!(pronounce("독립"), jamos("동닙")); // ㄱ + ㄹ
        assert_eq!(pronounce("담력"), jamos("담녁")); // ㅁ + ㄹ
        assert_eq!(pronounce("협력"), jamos("혐녁")); // ㅂ + ㄹ
        assert_eq!(pronounce("백리"), jamos("뱅니")); // ㄱ + ㄹ
        assert_eq!(pronounce("역량"), jamos("영냥")); // ㄱ + ㄹ (ㅣ계 모음)
    }

    #[test]
    fn test_liquid_assimilation() {
        // ㄴ+ㄹ, ㄹ+ㄴ은 ㄹㄹ을 거쳐 로마자 ll로
        assert_eq!(pronounce("신라"), "\u{1109}\u{1175}ll\u{1161}");
        assert_eq!(pronounce("별내"), "\u{1107}\u{1167}ll\u{1162}");
    }

    #[test]
    fn test_liaison() {
        assert_eq!(pronounce("먹이"), jamos("머기")); // ㄱ받침 + ㅇ
        assert_eq!(pronounce("웃어른"), jamos("우서른")); // ㅅ받침 + ㅇ
        // ㅎ받침 + ㅇ은 둘 다 탈락해 중성이 바로 이어짐
        assert_eq!(pronounce("좋은"), "\u{110C}\u{1169}\u{1173}\u{11AB}");
    }

    #[test]
    fn test_palatalization() {
        assert_eq!(pronounce("굳이"), jamos("구지")); // ㄷ + 이 -> 지
        assert_eq!(pronounce("같이"), jamos("가치")); // ㅌ + 이 -> 치
        assert_eq!(pronounce("해돋이"), jamos("해도지"));
    }

    #[test]
    fn test_aspiration() {
        assert_eq!(pronounce("좋다"), jamos("조타")); // ㅎ받침 + ㄷ
        assert_eq!(pronounce("놓고"), jamos("노코")); // ㅎ받침 + ㄱ
        assert_eq!(pronounce("축하"), jamos("추카")); // ㄱ받침 + ㅎ
        assert_eq!(pronounce("맏형"), jamos("마텽")); // ㄷ받침 + ㅎ
        assert_eq!(pronounce("맞히다"), jamos("마치다")); // ㅈ받침 + ㅎ
        assert_eq!(pronounce("입학"), jamos("이팍")); // ㅂ받침 + ㅎ
        assert_eq!(pronounce("곱하기"), jamos("고파기"));
    }

    #[test]
    fn test_hyphen_separation() {
        // 같은 계열 파열음 사이에는 하이픈
        assert_eq!(
            pronounce("악크"),
            "\u{110B}\u{1161}\u{11A8}-\u{110F}\u{1173}"
        );
        assert_eq!(
            pronounce("압파"),
            "\u{110B}\u{1161}\u{11B8}-\u{1111}\u{1161}"
        );
        assert_eq!(
            pronounce("받타"),
            "\u{1107}\u{1161}\u{11AE}-\u{1110}\u{1161}"
        );
    }

    #[test]
    fn test_compound_jongseong() {
        assert_eq!(pronounce("값"), jamos("갑")); // ㅄ -> ㅂㅅ -> ㅂ
        assert_eq!(pronounce("앉다"), jamos("안다")); // ㄵ -> ㄴㅈ -> ㄴ
        assert_eq!(pronounce("읽다"), jamos("일다")); // ㄺ -> ㄹㄱ -> ㄹ
        assert_eq!(pronounce("값어치"), jamos("갑서치")); // 분해 후 연음
        assert_eq!(pronounce("넋이"), jamos("넉시"));
    }

    #[test]
    fn test_final_hieut() {
        // 어말 ㅎ받침은 유지
        assert_eq!(pronounce("좋"), jamos("좋"));
        // 공백 앞에서도 유지
        assert_eq!(pronounce("좋 x"), format!("{} x", jamos("좋")));
        // 공백 아닌 문자 앞에서는 탈락
        assert_eq!(pronounce("좋."), format!("{}.", jamos("조")));
    }

    #[test]
    fn test_filler_removed() {
        // 쓰지 않는 종성 채움 문자(U+11A7)는 제거됨
        let input = format!("{}\u{11A7}", jamos("가"));
        assert_eq!(apply_pronunciation_rules(&input), jamos("가"));
    }

    #[test]
    fn test_double_jongseong_single_sweep() {
        // 받침 셋이 이어져도 한 번 훑기라 두 개째까지만 정리
        assert_eq!(
            apply_pronunciation_rules("\u{11A8}\u{11BA}\u{11B7}"),
            "\u{11A8}\u{11B7}"
        );
    }

    #[test]
    fn test_passthrough_and_empty() {
        assert_eq!(apply_pronunciation_rules("abc 123!"), "abc 123!");
        assert_eq!(apply_pronunciation_rules(""), "");
        // 규칙이 하나도 맞지 않는 한글은 그대로
        assert_eq!(pronounce("한국"), jamos("한국"));
    }

    #[test]
    fn test_deterministic() {
        // 같은 입력은 언제나 같은 결과
        let input = jamos("선릉역 국물 좋은 값어치");
        assert_eq!(
            apply_pronunciation_rules(&input),
            apply_pronunciation_rules(&input)
        );
    }
}
