//! 로마자 변환 옵션 (JSON 직렬화 지원)

use serde::{Deserialize, Serialize};

/// 출력 대소문자 형식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CasingOption {
    /// 전체 소문자
    Lowercase,
    /// 전체 대문자
    Uppercase,
    /// 공백으로 나뉜 단어마다 첫 글자를 대문자로
    #[serde(alias = "capitalize-words")]
    CapitalizeWord,
    /// 줄마다 첫 글자를 대문자로
    #[serde(alias = "capitalize-lines")]
    CapitalizeLine,
}

impl CasingOption {
    /// 이름 문자열에서 변환 ("uppercase", "capitalize-word" 등)
    ///
    /// 복수형 이름(capitalize-words, capitalize-lines)도 받아 주고,
    /// 모르는 이름은 기본값인 소문자로 처리합니다.
    pub fn from_name(name: &str) -> CasingOption {
        match name {
            "lowercase" => CasingOption::Lowercase,
            "uppercase" => CasingOption::Uppercase,
            "capitalize-word" | "capitalize-words" => CasingOption::CapitalizeWord,
            "capitalize-line" | "capitalize-lines" => CasingOption::CapitalizeLine,
            other => {
                log::warn!("알 수 없는 대소문자 옵션 '{}', lowercase로 처리", other);
                CasingOption::Lowercase
            }
        }
    }

    /// 표준 이름 문자열
    pub fn name(self) -> &'static str {
        match self {
            CasingOption::Lowercase => "lowercase",
            CasingOption::Uppercase => "uppercase",
            CasingOption::CapitalizeWord => "capitalize-word",
            CasingOption::CapitalizeLine => "capitalize-line",
        }
    }
}

impl Default for CasingOption {
    fn default() -> Self {
        CasingOption::Lowercase
    }
}

/// 로마자 변환 옵션
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RomanizeOptions {
    /// 발음 규칙 적용 여부
    #[serde(default = "default_use_pronunciation_rules")]
    pub use_pronunciation_rules: bool,
    /// 출력 대소문자 형식
    #[serde(default)]
    pub casing_option: CasingOption,
}

fn default_use_pronunciation_rules() -> bool {
    true
}

impl Default for RomanizeOptions {
    fn default() -> Self {
        Self {
            use_pronunciation_rules: default_use_pronunciation_rules(),
            casing_option: CasingOption::default(),
        }
    }
}

impl RomanizeOptions {
    /// JSON 문자열에서 옵션 로드 (파싱 실패 시 기본값)
    pub fn from_json(json: &str) -> RomanizeOptions {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("옵션 JSON 파싱 실패 ({}), 기본값 사용", e);
            RomanizeOptions::default()
        })
    }
}
