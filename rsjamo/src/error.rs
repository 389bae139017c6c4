//! 오류 타입 정의

/// rsjamo 전용 Result 타입
pub type Result<T, E = HangulError> = std::result::Result<T, E>;

/// 크레이트 공통 오류
#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum HangulError {
    /// JSON5 레이아웃 파싱 실패
    #[error("JSON5 parse error: {0}")]
    LayoutParse(#[from] json5::Error),

    /// 16진수 코드포인트 문자열이 올바르지 않음
    #[error("Invalid hex in {field}: {value}")]
    InvalidCodePoint { field: String, value: String },

    /// 키맵 값이 레이아웃 타입에 맞는 자모가 아님
    #[error("Key {key} maps to U+{value:04X}, which is not a jamo of this layout type")]
    UnexpectedJamo { key: String, value: u32 },
}

/// 명시적 자모 값으로 음절을 만들 때의 형태 위반
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// 초성은 있는데 중성 없이 종성만 있음
    #[error("If a lead is given and a vowel is not given, then a tail must not be given.")]
    TailWithoutVowel,

    /// 초성 없이 중성과 종성이 함께 있음
    #[error("If a lead is not given, then a vowel and a tail must not both be given.")]
    VowelAndTailWithoutLead,
}
