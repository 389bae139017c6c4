//! JSON5 자판 레이아웃 스키마용 serde 타입
use std::collections::HashMap;

use serde::Deserialize;

use crate::unicode;

/// 키맵 값의 인코딩: 호환 자모(jamo) 또는 위치 자모(jaso)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// 호환 자모 (U+3131~U+3163)
    Jamo,
    /// 위치 자모 (초성 U+1100~, 중성 U+1161~, 종성 U+11A8~)
    Jaso,
}

impl LayoutType {
    /// 이 타입의 키맵에 올 수 있는 자모인지
    pub fn accepts(self, ch: char) -> bool {
        match self {
            LayoutType::Jamo => unicode::is_compat_consonant(ch) || unicode::is_compat_vowel(ch),
            LayoutType::Jaso => {
                unicode::is_choseong(ch) || unicode::is_jungseong(ch) || unicode::is_jongseong(ch)
            }
        }
    }
}

/// 겹자모 조합 규칙 한 줄
#[derive(Debug, Clone, Deserialize)]
pub struct CombinationEntry {
    pub first: String,
    pub second: String,
    pub result: String,
}

/// JSON5 레이아웃 최상위 스키마
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSchema {
    /// 레이아웃 식별자 (예: "2-standard")
    pub id: String,
    /// 표시 이름 (예: "두벌식 표준")
    pub name: String,
    #[serde(rename = "type")]
    pub layout_type: LayoutType,
    /// 키 레이블 → 16진수 코드포인트 ("0x3131")
    pub keymap: HashMap<String, String>,
    #[serde(default)]
    pub combinations: Vec<CombinationEntry>,
}
