//! 한글 유니코드 상수 및 유틸리티
//!
//! - 음절 합성/분해 (SBase 공식)
//! - 호환 자모 / 위치 자모 범위 판별
//! - 한글 문자 판별

use crate::jamo::{Jamo, Lead, Tail, Vowel};

// ── 한글 유니코드 상수 ──

/// 한글 음절 시작 '가' (U+AC00)
pub const S_BASE: u32 = 0xAC00;
/// 한글 음절 끝 '힣' (U+D7A3)
pub const S_LAST: u32 = 0xD7A3;
/// 초성 시작 'ᄀ' (U+1100)
pub const L_BASE: u32 = 0x1100;
/// 중성 시작 'ᅡ' (U+1161)
pub const V_BASE: u32 = 0x1161;
/// 종성 기준 (U+11A7), 종성 없음은 0
pub const T_BASE: u32 = 0x11A7;

pub const L_COUNT: u32 = 19;
pub const V_COUNT: u32 = 21;
pub const T_COUNT: u32 = 28;
pub const N_COUNT: u32 = V_COUNT * T_COUNT; // 588
pub const S_COUNT: u32 = L_COUNT * N_COUNT; // 11172

// ── 호환 자모 범위 (U+3131 ~ U+3163) ──

/// 호환 자모 자음 시작 'ㄱ' (U+3131)
pub const COMPAT_CONSONANT_START: u32 = 0x3131;
/// 호환 자모 자음 끝 'ㅎ' (U+314E)
pub const COMPAT_CONSONANT_END: u32 = 0x314E;
/// 호환 자모 모음 시작 'ㅏ' (U+314F)
pub const COMPAT_VOWEL_START: u32 = 0x314F;
/// 호환 자모 모음 끝 'ㅣ' (U+3163)
pub const COMPAT_VOWEL_END: u32 = 0x3163;

// ── 음절 합성/분해 ──

/// 초성(L), 중성(V), 종성(T) 인덱스로 한글 음절을 합성한다.
/// - `l`: 초성 인덱스 (0~18)
/// - `v`: 중성 인덱스 (0~20)
/// - `t`: 종성 인덱스 (0~27, 0이면 종성 없음)
pub fn compose_syllable(l: u32, v: u32, t: u32) -> Option<char> {
    if l >= L_COUNT || v >= V_COUNT || t >= T_COUNT {
        return None;
    }
    char::from_u32(S_BASE + l * N_COUNT + v * T_COUNT + t)
}

/// 한글 음절을 초성(L), 중성(V), 종성(T) 인덱스로 분해한다.
/// 종성이 없으면 t = 0.
pub fn decompose_syllable(ch: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(ch) {
        return None;
    }
    let offset = ch as u32 - S_BASE;
    Some((offset / N_COUNT, (offset % N_COUNT) / T_COUNT, offset % T_COUNT))
}

/// 한글 완성형 음절인지 (가~힣)
pub fn is_syllable(ch: char) -> bool {
    (S_BASE..=S_LAST).contains(&(ch as u32))
}

// ── 자모 범위 판별 ──

/// 호환 자모 자음인지 판별 (ㄱ~ㅎ, 겹자모 포함 0x3131~0x314E)
pub fn is_compat_consonant(ch: char) -> bool {
    (COMPAT_CONSONANT_START..=COMPAT_CONSONANT_END).contains(&(ch as u32))
}

/// 호환 자모 모음인지 판별 (ㅏ~ㅣ, 0x314F~0x3163)
pub fn is_compat_vowel(ch: char) -> bool {
    (COMPAT_VOWEL_START..=COMPAT_VOWEL_END).contains(&(ch as u32))
}

/// 위치 초성인지 (U+1100~U+1112)
pub fn is_choseong(ch: char) -> bool {
    (L_BASE..L_BASE + L_COUNT).contains(&(ch as u32))
}

/// 위치 중성인지 (U+1161~U+1175)
pub fn is_jungseong(ch: char) -> bool {
    (V_BASE..V_BASE + V_COUNT).contains(&(ch as u32))
}

/// 위치 종성인지 (U+11A8~U+11C2)
pub fn is_jongseong(ch: char) -> bool {
    (T_BASE + 1..T_BASE + T_COUNT).contains(&(ch as u32))
}

/// 한글 문자인지: 완성형 음절 또는 현대 한글 자모(호환/위치)
pub fn is_hangul(ch: char) -> bool {
    is_syllable(ch) || Lead::find(ch).is_some() || Vowel::find(ch).is_some() || Tail::find(ch).is_some()
}
