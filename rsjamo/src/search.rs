//! 자모 단위 문자열 검색
//!
//! 검색어의 각 글자는 덜 완성된 음절이어도 된다. "ㅎㄱㄷ"은 "홍길동"에
//! 포함되고, "홍ㄱ"으로 시작하며, "ㅇ길동"으로 끝난다.

use crate::jamo::Jamo;
use crate::syllable::Syllable;

/// `query`가 `text` 어딘가에 자모 단위로 포함되는지
///
/// ```
/// use rsjamo::search::contains;
/// assert!(contains("홍길동", "ㅎㄱㄷ"));
/// assert!(contains("홍길동", "길ㄷ"));
/// assert!(!contains("홍길동", "김"));
/// ```
pub fn contains(text: &str, query: &str) -> bool {
    let text = Syllable::from_text(text);
    let query = Syllable::from_text(query);
    if text.is_empty() || query.is_empty() || query.len() > text.len() {
        return false;
    }

    text.windows(query.len())
        .any(|window| window.iter().zip(&query).all(|(t, q)| t.include(q)))
}

/// `text`가 `prefix`로 시작하는지.
/// 마지막 글자만 덜 완성되어도 되고 나머지는 음절 전체가 같아야 한다.
pub fn starts_with(text: &str, prefix: &str) -> bool {
    let text = Syllable::from_text(text);
    let prefix = Syllable::from_text(prefix);
    if prefix.is_empty() {
        return true;
    }
    if prefix.len() > text.len() {
        return false;
    }

    let last = prefix.len() - 1;
    prefix
        .iter()
        .zip(&text)
        .enumerate()
        .all(|(i, (p, t))| matches_affix(t, p, i == last))
}

/// `text`가 `suffix`로 끝나는지.
/// 첫 글자만 덜 완성되어도 된다. 첫 글자가 홀로 쓴 자음이면 받침으로 본다.
///
/// ```
/// use rsjamo::search::ends_with;
/// assert!(ends_with("홍길동", "ㅇ길동"));
/// assert!(ends_with("홍길동", "ㄹ동"));
/// assert!(!ends_with("홍길동", "길ㄷ"));
/// ```
pub fn ends_with(text: &str, suffix: &str) -> bool {
    let text = Syllable::from_text(text);
    let mut suffix = Syllable::from_text(suffix);
    if suffix.is_empty() {
        return true;
    }
    if suffix.len() > text.len() {
        return false;
    }

    if let Some(first) = suffix.first_mut() {
        *first = lead_as_tail(*first);
    }

    let offset = text.len() - suffix.len();
    suffix
        .iter()
        .zip(&text[offset..])
        .enumerate()
        .all(|(i, (s, t))| matches_affix(t, s, i == 0))
}

/// 홀로 쓴 초성을 같은 소리의 종성으로 바꾼다. (ㅇ → 받침 ㅇ)
fn lead_as_tail(syllable: Syllable) -> Syllable {
    match (syllable.lead(), syllable.vowel(), syllable.tail()) {
        (Some(lead), None, None) => match lead.to_tail() {
            Some(tail) => Syllable::from_parts(None, None, Some(tail)),
            None => syllable,
        },
        _ => syllable,
    }
}

/// 접두/접미 비교. `lenient`인 글자에서는 검색어가 비워 둔 자리를 허용한다.
fn matches_affix(text: &Syllable, affix: &Syllable, lenient: bool) -> bool {
    if !text.has_jamo() || !affix.has_jamo() {
        return text.scalar() == affix.scalar();
    }

    slot_matches(text.lead(), affix.lead(), lenient)
        && slot_matches(text.vowel(), affix.vowel(), lenient)
        && slot_matches(text.tail(), affix.tail(), lenient)
}

fn slot_matches<J: Jamo>(text: Option<J>, affix: Option<J>, lenient: bool) -> bool {
    match (text, affix) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(_), None) => lenient,
        (Some(t), Some(a)) => t == a,
    }
}
