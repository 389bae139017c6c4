//! 문자열 단위 한글 처리: 조합, 분해, 길이, n-gram

use crate::automata::Composition;
use crate::syllable::Syllable;
use crate::unicode;

/// 자모 문자열을 음절로 조합한다. 한글이 아닌 문자는 그대로 둔다.
///
/// ```
/// assert_eq!(rsjamo::text::compose("ㄷㅏㄺㄱㅗㄱㅣ"), "닭고기");
/// assert_eq!(rsjamo::text::compose("ab cd"), "ab cd");
/// ```
pub fn compose(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut current = Syllable::empty();

    for ch in text.chars() {
        current = match current.compose(ch) {
            Composition::Extended(next) => next,
            Composition::Boundary { completed, next } => {
                out.extend(completed.scalar());
                next
            }
        };
    }
    out.extend(current.scalar());
    out
}

/// 문자열의 모든 음절을 자모로 분해한다.
///
/// - `use_compatibility`: 호환 자모(ㄱ) 또는 위치 자모(ᄀ)
/// - `split_compounds`: 겹자모(ㄲ, ㅘ, ㄺ)를 구성 요소로 나눌지
///
/// 이미 분해된 문자열을 같은 옵션으로 다시 분해해도 결과가 같다.
pub fn decompose(text: &str, use_compatibility: bool, split_compounds: bool) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        out.extend(Syllable::from_char(ch).decompose(use_compatibility, split_compounds));
    }
    out
}

/// 한글 한 글자를 `korean_width`로 세는 문자열 길이
///
/// ```
/// assert_eq!(rsjamo::text::length("일이삼123", 3), 12);
/// ```
pub fn length(text: &str, korean_width: usize) -> usize {
    text.chars()
        .map(|ch| if unicode::is_hangul(ch) { korean_width } else { 1 })
        .sum()
}

/// 한글(음절 또는 자모)이 하나라도 들어 있는지
pub fn contains_korean(text: &str) -> bool {
    text.chars().any(unicode::is_hangul)
}

/// 자모 단위 n-gram
///
/// 공백으로 나눈 단어마다 호환 자모로 분해해 길이 `n`의 창을 만든다.
/// `split_compounds`가 false면 각 창을 다시 조합해서 돌려준다.
pub fn ngram(text: &str, n: usize, split_compounds: bool) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(text.len() * 2);
    for word in text.split_whitespace() {
        let jamo: Vec<char> = word
            .chars()
            .flat_map(|ch| Syllable::from_char(ch).decompose(true, split_compounds))
            .collect();

        for window in jamo.windows(n) {
            let gram: String = window.iter().collect();
            if split_compounds {
                result.push(gram);
            } else {
                result.push(compose(&gram));
            }
        }
    }
    result
}
