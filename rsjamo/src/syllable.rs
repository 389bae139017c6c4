//! 음절(Syllable) 모델
//!
//! 초성/중성/종성 최대 세 자모를 담는 값 타입. 허용되는 모양은
//! 빈 음절, 자모 하나, 초성+중성, 초성+중성+종성 네 가지뿐이다.
//! 한글이 아닌 문자는 자모 없이 `scalar`만 가진 음절(패스스루)로 표현한다.

use std::fmt;

use crate::error::ConstructionError;
use crate::jamo::{Jamo, Lead, Tail, Vowel};
use crate::unicode;

/// 한글 음절 하나 (또는 한글이 아닌 문자 하나)
///
/// `scalar`는 자모로부터 계산되는 값이며 따로 설정되지 않는다.
/// 정렬은 `scalar` 기준이고 빈 음절이 가장 앞선다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Syllable {
    scalar: Option<char>,
    lead: Option<Lead>,
    vowel: Option<Vowel>,
    tail: Option<Tail>,
}

impl Syllable {
    /// 빈 음절 (조합 시작 상태)
    pub const fn empty() -> Self {
        Syllable {
            scalar: None,
            lead: None,
            vowel: None,
            tail: None,
        }
    }

    /// 명시적 자모로 음절을 만든다.
    ///
    /// | 초성 | 중성 | 종성 | 결과 |
    /// | ---- | ---- | ---- | ---- |
    /// | ㅎ   | ㅏ   | ㄴ   | 한   |
    /// | ㅎ   |      | ㄴ   | `TailWithoutVowel` |
    /// |      | ㅏ   | ㄴ   | `VowelAndTailWithoutLead` |
    /// |      |      | ㄴ   | ㄴ   |
    pub fn new(
        lead: Option<Lead>,
        vowel: Option<Vowel>,
        tail: Option<Tail>,
    ) -> Result<Self, ConstructionError> {
        match (lead, vowel, tail) {
            (Some(_), None, Some(_)) => Err(ConstructionError::TailWithoutVowel),
            (None, Some(_), Some(_)) => Err(ConstructionError::VowelAndTailWithoutLead),
            _ => Ok(Self::from_parts(lead, vowel, tail)),
        }
    }

    /// 모양 검사를 마친 자모로 음절을 만든다.
    pub(crate) fn from_parts(lead: Option<Lead>, vowel: Option<Vowel>, tail: Option<Tail>) -> Self {
        let scalar = match (lead, vowel, tail) {
            (Some(l), Some(v), t) => unicode::compose_syllable(
                l.index() as u32,
                v.index() as u32,
                t.map_or(0, |t| t.index() as u32 + 1),
            ),
            (Some(l), None, _) => Some(l.compatibility()),
            (None, Some(v), _) => Some(v.compatibility()),
            (None, None, Some(t)) => Some(t.compatibility()),
            (None, None, None) => None,
        };
        Syllable {
            scalar,
            lead,
            vowel,
            tail,
        }
    }

    /// 문자 하나를 음절로 분류한다.
    ///
    /// - 완성형 음절(가~힣)은 산술로 분해한다.
    /// - 초성이면서 종성도 되는 자음(ㄱ, ㄴ, ...)은 초성으로 본다.
    /// - 어느 자모 테이블에도 없는 문자는 패스스루 음절이 된다.
    pub fn from_char(ch: char) -> Self {
        if let Some((l, v, t)) = unicode::decompose_syllable(ch) {
            return Syllable {
                scalar: Some(ch),
                lead: Lead::from_index(l as usize),
                vowel: Vowel::from_index(v as usize),
                tail: t.checked_sub(1).and_then(|t| Tail::from_index(t as usize)),
            };
        }

        let lead = Lead::find(ch);
        let vowel = Vowel::find(ch);
        let tail = if lead.is_none() { Tail::find(ch) } else { None };

        if lead.is_none() && vowel.is_none() && tail.is_none() {
            return Syllable {
                scalar: Some(ch),
                ..Self::empty()
            };
        }
        Self::from_parts(lead, vowel, tail)
    }

    /// 문자열의 각 문자를 음절로 변환한다.
    pub fn from_text(text: &str) -> Vec<Syllable> {
        text.chars().map(Syllable::from_char).collect()
    }

    pub fn lead(&self) -> Option<Lead> {
        self.lead
    }

    pub fn vowel(&self) -> Option<Vowel> {
        self.vowel
    }

    pub fn tail(&self) -> Option<Tail> {
        self.tail
    }

    /// 이 음절이 나타내는 문자
    pub fn scalar(&self) -> Option<char> {
        self.scalar
    }

    pub fn is_empty(&self) -> bool {
        self.scalar.is_none()
    }

    /// 자모를 하나라도 가졌는지
    pub fn has_jamo(&self) -> bool {
        self.lead.is_some() || self.vowel.is_some() || self.tail.is_some()
    }

    /// 한글이 아닌 문자를 그대로 담은 음절인지
    pub fn is_passthrough(&self) -> bool {
        self.scalar.is_some() && !self.has_jamo()
    }

    /// 음절을 자모 문자들로 분해한다.
    ///
    /// - `use_compatibility`: true면 호환 자모, false면 위치 자모
    /// - `split_compounds`: true면 겹자모를 구성 요소로 나눈다
    ///
    /// 자모가 없으면 `scalar` 자체(빈 음절이면 빈 목록)를 돌려준다.
    pub fn decompose(&self, use_compatibility: bool, split_compounds: bool) -> Vec<char> {
        let mut out = Vec::with_capacity(6);
        push_jamo(&mut out, self.lead, use_compatibility, split_compounds);
        push_jamo(&mut out, self.vowel, use_compatibility, split_compounds);
        push_jamo(&mut out, self.tail, use_compatibility, split_compounds);

        if out.is_empty() {
            out.extend(self.scalar);
        }
        out
    }

    /// `probe`가 이 음절에 포함되는지 (부분 일치)
    ///
    /// `probe`가 지정한 자모 자리는 모두 같아야 하고, 비워 둔 자리는
    /// 무엇이든 허용한다. 어느 한쪽이 한글이 아니면 문자 그대로 비교한다.
    ///
    /// ```
    /// use rsjamo::Syllable;
    /// let han = Syllable::from_char('한');
    /// assert!(han.include(&Syllable::from_char('ㅎ')));
    /// assert!(han.include(&Syllable::from_char('하')));
    /// assert!(!han.include(&Syllable::from_char('반')));
    /// ```
    pub fn include(&self, probe: &Syllable) -> bool {
        let Some(scalar) = self.scalar else {
            return probe.scalar.is_none();
        };
        if probe.scalar.is_none() {
            return false;
        }
        if !self.has_jamo() || !probe.has_jamo() {
            return probe.scalar == Some(scalar);
        }

        probe.lead.is_none_or(|l| self.lead == Some(l))
            && probe.vowel.is_none_or(|v| self.vowel == Some(v))
            && probe.tail.is_none_or(|t| self.tail == Some(t))
    }
}

fn push_jamo<J: Jamo>(out: &mut Vec<char>, jamo: Option<J>, use_compatibility: bool, split: bool) {
    let Some(jamo) = jamo else { return };
    if split {
        out.extend(jamo.components(use_compatibility).chars());
    } else {
        out.push(jamo.encoded(use_compatibility));
    }
}

impl From<char> for Syllable {
    fn from(ch: char) -> Self {
        Syllable::from_char(ch)
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scalar {
            Some(ch) => write!(f, "{ch}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty() {
        let s = Syllable::empty();
        assert_eq!(s.scalar(), None);
        assert_eq!(s.lead(), None);
        assert_eq!(s.vowel(), None);
        assert_eq!(s.tail(), None);
        assert!(s.is_empty());
        assert_eq!(s.to_string(), "");
        assert_eq!(Syllable::default(), s);
    }

    #[test]
    fn test_from_char_passthrough() {
        for ch in [' ', 'a', '1', '道'] {
            let s = Syllable::from_char(ch);
            assert_eq!(s.scalar(), Some(ch));
            assert!(!s.has_jamo());
            assert!(s.is_passthrough());
        }
    }

    #[test]
    fn test_from_char_syllable() {
        let s = Syllable::from_char('한');
        assert_eq!(s.scalar(), Some('한'));
        assert_eq!(s.lead(), Some(Lead::Hieut));
        assert_eq!(s.vowel(), Some(Vowel::A));
        assert_eq!(s.tail(), Some(Tail::Nieun));

        let s = Syllable::from_char('하');
        assert_eq!(s.lead(), Some(Lead::Hieut));
        assert_eq!(s.vowel(), Some(Vowel::A));
        assert_eq!(s.tail(), None);

        let s = Syllable::from_char('힣');
        assert_eq!(s.lead(), Some(Lead::Hieut));
        assert_eq!(s.vowel(), Some(Vowel::I));
        assert_eq!(s.tail(), Some(Tail::Hieut));
    }

    #[test]
    fn test_from_char_jamo() {
        // 초성/종성 겸용 자음은 초성으로
        let s = Syllable::from_char('ㄱ');
        assert_eq!(s.lead(), Some(Lead::Giyeok));
        assert_eq!(s.tail(), None);
        assert_eq!(s.scalar(), Some('ㄱ'));

        let s = Syllable::from_char('ㅏ');
        assert_eq!(s.vowel(), Some(Vowel::A));
        assert_eq!(s.lead(), None);

        // 겹받침은 종성으로만 존재
        let s = Syllable::from_char('ㄵ');
        assert_eq!(s.lead(), None);
        assert_eq!(s.tail(), Some(Tail::NieunJieut));

        // 위치 자모
        let s = Syllable::from_char('\u{1100}');
        assert_eq!(s.lead(), Some(Lead::Giyeok));
        assert_eq!(s.scalar(), Some('ㄱ'));
        let s = Syllable::from_char('\u{1161}');
        assert_eq!(s.vowel(), Some(Vowel::A));
        let s = Syllable::from_char('\u{11AC}');
        assert_eq!(s.tail(), Some(Tail::NieunJieut));
        assert_eq!(s.lead(), None);
    }

    #[test]
    fn test_new() {
        let s = Syllable::new(Some(Lead::Hieut), Some(Vowel::A), Some(Tail::Nieun)).unwrap();
        assert_eq!(s.scalar(), Some('한'));
        let s = Syllable::new(Some(Lead::Hieut), Some(Vowel::A), None).unwrap();
        assert_eq!(s.scalar(), Some('하'));
        let s = Syllable::new(Some(Lead::Hieut), None, None).unwrap();
        assert_eq!(s.scalar(), Some('ㅎ'));
        let s = Syllable::new(None, Some(Vowel::A), None).unwrap();
        assert_eq!(s.scalar(), Some('ㅏ'));
        let s = Syllable::new(None, None, Some(Tail::Nieun)).unwrap();
        assert_eq!(s.scalar(), Some('ㄴ'));
        let s = Syllable::new(None, None, None).unwrap();
        assert_eq!(s.scalar(), None);

        assert_eq!(
            Syllable::new(Some(Lead::Hieut), None, Some(Tail::Nieun)),
            Err(ConstructionError::TailWithoutVowel)
        );
        assert_eq!(
            Syllable::new(None, Some(Vowel::A), Some(Tail::Nieun)),
            Err(ConstructionError::VowelAndTailWithoutLead)
        );
    }

    #[test]
    fn test_new_matches_from_char() {
        let built = Syllable::new(Some(Lead::Giyeok), Some(Vowel::A), None).unwrap();
        assert_eq!(built, Syllable::from_char('가'));
    }

    #[test]
    fn test_every_syllable_round_trips_through_parts() {
        for code in unicode::S_BASE..=unicode::S_LAST {
            let ch = char::from_u32(code).unwrap();
            let s = Syllable::from_char(ch);
            let rebuilt = Syllable::new(s.lead(), s.vowel(), s.tail()).unwrap();
            assert_eq!(rebuilt.scalar(), Some(ch));
        }
    }

    #[test]
    fn test_decompose_compat_split() {
        assert_eq!(Syllable::empty().decompose(true, true), chars(""));
        assert_eq!(Syllable::from_char('a').decompose(true, true), chars("a"));
        assert_eq!(Syllable::from_char('ㅎ').decompose(true, true), chars("ㅎ"));
        assert_eq!(Syllable::from_char('하').decompose(true, true), chars("ㅎㅏ"));
        assert_eq!(Syllable::from_char('한').decompose(true, true), chars("ㅎㅏㄴ"));
        assert_eq!(Syllable::from_char('ㅘ').decompose(true, true), chars("ㅗㅏ"));
        assert_eq!(Syllable::from_char('\u{11AC}').decompose(true, true), chars("ㄴㅈ"));
    }

    #[test]
    fn test_decompose_compat_keep() {
        assert_eq!(Syllable::from_char('한').decompose(true, false), chars("ㅎㅏㄴ"));
        assert_eq!(Syllable::from_char('ㅘ').decompose(true, false), chars("ㅘ"));
        assert_eq!(Syllable::from_char('\u{11AC}').decompose(true, false), chars("ㄵ"));
        assert_eq!(Syllable::from_char('닭').decompose(true, false), chars("ㄷㅏㄺ"));
    }

    #[test]
    fn test_decompose_conjoining() {
        assert_eq!(Syllable::from_char('a').decompose(false, true), chars("a"));
        assert_eq!(Syllable::from_char('ㅎ').decompose(false, true), chars("\u{1112}"));
        assert_eq!(
            Syllable::from_char('한').decompose(false, true),
            chars("\u{1112}\u{1161}\u{11AB}")
        );
        assert_eq!(Syllable::from_char('ㅘ').decompose(false, true), chars("\u{1169}\u{1161}"));
        assert_eq!(Syllable::from_char('ㅘ').decompose(false, false), chars("\u{116A}"));
        assert_eq!(
            Syllable::from_char('\u{11AC}').decompose(false, true),
            chars("\u{11AB}\u{11BD}")
        );
        assert_eq!(Syllable::from_char('\u{11AC}').decompose(false, false), chars("\u{11AC}"));
    }

    #[test]
    fn test_include() {
        let han = Syllable::from_char('한');
        assert!(han.include(&Syllable::from_char('ㅎ')));
        assert!(han.include(&Syllable::from_char('ㅏ')));
        assert!(han.include(&Syllable::from_char('하')));
        assert!(han.include(&Syllable::from_char('한')));
        // 홀로 쓴 'ㄴ'은 초성으로 분류되므로 종성 ㄴ과 다르다
        assert!(!han.include(&Syllable::from_char('ㄴ')));
        assert!(han.include(&Syllable::new(None, None, Some(Tail::Nieun)).unwrap()));
        assert!(!han.include(&Syllable::from_char('반')));
        assert!(!han.include(&Syllable::from_char('A')));
    }

    #[test]
    fn test_include_is_asymmetric() {
        let han = Syllable::from_char('한');
        let h = Syllable::from_char('ㅎ');
        assert!(han.include(&h));
        assert!(!h.include(&han));
    }

    #[test]
    fn test_include_empty_and_passthrough() {
        let empty = Syllable::empty();
        let a = Syllable::from_char('a');
        assert!(empty.include(&empty));
        assert!(!empty.include(&a));
        assert!(!a.include(&empty));
        assert!(a.include(&a));
        assert!(!a.include(&Syllable::from_char('b')));
        assert!(!a.include(&Syllable::from_char('ㄱ')));
    }

    #[test]
    fn test_include_every_slot_of_every_syllable() {
        for code in (unicode::S_BASE..=unicode::S_LAST).step_by(7) {
            let s = Syllable::from_char(char::from_u32(code).unwrap());
            assert!(s.include(&s));
            let lead = Syllable::new(s.lead(), None, None).unwrap();
            let vowel = Syllable::new(None, s.vowel(), None).unwrap();
            assert!(s.include(&lead));
            assert!(s.include(&vowel));
            if let Some(tail) = s.tail() {
                assert!(s.include(&Syllable::new(None, None, Some(tail)).unwrap()));
            }
            let other = Vowel::ALL.iter().copied().find(|v| Some(*v) != s.vowel());
            assert!(!s.include(&Syllable::new(None, other, None).unwrap()));
        }
    }

    #[test]
    fn test_ordering() {
        assert!(Syllable::from_char('가') < Syllable::from_char('힣'));
        assert!(Syllable::empty() < Syllable::from_char(' '));
    }

    #[test]
    fn test_display_and_from_text() {
        let text: String = Syllable::from_text("hello 한글").iter().map(|s| s.to_string()).collect();
        assert_eq!(text, "hello 한글");
    }
}
