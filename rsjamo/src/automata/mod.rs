//! 음절 조합 상태 기계, 입력기 오토마타 트레잇
pub mod jamo;

use crate::jamo::{Jamo, Lead, Tail, Vowel};
use crate::layout::KeyboardLayout;
use crate::syllable::Syllable;

/// 자모 하나를 음절에 조합한 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    /// 같은 음절 안에서 조합이 이어짐
    Extended(Syllable),
    /// 음절 경계: `completed`는 확정, `next`부터 새로 조합
    Boundary { completed: Syllable, next: Syllable },
}

impl Composition {
    pub(crate) fn boundary(completed: Syllable, next: Syllable) -> Self {
        log::trace!("syllable boundary: {completed:?} | {next:?}");
        Composition::Boundary { completed, next }
    }

    /// 조합 후 계속 조합 중인 음절
    pub fn current(&self) -> Syllable {
        match self {
            Composition::Extended(syllable) => *syllable,
            Composition::Boundary { next, .. } => *next,
        }
    }

    /// 경계에서 확정된 음절
    pub fn completed(&self) -> Option<Syllable> {
        match self {
            Composition::Extended(_) => None,
            Composition::Boundary { completed, .. } => Some(*completed),
        }
    }
}

impl Syllable {
    /// 조합 중인 음절에 문자 하나를 더한다.
    ///
    /// 초성/종성 겸용 자음은 현재 음절의 모양에 따라 자리가 정해진다.
    /// - 중성도 종성도 없으면 초성
    /// - 초성 없이 중성만 있으면 음절 경계
    /// - 그 외에는 종성
    ///
    /// ```
    /// use rsjamo::{Composition, Syllable};
    /// let han = Syllable::from_char('한');
    /// match han.compose('ㅏ') {
    ///     Composition::Boundary { completed, next } => {
    ///         assert_eq!(completed.to_string(), "하");
    ///         assert_eq!(next.to_string(), "나");
    ///     }
    ///     Composition::Extended(_) => unreachable!(),
    /// }
    /// ```
    pub fn compose(self, incoming: char) -> Composition {
        // 한글이 아닌 문자는 더 이상 조합되지 않는다
        if self.is_passthrough() {
            return Composition::boundary(self, Syllable::from_char(incoming));
        }

        let mut lead = Lead::find(incoming);
        let vowel = Vowel::find(incoming);
        let mut tail = Tail::find(incoming);

        if lead.is_some() && tail.is_some() {
            if self.vowel().is_none() && self.tail().is_none() {
                tail = None;
            } else if self.vowel().is_some() && self.lead().is_none() && self.tail().is_none() {
                return Composition::boundary(self, Syllable::from_char(incoming));
            } else {
                lead = None;
            }
        }

        if let Some(lead) = lead {
            self.compose_lead(lead)
        } else if let Some(vowel) = vowel {
            self.compose_vowel(vowel)
        } else if let Some(tail) = tail {
            self.compose_tail(tail)
        } else {
            Composition::boundary(self, Syllable::from_char(incoming))
        }
    }

    fn compose_lead(self, lead: Lead) -> Composition {
        let single = Syllable::from_parts(Some(lead), None, None);
        if self.vowel().is_some() || self.tail().is_some() {
            return Composition::boundary(self, single);
        }

        match self.lead() {
            None => Composition::Extended(single),
            Some(current) => match current.compose(lead) {
                Some(compound) => {
                    Composition::Extended(Syllable::from_parts(Some(compound), None, None))
                }
                None => Composition::boundary(self, single),
            },
        }
    }

    fn compose_vowel(self, vowel: Vowel) -> Composition {
        // 종성 뒤에 모음이 오면 종성이 다음 음절의 초성으로 넘어간다.
        // 초성이 될 수 없는 겹받침은 현재 음절에 남고 모음만 새 음절이 된다.
        if let Some(tail) = self.tail() {
            let Some(lead) = tail.to_lead() else {
                return Composition::boundary(self, Syllable::from_parts(None, Some(vowel), None));
            };
            let completed = Syllable::from_parts(self.lead(), self.vowel(), None);
            let next = Syllable::from_parts(Some(lead), Some(vowel), None);
            return Composition::boundary(completed, next);
        }

        match self.vowel() {
            None => Composition::Extended(Syllable::from_parts(self.lead(), Some(vowel), None)),
            Some(current) => match current.compose(vowel) {
                Some(compound) => {
                    Composition::Extended(Syllable::from_parts(self.lead(), Some(compound), None))
                }
                None => {
                    Composition::boundary(self, Syllable::from_parts(None, Some(vowel), None))
                }
            },
        }
    }

    fn compose_tail(self, tail: Tail) -> Composition {
        let single = Syllable::from_parts(None, None, Some(tail));
        if self.lead().is_some() != self.vowel().is_some() {
            return Composition::boundary(self, single);
        }

        match self.tail() {
            None => Composition::Extended(Syllable::from_parts(self.lead(), self.vowel(), Some(tail))),
            Some(current) => match current.compose(tail) {
                Some(compound) => Composition::Extended(Syllable::from_parts(
                    self.lead(),
                    self.vowel(),
                    Some(compound),
                )),
                None => Composition::boundary(self, single),
            },
        }
    }
}

/// 오토마타 처리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomataResult {
    /// 확정된 텍스트 (이전 조합이 완성된 경우)
    pub committed: Option<String>,
    /// 현재 조합 중인 텍스트
    pub composing: Option<String>,
    /// 키가 처리되었는지 (false면 시스템에 위임)
    pub handled: bool,
}

impl AutomataResult {
    pub fn handled(committed: Option<String>, composing: Option<String>) -> Self {
        AutomataResult {
            committed,
            composing,
            handled: true,
        }
    }

    pub fn not_handled() -> Self {
        AutomataResult {
            committed: None,
            composing: None,
            handled: false,
        }
    }
}

/// 입력기 오토마타 인터페이스
pub trait Automata {
    /// 자모 문자 하나를 처리한다.
    fn process(&mut self, ch: char, layout: &KeyboardLayout) -> AutomataResult;
    /// 백스페이스 처리 (한 단계 되돌림)
    fn backspace(&mut self) -> AutomataResult;
    /// 현재 조합을 확정하고 리셋한다.
    fn flush(&mut self) -> AutomataResult;
    /// 현재 조합 중인 텍스트를 반환한다.
    fn composing_text(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(current: char, incoming: char) -> Composition {
        Syllable::from_char(current).compose(incoming)
    }

    fn boundary(completed: &str, next: &str) -> (String, String) {
        (completed.to_string(), next.to_string())
    }

    fn as_pair(composition: Composition) -> (String, String) {
        match composition {
            Composition::Boundary { completed, next } => (completed.to_string(), next.to_string()),
            Composition::Extended(s) => panic!("expected boundary, got {s:?}"),
        }
    }

    fn extended(composition: Composition) -> Syllable {
        match composition {
            Composition::Extended(s) => s,
            other => panic!("expected extension, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_plus_jamo() {
        let empty = Syllable::empty();
        let s = extended(empty.compose('ㄱ'));
        assert_eq!(s.lead(), Some(Lead::Giyeok));
        assert_eq!(s.tail(), None);

        let s = extended(empty.compose('ㅏ'));
        assert_eq!(s.vowel(), Some(Vowel::A));

        // 종성 전용 겹받침
        let s = extended(empty.compose('ㄳ'));
        assert_eq!(s.tail(), Some(Tail::GiyeokSiot));
    }

    #[test]
    fn test_empty_plus_passthrough() {
        let composition = Syllable::empty().compose('a');
        assert_eq!(composition.completed(), Some(Syllable::empty()));
        assert_eq!(composition.current(), Syllable::from_char('a'));
    }

    #[test]
    fn test_passthrough_never_extends() {
        assert_eq!(as_pair(compose('a', 'ㄱ')), boundary("a", "ㄱ"));
        assert_eq!(as_pair(compose('a', 'b')), boundary("a", "b"));
        assert_eq!(as_pair(compose(' ', 'ㅏ')), boundary(" ", "ㅏ"));
    }

    #[test]
    fn test_lead_plus_vowel() {
        assert_eq!(extended(compose('ㄱ', 'ㅏ')).to_string(), "가");
        assert_eq!(extended(compose('ㅎ', 'ㅏ')).to_string(), "하");
    }

    #[test]
    fn test_lead_plus_lead() {
        // 쌍자음
        let s = extended(compose('ㄱ', 'ㄱ'));
        assert_eq!(s.lead(), Some(Lead::SsangGiyeok));
        assert_eq!(s.to_string(), "ㄲ");
        // 조합 불가
        assert_eq!(as_pair(compose('ㄱ', 'ㄴ')), boundary("ㄱ", "ㄴ"));
        // 초성 전용 자음은 중성 뒤에서 경계
        assert_eq!(as_pair(compose('가', 'ㄸ')), boundary("가", "ㄸ"));
    }

    #[test]
    fn test_vowel_only_plus_consonant() {
        let pair = compose('ㅏ', 'ㄱ');
        assert_eq!(as_pair(pair), boundary("ㅏ", "ㄱ"));
        assert_eq!(pair.current().lead(), Some(Lead::Giyeok));
    }

    #[test]
    fn test_syllable_plus_tail() {
        let s = extended(compose('하', 'ㄴ'));
        assert_eq!(s.to_string(), "한");
        assert_eq!(s.tail(), Some(Tail::Nieun));

        let s = extended(compose('다', 'ㄹ'));
        let s = extended(s.compose('ㄱ'));
        assert_eq!(s.to_string(), "닭");

        // 겹받침 불가
        let pair = compose('한', 'ㄱ');
        assert_eq!(as_pair(pair), boundary("한", "ㄱ"));
        assert_eq!(pair.current().tail(), Some(Tail::Giyeok));
        assert_eq!(pair.current().lead(), None);
    }

    #[test]
    fn test_lead_plus_tail_only_consonant() {
        assert_eq!(as_pair(compose('ㄱ', 'ㄳ')), boundary("ㄱ", "ㄳ"));
        assert_eq!(as_pair(compose('ㅏ', 'ㄳ')), boundary("ㅏ", "ㄳ"));
    }

    #[test]
    fn test_tail_migrates_to_next_lead() {
        assert_eq!(as_pair(compose('한', 'ㅏ')), boundary("하", "나"));
        assert_eq!(as_pair(compose('갂', 'ㅏ')), boundary("가", "까"));
    }

    #[test]
    fn test_lone_tail_migrates_without_completed_text() {
        let tail = Syllable::new(None, None, Some(Tail::Giyeok)).unwrap();
        let composition = tail.compose('ㅣ');
        assert_eq!(composition.completed(), Some(Syllable::empty()));
        assert_eq!(composition.current().to_string(), "기");
    }

    #[test]
    fn test_compound_tail_without_lead_stays() {
        assert_eq!(as_pair(compose('닭', 'ㅏ')), boundary("닭", "ㅏ"));
        assert_eq!(as_pair(compose('값', 'ㅣ')), boundary("값", "ㅣ"));
        assert_eq!(as_pair(compose('ㄳ', 'ㅏ')), boundary("ㄳ", "ㅏ"));
    }

    #[test]
    fn test_vowel_compound() {
        let s = extended(compose('고', 'ㅏ'));
        assert_eq!(s.to_string(), "과");
        let s = extended(compose('ㅡ', 'ㅣ'));
        assert_eq!(s.to_string(), "ㅢ");
        assert_eq!(as_pair(compose('가', 'ㅏ')), boundary("가", "ㅏ"));
    }

    #[test]
    fn test_non_jamo_after_hangul() {
        assert_eq!(as_pair(compose('한', ' ')), boundary("한", " "));
        assert_eq!(as_pair(compose('ㄱ', '가')), boundary("ㄱ", "가"));
    }

    #[test]
    fn test_conjoining_input() {
        let s = extended(Syllable::empty().compose('\u{1112}'));
        let s = extended(s.compose('\u{1161}'));
        let s = extended(s.compose('\u{11AB}'));
        assert_eq!(s.to_string(), "한");
    }

    #[test]
    fn test_automata_result() {
        let r = AutomataResult::handled(Some("가".to_string()), None);
        assert!(r.handled);
        assert_eq!(r.committed.as_deref(), Some("가"));
        assert!(!AutomataResult::not_handled().handled);
    }
}
