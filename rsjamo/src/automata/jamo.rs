//! 두벌식(2-beolsik) 입력 오토마타
//!
//! `Syllable::compose` 위에서 동작한다. 입력기에서만 필요한 규칙 두 가지를 더한다.
//! - 겹자모는 레이아웃의 조합 규칙에 있는 것만 만든다 (ㄱ+ㄱ은 ㄲ이 되지 않는다)
//! - 초성이 될 수 없는 겹받침 뒤에 모음이 오면 겹받침을 나눠 둘째 자음을 넘긴다

use crate::jamo::{Jamo, Lead, Tail, Vowel};
use crate::layout::KeyboardLayout;
use crate::layout::schema::LayoutType;
use crate::syllable::Syllable;

use super::{Automata, AutomataResult, Composition};

/// 두벌식 오토마타
///
/// 현재 음절이 만들어진 단계를 모두 기억하므로 백스페이스는
/// 입력한 자모 하나만 정확히 되돌린다.
#[derive(Debug, Clone, Default)]
pub struct JamoComposer {
    /// 현재 음절의 조합 단계 (마지막이 현재 상태)
    history: Vec<Syllable>,
}

impl JamoComposer {
    pub fn new() -> Self {
        JamoComposer {
            history: Vec::with_capacity(6),
        }
    }

    /// 현재 조합 중인 음절
    pub fn current(&self) -> Syllable {
        self.history.last().copied().unwrap_or_default()
    }

    fn step(&self, ch: char, layout: &KeyboardLayout) -> Composition {
        let current = self.current();
        if let Some(split) = split_compound_tail(current, ch) {
            return split;
        }

        match current.compose(ch) {
            Composition::Extended(next) if !layout_allows(layout, current, next, ch) => {
                Composition::boundary(current, Syllable::from_char(ch))
            }
            composition => composition,
        }
    }
}

/// 겹받침 + 모음: 첫째 자음은 받침으로 남고 둘째 자음이 다음 초성이 된다.
/// (갑 + ㅅ + ㅣ → 갑 + 시)
fn split_compound_tail(current: Syllable, ch: char) -> Option<Composition> {
    let tail = current.tail()?;
    let vowel = Vowel::find(ch)?;
    if tail.to_lead().is_some() {
        return None;
    }

    let mut parts = tail.components(true).chars();
    let first = parts.next().and_then(Tail::find)?;
    let second = parts.next().and_then(Lead::find)?;

    Some(Composition::boundary(
        Syllable::from_parts(current.lead(), current.vowel(), Some(first)),
        Syllable::from_parts(Some(second), Some(vowel), None),
    ))
}

/// 새 겹자모가 생겼다면 레이아웃 조합 규칙에 있는 것인지 확인한다.
fn layout_allows(layout: &KeyboardLayout, before: Syllable, after: Syllable, ch: char) -> bool {
    let use_compatibility = layout.layout_type == LayoutType::Jamo;
    let Some((first, compound)) = changed_slot(before, after, use_compatibility) else {
        return true;
    };
    layout
        .combine(first, ch)
        .and_then(|result| Syllable::from_char(result).scalar())
        == Some(compound)
}

/// 이미 채워져 있다가 다른 자모로 바뀐 자리: (원래 자모의 레이아웃 인코딩, 새 자모의 호환 자모)
fn changed_slot(before: Syllable, after: Syllable, use_compatibility: bool) -> Option<(char, char)> {
    fn slot<J: Jamo>(before: Option<J>, after: Option<J>, use_compatibility: bool) -> Option<(char, char)> {
        match (before, after) {
            (Some(b), Some(a)) if a != b => Some((b.encoded(use_compatibility), a.compatibility())),
            _ => None,
        }
    }

    slot(before.lead(), after.lead(), use_compatibility)
        .or_else(|| slot(before.vowel(), after.vowel(), use_compatibility))
        .or_else(|| slot(before.tail(), after.tail(), use_compatibility))
}

fn is_jamo(ch: char) -> bool {
    Lead::find(ch).is_some() || Vowel::find(ch).is_some() || Tail::find(ch).is_some()
}

impl Automata for JamoComposer {
    fn process(&mut self, ch: char, layout: &KeyboardLayout) -> AutomataResult {
        if !is_jamo(ch) {
            // 자모가 아닌 입력 → 현재 조합 확정 후 시스템에 위임
            let mut result = self.flush();
            result.handled = false;
            return result;
        }

        match self.step(ch, layout) {
            Composition::Extended(next) => {
                self.history.push(next);
                AutomataResult::handled(None, self.composing_text())
            }
            Composition::Boundary { completed, next } => {
                self.history.clear();
                // 종성이 넘어온 음절은 초성만 있던 단계부터 되돌릴 수 있게 한다
                if next.lead().is_some() && next.vowel().is_some() {
                    self.history.push(Syllable::from_parts(next.lead(), None, None));
                }
                self.history.push(next);
                AutomataResult::handled(
                    completed.scalar().map(String::from),
                    self.composing_text(),
                )
            }
        }
    }

    fn backspace(&mut self) -> AutomataResult {
        let Some(removed) = self.history.pop() else {
            return AutomataResult::not_handled();
        };
        log::trace!("backspace: {removed:?} -> {:?}", self.current());
        AutomataResult::handled(None, self.composing_text())
    }

    fn flush(&mut self) -> AutomataResult {
        let committed = self.composing_text();
        self.history.clear();
        AutomataResult::handled(committed, None)
    }

    fn composing_text(&self) -> Option<String> {
        self.current().scalar().map(String::from)
    }
}
