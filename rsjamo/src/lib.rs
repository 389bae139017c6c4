//! 한글 자모 조합/분해, 자모 단위 검색, 두벌식 입력 엔진
//!
//! Rust에서는 각 모듈을 직접 쓰고, Swift/Kotlin 등에는 UniFFI로
//! `HangulEngine`과 문자열 함수들을 내보낸다.

pub mod automata;
pub mod engine;
pub mod error;
pub mod jamo;
pub mod josa;
pub mod layout;
pub mod search;
pub mod syllable;
pub mod text;
pub mod unicode;

use std::sync::{Mutex, MutexGuard, PoisonError};

use automata::AutomataResult;
use engine::EngineState;

pub use automata::{Automata, Composition};
pub use error::{ConstructionError, HangulError, Result};
pub use jamo::{Lead, Tail, Vowel};
pub use layout::KeyboardLayout;
pub use syllable::Syllable;

uniffi::setup_scaffolding!();

/// 키 처리 결과 (UniFFI → Swift 전달용)
#[derive(uniffi::Record, Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// 확정된 텍스트
    pub committed: Option<String>,
    /// 조합 중인 텍스트
    pub composing: Option<String>,
    /// 키가 처리되었는지 (false면 시스템에 위임)
    pub handled: bool,
}

impl From<AutomataResult> for ProcessResult {
    fn from(result: AutomataResult) -> Self {
        ProcessResult {
            committed: result.committed,
            composing: result.composing,
            handled: result.handled,
        }
    }
}

/// 입력 모드 (UniFFI enum)
#[derive(uniffi::Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    English,
    Korean,
}

impl From<engine::InputMode> for InputMode {
    fn from(mode: engine::InputMode) -> Self {
        match mode {
            engine::InputMode::English => InputMode::English,
            engine::InputMode::Korean => InputMode::Korean,
        }
    }
}

impl From<InputMode> for engine::InputMode {
    fn from(mode: InputMode) -> Self {
        match mode {
            InputMode::English => engine::InputMode::English,
            InputMode::Korean => engine::InputMode::Korean,
        }
    }
}

/// 조사 (UniFFI enum)
#[derive(uniffi::Enum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Josa {
    EunNeun,
    IGa,
    EulReul,
    GwaWa,
    EuroRo,
    AYa,
}

impl From<Josa> for josa::Josa {
    fn from(value: Josa) -> Self {
        match value {
            Josa::EunNeun => josa::Josa::EunNeun,
            Josa::IGa => josa::Josa::IGa,
            Josa::EulReul => josa::Josa::EulReul,
            Josa::GwaWa => josa::Josa::GwaWa,
            Josa::EuroRo => josa::Josa::EuroRo,
            Josa::AYa => josa::Josa::AYa,
        }
    }
}

/// 한글 입력 엔진 (UniFFI object, thread-safe)
#[derive(uniffi::Object, Debug)]
pub struct HangulEngine {
    state: Mutex<EngineState>,
}

impl Default for HangulEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HangulEngine {
    fn state(&self) -> MutexGuard<'_, EngineState> {
        // 패닉으로 잠금이 오염되어도 상태 자체는 일관적이다
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl HangulEngine {
    /// 새 엔진을 생성한다. (English 모드, 레이아웃 미로드)
    #[uniffi::constructor]
    pub fn new() -> Self {
        HangulEngine {
            state: Mutex::new(EngineState::new()),
        }
    }

    /// JSON5 문자열로 자판 레이아웃을 로드한다.
    pub fn load_layout(&self, json: String) -> Result<(), HangulError> {
        self.state().load_layout(&json)
    }

    /// 내장 두벌식 표준 레이아웃을 로드한다.
    pub fn load_standard_layout(&self) -> Result<(), HangulError> {
        self.state().load_standard_layout()
    }

    /// 입력 모드를 설정한다. 한→영 전환 시 현재 조합을 확정해 돌려준다.
    pub fn set_mode(&self, mode: InputMode) -> ProcessResult {
        self.state().set_mode(mode.into()).into()
    }

    /// 현재 입력 모드를 반환한다.
    pub fn get_mode(&self) -> InputMode {
        self.state().mode().into()
    }

    /// 입력 모드를 토글한다. 바뀐 모드는 `get_mode`로 확인한다.
    pub fn toggle_mode(&self) -> ProcessResult {
        self.state().toggle_mode().into()
    }

    /// 키 레이블을 처리한다. (예: "q", "Q", "k")
    pub fn process_key(&self, key: String) -> ProcessResult {
        self.state().process_key(&key).into()
    }

    /// 백스페이스 처리 (입력한 자모 하나를 되돌림)
    pub fn backspace(&self) -> ProcessResult {
        self.state().backspace().into()
    }

    /// 현재 조합을 확정한다.
    pub fn flush(&self) -> ProcessResult {
        self.state().flush().into()
    }

    /// 현재 조합을 폐기한다.
    pub fn reset(&self) {
        self.state().reset();
    }
}

// ── 문자열 함수 (UniFFI export) ──

/// 자모 문자열을 음절로 조합한다.
#[uniffi::export]
pub fn compose(text: String) -> String {
    text::compose(&text)
}

/// 음절을 자모로 분해한다.
#[uniffi::export]
pub fn decompose(text: String, use_compatibility: bool, split_compounds: bool) -> String {
    text::decompose(&text, use_compatibility, split_compounds)
}

/// 비어 있지 않고 모든 문자가 한글(음절 또는 현대 자모)인지
#[uniffi::export]
pub fn is_hangul(text: String) -> bool {
    !text.is_empty() && text.chars().all(unicode::is_hangul)
}

#[uniffi::export]
pub fn contains(text: String, query: String) -> bool {
    search::contains(&text, &query)
}

#[uniffi::export]
pub fn starts_with(text: String, prefix: String) -> bool {
    search::starts_with(&text, &prefix)
}

#[uniffi::export]
pub fn ends_with(text: String, suffix: String) -> bool {
    search::ends_with(&text, &suffix)
}

#[uniffi::export]
pub fn contains_korean(text: String) -> bool {
    text::contains_korean(&text)
}

/// 한글 한 글자를 `korean_width`로 세는 길이
#[uniffi::export]
pub fn length(text: String, korean_width: u32) -> u64 {
    text::length(&text, korean_width as usize) as u64
}

#[uniffi::export]
pub fn ngram(text: String, n: u32, split_compounds: bool) -> Vec<String> {
    text::ngram(&text, n as usize, split_compounds)
}

#[uniffi::export]
pub fn attach_josa(text: String, particle: Josa) -> String {
    josa::attach_josa(&text, particle.into())
}

/// 두벌식 표준 자판으로 친 영문을 한글로 바꾼다.
#[uniffi::export]
pub fn english_to_korean(text: String) -> Result<String, HangulError> {
    Ok(KeyboardLayout::shared_standard()?.english_to_korean(&text))
}

/// 한글을 두벌식 표준 자판의 영문 키 시퀀스로 바꾼다.
#[uniffi::export]
pub fn korean_to_english(text: String) -> Result<String, HangulError> {
    Ok(KeyboardLayout::shared_standard()?.korean_to_english(&text))
}
