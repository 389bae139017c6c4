/// 엔진 내부 상태: 입력 모드, 레이아웃, 오토마타를 관리한다.
use crate::automata::jamo::JamoComposer;
use crate::automata::{Automata, AutomataResult};
use crate::error::Result;
use crate::layout::KeyboardLayout;

/// 입력 모드
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    English,
    Korean,
}

/// 엔진 내부 가변 상태
#[derive(Debug, Default)]
pub struct EngineState {
    mode: InputMode,
    layout: Option<KeyboardLayout>,
    composer: JamoComposer,
}

impl EngineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// JSON5 문자열로 레이아웃을 로드한다. 조합 중이던 음절은 버린다.
    pub fn load_layout(&mut self, json: &str) -> Result<()> {
        let layout = KeyboardLayout::from_json(json)?;
        self.install(layout);
        Ok(())
    }

    /// 내장 두벌식 표준 레이아웃을 로드한다.
    pub fn load_standard_layout(&mut self) -> Result<()> {
        let layout = KeyboardLayout::shared_standard()?.clone();
        self.install(layout);
        Ok(())
    }

    fn install(&mut self, layout: KeyboardLayout) {
        log::debug!("engine layout: {} ({})", layout.id, layout.name);
        self.composer = JamoComposer::new();
        self.layout = Some(layout);
    }

    /// 입력 모드를 바꾼다. 한→영 전환이면 현재 조합을 확정해 돌려준다.
    pub fn set_mode(&mut self, mode: InputMode) -> AutomataResult {
        let previous = self.mode();
        let result = if previous == InputMode::Korean && mode == InputMode::English {
            self.composer.flush()
        } else {
            AutomataResult::handled(None, None)
        };
        if previous != mode {
            log::debug!("input mode: {previous:?} -> {mode:?}");
        }
        self.mode = mode;
        result
    }

    /// 영문 ↔ 한글 전환
    pub fn toggle_mode(&mut self) -> AutomataResult {
        match self.mode() {
            InputMode::Korean => self.set_mode(InputMode::English),
            InputMode::English => self.set_mode(InputMode::Korean),
        }
    }

    /// 키 레이블을 처리한다.
    pub fn process_key(&mut self, key: &str) -> AutomataResult {
        // 영문 모드: 키를 그대로 committed로 반환
        if self.mode() == InputMode::English {
            return AutomataResult::handled(Some(key.to_string()), None);
        }

        let Some(layout) = &self.layout else {
            return AutomataResult::not_handled();
        };

        match layout.map_key(key) {
            Some(ch) => self.composer.process(ch, layout),
            None => {
                // 레이아웃에 없는 키 → 현재 조합 확정 후 패스스루
                let mut result = self.composer.flush();
                result.handled = false;
                result
            }
        }
    }

    /// 백스페이스 처리
    pub fn backspace(&mut self) -> AutomataResult {
        if self.mode() == InputMode::English {
            return AutomataResult::not_handled();
        }
        self.composer.backspace()
    }

    /// 현재 조합을 확정한다.
    pub fn flush(&mut self) -> AutomataResult {
        self.composer.flush()
    }

    /// 현재 조합을 폐기한다.
    pub fn reset(&mut self) {
        // flush하고 결과를 버린다
        let _ = self.composer.flush();
    }

    /// 현재 조합 중인 텍스트
    pub fn composing_text(&self) -> Option<String> {
        self.composer.composing_text()
    }
}
