//! 자판 레이아웃 로딩, 키맵/조합 조회, 영문 ↔ 한글 자판 변환
pub mod schema;

use std::collections::HashMap;
use std::sync::OnceLock;

use schema::{LayoutSchema, LayoutType};

use crate::error::{HangulError, Result};
use crate::text;

/// 함께 제공되는 두벌식 표준 레이아웃
const STANDARD_LAYOUT: &str = include_str!("../../layouts/2-standard.json5");

/// 파싱된 자판 레이아웃
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    pub id: String,
    pub name: String,
    pub layout_type: LayoutType,
    /// 키 레이블 → 자모 char 매핑
    keymap: HashMap<String, char>,
    /// 자모 → 키 레이블 (역방향)
    keys: HashMap<char, String>,
    /// (첫째 자모, 둘째 자모) → 결합 결과
    combinations: HashMap<(char, char), char>,
}

/// 16진수 문자열("0x3131" 등)을 char로 변환
fn parse_hex_char(s: &str) -> Option<char> {
    let hex = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))?;
    let code = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(code)
}

fn parse_field(field: &str, value: &str) -> Result<char> {
    parse_hex_char(value).ok_or_else(|| HangulError::InvalidCodePoint {
        field: field.to_string(),
        value: value.to_string(),
    })
}

impl KeyboardLayout {
    /// JSON5 문자열에서 레이아웃을 파싱한다.
    ///
    /// 키맵 값은 모두 레이아웃 타입에 맞는 자모여야 한다.
    pub fn from_json(json: &str) -> Result<Self> {
        let schema: LayoutSchema = json5::from_str(json)?;

        let mut keymap = HashMap::with_capacity(schema.keymap.len());
        for (key, hex) in &schema.keymap {
            let ch = parse_field(&format!("keymap.{key}"), hex)?;
            if !schema.layout_type.accepts(ch) {
                return Err(HangulError::UnexpectedJamo {
                    key: key.clone(),
                    value: ch as u32,
                });
            }
            keymap.insert(key.clone(), ch);
        }

        // 같은 자모에 키가 여럿이면 정렬 순서상 앞선 키
        let mut labels: Vec<(&String, &char)> = keymap.iter().collect();
        labels.sort();
        let mut keys = HashMap::with_capacity(labels.len());
        for (key, ch) in labels {
            keys.entry(*ch).or_insert_with(|| key.clone());
        }

        let mut combinations = HashMap::with_capacity(schema.combinations.len());
        for entry in &schema.combinations {
            let first = parse_field("combination first", &entry.first)?;
            let second = parse_field("combination second", &entry.second)?;
            let result = parse_field("combination result", &entry.result)?;
            combinations.insert((first, second), result);
        }

        log::debug!(
            "loaded layout {} ({:?}): {} keys, {} combinations",
            schema.id,
            schema.layout_type,
            keymap.len(),
            combinations.len()
        );

        Ok(KeyboardLayout {
            id: schema.id,
            name: schema.name,
            layout_type: schema.layout_type,
            keymap,
            keys,
            combinations,
        })
    }

    /// 두벌식 표준 레이아웃
    pub fn standard() -> Result<Self> {
        Self::from_json(STANDARD_LAYOUT)
    }

    /// 프로세스 전체에서 한 번만 파싱하는 두벌식 표준 레이아웃
    pub fn shared_standard() -> Result<&'static KeyboardLayout> {
        static STANDARD: OnceLock<KeyboardLayout> = OnceLock::new();
        if let Some(layout) = STANDARD.get() {
            return Ok(layout);
        }
        let layout = Self::standard()?;
        Ok(STANDARD.get_or_init(|| layout))
    }

    /// 키 레이블로 자모를 조회
    pub fn map_key(&self, key: &str) -> Option<char> {
        self.keymap.get(key).copied()
    }

    /// 두 자모의 조합 결과를 조회
    pub fn combine(&self, first: char, second: char) -> Option<char> {
        self.combinations.get(&(first, second)).copied()
    }

    /// 자모를 입력하는 키 시퀀스.
    /// 키맵에 없으면 조합 규칙을 거꾸로 따라가 두 자모의 키를 잇는다. (ㅘ → "hk")
    pub fn key_sequence(&self, jamo: char) -> Option<String> {
        if let Some(key) = self.keys.get(&jamo) {
            return Some(key.clone());
        }

        let mut parts: Vec<(char, char)> = self
            .combinations
            .iter()
            .filter(|(_, result)| **result == jamo)
            .map(|(pair, _)| *pair)
            .collect();
        parts.sort();

        parts.into_iter().find_map(|(first, second)| {
            let first = self.keys.get(&first)?;
            let second = self.keys.get(&second)?;
            Some(format!("{first}{second}"))
        })
    }

    /// 영문 자판으로 친 문자열을 한글로 바꾼다. ("gksrmf" → "한글")
    ///
    /// 키맵에 없는 대문자는 소문자 키로 다시 찾는다.
    pub fn english_to_korean(&self, text: &str) -> String {
        let mut jamo = String::with_capacity(text.len() * 3);
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let mapped = self
                .map_key(ch.encode_utf8(&mut buf))
                .or_else(|| self.map_key(&ch.to_lowercase().to_string()))
                .unwrap_or(ch);
            jamo.push(mapped);
        }
        text::compose(&jamo)
    }

    /// 한글 문자열을 영문 자판의 키 시퀀스로 바꾼다. ("한글" → "gksrmf")
    pub fn korean_to_english(&self, text: &str) -> String {
        // 키맵과 같은 인코딩으로 분해해야 역방향 조회가 맞는다
        let use_compatibility = self.layout_type == LayoutType::Jamo;
        let decomposed = text::decompose(text, use_compatibility, false);
        let mut out = String::with_capacity(decomposed.len());
        for ch in decomposed.chars() {
            match self.key_sequence(ch) {
                Some(keys) => out.push_str(&keys),
                None => out.push(ch),
            }
        }
        out
    }
}
