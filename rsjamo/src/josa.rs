//! 조사(josa) 붙이기: 앞말의 받침 유무에 따라 은/는, 이/가 등을 고른다.

use crate::syllable::Syllable;
use crate::unicode;

/// 받침 유무에 따라 모양이 바뀌는 조사
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Josa {
    /// 은/는
    EunNeun,
    /// 이/가
    IGa,
    /// 을/를
    EulReul,
    /// 과/와
    GwaWa,
    /// 으로/로
    EuroRo,
    /// 아/야
    AYa,
}

impl Josa {
    /// 받침 있는 말 뒤에 붙는 모양
    pub fn after_consonant(self) -> &'static str {
        match self {
            Josa::EunNeun => "은",
            Josa::IGa => "이",
            Josa::EulReul => "을",
            Josa::GwaWa => "과",
            Josa::EuroRo => "으로",
            Josa::AYa => "아",
        }
    }

    /// 받침 없는 말 뒤에 붙는 모양
    pub fn after_vowel(self) -> &'static str {
        match self {
            Josa::EunNeun => "는",
            Josa::IGa => "가",
            Josa::EulReul => "를",
            Josa::GwaWa => "와",
            Josa::EuroRo => "로",
            Josa::AYa => "야",
        }
    }

    fn pick(self, ends_with_consonant: bool) -> &'static str {
        if ends_with_consonant {
            self.after_consonant()
        } else {
            self.after_vowel()
        }
    }
}

/// 읽었을 때 받침 소리로 끝나는지
///
/// - 숫자: 영, 일, 삼, 육, 칠, 팔
/// - 영문자: b, c, k, l, m, n, p, t
/// - 한글: 종성이 있는 음절
fn ends_with_consonant(last: char) -> bool {
    if last.is_ascii_digit() {
        return matches!(last, '0' | '1' | '3' | '6' | '7' | '8');
    }
    if last.is_ascii_alphabetic() {
        return matches!(
            last.to_ascii_lowercase(),
            'b' | 'c' | 'k' | 'l' | 'm' | 'n' | 'p' | 't'
        );
    }
    unicode::is_hangul(last) && Syllable::from_char(last).tail().is_some()
}

/// 문자열 뒤에 알맞은 조사를 붙인다. 빈 문자열에는 아무것도 붙이지 않는다.
///
/// ```
/// use rsjamo::josa::{attach_josa, Josa};
/// assert_eq!(attach_josa("사슴", Josa::EunNeun), "사슴은");
/// assert_eq!(attach_josa("사자", Josa::EunNeun), "사자는");
/// ```
pub fn attach_josa(text: &str, josa: Josa) -> String {
    let Some(last) = text.chars().next_back() else {
        return String::new();
    };
    let mut out = String::with_capacity(text.len() + 6);
    out.push_str(text);
    out.push_str(josa.pick(ends_with_consonant(last)));
    out
}
