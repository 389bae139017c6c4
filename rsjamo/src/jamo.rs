//! 현대 한글 자모 테이블
//!
//! 초성(`Lead`) 19자, 중성(`Vowel`) 21자, 종성(`Tail`) 27자.
//! 각 자모는 위치 자모(conjoining)와 호환 자모(compatibility) 코드포인트,
//! 그리고 겹자모 분리 문자열을 가진다. 조합 테이블과 문자 조회는
//! 이 테이블을 훑어서 얻는다.
//!
//! 초성과 종성은 같은 호환 자모를 공유하는 경우가 많지만(ㄱ, ㄴ, ...)
//! 허용 집합과 겹자모 집합이 다르므로 별도 타입으로 둔다.

/// 자모 하나의 코드포인트 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JamoEntry {
    /// 위치 자모 (예: 'ᄀ' U+1100)
    pub conjoining: char,
    /// 호환 자모 (예: 'ㄱ' U+3131)
    pub compatibility: char,
    /// 위치 자모 기준 구성 요소 (겹자모면 두 글자)
    pub conjoining_components: &'static str,
    /// 호환 자모 기준 구성 요소 (겹자모면 두 글자)
    pub compatibility_components: &'static str,
}

const fn entry(
    conjoining: char,
    compatibility: char,
    conjoining_components: &'static str,
    compatibility_components: &'static str,
) -> JamoEntry {
    JamoEntry {
        conjoining,
        compatibility,
        conjoining_components,
        compatibility_components,
    }
}

/// 초성/중성/종성 공통 동작
pub trait Jamo: Copy + Eq + 'static {
    /// 유니코드 순서대로 나열한 전체 자모
    const ALL: &'static [Self];
    /// `ALL`과 같은 순서의 코드포인트 테이블
    const TABLE: &'static [JamoEntry];

    /// 음절 산술에 쓰이는 0부터 시작하는 인덱스
    fn index(self) -> usize;

    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    fn entry(self) -> &'static JamoEntry {
        &Self::TABLE[self.index()]
    }

    /// 위치 자모 문자
    fn conjoining(self) -> char {
        self.entry().conjoining
    }

    /// 호환 자모 문자
    fn compatibility(self) -> char {
        self.entry().compatibility
    }

    /// 요청한 인코딩의 단일 문자
    fn encoded(self, use_compatibility: bool) -> char {
        if use_compatibility {
            self.compatibility()
        } else {
            self.conjoining()
        }
    }

    /// 구성 요소 문자열. 홑자모는 자기 자신, 겹자모는 두 글자.
    ///
    /// ```
    /// use rsjamo::jamo::{Jamo, Tail, Vowel};
    /// assert_eq!(Tail::RieulGiyeok.components(true), "ㄹㄱ");
    /// assert_eq!(Vowel::Wa.components(false), "\u{1169}\u{1161}");
    /// ```
    fn components(self, use_compatibility: bool) -> &'static str {
        let entry = self.entry();
        if use_compatibility {
            entry.compatibility_components
        } else {
            entry.conjoining_components
        }
    }

    /// 겹자모(쌍자음, 겹받침, 이중모음)인지
    fn is_compound(self) -> bool {
        self.entry().compatibility_components.chars().nth(1).is_some()
    }

    /// 위치 자모 또는 호환 자모 문자로 자모를 찾는다.
    fn find(ch: char) -> Option<Self> {
        Self::TABLE
            .iter()
            .position(|e| e.conjoining == ch || e.compatibility == ch)
            .and_then(Self::from_index)
    }

    /// 두 자모를 겹자모로 합친다. (ㄱ+ㄱ=ㄲ, ㅗ+ㅏ=ㅘ, ㄹ+ㄱ=ㄺ)
    fn compose(self, next: Self) -> Option<Self> {
        let (first, second) = (self.compatibility(), next.compatibility());
        Self::ALL.iter().copied().find(|jamo| {
            let mut parts = jamo.components(true).chars();
            parts.next() == Some(first) && parts.next() == Some(second) && parts.next().is_none()
        })
    }
}

// ── 초성 ──

/// 초성 (leading consonant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Lead {
    Giyeok,
    SsangGiyeok,
    Nieun,
    Digeut,
    SsangDigeut,
    Rieul,
    Mieum,
    Bieup,
    SsangBieup,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    SsangJieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

const LEADS: [Lead; 19] = [
    Lead::Giyeok,
    Lead::SsangGiyeok,
    Lead::Nieun,
    Lead::Digeut,
    Lead::SsangDigeut,
    Lead::Rieul,
    Lead::Mieum,
    Lead::Bieup,
    Lead::SsangBieup,
    Lead::Siot,
    Lead::SsangSiot,
    Lead::Ieung,
    Lead::Jieut,
    Lead::SsangJieut,
    Lead::Chieut,
    Lead::Kieuk,
    Lead::Tieut,
    Lead::Pieup,
    Lead::Hieut,
];

const LEAD_TABLE: [JamoEntry; 19] = [
    entry('\u{1100}', 'ㄱ', "\u{1100}", "ㄱ"),
    entry('\u{1101}', 'ㄲ', "\u{1100}\u{1100}", "ㄱㄱ"),
    entry('\u{1102}', 'ㄴ', "\u{1102}", "ㄴ"),
    entry('\u{1103}', 'ㄷ', "\u{1103}", "ㄷ"),
    entry('\u{1104}', 'ㄸ', "\u{1103}\u{1103}", "ㄷㄷ"),
    entry('\u{1105}', 'ㄹ', "\u{1105}", "ㄹ"),
    entry('\u{1106}', 'ㅁ', "\u{1106}", "ㅁ"),
    entry('\u{1107}', 'ㅂ', "\u{1107}", "ㅂ"),
    entry('\u{1108}', 'ㅃ', "\u{1107}\u{1107}", "ㅂㅂ"),
    entry('\u{1109}', 'ㅅ', "\u{1109}", "ㅅ"),
    entry('\u{110A}', 'ㅆ', "\u{1109}\u{1109}", "ㅅㅅ"),
    entry('\u{110B}', 'ㅇ', "\u{110B}", "ㅇ"),
    entry('\u{110C}', 'ㅈ', "\u{110C}", "ㅈ"),
    entry('\u{110D}', 'ㅉ', "\u{110C}\u{110C}", "ㅈㅈ"),
    entry('\u{110E}', 'ㅊ', "\u{110E}", "ㅊ"),
    entry('\u{110F}', 'ㅋ', "\u{110F}", "ㅋ"),
    entry('\u{1110}', 'ㅌ', "\u{1110}", "ㅌ"),
    entry('\u{1111}', 'ㅍ', "\u{1111}", "ㅍ"),
    entry('\u{1112}', 'ㅎ', "\u{1112}", "ㅎ"),
];

impl Jamo for Lead {
    const ALL: &'static [Self] = &LEADS;
    const TABLE: &'static [JamoEntry] = &LEAD_TABLE;

    fn index(self) -> usize {
        self as usize
    }
}

impl Lead {
    /// 같은 소리의 종성. 종성이 될 수 없는 ㄸ, ㅃ, ㅉ는 None.
    pub fn to_tail(self) -> Option<Tail> {
        Tail::find(self.compatibility())
    }
}

// ── 중성 ──

/// 중성 (vowel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Vowel {
    A,
    Ae,
    Ya,
    Yae,
    Eo,
    E,
    Yeo,
    Ye,
    O,
    Wa,
    Wae,
    Oe,
    Yo,
    U,
    Wo,
    We,
    Wi,
    Yu,
    Eu,
    Ui,
    I,
}

const VOWELS: [Vowel; 21] = [
    Vowel::A,
    Vowel::Ae,
    Vowel::Ya,
    Vowel::Yae,
    Vowel::Eo,
    Vowel::E,
    Vowel::Yeo,
    Vowel::Ye,
    Vowel::O,
    Vowel::Wa,
    Vowel::Wae,
    Vowel::Oe,
    Vowel::Yo,
    Vowel::U,
    Vowel::Wo,
    Vowel::We,
    Vowel::Wi,
    Vowel::Yu,
    Vowel::Eu,
    Vowel::Ui,
    Vowel::I,
];

const VOWEL_TABLE: [JamoEntry; 21] = [
    entry('\u{1161}', 'ㅏ', "\u{1161}", "ㅏ"),
    entry('\u{1162}', 'ㅐ', "\u{1162}", "ㅐ"),
    entry('\u{1163}', 'ㅑ', "\u{1163}", "ㅑ"),
    entry('\u{1164}', 'ㅒ', "\u{1164}", "ㅒ"),
    entry('\u{1165}', 'ㅓ', "\u{1165}", "ㅓ"),
    entry('\u{1166}', 'ㅔ', "\u{1166}", "ㅔ"),
    entry('\u{1167}', 'ㅕ', "\u{1167}", "ㅕ"),
    entry('\u{1168}', 'ㅖ', "\u{1168}", "ㅖ"),
    entry('\u{1169}', 'ㅗ', "\u{1169}", "ㅗ"),
    entry('\u{116A}', 'ㅘ', "\u{1169}\u{1161}", "ㅗㅏ"),
    entry('\u{116B}', 'ㅙ', "\u{1169}\u{1162}", "ㅗㅐ"),
    entry('\u{116C}', 'ㅚ', "\u{1169}\u{1175}", "ㅗㅣ"),
    entry('\u{116D}', 'ㅛ', "\u{116D}", "ㅛ"),
    entry('\u{116E}', 'ㅜ', "\u{116E}", "ㅜ"),
    entry('\u{116F}', 'ㅝ', "\u{116E}\u{1165}", "ㅜㅓ"),
    entry('\u{1170}', 'ㅞ', "\u{116E}\u{1166}", "ㅜㅔ"),
    entry('\u{1171}', 'ㅟ', "\u{116E}\u{1175}", "ㅜㅣ"),
    entry('\u{1172}', 'ㅠ', "\u{1172}", "ㅠ"),
    entry('\u{1173}', 'ㅡ', "\u{1173}", "ㅡ"),
    entry('\u{1174}', 'ㅢ', "\u{1173}\u{1175}", "ㅡㅣ"),
    entry('\u{1175}', 'ㅣ', "\u{1175}", "ㅣ"),
];

impl Jamo for Vowel {
    const ALL: &'static [Self] = &VOWELS;
    const TABLE: &'static [JamoEntry] = &VOWEL_TABLE;

    fn index(self) -> usize {
        self as usize
    }
}

// ── 종성 ──

/// 종성 (trailing consonant). 종성 없음은 `Option::None`으로 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tail {
    Giyeok,
    SsangGiyeok,
    GiyeokSiot,
    Nieun,
    NieunJieut,
    NieunHieut,
    Digeut,
    Rieul,
    RieulGiyeok,
    RieulMieum,
    RieulBieup,
    RieulSiot,
    RieulTieut,
    RieulPieup,
    RieulHieut,
    Mieum,
    Bieup,
    BieupSiot,
    Siot,
    SsangSiot,
    Ieung,
    Jieut,
    Chieut,
    Kieuk,
    Tieut,
    Pieup,
    Hieut,
}

const TAILS: [Tail; 27] = [
    Tail::Giyeok,
    Tail::SsangGiyeok,
    Tail::GiyeokSiot,
    Tail::Nieun,
    Tail::NieunJieut,
    Tail::NieunHieut,
    Tail::Digeut,
    Tail::Rieul,
    Tail::RieulGiyeok,
    Tail::RieulMieum,
    Tail::RieulBieup,
    Tail::RieulSiot,
    Tail::RieulTieut,
    Tail::RieulPieup,
    Tail::RieulHieut,
    Tail::Mieum,
    Tail::Bieup,
    Tail::BieupSiot,
    Tail::Siot,
    Tail::SsangSiot,
    Tail::Ieung,
    Tail::Jieut,
    Tail::Chieut,
    Tail::Kieuk,
    Tail::Tieut,
    Tail::Pieup,
    Tail::Hieut,
];

const TAIL_TABLE: [JamoEntry; 27] = [
    entry('\u{11A8}', 'ㄱ', "\u{11A8}", "ㄱ"),
    entry('\u{11A9}', 'ㄲ', "\u{11A8}\u{11A8}", "ㄱㄱ"),
    entry('\u{11AA}', 'ㄳ', "\u{11A8}\u{11BA}", "ㄱㅅ"),
    entry('\u{11AB}', 'ㄴ', "\u{11AB}", "ㄴ"),
    entry('\u{11AC}', 'ㄵ', "\u{11AB}\u{11BD}", "ㄴㅈ"),
    entry('\u{11AD}', 'ㄶ', "\u{11AB}\u{11C2}", "ㄴㅎ"),
    entry('\u{11AE}', 'ㄷ', "\u{11AE}", "ㄷ"),
    entry('\u{11AF}', 'ㄹ', "\u{11AF}", "ㄹ"),
    entry('\u{11B0}', 'ㄺ', "\u{11AF}\u{11A8}", "ㄹㄱ"),
    entry('\u{11B1}', 'ㄻ', "\u{11AF}\u{11B7}", "ㄹㅁ"),
    entry('\u{11B2}', 'ㄼ', "\u{11AF}\u{11B8}", "ㄹㅂ"),
    entry('\u{11B3}', 'ㄽ', "\u{11AF}\u{11BA}", "ㄹㅅ"),
    entry('\u{11B4}', 'ㄾ', "\u{11AF}\u{11C0}", "ㄹㅌ"),
    entry('\u{11B5}', 'ㄿ', "\u{11AF}\u{11C1}", "ㄹㅍ"),
    entry('\u{11B6}', 'ㅀ', "\u{11AF}\u{11C2}", "ㄹㅎ"),
    entry('\u{11B7}', 'ㅁ', "\u{11B7}", "ㅁ"),
    entry('\u{11B8}', 'ㅂ', "\u{11B8}", "ㅂ"),
    entry('\u{11B9}', 'ㅄ', "\u{11B8}\u{11BA}", "ㅂㅅ"),
    entry('\u{11BA}', 'ㅅ', "\u{11BA}", "ㅅ"),
    entry('\u{11BB}', 'ㅆ', "\u{11BA}\u{11BA}", "ㅅㅅ"),
    entry('\u{11BC}', 'ㅇ', "\u{11BC}", "ㅇ"),
    entry('\u{11BD}', 'ㅈ', "\u{11BD}", "ㅈ"),
    entry('\u{11BE}', 'ㅊ', "\u{11BE}", "ㅊ"),
    entry('\u{11BF}', 'ㅋ', "\u{11BF}", "ㅋ"),
    entry('\u{11C0}', 'ㅌ', "\u{11C0}", "ㅌ"),
    entry('\u{11C1}', 'ㅍ', "\u{11C1}", "ㅍ"),
    entry('\u{11C2}', 'ㅎ', "\u{11C2}", "ㅎ"),
];

impl Jamo for Tail {
    const ALL: &'static [Self] = &TAILS;
    const TABLE: &'static [JamoEntry] = &TAIL_TABLE;

    fn index(self) -> usize {
        self as usize
    }
}

impl Tail {
    /// 다음 음절 초성으로 옮겨갈 때의 초성. 겹받침(ㄳ, ㄺ 등)은 None.
    pub fn to_lead(self) -> Option<Lead> {
        Lead::find(self.compatibility())
    }
}
