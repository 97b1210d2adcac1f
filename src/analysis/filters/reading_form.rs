use crate::analysis::filter::TokenFilter;
use crate::analysis::token::TokenStream;

/// Replaces each term with its reading (kana); falls back to the
/// surface form when the token carries no reading. Adopts the later
/// `original_source` revision: the filter rewrites the term directly
/// rather than relying on a `Selected` kind carried on the TokenStream
/// (see §9's open question on this).
pub struct KanaReadingFormFilter;

impl TokenFilter for KanaReadingFormFilter {
    fn filter(&self, mut tokens: TokenStream) -> TokenStream {
        for token in tokens.tokens.iter_mut() {
            if let Some(kana) = &token.kana {
                token.term = kana.clone();
            }
        }
        tokens
    }
}

/// Replaces each term with a Hepburn romanization of its reading.
/// Grounded in `original_source/tokenFilter.go`'s
/// `ReadingformFilter`/`jaconv.ToHebon(jaconv.KatakanaToHiragana(...))`
/// pipeline; since no romanization crate appears anywhere in the
/// teacher's or pack's dependency set, the katakana→hiragana fold and
/// the Hepburn syllable table are implemented directly as a lookup,
/// covering the standard gojūon, voiced, and yōon syllables.
pub struct RomajiReadingFormFilter;

impl TokenFilter for RomajiReadingFormFilter {
    fn filter(&self, mut tokens: TokenStream) -> TokenStream {
        for token in tokens.tokens.iter_mut() {
            if let Some(kana) = &token.kana {
                token.term = to_hepburn(kana);
            }
        }
        tokens
    }
}

fn katakana_to_hiragana(c: char) -> char {
    match c {
        '\u{30A1}'..='\u{30F6}' => {
            char::from_u32(c as u32 - 0x60).unwrap_or(c)
        }
        other => other,
    }
}

fn to_hepburn(kana: &str) -> String {
    let hira: String = kana.chars().map(katakana_to_hiragana).collect();
    let chars: Vec<char> = hira.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == 'っ' && i + 1 < chars.len() {
            if let Some(next) = syllable(&chars[i + 1..]).map(|(s, _)| s) {
                if let Some(first) = next.chars().next() {
                    if first != 'n' {
                        out.push(first);
                        i += 1;
                        continue;
                    }
                }
            }
        }
        match syllable(&chars[i..]) {
            Some((romaji, consumed)) => {
                out.push_str(romaji);
                i += consumed;
            }
            None => {
                out.push(chars[i]);
                i += 1;
            }
        }
    }
    out
}

/// Longest-match lookup of a hiragana syllable (1 or 2 code points) at
/// the front of `chars`, returning its romaji and how many code points
/// it consumed.
fn syllable(chars: &[char]) -> Option<(&'static str, usize)> {
    if chars.len() >= 2 {
        let pair: String = chars[..2].iter().collect();
        if let Some(r) = YOON.iter().find(|(k, _)| *k == pair).map(|(_, v)| *v) {
            return Some((r, 2));
        }
    }
    let single: String = chars[..1].iter().collect();
    GOJUON
        .iter()
        .find(|(k, _)| *k == single)
        .map(|(_, v)| (*v, 1))
}

const GOJUON: &[(&str, &str)] = &[
    ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
    ("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko"),
    ("が", "ga"), ("ぎ", "gi"), ("ぐ", "gu"), ("げ", "ge"), ("ご", "go"),
    ("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so"),
    ("ざ", "za"), ("じ", "ji"), ("ず", "zu"), ("ぜ", "ze"), ("ぞ", "zo"),
    ("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to"),
    ("だ", "da"), ("ぢ", "ji"), ("づ", "zu"), ("で", "de"), ("ど", "do"),
    ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
    ("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho"),
    ("ば", "ba"), ("び", "bi"), ("ぶ", "bu"), ("べ", "be"), ("ぼ", "bo"),
    ("ぱ", "pa"), ("ぴ", "pi"), ("ぷ", "pu"), ("ぺ", "pe"), ("ぽ", "po"),
    ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
    ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
    ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
    ("わ", "wa"), ("を", "o"), ("ん", "n"),
];

const YOON: &[(&str, &str)] = &[
    ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
    ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
    ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"),
    ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"),
    ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"),
    ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
    ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
    ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
    ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
    ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
    ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
];
