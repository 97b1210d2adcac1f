use crate::analysis::token::TokenStream;
use crate::core::types::Token;
use unicode_segmentation::UnicodeSegmentation;

/// §4.A stage 2: string → TokenStream. Exactly one per Analyzer.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> TokenStream;
}

/// Splits on any Unicode code point that is neither a letter nor a
/// number; empty tokens are dropped, input order preserved. Grounded in
/// `original_source/tokenizer.go`'s `StandardTokenizer` (Go's
/// `strings.FieldsFunc` over `!unicode.IsLetter && !unicode.IsNumber`);
/// the teacher's own `StandardTokenizer` reaches for
/// `unicode_words()` from `unicode-segmentation` to do the equivalent
/// split without hand-rolling a scanner.
#[derive(Default)]
pub struct StandardTokenizer;

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens = text
            .unicode_words()
            .filter(|w| !w.is_empty())
            .map(Token::unsaved)
            .collect();
        TokenStream::new(tokens)
    }
}

/// §4.A: text → ordered (surface, reading) pairs, supplied externally.
/// Grounded in `original_source/morphology/morphology.go`'s `Morphology`
/// interface.
pub trait MorphologyOracle: Send + Sync {
    /// Returns (surface, reading, feature) triples in emission order. A
    /// feature of "whitespace" marks an entry the tokenizer must drop.
    fn analyze(&self, text: &str) -> Vec<(String, String, String)>;
}

/// Delegates to a `MorphologyOracle`; drops "whitespace"-tagged entries
/// and defaults reading to the surface form when the oracle supplies
/// none. Grounded in `original_source/morphology/kagome.go`'s handling of
/// the `空白` (whitespace) feature and its `kana := token.Surface` default.
pub struct MorphologicalTokenizer {
    oracle: Box<dyn MorphologyOracle>,
}

impl MorphologicalTokenizer {
    pub fn new(oracle: Box<dyn MorphologyOracle>) -> Self {
        MorphologicalTokenizer { oracle }
    }
}

impl Tokenizer for MorphologicalTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens = self
            .oracle
            .analyze(text)
            .into_iter()
            .filter(|(_, _, feature)| feature != "whitespace")
            .map(|(surface, reading, _)| {
                if reading.is_empty() {
                    Token::unsaved(surface)
                } else {
                    Token::with_kana(surface, reading)
                }
            })
            .collect();
        TokenStream::new(tokens)
    }
}

/// Emits every length-`n` sliding window over the input's Unicode code
/// points; `max(0, L - n + 1)` tokens for input length `L`. Adapted from
/// the teacher's `analysis/filters/ngram.rs` `NGramFilter`, which applies
/// the same windowing as a post-tokenization filter — here it is the
/// tokenizer itself, per spec.md's "N-gram (optional)" tokenizer.
pub struct NGramTokenizer {
    n: usize,
}

impl NGramTokenizer {
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "n-gram size must be positive");
        NGramTokenizer { n }
    }
}

impl Tokenizer for NGramTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < self.n {
            return TokenStream::new(Vec::new());
        }
        let tokens = (0..=chars.len() - self.n)
            .map(|i| {
                let gram: String = chars[i..i + self.n].iter().collect();
                Token::unsaved(gram)
            })
            .collect();
        TokenStream::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tokenizer_drops_punctuation() {
        let ts = StandardTokenizer.tokenize("aa, bb!! tt");
        assert_eq!(ts.terms(), vec!["aa", "bb", "tt"]);
    }

    #[test]
    fn standard_tokenizer_empty_input() {
        let ts = StandardTokenizer.tokenize("");
        assert_eq!(ts.size(), 0);
    }

    #[test]
    fn ngram_emits_sliding_windows() {
        let ts = NGramTokenizer::new(2).tokenize("abcd");
        assert_eq!(ts.terms(), vec!["ab", "bc", "cd"]);
    }

    #[test]
    fn ngram_shorter_than_n_emits_nothing() {
        let ts = NGramTokenizer::new(5).tokenize("ab");
        assert_eq!(ts.size(), 0);
    }
}
