use std::collections::HashSet;

use crate::analysis::filter::TokenFilter;
use crate::analysis::token::TokenStream;

/// Removes tokens whose term is in the configured stopword set; an empty
/// set is a no-op.
pub struct StopWordFilter {
    stop_words: HashSet<String>,
}

impl StopWordFilter {
    pub fn new(stop_words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        StopWordFilter {
            stop_words: stop_words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn english() -> Self {
        StopWordFilter::new([
            "a", "and", "be", "have", "i", "in", "of", "that", "the", "to",
        ])
    }
}

impl TokenFilter for StopWordFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        let kept = tokens
            .tokens
            .into_iter()
            .filter(|token| !self.stop_words.contains(&token.term))
            .collect();
        TokenStream::new(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Token;

    #[test]
    fn empty_set_is_noop() {
        let ts = TokenStream::new(vec![Token::unsaved("the"), Token::unsaved("cat")]);
        let out = StopWordFilter::new(Vec::<String>::new()).filter(ts);
        assert_eq!(out.size(), 2);
    }

    #[test]
    fn removes_configured_words() {
        let ts = TokenStream::new(vec![Token::unsaved("the"), Token::unsaved("cat")]);
        let out = StopWordFilter::english().filter(ts);
        assert_eq!(out.terms(), vec!["cat"]);
    }
}
