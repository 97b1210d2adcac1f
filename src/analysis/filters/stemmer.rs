use rust_stemmers::{Algorithm, Stemmer};

use crate::analysis::filter::TokenFilter;
use crate::analysis::token::TokenStream;

/// English Snowball stem; reading is preserved.
pub struct StemmerFilter {
    stemmer: Stemmer,
}

impl Default for StemmerFilter {
    fn default() -> Self {
        StemmerFilter {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl TokenFilter for StemmerFilter {
    fn filter(&self, mut tokens: TokenStream) -> TokenStream {
        for token in tokens.tokens.iter_mut() {
            token.term = self.stemmer.stem(&token.term).to_string();
        }
        tokens
    }
}
