use crate::analysis::filter::TokenFilter;
use crate::analysis::token::TokenStream;

/// Maps each term to its lowercase form; reading is preserved.
pub struct LowercaseFilter;

impl TokenFilter for LowercaseFilter {
    fn filter(&self, mut tokens: TokenStream) -> TokenStream {
        for token in tokens.tokens.iter_mut() {
            token.term = token.term.to_lowercase();
        }
        tokens
    }
}
