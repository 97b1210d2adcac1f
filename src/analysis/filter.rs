use crate::analysis::token::TokenStream;

/// §4.A stage 3: TokenStream → TokenStream, applied in configured order.
pub trait TokenFilter: Send + Sync {
    fn filter(&self, tokens: TokenStream) -> TokenStream;
}
