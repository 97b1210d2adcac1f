use crate::core::types::Token;

/// §4.A: the Analyzer's output. Order is significant — it is the order in
/// which positions are later assigned during indexing (§4.D).
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    pub tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens }
    }

    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn terms(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.term.as_str()).collect()
    }
}
