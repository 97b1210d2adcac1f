use crate::analysis::char_filter::CharFilter;
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::tokenizer::Tokenizer;

/// §4.A: character filters (0..N, order significant), exactly one
/// tokenizer, then token filters (0..N, order significant).
pub struct Analyzer {
    char_filters: Vec<Box<dyn CharFilter>>,
    tokenizer: Box<dyn Tokenizer>,
    token_filters: Vec<Box<dyn TokenFilter>>,
}

impl Analyzer {
    pub fn new(tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            char_filters: Vec::new(),
            tokenizer,
            token_filters: Vec::new(),
        }
    }

    pub fn with_char_filter(mut self, filter: Box<dyn CharFilter>) -> Self {
        self.char_filters.push(filter);
        self
    }

    pub fn with_token_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.token_filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> TokenStream {
        let mut s = text.to_string();
        for filter in &self.char_filters {
            s = filter.filter(&s);
        }
        let mut tokens = self.tokenizer.tokenize(&s);
        for filter in &self.token_filters {
            tokens = filter.filter(tokens);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filters::lowercase::LowercaseFilter;
    use crate::analysis::filters::stopword::StopWordFilter;
    use crate::analysis::tokenizer::StandardTokenizer;

    #[test]
    fn standard_pipeline_lowercases_and_drops_stopwords() {
        let analyzer = Analyzer::new(Box::new(StandardTokenizer))
            .with_token_filter(Box::new(LowercaseFilter))
            .with_token_filter(Box::new(StopWordFilter::english()));
        let ts = analyzer.analyze("The Cat Sat");
        assert_eq!(ts.terms(), vec!["cat", "sat"]);
    }

    #[test]
    fn empty_body_yields_empty_stream() {
        let analyzer = Analyzer::new(Box::new(StandardTokenizer));
        assert_eq!(analyzer.analyze("").size(), 0);
    }
}
