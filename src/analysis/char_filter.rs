/// §4.A stage 1: string → string, applied in configured order before
/// tokenization.
pub trait CharFilter: Send + Sync {
    fn filter(&self, s: &str) -> String;
}

/// Substring replacement driven by a finite {pattern → replacement} map.
/// Grounded in `original_source/char_filter.go`'s `MappingCharFilter`.
pub struct MappingCharFilter {
    mapper: Vec<(String, String)>,
}

impl MappingCharFilter {
    pub fn new(mapper: Vec<(String, String)>) -> Self {
        MappingCharFilter { mapper }
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, s: &str) -> String {
        let mut out = s.to_string();
        for (pattern, replacement) in &self.mapper {
            out = out.replace(pattern.as_str(), replacement.as_str());
        }
        out
    }
}
