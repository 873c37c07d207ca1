use std::collections::HashMap;

/// Failures recorded while an action keeps going, keyed by category.
/// Rapid open/close files each failed attempt here instead of aborting.
#[derive(Debug, Default)]
pub struct ErrorRegistry {
    errors: HashMap<String, Vec<String>>,
}

impl ErrorRegistry {
    pub fn new() -> Self {
        ErrorRegistry {
            errors: HashMap::new(),
        }
    }

    pub fn record_error(&mut self, category: &str, message: String) {
        self.errors
            .entry(category.to_string())
            .or_insert_with(Vec::new)
            .push(message);
    }

    pub fn get_errors(&self, category: &str) -> Vec<String> {
        self.errors
            .get(category)
            .cloned()
            .unwrap_or_else(Vec::new)
    }

    pub fn total(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_fetch() {
        let mut registry = ErrorRegistry::new();
        assert!(registry.is_empty());

        registry.record_error("rapid", "[Attempt 1] refused".to_string());
        registry.record_error("rapid", "[Attempt 3] reset".to_string());
        registry.record_error("other", "x".to_string());

        assert_eq!(
            registry.get_errors("rapid"),
            vec!["[Attempt 1] refused", "[Attempt 3] reset"]
        );
        assert!(registry.get_errors("missing").is_empty());
        assert_eq!(registry.total(), 3);
    }
}
