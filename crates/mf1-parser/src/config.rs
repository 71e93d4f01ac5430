//! Parser configuration.

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Return input without `'`, `{`, `}` or `<` as a single text node
    /// without running the tokenizer.
    pub fast_path: bool,
    /// Pass the enclosing plural into element bodies, so `#` inside
    /// `<b>...</b>` still stands for the plural's count.
    pub hash_in_elements: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            fast_path: true,
            hash_in_elements: true,
        }
    }
}

impl ParseConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the plain-text shortcut.
    pub fn fast_path(mut self, enabled: bool) -> Self {
        self.fast_path = enabled;
        self
    }

    /// Whether `#` is recognized inside elements nested in a plural.
    pub fn hash_in_elements(mut self, enabled: bool) -> Self {
        self.hash_in_elements = enabled;
        self
    }
}
