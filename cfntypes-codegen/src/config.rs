//! Generator configuration

/// Generation options
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Max characters of a description copied into the `DOC` catalog (default: 150)
    pub catalog_description_length: usize,

    /// Pretty-print the generated module through prettyplease
    pub format_output: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            catalog_description_length: 150,
            format_output: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.catalog_description_length, 150);
        assert!(config.format_output);
    }
}
