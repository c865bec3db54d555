use crate::{
    error::{GeneticError, Result},
    evolution::EvolutionOptions,
};

/// Parameters of a bit-rule classification run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryClassificationConfig {
    options: EvolutionOptions,
    rule_count: usize,
    use_wildcard: bool,
}

impl BinaryClassificationConfig {
    /// # Errors
    ///
    /// Returns a configuration error if the options are out of bounds or
    /// `rule_count` is zero.
    pub fn new(options: EvolutionOptions, rule_count: usize, use_wildcard: bool) -> Result<Self> {
        options.validate()?;
        if rule_count < 1 {
            return Err(GeneticError::Configuration(
                "Rule count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            options,
            rule_count,
            use_wildcard,
        })
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    pub fn use_wildcard(&self) -> bool {
        self.use_wildcard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::LogLevel;

    #[test]
    fn test_valid_config() {
        let config =
            BinaryClassificationConfig::new(EvolutionOptions::default(), 4, true).unwrap();
        assert_eq!(config.rule_count(), 4);
        assert!(config.use_wildcard());
    }

    #[test]
    fn test_rejects_zero_rules() {
        let result = BinaryClassificationConfig::new(EvolutionOptions::default(), 0, false);
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_rejects_invalid_options() {
        let options = EvolutionOptions::new(10, 1, 10, LogLevel::None);
        assert!(BinaryClassificationConfig::new(options, 3, false).is_err());
    }
}
