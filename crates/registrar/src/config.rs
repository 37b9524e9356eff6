use crate::{error::RegistrarError, gpa::GpaReducer};

/// Environment variable overriding the GPA reduction split threshold
pub const GPA_SPLIT_THRESHOLD_VAR: &str = "REGISTRAR_GPA_SPLIT_THRESHOLD";

/// Runtime settings for a [`Campus`](crate::campus::Campus)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrarConfig {
    /// Ranges shorter than this are summed sequentially by the GPA reduction
    pub gpa_split_threshold: usize,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            gpa_split_threshold: GpaReducer::DEFAULT_SPLIT_THRESHOLD,
        }
    }
}

impl RegistrarConfig {
    /// Loads settings from the process environment, reading a `.env` file
    /// first when one is present
    pub fn from_env() -> Result<Self, RegistrarError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RegistrarError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(GPA_SPLIT_THRESHOLD_VAR) {
            let threshold = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| RegistrarError::Config {
                    key: GPA_SPLIT_THRESHOLD_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;

            if threshold < GpaReducer::MIN_SPLIT_THRESHOLD {
                return Err(RegistrarError::Config {
                    key: GPA_SPLIT_THRESHOLD_VAR,
                    value: raw,
                    reason: format!("must be at least {}", GpaReducer::MIN_SPLIT_THRESHOLD),
                });
            }

            config.gpa_split_threshold = threshold;
        }

        Ok(config)
    }

    pub fn gpa_reducer(&self) -> GpaReducer {
        GpaReducer::new(self.gpa_split_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = RegistrarConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RegistrarConfig::default());
        assert_eq!(config.gpa_split_threshold, 3);
    }

    #[test]
    fn test_threshold_override() {
        let config =
            RegistrarConfig::from_lookup(lookup_from(&[(GPA_SPLIT_THRESHOLD_VAR, " 16 ")])).unwrap();
        assert_eq!(config.gpa_split_threshold, 16);
    }

    #[test]
    fn test_invalid_threshold() {
        let err = RegistrarConfig::from_lookup(lookup_from(&[(GPA_SPLIT_THRESHOLD_VAR, "lots")]))
            .unwrap_err();
        assert!(matches!(err, RegistrarError::Config { key: GPA_SPLIT_THRESHOLD_VAR, .. }));

        let err = RegistrarConfig::from_lookup(lookup_from(&[(GPA_SPLIT_THRESHOLD_VAR, "1")]))
            .unwrap_err();
        assert!(err.to_string().contains("must be at least 2"));
    }
}
