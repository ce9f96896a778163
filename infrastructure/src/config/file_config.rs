//! Configuration file schema
//!
//! Example configuration:
//!
//! ```toml
//! [consultation]
//! max_question_chars = 4096
//!
//! [synthesis]
//! disclaimer = "Educational use only."
//!
//! [[specialists]]
//! name = "bladder"
//! endpoint = "http://localhost:8001"
//! timeout_secs = 30
//! weight = 1
//!
//! [[specialists]]
//! name = "prostate"
//! endpoint = "http://localhost:8002"
//! timeout_secs = 30
//! ```

use consilium_domain::{DEFAULT_MAX_QUESTION_CHARS, LabeledSynthesis, Specialist};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("At least one specialist must be configured")]
    NoSpecialists,

    #[error("Duplicate specialist name: {0}")]
    DuplicateSpecialist(String),

    #[error("Specialist {0} has a zero timeout")]
    ZeroTimeout(String),

    #[error("Specialist {0} has a non-http endpoint: {1}")]
    InvalidEndpoint(String, String),

    #[error("Could not load configuration: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// One `[[specialists]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSpecialistConfig {
    pub name: String,
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_weight() -> u32 {
    1
}

impl FileSpecialistConfig {
    fn to_specialist(&self) -> Specialist {
        Specialist::new(&self.name, &self.endpoint)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_weight(self.weight)
    }
}

/// `[consultation]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsultationConfig {
    /// Upper bound on inbound question length, in characters
    pub max_question_chars: usize,
}

impl Default for FileConsultationConfig {
    fn default() -> Self {
        Self {
            max_question_chars: DEFAULT_MAX_QUESTION_CHARS,
        }
    }
}

/// `[synthesis]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSynthesisConfig {
    /// Disclaimer footer; `None` uses the built-in text
    pub disclaimer: Option<String>,
}

/// Complete file configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub specialists: Vec<FileSpecialistConfig>,
    pub consultation: FileConsultationConfig,
    pub synthesis: FileSynthesisConfig,
}

impl Default for FileConfig {
    /// The reference deployment: two urology specialists on localhost.
    fn default() -> Self {
        Self {
            specialists: vec![
                FileSpecialistConfig {
                    name: "bladder".to_string(),
                    endpoint: "http://localhost:8001".to_string(),
                    timeout_secs: default_timeout_secs(),
                    weight: default_weight(),
                },
                FileSpecialistConfig {
                    name: "prostate".to_string(),
                    endpoint: "http://localhost:8002".to_string(),
                    timeout_secs: default_timeout_secs(),
                    weight: default_weight(),
                },
            ],
            consultation: FileConsultationConfig::default(),
            synthesis: FileSynthesisConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.specialists.is_empty() {
            return Err(ConfigError::NoSpecialists);
        }

        let mut seen = HashSet::new();
        for specialist in &self.specialists {
            if !seen.insert(specialist.name.as_str()) {
                return Err(ConfigError::DuplicateSpecialist(specialist.name.clone()));
            }
            if specialist.timeout_secs == 0 {
                return Err(ConfigError::ZeroTimeout(specialist.name.clone()));
            }
            if !specialist.endpoint.starts_with("http://")
                && !specialist.endpoint.starts_with("https://")
            {
                return Err(ConfigError::InvalidEndpoint(
                    specialist.name.clone(),
                    specialist.endpoint.clone(),
                ));
            }
        }

        Ok(())
    }

    /// Convert to the domain's ordered specialist list
    pub fn specialists(&self) -> Vec<Specialist> {
        self.specialists.iter().map(|s| s.to_specialist()).collect()
    }

    /// Build the synthesis policy from the `[synthesis]` section
    pub fn synthesis_policy(&self) -> LabeledSynthesis {
        match &self.synthesis.disclaimer {
            Some(disclaimer) => LabeledSynthesis::new().with_disclaimer(disclaimer),
            None => LabeledSynthesis::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_reference_deployment() {
        let config = FileConfig::default();
        assert_eq!(config.specialists.len(), 2);
        assert_eq!(config.specialists[0].name, "bladder");
        assert_eq!(config.specialists[0].endpoint, "http://localhost:8001");
        assert_eq!(config.specialists[1].name, "prostate");
        assert_eq!(config.consultation.max_question_chars, 4096);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
[[specialists]]
name = "kidney"
endpoint = "http://localhost:8005"
"#,
        )
        .unwrap();

        assert_eq!(config.specialists.len(), 1);
        assert_eq!(config.specialists[0].timeout_secs, 30);
        assert_eq!(config.specialists[0].weight, 1);
    }

    #[test]
    fn test_specialist_conversion_preserves_order() {
        let config: FileConfig = toml::from_str(
            r#"
[[specialists]]
name = "second-opinion"
endpoint = "http://localhost:8002"
timeout_secs = 5

[[specialists]]
name = "first-opinion"
endpoint = "http://localhost:8001"
"#,
        )
        .unwrap();

        let specialists = config.specialists();
        assert_eq!(specialists[0].name(), "second-opinion");
        assert_eq!(specialists[0].timeout(), Duration::from_secs(5));
        assert_eq!(specialists[1].name(), "first-opinion");
    }

    #[test]
    fn test_validate_rejects_empty_set() {
        let config: FileConfig = toml::from_str("specialists = []").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::NoSpecialists)));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let config: FileConfig = toml::from_str(
            r#"
[[specialists]]
name = "bladder"
endpoint = "http://localhost:8001"

[[specialists]]
name = "bladder"
endpoint = "http://localhost:8002"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateSpecialist(name)) if name == "bladder"
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config: FileConfig = toml::from_str(
            r#"
[[specialists]]
name = "bladder"
endpoint = "http://localhost:8001"
timeout_secs = 0
"#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout(_))));
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config: FileConfig = toml::from_str(
            r#"
[[specialists]]
name = "bladder"
endpoint = "localhost:8001"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint(_, _))
        ));
    }

    #[test]
    fn test_synthesis_policy_from_config() {
        let config: FileConfig = toml::from_str(
            r#"
[synthesis]
disclaimer = "Talk to your urologist."
"#,
        )
        .unwrap();

        use consilium_domain::{SpecialistOpinion, SynthesisPolicy};
        let policy = config.synthesis_policy();
        let output = policy.synthesize(
            "Q",
            &[SpecialistOpinion {
                specialist: "bladder",
                weight: 1,
                text: "A",
            }],
        );
        assert!(output.contains("Talk to your urologist."));
    }
}
