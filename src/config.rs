use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Class labels in declaration order; order decides tie-breaks.
    pub classes: Vec<String>,
    /// Optional per-class priors, parallel to `classes`. Must be strictly
    /// positive and sum to 1. When absent, roughly equal priors are used.
    pub priors: Option<Vec<f64>>,
    pub min_token_length: usize,
    pub max_token_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classes: vec![
                "positive".to_string(),
                "negative".to_string(),
                "neutral".to_string(),
            ],
            priors: None,
            min_token_length: 1,
            max_token_length: 15,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, confy::ConfyError> {
        match confy::load("sentiment", Some("config")) {
            Ok(config) => Ok(config),
            Err(err) => {
                eprintln!("Failed to load config, using defaults: {err}");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store("sentiment", Some("config"), self)
    }
}
