use crate::domain::model::Field;
use crate::utils::error::{FormError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder regex is valid"));

/// A scripted run of user gestures against one form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub session: SessionInfo,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub name: String,
    pub description: Option<String>,
}

/// One gesture the rendering side would forward to the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    Add,
    Remove { index: usize },
    Set { index: usize, field: Field, value: String },
    Touch { index: usize, field: Field },
    Submit,
    Reset,
}

impl SessionConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn name(&self) -> &str {
        &self.session.name
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("session.name", &self.session.name)?;
        validate_positive_number("steps", self.steps.len(), 1).map_err(|_| {
            FormError::ConfigValidationError {
                field: "steps".to_string(),
                message: "Session must contain at least one step".to_string(),
            }
        })
    }
}
