use serde::Deserialize;
use std::error::Error;
use std::fmt;
use std::fs;
use std::sync::Arc;
use log::info;

#[derive(Debug)]
pub enum PersonaError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    InvalidPersona(String),
}

impl fmt::Display for PersonaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonaError::IoError(e) => write!(f, "Persona file IO error: {}", e),
            PersonaError::JsonError(e) => write!(f, "Persona JSON parsing error: {}", e),
            PersonaError::InvalidPersona(msg) => write!(f, "Invalid persona: {}", msg),
        }
    }
}

impl Error for PersonaError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PersonaError::IoError(e) => Some(e),
            PersonaError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PersonaError {
    fn from(err: std::io::Error) -> Self {
        PersonaError::IoError(err)
    }
}

impl From<serde_json::Error> for PersonaError {
    fn from(err: serde_json::Error) -> Self {
        PersonaError::JsonError(err)
    }
}

/// Read-only persona settings: the system preamble sent ahead of every
/// completion request, the fixed user-facing replies, and the blocked-term
/// list consumed by the content filter. Built once at startup.
#[derive(Deserialize, Debug, Clone)]
pub struct PersonaConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default = "default_text_only_notice")]
    pub text_only_notice: String,
    #[serde(default = "default_deflection_reply")]
    pub deflection_reply: String,
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,
    #[serde(default = "default_blocked_terms")]
    pub blocked_terms: Vec<String>,
}

fn default_name() -> String {
    "Sofia".to_string()
}

fn default_system_prompt() -> String {
    "You are Sofia, a warm and playful conversation partner. \
     You speak lightly, with kindness and a smile. A little flirty is fine, \
     but never explicit. Steer away from adult topics and keep the mood \
     positive and gentle."
        .to_string()
}

fn default_text_only_notice() -> String {
    "I can only understand text for now".to_string()
}

fn default_deflection_reply() -> String {
    "Let's keep that one to ourselves. Tell me, how is your day going?".to_string()
}

fn default_fallback_reply() -> String {
    "Hmm, I got lost in thought for a moment. Could you try again a bit later?".to_string()
}

fn default_blocked_terms() -> Vec<String> {
    ["nsfw", "nude", "nudes", "porn", "sexting", "explicit"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            system_prompt: default_system_prompt(),
            text_only_notice: default_text_only_notice(),
            deflection_reply: default_deflection_reply(),
            fallback_reply: default_fallback_reply(),
            blocked_terms: default_blocked_terms(),
        }
    }
}

impl PersonaConfig {
    fn validate(&self) -> Result<(), PersonaError> {
        if self.name.trim().is_empty() {
            return Err(PersonaError::InvalidPersona("name must not be empty".to_string()));
        }
        if self.system_prompt.trim().is_empty() {
            return Err(
                PersonaError::InvalidPersona("system_prompt must not be empty".to_string())
            );
        }
        Ok(())
    }
}

pub fn load_persona(path: Option<&str>) -> Result<Arc<PersonaConfig>, PersonaError> {
    let config = match path {
        Some(p) => {
            let file_content = fs::read_to_string(p)?;
            let config: PersonaConfig = serde_json::from_str(&file_content)?;
            info!("Loaded persona '{}' from {}", config.name, p);
            config
        }
        None => {
            let config = PersonaConfig::default();
            info!("Using built-in persona '{}'", config.name);
            config
        }
    };
    config.validate()?;
    Ok(Arc::new(config))
}
