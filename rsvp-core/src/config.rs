//! Application configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{RsvpError, RsvpResult};
use crate::flow::TentativeFlow;

static DEFAULT_FORM_ENDPOINT: &str =
    "https://docs.google.com/forms/d/e/1FAIpQLSepmjeCjWq1Gb2-Vlui11eZ7octprg4Wqy7I_msEt0IG7nHCg/formResponse";

static DEFAULT_CONTACT_PHONE: &str = "+1 (971) 300-9363";

fn default_endpoint() -> String {
    DEFAULT_FORM_ENDPOINT.to_string()
}

fn default_contact_phone() -> String {
    DEFAULT_CONTACT_PHONE.to_string()
}

fn default_name_field() -> String {
    "entry.1264838894".to_string()
}

fn default_phone_field() -> String {
    "entry.327917306".to_string()
}

fn default_party_size_field() -> String {
    "entry.1390779751".to_string()
}

fn default_status_field() -> String {
    "entry.1080861501".to_string()
}

fn default_children_field() -> String {
    "entry.484918407".to_string()
}

/// Opaque field identifiers the form backend expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldNames {
    #[serde(default = "default_name_field")]
    pub name: String,

    #[serde(default = "default_phone_field")]
    pub phone: String,

    #[serde(default = "default_party_size_field")]
    pub party_size: String,

    #[serde(default = "default_status_field")]
    pub status: String,

    /// Reserved by the backing form; no current field populates it.
    #[serde(default = "default_children_field")]
    pub children: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames {
            name: default_name_field(),
            phone: default_phone_field(),
            party_size: default_party_size_field(),
            status: default_status_field(),
            children: default_children_field(),
        }
    }
}

/// Where and how submissions are delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default)]
    pub fields: FieldNames,
}

impl Default for FormConfig {
    fn default() -> Self {
        FormConfig {
            endpoint: default_endpoint(),
            fields: FieldNames::default(),
        }
    }
}

impl FormConfig {
    /// The configured endpoint, or a blocking configuration error.
    /// Retrying cannot help here, so the message points at the organizer.
    pub fn endpoint(&self) -> RsvpResult<&str> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(RsvpError::Config(
                "no form endpoint configured, please contact the event organizer".to_string(),
            ));
        }
        Ok(endpoint)
    }
}

/// Global configuration at ~/.config/rsvp/config.toml
///
/// Every field has a working default, so the file is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub form: FormConfig,

    /// Which view the "not sure yet" choice leads to.
    #[serde(default)]
    pub tentative_flow: TentativeFlow,

    /// Manual fallback channel shown with recoverable submission errors.
    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            form: FormConfig::default(),
            tentative_flow: TentativeFlow::default(),
            contact_phone: default_contact_phone(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> RsvpResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RsvpError::Config("could not determine config directory".into()))?
            .join("rsvp");

        Ok(config_dir.join("config.toml"))
    }

    /// Directory holding the rate-limit bookkeeping.
    pub fn state_dir() -> RsvpResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RsvpError::Config("could not determine config directory".into()))?
            .join("rsvp");

        Ok(config_dir.join("state"))
    }

    /// Load config from the well-known path, falling back to defaults if
    /// the file does not exist.
    pub fn load() -> RsvpResult<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: AppConfig =
                toml::from_str(&content).map_err(|e| RsvpError::Config(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }
}
