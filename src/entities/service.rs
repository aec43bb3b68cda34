// 🧩 Service Entity - one offering on the services page

use crate::locale::{resolve, Locale, Localized, LocalizedFields};
use crate::temporal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// SERVICE ICON
// ============================================================================

/// Closed set of icon symbols a service can show.
///
/// Unknown tags from the API render as `Code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceIcon {
    #[default]
    Code,
    Cloud,
    Shield,
    Brain,
    Database,
    Smartphone,
    Server,
    Cpu,
}

impl ServiceIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceIcon::Code => "Code",
            ServiceIcon::Cloud => "Cloud",
            ServiceIcon::Shield => "Shield",
            ServiceIcon::Brain => "Brain",
            ServiceIcon::Database => "Database",
            ServiceIcon::Smartphone => "Smartphone",
            ServiceIcon::Server => "Server",
            ServiceIcon::Cpu => "Cpu",
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "Code" => ServiceIcon::Code,
            "Cloud" => ServiceIcon::Cloud,
            "Shield" => ServiceIcon::Shield,
            "Brain" => ServiceIcon::Brain,
            "Database" => ServiceIcon::Database,
            "Smartphone" => ServiceIcon::Smartphone,
            "Server" => ServiceIcon::Server,
            "Cpu" => ServiceIcon::Cpu,
            other => {
                tracing::debug!(icon = other, "unknown service icon, using Code");
                ServiceIcon::Code
            }
        }
    }
}

impl From<String> for ServiceIcon {
    fn from(tag: String) -> Self {
        ServiceIcon::from_tag(&tag)
    }
}

impl From<ServiceIcon> for String {
    fn from(icon: ServiceIcon) -> Self {
        icon.as_str().to_string()
    }
}

// ============================================================================
// SERVICE ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntity {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub icon: ServiceIcon,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default, with = "temporal::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "temporal::optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,

    /// name_* / description_*
    #[serde(flatten)]
    pub localized: LocalizedFields,
}

impl ServiceEntity {
    pub fn name(&self, locale: Locale) -> String {
        resolve(self, "name", locale)
    }

    pub fn description(&self, locale: Locale) -> String {
        resolve(self, "description", locale)
    }
}

impl Localized for ServiceEntity {
    fn localized_fields(&self) -> &LocalizedFields {
        &self.localized
    }
}
