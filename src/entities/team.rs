// 👥 Team Member Entity - name / position / bio are localized

use crate::locale::{resolve, Locale, Localized, LocalizedFields};
use crate::temporal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberEntity {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub email: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub phone: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub linkedin_url: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub experience_years: u32,

    #[serde(default, with = "temporal::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "temporal::optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,

    /// name_* / position_* / bio_*
    #[serde(flatten)]
    pub localized: LocalizedFields,
}

impl TeamMemberEntity {
    pub fn name(&self, locale: Locale) -> String {
        resolve(self, "name", locale)
    }

    pub fn position(&self, locale: Locale) -> String {
        resolve(self, "position", locale)
    }

    pub fn bio(&self, locale: Locale) -> String {
        resolve(self, "bio", locale)
    }
}

impl Localized for TeamMemberEntity {
    fn localized_fields(&self) -> &LocalizedFields {
        &self.localized
    }
}
