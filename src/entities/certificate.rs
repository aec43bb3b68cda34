// 📜 Certificate Entity
// Validity is derived from expiry_date at render time and never stored.

use crate::locale::{resolve, Locale, Localized, LocalizedFields};
use crate::temporal;
use crate::validity::{classify, ValidityStatus};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateEntity {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(with = "temporal::calendar_date")]
    pub issued_date: NaiveDate,

    #[serde(with = "temporal::calendar_date")]
    pub expiry_date: NaiveDate,

    #[serde(default, with = "temporal::optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, with = "temporal::optional_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,

    /// name_* / description_*
    #[serde(flatten)]
    pub localized: LocalizedFields,
}

impl CertificateEntity {
    pub fn name(&self, locale: Locale) -> String {
        resolve(self, "name", locale)
    }

    pub fn description(&self, locale: Locale) -> String {
        resolve(self, "description", locale)
    }

    /// Validity relative to `today`
    pub fn validity(&self, today: NaiveDate) -> ValidityStatus {
        classify(self.expiry_date, today)
    }
}

impl Localized for CertificateEntity {
    fn localized_fields(&self) -> &LocalizedFields {
        &self.localized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn certificate(expiry: &str) -> serde_json::Value {
        json!({
            "id": "iso-27001",
            "name_en": "ISO 27001",
            "name_ar": "أيزو 27001",
            "name_ro": "ISO 27001",
            "description_en": "Information security",
            "description_ar": "أمن المعلومات",
            "description_ro": "Securitatea informației",
            "image_url": "/images/iso.png",
            "issued_date": "2023-03-01",
            "expiry_date": expiry,
            "created_at": "2023-03-02T10:00:00.000Z",
            "updated_at": "2023-03-02T10:00:00.000Z"
        })
    }

    #[test]
    fn test_decode_certificate() {
        let cert: CertificateEntity =
            serde_json::from_value(certificate("2026-03-01T00:00:00.000Z")).unwrap();

        assert_eq!(cert.issued_date, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
        assert_eq!(cert.expiry_date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(cert.description(Locale::Ro), "Securitatea informației");
    }

    #[test]
    fn test_validity_follows_reference_date() {
        let cert: CertificateEntity = serde_json::from_value(certificate("2026-03-01")).unwrap();

        let early = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let close = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let late = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

        assert_eq!(cert.validity(early), ValidityStatus::Valid);
        assert_eq!(cert.validity(close), ValidityStatus::ExpiringSoon);
        assert_eq!(cert.validity(late), ValidityStatus::Expired);
    }

    #[test]
    fn test_bad_expiry_date_is_rejected() {
        let result = serde_json::from_value::<CertificateEntity>(certificate("soon"));
        assert!(result.is_err());
    }
}
