// 🛡️ Certificate Validity - derived state, never stored
//
// Classification order (expiry wins over expiring-soon):
//   1. expiry <  today             → Expired
//   2. expiry <= today + 3 months  → ExpiringSoon
//   3. otherwise                   → Valid
//
// Month rule: add 3 to the month of `today`, carry the year, and clamp the
// day to the last day of the target month (Jan 31 → Apr 30, Nov 30 → Feb 28
// or Feb 29 in leap years).

use crate::locale::Locale;
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of the "expiring soon" window in calendar months
pub const EXPIRING_SOON_MONTHS: u32 = 3;

// ============================================================================
// VALIDITY STATUS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityStatus {
    Valid,
    ExpiringSoon,
    Expired,
}

impl ValidityStatus {
    /// Short badge text
    pub fn badge_label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ValidityStatus::Expired, Locale::En) => "Expired",
            (ValidityStatus::Expired, Locale::Ar) => "منتهية الصلاحية",
            (ValidityStatus::Expired, Locale::Ro) => "Expirat",
            (ValidityStatus::ExpiringSoon, Locale::En) => "Expiring Soon",
            (ValidityStatus::ExpiringSoon, Locale::Ar) => "تنتهي قريباً",
            (ValidityStatus::ExpiringSoon, Locale::Ro) => "Expiră în Curând",
            (ValidityStatus::Valid, Locale::En) => "Valid",
            (ValidityStatus::Valid, Locale::Ar) => "سارية",
            (ValidityStatus::Valid, Locale::Ro) => "Valid",
        }
    }

    /// Longer status line shown under a certificate
    pub fn status_text(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (ValidityStatus::Expired, Locale::En) => "Certificate Expired",
            (ValidityStatus::Expired, Locale::Ar) => "شهادة منتهية الصلاحية",
            (ValidityStatus::Expired, Locale::Ro) => "Certificat Expirat",
            (ValidityStatus::ExpiringSoon, Locale::En) => "Expires Soon",
            (ValidityStatus::ExpiringSoon, Locale::Ar) => "تنتهي قريباً",
            (ValidityStatus::ExpiringSoon, Locale::Ro) => "Expiră în Curând",
            (ValidityStatus::Valid, Locale::En) => "Valid Certificate",
            (ValidityStatus::Valid, Locale::Ar) => "شهادة سارية",
            (ValidityStatus::Valid, Locale::Ro) => "Certificat Valid",
        }
    }

    /// Badge variant for the presentation layer
    pub fn tone(&self) -> &'static str {
        match self {
            ValidityStatus::Expired => "destructive",
            ValidityStatus::ExpiringSoon => "secondary",
            ValidityStatus::Valid => "default",
        }
    }
}

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Last date that still counts as "expiring soon" for `today`.
pub fn expiring_soon_horizon(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_months(Months::new(EXPIRING_SOON_MONTHS))
        .unwrap_or(NaiveDate::MAX)
}

/// Classify a certificate expiry date against the reference date.
///
/// Pure: recompute on every render, `today` advances.
pub fn classify(expiry: NaiveDate, today: NaiveDate) -> ValidityStatus {
    if expiry < today {
        ValidityStatus::Expired
    } else if expiry <= expiring_soon_horizon(today) {
        ValidityStatus::ExpiringSoon
    } else {
        ValidityStatus::Valid
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Aggregate counts over a certificate collection.
///
/// Built with the same `classify` as the per-item badges, so
/// `valid + expiring_soon + expired == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValiditySummary {
    pub total: usize,
    pub valid: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

impl ValiditySummary {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = ValidityStatus>,
    {
        statuses
            .into_iter()
            .fold(ValiditySummary::default(), |mut summary, status| {
                summary.record(status);
                summary
            })
    }

    pub fn from_expiry_dates<I>(dates: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self::from_statuses(dates.into_iter().map(|expiry| classify(expiry, today)))
    }

    fn record(&mut self, status: ValidityStatus) {
        self.total += 1;
        match status {
            ValidityStatus::Valid => self.valid += 1,
            ValidityStatus::ExpiringSoon => self.expiring_soon += 1,
            ValidityStatus::Expired => self.expired += 1,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.valid + self.expiring_soon + self.expired == self.total
    }
}

// ============================================================================
// TESTS
// ============================================================================
