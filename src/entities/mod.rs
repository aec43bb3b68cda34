// Entity Models
// Read-only feeds owned by the backend. Each entity keeps:
// - Identity: the backend id (string or number on the wire)
// - Localized fields: every `{field}_{en,ar,ro}` key, resolved at render time
// - Untranslated attributes: typed, parsed once on decode

pub mod certificate;
pub mod service;
pub mod team;

pub use certificate::CertificateEntity;
pub use service::{ServiceEntity, ServiceIcon};
pub use team::TeamMemberEntity;

use serde::{Deserialize, Deserializer};

/// Explicit `null` decodes to the field's default, same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Backend ids arrive as strings or integers; both become strings.
pub(crate) fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Signed(id) => id.to_string(),
        RawId::Unsigned(id) => id.to_string(),
    })
}
