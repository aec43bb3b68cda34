// 🖼️ Image URL normalization
// Admin uploads live under /uploads/; older records still point at /images/.

/// Portrait used for team members without an image
pub const TEAM_FALLBACK_IMAGE: &str = "/logo.png";

const LEGACY_PREFIX: &str = "/images/";
const UPLOADS_PREFIX: &str = "/uploads/";

/// Normalize an image URL from the API.
///
/// - blank or absent → `None` (the image element is not rendered)
/// - `http://` / `https://` → unchanged
/// - relative → leading slash ensured, `/images/` rewritten to `/uploads/`
pub fn normalize_image_url(url: Option<&str>) -> Option<String> {
    let url = url.map(str::trim).filter(|u| !u.is_empty())?;

    if url.starts_with("http://") || url.starts_with("https://") {
        return Some(url.to_string());
    }

    let rooted = if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{url}")
    };

    match rooted.strip_prefix(LEGACY_PREFIX) {
        Some(rest) => Some(format!("{UPLOADS_PREFIX}{rest}")),
        None => Some(rooted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_images_path_is_rewritten() {
        assert_eq!(
            normalize_image_url(Some("/images/cert1.png")).as_deref(),
            Some("/uploads/cert1.png")
        );
        assert_eq!(
            normalize_image_url(Some("images/team/a.jpg")).as_deref(),
            Some("/uploads/team/a.jpg")
        );
    }

    #[test]
    fn test_absolute_urls_unchanged() {
        assert_eq!(
            normalize_image_url(Some("https://cdn.example.com/x.png")).as_deref(),
            Some("https://cdn.example.com/x.png")
        );
        assert_eq!(
            normalize_image_url(Some("http://cdn.example.com/images/x.png")).as_deref(),
            Some("http://cdn.example.com/images/x.png")
        );
    }

    #[test]
    fn test_relative_path_gets_leading_slash() {
        assert_eq!(normalize_image_url(Some("logo.png")).as_deref(), Some("/logo.png"));
        assert_eq!(
            normalize_image_url(Some("/uploads/a.png")).as_deref(),
            Some("/uploads/a.png")
        );
    }

    #[test]
    fn test_only_leading_images_segment_is_rewritten() {
        assert_eq!(
            normalize_image_url(Some("/media/images/a.png")).as_deref(),
            Some("/media/images/a.png")
        );
    }

    #[test]
    fn test_blank_is_none() {
        assert_eq!(normalize_image_url(None), None);
        assert_eq!(normalize_image_url(Some("")), None);
        assert_eq!(normalize_image_url(Some("   ")), None);
    }
}
