pub const APP_NAME: &str = "spotify-cli";

/// Strip anything after the dotted release numbers, so `3.0.0beta4` compares
/// as `3.0.0`.
pub fn release_component(version: &str) -> &str {
    let end = version
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(version.len());
    &version[..end]
}

/// Parse a dotted version into its numeric components.
///
/// Missing trailing components count as zero (`"3.1"` is `3.1.0`); anything
/// non-numeric makes the whole version unparseable.
pub fn parse_version(version: &str) -> Option<(u64, u64, u64)> {
    let mut parts = version.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = match parts.next() {
        Some(p) => p.parse().ok()?,
        None => 0,
    };
    let patch = match parts.next() {
        Some(p) => p.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((major, minor, patch))
}

/// Strict greater-than over two dotted versions.
///
/// Unparseable input never wins the comparison.
pub fn version_gt(version: &str, reference: &str) -> bool {
    match (parse_version(version), parse_version(reference)) {
        (Some(a), Some(b)) => a > b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_component_strips_prerelease_suffixes() {
        assert_eq!(release_component("3.0.0beta4"), "3.0.0");
        assert_eq!(release_component("3.1.0-nightly"), "3.1.0");
        assert_eq!(release_component("2.9.0"), "2.9.0");
    }

    #[test]
    fn parse_version_handles_short_forms() {
        assert_eq!(parse_version("3"), Some((3, 0, 0)));
        assert_eq!(parse_version("3.1"), Some((3, 1, 0)));
        assert_eq!(parse_version("3.1.4"), Some((3, 1, 4)));
    }

    #[test]
    fn parse_version_rejects_garbage() {
        assert_eq!(parse_version(""), None);
        assert_eq!(parse_version("three"), None);
        assert_eq!(parse_version("3.1.4.1"), None);
    }

    #[test]
    fn version_gt_compares_component_wise() {
        assert!(version_gt("3.0.0", "2.9.0"));
        assert!(version_gt("2.10.0", "2.9.0"));
        assert!(!version_gt("2.9.0", "2.9.0"));
        assert!(!version_gt("2.8.5", "2.9.0"));
    }

    #[test]
    fn version_gt_is_false_for_unparseable_input() {
        assert!(!version_gt("beta", "2.9.0"));
        assert!(!version_gt("3.0.0", "nope"));
    }
}
