use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_yaml::Value;
use std::fs::File;
use std::path::Path;

/// The base path used when the site configuration names none.
pub const DEFAULT_BASE_PATH: &str = "/blog";

/// The layout name used when the site configuration names none.
pub const DEFAULT_LAYOUT: &str = "monthly_archive";

// The `monthly_archive` section as written in the site configuration file.
// Kept private; callers only ever see the resolved `ArchiveConfig`.
#[derive(Deserialize, Default)]
struct Section {
    path: Option<String>,
    layout: Option<String>,
}

/// The resolved archive settings for one build: the base path under which
/// every archive page nests and the name of the layout that renders them.
/// Read-only for the duration of the build.
pub struct ArchiveConfig {
    pub base_path: String,
    pub layout: String,
}

impl ArchiveConfig {
    /// Resolves the archive settings from the site-wide configuration
    /// mapping, reading `monthly_archive.path` and `monthly_archive.layout`.
    /// A missing section, a missing or empty field, or a structurally
    /// malformed section all resolve to the defaults; there are no error
    /// conditions.
    pub fn resolve(site: &Value) -> ArchiveConfig {
        let section: Section = site
            .get("monthly_archive")
            .cloned()
            .and_then(|section| serde_yaml::from_value(section).ok())
            .unwrap_or_default();
        ArchiveConfig {
            base_path: or_default(section.path, DEFAULT_BASE_PATH),
            layout: or_default(section.layout, DEFAULT_LAYOUT),
        }
    }

    /// Reads a YAML site configuration file and resolves the archive
    /// settings from it.
    pub fn from_file(path: &Path) -> Result<ArchiveConfig> {
        let file = match File::open(path) {
            Err(e) => return Err(anyhow!("Opening site config file `{}`: {}", path.display(), e)),
            Ok(file) => file,
        };
        let site: Value = serde_yaml::from_reader(file)?;
        Ok(ArchiveConfig::resolve(&site))
    }
}

impl Default for ArchiveConfig {
    fn default() -> ArchiveConfig {
        ArchiveConfig {
            base_path: DEFAULT_BASE_PATH.to_owned(),
            layout: DEFAULT_LAYOUT.to_owned(),
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => default.to_owned(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    fn resolve(yaml: &str) -> ArchiveConfig {
        ArchiveConfig::resolve(&serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_resolve_defaults_when_section_missing() {
        let config = resolve("title: Example Site\n");
        assert_eq!(config.base_path, "/blog");
        assert_eq!(config.layout, "monthly_archive");
    }

    #[test]
    fn test_resolve_configured_values() {
        let config = resolve("monthly_archive:\n  path: /posts\n  layout: archive\n");
        assert_eq!(config.base_path, "/posts");
        assert_eq!(config.layout, "archive");
    }

    #[test]
    fn test_resolve_defaults_missing_fields_independently() {
        let config = resolve("monthly_archive:\n  path: /posts\n");
        assert_eq!(config.base_path, "/posts");
        assert_eq!(config.layout, "monthly_archive");
    }

    #[test]
    fn test_resolve_empty_fields_fall_back() {
        let config = resolve("monthly_archive:\n  path: ''\n  layout: ''\n");
        assert_eq!(config.base_path, "/blog");
        assert_eq!(config.layout, "monthly_archive");
    }

    #[test]
    fn test_resolve_null_section_falls_back() {
        let config = resolve("monthly_archive: ~\n");
        assert_eq!(config.base_path, "/blog");
        assert_eq!(config.layout, "monthly_archive");
    }

    #[test]
    fn test_resolve_scalar_section_falls_back() {
        let config = resolve("monthly_archive: 3\n");
        assert_eq!(config.base_path, "/blog");
        assert_eq!(config.layout, "monthly_archive");
    }

    #[test]
    fn test_resolve_null_document_falls_back() {
        let config = ArchiveConfig::resolve(&Value::Null);
        assert_eq!(config.base_path, "/blog");
        assert_eq!(config.layout, "monthly_archive");
    }

    #[test]
    fn test_default_matches_resolve_on_empty() {
        let config = ArchiveConfig::default();
        assert_eq!(config.base_path, DEFAULT_BASE_PATH);
        assert_eq!(config.layout, DEFAULT_LAYOUT);
    }

    #[test]
    fn test_from_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("site.yaml");
        let mut file = File::create(&path)?;
        file.write_all(b"monthly_archive:\n  path: notes\n")?;
        let config = ArchiveConfig::from_file(&path)?;
        assert_eq!(config.base_path, "notes");
        assert_eq!(config.layout, "monthly_archive");
        Ok(())
    }

    #[test]
    fn test_from_file_missing_names_the_path() {
        match ArchiveConfig::from_file(Path::new("/no/such/site.yaml")) {
            Ok(_) => panic!("missing file should not resolve"),
            Err(err) => assert!(err.to_string().contains("/no/such/site.yaml")),
        }
    }
}
