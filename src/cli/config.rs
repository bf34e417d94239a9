use crate::error::{Result, SiteError};
use crate::models::{Body, KnownBody, LayoutKind};
use ::config::{Config, File};
use serde::Deserialize;
use std::path::Path;

/// Defaults that can be kept in a settings file instead of repeated on the command line.
///
/// ```toml
/// body = "mars"
/// layout = "landing-sites"
/// has_headers = true
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub body: Option<KnownBody>,
    pub radius_km: Option<f64>,
    pub layout: LayoutKind,
    pub has_headers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            body: None,
            radius_km: None,
            layout: LayoutKind::default(),
            has_headers: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or the built-in defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        Config::builder()
            .add_source(File::from(path))
            .build()
            .and_then(|config| config.try_deserialize::<Settings>())
            .map_err(|e| {
                SiteError::Config(format!("Failed to load settings from {}: {}", path.display(), e))
            })
    }

    /// Pick the body to measure on.
    ///
    /// A command-line radius beats a command-line body, which beats the settings
    /// file; `fallback` applies when nothing was chosen.
    pub fn resolve_body(
        &self,
        body: Option<KnownBody>,
        radius_km: Option<f64>,
        fallback: KnownBody,
    ) -> Result<Body> {
        if let Some(radius_km) = radius_km {
            return Body::new(radius_km);
        }
        if let Some(body) = body {
            return Ok(body.body());
        }
        if let Some(radius_km) = self.radius_km {
            return Body::new(radius_km);
        }
        Ok(self.body.unwrap_or(fallback).body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn settings_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.has_headers);
    }

    #[test]
    fn test_load_toml() {
        let file = settings_file("body = \"earth\"\nlayout = \"points\"\nhas_headers = false\n");
        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.body, Some(KnownBody::Earth));
        assert_eq!(settings.layout, LayoutKind::Points);
        assert!(!settings.has_headers);
        assert_eq!(settings.radius_km, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = settings_file("radius_km = 1737.4\n");
        let settings = Settings::load(Some(file.path())).unwrap();

        assert_eq!(settings.radius_km, Some(1737.4));
        assert_eq!(settings.layout, LayoutKind::LandingSites);
        assert!(settings.has_headers);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = Settings::load(Some(Path::new("does/not/exist.toml")));
        assert!(matches!(result, Err(SiteError::Config(_))));
    }

    #[test]
    fn test_resolve_body_precedence() {
        let settings = Settings {
            body: Some(KnownBody::Moon),
            ..Settings::default()
        };

        assert_eq!(
            settings.resolve_body(None, None, KnownBody::Mars).unwrap(),
            Body::MOON
        );
        assert_eq!(
            settings
                .resolve_body(Some(KnownBody::Earth), None, KnownBody::Mars)
                .unwrap(),
            Body::EARTH
        );
        assert_eq!(
            settings
                .resolve_body(Some(KnownBody::Earth), Some(100.0), KnownBody::Mars)
                .unwrap()
                .radius_km(),
            100.0
        );
        assert_eq!(
            Settings::default()
                .resolve_body(None, None, KnownBody::Mars)
                .unwrap(),
            Body::MARS
        );
        assert!(settings
            .resolve_body(None, Some(-5.0), KnownBody::Mars)
            .is_err());
    }
}
