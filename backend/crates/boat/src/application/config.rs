//! Application Configuration

use std::path::PathBuf;

/// Request context configuration
#[derive(Debug, Clone)]
pub struct BoatConfig {
    /// Default `title` for every rendered view
    pub app_name: String,
    /// Session cookie name
    pub session_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Web manifest served verbatim
    pub manifest_path: PathBuf,
    /// Directory templates are loaded from
    pub template_dir: PathBuf,
}

impl Default for BoatConfig {
    fn default() -> Self {
        Self {
            app_name: "SocialMast".to_string(),
            session_name: "Boat".to_string(),
            session_secret: [0u8; 32],
            manifest_path: PathBuf::from("./manifest.webmanifest"),
            template_dir: PathBuf::from("./templates"),
        }
    }
}

impl BoatConfig {
    /// Create config with a random session secret (for development)
    pub fn development() -> Self {
        Self {
            session_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoatConfig::default();
        assert_eq!(config.app_name, "SocialMast");
        assert_eq!(config.session_name, "Boat");
        assert_eq!(config.manifest_path, PathBuf::from("./manifest.webmanifest"));
    }

    #[test]
    fn test_development_secret_is_random() {
        assert_ne!(BoatConfig::development().session_secret, [0u8; 32]);
    }
}
