use crate::services::errors::ConfigError;

/// Site-wide settings, provided to components through context.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub contact: ContactFormConfig,
    pub navbar: NavbarConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormConfig {
    /// Simulated network latency of the reference gateway
    pub send_delay_ms: u32,
    /// Pause between the success banner and the redirect
    pub redirect_delay_ms: u32,
    /// Minimum trimmed message length, in UTF-16 code units like a browser string
    pub min_message_chars: usize,
    /// Where to send the visitor after a successful submission
    pub redirect_path: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavbarConfig {
    /// Scroll offset (px) past which the navbar switches to its scrolled style
    pub scroll_threshold_px: f64,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 2000,     // 2 seconds of simulated latency
            redirect_delay_ms: 2000, // 2 seconds showing the success banner
            min_message_chars: 10,
            redirect_path: "/".to_string(),
        }
    }
}

impl ContactFormConfig {
    /// No waiting at all; used by tests and previews
    pub fn immediate() -> Self {
        Self {
            send_delay_ms: 0,
            redirect_delay_ms: 0,
            ..Self::default()
        }
    }
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 10.0,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        Self {
            contact: ContactFormConfig::default(),
            navbar: NavbarConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contact.min_message_chars == 0 {
            return Err(ConfigError::MustBePositive {
                field: "contact.min_message_chars".to_string(),
            });
        }

        if !self.contact.redirect_path.starts_with('/') {
            return Err(ConfigError::NotAbsolutePath {
                field: "contact.redirect_path".to_string(),
                value: self.contact.redirect_path.clone(),
            });
        }

        if self.navbar.scroll_threshold_px < 0.0 {
            return Err(ConfigError::MustBePositive {
                field: "navbar.scroll_threshold_px".to_string(),
            });
        }

        Ok(())
    }
}
