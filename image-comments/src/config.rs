//! Comments client configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `IMAGE_COMMENTS_*` environment variables, or
//! a configuration file, in OrthoConfig's usual precedence order.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::outbound::comments_api::comments_url;
use crate::presentation::DEFAULT_LOCALE;

const DEFAULT_BASE_URL: &str = "https://ile-api.essentialdeveloper.com/essential-feed";

/// Errors raised while turning settings into client inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The configured base URL is not an absolute URL.
    #[error("invalid comments base URL '{value}': {message}")]
    InvalidBaseUrl {
        /// Raw configured value.
        value: String,
        /// Parser failure detail.
        message: String,
    },
    /// No image identifier was configured.
    #[error("an image id is required to load comments")]
    MissingImageId,
    /// The configured image identifier is not a UUID.
    #[error("invalid image id '{value}': expected a UUID")]
    InvalidImageId {
        /// Raw configured value.
        value: String,
    },
}

/// Settings for the comments client.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "IMAGE_COMMENTS")]
pub struct ImageCommentsSettings {
    /// Comments API base URL.
    pub base_url: Option<String>,
    /// Identifier of the image whose comments are loaded.
    pub image_id: Option<String>,
    /// Request timeout in seconds.
    #[ortho_config(default = 10)]
    pub timeout_seconds: u64,
    /// Locale used to resolve presentation copy.
    pub locale: Option<String>,
}

impl ImageCommentsSettings {
    /// Return the configured base URL, falling back to the default service.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBaseUrl`] when the value does not
    /// parse as an absolute URL, does not use `http` or `https`, or cannot
    /// carry path segments.
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        let raw = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let invalid = |message: String| SettingsError::InvalidBaseUrl {
            value: raw.to_owned(),
            message,
        };
        let url = Url::parse(raw).map_err(|error| invalid(error.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry path segments".to_owned()));
        }
        Ok(url)
    }

    /// Return the configured image identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::MissingImageId`] when unset and
    /// [`SettingsError::InvalidImageId`] when not a UUID.
    pub fn image_id(&self) -> Result<Uuid, SettingsError> {
        let raw = self
            .image_id
            .as_deref()
            .ok_or(SettingsError::MissingImageId)?;
        Uuid::parse_str(raw.trim()).map_err(|_| SettingsError::InvalidImageId {
            value: raw.to_owned(),
        })
    }

    /// Return the comments endpoint for the configured image.
    ///
    /// # Errors
    ///
    /// Propagates base URL and image id validation failures.
    pub fn comments_url(&self) -> Result<Url, SettingsError> {
        Ok(comments_url(&self.base_url()?, self.image_id()?))
    }

    /// Return the request timeout, never shorter than one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    /// Return the configured locale, falling back to the default locale.
    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}
