//! Build-time storefront configuration.
//!
//! `build.rs` validates `storefront.toml` and embeds it as JSON; this module deserializes it once
//! and hands out typed views for the host adapters and components.

use std::{rc::Rc, sync::OnceLock};

use platform_host::{AdminCredentials, AuthService, LocalAuthService};
use platform_host_web::{CloudinaryConfig, FirestoreConfig, WebHostSettings};
use serde::Deserialize;

use crate::{
    carousel::CarouselSettings,
    i18n::Locale,
    upload::{UploadMode, UploadOptions},
};

include!(concat!(env!("OUT_DIR"), "/storefront_config_generated.rs"));

/// Shop identity used in links and headings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreSettings {
    /// Display name shown in the header.
    pub display_name: String,
    /// Phone number behind the Zalo order link.
    pub zalo_phone: String,
    /// Facebook page opened from product pages.
    pub facebook_page: String,
}

/// Cloudinary account plus client-side upload limits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaSettings {
    /// Cloud name.
    pub cloud_name: String,
    /// Unsigned upload preset.
    pub upload_preset: String,
    /// Folder uploads land in.
    pub folder: String,
    /// Maximum files per multi-image field.
    pub max_files: usize,
    /// Per-file size limit.
    pub max_file_size_bytes: u64,
    /// Accepted lowercase extensions.
    pub allowed_formats: Vec<String>,
}

/// Carousel timing and gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CarouselTuning {
    /// Autoplay period for the home banner slider.
    pub autoplay_interval_ms: u32,
    /// Minimum horizontal travel (exclusive) that counts as a swipe.
    pub swipe_threshold_px: i32,
    /// Thumbnails shown before the product gallery's "show more" toggle.
    pub gallery_thumbnail_limit: usize,
}

/// Back-office account and session lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminSettings {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Session lifetime in minutes.
    pub session_ttl_minutes: u64,
}

/// Locale defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LocaleSettings {
    /// Locale used until the visitor picks one.
    pub default: Locale,
}

/// Whole storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorefrontConfig {
    /// Config schema version.
    pub schema_version: u32,
    /// Shop identity.
    pub store: StoreSettings,
    /// Firestore connection.
    pub firestore: FirestoreConfig,
    /// Media host.
    pub cloudinary: MediaSettings,
    /// Carousel tuning.
    pub carousel: CarouselTuning,
    /// Admin account.
    pub admin: AdminSettings,
    /// Locale defaults.
    pub locale: LocaleSettings,
}

impl StorefrontConfig {
    /// Returns the embedded configuration.
    ///
    /// # Panics
    ///
    /// Panics if the generated JSON does not match this type, which `build.rs` rules out.
    pub fn load() -> &'static Self {
        static CONFIG: OnceLock<StorefrontConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            Self::parse(STOREFRONT_CONFIG_JSON).expect("embedded storefront config is valid")
        })
    }

    /// Parses configuration JSON.
    ///
    /// # Errors
    ///
    /// Returns the serde error when `raw_json` does not match the schema.
    pub fn parse(raw_json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw_json)
    }

    /// Endpoint settings for the browser host adapters.
    pub fn web_host_settings(&self) -> WebHostSettings {
        WebHostSettings {
            firestore: self.firestore.clone(),
            cloudinary: CloudinaryConfig {
                cloud_name: self.cloudinary.cloud_name.clone(),
                upload_preset: self.cloudinary.upload_preset.clone(),
            },
        }
    }

    /// Auth service for the configured admin account.
    pub fn auth_service(&self) -> Rc<dyn AuthService> {
        Rc::new(LocalAuthService::new(
            AdminCredentials {
                username: self.admin.username.clone(),
                password: self.admin.password.clone(),
            },
            self.admin.session_ttl_minutes.saturating_mul(60_000),
        ))
    }

    /// Settings for the home banner slider.
    pub fn banner_carousel(&self) -> CarouselSettings {
        CarouselSettings::autoplay(
            self.carousel.autoplay_interval_ms,
            self.carousel.swipe_threshold_px,
        )
    }

    /// Settings for the product image gallery (no autoplay).
    pub fn product_gallery(&self) -> CarouselSettings {
        CarouselSettings::manual(self.carousel.swipe_threshold_px)
    }

    /// Upload options for an image field in `mode`.
    pub fn upload_options(&self, mode: UploadMode) -> UploadOptions {
        UploadOptions {
            folder: self.cloudinary.folder.clone(),
            mode: match mode {
                UploadMode::Single => UploadMode::Single,
                UploadMode::Multiple { .. } => UploadMode::Multiple {
                    max_files: self.cloudinary.max_files,
                },
            },
            max_file_size_bytes: self.cloudinary.max_file_size_bytes,
            allowed_formats: self.cloudinary.allowed_formats.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn embedded_config_loads_with_expected_defaults() {
        let config = StorefrontConfig::load();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.carousel.autoplay_interval_ms, 5_000);
        assert_eq!(config.carousel.swipe_threshold_px, 50);
        assert_eq!(config.cloudinary.folder, "fabric-store");
        assert_eq!(config.locale.default, Locale::Vi);
    }

    #[test]
    fn upload_options_take_limits_from_config() {
        let config = StorefrontConfig::load();
        let multiple = config.upload_options(UploadMode::Multiple { max_files: 1 });
        assert_eq!(multiple.mode, UploadMode::Multiple { max_files: 10 });
        assert_eq!(multiple.max_file_size_bytes, 5 * 1024 * 1024);
        assert_eq!(config.upload_options(UploadMode::Single).mode, UploadMode::Single);
    }

    #[test]
    fn web_settings_carry_endpoints() {
        let settings = StorefrontConfig::load().web_host_settings();
        assert_eq!(settings.cloudinary.upload_preset, "fabric-store-preset");
        assert_eq!(settings.firestore.database, "(default)");
    }
}
