use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreSection {
    display_name: String,
    zalo_phone: String,
    facebook_page: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FirestoreSection {
    project_id: String,
    api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    database: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CloudinarySection {
    cloud_name: String,
    upload_preset: String,
    folder: String,
    max_files: usize,
    max_file_size_bytes: u64,
    allowed_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CarouselSection {
    autoplay_interval_ms: u32,
    swipe_threshold_px: i32,
    gallery_thumbnail_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AdminSection {
    username: String,
    password: String,
    session_ttl_minutes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LocaleSection {
    default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorefrontToml {
    schema_version: u32,
    store: StoreSection,
    firestore: FirestoreSection,
    cloudinary: CloudinarySection,
    carousel: CarouselSection,
    admin: AdminSection,
    locale: LocaleSection,
}

fn validate(config: &StorefrontToml) -> Result<(), String> {
    if config.schema_version != 1 {
        return Err(format!(
            "schema mismatch: expected 1 found {}",
            config.schema_version
        ));
    }
    if config.carousel.autoplay_interval_ms == 0 {
        return Err("carousel.autoplay_interval_ms must be positive".to_string());
    }
    if config.carousel.swipe_threshold_px < 0 {
        return Err("carousel.swipe_threshold_px must not be negative".to_string());
    }
    if config.cloudinary.max_files == 0 {
        return Err("cloudinary.max_files must be at least 1".to_string());
    }
    if config.cloudinary.allowed_formats.is_empty() {
        return Err("cloudinary.allowed_formats must list at least one extension".to_string());
    }
    if config.admin.username.trim().is_empty() {
        return Err("admin.username must not be empty".to_string());
    }
    if config.admin.session_ttl_minutes == 0 {
        return Err("admin.session_ttl_minutes must be positive".to_string());
    }
    if !matches!(config.locale.default.as_str(), "vi" | "en") {
        return Err(format!(
            "locale.default must be `vi` or `en`, found `{}`",
            config.locale.default
        ));
    }
    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("storefront.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: StorefrontToml = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(err) = validate(&config) {
        panic!("invalid {}: {err}", path.display());
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize storefront config");
    let generated = format!(
        "/// Build-time generated storefront configuration JSON.\n\
pub const STOREFRONT_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("storefront_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
