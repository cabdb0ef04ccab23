//! Editable form models for the back-office and the storefront inquiry form.
//!
//! Drafts hold raw input text. `validate` turns a draft into a catalog record without consuming
//! it, so a failed submission leaves every typed value in place.

use std::future::Future;

use leptos::logging;
use platform_host::AlertService;
use thiserror::Error;

use crate::{
    catalog::CatalogError,
    i18n::{Locale, Phrase},
    model::{
        Banner, ContactInfo, ContactMessage, ContactMethod, Fabric, Product, ProductCategory,
    },
    slug::generate_slug,
    upload::ImageSelection,
};

/// Form inputs that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FormField {
    Title,
    Description,
    DisplayOrder,
    Image,
    Images,
    Name,
    Slug,
    Size,
    Origin,
    Price,
    Discount,
    PriceMin,
    PriceMax,
    Material,
    Uses,
    Avatar,
    StoreName,
    OwnerName,
    Phone,
    Address,
    City,
    ZaloLink,
    FacebookLink,
    CustomerName,
    Quantity,
}

impl FormField {
    /// Localized label.
    pub fn label(self) -> Phrase {
        match self {
            Self::Title => Phrase::Title,
            Self::Description => Phrase::Description,
            Self::DisplayOrder => Phrase::DisplayOrder,
            Self::Image => Phrase::Image,
            Self::Images => Phrase::Images,
            Self::Name => Phrase::Name,
            Self::Slug => Phrase::Slug,
            Self::Size => Phrase::Size,
            Self::Origin => Phrase::Origin,
            Self::Price => Phrase::Price,
            Self::Discount => Phrase::DiscountPercent,
            Self::PriceMin => Phrase::PriceMin,
            Self::PriceMax => Phrase::PriceMax,
            Self::Material => Phrase::Material,
            Self::Uses => Phrase::Uses,
            Self::Avatar => Phrase::Avatar,
            Self::StoreName => Phrase::StoreName,
            Self::OwnerName => Phrase::OwnerName,
            Self::Phone => Phrase::Phone,
            Self::Address => Phrase::Address,
            Self::City => Phrase::City,
            Self::ZaloLink => Phrase::ZaloLink,
            Self::FacebookLink => Phrase::FacebookLink,
            Self::CustomerName => Phrase::CustomerName,
            Self::Quantity => Phrase::Quantity,
        }
    }

    /// Stable identifier used in logs and error text.
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DisplayOrder => "order",
            Self::Image => "image",
            Self::Images => "images",
            Self::Name => "name",
            Self::Slug => "slug",
            Self::Size => "size",
            Self::Origin => "origin",
            Self::Price => "price",
            Self::Discount => "discount",
            Self::PriceMin => "price_min",
            Self::PriceMax => "price_max",
            Self::Material => "material",
            Self::Uses => "uses",
            Self::Avatar => "avatar",
            Self::StoreName => "store_name",
            Self::OwnerName => "owner_name",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::City => "city",
            Self::ZaloLink => "zalo_link",
            Self::FacebookLink => "facebook_link",
            Self::CustomerName => "customer_name",
            Self::Quantity => "quantity",
        }
    }
}

/// Validation failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required text input is blank.
    #[error("`{}` is required", .0.key())]
    Required(FormField),
    /// An image field has no image.
    #[error("`{}` needs at least one image", .0.key())]
    ImageRequired(FormField),
    /// A numeric input does not parse.
    #[error("`{}` is not a valid number", .0.key())]
    InvalidNumber(FormField),
    /// Discount outside 0..=100.
    #[error("discount must be between 0 and 100")]
    DiscountOutOfRange,
    /// Banner order below 1.
    #[error("display order must be at least 1")]
    OrderTooSmall,
    /// Fabric range with min above max.
    #[error("lowest price exceeds highest price")]
    PriceRangeInverted,
    /// Inquiry for less than one meter.
    #[error("quantity must be at least 1")]
    QuantityTooSmall,
    /// Inquiry with neither phone nor email.
    #[error("a phone number or email is required")]
    ContactChannelRequired,
}

impl FormError {
    /// Localized alert text.
    pub fn message(&self, locale: Locale) -> String {
        match self {
            Self::Required(field) => format!(
                "{}: {}",
                Phrase::FieldRequired.text(locale),
                field.label().text(locale)
            ),
            Self::ImageRequired(_) => Phrase::ImageRequired.text(locale).to_string(),
            Self::InvalidNumber(field) => format!(
                "{}: {}",
                Phrase::InvalidNumber.text(locale),
                field.label().text(locale)
            ),
            Self::DiscountOutOfRange => Phrase::DiscountOutOfRange.text(locale).to_string(),
            Self::OrderTooSmall => Phrase::OrderTooSmall.text(locale).to_string(),
            Self::PriceRangeInverted => Phrase::PriceRangeInverted.text(locale).to_string(),
            Self::QuantityTooSmall => Phrase::QuantityTooSmall.text(locale).to_string(),
            Self::ContactChannelRequired => {
                Phrase::ContactChannelRequired.text(locale).to_string()
            }
        }
    }
}

fn required(value: &str, field: FormField) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_number(value: &str, field: FormField) -> Result<u64, FormError> {
    let digits: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '.' | ',' | ' '))
        .collect();
    if digits.is_empty() {
        return Err(FormError::Required(field));
    }
    digits
        .parse::<u64>()
        .map_err(|_| FormError::InvalidNumber(field))
}

/// Progress of one form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// Accepting input.
    #[default]
    Editing,
    /// A write is in flight; the submit button is disabled.
    Submitting,
    /// The write succeeded.
    Saved,
    /// Validation or the write failed; inputs keep their values.
    Failed(String),
}

impl FormStatus {
    /// Returns whether a write is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// The failure text, if the last attempt failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Shows a validation failure and returns the resulting status.
pub fn reject_invalid(alerts: &dyn AlertService, locale: Locale, err: &FormError) -> FormStatus {
    let message = err.message(locale);
    alerts.alert(&message);
    FormStatus::Failed(message)
}

fn write_failure_message(err: &CatalogError, locale: Locale) -> String {
    match err {
        CatalogError::SlugTaken(_) => Phrase::SlugTaken.text(locale).to_string(),
        CatalogError::Store(_) => Phrase::SaveFailed.text(locale).to_string(),
    }
}

/// Awaits a catalog write and reports it with one blocking alert.
///
/// Success alerts `success` and yields [`FormStatus::Saved`]; failure alerts a localized
/// failure message and yields [`FormStatus::Failed`].
pub async fn submit_write<T, F>(
    alerts: &dyn AlertService,
    locale: Locale,
    success: Phrase,
    write: F,
) -> FormStatus
where
    F: Future<Output = Result<T, CatalogError>>,
{
    match write.await {
        Ok(_) => {
            alerts.alert(success.text(locale));
            FormStatus::Saved
        }
        Err(err) => {
            logging::warn!("catalog write failed: {err}");
            let message = write_failure_message(&err, locale);
            alerts.alert(&message);
            FormStatus::Failed(message)
        }
    }
}

/// Asks for confirmation, then runs `delete`. Returns `None` when the user declines.
pub async fn confirm_delete<F, Fut>(
    alerts: &dyn AlertService,
    locale: Locale,
    delete: F,
) -> Option<FormStatus>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), CatalogError>>,
{
    if !alerts.confirm(Phrase::ConfirmDelete.text(locale)) {
        return None;
    }
    Some(match delete().await {
        Ok(()) => {
            alerts.alert(Phrase::DeleteSucceeded.text(locale));
            FormStatus::Saved
        }
        Err(err) => {
            logging::warn!("catalog delete failed: {err}");
            let message = Phrase::DeleteFailed.text(locale).to_string();
            alerts.alert(&message);
            FormStatus::Failed(message)
        }
    })
}

/// Slug input that follows the name until edited by hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlugInput {
    /// Current slug text.
    pub value: String,
    /// Set once the slug was typed by hand.
    pub edited: bool,
}

impl SlugInput {
    /// Slug loaded from an existing record; it no longer follows the name.
    pub fn fixed(value: &str) -> Self {
        Self {
            value: value.to_string(),
            edited: true,
        }
    }

    /// Re-derives the slug from `name` unless it was edited.
    pub fn follow_name(&mut self, name: &str) {
        if !self.edited {
            self.value = generate_slug(name);
        }
    }

    /// Hand-edits the slug. Clearing it makes it follow the name again.
    pub fn edit(&mut self, value: String) {
        self.edited = !value.trim().is_empty();
        self.value = value;
    }

    fn resolve(&self, name: &str) -> Result<String, FormError> {
        let slug = generate_slug(if self.value.trim().is_empty() {
            name
        } else {
            &self.value
        });
        if slug.is_empty() {
            Err(FormError::Required(FormField::Slug))
        } else {
            Ok(slug)
        }
    }
}

/// Banner create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerDraft {
    pub title: String,
    pub description: String,
    pub order: String,
    pub image: ImageSelection,
    pub is_active: bool,
}

impl Default for BannerDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            order: "1".to_string(),
            image: ImageSelection::default(),
            is_active: true,
        }
    }
}

impl BannerDraft {
    /// Draft pre-filled from a stored banner.
    pub fn from_record(banner: &Banner) -> Self {
        Self {
            title: banner.title.clone(),
            description: banner.description.clone(),
            order: banner.order.to_string(),
            image: ImageSelection::single(&banner.image_url),
            is_active: banner.is_active,
        }
    }

    /// Checks the draft and builds the record to write.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<Banner, FormError> {
        let title = required(&self.title, FormField::Title)?;
        let description = required(&self.description, FormField::Description)?;
        let order = parse_number(&self.order, FormField::DisplayOrder)?;
        if order < 1 {
            return Err(FormError::OrderTooSmall);
        }
        let order = u32::try_from(order).map_err(|_| FormError::InvalidNumber(FormField::DisplayOrder))?;
        let image_url = self
            .image
            .first()
            .ok_or(FormError::ImageRequired(FormField::Image))?
            .to_string();
        Ok(Banner {
            title,
            description,
            image_url,
            order,
            is_active: self.is_active,
            ..Banner::default()
        })
    }
}

/// Product create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub slug: SlugInput,
    pub fabric_id: Option<String>,
    pub description: String,
    pub size: String,
    pub origin: String,
    pub price_per_meter: String,
    pub discount_percent: String,
    pub category: ProductCategory,
    pub images: ImageSelection,
    pub is_active: bool,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: SlugInput::default(),
            fabric_id: None,
            description: String::new(),
            size: String::new(),
            origin: String::new(),
            price_per_meter: String::new(),
            discount_percent: "0".to_string(),
            category: ProductCategory::Featured,
            images: ImageSelection::default(),
            is_active: true,
        }
    }
}

impl ProductDraft {
    /// Draft pre-filled from a stored product.
    pub fn from_record(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            slug: SlugInput::fixed(&product.slug),
            fabric_id: product.fabric_id.clone(),
            description: product.description.clone(),
            size: product.size.clone(),
            origin: product.origin.clone(),
            price_per_meter: product.price_per_meter.to_string(),
            discount_percent: product.discount_percent.to_string(),
            category: product.category,
            images: ImageSelection::from_urls(product.image_urls.iter().cloned()),
            is_active: product.is_active,
        }
    }

    /// Updates the name and the slug that follows it.
    pub fn set_name(&mut self, name: String) {
        self.slug.follow_name(&name);
        self.name = name;
    }

    /// Checks the draft and builds the record to write.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<Product, FormError> {
        let name = required(&self.name, FormField::Name)?;
        let slug = self.slug.resolve(&name)?;
        let description = required(&self.description, FormField::Description)?;
        let size = required(&self.size, FormField::Size)?;
        let origin = required(&self.origin, FormField::Origin)?;
        let price_per_meter = parse_number(&self.price_per_meter, FormField::Price)?;
        let discount = if self.discount_percent.trim().is_empty() {
            0
        } else {
            parse_number(&self.discount_percent, FormField::Discount)?
        };
        let discount_percent = u8::try_from(discount)
            .ok()
            .filter(|percent| *percent <= 100)
            .ok_or(FormError::DiscountOutOfRange)?;
        if self.images.is_empty() {
            return Err(FormError::ImageRequired(FormField::Images));
        }
        Ok(Product {
            fabric_id: self.fabric_id.as_deref().and_then(optional),
            name,
            slug,
            description,
            size,
            origin,
            price_per_meter,
            discount_percent,
            category: self.category,
            image_urls: self.images.urls().to_vec(),
            is_active: self.is_active,
            ..Product::default()
        })
    }
}

/// Fabric create/edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FabricDraft {
    pub name: String,
    pub slug: SlugInput,
    pub price_per_meter_min: String,
    pub price_per_meter_max: String,
    pub material: String,
    pub description: String,
    pub uses: String,
    pub image: ImageSelection,
    pub is_active: bool,
}

impl Default for FabricDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            slug: SlugInput::default(),
            price_per_meter_min: String::new(),
            price_per_meter_max: String::new(),
            material: String::new(),
            description: String::new(),
            uses: String::new(),
            image: ImageSelection::default(),
            is_active: true,
        }
    }
}

impl FabricDraft {
    /// Draft pre-filled from a stored fabric.
    pub fn from_record(fabric: &Fabric) -> Self {
        Self {
            name: fabric.name.clone(),
            slug: SlugInput::fixed(&fabric.slug),
            price_per_meter_min: fabric.price_per_meter_min.to_string(),
            price_per_meter_max: fabric.price_per_meter_max.to_string(),
            material: fabric.material.clone(),
            description: fabric.description.clone(),
            uses: fabric.uses.clone(),
            image: ImageSelection::single(&fabric.image),
            is_active: fabric.is_active,
        }
    }

    /// Updates the name and the slug that follows it.
    pub fn set_name(&mut self, name: String) {
        self.slug.follow_name(&name);
        self.name = name;
    }

    /// Checks the draft and builds the record to write.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<Fabric, FormError> {
        let name = required(&self.name, FormField::Name)?;
        let slug = self.slug.resolve(&name)?;
        let price_per_meter_min = parse_number(&self.price_per_meter_min, FormField::PriceMin)?;
        let price_per_meter_max = parse_number(&self.price_per_meter_max, FormField::PriceMax)?;
        if price_per_meter_min > price_per_meter_max {
            return Err(FormError::PriceRangeInverted);
        }
        let material = required(&self.material, FormField::Material)?;
        let description = required(&self.description, FormField::Description)?;
        let uses = required(&self.uses, FormField::Uses)?;
        let image = self
            .image
            .first()
            .ok_or(FormError::ImageRequired(FormField::Image))?
            .to_string();
        Ok(Fabric {
            name,
            slug,
            price_per_meter_min,
            price_per_meter_max,
            material,
            description,
            uses,
            image,
            is_active: self.is_active,
            ..Fabric::default()
        })
    }
}

/// Contact info form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactInfoDraft {
    /// Id of the stored document, empty before the first save.
    pub id: String,
    pub avatar: ImageSelection,
    pub store_name: String,
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zalo_link: String,
    pub facebook_link: String,
    pub description: String,
}

impl ContactInfoDraft {
    /// Draft pre-filled from stored details.
    pub fn from_record(info: &ContactInfo) -> Self {
        Self {
            id: info.id.clone(),
            avatar: ImageSelection::single(&info.avatar_url),
            store_name: info.store_name.clone(),
            owner_name: info.owner_name.clone(),
            phone: info.phone.clone(),
            email: info.email.clone(),
            address: info.address.clone(),
            city: info.city.clone(),
            zalo_link: info.zalo_link.clone(),
            facebook_link: info.facebook_link.clone(),
            description: info.description.clone(),
        }
    }

    /// Checks the draft and builds the record to write.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<ContactInfo, FormError> {
        let avatar_url = self
            .avatar
            .first()
            .ok_or(FormError::ImageRequired(FormField::Avatar))?
            .to_string();
        Ok(ContactInfo {
            id: self.id.clone(),
            avatar_url,
            store_name: required(&self.store_name, FormField::StoreName)?,
            owner_name: required(&self.owner_name, FormField::OwnerName)?,
            phone: required(&self.phone, FormField::Phone)?,
            email: self.email.trim().to_string(),
            address: required(&self.address, FormField::Address)?,
            city: required(&self.city, FormField::City)?,
            zalo_link: required(&self.zalo_link, FormField::ZaloLink)?,
            facebook_link: required(&self.facebook_link, FormField::FacebookLink)?,
            description: self.description.trim().to_string(),
            updated_at: None,
        })
    }
}

/// Storefront order inquiry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryDraft {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub customer_city: String,
    pub message: String,
    pub quantity: u32,
    pub contact_method: ContactMethod,
}

impl Default for InquiryDraft {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_email: String::new(),
            customer_city: String::new(),
            message: String::new(),
            quantity: 1,
            contact_method: ContactMethod::Zalo,
        }
    }
}

impl InquiryDraft {
    /// Checks the draft and builds the message for `product_id`.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(
        &self,
        product_id: &str,
        selected_image_url: &str,
    ) -> Result<ContactMessage, FormError> {
        let customer_name = required(&self.customer_name, FormField::CustomerName)?;
        if self.quantity < 1 {
            return Err(FormError::QuantityTooSmall);
        }
        let customer_phone = optional(&self.customer_phone);
        let customer_email = optional(&self.customer_email);
        if customer_phone.is_none() && customer_email.is_none() {
            return Err(FormError::ContactChannelRequired);
        }
        Ok(ContactMessage {
            product_id: product_id.to_string(),
            selected_image_url: selected_image_url.to_string(),
            quantity: self.quantity,
            customer_name,
            customer_phone,
            customer_email,
            customer_city: optional(&self.customer_city),
            message: optional(&self.message),
            contact_method: self.contact_method,
            ..ContactMessage::default()
        })
    }
}

/// Clamps a typed quantity to at least one meter.
pub fn clamp_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().ok().filter(|q| *q > 0).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryAlertService, StoreError};
    use pretty_assertions::assert_eq;

    use super::*;

    fn valid_product() -> ProductDraft {
        let mut draft = ProductDraft::default();
        draft.set_name("Lụa Tơ Tằm Hồng".to_string());
        draft.description = "Mềm".to_string();
        draft.size = "50x8 cm".to_string();
        draft.origin = "Việt Nam".to_string();
        draft.price_per_meter = "270.000".to_string();
        draft.discount_percent = "10".to_string();
        draft.images = ImageSelection::single("a.jpg");
        draft
    }

    #[test]
    fn product_slug_follows_name_until_edited() {
        let mut draft = valid_product();
        assert_eq!(draft.slug.value, "lua-to-tam-hong");
        draft.slug.edit("hong-dac-biet".to_string());
        draft.set_name("Lụa Khác".to_string());
        assert_eq!(draft.slug.value, "hong-dac-biet");

        let product = draft.validate().expect("valid");
        assert_eq!(product.slug, "hong-dac-biet");
        assert_eq!(product.price_per_meter, 270_000);
        assert_eq!(product.discount_percent, 10);
    }

    #[test]
    fn product_rules_reject_bad_discount_and_missing_images() {
        let mut draft = valid_product();
        draft.discount_percent = "101".to_string();
        assert_eq!(draft.validate(), Err(FormError::DiscountOutOfRange));
        draft.discount_percent = "100".to_string();
        assert!(draft.validate().is_ok());

        draft.images = ImageSelection::default();
        assert_eq!(
            draft.validate(),
            Err(FormError::ImageRequired(FormField::Images))
        );
        draft.price_per_meter = "abc".to_string();
        assert_eq!(
            draft.validate(),
            Err(FormError::InvalidNumber(FormField::Price))
        );
    }

    #[test]
    fn banner_order_must_be_positive() {
        let mut draft = BannerDraft {
            title: "Sale".to_string(),
            description: "Giảm giá".to_string(),
            image: ImageSelection::single("b.jpg"),
            ..BannerDraft::default()
        };
        assert_eq!(draft.validate().map(|b| b.order), Ok(1));
        draft.order = "0".to_string();
        assert_eq!(draft.validate(), Err(FormError::OrderTooSmall));
        draft.order = String::new();
        assert_eq!(
            draft.validate(),
            Err(FormError::Required(FormField::DisplayOrder))
        );
    }

    #[test]
    fn fabric_range_must_be_ordered() {
        let mut draft = FabricDraft::default();
        draft.set_name("Vải Voan".to_string());
        draft.price_per_meter_min = "120000".to_string();
        draft.price_per_meter_max = "50000".to_string();
        draft.material = "Polyester".to_string();
        draft.description = "Mỏng".to_string();
        draft.uses = "Váy".to_string();
        draft.image = ImageSelection::single("v.jpg");
        assert_eq!(draft.validate(), Err(FormError::PriceRangeInverted));
        draft.price_per_meter_max = "150000".to_string();
        assert_eq!(draft.validate().map(|f| f.slug), Ok("vai-voan".to_string()));
    }

    #[test]
    fn contact_info_requires_avatar_first() {
        let mut draft = ContactInfoDraft::from_record(&ContactInfo::fallback());
        assert_eq!(
            draft.validate(),
            Err(FormError::ImageRequired(FormField::Avatar))
        );
        draft.avatar = ImageSelection::single("avatar.png");
        draft.city = "  ".to_string();
        assert_eq!(draft.validate(), Err(FormError::Required(FormField::City)));
    }

    #[test]
    fn inquiry_needs_name_and_a_channel() {
        let mut draft = InquiryDraft {
            customer_name: "Lan".to_string(),
            ..InquiryDraft::default()
        };
        assert_eq!(
            draft.validate("p1", "a.jpg"),
            Err(FormError::ContactChannelRequired)
        );
        draft.customer_email = "lan@example.com".to_string();
        let message = draft.validate("p1", "a.jpg").expect("valid");
        assert_eq!(message.customer_phone, None);
        assert_eq!(message.quantity, 1);
        draft.quantity = 0;
        assert_eq!(draft.validate("p1", "a.jpg"), Err(FormError::QuantityTooSmall));
    }

    #[test]
    fn failed_write_alerts_and_keeps_the_draft() {
        let alerts = MemoryAlertService::default();
        let draft = valid_product();
        let before = draft.clone();
        let record = draft.validate().expect("valid");

        let status = block_on(submit_write(
            &alerts,
            Locale::En,
            Phrase::CreateSucceeded,
            async move {
                let _ = record;
                Err::<String, _>(CatalogError::Store(StoreError::Transport("offline".into())))
            },
        ));
        assert_eq!(
            status,
            FormStatus::Failed("Saving failed. Please try again.".to_string())
        );
        assert_eq!(alerts.alerts(), vec!["Saving failed. Please try again."]);
        assert_eq!(draft, before);
    }

    #[test]
    fn successful_write_alerts_success() {
        let alerts = MemoryAlertService::default();
        let status = block_on(submit_write(
            &alerts,
            Locale::Vi,
            Phrase::UpdateSucceeded,
            async { Ok::<(), CatalogError>(()) },
        ));
        assert_eq!(status, FormStatus::Saved);
        assert_eq!(alerts.alerts(), vec!["Cập nhật thành công!"]);
    }

    #[test]
    fn declined_delete_does_nothing() {
        let alerts = MemoryAlertService::default();
        let mut ran = false;
        let outcome = block_on(confirm_delete(&alerts, Locale::En, || {
            ran = true;
            async { Ok(()) }
        }));
        assert_eq!(outcome, None);
        assert!(!ran);
        assert_eq!(alerts.confirms().len(), 1);
    }

    #[test]
    fn validation_messages_are_localized() {
        assert_eq!(
            FormError::Required(FormField::StoreName).message(Locale::Vi),
            "Vui lòng nhập: Tên cửa hàng"
        );
        assert_eq!(
            reject_invalid(&MemoryAlertService::default(), Locale::En, &FormError::OrderTooSmall),
            FormStatus::Failed("Display order must be 1 or more".to_string())
        );
    }

    #[test]
    fn quantity_input_clamps_to_one() {
        assert_eq!(clamp_quantity("3"), 3);
        assert_eq!(clamp_quantity("0"), 1);
        assert_eq!(clamp_quantity("-2"), 1);
        assert_eq!(clamp_quantity("abc"), 1);
    }
}
