//! Catalog records as stored in the document database.
//!
//! Field names on the wire are camelCase. Store-managed values (`id`, timestamps) are read but
//! never written back; the store assigns them.

use serde::{Deserialize, Deserializer, Serialize};

fn default_true() -> bool {
    true
}

/// Accepts integer or float JSON numbers for whole-number fields.
///
/// Documents written by other clients may carry `280000.0` where `280000` is meant.
fn whole_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let whole = match &value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_i64().map(|i| i.max(0) as u64))
            .or_else(|| n.as_f64().map(|f| f.max(0.0).round() as u64)),
        serde_json::Value::Null => Some(0),
        _ => None,
    };
    whole
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| serde::de::Error::custom(format!("expected a whole number, got {value}")))
}

/// Product grouping used by the home page tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Featured picks.
    #[default]
    Featured,
    /// New arrivals.
    New,
    /// Best sellers.
    Bestseller,
}

impl ProductCategory {
    /// Every category in tab order.
    pub const ALL: [Self; 3] = [Self::Featured, Self::New, Self::Bestseller];

    /// Stored token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::New => "new",
            Self::Bestseller => "bestseller",
        }
    }

    /// Parses a stored token.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == raw)
    }
}

/// A fabric product sold by the meter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store id.
    #[serde(default, skip_serializing)]
    pub id: String,
    /// Fabric type this product is cut from.
    #[serde(default)]
    pub fabric_id: Option<String>,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub origin: String,
    /// Price per meter in VND.
    #[serde(default, deserialize_with = "whole_number")]
    pub price_per_meter: u64,
    /// Discount percentage, 0..=100.
    #[serde(default, deserialize_with = "whole_number")]
    pub discount_percent: u8,
    #[serde(default)]
    pub category: ProductCategory,
    /// Gallery images; the first is the cover.
    #[serde(default)]
    pub image_urls: Vec<String>,
    /// Public visibility.
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing)]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<i64>,
}

impl Product {
    /// Cover image, when any image is set.
    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    /// Price per meter after the discount, rounded down.
    pub fn discounted_price(&self) -> u64 {
        let percent = u64::from(self.discount_percent.min(100));
        self.price_per_meter * (100 - percent) / 100
    }
}

/// A fabric type with an indicative price range.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fabric {
    #[serde(default, skip_serializing)]
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Lower bound of the price range in VND per meter.
    #[serde(default, deserialize_with = "whole_number")]
    pub price_per_meter_min: u64,
    /// Upper bound of the price range in VND per meter.
    #[serde(default, deserialize_with = "whole_number")]
    pub price_per_meter_max: u64,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub description: String,
    /// Typical garments and uses.
    #[serde(default)]
    pub uses: String,
    /// Single image URL.
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing)]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<i64>,
}

/// One promotional slide on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(default, skip_serializing)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: String,
    /// Display position, ascending, starting at 1.
    #[serde(default, deserialize_with = "whole_number")]
    pub order: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing)]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<i64>,
}

/// Shop contact details. A single document in its collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    #[serde(skip_serializing)]
    pub id: String,
    pub avatar_url: String,
    pub store_name: String,
    pub owner_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub zalo_link: String,
    pub facebook_link: String,
    pub description: String,
    #[serde(skip_serializing)]
    pub updated_at: Option<i64>,
}

impl ContactInfo {
    /// Details shown before the shop has saved its own.
    pub fn fallback() -> Self {
        Self {
            id: String::new(),
            avatar_url: String::new(),
            store_name: "KHO VẢI HÂN HÂN".to_string(),
            owner_name: "Chủ Cửa Hàng".to_string(),
            phone: "0123456789".to_string(),
            email: "contact@khovaihanhan.com".to_string(),
            address: "123 Đường ABC".to_string(),
            city: "Hồ Chí Minh".to_string(),
            zalo_link: "https://zalo.me/0123456789".to_string(),
            facebook_link: "https://facebook.com/khovaihanhan".to_string(),
            description: "Kho Vải Hân Hân là địa chỉ uy tín chuyên cung cấp các loại vải cao cấp \
                          với đa dạng chủng loại và màu sắc."
                .to_string(),
            updated_at: None,
        }
    }

    /// First letter of the store name, used when no avatar is set.
    pub fn monogram(&self) -> String {
        self.store_name
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_default()
    }
}

/// Channel a customer asked to be contacted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Zalo,
    Facebook,
}

impl ContactMethod {
    /// Every channel, in form order.
    pub const ALL: [Self; 2] = [Self::Zalo, Self::Facebook];

    /// Stored token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zalo => "zalo",
            Self::Facebook => "facebook",
        }
    }

    /// Brand name shown in forms and lists.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Zalo => "Zalo",
            Self::Facebook => "Facebook",
        }
    }

    /// Parses a stored token.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == raw)
    }
}

/// Follow-up state of a customer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Not yet handled.
    #[default]
    New,
    /// The shop has reached out.
    Contacted,
    /// Order closed.
    Completed,
}

impl MessageStatus {
    /// Every status in workflow order.
    pub const ALL: [Self; 3] = [Self::New, Self::Contacted, Self::Completed];

    /// Stored token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Completed => "completed",
        }
    }

    /// Parses a stored token.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }
}

/// An order inquiry left by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(default, skip_serializing)]
    pub id: String,
    pub product_id: String,
    #[serde(default)]
    pub selected_image_url: String,
    #[serde(default, deserialize_with = "whole_number")]
    pub quantity: u32,
    pub customer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub contact_method: ContactMethod,
    #[serde(default)]
    pub status: MessageStatus,
    #[serde(default, skip_serializing)]
    pub created_at: Option<i64>,
}

#[cfg(test)]
mod tests {
    use platform_host::{encode_fields, Document};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn product_decodes_from_camel_case_document() {
        let document = Document::new(
            "p1",
            json!({
                "name": "Lụa Tơ Tằm Vàng",
                "slug": "lua-to-tam-vang",
                "pricePerMeter": 280000.0,
                "discountPercent": 15,
                "category": "bestseller",
                "imageUrls": ["a.jpg", "b.jpg"],
                "createdAt": 1_700_000_000_000_i64
            })
            .as_object()
            .cloned()
            .unwrap_or_default(),
        );
        let product: Product = document.decode().expect("decode product");
        assert_eq!(product.id, "p1");
        assert_eq!(product.price_per_meter, 280_000);
        assert_eq!(product.category, ProductCategory::Bestseller);
        assert!(product.is_active);
        assert_eq!(product.cover_image(), Some("a.jpg"));
        assert_eq!(product.created_at, Some(1_700_000_000_000));
    }

    #[test]
    fn store_managed_fields_are_not_encoded() {
        let banner = Banner {
            id: "b1".to_string(),
            title: "Sale".to_string(),
            image_url: "x.jpg".to_string(),
            order: 1,
            is_active: true,
            created_at: Some(5),
            ..Banner::default()
        };
        let fields = encode_fields(&banner).expect("encode");
        assert!(fields.get("id").is_none());
        assert!(fields.get("createdAt").is_none());
        assert_eq!(fields.get("imageUrl"), Some(&json!("x.jpg")));
        assert_eq!(fields.get("isActive"), Some(&json!(true)));
    }

    #[test]
    fn discounted_price_rounds_down() {
        let product = Product {
            price_per_meter: 280_000,
            discount_percent: 15,
            ..Product::default()
        };
        assert_eq!(product.discounted_price(), 238_000);
        let odd = Product {
            price_per_meter: 999,
            discount_percent: 50,
            ..Product::default()
        };
        assert_eq!(odd.discounted_price(), 499);
    }

    #[test]
    fn optional_message_fields_are_omitted_when_empty() {
        let message = ContactMessage {
            product_id: "p1".to_string(),
            customer_name: "Lan".to_string(),
            quantity: 2,
            ..ContactMessage::default()
        };
        let fields = encode_fields(&message).expect("encode");
        assert!(fields.get("customerPhone").is_none());
        assert_eq!(fields.get("status"), Some(&json!("new")));
        assert_eq!(fields.get("contactMethod"), Some(&json!("zalo")));
    }

    #[test]
    fn tokens_round_trip_through_parse() {
        assert_eq!(ProductCategory::parse("new"), Some(ProductCategory::New));
        assert_eq!(MessageStatus::parse("contacted"), Some(MessageStatus::Contacted));
        assert_eq!(MessageStatus::parse("archived"), None);
    }
}
