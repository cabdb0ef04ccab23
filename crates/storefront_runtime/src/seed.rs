//! Bundled catalog loaded into the in-memory store by offline builds.

use leptos::logging;
use platform_host::{encode_fields, Collection, Document};
use serde::Serialize;
use serde_json::Value;

use crate::model::{Banner, ContactInfo, Fabric, Product, ProductCategory};

/// 2025-01-01T00:00:00Z; seeded records count down from here so listing order is stable.
const SEED_EPOCH_MS: i64 = 1_735_689_600_000;
const MINUTE_MS: i64 = 60_000;

const ORIGIN: &str = "Kho Vải Hân Hân - Việt Nam";
const SIZE: &str = "50x8 cm";

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=800&q=80")
}

fn document<T: Serialize>(
    collection: Collection,
    id: &str,
    record: &T,
    stamped_at: i64,
) -> Option<Document> {
    let mut fields = match encode_fields(record) {
        Ok(fields) => fields,
        Err(err) => {
            logging::warn!("skipping seed document {}/{id}: {err}", collection.as_str());
            return None;
        }
    };
    for name in collection.create_timestamps() {
        fields.insert((*name).to_string(), Value::from(stamped_at));
    }
    Some(Document::new(id, fields))
}

fn fabric(
    name: &str,
    slug: &str,
    range: (u64, u64),
    material: &str,
    description: &str,
    uses: &str,
    image: &str,
) -> Fabric {
    Fabric {
        name: name.to_string(),
        slug: slug.to_string(),
        price_per_meter_min: range.0,
        price_per_meter_max: range.1,
        material: material.to_string(),
        description: description.to_string(),
        uses: uses.to_string(),
        image: image.to_string(),
        is_active: true,
        ..Fabric::default()
    }
}

/// Fabric types with their per-meter price ranges.
pub fn seed_fabrics() -> Vec<(&'static str, Fabric)> {
    vec![
        (
            "fabric-1",
            fabric(
                "Lụa Tơ Tằm",
                "lua-to-tam",
                (200_000, 350_000),
                "Sợi tơ tằm tự nhiên 100%",
                "Lụa tơ tằm được dệt từ sợi tơ tự nhiên, bóng mượt, mềm mại và thoáng mát. \
                 Thân thiện với da và điều hòa nhiệt độ tốt.",
                "Áo dài, váy dạ hội, khăn lụa, đồ ngủ cao cấp, áo sơ mi",
                "/images/lua-to-tam.jpg",
            ),
        ),
        (
            "fabric-2",
            fabric(
                "Lụa Satin",
                "lua-satin",
                (150_000, 250_000),
                "Polyester hoặc silk blend",
                "Lụa satin bóng mượt một mặt, mặt kia hơi nhám. Vải mềm, rủ đẹp, giữ form \
                 tốt và bền màu.",
                "Váy cưới, áo dài, đầm dự tiệc, chăn ga gối đệm cao cấp",
                "/images/lua-satin.jpg",
            ),
        ),
        (
            "fabric-3",
            fabric(
                "Vải Gấm",
                "vai-gam",
                (300_000, 500_000),
                "Sợi tổng hợp kết hợp với kim tuyến",
                "Vải gấm có hoa văn nổi, dệt thêm chỉ kim tuyến. Vải dày dặn, giữ form cực \
                 tốt và bền màu.",
                "Áo dài cưới hỏi, trang phục truyền thống, vest, túi xách cao cấp",
                "/images/vai-gam.jpg",
            ),
        ),
        (
            "fabric-4",
            fabric(
                "Vải Kate",
                "vai-kate",
                (80_000, 150_000),
                "Polyester 100%",
                "Vải kate hơi nhám, độ dày vừa phải, ít nhăn và dễ giặt.",
                "Áo sơ mi công sở, váy liền, quần tây, đồng phục",
                "/images/vai-kate.jpg",
            ),
        ),
        (
            "fabric-5",
            fabric(
                "Vải Linen",
                "vai-linen",
                (120_000, 200_000),
                "Sợi lanh tự nhiên hoặc cotton blend",
                "Vải linen có kết cấu thô, thoáng mát và hút ẩm tốt, hợp với thời tiết nóng ẩm.",
                "Quần áo mùa hè, áo sơ mi, túi vải, khăn trải bàn",
                "/images/vai-linen.jpg",
            ),
        ),
        (
            "fabric-6",
            fabric(
                "Vải Voan",
                "vai-voan",
                (50_000, 120_000),
                "Polyester hoặc silk",
                "Vải voan mỏng nhẹ, bán trong suốt, mềm mại và bay bổng.",
                "Váy maxi, áo kiểu, khăn choàng, rèm cửa",
                "/images/vai-voan.jpg",
            ),
        ),
        (
            "fabric-7",
            fabric(
                "Vải Thun 4 Chiều",
                "vai-thun-4-chieu",
                (60_000, 150_000),
                "Cotton blend với spandex/lycra",
                "Vải thun co giãn 4 chiều, đàn hồi cao, thấm hút mồ hôi tốt.",
                "Áo thun, quần legging, đồ thể thao, đồ ngủ",
                "/images/vai-thun.jpg",
            ),
        ),
        (
            "fabric-8",
            fabric(
                "Vải Jean/Denim",
                "vai-jean-denim",
                (100_000, 200_000),
                "Cotton hoặc cotton blend",
                "Vải jean dày dặn, bền chắc. Càng giặt càng mềm và ôm form đẹp.",
                "Quần jean, áo khoác jean, váy, túi xách",
                "/images/vai-jean.jpg",
            ),
        ),
    ]
}

fn silk_description(name: &str) -> String {
    format!(
        "{name} mềm mại, bóng mượt tự nhiên và lên màu chuẩn. Phù hợp may áo dài, đầm dự tiệc \
         và trang phục cao cấp."
    )
}

/// Products shown on the home page.
pub fn seed_products() -> Vec<(&'static str, Product)> {
    let product = |fabric_id: &str,
                   name: &str,
                   slug: &str,
                   price: u64,
                   discount: u8,
                   category: ProductCategory,
                   photos: &[&str]| Product {
        fabric_id: Some(fabric_id.to_string()),
        name: name.to_string(),
        slug: slug.to_string(),
        description: silk_description(name),
        size: SIZE.to_string(),
        origin: ORIGIN.to_string(),
        price_per_meter: price,
        discount_percent: discount,
        category,
        image_urls: photos.iter().map(|photo| unsplash(photo)).collect(),
        is_active: true,
        ..Product::default()
    };

    vec![
        (
            "product-1",
            product(
                "fabric-1",
                "Lụa Tơ Tằm Vàng",
                "lua-to-tam-vang",
                280_000,
                15,
                ProductCategory::Featured,
                &[
                    "1518291344630-4857135fb581",
                    "1509631179647-0177331693ae",
                    "1558769132-cb1aea3c50ae",
                    "1492707892479-7bc8d5a4ee93",
                    "1617038260897-41a1f14a8ca0",
                    "1583743814966-8936f5b7be1a",
                    "1594633313593-bab3825d0caf",
                    "1610701596007-11502861dcfa",
                    "1591993232143-f741605db8c2",
                    "1612198188060-c7c2a3b66eae",
                    "1519817650390-64a93db51149",
                    "1596783074918-c84cb06531ca",
                ],
            ),
        ),
        (
            "product-2",
            product(
                "fabric-1",
                "Lụa Tơ Tằm Champagne",
                "lua-to-tam-champagne",
                260_000,
                0,
                ProductCategory::Bestseller,
                &[
                    "1617038260897-41a1f14a8ca0",
                    "1583743814966-8936f5b7be1a",
                    "1594633313593-bab3825d0caf",
                ],
            ),
        ),
        (
            "product-3",
            product(
                "fabric-1",
                "Lụa Tơ Tằm Hồng",
                "lua-to-tam-hong",
                270_000,
                0,
                ProductCategory::Featured,
                &[
                    "1610701596007-11502861dcfa",
                    "1591993232143-f741605db8c2",
                    "1612198188060-c7c2a3b66eae",
                ],
            ),
        ),
        (
            "product-4",
            product(
                "fabric-1",
                "Lụa Tơ Tằm Đồng",
                "lua-to-tam-dong",
                290_000,
                10,
                ProductCategory::Featured,
                &[
                    "1558769132-cb1aea3c50ae",
                    "1519817650390-64a93db51149",
                    "1596783074918-c84cb06531ca",
                ],
            ),
        ),
        (
            "product-5",
            product(
                "fabric-2",
                "Lụa Satin Đỏ Ngọc Ruby",
                "lua-satin-do-ngoc-ruby",
                46_000,
                0,
                ProductCategory::New,
                &[
                    "1567401893414-76b7b1e5a7a5",
                    "1622519407650-3df9883f76e6",
                    "1610701596007-11502861dcfa",
                    "1609778308579-c9c2378cc3c5",
                ],
            ),
        ),
    ]
}

/// Home-page slides.
pub fn seed_banners() -> Vec<(&'static str, Banner)> {
    let banner = |title: &str, description: &str, photo: &str, order: u32| Banner {
        title: title.to_string(),
        description: description.to_string(),
        image_url: unsplash(photo),
        order,
        is_active: true,
        ..Banner::default()
    };
    vec![
        (
            "banner-1",
            banner(
                "Lụa Tơ Tằm Cao Cấp",
                "Bộ sưu tập lụa tơ tằm mới nhất, cắt theo mét",
                "1558769132-cb1aea3c50ae",
                1,
            ),
        ),
        (
            "banner-2",
            banner(
                "Ưu Đãi Tháng Này",
                "Giảm đến 15% cho lụa tơ tằm vàng",
                "1518291344630-4857135fb581",
                2,
            ),
        ),
        (
            "banner-3",
            banner(
                "Satin Nhiều Màu",
                "Hàng mới về mỗi tuần",
                "1567401893414-76b7b1e5a7a5",
                3,
            ),
        ),
    ]
}

/// Documents for every seeded collection, ready for the in-memory store.
pub fn offline_seed() -> Vec<(Collection, Vec<Document>)> {
    fn stamp_all<T: Serialize>(
        collection: Collection,
        records: Vec<(&'static str, T)>,
    ) -> (Collection, Vec<Document>) {
        let documents = records
            .iter()
            .enumerate()
            .filter_map(|(rank, (id, record))| {
                let rank = i64::try_from(rank).unwrap_or(i64::MAX / MINUTE_MS);
                document(collection, id, record, SEED_EPOCH_MS - rank * MINUTE_MS)
            })
            .collect();
        (collection, documents)
    }

    vec![
        stamp_all(Collection::Fabrics, seed_fabrics()),
        stamp_all(Collection::Products, seed_products()),
        stamp_all(Collection::Banners, seed_banners()),
        stamp_all(
            Collection::ContactInfo,
            vec![("contact-info", ContactInfo::fallback())],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryContentStore;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{catalog, slug::generate_slug};

    fn seeded_store() -> MemoryContentStore {
        let store = MemoryContentStore::default();
        for (collection, documents) in offline_seed() {
            store.seed(collection, documents);
        }
        store
    }

    #[test]
    fn seeded_catalog_is_listable() {
        let store = seeded_store();
        let products = block_on(catalog::active_products(&store, None));
        assert_eq!(products.len(), 5);
        assert_eq!(products[0].slug, "lua-to-tam-vang");

        let banners = block_on(catalog::active_banners(&store));
        assert_eq!(
            banners.iter().map(|b| b.order).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(block_on(catalog::active_fabrics(&store)).len(), 8);
        assert!(block_on(catalog::contact_info(&store)).is_some());
    }

    #[test]
    fn seeded_slugs_match_names_and_ranges_are_ordered() {
        for (_, product) in seed_products() {
            assert_eq!(generate_slug(&product.name), product.slug);
        }
        for (_, fabric) in seed_fabrics() {
            assert!(fabric.price_per_meter_min <= fabric.price_per_meter_max);
        }
    }
}
