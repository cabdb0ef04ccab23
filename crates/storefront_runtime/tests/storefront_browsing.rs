use futures::executor::block_on;
use platform_host::MemoryContentStore;
use pretty_assertions::assert_eq;
use storefront_runtime::{
    catalog,
    carousel::{reduce_carousel, CarouselAction, CarouselSettings, CarouselState},
    format::{format_vnd, order_total, zalo_order_link},
    forms::{clamp_quantity, InquiryDraft},
    model::{MessageStatus, ProductCategory},
    request::RequestTracker,
    search::filter_products,
    seed::offline_seed,
};

fn seeded_store() -> MemoryContentStore {
    let store = MemoryContentStore::default();
    for (collection, documents) in offline_seed() {
        store.seed(collection, documents);
    }
    store
}

#[test]
fn banners_drive_an_autoplaying_slider() {
    let store = seeded_store();
    let banners = block_on(catalog::active_banners(&store));
    let settings = CarouselSettings::default();
    let mut state = CarouselState::default();

    reduce_carousel(&mut state, &settings, CarouselAction::SetSlideCount(banners.len()))
        .expect("mounted");
    for _ in 0..banners.len() {
        reduce_carousel(&mut state, &settings, CarouselAction::AutoplayTick).expect("mounted");
    }
    assert_eq!(state.index, 0);
    assert!(state.autoplay_armed);

    reduce_carousel(&mut state, &settings, CarouselAction::Prev).expect("mounted");
    assert_eq!(state.index, 0);
}

#[test]
fn category_tabs_ignore_superseded_fetches() {
    let store = seeded_store();
    let tracker = RequestTracker::new();

    let featured_ticket = tracker.begin();
    let featured = block_on(catalog::active_products(
        &store,
        Some(ProductCategory::Featured),
    ));
    let new_ticket = tracker.begin();
    let new_arrivals = block_on(catalog::active_products(&store, Some(ProductCategory::New)));

    assert!(!tracker.is_current(featured_ticket));
    assert!(tracker.is_current(new_ticket));
    assert_eq!(featured.len(), 3);
    assert_eq!(new_arrivals.len(), 1);
    assert_eq!(new_arrivals[0].slug, "lua-satin-do-ngoc-ruby");
}

#[test]
fn search_narrows_the_loaded_tab() {
    let store = seeded_store();
    let products = block_on(catalog::active_products(&store, None));

    let hits = filter_products(&products, "champagne");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].slug, "lua-to-tam-champagne");
    assert_eq!(filter_products(&products, "   ").len(), products.len());
}

#[test]
fn inquiry_is_stored_as_new_and_priced_for_zalo() {
    let store = seeded_store();
    let product = block_on(catalog::product_by_slug(&store, "lua-to-tam-vang")).expect("seeded");
    let selected = product.cover_image().expect("cover").to_string();

    let draft = InquiryDraft {
        customer_name: "Nguyễn Thị Lan".to_string(),
        customer_phone: "0909 123 456".to_string(),
        quantity: clamp_quantity("3"),
        ..InquiryDraft::default()
    };
    let message = draft.validate(&product.id, &selected).expect("valid inquiry");
    block_on(catalog::save_contact_message(&store, &message)).expect("saved");

    let inbox = block_on(catalog::contact_messages(&store, Some(MessageStatus::New)));
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].quantity, 3);
    assert_eq!(inbox[0].selected_image_url, selected);

    let total = order_total(product.discounted_price(), message.quantity);
    assert_eq!(total, 714_000);
    assert_eq!(format_vnd(total), "714.000 ₫");
    assert!(zalo_order_link("0123456789", 3, &product.name).starts_with("https://zalo.me/0123456789"));
}
