use futures::executor::block_on;
use platform_host::{
    AdminCredentials, Collection, LocalAuthService, MemoryAlertService, MemoryClientStateStore,
    MemoryContentStore, MemoryMediaUploadService, UploadFile,
};
use pretty_assertions::assert_eq;
use storefront_runtime::{
    catalog,
    forms::{confirm_delete, submit_write, BannerDraft, FormStatus, ProductDraft},
    i18n::{Locale, Phrase},
    seed::offline_seed,
    session::{restore_session, sign_in, SessionState},
    upload::{upload_batch, ImageSelection, UploadMode},
};

fn seeded_store() -> MemoryContentStore {
    let store = MemoryContentStore::default();
    for (collection, documents) in offline_seed() {
        store.seed(collection, documents);
    }
    store
}

fn png(name: &str) -> UploadFile {
    UploadFile {
        file_name: name.to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

#[test]
fn signed_in_admin_creates_a_product_from_uploaded_images() {
    let auth = LocalAuthService::new(
        AdminCredentials {
            username: "admin".to_string(),
            password: "secret".to_string(),
        },
        60 * 60 * 1000,
    );
    let client_state = MemoryClientStateStore::default();
    block_on(sign_in(&auth, &client_state, "admin", "secret")).expect("sign in");
    assert!(matches!(
        block_on(restore_session(&auth, &client_state)),
        SessionState::SignedIn(_)
    ));

    let store = seeded_store();
    let media = MemoryMediaUploadService::default();
    let alerts = MemoryAlertService::default();
    let mode = UploadMode::Multiple { max_files: 10 };

    let outcome = block_on(upload_batch(
        &media,
        "fabric-store",
        &[png("front.png"), png("back.png")],
    ));
    let mut draft = ProductDraft::default();
    draft.set_name("Lụa Hà Đông Xanh Ngọc".to_string());
    draft.description = "Lụa tơ tằm dệt tay".to_string();
    draft.size = "Khổ 1m2".to_string();
    draft.origin = "Hà Đông".to_string();
    draft.price_per_meter = "320.000".to_string();
    draft.images.commit(mode, outcome.urls);

    let product = draft.validate().expect("valid draft");
    assert_eq!(product.slug, "lua-ha-dong-xanh-ngoc");
    assert_eq!(product.price_per_meter, 320_000);

    let status = block_on(submit_write(
        &alerts,
        Locale::Vi,
        Phrase::CreateSucceeded,
        catalog::create_product(&store, &product),
    ));
    assert_eq!(status, FormStatus::Saved);
    assert_eq!(
        alerts.alerts(),
        vec![Phrase::CreateSucceeded.text(Locale::Vi).to_string()]
    );

    let stored = block_on(catalog::product_by_slug(&store, "lua-ha-dong-xanh-ngoc"))
        .expect("product stored");
    assert_eq!(stored.image_urls.len(), 2);
    assert!(stored.image_urls[0].ends_with("front.png"));
    assert_eq!(block_on(catalog::active_products(&store, None))[0].id, stored.id);
}

#[test]
fn failed_banner_write_keeps_the_draft_and_reports_once() {
    let store = seeded_store();
    let alerts = MemoryAlertService::default();
    let mut draft = BannerDraft {
        title: "Khuyến mãi mùa hè".to_string(),
        description: "Giảm 20% lụa".to_string(),
        order: "4".to_string(),
        ..BannerDraft::default()
    };
    draft.image = ImageSelection::single("https://cdn.example.com/summer.jpg");
    let before = draft.clone();
    let banner = draft.validate().expect("valid banner");

    store.set_fail_writes(true);
    let status = block_on(submit_write(
        &alerts,
        Locale::En,
        Phrase::CreateSucceeded,
        catalog::create_banner(&store, &banner),
    ));

    assert_eq!(
        status,
        FormStatus::Failed(Phrase::SaveFailed.text(Locale::En).to_string())
    );
    assert_eq!(alerts.alerts().len(), 1);
    assert_eq!(draft, before);
    assert_eq!(store.snapshot(Collection::Banners).len(), 3);
}

#[test]
fn declined_delete_leaves_the_record() {
    let store = seeded_store();
    let alerts = MemoryAlertService::default();

    let outcome = block_on(confirm_delete(&alerts, Locale::Vi, || {
        catalog::delete_fabric(&store, "fabric-1")
    }));
    assert_eq!(outcome, None);
    assert!(block_on(catalog::fabric_by_id(&store, "fabric-1")).is_some());

    alerts.answer_next_confirm(true);
    let outcome = block_on(confirm_delete(&alerts, Locale::Vi, || {
        catalog::delete_fabric(&store, "fabric-1")
    }));
    assert_eq!(outcome, Some(FormStatus::Saved));
    assert!(block_on(catalog::fabric_by_id(&store, "fabric-1")).is_none());
    assert_eq!(alerts.confirms().len(), 2);
}
