//! Browser entry for the fabric storefront and its admin back-office.

mod web_app;

pub use web_app::{SiteApp, SiteRoutes};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Installs the panic hook and mounts [`SiteApp`] on `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
