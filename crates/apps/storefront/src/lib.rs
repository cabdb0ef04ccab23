//! Public storefront pages: home, product detail, about, and contact.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod home;
mod info;
mod product;

use leptos::*;
use leptos_router::Outlet;
use storefront_runtime::components::{SiteFooter, SiteHeader};

pub use home::HomePage;
pub use info::{AboutPage, ContactPage};
pub use product::ProductPage;

#[component]
/// Header, routed page, and footer shared by every public route.
pub fn StorefrontShell() -> impl IntoView {
    view! {
        <div class="storefront">
            <SiteHeader />
            <Outlet />
            <SiteFooter />
        </div>
    }
}
