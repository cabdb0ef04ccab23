use fabric_app_admin::{
    AdminShell, BannerCreatePage, BannerEditPage, BannerListPage, ContactInfoPage,
    DashboardPage, FabricCreatePage, FabricEditPage, FabricListPage, LoginPage, MessageListPage,
    ProductCreatePage, ProductEditPage, ProductListPage,
};
use fabric_app_storefront::{AboutPage, ContactPage, HomePage, ProductPage, StorefrontShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;
use storefront_runtime::{
    i18n::Phrase, runtime_context::use_storefront, seed::offline_seed, StorefrontConfig,
    StorefrontProvider,
};

#[component]
/// Root component: host services, document metadata, and the route table.
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let config = StorefrontConfig::load();
    let host_services = build_host_services(
        &config.web_host_settings(),
        config.auth_service(),
        offline_seed(),
    );

    view! {
        <Title text=config.store.display_name.clone() />
        <Meta name="description" content="Vải lụa, satin và gấm cao cấp. Premium silk, satin and brocade fabrics." />

        <StorefrontProvider host_services>
            <SiteRoutes />
        </StorefrontProvider>
    }
}

#[component]
/// Public and admin routes. Must render inside [`StorefrontProvider`].
pub fn SiteRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="" view=StorefrontShell>
                    <Route path="" view=HomePage />
                    <Route path="product/:slug" view=ProductPage />
                    <Route path="about" view=AboutPage />
                    <Route path="contact" view=ContactPage />
                </Route>
                <Route path="admin" view=AdminShell>
                    <Route path="" view=DashboardPage />
                    <Route path="login" view=LoginPage />
                    <Route path="banners" view=BannerListPage />
                    <Route path="banners/create" view=BannerCreatePage />
                    <Route path="banners/:id" view=BannerEditPage />
                    <Route path="products" view=ProductListPage />
                    <Route path="products/create" view=ProductCreatePage />
                    <Route path="products/:id" view=ProductEditPage />
                    <Route path="fabrics" view=FabricListPage />
                    <Route path="fabrics/create" view=FabricCreatePage />
                    <Route path="fabrics/:id" view=FabricEditPage />
                    <Route path="messages" view=MessageListPage />
                    <Route path="contact-info" view=ContactInfoPage />
                </Route>
                <Route path="/*any" view=NotFoundRoute />
            </Routes>
        </Router>
    }
}

#[component]
fn NotFoundRoute() -> impl IntoView {
    let runtime = use_storefront();
    view! {
        <main class="site-width not-found">
            <h1>{move || runtime.text(Phrase::NotFound)}</h1>
            <A href="/">{move || runtime.text(Phrase::BackToHome)}</A>
        </main>
    }
}
