use leptos::*;
use leptos_router::use_location;
use system_ui::prelude::*;

use crate::{i18n::Phrase, runtime_context::use_storefront};

const NAV_ITEMS: [(&str, Phrase); 3] = [
    ("/", Phrase::NavHome),
    ("/about", Phrase::NavAbout),
    ("/contact", Phrase::NavContact),
];

/// Whether `href` is the section the visitor is in. Product pages belong to home.
pub(crate) fn nav_item_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        pathname == "/" || pathname.starts_with("/product/")
    } else {
        pathname == href || pathname.starts_with(&format!("{href}/"))
    }
}

#[component]
/// Storefront header with the shop name, section links and the language toggle.
pub fn SiteHeader() -> impl IntoView {
    let runtime = use_storefront();
    let location = use_location();
    let pathname = location.pathname;

    view! {
        <header class="site-header">
            <div class="site-width">
                <Cluster justify=LayoutJustify::Between>
                    <a href="/" class="site-header__brand">
                        <Icon icon=IconName::Store size=IconSize::Lg />
                        <span>{runtime.config.store.display_name.clone()}</span>
                    </a>
                    <NavBar aria_label="primary">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(href, phrase)| {
                                view! {
                                    <NavLink
                                        href=href
                                        active=Signal::derive(move || {
                                            pathname.with(|path| nav_item_active(path, href))
                                        })
                                    >
                                        {move || runtime.text(phrase)}
                                    </NavLink>
                                }
                            })
                            .collect_view()}
                    </NavBar>
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        leading_icon=IconName::Globe
                        aria_label=Signal::derive(move || runtime.text(Phrase::SwitchLanguage).to_string())
                        on_click=Callback::new(move |_| runtime.toggle_locale())
                    >
                        {move || runtime.locale.get().toggle_label()}
                    </Button>
                </Cluster>
            </div>
        </header>
    }
}

#[component]
/// Storefront footer with the shop's contact lines.
pub fn SiteFooter() -> impl IntoView {
    let runtime = use_storefront();
    let store = &runtime.config.store;
    view! {
        <footer class="site-footer">
            <div class="site-width">
                <Cluster justify=LayoutJustify::Between>
                    <Text tone=TextTone::Secondary>{store.display_name.clone()}</Text>
                    <Cluster gap=LayoutGap::Sm>
                        <Icon icon=IconName::Phone size=IconSize::Sm />
                        <Text tone=TextTone::Secondary>{store.zalo_phone.clone()}</Text>
                    </Cluster>
                </Cluster>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::nav_item_active;

    #[test]
    fn home_link_covers_product_pages() {
        assert!(nav_item_active("/", "/"));
        assert!(nav_item_active("/product/lua-to-tam", "/"));
        assert!(!nav_item_active("/about", "/"));
        assert!(nav_item_active("/about", "/about"));
        assert!(!nav_item_active("/aboutx", "/about"));
    }
}
