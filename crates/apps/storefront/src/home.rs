use leptos::*;
use storefront_runtime::{
    catalog,
    components::{BannerCarousel, ProductCard},
    i18n::{category_phrase, Phrase},
    model::{Banner, Product, ProductCategory},
    request::RequestTracker,
    runtime_context::use_storefront,
    search::filter_products,
};
use system_ui::prelude::*;

fn category_panel_id(category: ProductCategory) -> String {
    format!("products-{}", category.as_str())
}

#[component]
/// Home page: banner slider, product search, and category tabs.
pub fn HomePage() -> impl IntoView {
    let runtime = use_storefront();
    let banners = create_rw_signal(Vec::<Banner>::new());
    let banners_loading = create_rw_signal(true);
    let category = create_rw_signal(ProductCategory::Featured);
    let products = create_rw_signal(Vec::<Product>::new());
    let products_loading = create_rw_signal(true);
    let query = create_rw_signal(String::new());
    let tracker = store_value(RequestTracker::new());

    let store = runtime.host.get_value().content_store();
    spawn_local(async move {
        let loaded = catalog::active_banners(store.as_ref()).await;
        // The page may be gone by the time the list arrives.
        if banners.try_set(loaded).is_some() {
            return;
        }
        banners_loading.set(false);
    });

    create_effect(move |_| {
        let selected = category.get();
        let ticket = tracker.with_value(RequestTracker::begin);
        products_loading.set(true);
        let store = runtime.host.get_value().content_store();
        spawn_local(async move {
            let loaded = catalog::active_products(store.as_ref(), Some(selected)).await;
            if tracker.try_with_value(|tracker| tracker.is_current(ticket)) != Some(true) {
                logging::log!("dropping stale {} product list", selected.as_str());
                return;
            }
            products.set(loaded);
            products_loading.set(false);
        });
    });

    let visible = move || {
        products.with(|products| {
            filter_products(products, &query.get())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let tabs = move || {
        ProductCategory::ALL
            .into_iter()
            .map(|tab| {
                view! {
                    <Tab
                        controls=category_panel_id(tab)
                        selected=Signal::derive(move || category.get() == tab)
                        on_select=Callback::new(move |()| category.set(tab))
                    >
                        {move || runtime.text(category_phrase(tab))}
                    </Tab>
                }
            })
            .collect_view()
    };

    view! {
        <PageContainer>
            <Stack gap=LayoutGap::Lg>
                <BannerCarousel banners loading=banners_loading />
                <Cluster justify=LayoutJustify::Between>
                    <TabList aria_label="categories">{tabs}</TabList>
                    <TextField
                        input_type="search"
                        layout_class="home-search"
                        placeholder=Signal::derive(move || runtime.text(Phrase::SearchPlaceholder).to_string())
                        aria_label=Signal::derive(move || runtime.text(Phrase::SearchPlaceholder).to_string())
                        value=Signal::derive(move || query.get())
                        on_input=Callback::new(move |value| query.set(value))
                    />
                </Cluster>
                <section id=move || category_panel_id(category.get()) role="tabpanel">
                    {move || {
                        if products_loading.get() {
                            view! { <Spinner label=runtime.text(Phrase::Loading).to_string() /> }
                                .into_view()
                        } else {
                            let items = visible();
                            if items.is_empty() {
                                view! {
                                    <EmptyState icon=IconName::Search>
                                        <Text tone=TextTone::Secondary>
                                            {runtime.text(Phrase::NoProducts)}
                                        </Text>
                                    </EmptyState>
                                }
                                .into_view()
                            } else {
                                view! {
                                    <Grid columns=GridColumns::Four>
                                        {items
                                            .into_iter()
                                            .map(|product| view! { <ProductCard product /> })
                                            .collect_view()}
                                    </Grid>
                                }
                                .into_view()
                            }
                        }
                    }}
                </section>
            </Stack>
        </PageContainer>
    }
}

#[cfg(test)]
mod tests {
    use storefront_runtime::i18n::Locale;

    use super::*;

    #[test]
    fn every_category_has_a_tab_label_and_panel() {
        let labels = ProductCategory::ALL
            .into_iter()
            .map(|category| category_phrase(category).text(Locale::En))
            .collect::<Vec<_>>();
        assert_eq!(labels.len(), 3);
        assert_eq!(category_panel_id(ProductCategory::New), "products-new");
    }
}
