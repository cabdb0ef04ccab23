use leptos::*;
use leptos_router::A;
use system_ui::prelude::*;

use crate::{format::format_vnd, i18n::Phrase, model::Product, runtime_context::use_storefront};

/// Path of a product's detail page.
pub fn product_path(slug: &str) -> String {
    format!("/product/{slug}")
}

#[component]
/// Grid tile linking to a product's detail page.
pub fn ProductCard(product: Product) -> impl IntoView {
    let runtime = use_storefront();
    let href = product_path(&product.slug);
    let cover = product.cover_image().unwrap_or_default().to_string();
    let has_discount = product.discount_percent > 0;
    let sale_price = format_vnd(product.discounted_price());
    let list_price = format_vnd(product.price_per_meter);

    view! {
        <Card layout_class="product-card">
            <A href=href class="product-card__link">
                <ImageFrame src=cover alt=product.name.clone() aspect=AspectRatio::Square />
                {has_discount.then(|| {
                    view! {
                        <Badge tone=TextTone::Danger layout_class="product-card__discount">
                            {format!("-{}%", product.discount_percent)}
                        </Badge>
                    }
                })}
                <Stack gap=LayoutGap::Sm padding=LayoutPadding::Md>
                    <Heading level=HeadingLevel::H3>{product.name}</Heading>
                    <Cluster gap=LayoutGap::Sm>
                        <Text role=TextRole::Price tone=TextTone::Accent>
                            {sale_price}
                            {move || runtime.text(Phrase::PerMeter)}
                        </Text>
                        {has_discount.then(|| {
                            view! {
                                <Text role=TextRole::Caption tone=TextTone::Secondary strike=true>
                                    {list_price}
                                </Text>
                            }
                        })}
                    </Cluster>
                    <Text role=TextRole::Label tone=TextTone::Accent>
                        {move || runtime.text(Phrase::ViewDetails)}
                    </Text>
                </Stack>
            </A>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::product_path;

    #[test]
    fn detail_path_uses_the_slug() {
        assert_eq!(product_path("lua-to-tam-vang"), "/product/lua-to-tam-vang");
    }
}
