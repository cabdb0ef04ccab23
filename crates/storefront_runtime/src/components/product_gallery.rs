use leptos::*;
use system_ui::prelude::*;

use super::carousel_driver::{use_carousel, CarouselViewport};
use crate::{
    carousel::{CarouselAction, CarouselState},
    i18n::Phrase,
    runtime_context::use_storefront,
};

/// Number of thumbnails rendered for `total` images.
pub(crate) fn visible_thumbnails(total: usize, limit: usize, expanded: bool) -> usize {
    if expanded {
        total
    } else {
        total.min(limit)
    }
}

#[component]
/// Product detail gallery. Manual only: arrows, thumbnails, keys and swipes clamp at the ends.
///
/// `on_select` receives the URL of the image on screen whenever it changes.
pub fn ProductGallery(
    #[prop(into)] images: Signal<Vec<String>>,
    #[prop(into)] alt: Signal<String>,
    #[prop(optional)] on_select: Option<Callback<String>>,
) -> impl IntoView {
    let runtime = use_storefront();
    let thumbnail_limit = runtime.config.carousel.gallery_thumbnail_limit;
    let slide_count = Signal::derive(move || images.with(Vec::len));
    let carousel = use_carousel(runtime.config.product_gallery(), slide_count);
    let dispatch = carousel.dispatch;
    let expanded = create_rw_signal(false);

    create_effect(move |_| {
        let current = images.with(|images| images.get(carousel.index()).cloned());
        if let (Some(url), Some(on_select)) = (current, on_select) {
            on_select.call(url);
        }
    });

    let slides = move || {
        images
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, url)| {
                view! {
                    <div
                        class="gallery-slide"
                        aria-hidden=move || (!carousel.is_current(index)).to_string()
                    >
                        <ImageFrame
                            src=url
                            alt=Signal::derive(move || alt.get())
                            aspect=AspectRatio::Square
                            eager=index == 0
                        />
                    </div>
                }
            })
            .collect_view()
    };

    let thumbnails = move || {
        let shown = visible_thumbnails(slide_count.get(), thumbnail_limit, expanded.get());
        images
            .get()
            .into_iter()
            .take(shown)
            .enumerate()
            .map(|(index, url)| {
                view! {
                    <button
                        type="button"
                        class="gallery-thumbnail"
                        aria-pressed=move || carousel.is_current(index).to_string()
                        aria-label=move || {
                            format!("{} {}", runtime.text(Phrase::GoToSlide), index + 1)
                        }
                        on:click=move |_| dispatch.call(CarouselAction::GoTo(index))
                    >
                        <img src=url alt="" loading="lazy" draggable="false" />
                    </button>
                }
            })
            .collect_view()
    };

    let toggle_label = move || {
        let total = slide_count.get();
        if expanded.get() {
            runtime.text(Phrase::ShowFewerImages).to_string()
        } else {
            format!(
                "{} (+{})",
                runtime.text(Phrase::ShowMoreImages),
                total.saturating_sub(thumbnail_limit)
            )
        }
    };

    view! {
        <div class="product-gallery">
            <Show
                when=move || slide_count.get() > 0
                fallback=move || {
                    view! {
                        <EmptyState icon=IconName::Image>
                            <Text tone=TextTone::Secondary>{move || runtime.text(Phrase::NoImages)}</Text>
                        </EmptyState>
                    }
                }
            >
                <div class="product-gallery__stage">
                    <CarouselViewport
                        carousel
                        layout_class="product-gallery__viewport"
                        label=alt
                    >
                        {slides}
                    </CarouselViewport>
                    <IconButton
                        icon=IconName::ChevronLeft
                        layout_class="product-gallery__arrow"
                        ui_slot="previous"
                        aria_label=Signal::derive(move || runtime.text(Phrase::PreviousSlide).to_string())
                        disabled=Signal::derive(move || !carousel.state.with(CarouselState::has_previous))
                        on_click=Callback::new(move |_| dispatch.call(CarouselAction::Prev))
                    />
                    <IconButton
                        icon=IconName::ChevronRight
                        layout_class="product-gallery__arrow"
                        ui_slot="next"
                        aria_label=Signal::derive(move || runtime.text(Phrase::NextSlide).to_string())
                        disabled=Signal::derive(move || !carousel.state.with(CarouselState::has_next))
                        on_click=Callback::new(move |_| dispatch.call(CarouselAction::Next))
                    />
                    <Badge layout_class="product-gallery__position">
                        {move || carousel.state.with(CarouselState::position_label)}
                    </Badge>
                </div>
                <div class="product-gallery__thumbnails">{thumbnails}</div>
                <Show when=move || { slide_count.get() > thumbnail_limit } fallback=|| ()>
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_| expanded.update(|open| *open = !*open))
                    >
                        {toggle_label}
                    </Button>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::visible_thumbnails;

    #[test]
    fn thumbnails_collapse_to_the_limit_until_expanded() {
        assert_eq!(visible_thumbnails(12, 8, false), 8);
        assert_eq!(visible_thumbnails(12, 8, true), 12);
        assert_eq!(visible_thumbnails(3, 8, false), 3);
    }
}
