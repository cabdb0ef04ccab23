use leptos::*;
use system_ui::prelude::*;

use super::carousel_driver::{use_carousel, CarouselViewport};
use crate::{
    carousel::{CarouselAction, CarouselState},
    i18n::Phrase,
    model::Banner,
    runtime_context::use_storefront,
};

#[component]
/// Home page slider. Autoplays and wraps; arrows, dots and swipes stop at either end.
///
/// While `loading` is set a placeholder is shown. An empty banner list renders the welcome hero
/// and never starts a timer.
pub fn BannerCarousel(
    #[prop(into)] banners: Signal<Vec<Banner>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let runtime = use_storefront();
    let slide_count = Signal::derive(move || banners.with(Vec::len));
    let carousel = use_carousel(runtime.config.banner_carousel(), slide_count);
    let dispatch = carousel.dispatch;

    let slides = move || {
        banners
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, banner)| {
                view! {
                    <figure
                        class="banner-slide"
                        aria-hidden=move || (!carousel.is_current(index)).to_string()
                    >
                        <ImageFrame
                            src=banner.image_url
                            alt=banner.title.clone()
                            aspect=AspectRatio::Wide
                            eager=index == 0
                        />
                        <figcaption class="banner-slide__caption">
                            <Heading level=HeadingLevel::H2>{banner.title}</Heading>
                            {(!banner.description.is_empty())
                                .then(|| view! { <Text>{banner.description}</Text> })}
                        </figcaption>
                    </figure>
                }
            })
            .collect_view()
    };

    let dots = move || {
        (0..slide_count.get())
            .map(|index| {
                view! {
                    <button
                        type="button"
                        role="tab"
                        class="banner-carousel__dot"
                        aria-selected=move || carousel.is_current(index).to_string()
                        aria-label=move || {
                            format!("{} {}", runtime.text(Phrase::GoToSlide), index + 1)
                        }
                        on:click=move |_| dispatch.call(CarouselAction::GoTo(index))
                    ></button>
                }
            })
            .collect_view()
    };

    let populated = move || {
        view! {
            <CarouselViewport
                carousel
                layout_class="banner-carousel__viewport"
                label=Signal::derive(move || runtime.config.store.display_name.clone())
            >
                {slides}
            </CarouselViewport>
            <IconButton
                icon=IconName::ChevronLeft
                layout_class="banner-carousel__arrow"
                ui_slot="previous"
                aria_label=Signal::derive(move || runtime.text(Phrase::PreviousSlide).to_string())
                disabled=Signal::derive(move || !carousel.state.with(CarouselState::has_previous))
                on_click=Callback::new(move |_| dispatch.call(CarouselAction::Prev))
            />
            <IconButton
                icon=IconName::ChevronRight
                layout_class="banner-carousel__arrow"
                ui_slot="next"
                aria_label=Signal::derive(move || runtime.text(Phrase::NextSlide).to_string())
                disabled=Signal::derive(move || !carousel.state.with(CarouselState::has_next))
                on_click=Callback::new(move |_| dispatch.call(CarouselAction::Next))
            />
            <div class="banner-carousel__dots" role="tablist">
                {dots}
            </div>
            <span class="visually-hidden" aria-live="polite">
                {move || carousel.state.with(CarouselState::position_label)}
            </span>
        }
    };

    let fallback = move || {
        view! {
            <div class="banner-carousel__fallback">
                <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                    <Heading level=HeadingLevel::H1>{move || runtime.text(Phrase::WelcomeTitle)}</Heading>
                    <Text tone=TextTone::Secondary>{move || runtime.text(Phrase::WelcomeSubtitle)}</Text>
                </Stack>
            </div>
        }
    };

    view! {
        <section class="banner-carousel" data-empty=move || banners.with(Vec::is_empty).to_string()>
            {move || {
                if loading.get() {
                    view! {
                        <div class="banner-carousel__placeholder">
                            <Spinner label=Signal::derive(move || runtime.text(Phrase::Loading).to_string()) />
                        </div>
                    }
                    .into_view()
                } else if slide_count.get() == 0 {
                    fallback().into_view()
                } else {
                    populated().into_view()
                }
            }}
        </section>
    }
}
