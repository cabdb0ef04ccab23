//! Binds the pure carousel reducer to Leptos signals and a browser interval.

use std::time::Duration;

use leptos::*;
use web_sys::{KeyboardEvent, TouchEvent};

use crate::carousel::{
    apply_effects, key_action, reduce_carousel, track_transform, AutoplayTimer, CarouselAction,
    CarouselSettings, CarouselState,
};

#[derive(Default)]
struct IntervalTimer {
    handle: Option<IntervalHandle>,
    on_tick: Option<Callback<()>>,
}

impl AutoplayTimer for IntervalTimer {
    fn arm(&mut self, interval_ms: u32) {
        self.cancel();
        let Some(on_tick) = self.on_tick else {
            return;
        };
        match set_interval_with_handle(
            move || on_tick.call(()),
            Duration::from_millis(u64::from(interval_ms)),
        ) {
            Ok(handle) => self.handle = Some(handle),
            Err(err) => logging::warn!("failed to start carousel autoplay: {err:?}"),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }
}

#[derive(Clone, Copy)]
/// Reactive carousel state plus the dispatcher that drives it.
pub struct CarouselHandle {
    /// Current reducer state.
    pub state: RwSignal<CarouselState>,
    /// Applies one action and runs the resulting timer effects.
    pub dispatch: Callback<CarouselAction>,
}

impl CarouselHandle {
    /// Reactive current index.
    pub fn index(&self) -> usize {
        self.state.with(|state| state.index)
    }

    /// Reactive check for slide `index` being shown.
    pub fn is_current(&self, index: usize) -> bool {
        self.state.with(|state| state.is_current(index))
    }
}

/// Creates a carousel that follows `slide_count` and tears its timer down with the owner.
pub fn use_carousel(settings: CarouselSettings, slide_count: Signal<usize>) -> CarouselHandle {
    let state = create_rw_signal(CarouselState::default());
    let timer = store_value(IntervalTimer::default());

    let dispatch = Callback::new(move |action: CarouselAction| {
        let Some(mut next) = state.try_get_untracked() else {
            timer.try_update_value(|timer| timer.cancel());
            return;
        };
        match reduce_carousel(&mut next, &settings, action) {
            Ok(effects) => {
                state.set(next);
                timer.update_value(|timer| apply_effects(timer, &effects));
            }
            Err(err) => logging::warn!("carousel reducer error: {err}"),
        }
    });
    timer.update_value(|timer| {
        timer.on_tick = Some(Callback::new(move |()| {
            dispatch.call(CarouselAction::AutoplayTick)
        }))
    });

    create_effect(move |_| dispatch.call(CarouselAction::SetSlideCount(slide_count.get())));
    on_cleanup(move || dispatch.call(CarouselAction::Unmount));

    CarouselHandle { state, dispatch }
}

fn first_touch_x(ev: &TouchEvent) -> Option<i32> {
    ev.touches().get(0).map(|touch| touch.client_x())
}

#[component]
/// Focusable, swipeable viewport around a horizontally translated slide track.
pub(super) fn CarouselViewport(
    carousel: CarouselHandle,
    layout_class: &'static str,
    #[prop(into)] label: Signal<String>,
    children: Children,
) -> impl IntoView {
    let dispatch = carousel.dispatch;
    view! {
        <div
            class=layout_class
            role="group"
            tabindex="0"
            aria-roledescription="carousel"
            aria-label=move || label.get()
            on:keydown=move |ev: KeyboardEvent| {
                if let Some(action) = key_action(&ev.key()) {
                    ev.prevent_default();
                    dispatch.call(action);
                }
            }
            on:touchstart=move |ev: TouchEvent| {
                if let Some(x) = first_touch_x(&ev) {
                    dispatch.call(CarouselAction::TouchStart { x });
                }
            }
            on:touchmove=move |ev: TouchEvent| {
                if let Some(x) = first_touch_x(&ev) {
                    dispatch.call(CarouselAction::TouchMove { x });
                }
            }
            on:touchend=move |_| dispatch.call(CarouselAction::TouchEnd)
            on:touchcancel=move |_| dispatch.call(CarouselAction::TouchCancel)
        >
            <div
                class="carousel-track"
                style:transform=move || track_transform(carousel.index())
                aria-live=move || {
                    if carousel.state.with(|state| state.autoplay_armed) { "off" } else { "polite" }
                }
            >
                {children()}
            </div>
        </div>
    }
}
