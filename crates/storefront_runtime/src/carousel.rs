//! Carousel state machine shared by the home banner slider and the product image gallery.
//!
//! All index changes go through [`reduce_carousel`]. The reducer never touches timers; it emits
//! [`CarouselEffect`] values that a view applies to an [`AutoplayTimer`]. Manual navigation
//! (arrows, dots, swipe, keyboard) clamps at both ends; only autoplay wraps.

use thiserror::Error;

/// Default autoplay period.
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u32 = 5_000;
/// Default swipe threshold. A swipe must travel strictly more than this.
pub const DEFAULT_SWIPE_THRESHOLD_PX: i32 = 50;

/// How a step past either end is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationPolicy {
    /// Steps past the last slide continue from the first (and vice versa).
    Wrap,
    /// Steps past either end stop at that end.
    Clamp,
}

impl NavigationPolicy {
    /// Policy for arrows, dots, swipes and keys.
    pub const MANUAL: Self = Self::Clamp;
    /// Policy for autoplay ticks.
    pub const AUTOPLAY: Self = Self::Wrap;

    /// Moves `index` by `steps` within `count` slides.
    pub fn step(self, index: usize, count: usize, steps: isize) -> usize {
        if count == 0 {
            return 0;
        }
        let last = count - 1;
        let index = index.min(last);
        match self {
            Self::Wrap => {
                let count = count as isize;
                (index as isize + steps).rem_euclid(count) as usize
            }
            Self::Clamp => {
                if steps >= 0 {
                    index.saturating_add(steps as usize).min(last)
                } else {
                    index.saturating_sub(steps.unsigned_abs())
                }
            }
        }
    }
}

/// Per-view carousel tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSettings {
    /// Autoplay period, `None` for carousels that never advance on their own.
    pub autoplay_interval_ms: Option<u32>,
    /// Exclusive swipe threshold in CSS pixels.
    pub swipe_threshold_px: i32,
}

impl CarouselSettings {
    /// Settings for an autoplaying slider.
    pub const fn autoplay(interval_ms: u32, swipe_threshold_px: i32) -> Self {
        Self {
            autoplay_interval_ms: Some(interval_ms),
            swipe_threshold_px,
        }
    }

    /// Settings for a manually driven gallery.
    pub const fn manual(swipe_threshold_px: i32) -> Self {
        Self {
            autoplay_interval_ms: None,
            swipe_threshold_px,
        }
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::autoplay(DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Horizontal samples of the touch currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchGesture {
    /// X at touch start.
    pub start_x: i32,
    /// Latest X seen. Equal to `start_x` until the finger moves.
    pub end_x: i32,
}

impl TouchGesture {
    /// Travel from start to latest sample; positive means the finger moved left.
    pub fn delta(self) -> i32 {
        self.start_x - self.end_x
    }
}

/// Carousel view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    /// Current slide, 0-based. Always `< slide_count` when `slide_count > 0`.
    pub index: usize,
    /// Number of slides.
    pub slide_count: usize,
    /// Set while a finger is on the carousel; suppresses autoplay.
    pub user_interacting: bool,
    /// Touch samples for the gesture in progress.
    pub touch: Option<TouchGesture>,
    /// Cleared on teardown; every later action is rejected.
    pub mounted: bool,
    /// Whether the view currently holds an autoplay timer.
    pub autoplay_armed: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            index: 0,
            slide_count: 0,
            user_interacting: false,
            touch: None,
            mounted: true,
            autoplay_armed: false,
        }
    }
}

impl CarouselState {
    /// Returns whether the static fallback should render instead of slides.
    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    /// Returns whether slide `index` is the current one.
    pub fn is_current(&self, index: usize) -> bool {
        !self.is_empty() && self.index == index
    }

    /// Returns whether a previous slide exists under manual navigation.
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Returns whether a next slide exists under manual navigation.
    pub fn has_next(&self) -> bool {
        self.slide_count > 0 && self.index + 1 < self.slide_count
    }

    /// One-based `position / total` label, empty when there are no slides.
    pub fn position_label(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{} / {}", self.index + 1, self.slide_count)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Actions accepted by [`reduce_carousel`].
pub enum CarouselAction {
    /// Slides were (re)loaded.
    SetSlideCount(usize),
    /// The autoplay timer fired.
    AutoplayTick,
    /// A dot was clicked.
    GoTo(usize),
    /// Next arrow or key.
    Next,
    /// Previous arrow or key.
    Prev,
    /// A finger touched down.
    TouchStart {
        /// Horizontal client coordinate.
        x: i32,
    },
    /// The finger moved.
    TouchMove {
        /// Horizontal client coordinate.
        x: i32,
    },
    /// The finger lifted.
    TouchEnd,
    /// The browser cancelled the touch.
    TouchCancel,
    /// The view is being torn down.
    Unmount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Timer instructions emitted by [`reduce_carousel`].
pub enum CarouselEffect {
    /// Start ticking every `interval_ms`, replacing any running timer.
    ArmAutoplay {
        /// Tick period.
        interval_ms: u32,
    },
    /// Stop the running timer.
    CancelAutoplay,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Carousel reducer errors.
pub enum CarouselError {
    /// An action arrived after [`CarouselAction::Unmount`].
    #[error("carousel is unmounted")]
    Unmounted,
}

/// Number of slides a finished swipe moves: `1` forward, `-1` back, `0` below threshold.
pub fn swipe_steps(delta: i32, threshold: i32) -> isize {
    if delta > threshold {
        1
    } else if delta < -threshold {
        -1
    } else {
        0
    }
}

/// Maps a keyboard key to a navigation action.
pub fn key_action(key: &str) -> Option<CarouselAction> {
    match key {
        "ArrowLeft" => Some(CarouselAction::Prev),
        "ArrowRight" => Some(CarouselAction::Next),
        _ => None,
    }
}

/// CSS transform that shows slide `index` in a single-row track.
pub fn track_transform(index: usize) -> String {
    format!("translateX(-{}%)", index * 100)
}

/// Applies `action` and returns the timer effects the view must run.
///
/// # Errors
///
/// Returns [`CarouselError::Unmounted`] for any action other than a repeated
/// [`CarouselAction::Unmount`] after teardown. State is left untouched.
pub fn reduce_carousel(
    state: &mut CarouselState,
    settings: &CarouselSettings,
    action: CarouselAction,
) -> Result<Vec<CarouselEffect>, CarouselError> {
    let mut effects = Vec::new();

    if action == CarouselAction::Unmount {
        state.mounted = false;
        state.touch = None;
        state.user_interacting = false;
        if state.autoplay_armed {
            state.autoplay_armed = false;
            effects.push(CarouselEffect::CancelAutoplay);
        }
        return Ok(effects);
    }
    if !state.mounted {
        return Err(CarouselError::Unmounted);
    }

    let count = state.slide_count;
    let mut count_changed = false;
    match action {
        CarouselAction::SetSlideCount(new_count) => {
            count_changed = new_count != count;
            state.slide_count = new_count;
            state.index = if new_count == 0 {
                0
            } else {
                state.index.min(new_count - 1)
            };
        }
        CarouselAction::AutoplayTick => {
            if count > 0 && !state.user_interacting {
                state.index = NavigationPolicy::AUTOPLAY.step(state.index, count, 1);
            }
        }
        CarouselAction::GoTo(target) => {
            if count > 0 {
                state.index = target.min(count - 1);
            }
        }
        CarouselAction::Next => {
            state.index = NavigationPolicy::MANUAL.step(state.index, count, 1);
        }
        CarouselAction::Prev => {
            state.index = NavigationPolicy::MANUAL.step(state.index, count, -1);
        }
        CarouselAction::TouchStart { x } => {
            state.user_interacting = true;
            state.touch = Some(TouchGesture {
                start_x: x,
                end_x: x,
            });
        }
        CarouselAction::TouchMove { x } => {
            if let Some(touch) = state.touch.as_mut() {
                touch.end_x = x;
            }
        }
        CarouselAction::TouchEnd => {
            if let Some(touch) = state.touch.take() {
                let steps = swipe_steps(touch.delta(), settings.swipe_threshold_px);
                if steps != 0 {
                    state.index = NavigationPolicy::MANUAL.step(state.index, count, steps);
                }
            }
            state.user_interacting = false;
        }
        CarouselAction::TouchCancel => {
            state.touch = None;
            state.user_interacting = false;
        }
        CarouselAction::Unmount => {}
    }

    sync_autoplay(state, settings, count_changed, &mut effects);
    Ok(effects)
}

fn sync_autoplay(
    state: &mut CarouselState,
    settings: &CarouselSettings,
    count_changed: bool,
    effects: &mut Vec<CarouselEffect>,
) {
    let wanted = settings
        .autoplay_interval_ms
        .filter(|_| state.mounted && state.slide_count > 0 && !state.user_interacting);
    match (wanted, state.autoplay_armed) {
        (Some(interval_ms), false) => {
            state.autoplay_armed = true;
            effects.push(CarouselEffect::ArmAutoplay { interval_ms });
        }
        (Some(interval_ms), true) if count_changed => {
            effects.push(CarouselEffect::ArmAutoplay { interval_ms });
        }
        (None, true) => {
            state.autoplay_armed = false;
            effects.push(CarouselEffect::CancelAutoplay);
        }
        _ => {}
    }
}

/// Timer handle a view drives from [`CarouselEffect`] values.
pub trait AutoplayTimer {
    /// Starts ticking every `interval_ms`, dropping any previous timer.
    fn arm(&mut self, interval_ms: u32);
    /// Stops ticking.
    fn cancel(&mut self);
}

/// Runs reducer effects against `timer` in order.
pub fn apply_effects<T: AutoplayTimer + ?Sized>(timer: &mut T, effects: &[CarouselEffect]) {
    for effect in effects {
        match *effect {
            CarouselEffect::ArmAutoplay { interval_ms } => timer.arm(interval_ms),
            CarouselEffect::CancelAutoplay => timer.cancel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Deterministic stand-in for `setInterval`.
    #[derive(Debug, Default)]
    struct VirtualTimer {
        now_ms: u64,
        interval_ms: u64,
        next_due_ms: Option<u64>,
        arms: usize,
        cancels: usize,
    }

    impl AutoplayTimer for VirtualTimer {
        fn arm(&mut self, interval_ms: u32) {
            self.interval_ms = u64::from(interval_ms);
            self.next_due_ms = Some(self.now_ms + self.interval_ms);
            self.arms += 1;
        }

        fn cancel(&mut self) {
            self.next_due_ms = None;
            self.cancels += 1;
        }
    }

    struct Harness {
        state: CarouselState,
        settings: CarouselSettings,
        timer: VirtualTimer,
    }

    impl Harness {
        fn new(slides: usize) -> Self {
            Self::with_settings(slides, CarouselSettings::default())
        }

        fn with_settings(slides: usize, settings: CarouselSettings) -> Self {
            let mut harness = Self {
                state: CarouselState::default(),
                settings,
                timer: VirtualTimer::default(),
            };
            harness
                .send(CarouselAction::SetSlideCount(slides))
                .expect("load slides");
            harness
        }

        fn send(&mut self, action: CarouselAction) -> Result<(), CarouselError> {
            let effects = reduce_carousel(&mut self.state, &self.settings, action)?;
            apply_effects(&mut self.timer, &effects);
            Ok(())
        }

        /// Advances the virtual clock, firing due ticks, and returns the index after each tick.
        fn advance(&mut self, ms: u64) -> Vec<usize> {
            let target = self.timer.now_ms + ms;
            let mut seen = Vec::new();
            while let Some(due) = self.timer.next_due_ms.filter(|due| *due <= target) {
                self.timer.now_ms = due;
                self.timer.next_due_ms = Some(due + self.timer.interval_ms);
                if self.send(CarouselAction::AutoplayTick).is_ok() {
                    seen.push(self.state.index);
                }
            }
            self.timer.now_ms = target;
            seen
        }

        fn swipe(&mut self, from: i32, to: i32) {
            self.send(CarouselAction::TouchStart { x: from }).expect("touch start");
            self.send(CarouselAction::TouchMove { x: to }).expect("touch move");
            self.send(CarouselAction::TouchEnd).expect("touch end");
        }
    }

    #[test]
    fn three_slides_cycle_over_fifteen_seconds() {
        let mut carousel = Harness::new(3);
        assert_eq!(carousel.state.index, 0);
        assert_eq!(carousel.advance(15_000), vec![1, 2, 0]);
    }

    #[test]
    fn autoplay_ticks_wrap_modulo_slide_count() {
        for count in 1..=5 {
            for start in 0..count {
                for ticks in 0..=12 {
                    let mut state = CarouselState {
                        index: start,
                        slide_count: count,
                        ..CarouselState::default()
                    };
                    let settings = CarouselSettings::default();
                    for _ in 0..ticks {
                        reduce_carousel(&mut state, &settings, CarouselAction::AutoplayTick)
                            .expect("tick");
                    }
                    assert_eq!(state.index, (start + ticks) % count);
                }
            }
        }
    }

    #[test]
    fn next_presses_clamp_at_last_slide() {
        for count in 1..=5 {
            for start in 0..count {
                for presses in 0..=8 {
                    let mut state = CarouselState {
                        index: start,
                        slide_count: count,
                        ..CarouselState::default()
                    };
                    let settings = CarouselSettings::default();
                    for _ in 0..presses {
                        reduce_carousel(&mut state, &settings, CarouselAction::Next)
                            .expect("next");
                    }
                    assert_eq!(state.index, (start + presses).min(count - 1));
                }
            }
        }
    }

    #[test]
    fn prev_clamps_at_first_slide() {
        let mut carousel = Harness::new(3);
        carousel.send(CarouselAction::GoTo(1)).expect("dot");
        carousel.send(CarouselAction::Prev).expect("prev");
        carousel.send(CarouselAction::Prev).expect("prev");
        assert_eq!(carousel.state.index, 0);
        assert!(!carousel.state.has_previous());
        assert!(carousel.state.has_next());
    }

    #[test]
    fn autoplay_pauses_while_touching() {
        let mut carousel = Harness::new(3);
        carousel
            .send(CarouselAction::TouchStart { x: 100 })
            .expect("touch start");
        assert_eq!(carousel.timer.next_due_ms, None);
        assert!(carousel.advance(20_000).is_empty());

        // A stray tick from a timer that was already queued is ignored too.
        carousel.send(CarouselAction::AutoplayTick).expect("tick");
        assert_eq!(carousel.state.index, 0);

        carousel.send(CarouselAction::TouchEnd).expect("touch end");
        assert_eq!(carousel.advance(5_000), vec![1]);
    }

    #[test]
    fn swipe_threshold_is_exclusive() {
        let mut carousel = Harness::new(3);
        carousel.swipe(200, 150);
        assert_eq!(carousel.state.index, 0);
        carousel.swipe(200, 149);
        assert_eq!(carousel.state.index, 1);
        carousel.swipe(149, 200);
        assert_eq!(carousel.state.index, 0);
        carousel.swipe(150, 200);
        assert_eq!(carousel.state.index, 0);
    }

    #[test]
    fn swipe_left_advances_one_and_stays_bounded() {
        let mut carousel = Harness::new(3);
        carousel.swipe(200, 140);
        assert_eq!(carousel.state.index, 1);
        carousel.swipe(200, 140);
        carousel.swipe(200, 140);
        assert_eq!(carousel.state.index, 2);
        assert!(!carousel.state.user_interacting);
    }

    #[test]
    fn tap_without_move_does_not_navigate() {
        let mut carousel = Harness::new(3);
        carousel
            .send(CarouselAction::TouchStart { x: 300 })
            .expect("touch start");
        carousel.send(CarouselAction::TouchEnd).expect("touch end");
        assert_eq!(carousel.state.index, 0);
        assert_eq!(carousel.state.touch, None);
    }

    #[test]
    fn touch_cancel_resumes_autoplay_without_moving() {
        let mut carousel = Harness::new(3);
        carousel
            .send(CarouselAction::TouchStart { x: 300 })
            .expect("touch start");
        carousel
            .send(CarouselAction::TouchMove { x: 10 })
            .expect("touch move");
        carousel.send(CarouselAction::TouchCancel).expect("cancel");
        assert_eq!(carousel.state.index, 0);
        assert!(carousel.state.autoplay_armed);
        assert_eq!(carousel.advance(5_000), vec![1]);
    }

    #[test]
    fn unmount_cancels_timer_and_rejects_pending_tick() {
        let mut carousel = Harness::new(3);
        assert_eq!(carousel.advance(5_000), vec![1]);

        carousel.send(CarouselAction::Unmount).expect("unmount");
        assert_eq!(carousel.timer.next_due_ms, None);
        assert_eq!(carousel.timer.cancels, 1);

        assert_eq!(
            carousel.send(CarouselAction::AutoplayTick),
            Err(CarouselError::Unmounted)
        );
        assert_eq!(carousel.state.index, 1);
        assert!(carousel.advance(30_000).is_empty());
        assert_eq!(carousel.send(CarouselAction::Unmount), Ok(()));
    }

    #[test]
    fn empty_slide_list_arms_no_timer() {
        let mut carousel = Harness::new(0);
        assert!(carousel.state.is_empty());
        assert_eq!(carousel.timer.arms, 0);
        assert!(carousel.advance(60_000).is_empty());
        carousel.send(CarouselAction::Next).expect("next");
        carousel.send(CarouselAction::GoTo(4)).expect("dot");
        assert_eq!(carousel.state.index, 0);
        assert_eq!(carousel.state.position_label(), "");
    }

    #[test]
    fn dot_sets_exact_index_from_any_position() {
        let mut carousel = Harness::new(5);
        for start in 0..5 {
            for target in 0..5 {
                carousel.send(CarouselAction::GoTo(start)).expect("start dot");
                carousel.send(CarouselAction::GoTo(target)).expect("dot");
                assert_eq!(carousel.state.index, target);
                assert!(carousel.state.is_current(target));
            }
        }
        carousel.send(CarouselAction::GoTo(9)).expect("stale dot");
        assert_eq!(carousel.state.index, 4);
    }

    #[test]
    fn slide_count_change_rearms_and_clamps() {
        let mut carousel = Harness::new(5);
        carousel.send(CarouselAction::GoTo(4)).expect("dot");
        assert_eq!(carousel.timer.arms, 1);
        carousel.advance(2_000);

        carousel
            .send(CarouselAction::SetSlideCount(2))
            .expect("reload");
        assert_eq!(carousel.state.index, 1);
        assert_eq!(carousel.timer.arms, 2);
        assert_eq!(carousel.timer.next_due_ms, Some(7_000));

        carousel
            .send(CarouselAction::SetSlideCount(0))
            .expect("empty reload");
        assert_eq!(carousel.state.index, 0);
        assert_eq!(carousel.timer.next_due_ms, None);
    }

    #[test]
    fn manual_gallery_never_arms_autoplay() {
        let mut gallery = Harness::with_settings(4, CarouselSettings::manual(50));
        assert_eq!(gallery.timer.arms, 0);
        assert!(gallery.advance(60_000).is_empty());
        gallery.swipe(300, 100);
        assert_eq!(gallery.state.index, 1);
        assert_eq!(gallery.state.position_label(), "2 / 4");
        assert_eq!(gallery.timer.arms, 0);
    }

    #[test]
    fn keys_map_to_navigation() {
        assert_eq!(key_action("ArrowLeft"), Some(CarouselAction::Prev));
        assert_eq!(key_action("ArrowRight"), Some(CarouselAction::Next));
        assert_eq!(key_action("Enter"), None);
    }

    #[test]
    fn track_transform_is_a_function_of_index() {
        assert_eq!(track_transform(0), "translateX(-0%)");
        assert_eq!(track_transform(2), "translateX(-200%)");
    }

    #[test]
    fn wrap_policy_handles_negative_steps() {
        assert_eq!(NavigationPolicy::Wrap.step(0, 3, -1), 2);
        assert_eq!(NavigationPolicy::Clamp.step(0, 3, -1), 0);
        assert_eq!(NavigationPolicy::Clamp.step(7, 3, 0), 2);
        assert_eq!(NavigationPolicy::Wrap.step(0, 0, 1), 0);
    }
}
