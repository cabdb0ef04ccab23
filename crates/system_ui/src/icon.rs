//! Centralized inline-SVG icon set.
//!
//! Icons are 24x24 stroke glyphs that inherit `currentColor`, so buttons and links color them
//! through CSS without per-icon styling.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named glyphs available to storefront and admin views.
pub enum IconName {
    /// Left-pointing chevron.
    ChevronLeft,
    /// Right-pointing chevron.
    ChevronRight,
    /// Close / dismiss.
    Close,
    /// Plus sign.
    Plus,
    /// Minus sign.
    Minus,
    /// Pencil.
    Edit,
    /// Trash can.
    Trash,
    /// Upward arrow into a tray.
    Upload,
    /// Picture placeholder.
    Image,
    /// Magnifier.
    Search,
    /// Handset.
    Phone,
    /// Envelope.
    Mail,
    /// Map pin.
    MapPin,
    /// Globe, used by the language toggle.
    Globe,
    /// Door with an arrow.
    LogOut,
    /// Check mark.
    Check,
    /// Speech bubble.
    Message,
    /// Stacked squares.
    Layers,
    /// Store front.
    Store,
}

impl IconName {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ChevronLeft => &["M15 18l-6-6 6-6"],
            Self::ChevronRight => &["M9 18l6-6-6-6"],
            Self::Close => &["M18 6L6 18", "M6 6l12 12"],
            Self::Plus => &["M12 5v14", "M5 12h14"],
            Self::Minus => &["M5 12h14"],
            Self::Edit => &["M12 20h9", "M16.5 3.5a2.1 2.1 0 0 1 3 3L7 19l-4 1 1-4z"],
            Self::Trash => &[
                "M3 6h18",
                "M8 6V4h8v2",
                "M19 6l-1 14H6L5 6",
                "M10 11v6",
                "M14 11v6",
            ],
            Self::Upload => &["M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4", "M17 8l-5-5-5 5", "M12 3v12"],
            Self::Image => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M8.5 10a1.5 1.5 0 1 0 0-3 1.5 1.5 0 0 0 0 3z",
                "M21 15l-5-5L5 21",
            ],
            Self::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.3-4.3"],
            Self::Phone => &[
                "M22 16.9v3a2 2 0 0 1-2.2 2 19.8 19.8 0 0 1-8.6-3.1 19.5 19.5 0 0 1-6-6A19.8 19.8 0 0 1 2.1 4.2 2 2 0 0 1 4.1 2h3a2 2 0 0 1 2 1.7c.1.9.4 1.8.7 2.7a2 2 0 0 1-.5 2.1L8 9.8a16 16 0 0 0 6 6l1.3-1.3a2 2 0 0 1 2.1-.4c.9.3 1.8.6 2.7.7a2 2 0 0 1 1.7 2z",
            ],
            Self::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Self::MapPin => &[
                "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z",
                "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
            ],
            Self::Globe => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            Self::LogOut => &["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "M16 17l5-5-5-5", "M21 12H9"],
            Self::Check => &["M20 6L9 17l-5-5"],
            Self::Message => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
            Self::Layers => &["M12 2L2 7l10 5 10-5-10-5z", "M2 17l10 5 10-5", "M2 12l10 5 10-5"],
            Self::Store => &[
                "M3 9l1.5-5h15L21 9",
                "M3 9h18v2a3 3 0 0 1-6 0 3 3 0 0 1-6 0 3 3 0 0 1-6 0z",
                "M5 13v8h14v-8",
            ],
        }
    }

    /// Stable token used in `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Close => "close",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Edit => "edit",
            Self::Trash => "trash",
            Self::Upload => "upload",
            Self::Image => "image",
            Self::Search => "search",
            Self::Phone => "phone",
            Self::Mail => "mail",
            Self::MapPin => "map-pin",
            Self::Globe => "globe",
            Self::LogOut => "log-out",
            Self::Check => "check",
            Self::Message => "message",
            Self::Layers => "layers",
            Self::Store => "store",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon size.
pub enum IconSize {
    /// 14px.
    Xs,
    /// 16px.
    Sm,
    /// 20px.
    #[default]
    Md,
    /// 28px.
    Lg,
}

impl IconSize {
    const fn px(self) -> u32 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 28,
        }
    }
}

#[component]
/// Decorative icon; pair it with visible text or an `aria-label` on the parent control.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-icon"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_geometry() {
        for icon in [
            IconName::ChevronLeft,
            IconName::ChevronRight,
            IconName::Upload,
            IconName::Store,
        ] {
            assert!(!icon.paths().is_empty(), "{}", icon.token());
        }
        assert_eq!(IconSize::default().px(), 20);
    }
}
