use super::*;

#[component]
/// Generic surface primitive.
pub fn Surface(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = Elevation::Flat)] elevation: Elevation,
    #[prop(default = LayoutPadding::Md)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-surface", layout_class)
            data-ui-primitive="true"
            data-ui-kind="surface"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
            role=role
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Titled section used by admin forms and storefront info blocks.
pub fn Panel(
    #[prop(default = SurfaceVariant::Standard)] variant: SurfaceVariant,
    #[prop(default = LayoutPadding::Lg)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
            data-ui-variant=variant.token()
            data-ui-elevation=Elevation::Raised.token()
            data-ui-padding=padding.token()
        >
            <Show when=move || !title.get().is_empty() fallback=|| ()>
                <h2 data-ui-slot="title">{move || title.get()}</h2>
            </Show>
            {children()}
        </section>
    }
}

#[component]
/// Card surface for product tiles and list rows.
pub fn Card(
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(default = LayoutPadding::None)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-elevation=elevation.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] strike: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
            data-ui-strike=bool_token(strike)
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading rendered as `h1`..`h3`.
pub fn Heading(
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_layout_class("ui-heading", layout_class);
    let tone = tone.token();
    match level {
        HeadingLevel::H1 => view! {
            <h1 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-tone=tone>
                {children()}
            </h1>
        }
        .into_view(),
        HeadingLevel::H2 => view! {
            <h2 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-tone=tone>
                {children()}
            </h2>
        }
        .into_view(),
        HeadingLevel::H3 => view! {
            <h3 class=class data-ui-primitive="true" data-ui-kind="heading" data-ui-tone=tone>
                {children()}
            </h3>
        }
        .into_view(),
    }
}

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Empty state content block.
pub fn EmptyState(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] icon: Option<IconName>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
            role="status"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg /> })}
            {children()}
        </div>
    }
}

#[component]
/// Indeterminate loading indicator with a visually hidden label.
pub fn Spinner(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] label: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-spinner", layout_class)
            data-ui-primitive="true"
            data-ui-kind="spinner"
            role="status"
            aria-live="polite"
        >
            <span data-ui-slot="ring" aria-hidden="true"></span>
            <span data-ui-slot="label">{move || label.get()}</span>
        </div>
    }
}

#[component]
/// Image with a fixed aspect box so layout does not shift while loading.
pub fn ImageFrame(
    #[prop(into)] src: MaybeSignal<String>,
    #[prop(optional, into)] alt: MaybeSignal<String>,
    #[prop(default = AspectRatio::Square)] aspect: AspectRatio,
    #[prop(optional)] eager: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-image-frame", layout_class)
            data-ui-primitive="true"
            data-ui-kind="image-frame"
            data-ui-slot=ui_slot
            data-ui-aspect=aspect.token()
        >
            <img
                src=move || src.get()
                alt=move || alt.get()
                loading=if eager { "eager" } else { "lazy" }
                draggable="false"
            />
        </div>
    }
}

#[component]
/// Shared table primitive.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ui-data-table-scroll" data-ui-slot="scroll">
            <table
                class=merge_layout_class("ui-data-table", layout_class)
                data-ui-primitive="true"
                data-ui-kind="data-table"
                aria-label=aria_label
            >
                {children()}
            </table>
        </div>
    }
}
