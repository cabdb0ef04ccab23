use super::*;

#[component]
/// Horizontal site or section navigation.
pub fn NavBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] vertical: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-nav", layout_class)
            data-ui-primitive="true"
            data-ui-kind="nav"
            data-ui-orientation=if vertical { "vertical" } else { "horizontal" }
            aria-label=aria_label
        >
            {children()}
        </nav>
    }
}

#[component]
/// Navigation anchor. Plain anchors are intercepted by the client router, so this stays
/// router-agnostic.
pub fn NavLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] external: bool,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=merge_layout_class("ui-nav-link", layout_class)
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            aria-current=move || active.get().then_some("page")
            data-ui-primitive="true"
            data-ui-kind="nav-link"
            data-ui-selected=move || bool_token(active.get())
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </a>
    }
}

#[component]
/// Shared tab list primitive.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tab-list"
            role="tablist"
            aria-label=aria_label
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared tab trigger primitive.
pub fn Tab(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] controls: Option<String>,
    #[prop(into)] selected: MaybeSignal<bool>,
    on_select: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            role="tab".to_string()
            aria_controls=controls.unwrap_or_default()
            selected=selected
            ui_slot="tab"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |_| on_select.call(()))
        >
            {children()}
        </Button>
    }
}
