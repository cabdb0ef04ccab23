//! Admin back-office pages: session gate, login, dashboard, and the catalog editors.
//!
//! Every route below `/admin` renders through [`AdminShell`], which holds the page until the
//! persisted session has been checked and redirects visitors who are not signed in.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod banners;
mod contact_info;
mod fabrics;
mod form_kit;
mod messages;
mod products;

use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_location, use_navigate, NavigateOptions, Outlet, A};
use platform_host::AuthError;
use storefront_runtime::{
    catalog,
    i18n::Phrase,
    model::MessageStatus,
    runtime_context::{use_storefront, StorefrontContext},
    session::{gate, GateDecision, ADMIN_HOME_PATH, ADMIN_LOGIN_PATH},
};
use system_ui::prelude::*;

pub use banners::{BannerCreatePage, BannerEditPage, BannerListPage};
pub use contact_info::ContactInfoPage;
pub use fabrics::{FabricCreatePage, FabricEditPage, FabricListPage};
pub use messages::MessageListPage;
pub use products::{ProductCreatePage, ProductEditPage, ProductListPage};

use form_kit::label;

const SIDEBAR: [(&str, Phrase, IconName); 6] = [
    (ADMIN_HOME_PATH, Phrase::Dashboard, IconName::Store),
    (banners::BANNERS_PATH, Phrase::Banners, IconName::Image),
    (products::PRODUCTS_PATH, Phrase::Products, IconName::Store),
    (fabrics::FABRICS_PATH, Phrase::Fabrics, IconName::Layers),
    (messages::MESSAGES_PATH, Phrase::Messages, IconName::Message),
    (contact_info::CONTACT_INFO_PATH, Phrase::ContactInfo, IconName::Phone),
];

/// Whether the sidebar entry `href` should be highlighted on `pathname`.
fn nav_active(pathname: &str, href: &str) -> bool {
    let pathname = pathname.trim_end_matches('/');
    if href == ADMIN_HOME_PATH {
        return pathname == ADMIN_HOME_PATH;
    }
    pathname == href || pathname.starts_with(&format!("{href}/"))
}

#[component]
/// Session gate and sidebar layout for every admin route.
pub fn AdminShell() -> impl IntoView {
    let runtime = use_storefront();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    untrack(|| runtime.revalidate_session());

    let decision =
        create_memo(move |_| runtime.session.with(|session| gate(session, &pathname.get())));
    let on_login = create_memo(move |_| {
        pathname.with(|path| path.trim_end_matches('/') == ADMIN_LOGIN_PATH)
    });

    create_effect(move |_| {
        let target = match decision.get() {
            GateDecision::RedirectToLogin => ADMIN_LOGIN_PATH,
            GateDecision::RedirectToDashboard => ADMIN_HOME_PATH,
            GateDecision::Wait | GateDecision::Render => return,
        };
        logging::log!("admin gate redirecting to {target}");
        navigate(
            target,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    });

    move || match (decision.get(), on_login.get()) {
        (GateDecision::Render, true) => view! {
            <main class="admin-login">
                <Outlet />
            </main>
        }
        .into_view(),
        (GateDecision::Render, false) => view! { <AdminLayout runtime pathname /> }.into_view(),
        _ => view! {
            <PageContainer narrow=true>
                <Spinner label=label(runtime, Phrase::CheckingSession) />
            </PageContainer>
        }
        .into_view(),
    }
}

#[component]
fn AdminLayout(runtime: StorefrontContext, pathname: Memo<String>) -> impl IntoView {
    let username = move || {
        runtime
            .admin_session()
            .map(|session| session.username)
            .unwrap_or_default()
    };

    let links = SIDEBAR
        .into_iter()
        .map(|(href, phrase, icon)| {
            view! {
                <NavLink
                    href=href
                    leading_icon=icon
                    active=Signal::derive(move || pathname.with(|path| nav_active(path, href)))
                >
                    {move || runtime.text(phrase)}
                </NavLink>
            }
        })
        .collect_view();

    view! {
        <div class="admin">
            <aside class="admin-sidebar">
                <Stack gap=LayoutGap::Lg>
                    <Heading level=HeadingLevel::H2>{move || runtime.text(Phrase::AdminTitle)}</Heading>
                    <NavBar vertical=true aria_label=runtime.text_untracked(Phrase::AdminTitle).to_string()>
                        {links}
                    </NavBar>
                    <Stack gap=LayoutGap::Sm>
                        <Text role=TextRole::Caption tone=TextTone::Secondary>{username}</Text>
                        <Button
                            variant=ButtonVariant::Quiet
                            leading_icon=IconName::LogOut
                            on_click=Callback::new(move |_| runtime.sign_out())
                        >
                            {move || runtime.text(Phrase::SignOut)}
                        </Button>
                    </Stack>
                </Stack>
            </aside>
            <main class="admin-main">
                <Outlet />
            </main>
        </div>
    }
}

#[component]
/// Credential form for `/admin/login`.
pub fn LoginPage() -> impl IntoView {
    let runtime = use_storefront();
    let navigate = use_navigate();
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let busy = create_rw_signal(false);
    let error = create_rw_signal(None::<Phrase>);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let navigate = navigate.clone();
        let (name, secret) = (username.get_untracked(), password.get_untracked());
        spawn_local(async move {
            let outcome = runtime.sign_in(name, secret).await;
            if busy.try_set(false).is_some() {
                return;
            }
            match outcome {
                Ok(()) => navigate(ADMIN_HOME_PATH, Default::default()),
                Err(AuthError::InvalidCredentials) => {
                    password.set(String::new());
                    error.set(Some(Phrase::InvalidCredentials));
                }
                Err(err) => {
                    logging::warn!("admin sign-in failed: {err}");
                    error.set(Some(Phrase::SessionExpired));
                }
            }
        });
    };

    view! {
        <PageContainer narrow=true>
            <Panel title=label(runtime, Phrase::AdminTitle)>
                <form on:submit=submit>
                    <Stack gap=LayoutGap::Md>
                        <FieldGroup label=label(runtime, Phrase::Username) required=true>
                            <TextField
                                autocomplete="username"
                                required=true
                                value=Signal::from(username)
                                on_input=Callback::new(move |value| username.set(value))
                            />
                        </FieldGroup>
                        <FieldGroup label=label(runtime, Phrase::Password) required=true>
                            <TextField
                                input_type="password"
                                autocomplete="current-password"
                                required=true
                                value=Signal::from(password)
                                on_input=Callback::new(move |value| password.set(value))
                            />
                        </FieldGroup>
                        {move || {
                            error
                                .get()
                                .map(|phrase| view! { <Text tone=TextTone::Danger>{runtime.text(phrase)}</Text> })
                        }}
                        <Button
                            variant=ButtonVariant::Primary
                            button_type=ButtonType::Submit
                            disabled=Signal::from(busy)
                        >
                            {move || {
                                runtime.text(if busy.get() { Phrase::SigningIn } else { Phrase::SignIn })
                            }}
                        </Button>
                    </Stack>
                </form>
            </Panel>
        </PageContainer>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct DashboardCounts {
    banners: usize,
    products: usize,
    fabrics: usize,
    new_messages: usize,
}

#[component]
/// Record counts with shortcuts into each editor.
pub fn DashboardPage() -> impl IntoView {
    let runtime = use_storefront();
    let counts = create_rw_signal(None::<DashboardCounts>);

    let store = runtime.host.get_value().content_store();
    spawn_local(async move {
        let store = store.as_ref();
        let loaded = DashboardCounts {
            banners: catalog::all_banners(store).await.len(),
            products: catalog::all_products(store).await.len(),
            fabrics: catalog::all_fabrics(store).await.len(),
            new_messages: catalog::contact_messages(store, Some(MessageStatus::New))
                .await
                .len(),
        };
        counts.try_set(Some(loaded));
    });

    let tile = move |href: &'static str, phrase: Phrase, read: fn(&DashboardCounts) -> usize| {
        view! {
            <A href=href class="admin-tile">
                <Card padding=LayoutPadding::Md>
                    <Stack gap=LayoutGap::Sm>
                        <Text role=TextRole::Label>{move || runtime.text(phrase)}</Text>
                        <Text role=TextRole::Display>
                            {move || counts.get().map(|counts| read(&counts).to_string()).unwrap_or_default()}
                        </Text>
                    </Stack>
                </Card>
            </A>
        }
    };

    view! {
        <Stack gap=LayoutGap::Lg>
            <Heading level=HeadingLevel::H1>{move || runtime.text(Phrase::Dashboard)}</Heading>
            <Show
                when=move || counts.get().is_some()
                fallback=move || view! { <Spinner label=label(runtime, Phrase::Loading) /> }
            >
                <Grid columns=GridColumns::Four>
                    {tile(banners::BANNERS_PATH, Phrase::Banners, |counts| counts.banners)}
                    {tile(products::PRODUCTS_PATH, Phrase::Products, |counts| counts.products)}
                    {tile(fabrics::FABRICS_PATH, Phrase::Fabrics, |counts| counts.fabrics)}
                    {tile(messages::MESSAGES_PATH, Phrase::StatusNew, |counts| counts.new_messages)}
                </Grid>
            </Show>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_entry_only_matches_its_own_path() {
        assert!(nav_active("/admin", "/admin"));
        assert!(nav_active("/admin/", "/admin"));
        assert!(!nav_active("/admin/banners", "/admin"));
    }

    #[test]
    fn section_entries_match_nested_pages() {
        assert!(nav_active("/admin/products", "/admin/products"));
        assert!(nav_active("/admin/products/create", "/admin/products"));
        assert!(nav_active("/admin/products/abc", "/admin/products"));
        assert!(!nav_active("/admin/products-archive", "/admin/products"));
        assert!(!nav_active("/admin/fabrics", "/admin/products"));
    }
}
