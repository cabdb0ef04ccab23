use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, use_params_map, A};
use storefront_runtime::{
    catalog,
    components::ImageUploader,
    forms::{BannerDraft, FormStatus},
    i18n::Phrase,
    model::Banner,
    request::Loadable,
    runtime_context::use_storefront,
    upload::UploadMode,
};
use system_ui::prelude::*;

use crate::form_kit::{
    bind, edit, label, run_delete, run_submission, status_tone, visibility_phrase, ActiveToggle,
    FormActions, LoadingNotice, PageHeader,
};

pub(crate) const BANNERS_PATH: &str = "/admin/banners";

#[component]
/// Every banner in display order, hidden ones included.
pub fn BannerListPage() -> impl IntoView {
    let runtime = use_storefront();
    let banners = create_rw_signal(Loadable::<Vec<Banner>>::Loading);

    let reload = move || {
        let store = runtime.host.get_value().content_store();
        spawn_local(async move {
            let list = catalog::all_banners(store.as_ref()).await;
            banners.try_set(Loadable::Ready(list));
        });
    };
    reload();

    let delete = move |id: String| {
        run_delete(
            runtime,
            move |store| async move { catalog::delete_banner(store.as_ref(), &id).await },
            reload,
        )
    };

    let rows = move |list: Vec<Banner>| {
        list.into_iter()
            .map(|banner| {
                let id = banner.id.clone();
                view! {
                    <tr>
                        <td>
                            <img class="admin-thumb" src=banner.image_url alt="" loading="lazy" />
                        </td>
                        <td>{banner.title}</td>
                        <td>{banner.order}</td>
                        <td>
                            <Badge tone=status_tone(banner.is_active)>
                                {move || runtime.text(visibility_phrase(banner.is_active))}
                            </Badge>
                        </td>
                        <td>
                            <Cluster gap=LayoutGap::Sm>
                                <A href=format!("{BANNERS_PATH}/{}", banner.id)>
                                    {move || runtime.text(Phrase::Edit)}
                                </A>
                                <IconButton
                                    icon=IconName::Trash
                                    size=ButtonSize::Sm
                                    aria_label=label(runtime, Phrase::Delete)
                                    on_click=Callback::new(move |_| delete(id.clone()))
                                />
                            </Cluster>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Stack gap=LayoutGap::Lg>
            <PageHeader runtime title=Phrase::Banners create_href="/admin/banners/create" />
            {move || match banners.get() {
                Loadable::Ready(list) if list.is_empty() => {
                    view! {
                        <EmptyState icon=IconName::Image>
                            <Text tone=TextTone::Secondary>{runtime.text(Phrase::EmptyList)}</Text>
                        </EmptyState>
                    }
                    .into_view()
                }
                Loadable::Ready(list) => {
                    view! {
                        <DataTable aria_label=runtime.text(Phrase::Banners).to_string()>
                            <thead>
                                <tr>
                                    <th>{runtime.text(Phrase::Image)}</th>
                                    <th>{runtime.text(Phrase::Title)}</th>
                                    <th>{runtime.text(Phrase::DisplayOrder)}</th>
                                    <th>{runtime.text(Phrase::Status)}</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>{rows(list)}</tbody>
                        </DataTable>
                    }
                    .into_view()
                }
                Loadable::Loading | Loadable::Missing => {
                    view! { <LoadingNotice runtime missing=false /> }.into_view()
                }
            }}
        </Stack>
    }
}

#[component]
/// Empty banner form.
pub fn BannerCreatePage() -> impl IntoView {
    view! { <BannerForm id=None initial=BannerDraft::default() /> }
}

#[component]
/// Banner form loaded from `/admin/banners/:id`.
pub fn BannerEditPage() -> impl IntoView {
    let runtime = use_storefront();
    let params = use_params_map();
    let id = create_memo(move |_| params.with(|params| params.get("id").cloned().unwrap_or_default()));
    let banner = create_rw_signal(Loadable::<Banner>::Loading);

    create_effect(move |_| {
        let id = id.get();
        let store = runtime.host.get_value().content_store();
        spawn_local(async move {
            let found = catalog::banner_by_id(store.as_ref(), &id).await;
            banner.try_set(Loadable::from_option(found));
        });
    });

    move || match banner.get() {
        Loadable::Ready(record) => view! {
            <BannerForm id=Some(record.id.clone()) initial=BannerDraft::from_record(&record) />
        }
        .into_view(),
        Loadable::Missing => view! { <LoadingNotice runtime missing=true /> }.into_view(),
        Loadable::Loading => view! { <LoadingNotice runtime missing=false /> }.into_view(),
    }
}

#[component]
fn BannerForm(id: Option<String>, initial: BannerDraft) -> impl IntoView {
    let runtime = use_storefront();
    let navigate = use_navigate();
    let image = create_rw_signal(initial.image.clone());
    let draft = create_rw_signal(initial);
    let status = create_rw_signal(FormStatus::default());
    let editing = id.is_some();
    let id = store_value(id);

    let submit = {
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let mut current = draft.get_untracked();
            current.image = image.get_untracked();
            let id = id.get_value();
            let success = if id.is_some() {
                Phrase::UpdateSucceeded
            } else {
                Phrase::CreateSucceeded
            };
            let navigate = navigate.clone();
            run_submission(
                runtime,
                status,
                current.validate(),
                success,
                move |store, banner| async move {
                    match id {
                        Some(id) => catalog::update_banner(store.as_ref(), &id, &banner).await,
                        None => catalog::create_banner(store.as_ref(), &banner).await.map(|_| ()),
                    }
                },
                move || navigate(BANNERS_PATH, Default::default()),
            );
        }
    };

    let on_delete = editing.then(|| {
        Callback::new(move |()| {
            let Some(id) = id.get_value() else {
                return;
            };
            let navigate = navigate.clone();
            run_delete(
                runtime,
                move |store| async move { catalog::delete_banner(store.as_ref(), &id).await },
                move || navigate(BANNERS_PATH, Default::default()),
            );
        })
    });

    view! {
        <Panel title=label(runtime, if editing { Phrase::Edit } else { Phrase::Create })>
            <form on:submit=submit>
                <Stack gap=LayoutGap::Md>
                    <FieldGroup label=label(runtime, Phrase::Title) required=true>
                        <TextField
                            value=bind(draft, |draft| &draft.title)
                            on_input=edit(draft, |draft, value| draft.title = value)
                        />
                    </FieldGroup>
                    <FieldGroup label=label(runtime, Phrase::Description) required=true>
                        <TextArea
                            rows=3
                            value=bind(draft, |draft| &draft.description)
                            on_input=edit(draft, |draft, value| draft.description = value)
                        />
                    </FieldGroup>
                    <FieldGroup label=label(runtime, Phrase::DisplayOrder) required=true>
                        <TextField
                            input_type="number"
                            inputmode="numeric"
                            min="1"
                            value=bind(draft, |draft| &draft.order)
                            on_input=edit(draft, |draft, value| draft.order = value)
                        />
                    </FieldGroup>
                    <ImageUploader mode=UploadMode::Single selection=image label=Phrase::Image required=true />
                    <ActiveToggle
                        runtime
                        checked=Signal::derive(move || draft.with(|draft| draft.is_active))
                        on_change=Callback::new(move |checked| draft.update(|draft| draft.is_active = checked))
                    />
                    <FormActions runtime status cancel_href=BANNERS_PATH on_delete=on_delete />
                </Stack>
            </form>
        </Panel>
    }
}
