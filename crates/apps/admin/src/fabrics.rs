use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, use_params_map, A};
use storefront_runtime::{
    catalog,
    components::ImageUploader,
    format::format_vnd_range,
    forms::{FabricDraft, FormStatus},
    i18n::Phrase,
    model::Fabric,
    request::Loadable,
    runtime_context::use_storefront,
    upload::UploadMode,
};
use system_ui::prelude::*;

use crate::form_kit::{
    bind, edit, label, run_delete, run_submission, status_tone, visibility_phrase, ActiveToggle,
    FormActions, LoadingNotice, PageHeader,
};

pub(crate) const FABRICS_PATH: &str = "/admin/fabrics";

#[component]
/// Every fabric, hidden ones included.
pub fn FabricListPage() -> impl IntoView {
    let runtime = use_storefront();
    let fabrics = create_rw_signal(Loadable::<Vec<Fabric>>::Loading);

    let reload = move || {
        let store = runtime.host.get_value().content_store();
        spawn_local(async move {
            let list = catalog::all_fabrics(store.as_ref()).await;
            fabrics.try_set(Loadable::Ready(list));
        });
    };
    reload();

    let delete = move |id: String| {
        run_delete(
            runtime,
            move |store| async move { catalog::delete_fabric(store.as_ref(), &id).await },
            reload,
        )
    };

    let rows = move |list: Vec<Fabric>| {
        list.into_iter()
            .map(|fabric| {
                let id = fabric.id.clone();
                let range = format_vnd_range(fabric.price_per_meter_min, fabric.price_per_meter_max);
                view! {
                    <tr>
                        <td><img class="admin-thumb" src=fabric.image alt="" loading="lazy" /></td>
                        <td>{fabric.name}</td>
                        <td>{fabric.material}</td>
                        <td>{range}</td>
                        <td>
                            <Badge tone=status_tone(fabric.is_active)>
                                {move || runtime.text(visibility_phrase(fabric.is_active))}
                            </Badge>
                        </td>
                        <td>
                            <Cluster gap=LayoutGap::Sm>
                                <A href=format!("{FABRICS_PATH}/{}", fabric.id)>
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
            <PageHeader runtime title=Phrase::Fabrics create_href="/admin/fabrics/create" />
            {move || match fabrics.get() {
                Loadable::Ready(list) if list.is_empty() => {
                    view! {
                        <EmptyState icon=IconName::Layers>
                            <Text tone=TextTone::Secondary>{runtime.text(Phrase::EmptyList)}</Text>
                        </EmptyState>
                    }
                    .into_view()
                }
                Loadable::Ready(list) => {
                    view! {
                        <DataTable aria_label=runtime.text(Phrase::Fabrics).to_string()>
                            <thead>
                                <tr>
                                    <th>{runtime.text(Phrase::Image)}</th>
                                    <th>{runtime.text(Phrase::Name)}</th>
                                    <th>{runtime.text(Phrase::Material)}</th>
                                    <th>{runtime.text(Phrase::PricePerMeter)}</th>
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
/// Empty fabric form.
pub fn FabricCreatePage() -> impl IntoView {
    view! { <FabricForm id=None initial=FabricDraft::default() /> }
}

#[component]
/// Fabric form loaded from `/admin/fabrics/:id`.
pub fn FabricEditPage() -> impl IntoView {
    let runtime = use_storefront();
    let params = use_params_map();
    let id = create_memo(move |_| params.with(|params| params.get("id").cloned().unwrap_or_default()));
    let fabric = create_rw_signal(Loadable::<Fabric>::Loading);

    create_effect(move |_| {
        let id = id.get();
        let store = runtime.host.get_value().content_store();
        spawn_local(async move {
            let found = catalog::fabric_by_id(store.as_ref(), &id).await;
            fabric.try_set(Loadable::from_option(found));
        });
    });

    move || match fabric.get() {
        Loadable::Ready(record) => view! {
            <FabricForm id=Some(record.id.clone()) initial=FabricDraft::from_record(&record) />
        }
        .into_view(),
        Loadable::Missing => view! { <LoadingNotice runtime missing=true /> }.into_view(),
        Loadable::Loading => view! { <LoadingNotice runtime missing=false /> }.into_view(),
    }
}

#[component]
fn FabricForm(id: Option<String>, initial: FabricDraft) -> impl IntoView {
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
                move |store, fabric| async move {
                    match id {
                        Some(id) => catalog::update_fabric(store.as_ref(), &id, &fabric).await,
                        None => catalog::create_fabric(store.as_ref(), &fabric).await.map(|_| ()),
                    }
                },
                move || navigate(FABRICS_PATH, Default::default()),
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
                move |store| async move { catalog::delete_fabric(store.as_ref(), &id).await },
                move || navigate(FABRICS_PATH, Default::default()),
            );
        })
    });

    view! {
        <Panel title=label(runtime, if editing { Phrase::Edit } else { Phrase::Create })>
            <form on:submit=submit>
                <Stack gap=LayoutGap::Md>
                    <FieldGroup label=label(runtime, Phrase::Name) required=true>
                        <TextField
                            value=bind(draft, |draft| &draft.name)
                            on_input=edit(draft, FabricDraft::set_name)
                        />
                    </FieldGroup>
                    <FieldGroup label=label(runtime, Phrase::Slug) required=true>
                        <TextField
                            value=Signal::derive(move || draft.with(|draft| draft.slug.value.clone()))
                            on_input=edit(draft, |draft, value| draft.slug.edit(value))
                        />
                    </FieldGroup>
                    <Grid columns=GridColumns::Two>
                        <FieldGroup label=label(runtime, Phrase::PriceMin) required=true>
                            <TextField
                                inputmode="numeric"
                                value=bind(draft, |draft| &draft.price_per_meter_min)
                                on_input=edit(draft, |draft, value| draft.price_per_meter_min = value)
                            />
                        </FieldGroup>
                        <FieldGroup label=label(runtime, Phrase::PriceMax) required=true>
                            <TextField
                                inputmode="numeric"
                                value=bind(draft, |draft| &draft.price_per_meter_max)
                                on_input=edit(draft, |draft, value| draft.price_per_meter_max = value)
                            />
                        </FieldGroup>
                    </Grid>
                    <FieldGroup label=label(runtime, Phrase::Material) required=true>
                        <TextField
                            value=bind(draft, |draft| &draft.material)
                            on_input=edit(draft, |draft, value| draft.material = value)
                        />
                    </FieldGroup>
                    <FieldGroup label=label(runtime, Phrase::Description) required=true>
                        <TextArea
                            value=bind(draft, |draft| &draft.description)
                            on_input=edit(draft, |draft, value| draft.description = value)
                        />
                    </FieldGroup>
                    <FieldGroup label=label(runtime, Phrase::Uses)>
                        <TextArea
                            rows=2
                            value=bind(draft, |draft| &draft.uses)
                            on_input=edit(draft, |draft, value| draft.uses = value)
                        />
                    </FieldGroup>
                    <ImageUploader mode=UploadMode::Single selection=image label=Phrase::Image required=true />
                    <ActiveToggle
                        runtime
                        checked=Signal::derive(move || draft.with(|draft| draft.is_active))
                        on_change=Callback::new(move |checked| draft.update(|draft| draft.is_active = checked))
                    />
                    <FormActions runtime status cancel_href=FABRICS_PATH on_delete=on_delete />
                </Stack>
            </form>
        </Panel>
    }
}
