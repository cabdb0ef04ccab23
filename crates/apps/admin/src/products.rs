use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_navigate, use_params_map, A};
use storefront_runtime::{
    catalog,
    components::ImageUploader,
    format::format_vnd,
    forms::{FormStatus, ProductDraft},
    i18n::{category_phrase, Phrase},
    model::{Fabric, Product, ProductCategory},
    request::Loadable,
    runtime_context::use_storefront,
    upload::UploadMode,
};
use system_ui::prelude::*;

use crate::form_kit::{
    bind, edit, label, run_delete, run_submission, status_tone, visibility_phrase, ActiveToggle,
    FormActions, LoadingNotice, PageHeader,
};

pub(crate) const PRODUCTS_PATH: &str = "/admin/products";

#[component]
/// Every product, newest first, hidden ones included.
pub fn ProductListPage() -> impl IntoView {
    let runtime = use_storefront();
    let products = create_rw_signal(Loadable::<Vec<Product>>::Loading);

    let reload = move || {
        let store = runtime.host.get_value().content_store();
        spawn_local(async move {
            let list = catalog::all_products(store.as_ref()).await;
            products.try_set(Loadable::Ready(list));
        });
    };
    reload();

    let delete = move |id: String| {
        run_delete(
            runtime,
            move |store| async move { catalog::delete_product(store.as_ref(), &id).await },
            reload,
        )
    };

    let rows = move |list: Vec<Product>| {
        list.into_iter()
            .map(|product| {
                let id = product.id.clone();
                let cover = product.cover_image().unwrap_or_default().to_string();
                let price = format_vnd(product.discounted_price());
                view! {
                    <tr>
                        <td><img class="admin-thumb" src=cover alt="" loading="lazy" /></td>
                        <td>
                            <Stack gap=LayoutGap::None>
                                <Text>{product.name}</Text>
                                <Text role=TextRole::Caption tone=TextTone::Secondary>
                                    {product.slug}
                                </Text>
                            </Stack>
                        </td>
                        <td>{move || runtime.text(category_phrase(product.category))}</td>
                        <td>{price}</td>
                        <td>
                            <Badge tone=status_tone(product.is_active)>
                                {move || runtime.text(visibility_phrase(product.is_active))}
                            </Badge>
                        </td>
                        <td>
                            <Cluster gap=LayoutGap::Sm>
                                <A href=format!("{PRODUCTS_PATH}/{}", product.id)>
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
            <PageHeader runtime title=Phrase::Products create_href="/admin/products/create" />
            {move || match products.get() {
                Loadable::Ready(list) if list.is_empty() => {
                    view! {
                        <EmptyState icon=IconName::Store>
                            <Text tone=TextTone::Secondary>{runtime.text(Phrase::EmptyList)}</Text>
                        </EmptyState>
                    }
                    .into_view()
                }
                Loadable::Ready(list) => {
                    view! {
                        <DataTable aria_label=runtime.text(Phrase::Products).to_string()>
                            <thead>
                                <tr>
                                    <th>{runtime.text(Phrase::Image)}</th>
                                    <th>{runtime.text(Phrase::Name)}</th>
                                    <th>{runtime.text(Phrase::Category)}</th>
                                    <th>{runtime.text(Phrase::Price)}</th>
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
/// Empty product form.
pub fn ProductCreatePage() -> impl IntoView {
    view! { <ProductForm id=None initial=ProductDraft::default() /> }
}

#[component]
/// Product form loaded from `/admin/products/:id`.
pub fn ProductEditPage() -> impl IntoView {
    let runtime = use_storefront();
    let params = use_params_map();
    let id = create_memo(move |_| params.with(|params| params.get("id").cloned().unwrap_or_default()));
    let product = create_rw_signal(Loadable::<Product>::Loading);

    create_effect(move |_| {
        let id = id.get();
        let store = runtime.host.get_value().content_store();
        spawn_local(async move {
            let found = catalog::product_by_id(store.as_ref(), &id).await;
            product.try_set(Loadable::from_option(found));
        });
    });

    move || match product.get() {
        Loadable::Ready(record) => view! {
            <ProductForm id=Some(record.id.clone()) initial=ProductDraft::from_record(&record) />
        }
        .into_view(),
        Loadable::Missing => view! { <LoadingNotice runtime missing=true /> }.into_view(),
        Loadable::Loading => view! { <LoadingNotice runtime missing=false /> }.into_view(),
    }
}

#[component]
fn ProductForm(id: Option<String>, initial: ProductDraft) -> impl IntoView {
    let runtime = use_storefront();
    let navigate = use_navigate();
    let images = create_rw_signal(initial.images.clone());
    let draft = create_rw_signal(initial);
    let status = create_rw_signal(FormStatus::default());
    let fabrics = create_rw_signal(Vec::<Fabric>::new());
    let editing = id.is_some();
    let id = store_value(id);
    let gallery = UploadMode::Multiple {
        max_files: runtime.config.cloudinary.max_files,
    };

    let store = runtime.host.get_value().content_store();
    spawn_local(async move {
        let list = catalog::all_fabrics(store.as_ref()).await;
        fabrics.try_set(list);
    });

    let submit = {
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let mut current = draft.get_untracked();
            current.images = images.get_untracked();
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
                move |store, product| async move {
                    match id {
                        Some(id) => catalog::update_product(store.as_ref(), &id, &product).await,
                        None => catalog::create_product(store.as_ref(), &product).await.map(|_| ()),
                    }
                },
                move || navigate(PRODUCTS_PATH, Default::default()),
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
                move |store| async move { catalog::delete_product(store.as_ref(), &id).await },
                move || navigate(PRODUCTS_PATH, Default::default()),
            );
        })
    });

    let fabric_options = move || {
        fabrics
            .get()
            .into_iter()
            .map(|fabric| view! { <option value=fabric.id>{fabric.name}</option> })
            .collect_view()
    };

    view! {
        <Panel title=label(runtime, if editing { Phrase::Edit } else { Phrase::Create })>
            <form on:submit=submit>
                <Stack gap=LayoutGap::Md>
                    <FieldGroup label=label(runtime, Phrase::Name) required=true>
                        <TextField
                            value=bind(draft, |draft| &draft.name)
                            on_input=edit(draft, ProductDraft::set_name)
                        />
                    </FieldGroup>
                    <FieldGroup label=label(runtime, Phrase::Slug) required=true>
                        <TextField
                            value=Signal::derive(move || draft.with(|draft| draft.slug.value.clone()))
                            on_input=edit(draft, |draft, value| draft.slug.edit(value))
                        />
                    </FieldGroup>
                    <Grid columns=GridColumns::Two>
                        <FieldGroup label=label(runtime, Phrase::Category)>
                            <SelectField
                                value=Signal::derive(move || {
                                    draft.with(|draft| draft.category.as_str().to_string())
                                })
                                on_change=edit(draft, |draft, value| {
                                    if let Some(category) = ProductCategory::parse(&value) {
                                        draft.category = category;
                                    }
                                })
                            >
                                {ProductCategory::ALL
                                    .into_iter()
                                    .map(|category| {
                                        view! {
                                            <option value=category.as_str()>
                                                {move || runtime.text(category_phrase(category))}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </SelectField>
                        </FieldGroup>
                        <FieldGroup label=label(runtime, Phrase::Fabrics)>
                            <SelectField
                                value=Signal::derive(move || {
                                    draft.with(|draft| draft.fabric_id.clone().unwrap_or_default())
                                })
                                on_change=edit(draft, |draft, value| {
                                    draft.fabric_id = (!value.is_empty()).then_some(value);
                                })
                            >
                                <option value="">"-"</option>
                                {fabric_options}
                            </SelectField>
                        </FieldGroup>
                    </Grid>
                    <FieldGroup label=label(runtime, Phrase::Description) required=true>
                        <TextArea
                            value=bind(draft, |draft| &draft.description)
                            on_input=edit(draft, |draft, value| draft.description = value)
                        />
                    </FieldGroup>
                    <Grid columns=GridColumns::Two>
                        <FieldGroup label=label(runtime, Phrase::Size) required=true>
                            <TextField
                                value=bind(draft, |draft| &draft.size)
                                on_input=edit(draft, |draft, value| draft.size = value)
                            />
                        </FieldGroup>
                        <FieldGroup label=label(runtime, Phrase::Origin) required=true>
                            <TextField
                                value=bind(draft, |draft| &draft.origin)
                                on_input=edit(draft, |draft, value| draft.origin = value)
                            />
                        </FieldGroup>
                        <FieldGroup label=label(runtime, Phrase::Price) required=true>
                            <TextField
                                inputmode="numeric"
                                value=bind(draft, |draft| &draft.price_per_meter)
                                on_input=edit(draft, |draft, value| draft.price_per_meter = value)
                            />
                        </FieldGroup>
                        <FieldGroup label=label(runtime, Phrase::DiscountPercent)>
                            <TextField
                                input_type="number"
                                inputmode="numeric"
                                min="0"
                                max="100"
                                value=bind(draft, |draft| &draft.discount_percent)
                                on_input=edit(draft, |draft, value| draft.discount_percent = value)
                            />
                        </FieldGroup>
                    </Grid>
                    <ImageUploader mode=gallery selection=images label=Phrase::Images required=true />
                    <ActiveToggle
                        runtime
                        checked=Signal::derive(move || draft.with(|draft| draft.is_active))
                        on_change=Callback::new(move |checked| draft.update(|draft| draft.is_active = checked))
                    />
                    <FormActions runtime status cancel_href=PRODUCTS_PATH on_delete=on_delete />
                </Stack>
            </form>
        </Panel>
    }
}
