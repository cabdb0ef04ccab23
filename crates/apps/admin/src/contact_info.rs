use leptos::{ev::SubmitEvent, *};
use storefront_runtime::{
    catalog,
    components::ImageUploader,
    forms::{ContactInfoDraft, FormStatus},
    i18n::Phrase,
    request::Loadable,
    runtime_context::use_storefront,
    session::ADMIN_HOME_PATH,
    upload::UploadMode,
};
use system_ui::prelude::*;

use crate::form_kit::{bind, edit, label, run_submission, FormActions, LoadingNotice, PageHeader};

pub(crate) const CONTACT_INFO_PATH: &str = "/admin/contact-info";

#[component]
/// Editor for the single contact-info document shown on the contact page.
pub fn ContactInfoPage() -> impl IntoView {
    let runtime = use_storefront();
    let draft = create_rw_signal(Loadable::<ContactInfoDraft>::Loading);

    let store = runtime.host.get_value().content_store();
    spawn_local(async move {
        let loaded = catalog::contact_info(store.as_ref())
            .await
            .map(|info| ContactInfoDraft::from_record(&info))
            .unwrap_or_default();
        draft.try_set(Loadable::Ready(loaded));
    });

    view! {
        <Stack gap=LayoutGap::Lg>
            <PageHeader runtime title=Phrase::ContactInfo />
            {move || match draft.get() {
                Loadable::Ready(initial) => view! { <ContactInfoForm initial /> }.into_view(),
                Loadable::Loading | Loadable::Missing => {
                    view! { <LoadingNotice runtime missing=false /> }.into_view()
                }
            }}
        </Stack>
    }
}

type Reader = fn(&ContactInfoDraft) -> &String;
type Writer = fn(&mut ContactInfoDraft, String);

#[component]
fn ContactInfoForm(initial: ContactInfoDraft) -> impl IntoView {
    let runtime = use_storefront();
    let avatar = create_rw_signal(initial.avatar.clone());
    let draft = create_rw_signal(initial);
    let status = create_rw_signal(FormStatus::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut current = draft.get_untracked();
        current.avatar = avatar.get_untracked();
        run_submission(
            runtime,
            status,
            current.validate(),
            Phrase::UpdateSucceeded,
            |store, info| async move { catalog::save_contact_info(store.as_ref(), &info).await },
            || {},
        );
    };

    let text_field = move |phrase: Phrase, read: Reader, apply: Writer, required: bool| {
        view! {
            <FieldGroup label=label(runtime, phrase) required>
                <TextField value=bind(draft, read) on_input=edit(draft, apply) />
            </FieldGroup>
        }
    };

    view! {
        <Panel>
            <form on:submit=submit>
                <Stack gap=LayoutGap::Md>
                    <ImageUploader mode=UploadMode::Single selection=avatar label=Phrase::Avatar required=true />
                    <Grid columns=GridColumns::Two>
                        {text_field(Phrase::StoreName, |d| &d.store_name, |d, v| d.store_name = v, true)}
                        {text_field(Phrase::OwnerName, |d| &d.owner_name, |d, v| d.owner_name = v, true)}
                        {text_field(Phrase::Phone, |d| &d.phone, |d, v| d.phone = v, true)}
                        {text_field(Phrase::Email, |d| &d.email, |d, v| d.email = v, false)}
                        {text_field(Phrase::Address, |d| &d.address, |d, v| d.address = v, true)}
                        {text_field(Phrase::City, |d| &d.city, |d, v| d.city = v, true)}
                        {text_field(Phrase::ZaloLink, |d| &d.zalo_link, |d, v| d.zalo_link = v, true)}
                        {text_field(
                            Phrase::FacebookLink,
                            |d| &d.facebook_link,
                            |d, v| d.facebook_link = v,
                            true,
                        )}
                    </Grid>
                    <FieldGroup label=label(runtime, Phrase::Description)>
                        <TextArea
                            value=bind(draft, |draft| &draft.description)
                            on_input=edit(draft, |draft, value| draft.description = value)
                        />
                    </FieldGroup>
                    <FormActions runtime status cancel_href=ADMIN_HOME_PATH />
                </Stack>
            </form>
        </Panel>
    }
}
