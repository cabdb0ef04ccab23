//! Shared plumbing for back-office forms: field bindings, the submit/delete flows, and the
//! action row.

use std::{future::Future, rc::Rc};

use leptos::*;
use leptos_router::A;
use platform_host::ContentStore;
use storefront_runtime::{
    catalog::CatalogError,
    forms::{confirm_delete, reject_invalid, submit_write, FormError, FormStatus},
    i18n::Phrase,
    runtime_context::StorefrontContext,
};
use system_ui::prelude::*;

/// Reactive label for `phrase`.
pub(crate) fn label(runtime: StorefrontContext, phrase: Phrase) -> Signal<String> {
    Signal::derive(move || runtime.text(phrase).to_string())
}

/// Reads one text field out of a draft.
pub(crate) fn bind<D: 'static>(draft: RwSignal<D>, read: fn(&D) -> &String) -> Signal<String> {
    Signal::derive(move || draft.with(|draft| read(draft).clone()))
}

/// Writes one text field of a draft.
pub(crate) fn edit<D: 'static>(draft: RwSignal<D>, apply: fn(&mut D, String)) -> Callback<String> {
    Callback::new(move |value: String| draft.update(|draft| apply(draft, value)))
}

/// Validates, writes, and reports a form submission.
///
/// Validation failures alert and leave the form editable. A write in flight blocks further
/// submissions. `on_saved` runs only after a successful write while the form is still mounted.
pub(crate) fn run_submission<R, T, W, Fut>(
    runtime: StorefrontContext,
    status: RwSignal<FormStatus>,
    validated: Result<R, FormError>,
    success: Phrase,
    write: W,
    on_saved: impl FnOnce() + 'static,
) where
    R: 'static,
    W: FnOnce(Rc<dyn ContentStore>, R) -> Fut + 'static,
    Fut: Future<Output = Result<T, CatalogError>> + 'static,
{
    if status.with_untracked(FormStatus::is_submitting) {
        return;
    }
    let host = runtime.host.get_value();
    let locale = runtime.locale.get_untracked();
    let record = match validated {
        Ok(record) => record,
        Err(err) => {
            status.set(reject_invalid(host.alert_service().as_ref(), locale, &err));
            return;
        }
    };
    status.set(FormStatus::Submitting);
    spawn_local(async move {
        let outcome = submit_write(
            host.alert_service().as_ref(),
            locale,
            success,
            write(host.content_store(), record),
        )
        .await;
        let saved = outcome == FormStatus::Saved;
        if status.try_set(outcome).is_some() {
            return;
        }
        if saved {
            on_saved();
        }
    });
}

/// Confirms and runs a delete, then calls `on_deleted` if it succeeded.
pub(crate) fn run_delete<D, Fut>(
    runtime: StorefrontContext,
    delete: D,
    on_deleted: impl FnOnce() + 'static,
) where
    D: FnOnce(Rc<dyn ContentStore>) -> Fut + 'static,
    Fut: Future<Output = Result<(), CatalogError>> + 'static,
{
    let host = runtime.host.get_value();
    let locale = runtime.locale.get_untracked();
    spawn_local(async move {
        let store = host.content_store();
        let outcome =
            confirm_delete(host.alert_service().as_ref(), locale, move || delete(store)).await;
        if outcome == Some(FormStatus::Saved) {
            on_deleted();
        }
    });
}

#[component]
/// Page title with an optional "create" link.
pub(crate) fn PageHeader(
    runtime: StorefrontContext,
    title: Phrase,
    #[prop(optional)] create_href: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Cluster justify=LayoutJustify::Between layout_class="admin-page-header">
            <Heading level=HeadingLevel::H1>{move || runtime.text(title)}</Heading>
            {create_href.map(|href| {
                view! {
                    <A href=href class="ui-button admin-create-link">
                        <Icon icon=IconName::Plus size=IconSize::Sm />
                        {move || runtime.text(Phrase::Create)}
                    </A>
                }
            })}
        </Cluster>
    }
}

#[component]
/// Spinner, not-found notice, or nothing, for a record that is not ready yet.
pub(crate) fn LoadingNotice(runtime: StorefrontContext, missing: bool) -> impl IntoView {
    if missing {
        view! {
            <EmptyState icon=IconName::Search>
                <Text tone=TextTone::Secondary>{move || runtime.text(Phrase::NotFound)}</Text>
            </EmptyState>
        }
        .into_view()
    } else {
        view! { <Spinner label=Signal::derive(move || runtime.text(Phrase::Loading).to_string()) /> }
            .into_view()
    }
}

#[component]
/// Save / cancel row, plus delete on edit pages.
pub(crate) fn FormActions(
    runtime: StorefrontContext,
    status: RwSignal<FormStatus>,
    cancel_href: &'static str,
    #[prop(default = None)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let submitting = Signal::derive(move || status.with(FormStatus::is_submitting));
    view! {
        <Stack gap=LayoutGap::Sm>
            {move || {
                status
                    .with(|status| status.error().map(str::to_string))
                    .map(|message| view! { <Text tone=TextTone::Danger>{message}</Text> })
            }}
            <Cluster justify=LayoutJustify::Between>
                <Cluster gap=LayoutGap::Sm>
                    <Button
                        variant=ButtonVariant::Primary
                        button_type=ButtonType::Submit
                        leading_icon=IconName::Check
                        disabled=submitting
                    >
                        {move || {
                            runtime.text(if submitting.get() { Phrase::Saving } else { Phrase::Save })
                        }}
                    </Button>
                    <A href=cancel_href class="ui-button">
                        {move || runtime.text(Phrase::Cancel)}
                    </A>
                </Cluster>
                {on_delete.map(|on_delete| {
                    view! {
                        <Button
                            variant=ButtonVariant::Danger
                            leading_icon=IconName::Trash
                            disabled=submitting
                            on_click=Callback::new(move |_| on_delete.call(()))
                        >
                            {move || runtime.text(Phrase::Delete)}
                        </Button>
                    }
                })}
            </Cluster>
        </Stack>
    }
}

#[component]
/// Active/inactive toggle shared by the catalog forms.
pub(crate) fn ActiveToggle(
    runtime: StorefrontContext,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <CheckboxField checked on_change>
            {move || runtime.text(Phrase::Active)}
        </CheckboxField>
    }
}

/// Badge tone for a record's visibility.
pub(crate) fn status_tone(is_active: bool) -> TextTone {
    if is_active {
        TextTone::Success
    } else {
        TextTone::Secondary
    }
}

/// Badge text for a record's visibility.
pub(crate) fn visibility_phrase(is_active: bool) -> Phrase {
    if is_active {
        Phrase::Active
    } else {
        Phrase::Inactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_labels_follow_the_flag() {
        assert_eq!(visibility_phrase(true), Phrase::Active);
        assert_eq!(visibility_phrase(false), Phrase::Inactive);
    }
}
