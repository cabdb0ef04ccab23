//! Customer inquiry inbox.

use std::collections::HashMap;

use leptos::*;
use storefront_runtime::{
    catalog,
    format::format_timestamp,
    i18n::{status_phrase, Phrase},
    model::{ContactMessage, MessageStatus, Product},
    request::{Loadable, RequestTracker},
    runtime_context::{use_storefront, StorefrontContext},
};
use system_ui::prelude::*;

use crate::form_kit::{label, run_delete, PageHeader};

pub(crate) const MESSAGES_PATH: &str = "/admin/messages";

/// Filter token for "every status".
const ALL_STATUSES: &str = "all";

fn filter_token(filter: Option<MessageStatus>) -> &'static str {
    filter.map_or(ALL_STATUSES, MessageStatus::as_str)
}

fn status_tone(status: MessageStatus) -> TextTone {
    match status {
        MessageStatus::New => TextTone::Accent,
        MessageStatus::Contacted => TextTone::Warning,
        MessageStatus::Completed => TextTone::Success,
    }
}

/// Product names keyed by id, for labelling inquiries.
fn product_names(products: Vec<Product>) -> HashMap<String, String> {
    products
        .into_iter()
        .map(|product| (product.id, product.name))
        .collect()
}

#[component]
/// Inquiries newest first, filterable by follow-up status.
pub fn MessageListPage() -> impl IntoView {
    let runtime = use_storefront();
    let filter = create_rw_signal(None::<MessageStatus>);
    let messages = create_rw_signal(Loadable::<Vec<ContactMessage>>::Loading);
    let names = create_rw_signal(HashMap::<String, String>::new());
    let tracker = store_value(RequestTracker::new());
    let reload_count = create_rw_signal(0_u32);

    let store = runtime.host.get_value().content_store();
    spawn_local(async move {
        let products = catalog::all_products(store.as_ref()).await;
        names.try_set(product_names(products));
    });

    create_effect(move |_| {
        let status = filter.get();
        reload_count.track();
        let ticket = tracker.with_value(RequestTracker::begin);
        let store = runtime.host.get_value().content_store();
        spawn_local(async move {
            let loaded = catalog::contact_messages(store.as_ref(), status).await;
            if tracker.try_with_value(|tracker| tracker.is_current(ticket)) != Some(true) {
                logging::log!("dropping stale {} message list", filter_token(status));
                return;
            }
            messages.set(Loadable::Ready(loaded));
        });
    });
    let reload = Callback::new(move |()| reload_count.update(|count| *count = count.wrapping_add(1)));

    let filter_options = move || {
        MessageStatus::ALL
            .into_iter()
            .map(|status| {
                view! {
                    <option value=status.as_str()>{move || runtime.text(status_phrase(status))}</option>
                }
            })
            .collect_view()
    };

    view! {
        <Stack gap=LayoutGap::Lg>
            <PageHeader runtime title=Phrase::Messages />
            <FieldGroup label=label(runtime, Phrase::Status) layout_class="admin-filter">
                <SelectField
                    value=Signal::derive(move || filter_token(filter.get()).to_string())
                    on_change=Callback::new(move |value: String| filter.set(MessageStatus::parse(&value)))
                >
                    <option value=ALL_STATUSES>{move || runtime.text(Phrase::StatusAll)}</option>
                    {filter_options}
                </SelectField>
            </FieldGroup>
            {move || match messages.get() {
                Loadable::Ready(list) if list.is_empty() => {
                    view! {
                        <EmptyState icon=IconName::Message>
                            <Text tone=TextTone::Secondary>{runtime.text(Phrase::EmptyList)}</Text>
                        </EmptyState>
                    }
                    .into_view()
                }
                Loadable::Ready(list) => list
                    .into_iter()
                    .map(|message| view! { <MessageCard runtime message names on_changed=reload /> })
                    .collect_view(),
                Loadable::Loading | Loadable::Missing => {
                    view! { <Spinner label=label(runtime, Phrase::Loading) /> }.into_view()
                }
            }}
        </Stack>
    }
}

#[component]
fn MessageCard(
    runtime: StorefrontContext,
    message: ContactMessage,
    names: RwSignal<HashMap<String, String>>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let id = store_value(message.id.clone());
    let product_id = message.product_id.clone();
    let product_name = move || {
        names.with(|names| names.get(&product_id).cloned().unwrap_or_else(|| product_id.clone()))
    };
    let received = message.created_at.map(format_timestamp).unwrap_or_default();
    let status = message.status;

    let change_status = move |value: String| {
        let Some(next) = MessageStatus::parse(&value) else {
            return;
        };
        let host = runtime.host.get_value();
        let locale = runtime.locale.get_untracked();
        let id = id.get_value();
        spawn_local(async move {
            match catalog::update_contact_message_status(host.content_store().as_ref(), &id, next).await {
                Ok(()) => on_changed.call(()),
                Err(err) => {
                    logging::warn!("message status update failed: {err}");
                    host.alert_service()
                        .alert(&format!("{}: {err}", Phrase::SaveFailed.text(locale)));
                }
            }
        });
    };

    let delete = move |_: ev::MouseEvent| {
        let id = id.get_value();
        run_delete(
            runtime,
            move |store| async move { catalog::delete_contact_message(store.as_ref(), &id).await },
            move || on_changed.call(()),
        );
    };

    let image = Some(message.selected_image_url.clone()).filter(|url| !url.is_empty());
    let phone = message.customer_phone.clone().filter(|phone| !phone.is_empty());
    let email = message.customer_email.clone().filter(|email| !email.is_empty());

    view! {
        <div class="admin-message" data-status=status.as_str()>
            <Card padding=LayoutPadding::Md>
                <Stack gap=LayoutGap::Sm>
                    <Cluster justify=LayoutJustify::Between>
                        <Heading level=HeadingLevel::H3>{message.customer_name.clone()}</Heading>
                        <Badge tone=status_tone(status)>
                            {move || runtime.text(status_phrase(status))}
                        </Badge>
                    </Cluster>
                    <Text tone=TextTone::Secondary role=TextRole::Caption>
                        {move || runtime.text(Phrase::ReceivedAt)}
                        ": "
                        {received}
                    </Text>
                    <Cluster gap=LayoutGap::Md>
                        {image.map(|src| view! { <img class="admin-thumb" src=src alt="" loading="lazy" /> })}
                        <Stack gap=LayoutGap::None>
                            <Text role=TextRole::Label>{product_name}</Text>
                            <Text>
                                {move || runtime.text(Phrase::Quantity)}
                                ": "
                                {message.quantity}
                            </Text>
                            <Text>
                                {move || runtime.text(Phrase::ContactMethod)}
                                ": "
                                {message.contact_method.display_name()}
                            </Text>
                        </Stack>
                    </Cluster>
                    <Cluster gap=LayoutGap::Md>
                        {phone.map(|phone| {
                            view! {
                                <NavLink href=format!("tel:{phone}") leading_icon=IconName::Phone>
                                    {phone.clone()}
                                </NavLink>
                            }
                        })}
                        {email.map(|email| {
                            view! {
                                <NavLink href=format!("mailto:{email}") leading_icon=IconName::Mail>
                                    {email.clone()}
                                </NavLink>
                            }
                        })}
                        {message.customer_city.clone().map(|city| {
                            view! {
                                <Text tone=TextTone::Secondary>
                                    <Icon icon=IconName::MapPin size=IconSize::Sm />
                                    {city}
                                </Text>
                            }
                        })}
                    </Cluster>
                    {message.message.clone().map(|body| view! { <p class="admin-message-body">{body}</p> })}
                    <Cluster justify=LayoutJustify::Between>
                        <SelectField
                            aria_label=label(runtime, Phrase::Status)
                            value=status.as_str().to_string()
                            on_change=Callback::new(change_status)
                        >
                            {MessageStatus::ALL
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <option value=option.as_str()>
                                            {move || runtime.text(status_phrase(option))}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </SelectField>
                        <IconButton
                            icon=IconName::Trash
                            size=ButtonSize::Sm
                            aria_label=label(runtime, Phrase::Delete)
                            on_click=Callback::new(delete)
                        />
                    </Cluster>
                </Stack>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_token_round_trips_through_parse() {
        assert_eq!(filter_token(None), "all");
        assert_eq!(MessageStatus::parse(filter_token(None)), None);
        for status in MessageStatus::ALL {
            assert_eq!(MessageStatus::parse(filter_token(Some(status))), Some(status));
        }
    }

    #[test]
    fn product_names_index_by_id() {
        let names = product_names(vec![Product {
            id: "p1".to_string(),
            name: "Lụa".to_string(),
            ..Product::default()
        }]);
        assert_eq!(names.get("p1").map(String::as_str), Some("Lụa"));
    }
}
