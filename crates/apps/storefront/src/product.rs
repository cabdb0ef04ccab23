use leptos::{ev::SubmitEvent, *};
use leptos_router::{use_params_map, A};
use storefront_runtime::{
    catalog,
    components::ProductGallery,
    format::{format_vnd, order_total, zalo_order_link},
    forms::{reject_invalid, submit_write, FormStatus, InquiryDraft},
    i18n::Phrase,
    model::{ContactInfo, ContactMethod, Product},
    request::{Loadable, RequestTracker},
    runtime_context::use_storefront,
};
use system_ui::prelude::*;

/// Facebook page for product questions: the saved contact link, else the configured page.
pub(crate) fn facebook_target<'a>(contact: &'a ContactInfo, configured: &'a str) -> &'a str {
    let saved = contact.facebook_link.trim();
    if saved.is_empty() {
        configured
    } else {
        saved
    }
}

#[component]
/// Product detail page addressed by `/product/:slug`.
pub fn ProductPage() -> impl IntoView {
    let runtime = use_storefront();
    let params = use_params_map();
    let slug = create_memo(move |_| {
        params.with(|params| params.get("slug").cloned().unwrap_or_default())
    });
    let product = create_rw_signal(Loadable::<Product>::Loading);
    let contact = create_rw_signal(ContactInfo::fallback());
    let tracker = store_value(RequestTracker::new());

    let store = runtime.host.get_value().content_store();
    spawn_local(async move {
        if let Some(info) = catalog::contact_info(store.as_ref()).await {
            contact.try_set(info);
        }
    });

    create_effect(move |_| {
        let slug = slug.get();
        let ticket = tracker.with_value(RequestTracker::begin);
        product.set(Loadable::Loading);
        let store = runtime.host.get_value().content_store();
        spawn_local(async move {
            let found = catalog::product_by_slug(store.as_ref(), &slug)
                .await
                .filter(|product| product.is_active);
            if tracker.try_with_value(|tracker| tracker.is_current(ticket)) != Some(true) {
                return;
            }
            product.set(Loadable::from_option(found));
        });
    });

    view! {
        <PageContainer>
            {move || match product.get() {
                Loadable::Loading => {
                    view! { <Spinner label=runtime.text(Phrase::Loading).to_string() /> }.into_view()
                }
                Loadable::Missing => {
                    view! {
                        <EmptyState icon=IconName::Search>
                            <Heading level=HeadingLevel::H2>{runtime.text(Phrase::ProductNotFound)}</Heading>
                            <A href="/">{runtime.text(Phrase::BackToHome)}</A>
                        </EmptyState>
                    }
                    .into_view()
                }
                Loadable::Ready(product) => view! { <ProductDetail product contact /> }.into_view(),
            }}
        </PageContainer>
    }
}

#[component]
fn ProductDetail(product: Product, contact: RwSignal<ContactInfo>) -> impl IntoView {
    let runtime = use_storefront();
    let quantity = create_rw_signal(1_u32);
    let selected_image = create_rw_signal(product.cover_image().unwrap_or_default().to_string());
    let unit_price = product.discounted_price();
    let total = create_memo(move |_| order_total(unit_price, quantity.get()));
    let product = store_value(product);
    let name = product.with_value(|product| product.name.clone());
    let images = product.with_value(|product| product.image_urls.clone());

    let zalo_href = move || {
        product.with_value(|product| {
            zalo_order_link(&runtime.config.store.zalo_phone, quantity.get(), &product.name)
        })
    };
    let facebook_href = move || {
        contact.with(|contact| {
            facebook_target(contact, &runtime.config.store.facebook_page).to_string()
        })
    };

    view! {
        <div class="product-detail">
            <ProductGallery
                images=Signal::derive(move || images.clone())
                alt=Signal::derive({
                    let name = name.clone();
                    move || name.clone()
                })
                on_select=Callback::new(move |url| selected_image.set(url))
            />
            <Stack gap=LayoutGap::Md>
                <Heading level=HeadingLevel::H1>{name}</Heading>
                <Cluster gap=LayoutGap::Sm>
                    <Text role=TextRole::Price tone=TextTone::Accent>
                        {format_vnd(unit_price)}
                        {move || runtime.text(Phrase::PerMeter)}
                    </Text>
                    {product.with_value(|product| {
                        (product.discount_percent > 0).then(|| {
                            let list_price = format_vnd(product.price_per_meter);
                            let percent = product.discount_percent;
                            view! {
                                <Text tone=TextTone::Secondary strike=true>{list_price}</Text>
                                <Badge tone=TextTone::Danger>{format!("-{percent}%")}</Badge>
                            }
                        })
                    })}
                </Cluster>
                <dl class="product-detail__facts">
                    <dt>{move || runtime.text(Phrase::Size)}</dt>
                    <dd>{product.with_value(|product| product.size.clone())}</dd>
                    <dt>{move || runtime.text(Phrase::Origin)}</dt>
                    <dd>{product.with_value(|product| product.origin.clone())}</dd>
                </dl>
                <FieldGroup label=Signal::derive(move || runtime.text(Phrase::Quantity).to_string())>
                    <Stepper
                        value=Signal::from(quantity)
                        min=1
                        decrement_label=Signal::derive(move || runtime.text(Phrase::Decrease).to_string())
                        increment_label=Signal::derive(move || runtime.text(Phrase::Increase).to_string())
                        on_change=Callback::new(move |next| quantity.set(next))
                    />
                </FieldGroup>
                <Cluster justify=LayoutJustify::Between>
                    <Text role=TextRole::Label>{move || runtime.text(Phrase::Total)}</Text>
                    <Text role=TextRole::Price tone=TextTone::Accent>{move || format_vnd(total.get())}</Text>
                </Cluster>
                <Cluster gap=LayoutGap::Sm>
                    <a
                        class="ui-button"
                        data-ui-variant="primary"
                        href=zalo_href
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <Icon icon=IconName::Message size=IconSize::Sm />
                        {move || runtime.text(Phrase::OrderViaZalo)}
                    </a>
                    <a
                        class="ui-button"
                        data-ui-variant="standard"
                        href=facebook_href
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <Icon icon=IconName::Globe size=IconSize::Sm />
                        {move || runtime.text(Phrase::ContactViaFacebook)}
                    </a>
                </Cluster>
                <Text tone=TextTone::Secondary>
                    {product.with_value(|product| product.description.clone())}
                </Text>
            </Stack>
        </div>
        <InquiryForm
            product_id=product.with_value(|product| product.id.clone())
            selected_image
            quantity
        />
    }
}

#[component]
fn InquiryForm(
    product_id: String,
    selected_image: RwSignal<String>,
    quantity: RwSignal<u32>,
) -> impl IntoView {
    let runtime = use_storefront();
    let draft = create_rw_signal(InquiryDraft::default());
    let status = create_rw_signal(FormStatus::default());

    let edit = move |apply: fn(&mut InquiryDraft, String)| {
        Callback::new(move |value: String| draft.update(|draft| apply(draft, value)))
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.with_untracked(FormStatus::is_submitting) {
            return;
        }
        let host = runtime.host.get_value();
        let locale = runtime.locale.get_untracked();
        let mut current = draft.get_untracked();
        current.quantity = quantity.get_untracked();
        let message = match current.validate(&product_id, &selected_image.get_untracked()) {
            Ok(message) => message,
            Err(err) => {
                status.set(reject_invalid(host.alert_service().as_ref(), locale, &err));
                return;
            }
        };
        status.set(FormStatus::Submitting);
        spawn_local(async move {
            let store = host.content_store();
            let outcome = submit_write(
                host.alert_service().as_ref(),
                locale,
                Phrase::InquirySent,
                catalog::save_contact_message(store.as_ref(), &message),
            )
            .await;
            if outcome == FormStatus::Saved {
                draft.try_set(InquiryDraft::default());
            }
            status.try_set(outcome);
        });
    };

    let text = move |phrase: Phrase| Signal::derive(move || runtime.text(phrase).to_string());
    let field = move |read: fn(&InquiryDraft) -> &String| {
        Signal::derive(move || draft.with(|draft| read(draft).clone()))
    };

    view! {
        <Panel title=text(Phrase::InquiryTitle) layout_class="inquiry-form">
            <form on:submit=submit>
                <Stack gap=LayoutGap::Md>
                    <FieldGroup label=text(Phrase::CustomerName) required=true>
                        <TextField
                            autocomplete="name"
                            value=field(|draft| &draft.customer_name)
                            on_input=edit(|draft, value| draft.customer_name = value)
                        />
                    </FieldGroup>
                    <Grid columns=GridColumns::Two>
                        <FieldGroup label=text(Phrase::CustomerPhone)>
                            <TextField
                                input_type="tel"
                                autocomplete="tel"
                                value=field(|draft| &draft.customer_phone)
                                on_input=edit(|draft, value| draft.customer_phone = value)
                            />
                        </FieldGroup>
                        <FieldGroup label=text(Phrase::CustomerEmail)>
                            <TextField
                                input_type="email"
                                autocomplete="email"
                                value=field(|draft| &draft.customer_email)
                                on_input=edit(|draft, value| draft.customer_email = value)
                            />
                        </FieldGroup>
                    </Grid>
                    <FieldGroup label=text(Phrase::CustomerCity)>
                        <TextField
                            value=field(|draft| &draft.customer_city)
                            on_input=edit(|draft, value| draft.customer_city = value)
                        />
                    </FieldGroup>
                    <FieldGroup label=text(Phrase::ContactMethod)>
                        <SelectField
                            value=Signal::derive(move || {
                                draft.with(|draft| draft.contact_method.as_str().to_string())
                            })
                            on_change=edit(|draft, value| {
                                if let Some(method) = ContactMethod::parse(&value) {
                                    draft.contact_method = method;
                                }
                            })
                        >
                            {ContactMethod::ALL
                                .into_iter()
                                .map(|method| {
                                    view! { <option value=method.as_str()>{method.display_name()}</option> }
                                })
                                .collect_view()}
                        </SelectField>
                    </FieldGroup>
                    <FieldGroup label=text(Phrase::MessageBody)>
                        <TextArea
                            value=field(|draft| &draft.message)
                            on_input=edit(|draft, value| draft.message = value)
                        />
                    </FieldGroup>
                    <Button
                        variant=ButtonVariant::Primary
                        button_type=ButtonType::Submit
                        leading_icon=IconName::Mail
                        disabled=Signal::derive(move || status.with(FormStatus::is_submitting))
                    >
                        {move || {
                            if status.with(FormStatus::is_submitting) {
                                runtime.text(Phrase::Saving)
                            } else {
                                runtime.text(Phrase::SendInquiry)
                            }
                        }}
                    </Button>
                </Stack>
            </form>
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facebook_link_prefers_saved_contact_details() {
        let mut contact = ContactInfo::fallback();
        assert_eq!(
            facebook_target(&contact, "https://facebook.com/configured"),
            "https://facebook.com/khovaihanhan"
        );
        contact.facebook_link = "  ".to_string();
        assert_eq!(
            facebook_target(&contact, "https://facebook.com/configured"),
            "https://facebook.com/configured"
        );
    }
}
