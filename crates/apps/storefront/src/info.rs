use leptos::*;
use storefront_runtime::{
    catalog, i18n::Phrase, model::ContactInfo, runtime_context::use_storefront,
};
use system_ui::prelude::*;

#[component]
/// Static shop introduction.
pub fn AboutPage() -> impl IntoView {
    let runtime = use_storefront();
    view! {
        <PageContainer narrow=true>
            <Stack gap=LayoutGap::Lg>
                <Heading level=HeadingLevel::H1>{move || runtime.text(Phrase::AboutTitle)}</Heading>
                <Text>{move || runtime.text(Phrase::AboutIntro)}</Text>
                <Grid columns=GridColumns::Two>
                    <Panel variant=SurfaceVariant::Muted>
                        <Icon icon=IconName::Layers size=IconSize::Lg />
                        <Text>{move || runtime.text(Phrase::AboutQuality)}</Text>
                    </Panel>
                    <Panel variant=SurfaceVariant::Muted>
                        <Icon icon=IconName::Message size=IconSize::Lg />
                        <Text>{move || runtime.text(Phrase::AboutService)}</Text>
                    </Panel>
                </Grid>
            </Stack>
        </PageContainer>
    }
}

/// `tel:` target with spaces and dots removed.
pub(crate) fn tel_href(phone: &str) -> String {
    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{digits}")
}

#[component]
/// Shop contact details, falling back to the built-in details until the shop saves its own.
pub fn ContactPage() -> impl IntoView {
    let runtime = use_storefront();
    let contact = create_rw_signal(None::<ContactInfo>);

    let store = runtime.host.get_value().content_store();
    spawn_local(async move {
        let info = catalog::contact_info(store.as_ref())
            .await
            .unwrap_or_else(ContactInfo::fallback);
        contact.try_set(Some(info));
    });

    view! {
        <PageContainer narrow=true>
            <Stack gap=LayoutGap::Lg>
                <Heading level=HeadingLevel::H1>{move || runtime.text(Phrase::ContactTitle)}</Heading>
                <Text tone=TextTone::Secondary>{move || runtime.text(Phrase::ContactSubtitle)}</Text>
                {move || match contact.get() {
                    None => view! { <Spinner label=runtime.text(Phrase::Loading).to_string() /> }.into_view(),
                    Some(info) => view! { <ContactCard info /> }.into_view(),
                }}
            </Stack>
        </PageContainer>
    }
}

#[component]
fn ContactCard(info: ContactInfo) -> impl IntoView {
    let runtime = use_storefront();
    let avatar = if info.avatar_url.is_empty() {
        view! { <span class="contact-card__monogram" aria-hidden="true">{info.monogram()}</span> }
            .into_view()
    } else {
        view! {
            <ImageFrame src=info.avatar_url.clone() alt=info.store_name.clone() layout_class="contact-card__avatar" />
        }
        .into_view()
    };
    let location = [info.address.as_str(), info.city.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <Panel layout_class="contact-card">
            <Cluster gap=LayoutGap::Md>
                {avatar}
                <Stack gap=LayoutGap::Sm>
                    <Heading level=HeadingLevel::H2>{info.store_name.clone()}</Heading>
                    <Text tone=TextTone::Secondary>{info.owner_name.clone()}</Text>
                    <Text role=TextRole::Caption>{move || runtime.text(Phrase::ContactTagline)}</Text>
                </Stack>
            </Cluster>
            <NavBar vertical=true layout_class="contact-card__channels">
                <NavLink href=tel_href(&info.phone) leading_icon=IconName::Phone>
                    {info.phone.clone()}
                </NavLink>
                {(!info.email.is_empty()).then(|| {
                    view! {
                        <NavLink href=format!("mailto:{}", info.email) leading_icon=IconName::Mail>
                            {info.email.clone()}
                        </NavLink>
                    }
                })}
                <NavLink href=info.zalo_link.clone() external=true leading_icon=IconName::Message>
                    "Zalo"
                </NavLink>
                <NavLink href=info.facebook_link.clone() external=true leading_icon=IconName::Globe>
                    "Facebook"
                </NavLink>
            </NavBar>
            <Cluster gap=LayoutGap::Sm>
                <Icon icon=IconName::MapPin size=IconSize::Sm />
                <Text>{location}</Text>
            </Cluster>
            {(!info.description.is_empty())
                .then(|| view! { <Text tone=TextTone::Secondary>{info.description.clone()}</Text> })}
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::tel_href;

    #[test]
    fn tel_links_keep_only_dialable_characters() {
        assert_eq!(tel_href("0909 123.456"), "tel:0909123456");
        assert_eq!(tel_href("+84 909 123 456"), "tel:+84909123456");
    }
}
