use leptos::*;
use platform_host::UploadFile;
use system_ui::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement};

use crate::{
    i18n::{Locale, Phrase},
    runtime_context::use_storefront,
    upload::{
        screen_candidates, upload_batch, ImageSelection, UploadCandidate, UploadMode,
        UploadRejection,
    },
};

/// User-facing line for one rejected file.
pub fn rejection_message(rejection: &UploadRejection, locale: Locale) -> String {
    let phrase = match rejection {
        UploadRejection::UnsupportedFormat { .. } => Phrase::UnsupportedFormat,
        UploadRejection::TooLarge { .. } => Phrase::FileTooLarge,
        UploadRejection::TooMany { .. } => Phrase::TooManyFiles,
        UploadRejection::Failed { .. } => Phrase::UploadFailed,
    };
    format!("{}: {}", phrase.text(locale), rejection.file_name())
}

fn picked_files(ev: &Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default();
    // Re-picking the same file must fire `change` again.
    input.set_value("");
    files
}

async fn read_upload_file(file: &File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| format!("{err:?}"))?;
    Ok(UploadFile {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
/// Image picker bound to a form's [`ImageSelection`].
///
/// Files are screened for format, size and remaining capacity before any bytes are read. A
/// single-image field replaces its image; a gallery field appends. Rejections are reported in one
/// alert once the batch settles.
pub fn ImageUploader(
    mode: UploadMode,
    selection: RwSignal<ImageSelection>,
    label: Phrase,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let runtime = use_storefront();
    let options = store_value(runtime.config.upload_options(mode));
    let busy = create_rw_signal(false);
    let multiple = matches!(mode, UploadMode::Multiple { .. });
    let accept = options.with_value(|options| {
        options
            .allowed_formats
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    });

    let on_pick = move |ev: Event| {
        if busy.get_untracked() {
            return;
        }
        let files = picked_files(&ev);
        if files.is_empty() {
            return;
        }
        let candidates = files
            .iter()
            .map(|file| UploadCandidate {
                file_name: file.name(),
                size_bytes: file.size() as u64,
            })
            .collect::<Vec<_>>();
        let existing = selection.with_untracked(ImageSelection::len);
        let (accepted, mut rejections) =
            options.with_value(|options| screen_candidates(options, existing, &candidates));

        let host = runtime.host.get_value();
        let folder = options.with_value(|options| options.folder.clone());
        let locale = runtime.locale.get_untracked();
        busy.set(true);
        spawn_local(async move {
            let mut uploads = Vec::with_capacity(accepted.len());
            for file in accepted.into_iter().filter_map(|index| files.get(index)) {
                match read_upload_file(file).await {
                    Ok(upload) => uploads.push(upload),
                    Err(message) => rejections.push(UploadRejection::Failed {
                        file_name: file.name(),
                        message,
                    }),
                }
            }
            let outcome =
                upload_batch(host.media_upload_service().as_ref(), &folder, &uploads).await;
            rejections.extend(outcome.failures);
            if selection
                .try_update(|selection| selection.commit(mode, outcome.urls))
                .is_none()
            {
                logging::warn!("image field closed before uploads settled");
                return;
            }
            busy.set(false);
            if !rejections.is_empty() {
                for rejection in &rejections {
                    if let UploadRejection::Failed { file_name, message } = rejection {
                        logging::warn!("upload of {file_name} failed: {message}");
                    }
                }
                let lines = rejections
                    .iter()
                    .map(|rejection| rejection_message(rejection, locale))
                    .collect::<Vec<_>>();
                host.alert_service().alert(&lines.join("\n"));
            }
        });
    };

    let thumbnails = move || {
        selection
            .get()
            .urls()
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, url)| {
                view! {
                    <li class="image-uploader__item">
                        <img src=url alt="" loading="lazy" />
                        <IconButton
                            icon=IconName::Close
                            size=ButtonSize::Sm
                            ui_slot="remove"
                            aria_label=Signal::derive(move || runtime.text(Phrase::RemoveImage).to_string())
                            disabled=Signal::derive(move || busy.get())
                            on_click=Callback::new(move |_| {
                                selection.update(|selection| {
                                    selection.remove(index);
                                })
                            })
                        />
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <FieldGroup
            label=Signal::derive(move || runtime.text(label).to_string())
            required
            hint=Signal::derive(move || {
                format!("{} / {}", selection.with(ImageSelection::len), mode.capacity())
            })
        >
            <ul class="image-uploader__list">{thumbnails}</ul>
            <span class="image-uploader__picker" data-busy=move || busy.get().to_string()>
                <Icon icon=IconName::Upload size=IconSize::Sm />
                <span>
                    {move || {
                        runtime.text(if busy.get() { Phrase::Uploading } else { Phrase::UploadImages })
                    }}
                </span>
                <input
                    type="file"
                    accept=accept
                    multiple=multiple
                    disabled=move || busy.get()
                    on:change=on_pick
                />
            </span>
        </FieldGroup>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_name_the_file_in_the_active_language() {
        let rejection = UploadRejection::TooLarge {
            file_name: "silk.png".to_string(),
        };
        assert!(rejection_message(&rejection, Locale::En).ends_with(": silk.png"));
        assert_eq!(
            rejection_message(&rejection, Locale::Vi),
            format!("{}: silk.png", Phrase::FileTooLarge.text(Locale::Vi))
        );
    }
}
