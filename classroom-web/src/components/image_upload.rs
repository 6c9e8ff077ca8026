use crate::actions::upload::upload_image;
use crate::api::use_api_client;
use i18nrs::yew::use_translation;
use js_sys::Uint8Array;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Blob, File, HtmlInputElement, Url};
use yew::prelude::*;

/// Object URL for a local preview. Released when dropped, so replacing the
/// preview or unmounting the picker frees the blob.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewUrl(String);

impl PreviewUrl {
    pub fn for_blob(blob: &Blob) -> Result<Self, JsValue> {
        Url::create_object_url_with_blob(blob).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        if let Err(err) = Url::revoke_object_url(&self.0) {
            log::warn!("could not release preview {}: {err:?}", self.0);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ImageUploadProps {
    /// Receives the stored URL once the upload succeeded.
    pub on_uploaded: Callback<String>,
    #[prop_or_default]
    pub label: Option<String>,
}

/// File picker that previews the chosen image locally and uploads it.
#[function_component(ImageUpload)]
pub fn image_upload(props: &ImageUploadProps) -> Html {
    let (i18n, ..) = use_translation();
    let client = use_api_client();
    let preview = use_state(|| None::<PreviewUrl>);
    let uploading = use_state(|| false);
    let error = use_state(|| None::<String>);

    let onchange = {
        let preview = preview.clone();
        let uploading = uploading.clone();
        let error = error.clone();
        let on_uploaded = props.on_uploaded.clone();
        let failed_text = i18n.t("upload.failed");
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            match PreviewUrl::for_blob(&file) {
                Ok(url) => preview.set(Some(url)),
                Err(err) => log::warn!("no preview for {}: {err:?}", file.name()),
            }
            uploading.set(true);
            error.set(None);

            let client = client.clone();
            let uploading = uploading.clone();
            let error = error.clone();
            let on_uploaded = on_uploaded.clone();
            let failed_text = failed_text.clone();
            spawn_local(async move {
                let bytes = match read_file(&file).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        log::error!("could not read {}: {err:?}", file.name());
                        error.set(Some(failed_text));
                        uploading.set(false);
                        return;
                    }
                };
                match upload_image(&client, &file.name(), &file.type_(), bytes).await {
                    Ok(url) => on_uploaded.emit(url),
                    Err(err) => {
                        log::error!("upload failed: {err}");
                        error.set(Some(err.message_or(&failed_text)));
                    }
                }
                uploading.set(false);
            });
        })
    };

    html! {
        <div class="flex items-center gap-4">
            <div class="avatar">
                <div class="w-16 rounded-full bg-base-300">
                    if let Some(url) = (*preview).as_ref() {
                        <img src={url.as_str().to_string()} alt="" />
                    }
                </div>
            </div>
            <label class="flex flex-col gap-1">
                <span class="label-text">
                    { props.label.clone().unwrap_or_else(|| i18n.t("upload.choose")) }
                </span>
                <input
                    type="file"
                    accept="image/*"
                    class="file-input file-input-bordered file-input-sm"
                    disabled={*uploading}
                    {onchange}
                />
                if *uploading {
                    <span class="text-xs text-base-content/70">{ i18n.t("upload.uploading") }</span>
                }
                if let Some(message) = (*error).clone() {
                    <span class="text-xs text-error">{ message }</span>
                }
            </label>
        </div>
    }
}

async fn read_file(file: &File) -> Result<Vec<u8>, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn fetches(url: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        JsFuture::from(window.fetch_with_str(url)).await.is_ok()
    }

    #[wasm_bindgen_test]
    async fn preview_url_is_released_on_drop() {
        let blob = Blob::new().unwrap();
        let preview = PreviewUrl::for_blob(&blob).unwrap();
        let url = preview.as_str().to_string();
        assert!(url.starts_with("blob:"));
        assert!(fetches(&url).await);

        drop(preview);

        assert!(!fetches(&url).await);
    }
}
