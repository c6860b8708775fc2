use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::models::upload::{is_accepted_image, ACCEPTED_IMAGE_TYPES};
use crate::services::upload_id_proof;

#[derive(Properties, PartialEq)]
pub struct IdProofDropzoneProps {
    /// An ID proof URL is already set
    pub uploaded: bool,
    pub on_uploaded: Callback<String>,
}

/// Drag-and-drop (or click) picker that uploads one JPG/PNG
#[function_component(IdProofDropzone)]
pub fn id_proof_dropzone(props: &IdProofDropzoneProps) -> Html {
    let drag_active = use_state(|| false);
    let uploading = use_state(|| false);
    let input_ref = use_node_ref();

    let handle_file = {
        let on_uploaded = props.on_uploaded.clone();
        let uploading = uploading.clone();
        Callback::from(move |file: File| {
            if !is_accepted_image(&file.type_()) {
                log::warn!("⚠️ Ignoring {} ({}), only JPG/PNG accepted", file.name(), file.type_());
                return;
            }
            uploading.set(true);
            let on_uploaded = on_uploaded.clone();
            let uploading = uploading.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match upload_id_proof(&file).await {
                    Ok(url) => on_uploaded.emit(url),
                    Err(e) => log::error!("❌ Error uploading image: {}", e),
                }
                uploading.set(false);
            });
        })
    };

    let ondragover = {
        let drag_active = drag_active.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(true);
        })
    };

    let ondragleave = {
        let drag_active = drag_active.clone();
        Callback::from(move |_: DragEvent| drag_active.set(false))
    };

    let ondrop = {
        let drag_active = drag_active.clone();
        let handle_file = handle_file.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_active.set(false);
            // Single file only
            if let Some(file) = e.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
                handle_file.emit(file);
            }
        })
    };

    let onclick = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let onchange = Callback::from(move |e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            handle_file.emit(file);
        }
        input.set_value("");
    });

    let prompt = if *uploading {
        "Uploading..."
    } else if *drag_active {
        "Drop the image here..."
    } else {
        "Drag & drop an image (JPG/PNG) here, or click to select"
    };

    html! {
        <div
            class={classes!("dropzone", drag_active.then_some("dropzone-active"))}
            {ondragover}
            {ondragleave}
            {ondrop}
            {onclick}
        >
            <input
                ref={input_ref}
                type="file"
                accept={ACCEPTED_IMAGE_TYPES.join(",")}
                class="hidden"
                {onchange}
            />
            <p class="dropzone-prompt">{ prompt }</p>
            if props.uploaded {
                <p class="dropzone-success">{"Image uploaded successfully!"}</p>
            }
        </div>
    }
}
