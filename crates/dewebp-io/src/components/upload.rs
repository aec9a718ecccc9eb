//! File upload component with drag-and-drop and a multi-file picker.

use dewebp_convert::{MediaTyped, WEBP_MEDIA_TYPE};
use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;

/// A file chosen by the user whose bytes have not been read yet.
///
/// Filtering happens on the declared media type before any bytes are
/// read, so rejected files are never loaded.
#[derive(Clone)]
pub struct PickedFile {
    /// Original file name.
    pub name: String,
    /// Media type reported by the browser.
    pub media_type: Option<String>,
    /// Handle used to read the contents later.
    pub data: FileData,
}

impl PickedFile {
    fn from_data(data: FileData) -> Self {
        Self {
            name: data.name(),
            media_type: data.content_type().filter(|t| !t.is_empty()),
            data,
        }
    }
}

impl MediaTyped for PickedFile {
    fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }
}

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Called with every picked or dropped file, unfiltered.
    on_files: EventHandler<Vec<PickedFile>>,
    /// Hint shown inside the drop zone.
    drag_hint: &'static str,
    /// Label of the picker button.
    button_label: &'static str,
}

/// A drag-and-drop zone with a multi-file picker.
///
/// The picker hints `image/webp`; dropped files are passed through as-is
/// and filtered by the caller.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);

    let forward = move |files: Vec<FileData>| {
        let picked = files.into_iter().map(PickedFile::from_data).collect();
        props.on_files.call(picked);
    };

    let handle_files = move |evt: FormEvent| {
        forward(evt.files());
    };

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        forward(evt.files());
    };

    let zone_class = if dragging() {
        "drop-zone drop-zone-active"
    } else {
        "drop-zone"
    };

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            label { class: "btn btn-primary",
                input {
                    r#type: "file",
                    accept: WEBP_MEDIA_TYPE,
                    multiple: true,
                    class: "hidden",
                    onchange: handle_files,
                }
                "{props.button_label}"
            }

            p { class: "hint", "{props.drag_hint}" }
        }
    }
}
