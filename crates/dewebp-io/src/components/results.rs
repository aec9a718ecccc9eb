//! Grid of converted images with per-entry actions.

use dioxus::prelude::*;

/// What one grid card needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewItem {
    /// Output file name.
    pub name: String,
    /// Object URL of the encoded image.
    pub url: String,
}

/// Props for the [`ResultGrid`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultGridProps {
    /// Entries in list order.
    items: Vec<PreviewItem>,
    download_label: &'static str,
    remove_label: &'static str,
    /// Fired with the index of the entry to save.
    on_download: EventHandler<usize>,
    /// Fired with the index of the entry to remove.
    on_remove: EventHandler<usize>,
}

/// Responsive grid of thumbnails, each with download and remove buttons.
#[component]
pub fn ResultGrid(props: ResultGridProps) -> Element {
    rsx! {
        div { class: "result-grid",
            for (index, item) in props.items.iter().enumerate() {
                div { key: "{item.url}", class: "result-card",
                    img { src: "{item.url}", alt: "{item.name}" }
                    p { class: "result-name", "{item.name}" }
                    div { class: "result-actions",
                        button {
                            class: "btn btn-success",
                            onclick: move |_| props.on_download.call(index),
                            "{props.download_label}"
                        }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| props.on_remove.call(index),
                            "{props.remove_label}"
                        }
                    }
                }
            }
        }
    }
}
