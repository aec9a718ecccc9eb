//! Export panel with bulk download and clear actions.

use dioxus::prelude::*;

/// Props for the [`ExportPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ExportPanelProps {
    /// Whether a bulk export is in flight. Disables the ZIP button.
    busy: bool,
    /// Last export failure, if any.
    error: Option<String>,
    download_all_label: &'static str,
    clear_label: &'static str,
    busy_label: &'static str,
    on_download_all: EventHandler<()>,
    on_clear: EventHandler<()>,
}

/// "Download all as ZIP" and "Clear list" buttons.
///
/// Only rendered by the app while the result list is non-empty.
#[component]
pub fn ExportPanel(props: ExportPanelProps) -> Element {
    let zip_label = if props.busy {
        props.busy_label
    } else {
        props.download_all_label
    };

    rsx! {
        div { class: "export-panel",
            if let Some(ref err) = props.error {
                p { class: "error", "{err}" }
            }

            div { class: "export-actions",
                button {
                    class: if props.busy { "btn btn-disabled" } else { "btn btn-primary" },
                    disabled: props.busy,
                    onclick: move |_| props.on_download_all.call(()),
                    "{zip_label}"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| props.on_clear.call(()),
                    "{props.clear_label}"
                }
            }
        }
    }
}
