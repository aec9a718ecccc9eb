//! Output format selector.

use dewebp_convert::OutputFormat;
use dioxus::prelude::*;

/// Props for the [`FormatSelect`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FormatSelectProps {
    /// Currently selected format.
    format: OutputFormat,
    /// Accessible label for the control.
    label: &'static str,
    /// Fired with the newly selected format.
    on_change: EventHandler<OutputFormat>,
}

/// Drop-down with one option per [`OutputFormat`].
#[component]
pub fn FormatSelect(props: FormatSelectProps) -> Element {
    let onchange = move |evt: FormEvent| match evt.value().parse::<OutputFormat>() {
        Ok(format) => props.on_change.call(format),
        Err(e) => tracing::warn!(error = %e, "ignoring format selection"),
    };

    rsx! {
        label { class: "format-select",
            span { "{props.label}" }
            select {
                value: "{props.format}",
                onchange: onchange,
                for format in OutputFormat::ALL {
                    option {
                        value: "{format}",
                        selected: format == props.format,
                        "{format.label()}"
                    }
                }
            }
        }
    }
}
