use dewebp_convert::{Dispatched, OutputFormat, Session};
use dewebp_export::ARCHIVE_MIME_TYPE;
use dewebp_io::{
    BlobImage, ExportPanel, FileUpload, FormatSelect, Locale, PickedFile, PreviewItem,
    ResultGrid, Strings, alert, blob, download,
};
use dioxus::prelude::*;
use tracing::{info, warn};

fn main() {
    console_error_panic_hook::set_once();
    dewebp_io::logging::init();
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the conversion session (selected format plus result list) and
/// wires together the upload zone, format selector, result grid, and
/// export panel.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let strings: &'static Strings = use_hook(|| Locale::detect().strings());
    let mut session = use_signal(Session::<BlobImage>::default);
    let mut export_error = use_signal(|| Option::<String>::None);
    let mut exporting = use_signal(|| false);

    // --- Intake ---
    // Each accepted file becomes an independent task; the format is
    // captured in the job when it is dispatched.
    let on_files = move |files: Vec<PickedFile>| {
        let jobs = match session.peek().dispatch(files) {
            Ok(jobs) => jobs,
            Err(e) => {
                warn!(error = %e, "rejected selection");
                alert::show(strings.no_webp_files);
                return;
            }
        };
        for job in jobs {
            spawn(convert_one(job, session));
        }
    };

    let on_format_change = move |format: OutputFormat| {
        session.write().select_format(format);
    };

    // --- Single export ---
    let on_download = move |index: usize| {
        let session = session.read();
        let Some(entry) = session.results().get(index) else {
            return;
        };
        match download::save_url(entry.image().url(), entry.name()) {
            Ok(()) => export_error.set(None),
            Err(e) => {
                warn!(file = entry.name(), error = %e, "download failed");
                export_error.set(Some(strings.export_failed(&e.to_string())));
            }
        }
    };

    // --- Bulk export ---
    // Blob handles are snapshotted first so no borrow of the session is
    // held while the archive is being built.
    let on_download_all = move |()| {
        if *exporting.peek() {
            return;
        }
        let (snapshot, format) = {
            let session = session.peek();
            (blob::snapshot_results(session.results()), session.format())
        };
        exporting.set(true);
        spawn(async move {
            let saved = match dewebp_export::bundle(&snapshot, format).await {
                Ok(Some(archive)) => {
                    download::save_bytes(&archive.bytes, &archive.name, ARCHIVE_MIME_TYPE)
                        .map_err(|e| e.to_string())
                }
                Ok(None) => Ok(()),
                Err(e) => Err(e.to_string()),
            };
            match saved {
                Ok(()) => export_error.set(None),
                Err(reason) => {
                    warn!(%reason, "bulk export failed");
                    export_error.set(Some(strings.export_failed(&reason)));
                }
            }
            exporting.set(false);
        });
    };

    // --- List mutation ---
    let on_remove = move |index: usize| {
        session.write().remove_at(index);
    };

    let on_clear = move |()| {
        session.write().clear();
        export_error.set(None);
    };

    let items: Vec<PreviewItem> = session
        .read()
        .results()
        .iter()
        .map(|result| PreviewItem {
            name: result.name().to_owned(),
            url: result.image().url().to_owned(),
        })
        .collect();
    let format = session.read().format();
    let failure_messages: Vec<String> = session
        .read()
        .failures()
        .iter()
        .map(|failure| strings.decode_failed(&failure.file, &failure.reason))
        .collect();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "app",
            header {
                h1 { "{strings.title}" }
            }

            FormatSelect {
                format: format,
                label: strings.format_label,
                on_change: on_format_change,
            }

            FileUpload {
                on_files: on_files,
                drag_hint: strings.drag_drop,
                button_label: strings.choose_files,
            }

            if !failure_messages.is_empty() {
                ul { class: "error-list",
                    for message in failure_messages {
                        li { class: "error", "{message}" }
                    }
                }
            }

            if !items.is_empty() {
                ExportPanel {
                    busy: exporting(),
                    error: export_error(),
                    download_all_label: strings.download_all,
                    clear_label: strings.clear_list,
                    busy_label: strings.exporting,
                    on_download_all: on_download_all,
                    on_clear: on_clear,
                }
            }

            ResultGrid {
                items: items,
                download_label: strings.download,
                remove_label: strings.remove,
                on_download: on_download,
                on_remove: on_remove,
            }
        }
    }
}

/// Read, convert, and append one dispatched file.
///
/// Failures are recorded in the session for this file only; sibling
/// tasks and the existing results are unaffected.
async fn convert_one(job: Dispatched<PickedFile>, mut session: Signal<Session<BlobImage>>) {
    // Yield to the browser event loop so earlier results can paint
    // before this file's synchronous decode blocks the thread.
    gloo_timers::future::TimeoutFuture::new(0).await;

    let name = job.file.name.clone();
    let outcome = match job.file.data.read_bytes().await {
        Ok(bytes) => job
            .convert(&name, &bytes)
            .map_err(|e| e.to_string())
            .and_then(|result| {
                result
                    .try_map(|image| BlobImage::from_encoded(&image))
                    .map_err(|e| e.to_string())
            }),
        Err(e) => Err(format!("failed to read file: {e}")),
    };

    match outcome {
        Ok(result) => {
            info!(input = %name, output = result.name(), "conversion finished");
            session.write().accept(result);
        }
        Err(reason) => {
            warn!(file = %name, %reason, "conversion failed");
            session.write().record_failure(name, reason);
        }
    }
}
