//! User-facing strings in English and Spanish.
//!
//! The locale is picked once from `navigator.language`; anything other
//! than Spanish falls back to English.

/// Supported interface languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Pick a locale from a BCP 47 tag such as `es-MX` or `en`.
    ///
    /// Only the two-letter primary subtag is considered.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.get(..2) {
            Some(primary) if primary.eq_ignore_ascii_case("es") => Self::Es,
            _ => Self::En,
        }
    }

    /// Detect the locale from the browser, defaulting to English.
    #[must_use]
    pub fn detect() -> Self {
        web_sys::window()
            .and_then(|window| window.navigator().language())
            .map_or_else(Self::default, |tag| Self::from_tag(&tag))
    }

    #[must_use]
    pub const fn strings(self) -> &'static Strings {
        match self {
            Self::En => &EN,
            Self::Es => &ES,
        }
    }
}

/// Every string the interface shows.
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub title: &'static str,
    pub drag_drop: &'static str,
    pub choose_files: &'static str,
    pub format_label: &'static str,
    pub download_all: &'static str,
    pub clear_list: &'static str,
    pub download: &'static str,
    pub remove: &'static str,
    pub exporting: &'static str,
    /// Alert shown when a selection contains no WebP files.
    pub no_webp_files: &'static str,
    decode_failed_prefix: &'static str,
    export_failed_prefix: &'static str,
}

impl Strings {
    /// Per-file conversion failure message.
    #[must_use]
    pub fn decode_failed(&self, file: &str, reason: &str) -> String {
        format!("{} {file}: {reason}", self.decode_failed_prefix)
    }

    /// Bulk or single export failure message.
    #[must_use]
    pub fn export_failed(&self, reason: &str) -> String {
        format!("{} {reason}", self.export_failed_prefix)
    }
}

static EN: Strings = Strings {
    title: "WEBP to Other Formats Converter",
    drag_drop: "Or drag and drop your files here",
    choose_files: "Choose WebP files",
    format_label: "Output format",
    download_all: "Download All as ZIP",
    clear_list: "Clear List",
    download: "Download",
    remove: "Remove",
    exporting: "Building ZIP...",
    no_webp_files: "Please select valid .webp files",
    decode_failed_prefix: "Could not convert",
    export_failed_prefix: "Download failed:",
};

static ES: Strings = Strings {
    title: "Conversor WEBP a Otros Formatos",
    drag_drop: "O arrastra y suelta tus archivos aquí",
    choose_files: "Elegir archivos WebP",
    format_label: "Formato de salida",
    download_all: "Descargar todo en ZIP",
    clear_list: "Limpiar lista",
    download: "Descargar",
    remove: "Eliminar",
    exporting: "Creando ZIP...",
    no_webp_files: "Por favor, selecciona archivos .webp válidos",
    decode_failed_prefix: "No se pudo convertir",
    export_failed_prefix: "Error al descargar:",
};
