// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub net: NetOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    /// Item endpoint root, with trailing slash.
    pub api_base: String,
    /// URL-rewriting proxy prefix. `None` sends requests directly.
    pub proxy: Option<String>,
    pub asset_host: String,
    pub timeout_secs: u64,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            proxy: Some(PROXY_PREFIX.to_string()),
            asset_host: ASSET_HOST.to_string(),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Html,
    Csv,
    Tsv,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Html, ExportFormat::Csv, ExportFormat::Tsv];

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
        }
    }

    /// Field separator for the tabular formats.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Html => None,
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Html => "HTML",
            ExportFormat::Csv => "CSV",
            ExportFormat::Tsv => "TSV",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Html,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, extension following the current format.
    pub fn out_path(&self) -> PathBuf {
        let mut file = self.out_path.file_stem.clone();
        file.push(".");
        file.push(self.format.ext());
        self.out_path.dir.join(file)
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// Parse user text into dir + stem. Ignores a typed extension; format controls it.
    /// A trailing separator means "directory, keep the current stem".
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        if s.ends_with('/') || s.ends_with('\\') {
            self.out_path.dir = PathBuf::from(s);
            return;
        }
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_path_follows_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), Path::new("out").join("prices.html"));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), Path::new("out").join("prices.tsv"));
    }

    #[test]
    fn set_path_ignores_typed_extension() {
        let mut export = ExportOptions::default();
        export.format = ExportFormat::Csv;
        export.set_path("reports/arcanes.txt");
        assert_eq!(export.out_path(), Path::new("reports").join("arcanes.csv"));
    }

    #[test]
    fn set_path_dir_hint_keeps_stem() {
        let mut export = ExportOptions::default();
        export.set_path("site/");
        assert_eq!(export.out_path(), Path::new("site/").join("prices.html"));
    }

    #[test]
    fn default_net_goes_through_proxy() {
        let net = NetOptions::default();
        assert_eq!(net.proxy.as_deref(), Some(PROXY_PREFIX));
        assert!(net.api_base.ends_with('/'));
    }
}
