//! Wraps rendered markup in the HTML envelope word processors open as a `.doc` file.

use mime::Mime;

use super::templates::{DocumentKind, Markup};

pub const DEFAULT_FILE_STEM: &str = "Dokument";
const EXTENSION: &str = ".doc";
const MSWORD: &str = "application/msword";

/// Page styles shared by the preview and the exported file.
pub const STYLESHEET: &str = "<style>\
body { font-family: 'Times New Roman', serif; font-size: 12pt; line-height: 1.15; }\
.legal-doc { background-color: white; padding: 60px; color: black; border: 1px solid #ddd; }\
.header-doc { text-align: center; font-weight: bold; font-size: 14pt; margin-bottom: 20px; \
text-transform: uppercase; font-family: 'Times New Roman', serif; }\
.party-info { text-align: left; margin-bottom: 15px; font-family: 'Times New Roman', serif; }\
.doc-body { text-align: justify; text-justify: inter-word; margin-bottom: 10px; \
font-family: 'Times New Roman', serif; }\
.justified { text-align: justify; text-justify: inter-word; }\
.section-title { font-weight: bold; margin-top: 15px; margin-bottom: 5px; \
font-family: 'Times New Roman', serif; text-transform: uppercase; font-size: 11pt; }\
.cost-table { margin-top: 20px; border-collapse: collapse; width: 100%; \
font-family: 'Courier New', monospace; font-size: 10pt; }\
.cost-table td { border-bottom: 1px solid #ddd; padding: 5px; }\
.clausula { font-weight: bold; font-style: italic; background-color: #f9f9f9; padding: 10px; \
border-left: 3px solid #333; }\
.signature-row { display: flex; justify-content: space-between; margin-top: 50px; }\
.signature-block { text-align: center; width: 45%; }\
</style>";

const WORD_SETTINGS: &str = "<xml><w:WordDocument><w:View>Print</w:View><w:Zoom>100</w:Zoom>\
<w:DoNotOptimizeForBrowser/></w:WordDocument></xml>";

/// Downloadable document: the enveloped markup plus its file name and MIME type.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportableDocument {
    pub file_name: String,
    pub mime: Mime,
    pub content: String,
}

fn msword() -> Mime {
    MSWORD.parse().unwrap_or(mime::APPLICATION_OCTET_STREAM)
}

pub fn to_exportable(markup: &Markup) -> ExportableDocument {
    let content = format!(
        "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
         xmlns:w='urn:schemas-microsoft-com:office:word' \
         xmlns='http://www.w3.org/TR/REC-html40'>\
         <head><meta charset=\"utf-8\"><title>Dokument</title>{STYLESHEET}{WORD_SETTINGS}</head>\
         <body><div class=\"legal-doc\">{markup}</div></body></html>"
    );

    ExportableDocument {
        file_name: format!("{DEFAULT_FILE_STEM}{EXTENSION}"),
        mime: msword(),
        content,
    }
}

impl ExportableDocument {
    /// Replaces the download name; the `.doc` extension is always enforced.
    pub fn with_file_name(mut self, stem: &str) -> Self {
        let stem = stem.trim();
        let stem = stem
            .strip_suffix(EXTENSION)
            .or_else(|| stem.strip_suffix(".DOC"))
            .unwrap_or(stem);
        let sanitized: String = stem
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let stem = if sanitized.is_empty() {
            DEFAULT_FILE_STEM.to_string()
        } else {
            sanitized
        };
        self.file_name = format!("{stem}{EXTENSION}");
        self
    }

    pub fn for_kind(self, kind: DocumentKind) -> Self {
        self.with_file_name(kind.file_stem())
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.content.into_bytes()
    }
}
