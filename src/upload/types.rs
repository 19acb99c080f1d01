use crate::languages::{Language, SelectionMode};
use crate::utils::file_size::FileSizeUtils;
use derivative::Derivative;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

pub const LANGUAGE_FIELD: &str = "translate_to";
pub const PROGRESS_ENDPOINT: &str = "/translation_progress/";

/// A file picked by the user, read into memory.
#[derive(Derivative, Clone, PartialEq, Eq)]
#[derivative(Debug)]
pub struct UploadFile {
    pub name: String,
    #[derivative(Debug = "ignore")]
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Invalid filename"))?;
        let bytes = fs::read(path)?;
        Ok(Self::new(name, bytes))
    }

    pub fn display_size(&self) -> String {
        FileSizeUtils::format_size(self.bytes.len() as u64)
    }
}

/// A validated translation request, ready to go on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub endpoint: &'static str,
    pub file_field: &'static str,
    pub file: UploadFile,
    pub languages: Vec<Language>,
}

impl UploadRequest {
    /// Text fields of the multipart body, in order.
    pub fn text_fields(&self) -> Vec<(&'static str, &'static str)> {
        self.languages
            .iter()
            .map(|lang| (LANGUAGE_FIELD, lang.name()))
            .collect()
    }
}

/// Body of `GET /translation_progress/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressSnapshot {
    pub progress: f32,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Json,
    Document,
}

/// Everything that differs between the JSON and the document form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    pub kind: FormKind,
    pub title: &'static str,
    pub file_label: &'static str,
    pub language_label: &'static str,
    pub language_hint: &'static str,
    pub selection_mode: SelectionMode,
    pub endpoint: &'static str,
    pub file_field: &'static str,
    pub file_filter_name: &'static str,
    pub extensions: &'static [&'static str],
    pub download_name: &'static str,
    pub poll_progress: bool,
    pub validation_message: &'static str,
    pub failure_message: &'static str,
}

impl FormConfig {
    pub fn json() -> Self {
        Self {
            kind: FormKind::Json,
            title: "Translate JSON Files",
            file_label: "Upload JSON File",
            language_label: "Target Languages",
            language_hint: "Select target languages",
            selection_mode: SelectionMode::Multi,
            endpoint: "/translate_json_files_new/",
            file_field: "file",
            file_filter_name: "JSON",
            extensions: &["json"],
            download_name: "translated_files.zip",
            poll_progress: true,
            validation_message: "Please upload a JSON file and select target languages.",
            failure_message: "An error occurred while processing the file.",
        }
    }

    pub fn document() -> Self {
        Self {
            kind: FormKind::Document,
            title: "Translate Document",
            file_label: "Upload Document",
            language_label: "Target Language",
            language_hint: "Select target language",
            selection_mode: SelectionMode::Single,
            endpoint: "/translate_and_download_document/",
            file_field: "document",
            file_filter_name: "Documents",
            extensions: &["doc", "docx"],
            download_name: "translated_document.zip",
            poll_progress: false,
            validation_message: "Please upload a document and select a target language.",
            failure_message: "An error occurred while processing the document.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_repeated_language_fields() {
        let request = UploadRequest {
            endpoint: FormConfig::json().endpoint,
            file_field: "file",
            file: UploadFile::new("a.json", b"{}".to_vec()),
            languages: vec![Language::Hindi, Language::Tamil],
        };

        assert_eq!(
            request.text_fields(),
            vec![("translate_to", "Hindi"), ("translate_to", "Tamil")]
        );
    }

    #[test]
    fn test_progress_body() {
        let snapshot: ProgressSnapshot =
            serde_json::from_str(r#"{"progress": 42.5, "status": "Translating Hindi"}"#).unwrap();
        assert_eq!(snapshot.progress, 42.5);
        assert_eq!(snapshot.status, "Translating Hindi");

        let bare: ProgressSnapshot = serde_json::from_str(r#"{"progress": 3}"#).unwrap();
        assert_eq!(bare.status, "");
    }

    #[test]
    fn test_file_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("strings.json");
        std::fs::write(&path, br#"{"hello": "world"}"#).unwrap();

        let file = UploadFile::from_path(&path).unwrap();
        assert_eq!(file.name, "strings.json");
        assert_eq!(file.bytes.len(), 18);
        assert_eq!(file.display_size(), "18 B");
    }

    #[test]
    fn test_form_variants() {
        let json = FormConfig::json();
        let document = FormConfig::document();

        assert_eq!(json.selection_mode, SelectionMode::Multi);
        assert!(json.poll_progress);
        assert_eq!(document.selection_mode, SelectionMode::Single);
        assert!(!document.poll_progress);
        assert_eq!(document.file_field, "document");
    }
}
