mod client;
mod download;
mod types;

pub use client::{HttpBackend, TranslationBackend};
pub use download::{DirectorySink, DownloadSink};
pub use types::{FormConfig, FormKind, ProgressSnapshot, UploadFile, UploadRequest};
