mod dropdown;
mod form;
mod router;
mod state;
mod ui;

use crate::upload::{DirectorySink, DownloadSink, TranslationBackend, UploadFile};
use eframe::{egui, App};
pub use form::FormController;
pub use router::{Navigator, Route};
pub use state::SubmissionState;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;

/// How often the UI wakes up while a request is in flight.
const SUBMITTING_REPAINT: Duration = Duration::from_millis(100);

pub struct LocalisApp {
    navigator: Navigator,
    /// Controller of the mounted form screen. Replaced on every navigation,
    /// which tears down whatever the previous screen had in flight.
    form: Option<FormController>,
    backend: Arc<dyn TranslationBackend>,
    sink: Arc<DirectorySink>,
    backend_url: String,
    poll_interval: Duration,
    scroll_to_services: bool,
    // Dropped last so controllers can abort their tasks first.
    runtime: Runtime,
}

impl LocalisApp {
    pub fn new(
        runtime: Runtime,
        backend: Arc<dyn TranslationBackend>,
        sink: DirectorySink,
        backend_url: String,
        poll_interval: Duration,
        start: Route,
    ) -> Self {
        log::info!(
            "Initializing Localis (backend {}, downloads in {})",
            backend_url,
            sink.directory().display()
        );
        let mut app = Self {
            navigator: Navigator::new(start),
            form: None,
            backend,
            sink: Arc::new(sink),
            backend_url,
            poll_interval,
            scroll_to_services: false,
            runtime,
        };
        app.mount_current();
        app
    }

    fn mount_current(&mut self) {
        // Drop the old controller before building the new one.
        self.form = None;
        self.form = self.navigator.current().form().map(|config| {
            FormController::new(
                config,
                Arc::clone(&self.backend),
                Arc::clone(&self.sink) as Arc<dyn DownloadSink>,
                self.runtime.handle().clone(),
                self.poll_interval,
            )
        });
    }

    pub fn navigate(&mut self, route: Route) {
        if self.navigator.navigate(route) {
            self.mount_current();
        }
    }

    pub fn go_back(&mut self) {
        if self.navigator.back() {
            self.mount_current();
        }
    }

    pub fn go_forward(&mut self) {
        if self.navigator.forward() {
            self.mount_current();
        }
    }

    pub fn downloads_dir(&self) -> &Path {
        self.sink.directory()
    }

    /// Opens the native file picker for the mounted form.
    fn pick_file(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        let config = form.config();
        let picked = rfd::FileDialog::new()
            .set_title(config.file_label)
            .add_filter(config.file_filter_name, config.extensions)
            .pick_file();

        if let Some(path) = picked {
            match UploadFile::from_path(&path) {
                Ok(file) => form.select_file(file),
                Err(e) => {
                    log::error!("Failed to read {}: {}", path.display(), e);
                    form.reject_file(&path, &e);
                }
            }
        }
    }

    fn handle_history_keys(&mut self, ctx: &egui::Context) {
        let (back, forward) = ctx.input(|i| {
            (
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft),
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight),
            )
        });
        if back {
            self.go_back();
        } else if forward {
            self.go_forward();
        }
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        if let Some(form) = self.form.as_mut() {
            form.update();
            if form.state().is_submitting() {
                ctx.request_repaint_after(SUBMITTING_REPAINT);
            }
        }
    }
}

impl App for LocalisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_history_keys(ctx);
        self.update_state(ctx);
        self.render(ctx);
    }
}
