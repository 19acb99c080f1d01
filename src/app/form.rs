use super::dropdown::Dropdown;
use super::state::{ProgressState, SubmissionState};
use crate::error::FormError;
use crate::languages::{Language, LanguageSelection, SelectionMode};
use crate::upload::{
    DownloadSink, FormConfig, ProgressSnapshot, TranslationBackend, UploadFile, UploadRequest,
};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self as std_mpsc, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, MissedTickBehavior};

enum WorkerEvent {
    Progress(ProgressSnapshot),
    /// Where the archive was saved, or why the submission failed.
    Finished(Result<PathBuf, FormError>),
}

/// State and workflow of one translation form.
///
/// Network work runs on the tokio runtime behind `runtime`; results come back
/// through a channel that `update` drains on the UI thread. Dropping the
/// controller cancels the request and the progress poller.
pub struct FormController {
    config: FormConfig,
    backend: Arc<dyn TranslationBackend>,
    sink: Arc<dyn DownloadSink>,
    runtime: Handle,
    poll_interval: Duration,
    file: Option<UploadFile>,
    selection: LanguageSelection,
    dropdown: Dropdown,
    state: SubmissionState,
    progress: ProgressState,
    error_message: Option<String>,
    saved_to: Option<PathBuf>,
    events: Option<Receiver<WorkerEvent>>,
    request_task: Option<JoinHandle<()>>,
    poller: Option<JoinHandle<()>>,
}

impl FormController {
    pub fn new(
        config: FormConfig,
        backend: Arc<dyn TranslationBackend>,
        sink: Arc<dyn DownloadSink>,
        runtime: Handle,
        poll_interval: Duration,
    ) -> Self {
        log::debug!("Mounting form '{}'", config.title);
        Self {
            selection: LanguageSelection::new(config.selection_mode),
            dropdown: Dropdown::new(config.selection_mode),
            config,
            backend,
            sink,
            runtime,
            poll_interval,
            file: None,
            state: SubmissionState::Idle,
            progress: ProgressState::default(),
            error_message: None,
            saved_to: None,
            events: None,
            request_task: None,
            poller: None,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn file(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }

    pub fn selection(&self) -> &LanguageSelection {
        &self.selection
    }

    pub fn saved_to(&self) -> Option<&Path> {
        self.saved_to.as_deref()
    }

    pub fn dropdown(&self) -> &Dropdown {
        &self.dropdown
    }

    pub fn dropdown_mut(&mut self) -> &mut Dropdown {
        &mut self.dropdown
    }

    /// The submit button is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.state.is_submitting()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_some()
    }

    pub fn select_file(&mut self, file: UploadFile) {
        log::info!("Selected '{}' ({})", file.name, file.display_size());
        self.file = Some(file);
        self.error_message = None;
        if self.state == SubmissionState::Failed {
            self.state = SubmissionState::Idle;
        }
    }

    /// The picked file could not be read; the previous choice is kept.
    pub fn reject_file(&mut self, path: &Path, error: &std::io::Error) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        self.error_message = Some(format!("Could not read {}: {}", name, error));
    }

    pub fn toggle_language(&mut self, language: Language) {
        self.selection.toggle(language);
    }

    pub fn set_language(&mut self, language: Language) {
        self.selection.set(language);
    }

    /// A pick from the dropdown, dispatched by the form's selection mode.
    pub fn choose_language(&mut self, language: Language) {
        match self.config.selection_mode {
            SelectionMode::Single => self.set_language(language),
            SelectionMode::Multi => self.toggle_language(language),
        }
        self.dropdown.choose();
    }

    fn build_request(&self) -> Result<UploadRequest, FormError> {
        let validation = || FormError::Validation(self.config.validation_message.to_string());

        let file = self.file.clone().ok_or_else(validation)?;
        if self.selection.is_empty() {
            return Err(validation());
        }

        Ok(UploadRequest {
            endpoint: self.config.endpoint,
            file_field: self.config.file_field,
            file,
            languages: self.selection.languages(),
        })
    }

    pub fn submit(&mut self) {
        if self.state.is_submitting() {
            log::debug!("Ignoring submit while a request is in flight");
            return;
        }

        let request = match self.build_request() {
            Ok(request) => request,
            Err(e) => {
                log::warn!("{}: {}", self.config.title, e);
                self.state = SubmissionState::Failed;
                self.error_message = Some(e.to_string());
                return;
            }
        };

        log::info!(
            "Submitting '{}' to {} for {}",
            request.file.name,
            request.endpoint,
            self.selection.summary().unwrap_or_default()
        );

        self.state = SubmissionState::Submitting;
        self.error_message = None;
        self.saved_to = None;
        self.progress.reset();
        self.dropdown.close();

        let (sender, receiver) = std_mpsc::channel();
        self.events = Some(receiver);

        let backend = Arc::clone(&self.backend);
        let sink = Arc::clone(&self.sink);
        let download_name = self.config.download_name;
        let request_sender = sender.clone();
        self.request_task = Some(self.runtime.spawn(async move {
            let outcome = match backend.translate(request).await {
                Ok(bytes) => save_archive(sink, download_name, bytes).await,
                Err(e) => Err(FormError::from(e)),
            };
            let _ = request_sender.send(WorkerEvent::Finished(outcome));
        }));

        if self.config.poll_progress {
            self.start_poller(sender);
        }
    }

    fn start_poller(&mut self, sender: Sender<WorkerEvent>) {
        let backend = Arc::clone(&self.backend);
        let period = self.poll_interval;

        self.poller = Some(self.runtime.spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // Polls in flight. Dropped with the poller, which aborts them.
            let mut polls = JoinSet::new();
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let backend = Arc::clone(&backend);
                        polls.spawn(async move { backend.progress().await });
                    }
                    Some(done) = polls.join_next() => match done {
                        Ok(Ok(snapshot)) => {
                            if sender.send(WorkerEvent::Progress(snapshot)).is_err() {
                                break;
                            }
                        }
                        Ok(Err(e)) => log::warn!("Progress poll failed: {}", e),
                        Err(e) => log::warn!("Progress poll did not complete: {}", e),
                    },
                }
            }
        }));
    }

    fn stop_workers(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
        if let Some(task) = self.request_task.take() {
            task.abort();
        }
        self.events = None;
    }

    /// Applies everything the workers reported since the last frame.
    pub fn update(&mut self) {
        self.drain_events();

        // A request task that ended without reporting would otherwise leave
        // the form stuck in Submitting.
        let task_gone = self
            .request_task
            .as_ref()
            .map_or(false, |task| task.is_finished());
        if self.state.is_submitting() && task_gone {
            self.drain_events();
            if self.state.is_submitting() {
                log::error!("Translation task for '{}' ended without a result", self.config.title);
                self.fail();
            }
        }
    }

    fn drain_events(&mut self) {
        let events: Vec<WorkerEvent> = match &self.events {
            Some(receiver) => receiver.try_iter().collect(),
            None => return,
        };

        for event in events {
            match event {
                WorkerEvent::Progress(snapshot) => {
                    if self.state.is_submitting() {
                        self.progress.apply(snapshot);
                    }
                }
                WorkerEvent::Finished(outcome) => {
                    if self.state.is_submitting() {
                        self.finish(outcome);
                    }
                }
            }
        }
    }

    fn finish(&mut self, outcome: Result<PathBuf, FormError>) {
        self.stop_workers();

        match outcome {
            Ok(path) => {
                log::info!("Translation finished, archive saved to {}", path.display());
                self.progress.complete("Completed");
                self.saved_to = Some(path);
                self.state = SubmissionState::Succeeded;
            }
            Err(e) => {
                log::error!("'{}' failed: {}", self.config.title, e);
                self.fail();
            }
        }
    }

    fn fail(&mut self) {
        self.stop_workers();
        self.progress.complete("Failed");
        self.state = SubmissionState::Failed;
        self.error_message = Some(self.config.failure_message.to_string());
    }
}

/// Writes the archive on the blocking pool, off the UI thread.
async fn save_archive(
    sink: Arc<dyn DownloadSink>,
    file_name: &'static str,
    bytes: Vec<u8>,
) -> Result<PathBuf, FormError> {
    let saved = tokio::task::spawn_blocking(move || sink.save(file_name, &bytes)).await?;
    Ok(saved?)
}

impl Drop for FormController {
    fn drop(&mut self) {
        if self.state.is_submitting() {
            log::debug!("Tearing down '{}' with a request in flight", self.config.title);
        }
        self.stop_workers();
    }
}
