//! The upload intake state object.
//!
//! [`UploadIntake`] owns the entry list and every mutation of it:
//!
//! ```text
//!   select(files) ──▶ validate ──▶ Uploading ──tick──▶ … ──tick──▶ Success
//!                          └─────▶ Error (frozen until removed)
//! ```
//!
//! Timers live outside: the caller drives [`UploadIntake::tick`] for every id
//! returned by [`UploadIntake::select`] and stops once the tick is final.
//! Ticks are keyed by [`EntryId`], so a timer that outlives its entry
//! (removed or replaced) only ever sees [`Tick::Gone`].

use crate::config::IntakeConfig;
use crate::models::{Entry, EntryId, EntryStatus, IntakeFile};
use crate::progress::{advance, ProgressSource, RandomProgress, Tick};
use crate::validation::validate;

/// Callback receiving the current file set whenever it changes.
pub type FilesListener<F> = Box<dyn FnMut(&[F])>;

/// File intake for one upload widget.
pub struct UploadIntake<F, P = RandomProgress> {
    config: IntakeConfig,
    entries: Vec<Entry<F>>,
    progress: P,
    next_id: u64,
    listener: Option<FilesListener<F>>,
}

impl<F: IntakeFile + Clone> UploadIntake<F, RandomProgress> {
    /// Intake with random progress increments.
    pub fn new(config: IntakeConfig) -> Self {
        Self::with_progress(config, RandomProgress::new())
    }
}

impl<F: IntakeFile + Clone, P: ProgressSource> UploadIntake<F, P> {
    pub fn with_progress(config: IntakeConfig, progress: P) -> Self {
        Self {
            config,
            entries: Vec::new(),
            progress,
            next_id: 0,
            listener: None,
        }
    }

    /// Register the embedding form's callback, replacing any previous one.
    pub fn on_files_change(&mut self, listener: impl FnMut(&[F]) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    pub fn entries(&self) -> &[Entry<F>] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry<F>> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Files of every entry in list order, whatever their status.
    pub fn files(&self) -> Vec<F> {
        self.entries
            .iter()
            .take(self.config.max_files)
            .map(|e| e.file.clone())
            .collect()
    }

    /// Ids of entries still waiting for ticks.
    pub fn uploading_ids(&self) -> Vec<EntryId> {
        self.entries
            .iter()
            .filter(|e| e.status == EntryStatus::Uploading)
            .map(|e| e.id)
            .collect()
    }

    /// True when no entry is uploading.
    pub fn is_settled(&self) -> bool {
        self.entries.iter().all(|e| e.status.is_terminal())
    }

    /// Handle a picker change or a drop.
    ///
    /// Returns the ids of the new entries that started uploading; the
    /// caller schedules ticks for them. In single mode an empty selection
    /// replaces the list like any other and notifies the empty file set;
    /// in multiple mode it appends nothing and changes nothing.
    pub fn select<I>(&mut self, files: I) -> Vec<EntryId>
    where
        I: IntoIterator<Item = F>,
    {
        let candidates: Vec<Entry<F>> = files
            .into_iter()
            .take(self.config.selection_limit())
            .map(|file| self.admit(file))
            .collect();

        if candidates.is_empty() && self.config.multiple {
            return Vec::new();
        }

        let started: Vec<EntryId> = candidates
            .iter()
            .filter(|e| e.status == EntryStatus::Uploading)
            .map(|e| e.id)
            .collect();

        if self.config.multiple {
            self.entries.extend(candidates);
        } else {
            if !self.entries.is_empty() {
                log::debug!("Replacing {} entries", self.entries.len());
            }
            self.entries = candidates;
        }

        if self.entries.len() > self.config.max_files {
            log::debug!(
                "Dropping {} entries over the {} file limit",
                self.entries.len() - self.config.max_files,
                self.config.max_files
            );
            self.entries.truncate(self.config.max_files);
        }

        self.notify();

        started
            .into_iter()
            .filter(|id| self.entry(*id).is_some())
            .collect()
    }

    /// Advance one uploading entry by one step.
    pub fn tick(&mut self, id: EntryId) -> Tick {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.id == id && e.status == EntryStatus::Uploading)
        else {
            return Tick::Gone;
        };

        let (progress, done) = advance(entry.progress, self.progress.next_step());
        entry.progress = progress;
        if done {
            entry.status = EntryStatus::Success;
            log::debug!("Upload {} complete: {}", id, entry.file.name());
            Tick::Completed
        } else {
            Tick::Advanced(progress)
        }
    }

    /// Discard the entry at `index`. Out of bounds is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Entry<F>> {
        if index >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(index);
        log::debug!("Removed {} ({})", removed.id, removed.file.name());
        self.notify();
        Some(removed)
    }

    /// Discard the entry with this id, wherever it sits now.
    pub fn remove_id(&mut self, id: EntryId) -> Option<Entry<F>> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        self.remove(index)
    }

    fn admit(&mut self, file: F) -> Entry<F> {
        let id = EntryId(self.next_id);
        self.next_id += 1;

        let status = match validate(&file, &self.config) {
            Ok(()) => EntryStatus::Uploading,
            Err(reason) => {
                log::debug!("Rejected {}: {}", file.name(), reason);
                EntryStatus::Error(reason)
            }
        };

        Entry {
            id,
            file,
            progress: 0.0,
            status,
        }
    }

    fn notify(&mut self) {
        if self.listener.is_none() {
            return;
        }
        let files = self.files();
        if let Some(listener) = self.listener.as_mut() {
            listener(&files);
        }
    }
}
