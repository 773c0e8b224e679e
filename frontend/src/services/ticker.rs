//! Tick driver for simulated uploads.
//!
//! Each uploading entry owns one `Interval` handle in an [`UploadTimers`]
//! registry; dropping the handle cancels the timer. Handles are dropped on
//! completion, on removal, when a selection replaces the entry, and with
//! the registry itself when the widget unmounts.

use std::collections::HashMap;

use gloo_timers::callback::Interval;
use intake::{EntryId, IntakeFile, ProgressSource, Tick, UploadIntake};
use leptos::*;

use crate::TICK_INTERVAL_MS;

/// Timer handles keyed by the entry they tick.
pub struct UploadTimers<H = Interval> {
    handles: HashMap<EntryId, H>,
}

impl<H> Default for UploadTimers<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> UploadTimers<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `handle` for `id`, cancelling any timer it replaces.
    pub fn insert(&mut self, id: EntryId, handle: H) {
        self.handles.insert(id, handle);
    }

    /// Cancel the timer of `id`. Returns whether one was running.
    pub fn stop(&mut self, id: EntryId) -> bool {
        self.handles.remove(&id).is_some()
    }

    /// Cancel every timer whose entry is not in `live`.
    pub fn retain_live(&mut self, live: &[EntryId]) {
        self.handles.retain(|id, _| live.contains(id));
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.handles.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

/// Advance `id` once. `None` once the widget owning `intake` is gone.
pub fn tick_upload<F, P>(intake: StoredValue<UploadIntake<F, P>>, id: EntryId) -> Option<Tick>
where
    F: IntakeFile + Clone + 'static,
    P: ProgressSource + 'static,
{
    intake.try_update_value(|intake| intake.tick(id))
}

/// Tick `id` every [`TICK_INTERVAL_MS`] until its upload settles.
///
/// `on_tick` runs after every tick so the caller can re-render. It never
/// runs after `intake` has been disposed.
pub fn drive_upload<F, P>(
    intake: StoredValue<UploadIntake<F, P>>,
    timers: StoredValue<UploadTimers>,
    id: EntryId,
    on_tick: impl Fn(Tick) + 'static,
) where
    F: IntakeFile + Clone + 'static,
    P: ProgressSource + 'static,
{
    let handle = Interval::new(TICK_INTERVAL_MS, move || {
        let Some(tick) = tick_upload(intake, id) else {
            return;
        };
        on_tick(tick);

        if tick.is_final() {
            log::debug!("Upload {} stopped ticking: {:?}", id, tick);
            // An interval cannot be dropped from inside its own callback
            spawn_local(async move {
                timers.try_update_value(|t| t.stop(id));
            });
        }
    });

    if timers.try_update_value(|t| t.insert(id, handle)).is_none() {
        log::debug!("Upload {} not scheduled: widget is gone", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake::{CandidateFile, FixedStep, IntakeConfig};
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingHandle(Rc<Cell<usize>>);

    impl Drop for CountingHandle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn pdf(name: &str) -> CandidateFile {
        CandidateFile::new(format!("{}.pdf", name), 1024, "application/pdf")
    }

    #[test]
    fn test_tick_stops_once_widget_is_disposed() {
        let runtime = create_runtime();

        let intake = store_value(UploadIntake::with_progress(
            IntakeConfig::default(),
            FixedStep(10.0),
        ));
        let started = intake
            .try_update_value(|i| i.select([pdf("report")]))
            .unwrap_or_default();
        assert_eq!(started.len(), 1);
        assert_eq!(tick_upload(intake, started[0]), Some(Tick::Advanced(10.0)));

        intake.dispose();

        assert_eq!(tick_upload(intake, started[0]), None);
        // A refresh reading the disposed state must not panic
        assert!(intake.try_with_value(|i| i.len()).is_none());

        runtime.dispose();
    }

    #[test]
    fn test_stop_cancels_removed_entry() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = UploadTimers::new();
        timers.insert(EntryId(1), CountingHandle(dropped.clone()));
        timers.insert(EntryId(2), CountingHandle(dropped.clone()));

        assert!(timers.stop(EntryId(1)));
        assert_eq!(dropped.get(), 1);
        assert!(!timers.contains(EntryId(1)));
        assert!(timers.contains(EntryId(2)));

        // Already stopped
        assert!(!timers.stop(EntryId(1)));
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_retain_live_cancels_replaced_entries() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = UploadTimers::new();
        timers.insert(EntryId(1), CountingHandle(dropped.clone()));
        timers.insert(EntryId(2), CountingHandle(dropped.clone()));
        timers.insert(EntryId(3), CountingHandle(dropped.clone()));

        timers.retain_live(&[EntryId(3)]);

        assert_eq!(dropped.get(), 2);
        assert_eq!(timers.len(), 1);
        assert!(timers.contains(EntryId(3)));
    }

    #[test]
    fn test_dropping_registry_cancels_everything() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = UploadTimers::new();
        timers.insert(EntryId(1), CountingHandle(dropped.clone()));
        timers.insert(EntryId(2), CountingHandle(dropped.clone()));

        drop(timers);

        assert_eq!(dropped.get(), 2);
    }

    #[test]
    fn test_reinsert_cancels_previous_handle() {
        let dropped = Rc::new(Cell::new(0));
        let mut timers = UploadTimers::new();
        timers.insert(EntryId(7), CountingHandle(dropped.clone()));
        timers.insert(EntryId(7), CountingHandle(dropped.clone()));

        assert_eq!(dropped.get(), 1);
        assert_eq!(timers.len(), 1);
        assert!(!timers.is_empty());
    }
}
