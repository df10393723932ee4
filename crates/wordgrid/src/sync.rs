#![forbid(unsafe_code)]

//! The single place derived state is recomputed.
//!
//! Views write to the [`BitState`] directly and never talk to each other.
//! After every mutation the owner calls [`SyncController::refresh`], which
//! derives one [`StateSnapshot`] and hands it to each listener in turn.
//! Listeners only read the snapshot, so a refresh cannot trigger another.

use std::time::Duration;

use wordgrid_core::{BitState, WordlistIndex};
use wordgrid_widgets::{StateListener, StateSnapshot};

/// Derives snapshots and pushes them to listeners.
#[derive(Debug, Clone, Default)]
pub struct SyncController {
    revision: u64,
    last: Option<StateSnapshot>,
}

impl SyncController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive everything from `bits` and `wordlist` and notify
    /// `listeners` in order.
    pub fn refresh(
        &mut self,
        bits: &BitState,
        wordlist: &WordlistIndex,
        now: Duration,
        listeners: &mut [&mut dyn StateListener],
    ) -> &StateSnapshot {
        self.revision += 1;
        let snapshot = StateSnapshot::derive(self.revision, bits, wordlist, now);
        let _span = tracing::debug_span!(
            "sync.refresh",
            revision = self.revision,
            value = snapshot.value
        )
        .entered();
        for listener in listeners.iter_mut() {
            listener.on_state_changed(&snapshot);
        }
        tracing::debug!(binary = %snapshot.binary, listeners = listeners.len(), "views refreshed");
        self.last.insert(snapshot)
    }

    /// Refreshes performed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The most recent snapshot.
    pub fn last(&self) -> Option<&StateSnapshot> {
        self.last.as_ref()
    }
}
