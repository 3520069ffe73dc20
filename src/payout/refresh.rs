use std::{cell::Cell, rc::Rc, time::Duration};

/// Delay between wallet journal refreshes on the payout page.
pub const WALLET_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Busy flag shared by a polling loop and whatever triggers refreshes.
///
/// Only one refresh may be in flight at a time; a tick arriving while one is running is skipped
/// rather than queued.
#[derive(Clone, Debug, Default)]
pub struct RefreshGate {
    busy: Rc<Cell<bool>>,
}

/// Marks a refresh as running until dropped.
#[derive(Debug)]
pub struct RefreshTicket {
    busy: Rc<Cell<bool>>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a refresh unless one is already running.
    pub fn try_begin(&self) -> Option<RefreshTicket> {
        if self.busy.replace(true) {
            return None;
        }

        Some(RefreshTicket {
            busy: self.busy.clone(),
        })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

impl Drop for RefreshTicket {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect a second refresh to be refused while the first is running
    #[test]
    fn refuses_overlapping_refresh() {
        let gate = RefreshGate::new();

        let ticket = gate.try_begin();
        assert!(ticket.is_some());
        assert!(gate.is_busy());
        assert!(gate.try_begin().is_none());
    }

    /// Expect the gate to open again once the ticket is dropped
    #[test]
    fn releases_on_drop() {
        let gate = RefreshGate::new();

        drop(gate.try_begin());

        assert!(!gate.is_busy());
        assert!(gate.try_begin().is_some());
    }

    /// Expect clones to share the busy flag
    #[test]
    fn clones_share_state() {
        let gate = RefreshGate::new();
        let polling = gate.clone();

        let _ticket = gate.try_begin();

        assert!(polling.try_begin().is_none());
    }
}
