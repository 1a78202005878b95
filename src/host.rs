//! Seam between the controller and the application that owns the sidedocks.
//!
//! The controller never reaches into the host's live object graph; it is
//! handed a [`PanelHost`] at construction time and talks only through it.

use crate::classify::{PanelId, PanelVisibility};

/// The two sidedocks, as seen by the controller.
///
/// Implementations wrap whatever the host application exposes for its
/// panels. All methods are infallible: a host whose panel element is
/// momentarily gone should treat the call as a no-op rather than error,
/// since the next layout change re-resolves everything anyway.
pub trait PanelHost: Send + Sync {
    fn collapse(&self, panel: PanelId);
    fn expand(&self, panel: PanelId);
    fn is_collapsed(&self, panel: PanelId) -> bool;

    /// Re-resolve references to the panel elements after the host replaced
    /// them in a layout change. Hosts with stable panel objects can keep
    /// the default no-op.
    fn reattach(&self) {}

    /// Snapshot both panels' collapsed state in one read.
    fn visibility(&self) -> PanelVisibility {
        PanelVisibility {
            left_collapsed: self.is_collapsed(PanelId::Left),
            right_collapsed: self.is_collapsed(PanelId::Right),
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use parking_lot::Mutex;

    /// In-memory panel host recording every transition it is asked to make.
    #[derive(Default)]
    pub(crate) struct FakePanelHost {
        left_collapsed: Mutex<bool>,
        right_collapsed: Mutex<bool>,
        pub(crate) calls: Mutex<Vec<String>>,
        pub(crate) reattach_count: Mutex<usize>,
    }

    impl FakePanelHost {
        pub(crate) fn with_state(left_collapsed: bool, right_collapsed: bool) -> Self {
            Self {
                left_collapsed: Mutex::new(left_collapsed),
                right_collapsed: Mutex::new(right_collapsed),
                ..Default::default()
            }
        }
    }

    impl PanelHost for FakePanelHost {
        fn collapse(&self, panel: PanelId) {
            match panel {
                PanelId::Left => *self.left_collapsed.lock() = true,
                PanelId::Right => *self.right_collapsed.lock() = true,
            }
            self.calls.lock().push(format!("collapse-{}", panel.as_str()));
        }

        fn expand(&self, panel: PanelId) {
            match panel {
                PanelId::Left => *self.left_collapsed.lock() = false,
                PanelId::Right => *self.right_collapsed.lock() = false,
            }
            self.calls.lock().push(format!("expand-{}", panel.as_str()));
        }

        fn is_collapsed(&self, panel: PanelId) -> bool {
            match panel {
                PanelId::Left => *self.left_collapsed.lock(),
                PanelId::Right => *self.right_collapsed.lock(),
            }
        }

        fn reattach(&self) {
            *self.reattach_count.lock() += 1;
        }
    }
}
