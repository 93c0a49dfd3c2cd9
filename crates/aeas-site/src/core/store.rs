//! App-wide yewdux store.
//!
//! # Design
//! - Only cross-page UI state lives here (toasts, mobile menu). Visitor
//!   preferences have their own context providers.

use yewdux::store::Store;

use crate::models::{Toast, ToastKind};

/// Most toasts visible at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;

/// Global site store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct SiteStore {
    /// Visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    /// Last toast id handed out.
    pub last_toast_id: u64,
    /// Whether the mobile navigation is expanded.
    pub menu_open: bool,
}

impl SiteStore {
    /// Queue a toast, evicting the oldest beyond [`MAX_TOASTS`].
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.last_toast_id += 1;
        let id = self.last_toast_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(0..excess);
        }
        id
    }

    /// Remove a toast by id.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_are_capped_and_dismissable() {
        let mut store = SiteStore::default();
        for index in 0..6 {
            store.push_toast(ToastKind::Info, format!("toast {index}"));
        }
        assert_eq!(store.toasts.len(), MAX_TOASTS);
        assert_eq!(store.toasts[0].message, "toast 2");

        let last = store.push_toast(ToastKind::Error, "falhou");
        store.dismiss_toast(last);
        assert!(store.toasts.iter().all(|toast| toast.id != last));
        assert_eq!(store.last_toast_id, 7);
    }
}
