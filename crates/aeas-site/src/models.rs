//! View-level models shared by components.

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// CSS modifier class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Navigation labels supplied to the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLabels {
    /// Home link.
    pub home: String,
    /// About link.
    pub about: String,
    /// Events link.
    pub events: String,
    /// Projects link.
    pub projects: String,
    /// News link.
    pub news: String,
    /// FAQ link.
    pub faq: String,
    /// Secretary link.
    pub secretary: String,
    /// Contact link.
    pub contact: String,
}
