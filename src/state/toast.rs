//! Self-dismissing notifications.
//!
//! DESIGN
//! ======
//! Each toast moves through `Entering -> Visible -> Leaving` and is then
//! dropped from the stack. Timer callbacks address toasts by id, so a callback
//! for a toast that was already dismissed finds nothing and does nothing.
//!
//! Concurrent toasts stack: each occupies the next slot below the previous
//! one instead of overlapping.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Delay before the toast slides into view.
pub const SHOW_DELAY_MS: u32 = 100;
/// Time from creation until the toast starts sliding out.
pub const DISPLAY_MS: u32 = 5000;
/// Slide-out duration before removal.
pub const EXIT_MS: u32 = 300;

const FIRST_SLOT_TOP_PX: u32 = 100;
const SLOT_SPACING_PX: u32 = 80;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
            Self::Info => "fas fa-info-circle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    /// Inserted off-screen, about to slide in.
    Entering,
    Visible,
    /// Sliding out; removed once `EXIT_MS` elapses.
    Leaving,
}

impl ToastPhase {
    /// Phase of a toast `elapsed_ms` after creation; `None` once removed.
    pub fn at(elapsed_ms: u32) -> Option<Self> {
        if elapsed_ms < SHOW_DELAY_MS {
            Some(Self::Entering)
        } else if elapsed_ms < DISPLAY_MS {
            Some(Self::Visible)
        } else if elapsed_ms < DISPLAY_MS + EXIT_MS {
            Some(Self::Leaving)
        } else {
            None
        }
    }

    /// Elapsed times at which the phase changes, paired with the phase that
    /// starts there (`None` means removal). Timers sleep between entries.
    pub fn lifecycle() -> [(u32, Option<Self>); 3] {
        [SHOW_DELAY_MS, DISPLAY_MS, DISPLAY_MS + EXIT_MS].map(|at_ms| (at_ms, Self::at(at_ms)))
    }

    /// Horizontal slide: off-screen except while visible.
    pub fn transform(self) -> &'static str {
        match self {
            Self::Visible => "translateX(0)",
            Self::Entering | Self::Leaving => "translateX(100%)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub phase: ToastPhase,
}

/// All toasts currently on the page, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    /// Insert a new toast in the `Entering` phase and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        let message = message.into();
        log::debug!("toast {id} ({}): {message}", kind.as_str());
        self.toasts.push(Toast { id, kind, message, phase: ToastPhase::Entering });
        id
    }

    /// Move a toast to `phase`. Returns `false` if it is already gone.
    pub fn advance(&mut self, id: u64, phase: ToastPhase) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.phase = phase;
                true
            }
            None => false,
        }
    }

    /// Apply a lifecycle step: move to `phase`, or remove on `None`.
    pub fn settle(&mut self, id: u64, phase: Option<ToastPhase>) -> bool {
        match phase {
            Some(phase) => self.advance(id, phase),
            None => self.dismiss(id),
        }
    }

    /// Remove a toast. Returns `false` if it is already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// `top` offset in pixels for the toast with `id`, by its stack slot.
    pub fn top_px(&self, id: u64) -> Option<u32> {
        let slot = self.toasts.iter().position(|t| t.id == id)?;
        let slot = u32::try_from(slot).unwrap_or(u32::MAX);
        Some(FIRST_SLOT_TOP_PX.saturating_add(slot.saturating_mul(SLOT_SPACING_PX)))
    }
}
