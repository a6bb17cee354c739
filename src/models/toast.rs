//! Transient notification queue.

use std::collections::VecDeque;

/// Severity of a toast, controls its accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

/// Screen corner or edge the toaster is anchored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    /// Inline CSS anchoring the toaster container.
    pub fn style(self) -> &'static str {
        match self {
            Self::TopLeft => "top: 1rem; left: 1rem;",
            Self::TopCenter => "top: 1rem; left: 50%; transform: translateX(-50%);",
            Self::TopRight => "top: 1rem; right: 1rem;",
            Self::BottomLeft => "bottom: 1rem; left: 1rem;",
            Self::BottomCenter => "bottom: 1rem; left: 50%; transform: translateX(-50%);",
            Self::BottomRight => "bottom: 1rem; right: 1rem;",
        }
    }

    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
    }
}

/// A single queued message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub description: Option<String>,
}

/// FIFO of live toasts. Newest entries render first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: VecDeque<Toast>,
    max_visible: usize,
}

impl ToastQueue {
    pub fn new(max_visible: usize) -> Self {
        Self {
            next_id: 1,
            toasts: VecDeque::new(),
            max_visible,
        }
    }

    /// Enqueue a message and return its id.
    pub fn push(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_back(Toast {
            id,
            kind,
            message: message.into(),
            description,
        });
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.toasts.iter().position(|t| t.id == id) {
            Some(index) => {
                self.toasts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Toasts to render, newest first, capped at the visible limit.
    pub fn visible(&self) -> Vec<Toast> {
        self.toasts
            .iter()
            .rev()
            .take(self.max_visible)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut queue = ToastQueue::new(3);
        let a = queue.push(ToastKind::Info, "a", None);
        let b = queue.push(ToastKind::Success, "b", None);
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_visible_is_newest_first_and_capped() {
        let mut queue = ToastQueue::new(3);
        for msg in ["one", "two", "three", "four"] {
            queue.push(ToastKind::Info, msg, None);
        }
        let shown: Vec<_> = queue.visible().into_iter().map(|t| t.message).collect();
        assert_eq!(shown, vec!["four", "three", "two"]);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn test_dismiss_reveals_hidden_toast() {
        let mut queue = ToastQueue::new(2);
        let first = queue.push(ToastKind::Info, "first", None);
        let second = queue.push(ToastKind::Info, "second", None);
        queue.push(ToastKind::Error, "third", Some("details".to_string()));

        assert!(queue.dismiss(second));
        assert!(!queue.dismiss(second));

        let ids: Vec<_> = queue.visible().into_iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[1], first);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut queue = ToastQueue::new(3);
        let id = queue.push(ToastKind::Warning, "x", None);
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.push(ToastKind::Warning, "y", None) > id);
    }

    #[test]
    fn test_position_style() {
        assert_eq!(ToastPosition::TopRight.style(), "top: 1rem; right: 1rem;");
        assert!(ToastPosition::TopRight.is_top());
        assert!(!ToastPosition::BottomLeft.is_top());
    }
}
