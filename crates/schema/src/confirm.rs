//! Delete confirmation state
//!
//! The prompt never closes itself: the page calls [`DeletePrompt::settle`]
//! once its delete request finishes, whatever the outcome.

use halqa_core::RecordId;

/// Name shown when the record has none
pub const FALLBACK_NAME: &str = "this record";

/// The record a delete was requested for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: RecordId,
    pub name: String,
}

/// Confirmation modal state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePrompt {
    pub target: Option<DeleteTarget>,
    pub pending: bool,
}

impl DeletePrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Open the prompt for a record; ignored while another delete is pending
    pub fn request(&mut self, id: impl Into<RecordId>, name: impl Into<String>) {
        if self.pending {
            return;
        }
        self.target = Some(DeleteTarget {
            id: id.into(),
            name: name.into(),
        });
    }

    /// Confirm: mark pending and hand back the id to delete
    ///
    /// Returns `None` when nothing is targeted or a delete is already running.
    pub fn begin(&mut self) -> Option<RecordId> {
        if self.pending {
            return None;
        }
        let id = self.target.as_ref()?.id.clone();
        self.pending = true;
        Some(id)
    }

    /// The delete finished (either way); close the prompt
    pub fn settle(&mut self) {
        self.pending = false;
        self.target = None;
    }

    /// Dismiss; ignored while pending
    pub fn cancel(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.target = None;
        true
    }

    /// Name to show in the message
    pub fn display_name(&self) -> &str {
        self.target
            .as_ref()
            .map(|target| target.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_NAME)
    }

    pub fn buttons_disabled(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut prompt = DeletePrompt::new();
        prompt.request("d1", "Lahore");
        assert!(prompt.is_open());
        assert_eq!(prompt.display_name(), "Lahore");

        assert_eq!(prompt.begin(), Some("d1".to_string()));
        assert!(prompt.buttons_disabled());
        assert!(prompt.is_open());

        prompt.settle();
        assert!(!prompt.is_open());
        assert!(!prompt.buttons_disabled());
    }

    #[test]
    fn test_cancel_ignored_while_pending() {
        let mut prompt = DeletePrompt::new();
        prompt.request("d1", "Lahore");
        prompt.begin();
        assert!(!prompt.cancel());
        assert!(prompt.is_open());
        assert_eq!(prompt.begin(), None);

        prompt.settle();
        prompt.request("d2", "Multan");
        assert!(prompt.cancel());
        assert!(!prompt.is_open());
    }

    #[test]
    fn test_fallback_name() {
        let mut prompt = DeletePrompt::new();
        prompt.request("x", "  ");
        assert_eq!(prompt.display_name(), FALLBACK_NAME);
        assert_eq!(DeletePrompt::new().begin(), None);
    }
}
