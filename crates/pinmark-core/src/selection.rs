//! Which point is selected and whether its text is being edited.
//!
//! States: `NoSelection → Viewing → Editing` and back. The selection holds a
//! [`PointId`] only; whenever the point turns out to be gone the selection is
//! dropped instead of surfacing an error to the user.

use tracing::debug;

use crate::error::{PinmarkError, Result};
use crate::points::{AnnotatedPoint, PointId, PointPatch, PointStore};

/// One editable text field of the draft.
///
/// `touched` separates "the user cleared this field" from "the user has not
/// typed here yet". Untouched fields display and keep the committed value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftField {
    text: String,
    touched: bool,
}

impl DraftField {
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.touched = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Text to show in the form: the draft once touched, else the committed value.
    pub fn display<'a>(&'a self, committed: &'a str) -> &'a str {
        if self.touched {
            &self.text
        } else {
            committed
        }
    }

    fn into_patch_value(self) -> Option<String> {
        self.touched.then_some(self.text)
    }
}

/// Uncommitted title/description text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub title: DraftField,
    pub description: DraftField,
}

impl EditDraft {
    fn into_patch(self) -> PointPatch {
        PointPatch {
            title: self.title.into_patch_value(),
            description: self.description.into_patch_value(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    NoSelection,
    Viewing {
        id: PointId,
    },
    Editing {
        id: PointId,
        draft: EditDraft,
    },
}

impl SelectionState {
    fn name(&self) -> &'static str {
        match self {
            Self::NoSelection => "nothing is selected",
            Self::Viewing { .. } => "viewing",
            Self::Editing { .. } => "editing",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SelectionSession {
    state: SelectionState,
}

impl SelectionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_id(&self) -> Option<PointId> {
        match self.state {
            SelectionState::NoSelection => None,
            SelectionState::Viewing { id } | SelectionState::Editing { id, .. } => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, SelectionState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match &self.state {
            SelectionState::Editing { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// The selected point, if it still exists.
    pub fn selected<'a>(&self, store: &'a PointStore) -> Option<&'a AnnotatedPoint> {
        self.selected_id().and_then(|id| store.get(id))
    }

    /// View `id`, discarding any draft in progress.
    pub fn select(&mut self, id: PointId, store: &PointStore) -> Result<()> {
        if !store.contains(id) {
            self.clear();
            return Err(PinmarkError::NotFound(id));
        }
        debug!(%id, "Point selected");
        self.state = SelectionState::Viewing { id };
        Ok(())
    }

    /// Viewing → Editing with an untouched draft.
    pub fn begin_edit(&mut self) -> Result<()> {
        let SelectionState::Viewing { id } = self.state else {
            return Err(self.invalid("begin editing"));
        };
        debug!(%id, "Editing started");
        self.state = SelectionState::Editing {
            id,
            draft: EditDraft::default(),
        };
        Ok(())
    }

    /// Select `id` and go straight into editing it.
    pub fn select_for_edit(&mut self, id: PointId, store: &PointStore) -> Result<()> {
        self.select(id, store)?;
        self.begin_edit()
    }

    pub fn set_draft_title(&mut self, text: impl Into<String>) -> Result<()> {
        if let SelectionState::Editing { draft, .. } = &mut self.state {
            draft.title.set(text);
            return Ok(());
        }
        Err(self.invalid("edit the title"))
    }

    pub fn set_draft_description(&mut self, text: impl Into<String>) -> Result<()> {
        if let SelectionState::Editing { draft, .. } = &mut self.state {
            draft.description.set(text);
            return Ok(());
        }
        Err(self.invalid("edit the description"))
    }

    /// Write touched draft fields to the point and return to Viewing.
    ///
    /// If the point has vanished the selection ends up cleared.
    pub fn commit(&mut self, store: &mut PointStore) -> Result<()> {
        let (id, draft) = match std::mem::take(&mut self.state) {
            SelectionState::Editing { id, draft } => (id, draft),
            other => {
                self.state = other;
                return Err(self.invalid("save"));
            }
        };

        let patch = draft.into_patch();
        let changed = !patch.is_empty();
        store.update(id, patch)?;
        debug!(%id, changed, "Edit committed");
        self.state = SelectionState::Viewing { id };
        Ok(())
    }

    /// Drop the draft and return to Viewing without touching the point.
    pub fn cancel(&mut self) {
        if let SelectionState::Editing { id, .. } = self.state {
            debug!(%id, "Edit cancelled");
            self.state = SelectionState::Viewing { id };
        }
    }

    /// Remove the selected point and clear the selection.
    pub fn delete_selected(&mut self, store: &mut PointStore) -> Option<AnnotatedPoint> {
        let id = self.selected_id()?;
        self.clear();
        store.remove(id)
    }

    pub fn clear(&mut self) {
        self.state = SelectionState::NoSelection;
    }

    /// Clear the selection if its point no longer exists. Returns `true` if cleared.
    pub fn reconcile(&mut self, store: &PointStore) -> bool {
        match self.selected_id() {
            Some(id) if !store.contains(id) => {
                debug!(%id, "Selected point vanished, clearing selection");
                self.clear();
                true
            }
            _ => false,
        }
    }

    fn invalid(&self, action: &'static str) -> PinmarkError {
        PinmarkError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}
