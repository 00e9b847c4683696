//! Note Modal State
//!
//! The overlay used both to create items and to edit one in place. The
//! create/edit distinction and the edited item live in a single enum, so the
//! modal can never be closed while still pointing at an item.

use crate::models::TodoId;
use crate::todo_list::TodoList;

/// Which mode the modal is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Create,
    Edit(TodoId),
}

/// Result of pressing Save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new item was appended
    Added(TodoId),
    /// The edited item's text was replaced
    Edited(TodoId),
    /// Draft was blank; the modal stays open
    Rejected,
    /// The edited item no longer exists; the modal closed
    Stale(TodoId),
    /// Save while closed does nothing
    NotOpen,
}

/// Modal visibility plus the draft text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalController {
    state: ModalState,
    draft: String,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether the draft would be committed by `save`
    pub fn has_content(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    pub fn is_visible(&self) -> bool {
        self.state != ModalState::Closed
    }

    pub fn title(&self) -> &'static str {
        match self.state {
            ModalState::Edit(_) => "Edit Note",
            _ => "New Note",
        }
    }

    /// Open with an empty draft. Only valid from `Closed`.
    pub fn open_create(&mut self) -> bool {
        if self.is_visible() {
            return false;
        }
        self.state = ModalState::Create;
        self.draft.clear();
        true
    }

    /// Open on an existing item with its text as the draft.
    /// Only valid from `Closed` and for an item still in `todos`.
    pub fn open_edit(&mut self, id: TodoId, todos: &TodoList) -> bool {
        if self.is_visible() {
            return false;
        }
        let Some(item) = todos.get(id) else {
            return false;
        };
        self.draft = item.text.clone();
        self.state = ModalState::Edit(id);
        true
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.is_visible() {
            self.draft = text.into();
        }
    }

    /// Close and discard the draft
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Commit the draft with exactly one of `add` or `edit`.
    ///
    /// A blank draft leaves both the list and the modal unchanged.
    pub fn save(&mut self, todos: &mut TodoList) -> SaveOutcome {
        if !self.has_content() {
            return match self.state {
                ModalState::Closed => SaveOutcome::NotOpen,
                _ => SaveOutcome::Rejected,
            };
        }

        let outcome = match self.state {
            ModalState::Closed => return SaveOutcome::NotOpen,
            ModalState::Create => match todos.add(self.draft.as_str()) {
                Some(id) => SaveOutcome::Added(id),
                None => return SaveOutcome::Rejected,
            },
            ModalState::Edit(id) => {
                if todos.edit(id, self.draft.as_str()) {
                    SaveOutcome::Edited(id)
                } else {
                    SaveOutcome::Stale(id)
                }
            }
        };
        self.close();
        outcome
    }

    /// Close if the modal is editing `id`. Returns whether it closed.
    pub fn forget(&mut self, id: TodoId) -> bool {
        if self.state == ModalState::Edit(id) {
            self.close();
            true
        } else {
            false
        }
    }

    fn close(&mut self) {
        self.state = ModalState::Closed;
        self.draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_list() -> TodoList {
        let mut list = TodoList::new();
        list.add("a");
        let b = list.add("B").unwrap();
        let c = list.add("c").unwrap();
        list.toggle_complete(b);
        list.toggle_complete(c);
        list
    }

    #[test]
    fn test_starts_closed() {
        let modal = ModalController::new();
        assert_eq!(modal.state(), ModalState::Closed);
        assert!(!modal.is_visible());
        assert_eq!(modal.draft(), "");
    }

    #[test]
    fn test_open_create_resets_draft() {
        let mut modal = ModalController::new();
        assert!(modal.open_create());
        modal.set_draft("half typed");
        modal.cancel();

        assert!(modal.open_create());
        assert_eq!(modal.state(), ModalState::Create);
        assert_eq!(modal.draft(), "");
        assert!(modal.is_visible());
        assert_eq!(modal.title(), "New Note");
    }

    #[test]
    fn test_open_edit_prefills_draft() {
        let list = sample_list();
        let id = list.id_at(1).unwrap();
        let mut modal = ModalController::new();

        assert!(modal.open_edit(id, &list));
        assert_eq!(modal.state(), ModalState::Edit(id));
        assert_eq!(modal.draft(), "B");
        assert_eq!(modal.title(), "Edit Note");
    }

    #[test]
    fn test_open_edit_unknown_item_stays_closed() {
        let list = sample_list();
        let mut modal = ModalController::new();
        assert!(!modal.open_edit(TodoId(99), &list));
        assert_eq!(modal.state(), ModalState::Closed);
    }

    #[test]
    fn test_open_is_ignored_while_open() {
        let list = sample_list();
        let mut modal = ModalController::new();
        modal.open_create();

        assert!(!modal.open_edit(list.id_at(0).unwrap(), &list));
        assert!(!modal.open_create());
        assert_eq!(modal.state(), ModalState::Create);
    }

    #[test]
    fn test_edit_flow_renames_and_closes() {
        let mut list = sample_list();
        let id = list.id_at(1).unwrap();
        let mut modal = ModalController::new();

        modal.open_edit(id, &list);
        modal.set_draft("renamed");
        assert_eq!(modal.save(&mut list), SaveOutcome::Edited(id));

        let item = list.get(id).unwrap();
        assert_eq!(item.text, "renamed");
        assert!(item.completed);
        assert_eq!(list.position(id), Some(1));
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(modal.draft(), "");
    }

    #[test]
    fn test_create_flow_appends_and_closes() {
        let mut list = sample_list();
        let mut modal = ModalController::new();

        modal.open_create();
        modal.set_draft("d");
        let outcome = modal.save(&mut list);

        let SaveOutcome::Added(id) = outcome else {
            panic!("expected Added, got {:?}", outcome);
        };
        assert_eq!(list.len(), 4);
        assert_eq!(list.position(id), Some(3));
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_blank_save_in_create_keeps_modal_open() {
        let mut list = sample_list();
        let mut modal = ModalController::new();

        modal.open_create();
        modal.set_draft("   ");
        assert_eq!(modal.save(&mut list), SaveOutcome::Rejected);
        assert_eq!(modal.state(), ModalState::Create);
        assert_eq!(modal.draft(), "   ");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_blank_save_in_edit_keeps_item() {
        let mut list = sample_list();
        let id = list.id_at(0).unwrap();
        let mut modal = ModalController::new();

        modal.open_edit(id, &list);
        modal.set_draft("");
        assert_eq!(modal.save(&mut list), SaveOutcome::Rejected);
        assert_eq!(modal.state(), ModalState::Edit(id));
        assert_eq!(list.get(id).unwrap().text, "a");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut list = sample_list();
        let before = list.clone();
        let id = list.id_at(2).unwrap();
        let mut modal = ModalController::new();

        modal.open_edit(id, &list);
        modal.set_draft("changed");
        modal.cancel();

        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(modal.draft(), "");
        assert_eq!(modal.save(&mut list), SaveOutcome::NotOpen);
        assert_eq!(list, before);
    }

    #[test]
    fn test_has_content_trims() {
        let mut modal = ModalController::new();
        modal.open_create();
        assert!(!modal.has_content());
        modal.set_draft(" \t ");
        assert!(!modal.has_content());
        modal.set_draft(" x ");
        assert!(modal.has_content());
    }

    #[test]
    fn test_set_draft_ignored_while_closed() {
        let mut modal = ModalController::new();
        modal.set_draft("ghost");
        assert_eq!(modal.draft(), "");
    }

    #[test]
    fn test_save_after_item_deleted_closes_as_stale() {
        let mut list = sample_list();
        let id = list.id_at(0).unwrap();
        let mut modal = ModalController::new();

        modal.open_edit(id, &list);
        list.delete(id);
        modal.set_draft("too late");

        assert_eq!(modal.save(&mut list), SaveOutcome::Stale(id));
        assert_eq!(modal.state(), ModalState::Closed);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_forget_closes_only_matching_edit() {
        let list = sample_list();
        let a = list.id_at(0).unwrap();
        let b = list.id_at(1).unwrap();
        let mut modal = ModalController::new();

        modal.open_edit(a, &list);
        assert!(!modal.forget(b));
        assert!(modal.is_visible());
        assert!(modal.forget(a));
        assert_eq!(modal.state(), ModalState::Closed);
    }
}
