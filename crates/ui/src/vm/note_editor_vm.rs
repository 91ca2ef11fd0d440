use lms_core::model::{NoteId, UserNote};

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteItemVm {
    pub id: NoteId,
    pub content: String,
    pub date_label: String,
}

#[must_use]
pub fn map_note_items(notes: &[UserNote]) -> Vec<NoteItemVm> {
    notes
        .iter()
        .map(|note| NoteItemVm {
            id: note.id.clone(),
            content: note.content.clone(),
            date_label: format_date(note.updated_at),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoteIntent {
    DraftChanged(String),
    SaveDraft,
    StartEdit { id: NoteId, content: String },
    EditChanged(String),
    SaveEdit,
    CancelEdit,
    Delete(NoteId),
}

/// What the view must ask the store to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoteCommand {
    Add(String),
    Update { id: NoteId, content: String },
    Delete(NoteId),
}

/// Text fields of the note editor. One note is edited at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteEditorVm {
    draft: String,
    editing: Option<(NoteId, String)>,
}

impl NoteEditorVm {
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<&NoteId> {
        self.editing.as_ref().map(|(id, _)| id)
    }

    #[must_use]
    pub fn edit_text(&self) -> Option<&str> {
        self.editing.as_ref().map(|(_, text)| text.as_str())
    }

    #[must_use]
    pub fn is_editing(&self, id: &NoteId) -> bool {
        self.editing_id() == Some(id)
    }

    /// The hint shows only while there are no notes and nothing is typed.
    #[must_use]
    pub fn show_empty_hint(&self, note_count: usize) -> bool {
        note_count == 0 && self.draft.is_empty()
    }

    /// Apply an intent; blank submissions produce no command and keep the
    /// text as typed.
    pub fn apply(&mut self, intent: NoteIntent) -> Option<NoteCommand> {
        match intent {
            NoteIntent::DraftChanged(text) => {
                self.draft = text;
                None
            }
            NoteIntent::SaveDraft => {
                if self.draft.trim().is_empty() {
                    return None;
                }
                Some(NoteCommand::Add(std::mem::take(&mut self.draft)))
            }
            NoteIntent::StartEdit { id, content } => {
                self.editing = Some((id, content));
                None
            }
            NoteIntent::EditChanged(text) => {
                if let Some((_, current)) = self.editing.as_mut() {
                    *current = text;
                }
                None
            }
            NoteIntent::SaveEdit => {
                let blank = self
                    .edit_text()
                    .is_none_or(|text| text.trim().is_empty());
                if blank {
                    return None;
                }
                self.editing
                    .take()
                    .map(|(id, content)| NoteCommand::Update { id, content })
            }
            NoteIntent::CancelEdit => {
                self.editing = None;
                None
            }
            NoteIntent::Delete(id) => {
                if self.is_editing(&id) {
                    self.editing = None;
                }
                Some(NoteCommand::Delete(id))
            }
        }
    }
}
