use dioxus::prelude::*;
use lms_core::model::{CourseId, LessonId};

use crate::context::AppContext;
use crate::views::components::NoticeBanner;
use crate::views::{NOTICE_TTL, Notice};
use crate::vm::{NoteCommand, NoteEditorVm, NoteIntent, NoteItemVm};

/// Notes for one lesson: a draft box on top, the saved notes below.
#[component]
pub fn NoteEditor(course_id: String, lesson_id: String, notes: Vec<NoteItemVm>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut editor = use_signal(NoteEditorVm::default);
    let mut notice = use_signal(|| None::<Notice>);

    let dispatch = use_callback(move |intent: NoteIntent| {
        let Some(command) = editor.write().apply(intent) else {
            return;
        };
        let store = ctx.store();
        let course_id = CourseId::new(course_id.clone());
        let lesson_id = LessonId::new(lesson_id.clone());
        spawn(async move {
            let shown = match command {
                NoteCommand::Add(content) => Notice::from_result(
                    &store.add_note(course_id, lesson_id, content).await,
                    "Note saved",
                ),
                NoteCommand::Update { id, content } => {
                    Notice::from_result(&store.update_note(id, content).await, "Note updated")
                }
                NoteCommand::Delete(id) => {
                    Notice::from_result(&store.delete_note(id).await, "Note deleted")
                }
            };
            notice.set(Some(shown));
            tokio::time::sleep(NOTICE_TTL).await;
            if notice() == Some(shown) {
                notice.set(None);
            }
        });
    });

    let show_hint = editor.read().show_empty_hint(notes.len());
    let draft = editor.read().draft().to_string();

    rsx! {
        section { class: "notes",
            h2 { "My Notes" }
            NoticeBanner { notice: notice() }
            form {
                class: "notes__form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    dispatch.call(NoteIntent::SaveDraft);
                },
                textarea {
                    class: "notes__input",
                    placeholder: "Take notes on this lesson...",
                    rows: "4",
                    value: "{draft}",
                    oninput: move |evt| dispatch.call(NoteIntent::DraftChanged(evt.value())),
                }
                button { r#type: "submit", class: "btn btn--primary", "Save Note" }
            }

            if show_hint {
                p { class: "muted notes__empty",
                    "No notes for this lesson yet. Use the form above to add notes."
                }
            }

            ul { class: "notes__list",
                for note in notes {
                    NoteCard {
                        key: "{note.id}",
                        editing: editor.read().is_editing(&note.id),
                        edit_text: editor.read().edit_text().unwrap_or_default().to_string(),
                        note,
                        on_intent: dispatch,
                    }
                }
            }
        }
    }
}

#[component]
fn NoteCard(
    note: NoteItemVm,
    editing: bool,
    edit_text: String,
    on_intent: Callback<NoteIntent>,
) -> Element {
    if editing {
        return rsx! {
            li { class: "note note--editing",
                textarea {
                    class: "notes__input",
                    rows: "4",
                    value: "{edit_text}",
                    oninput: move |evt| on_intent.call(NoteIntent::EditChanged(evt.value())),
                }
                div { class: "note__actions",
                    button { class: "btn", onclick: move |_| on_intent.call(NoteIntent::CancelEdit), "Cancel" }
                    button { class: "btn btn--primary", onclick: move |_| on_intent.call(NoteIntent::SaveEdit), "Save" }
                }
            }
        };
    }

    let edit_id = note.id.clone();
    let edit_content = note.content.clone();
    let delete_id = note.id.clone();
    rsx! {
        li { class: "note",
            p { class: "note__content", "{note.content}" }
            footer { class: "note__footer",
                span { class: "muted", "{note.date_label}" }
                div { class: "note__actions",
                    button {
                        class: "btn btn--ghost",
                        onclick: move |_| on_intent.call(NoteIntent::StartEdit {
                            id: edit_id.clone(),
                            content: edit_content.clone(),
                        }),
                        "Edit"
                    }
                    button {
                        class: "btn btn--ghost",
                        onclick: move |_| on_intent.call(NoteIntent::Delete(delete_id.clone())),
                        "Delete"
                    }
                }
            }
        }
    }
}
