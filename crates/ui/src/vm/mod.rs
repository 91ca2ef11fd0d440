mod catalog_vm;
mod course_vm;
mod lesson_vm;
mod markdown_vm;
mod note_editor_vm;
mod player_vm;
mod progress_vm;
mod time_fmt;

pub use catalog_vm::{
    CourseCardVm, FilterOptionVm, RATING_CHOICES, category_options, map_course_card,
    map_course_cards, rating_options, search_query, stars,
};
pub use course_vm::{CourseDetailVm, EnrollCta, LessonRowVm, map_course_detail};
pub use lesson_vm::{LessonPageVm, LessonStatus, SidebarAction, SidebarRowVm, map_lesson_page};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use note_editor_vm::{NoteCommand, NoteEditorVm, NoteIntent, NoteItemVm, map_note_items};
pub use player_vm::{CONTROLS_IDLE, PlayerControls};
pub use progress_vm::{ProgressCardVm, ProgressCta, StatCardVm, map_progress_card, map_stat_cards};
pub use time_fmt::{format_clock, format_date, format_minutes, format_month};
