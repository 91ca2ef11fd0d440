mod notes;
mod player;
mod scripts;
mod sidebar;
mod view;

pub use notes::NoteEditor;
pub use player::VideoPlayer;
pub use sidebar::LessonSidebar;
pub use view::LessonView;
