use crate::model::{Course, Lesson, LessonId};

/// The lessons immediately before and after a lesson in course order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LessonNeighbors<'a> {
    pub previous: Option<&'a Lesson>,
    pub next: Option<&'a Lesson>,
}

impl<'a> LessonNeighbors<'a> {
    /// Returns `None` when `lesson_id` is not part of `course`.
    ///
    /// There is no wraparound: the first lesson has no previous lesson and
    /// the last has no next one.
    #[must_use]
    pub fn find(course: &'a Course, lesson_id: &LessonId) -> Option<Self> {
        let index = course.lesson_index(lesson_id)?;
        let previous = index
            .checked_sub(1)
            .and_then(|prev| course.lessons.get(prev));
        let next = course.lessons.get(index + 1);
        Some(Self { previous, next })
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}
