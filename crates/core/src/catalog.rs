use std::cmp::Ordering;

use crate::model::{Category, CategoryId, Course, CourseId, Lesson, LessonId};

/// How many courses the home page highlights per section.
pub const HIGHLIGHT_COUNT: usize = 3;

/// Read-only course and category catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
    categories: Vec<Category>,
}

impl Catalog {
    #[must_use]
    pub fn new(courses: Vec<Course>, categories: Vec<Category>) -> Self {
        Self {
            courses,
            categories,
        }
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn course(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| &course.id == id)
    }

    #[must_use]
    pub fn lesson(&self, course_id: &CourseId, lesson_id: &LessonId) -> Option<&Lesson> {
        self.course(course_id)?.lesson(lesson_id)
    }

    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| &category.id == id)
    }

    #[must_use]
    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.slug == slug)
    }

    /// Courses matching every active predicate of `filter`, in catalog order.
    #[must_use]
    pub fn filter<'a>(&'a self, filter: &CatalogFilter) -> Vec<&'a Course> {
        let needle = filter.query.to_lowercase();
        // An unknown slug does not narrow the result.
        let category_id = filter
            .category_slug
            .as_deref()
            .and_then(|slug| self.category_by_slug(slug))
            .map(|category| &category.id);

        self.courses
            .iter()
            .filter(|course| matches_query(course, &needle))
            .filter(|course| category_id.is_none_or(|id| course.in_category(id)))
            .filter(|course| filter.min_rating == 0 || course.rating >= f32::from(filter.min_rating))
            .collect()
    }

    /// Highest rated courses; ties keep catalog order.
    #[must_use]
    pub fn featured(&self) -> Vec<&Course> {
        let mut sorted: Vec<&Course> = self.courses.iter().collect();
        sorted.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
        sorted.truncate(HIGHLIGHT_COUNT);
        sorted
    }

    /// Most recently created courses.
    #[must_use]
    pub fn newest(&self) -> Vec<&Course> {
        let mut sorted: Vec<&Course> = self.courses.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.truncate(HIGHLIGHT_COUNT);
        sorted
    }
}

fn matches_query(course: &Course, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    course.title.to_lowercase().contains(needle)
        || course.description.to_lowercase().contains(needle)
}

/// Leading integer of a rating parameter. Negative values read as 0 and
/// values past `u8::MAX` saturate, which no course can reach.
fn leading_rating(raw: &str) -> u8 {
    let raw = raw.trim_start();
    if raw.starts_with('-') {
        return 0;
    }
    raw.strip_prefix('+')
        .unwrap_or(raw)
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u8, |acc, digit| acc.saturating_mul(10).saturating_add(digit - b'0'))
}

//
// ─── FILTER ────────────────────────────────────────────────────────────────────
//

/// Catalog filter as carried in the `/courses` query string.
///
/// Each field is inactive at its default: empty query, no category,
/// rating 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub query: String,
    pub category_slug: Option<String>,
    pub min_rating: u8,
}

impl CatalogFilter {
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        self.category_slug = if slug.is_empty() { None } else { Some(slug) };
        self
    }

    #[must_use]
    pub fn with_min_rating(mut self, rating: u8) -> Self {
        self.min_rating = rating;
        self
    }

    /// Parse `query`, `category` and `rating` from a URL query string.
    ///
    /// A leading `?` is accepted and unknown keys are ignored. The rating
    /// is read from its leading integer digits, so `4.5` means 4 and a
    /// value with no digits (such as the "All Ratings" option) is inactive.
    #[must_use]
    pub fn from_query_string(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut filter = Self::default();
        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "query" => filter.query = value.into_owned(),
                "category" => filter = filter.with_category(value.into_owned()),
                "rating" => filter.min_rating = leading_rating(&value),
                _ => {}
            }
        }
        filter
    }

    /// Serialize back to a query string, omitting inactive fields.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = url::form_urlencoded::Serializer::new(String::new());
        if !self.query.is_empty() {
            out.append_pair("query", &self.query);
        }
        if let Some(slug) = &self.category_slug {
            out.append_pair("category", slug);
        }
        if self.min_rating > 0 {
            out.append_pair("rating", &self.min_rating.to_string());
        }
        out.finish()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category_slug.is_some() || self.min_rating > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn ids(courses: &[&Course]) -> Vec<String> {
        courses.iter().map(|course| course.id.to_string()).collect()
    }

    #[test]
    fn empty_filter_returns_whole_catalog() {
        let catalog = fixtures::catalog();
        let result = catalog.filter(&CatalogFilter::default());
        assert_eq!(result.len(), catalog.courses().len());
    }

    #[test]
    fn query_matches_title_or_description_case_insensitively() {
        let catalog = fixtures::catalog();
        let result = catalog.filter(&CatalogFilter::default().with_query("react"));

        let expected: Vec<&Course> = catalog
            .courses()
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains("react")
                    || c.description.to_lowercase().contains("react")
            })
            .collect();
        assert_eq!(ids(&result), ids(&expected));
        assert_eq!(ids(&result), vec!["1"]);

        let by_description = catalog.filter(&CatalogFilter::default().with_query("MONGODB"));
        assert_eq!(ids(&by_description), vec!["4"]);
    }

    #[test]
    fn category_slug_resolves_to_membership() {
        let catalog = fixtures::catalog();
        let result = catalog.filter(&CatalogFilter::default().with_category("ai-ml"));
        assert_eq!(ids(&result), vec!["3"]);

        let web = catalog.filter(&CatalogFilter::default().with_category("web-development"));
        assert_eq!(ids(&web), vec!["1", "4"]);
    }

    #[test]
    fn unknown_category_slug_is_ignored() {
        let catalog = fixtures::catalog();
        let result = catalog.filter(&CatalogFilter::default().with_category("gardening"));
        assert_eq!(result.len(), catalog.courses().len());
    }

    #[test]
    fn predicates_are_conjunctive() {
        let catalog = fixtures::catalog();
        let filter = CatalogFilter::default()
            .with_query("development")
            .with_category("web-development")
            .with_min_rating(4);
        assert_eq!(ids(&catalog.filter(&filter)), vec!["1", "4"]);

        let none = CatalogFilter::default()
            .with_query("swift")
            .with_category("cloud-computing");
        assert!(catalog.filter(&none).is_empty());
    }

    #[test]
    fn min_rating_is_inclusive() {
        let courses = vec![{
            let mut course = fixtures::courses().remove(0);
            course.rating = 4.0;
            course
        }];
        let catalog = Catalog::new(courses, fixtures::categories());
        assert_eq!(catalog.filter(&CatalogFilter::default().with_min_rating(4)).len(), 1);
        assert!(catalog.filter(&CatalogFilter::default().with_min_rating(5)).is_empty());
    }

    #[test]
    fn filtering_does_not_mutate_catalog() {
        let catalog = fixtures::catalog();
        let before = catalog.clone();
        let _ = catalog.filter(&CatalogFilter::default().with_query("python"));
        assert_eq!(catalog, before);
    }

    #[test]
    fn query_string_parsing_is_lenient() {
        let filter = CatalogFilter::from_query_string("?query=data+science&category=ai-ml&rating=4");
        assert_eq!(filter.query, "data science");
        assert_eq!(filter.category_slug.as_deref(), Some("ai-ml"));
        assert_eq!(filter.min_rating, 4);

        let all_ratings = CatalogFilter::from_query_string("rating=option1&category=");
        assert_eq!(all_ratings, CatalogFilter::default());
        assert!(!all_ratings.is_active());
    }

    #[test]
    fn whitespace_query_is_a_literal_substring() {
        let catalog = fixtures::catalog();
        let filter = CatalogFilter::from_query_string("query=+++");
        assert_eq!(filter.query, "   ");
        assert!(filter.is_active());
        assert!(catalog.filter(&filter).is_empty());

        let spaced = catalog.filter(&CatalogFilter::default().with_query(" "));
        let expected: Vec<&Course> = catalog
            .courses()
            .iter()
            .filter(|c| c.title.contains(' ') || c.description.contains(' '))
            .collect();
        assert_eq!(ids(&spaced), ids(&expected));
    }

    #[test]
    fn rating_reads_leading_digits() {
        assert_eq!(CatalogFilter::from_query_string("rating=4.5").min_rating, 4);
        assert_eq!(CatalogFilter::from_query_string("rating=4abc").min_rating, 4);
        assert_eq!(CatalogFilter::from_query_string("rating=-3").min_rating, 0);

        let catalog = fixtures::catalog();
        let too_high = CatalogFilter::from_query_string("rating=300");
        assert!(too_high.is_active());
        assert!(catalog.filter(&too_high).is_empty());
    }

    #[test]
    fn query_string_round_trips_active_fields() {
        let filter = CatalogFilter::default()
            .with_query("react & ts")
            .with_min_rating(3);
        let raw = filter.to_query_string();
        assert_eq!(raw, "query=react+%26+ts&rating=3");
        assert_eq!(CatalogFilter::from_query_string(&raw), filter);
    }

    #[test]
    fn featured_and_newest_pick_three() {
        let catalog = fixtures::catalog();
        assert_eq!(ids(&catalog.featured()), vec!["3", "1", "6"]);
        assert_eq!(ids(&catalog.newest()), vec!["3", "5", "4"]);
    }
}
