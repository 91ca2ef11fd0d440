use std::sync::Arc;

use lms_core::catalog::{Catalog, CatalogFilter};
use lms_core::model::{Category, Course, CourseId};

/// Home page sections.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSections {
    pub featured: Vec<Course>,
    pub newest: Vec<Course>,
    pub categories: Vec<Category>,
}

/// Result of a catalog search.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSearch {
    pub filter: CatalogFilter,
    pub courses: Vec<Course>,
    pub heading: String,
}

/// Read-only queries over the built-in catalog.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn home(&self) -> HomeSections {
        HomeSections {
            featured: self.catalog.featured().into_iter().cloned().collect(),
            newest: self.catalog.newest().into_iter().cloned().collect(),
            categories: self.catalog.categories().to_vec(),
        }
    }

    #[must_use]
    pub fn search(&self, filter: CatalogFilter) -> CatalogSearch {
        let courses: Vec<Course> = self.catalog.filter(&filter).into_iter().cloned().collect();
        let heading = results_heading(&self.catalog, &filter, courses.len());
        CatalogSearch {
            filter,
            courses,
            heading,
        }
    }

    /// Parse a `/courses` query string and search with it.
    #[must_use]
    pub fn search_query_string(&self, raw: &str) -> CatalogSearch {
        self.search(CatalogFilter::from_query_string(raw))
    }

    #[must_use]
    pub fn course(&self, id: &CourseId) -> Option<Course> {
        self.catalog.course(id).cloned()
    }

    /// Category names of a course, in the course's own order.
    #[must_use]
    pub fn category_names(&self, course: &Course) -> Vec<String> {
        course
            .categories
            .iter()
            .filter_map(|id| self.catalog.category(id))
            .map(|category| category.name.clone())
            .collect()
    }
}

/// Heading above the search results, e.g. `2 Courses for "react" in Web Development`.
#[must_use]
pub fn results_heading(catalog: &Catalog, filter: &CatalogFilter, count: usize) -> String {
    let noun = if count == 1 { "Course" } else { "Courses" };
    let mut heading = format!("{count} {noun}");
    if !filter.query.is_empty() {
        heading.push_str(&format!(" for \"{}\"", filter.query));
    }
    if let Some(category) = filter
        .category_slug
        .as_deref()
        .and_then(|slug| catalog.category_by_slug(slug))
    {
        heading.push_str(&format!(" in {}", category.name));
    }
    heading
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_core::fixtures;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(fixtures::catalog()))
    }

    #[test]
    fn home_sections_hold_three_courses_each() {
        let home = service().home();
        assert_eq!(home.featured.len(), 3);
        assert_eq!(home.newest.len(), 3);
        assert_eq!(home.categories.len(), 6);
    }

    #[test]
    fn search_heading_mentions_query_and_category() {
        let search = service().search_query_string("query=react&category=web-development");
        assert_eq!(search.courses.len(), 1);
        assert_eq!(search.heading, "1 Course for \"react\" in Web Development");
    }

    #[test]
    fn whitespace_search_agrees_with_heading() {
        let search = service().search_query_string("query=+++");
        assert!(search.courses.is_empty());
        assert_eq!(search.heading, "0 Courses for \"   \"");
    }

    #[test]
    fn heading_skips_unknown_category() {
        let search = service().search_query_string("category=gardening");
        assert_eq!(search.heading, format!("{} Courses", fixtures::courses().len()));
    }

    #[test]
    fn category_names_resolve_ids() {
        let service = service();
        let course = service.course(&CourseId::new("1")).unwrap();
        assert!(service.category_names(&course).contains(&"Web Development".to_string()));
    }
}
