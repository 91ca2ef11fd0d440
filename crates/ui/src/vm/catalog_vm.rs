use lms_core::catalog::{Catalog, CatalogFilter};
use lms_core::model::Course;

use crate::vm::time_fmt::format_minutes;

/// Ratings offered by the rating filter, highest first.
pub const RATING_CHOICES: [u8; 4] = [4, 3, 2, 1];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub author_name: String,
    pub author_avatar: String,
    pub stars: String,
    pub ratings_label: String,
    pub lessons_label: String,
    pub duration_label: String,
    pub categories: Vec<String>,
}

#[must_use]
pub fn map_course_card(course: &Course, catalog: &Catalog) -> CourseCardVm {
    let categories = course
        .categories
        .iter()
        .filter_map(|id| catalog.category(id))
        .map(|category| category.name.clone())
        .collect();
    let lessons = course.lessons.len();

    CourseCardVm {
        id: course.id.to_string(),
        title: course.title.clone(),
        description: course.description.clone(),
        thumbnail: course.thumbnail.clone(),
        author_name: course.author.name.clone(),
        author_avatar: course.author.avatar.clone(),
        stars: stars(course.rating),
        ratings_label: format!("{:.1} ({})", course.rating, course.total_ratings),
        lessons_label: if lessons == 1 {
            "1 lesson".to_string()
        } else {
            format!("{lessons} lessons")
        },
        duration_label: format_minutes(course.total_duration()),
        categories,
    }
}

#[must_use]
pub fn map_course_cards(courses: &[Course], catalog: &Catalog) -> Vec<CourseCardVm> {
    courses
        .iter()
        .map(|course| map_course_card(course, catalog))
        .collect()
}

/// Five stars, filled up to the whole part of the rating.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn stars(rating: f32) -> String {
    let filled = rating.clamp(0.0, 5.0).floor() as usize;
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

/// One clickable option in the category or rating filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOptionVm {
    pub label: String,
    /// Query string the option navigates to.
    pub query: String,
    pub selected: bool,
}

/// "All Categories" followed by every catalog category.
#[must_use]
pub fn category_options(catalog: &Catalog, filter: &CatalogFilter) -> Vec<FilterOptionVm> {
    let active = filter
        .category_slug
        .as_deref()
        .and_then(|slug| catalog.category_by_slug(slug))
        .map(|category| category.slug.as_str());

    let mut options = vec![FilterOptionVm {
        label: "All Categories".to_string(),
        query: CatalogFilter {
            category_slug: None,
            ..filter.clone()
        }
        .to_query_string(),
        selected: active.is_none(),
    }];
    options.extend(catalog.categories().iter().map(|category| FilterOptionVm {
        label: category.name.clone(),
        query: filter
            .clone()
            .with_category(category.slug.clone())
            .to_query_string(),
        selected: active == Some(category.slug.as_str()),
    }));
    options
}

/// "All Ratings" followed by the `N & Up` choices.
#[must_use]
pub fn rating_options(filter: &CatalogFilter) -> Vec<FilterOptionVm> {
    let mut options = vec![FilterOptionVm {
        label: "All Ratings".to_string(),
        query: filter.clone().with_min_rating(0).to_query_string(),
        selected: filter.min_rating == 0,
    }];
    options.extend(RATING_CHOICES.iter().map(|&rating| FilterOptionVm {
        label: format!("{} & Up", stars(f32::from(rating))),
        query: filter.clone().with_min_rating(rating).to_query_string(),
        selected: filter.min_rating == rating,
    }));
    options
}

/// Query string for a submitted search box, keeping the other filters.
#[must_use]
pub fn search_query(filter: &CatalogFilter, text: &str) -> String {
    filter.clone().with_query(text.trim()).to_query_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_core::fixtures;
    use lms_core::model::CourseId;

    #[test]
    fn card_labels() {
        let catalog = fixtures::catalog();
        let course = catalog.course(&CourseId::new("1")).unwrap();
        let card = map_course_card(course, &catalog);

        assert_eq!(card.stars, "★★★★☆");
        assert_eq!(card.ratings_label, "4.8 (1254)");
        assert_eq!(card.lessons_label, "2 lessons");
        assert_eq!(card.duration_label, "37 min");
        assert_eq!(card.categories, vec!["Web Development".to_string()]);
    }

    #[test]
    fn category_options_keep_other_filters() {
        let catalog = fixtures::catalog();
        let filter = CatalogFilter::default()
            .with_query("python")
            .with_category("ai-ml");
        let options = category_options(&catalog, &filter);

        assert_eq!(options.len(), 7);
        assert!(!options[0].selected);
        assert_eq!(options[0].query, "query=python");
        let ai = options.iter().find(|o| o.label == "AI & Machine Learning").unwrap();
        assert!(ai.selected);
        assert_eq!(ai.query, "query=python&category=ai-ml");
    }

    #[test]
    fn unknown_category_selects_all() {
        let catalog = fixtures::catalog();
        let filter = CatalogFilter::default().with_category("gardening");
        assert!(category_options(&catalog, &filter)[0].selected);
    }

    #[test]
    fn rating_options_mark_selection() {
        let filter = CatalogFilter::default().with_min_rating(3);
        let options = rating_options(&filter);
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].query, "");
        let three = options.iter().find(|o| o.selected).unwrap();
        assert_eq!(three.label, "★★★☆☆ & Up");
        assert_eq!(three.query, "rating=3");
    }

    #[test]
    fn search_replaces_query_only() {
        let filter = CatalogFilter::default().with_query("old").with_min_rating(4);
        assert_eq!(search_query(&filter, "  swift "), "query=swift&rating=4");
        assert_eq!(search_query(&filter, ""), "rating=4");
    }
}
