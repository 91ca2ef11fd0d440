//! Built-in catalog and demo account.
//!
//! The application ships without a backend, so every course, category and
//! the signed-in demo user come from here.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::catalog::Catalog;
use crate::model::{
    Author, AuthorId, Category, CategoryId, Course, CourseId, EnrolledCourse, Lesson, LessonId,
    NoteContent, NoteId, UserId, UserNote, UserProfile,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn author(id: &str, name: &str, photo: u32) -> Author {
    Author {
        id: AuthorId::new(id),
        name: name.to_owned(),
        avatar: format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=150"
        ),
    }
}

fn thumbnail(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1"
    )
}

fn lesson(id: &str, order: u32, title: &str, description: &str, video: &str, duration: u32) -> Lesson {
    Lesson {
        id: LessonId::new(id),
        title: title.to_owned(),
        description: description.to_owned(),
        video_url: format!("https://www.youtube.com/embed/{video}"),
        duration,
        order,
    }
}

fn syllabus(modules: &[(&str, [&str; 3])]) -> String {
    let mut out = String::from("# Course Syllabus\n");
    for (index, (title, topics)) in modules.iter().enumerate() {
        out.push_str(&format!("\n## Module {}: {title}\n", index + 1));
        for topic in topics {
            out.push_str(&format!("- {topic}\n"));
        }
    }
    out
}

#[must_use]
pub fn categories() -> Vec<Category> {
    [
        ("web-dev", "Web Development", "web-development", "bg-blue-500"),
        ("design", "UI/UX Design", "design", "bg-purple-500"),
        ("data-science", "Data Science", "data-science", "bg-green-500"),
        ("mobile-dev", "Mobile Development", "mobile-development", "bg-orange-500"),
        ("cloud", "Cloud Computing", "cloud-computing", "bg-cyan-500"),
        ("ai-ml", "AI & Machine Learning", "ai-ml", "bg-emerald-500"),
    ]
    .into_iter()
    .map(|(id, name, slug, color)| Category {
        id: CategoryId::new(id),
        name: name.to_owned(),
        slug: slug.to_owned(),
        color: color.to_owned(),
    })
    .collect()
}

#[must_use]
#[allow(clippy::too_many_lines)]
pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: CourseId::new("1"),
            title: "Modern React Development with TypeScript".into(),
            description: "Master React 18 with TypeScript, hooks, and modern patterns for building scalable web applications.".into(),
            long_description: Some("Build professional, scalable web applications with React 18 and TypeScript: functional components, hooks, context, Suspense, type-safe state management, performance tuning and testing.".into()),
            author: author("1", "Sarah Mitchell", 1_239_291),
            thumbnail: thumbnail(11_035_471),
            rating: 4.8,
            total_ratings: 1254,
            enrollments: 4732,
            categories: vec![CategoryId::new("web-dev")],
            syllabus: syllabus(&[
                ("React and TypeScript Fundamentals", ["React 18 new features", "TypeScript essentials for React", "Setting up a React+TS project"]),
                ("Modern Component Patterns", ["Functional components", "Custom hooks", "Higher-order components"]),
                ("State Management", ["useState, useReducer", "Context API", "External state management"]),
                ("Performance Optimization", ["React.memo, useMemo, useCallback", "Code splitting and lazy loading", "Suspense and Error Boundaries"]),
                ("Testing and Deployment", ["Testing with React Testing Library", "CI/CD integration", "Deployment strategies"]),
            ]),
            lessons: vec![
                lesson("1-1", 1, "Getting Started with React 18", "Learn about the newest features in React 18 and set up your development environment.", "CRoujRWrILI", 15),
                lesson("1-2", 2, "TypeScript Integration in React", "How to leverage TypeScript for type-safe React development.", "30LWjhZzg50", 22),
            ],
            created_at: at(2023, 5, 15, 8, 0),
            updated_at: at(2024, 3, 10, 10, 15),
        },
        Course {
            id: CourseId::new("3"),
            title: "Data Science Fundamentals with Python".into(),
            description: "Learn essential data science skills with Python, from data analysis to visualization and machine learning.".into(),
            long_description: Some("Work with data using Python: Pandas for manipulation, Matplotlib and Seaborn for visualization, statistics, and an introduction to machine learning with scikit-learn through hands-on projects.".into()),
            author: author("3", "Emily Rodriguez", 774_909),
            thumbnail: thumbnail(577_585),
            rating: 4.9,
            total_ratings: 1876,
            enrollments: 6542,
            categories: vec![CategoryId::new("data-science"), CategoryId::new("ai-ml")],
            syllabus: syllabus(&[
                ("Python for Data Science", ["Python basics for data science", "NumPy for numerical computing", "Data structures and algorithms"]),
                ("Data Analysis with Pandas", ["Data manipulation and cleaning", "Exploratory data analysis", "Working with different data formats"]),
                ("Data Visualization", ["Matplotlib and Seaborn", "Interactive visualizations", "Storytelling with data"]),
                ("Statistical Analysis", ["Descriptive statistics", "Inferential statistics", "Hypothesis testing"]),
                ("Introduction to Machine Learning", ["Supervised learning algorithms", "Unsupervised learning", "Model evaluation and validation"]),
            ]),
            lessons: vec![
                lesson("3-1", 1, "Introduction to Python for Data Science", "Get started with Python and its data science libraries.", "LHBE6Q9XlzI", 24),
                lesson("3-2", 2, "Data Manipulation with Pandas", "Learn how to clean, transform, and analyze data with Pandas.", "vmEHCJofslg", 35),
                lesson("3-3", 3, "Data Visualization Best Practices", "Create effective visualizations to communicate insights from data.", "UO98lJQ3QGI", 28),
                lesson("3-4", 4, "Introduction to Machine Learning Algorithms", "Understand the basics of machine learning and implement your first models.", "q7K_BgK-6Go", 40),
            ],
            created_at: at(2023, 9, 5, 11, 45),
            updated_at: at(2024, 1, 18, 16, 30),
        },
        Course {
            id: CourseId::new("4"),
            title: "Full-Stack JavaScript Development".into(),
            description: "Build complete web applications with modern JavaScript, Node.js, Express, and MongoDB.".into(),
            long_description: Some("Build modern web applications front to back: core JavaScript, responsive frontends, Node.js and Express APIs, MongoDB persistence, authentication and deployment.".into()),
            author: author("4", "David Williams", 614_810),
            thumbnail: thumbnail(270_348),
            rating: 4.6,
            total_ratings: 1432,
            enrollments: 5128,
            categories: vec![CategoryId::new("web-dev")],
            syllabus: syllabus(&[
                ("Modern JavaScript", ["ES6+ features", "Asynchronous JavaScript", "JavaScript modules"]),
                ("Frontend Development", ["HTML5 and CSS3", "Responsive design", "Frontend frameworks"]),
                ("Backend with Node.js", ["Node.js fundamentals", "Express.js framework", "RESTful API design"]),
                ("Database Integration", ["MongoDB fundamentals", "Mongoose ODM", "Data modeling"]),
                ("Authentication and Deployment", ["JWT authentication", "Security best practices", "Deployment to cloud platforms"]),
            ]),
            lessons: vec![
                lesson("4-1", 1, "Modern JavaScript Essentials", "Master essential JavaScript features for full-stack development.", "hdI2bqOjy3c", 22),
                lesson("4-2", 2, "Building APIs with Node.js and Express", "Learn how to create robust backends with Node.js and Express.", "lY6icfhap2o", 30),
                lesson("4-3", 3, "MongoDB and Mongoose for Data Persistence", "Store and manipulate data using MongoDB and Mongoose ODM.", "DZBGEVgL2eE", 28),
                lesson("4-4", 4, "Authentication and Authorization", "Implement secure user authentication in your applications.", "mbsmsi7l3r4", 35),
            ],
            created_at: at(2023, 6, 10, 13, 20),
            updated_at: at(2024, 3, 5, 9, 50),
        },
        Course {
            id: CourseId::new("5"),
            title: "iOS App Development with Swift".into(),
            description: "Create native iOS applications using Swift and the latest Apple frameworks.".into(),
            long_description: Some("Build applications for Apple's ecosystem: Swift fundamentals, UIKit and SwiftUI, data persistence, networking, authentication, push notifications and App Store publishing.".into()),
            author: author("5", "Jennifer Kim", 1_520_760),
            thumbnail: thumbnail(92_904),
            rating: 4.7,
            total_ratings: 986,
            enrollments: 3214,
            categories: vec![CategoryId::new("mobile-dev")],
            syllabus: syllabus(&[
                ("Swift Fundamentals", ["Swift syntax and language features", "Object-oriented programming in Swift", "Protocol-oriented programming"]),
                ("iOS UI Development", ["UIKit fundamentals", "SwiftUI introduction", "Responsive layouts"]),
                ("iOS Architecture", ["MVC, MVVM patterns", "Navigation and app lifecycle", "Memory management"]),
                ("Data and Networking", ["Core Data", "RESTful API integration", "JSON parsing"]),
                ("Advanced iOS Features", ["Authentication and security", "Push notifications", "App publishing process"]),
            ]),
            lessons: vec![
                lesson("5-1", 1, "Introduction to Swift Programming", "Learn the fundamentals of Swift programming language.", "comQ1-x2a1Q", 20),
                lesson("5-2", 2, "Building User Interfaces with UIKit", "Create responsive and attractive user interfaces with UIKit.", "iqpAP7s3b-8", 32),
                lesson("5-3", 3, "SwiftUI Essentials", "Learn the new declarative UI framework for Apple platforms.", "bqu6BquVi2M", 28),
                lesson("5-4", 4, "Networking and API Integration", "Connect your iOS apps to backend services and APIs.", "Tc4op4tQSgg", 25),
            ],
            created_at: at(2023, 8, 15, 10, 10),
            updated_at: at(2024, 2, 28, 15, 40),
        },
        Course {
            id: CourseId::new("6"),
            title: "AWS Cloud Architect Certification".into(),
            description: "Master AWS services and architecture patterns to design scalable cloud solutions.".into(),
            long_description: Some("Prepare for the AWS Certified Solutions Architect exam while learning practical architecture: compute, storage, databases, networking, security controls and cost optimization.".into()),
            author: author("6", "Robert Johnson", 1_681_010),
            thumbnail: thumbnail(1_148_820),
            rating: 4.8,
            total_ratings: 1532,
            enrollments: 4865,
            categories: vec![CategoryId::new("cloud")],
            syllabus: syllabus(&[
                ("AWS Fundamentals", ["AWS global infrastructure", "AWS service categories", "Account management and security"]),
                ("Compute and Networking", ["EC2, Lambda, ECS", "VPC design", "Load balancing and DNS"]),
                ("Storage and Databases", ["S3, EBS, EFS", "RDS, DynamoDB, Aurora", "Data migration strategies"]),
                ("Security and Compliance", ["IAM best practices", "Security services", "Compliance frameworks"]),
                ("Architecture Best Practices", ["High availability", "Cost optimization", "Operational excellence"]),
            ]),
            lessons: vec![
                lesson("6-1", 1, "AWS Services Overview", "Get familiar with the core AWS services and their use cases.", "JIbIYCM48to", 25),
                lesson("6-2", 2, "Designing Highly Available Architectures", "Learn principles for building resilient systems on AWS.", "CTPdoPRwC-I", 35),
                lesson("6-3", 3, "Security Best Practices in AWS", "Implement robust security controls in your AWS environments.", "9TwkMMogojY", 30),
                lesson("6-4", 4, "Cost Optimization Strategies", "Optimize your AWS spending without compromising performance.", "yD8zbuML8p4", 28),
            ],
            created_at: at(2023, 4, 20, 14, 15),
            updated_at: at(2024, 1, 30, 11, 25),
        },
    ]
}

#[must_use]
pub fn catalog() -> Catalog {
    Catalog::new(courses(), categories())
}

#[must_use]
pub fn demo_profile() -> UserProfile {
    UserProfile {
        id: UserId::new("1"),
        name: "Alex Johnson".into(),
        email: "alex@example.com".into(),
        avatar: "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=150".into(),
    }
}

/// The demo account's history relative to `now`: one week into the React
/// course with the first lesson done, plus a note on it.
#[must_use]
pub fn demo_history(catalog: &Catalog, now: DateTime<Utc>) -> (Vec<EnrolledCourse>, Vec<UserNote>) {
    let course_id = CourseId::new("1");
    let total_lessons = catalog
        .course(&course_id)
        .map_or(0, |course| course.lessons.len());

    let enrollment = EnrolledCourse::with_history(
        course_id.clone(),
        now - Duration::days(7),
        [LessonId::new("1-1")],
        Some(LessonId::new("1-2")),
        45,
        total_lessons,
    );

    let notes = NoteContent::parse(
        "Important concepts covered in this lesson: component lifecycle and hooks.",
    )
    .map(|content| {
        UserNote::new(
            NoteId::new("1"),
            course_id,
            LessonId::new("1-1"),
            content,
            now - Duration::days(5),
        )
    })
    .into_iter()
    .collect();

    (vec![enrollment], notes)
}
