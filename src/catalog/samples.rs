//! Built-in demo catalogs
//!
//! The mentor directory and learning library ship with a small static
//! catalog so the tool is usable before any catalog file is configured.

use super::adapters::{Mentor, Video, mentor_catalog, video_catalog};
use super::error::CatalogError;
use super::types::{Catalog, CatalogKind};
use chrono::{DateTime, Utc};

#[allow(clippy::too_many_arguments)]
fn mentor(
    id: &str,
    name: &str,
    headline: &str,
    category: &str,
    rating: f64,
    reviews: u32,
    skills: &[&str],
    hourly_rate: f64,
    joined: &str,
) -> Mentor {
    Mentor {
        id: id.to_string(),
        name: name.to_string(),
        headline: headline.to_string(),
        category: category.to_string(),
        rating,
        reviews,
        skills: skills.iter().map(ToString::to_string).collect(),
        hourly_rate,
        joined: Some(joined.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn video(
    id: &str,
    title: &str,
    mentor_name: &str,
    duration: &str,
    date: &str,
    category: &str,
    rating: f64,
    views: u64,
    tags: &[&str],
) -> Video {
    Video {
        id: id.to_string(),
        title: title.to_string(),
        mentor_name: mentor_name.to_string(),
        duration: duration.to_string(),
        date: date.to_string(),
        category: category.to_string(),
        rating,
        views,
        tags: tags.iter().map(ToString::to_string).collect(),
    }
}

/// Mentor directory records
#[must_use]
pub fn mentor_records() -> Vec<Mentor> {
    vec![
        mentor(
            "1",
            "Dr. Emily Chen",
            "Data Science Expert | PhD Stanford",
            "Data Science",
            4.9,
            124,
            &["Machine Learning", "Python", "Data Analysis", "Statistics"],
            75.0,
            "1 year ago",
        ),
        mentor(
            "2",
            "Michael Rodriguez",
            "Senior Software Engineer | Google",
            "Software Development",
            4.8,
            87,
            &["JavaScript", "React", "Node.js", "System Design"],
            65.0,
            "8 months ago",
        ),
        mentor(
            "3",
            "Sarah Johnson",
            "UX/UI Design Lead | 8+ years exp",
            "Design",
            4.7,
            56,
            &["UI Design", "User Research", "Figma", "Prototyping"],
            60.0,
            "3 months ago",
        ),
        mentor(
            "4",
            "James Wilson",
            "Marketing Strategy Consultant",
            "Marketing",
            4.6,
            42,
            &["Digital Marketing", "SEO", "Content Strategy", "Analytics"],
            55.0,
            "5 weeks ago",
        ),
        mentor(
            "5",
            "Aisha Patel",
            "Product Management | Ex-Amazon",
            "Product Management",
            4.9,
            93,
            &["Product Strategy", "Roadmapping", "User Stories", "Agile"],
            80.0,
            "2 weeks ago",
        ),
    ]
}

/// Learning library records
#[must_use]
pub fn video_records() -> Vec<Video> {
    vec![
        video(
            "1",
            "Getting Started with JavaScript Fundamentals",
            "Sarah Johnson, Senior Developer",
            "45:30",
            "2 weeks ago",
            "Programming",
            4.8,
            1240,
            &["JavaScript", "Beginner", "Web Development"],
        ),
        video(
            "2",
            "Advanced React Hooks and State Management",
            "Michael Chen, React Specialist",
            "1:12:45",
            "3 days ago",
            "Programming",
            4.9,
            856,
            &["React", "Advanced", "Hooks"],
        ),
        video(
            "3",
            "Data Science Essentials: Python & Pandas",
            "Dr. Lisa Wang, Data Scientist",
            "58:20",
            "1 month ago",
            "Data Science",
            4.7,
            2150,
            &["Python", "Data Science", "Pandas"],
        ),
        video(
            "4",
            "UX Design Principles for Developers",
            "Alex Rodriguez, UX Designer",
            "37:15",
            "2 weeks ago",
            "Design",
            4.6,
            980,
            &["UX", "Design", "UI"],
        ),
        video(
            "5",
            "Building Scalable Backend Systems",
            "David Kim, System Architect",
            "1:24:10",
            "5 days ago",
            "Backend",
            4.9,
            765,
            &["Architecture", "Scalability", "Backend"],
        ),
        video(
            "6",
            "Machine Learning for Beginners",
            "Dr. Emily Patel, AI Researcher",
            "52:40",
            "3 weeks ago",
            "Data Science",
            4.8,
            1850,
            &["Machine Learning", "AI", "Beginner"],
        ),
    ]
}

/// The demo mentor directory, dates measured back from `now`
///
/// # Errors
///
/// Returns `CatalogError` only if the built-in records are malformed.
pub fn mentors(now: DateTime<Utc>) -> Result<Catalog, CatalogError> {
    mentor_catalog(&mentor_records(), now)
}

/// The demo video library, dates measured back from `now`
///
/// # Errors
///
/// Returns `CatalogError` only if the built-in records are malformed.
pub fn videos(now: DateTime<Utc>) -> Result<Catalog, CatalogError> {
    video_catalog(&video_records(), now)
}

/// The demo catalog for a kind
///
/// # Errors
///
/// Returns `CatalogError` only if the built-in records are malformed.
pub fn sample(kind: CatalogKind, now: DateTime<Utc>) -> Result<Catalog, CatalogError> {
    match kind {
        CatalogKind::Mentors => mentors(now),
        CatalogKind::Videos => videos(now),
    }
}
