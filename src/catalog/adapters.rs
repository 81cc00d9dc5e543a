//! Adapters from domain records to catalog items
//!
//! Mentor profiles and video listings are mapped onto the shared `Item` shape
//! here, at the supplier boundary, so the query engine has a single
//! filter implementation for every catalog.

use super::error::CatalogError;
use super::time::{parse_date, parse_duration};
use super::types::{Catalog, CatalogSchema, Item};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A mentor profile as listed in the mentor directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: String,
    pub name: String,
    /// Headline such as "Senior Software Engineer | Google"
    #[serde(alias = "title")]
    pub headline: String,
    pub category: String,
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    pub hourly_rate: f64,
    /// When the mentor joined; relative phrases are accepted
    #[serde(default)]
    pub joined: Option<String>,
}

impl Mentor {
    /// Map this mentor onto a catalog item
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDate` if `joined` cannot be normalized.
    pub fn to_item(&self, now: DateTime<Utc>) -> Result<Item, CatalogError> {
        let mut builder = Item::builder(&self.id)
            .title(&self.headline)
            .secondary_text(&self.name)
            .category(&self.category)
            .tags(&self.skills)
            .numeric("rating", self.rating)
            .numeric("reviews", f64::from(self.reviews))
            .numeric("hourlyRate", self.hourly_rate);

        if let Some(joined) = &self.joined {
            builder = builder.date(parse_date(joined, now)?);
        }
        Ok(builder.build())
    }
}

/// A video in the learning library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub mentor_name: String,
    /// Clock duration, `mm:ss` or `hh:mm:ss`
    pub duration: String,
    /// Publication date, absolute or relative ("2 weeks ago")
    pub date: String,
    pub category: String,
    pub rating: f64,
    pub views: u64,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    /// Map this video onto a catalog item, normalizing date and duration
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidDate` or `CatalogError::InvalidDuration`
    /// if either string cannot be normalized.
    pub fn to_item(&self, now: DateTime<Utc>) -> Result<Item, CatalogError> {
        let published = parse_date(&self.date, now)?;
        let seconds = parse_duration(&self.duration)?;

        // Counts above 2^53 lose precision; library view counts are far below.
        #[allow(clippy::cast_precision_loss)]
        let views = self.views as f64;

        Ok(Item::builder(&self.id)
            .title(&self.title)
            .secondary_text(&self.mentor_name)
            .category(&self.category)
            .tags(&self.tags)
            .numeric("rating", self.rating)
            .numeric("views", views)
            .numeric("durationSeconds", f64::from(seconds))
            .date(published)
            .build())
    }
}

/// Build a mentor directory catalog
///
/// Date sorts are offered only when every mentor has a `joined` date.
///
/// # Errors
///
/// Returns `CatalogError` if a mentor cannot be adapted or ids collide.
pub fn mentor_catalog(mentors: &[Mentor], now: DateTime<Utc>) -> Result<Catalog, CatalogError> {
    let items = mentors
        .iter()
        .map(|m| m.to_item(now))
        .collect::<Result<Vec<_>, _>>()?;
    let dated = mentors.iter().all(|m| m.joined.is_some());
    Catalog::new(CatalogSchema::mentors().with_dates(dated), items)
}

/// Build a video library catalog
///
/// # Errors
///
/// Returns `CatalogError` if a video cannot be adapted or ids collide.
pub fn video_catalog(videos: &[Video], now: DateTime<Utc>) -> Result<Catalog, CatalogError> {
    let items = videos
        .iter()
        .map(|v| v.to_item(now))
        .collect::<Result<Vec<_>, _>>()?;
    Catalog::new(CatalogSchema::videos(), items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_mentor_mapping() {
        let mentor = Mentor {
            id: "2".into(),
            name: "Michael Rodriguez".into(),
            headline: "Senior Software Engineer | Google".into(),
            category: "Software Development".into(),
            rating: 4.8,
            reviews: 87,
            skills: vec!["React".into(), "Node.js".into()],
            hourly_rate: 65.0,
            joined: None,
        };
        let item = mentor.to_item(now()).unwrap();
        assert_eq!(item.title(), "Senior Software Engineer | Google");
        assert_eq!(item.secondary_text(), "Michael Rodriguez");
        assert_eq!(item.numeric("hourlyRate"), Some(65.0));
        assert_eq!(item.numeric("reviews"), Some(87.0));
        assert!(item.has_tag("React"));
        assert!(item.date().is_none());
    }

    #[test]
    fn test_video_mapping_normalizes_date_and_duration() {
        let video = Video {
            id: "5".into(),
            title: "Building Scalable Backend Systems".into(),
            mentor_name: "David Kim".into(),
            duration: "1:24:10".into(),
            date: "5 days ago".into(),
            category: "Backend".into(),
            rating: 4.9,
            views: 765,
            tags: vec!["Backend".into()],
        };
        let item = video.to_item(now()).unwrap();
        assert_eq!(item.date(), Some(now() - Duration::days(5)));
        assert_eq!(item.numeric("durationSeconds"), Some(5050.0));
        assert_eq!(item.numeric("views"), Some(765.0));
    }

    #[test]
    fn test_video_with_bad_duration_fails() {
        let video = Video {
            id: "x".into(),
            title: "t".into(),
            mentor_name: "m".into(),
            duration: "long".into(),
            date: "today".into(),
            category: "c".into(),
            rating: 1.0,
            views: 0,
            tags: vec![],
        };
        assert!(matches!(
            video.to_item(now()),
            Err(CatalogError::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_mentor_catalog_without_join_dates_is_undated() {
        let mut mentor = Mentor {
            id: "1".into(),
            name: "Aisha Patel".into(),
            headline: "Product Management".into(),
            category: "Product Management".into(),
            rating: 4.9,
            reviews: 93,
            skills: vec![],
            hourly_rate: 150.0,
            joined: None,
        };
        let undated = mentor_catalog(std::slice::from_ref(&mentor), now()).unwrap();
        assert!(!undated.schema().has_dates());

        mentor.joined = Some("2 weeks ago".into());
        let dated = mentor_catalog(&[mentor], now()).unwrap();
        assert!(dated.schema().has_dates());
    }

    #[test]
    fn test_mentor_json_accepts_title_alias() {
        let json = r#"{"id":"1","name":"Dr. Emily Chen","title":"Data Science Expert",
            "category":"Data Science","rating":4.9,"reviews":124,
            "skills":["Python"],"hourlyRate":75}"#;
        let mentor: Mentor = serde_json::from_str(json).unwrap();
        assert_eq!(mentor.headline, "Data Science Expert");
        assert!((mentor.hourly_rate - 75.0).abs() < f64::EPSILON);
    }
}
