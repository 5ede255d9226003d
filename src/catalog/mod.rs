//! Content Catalog: fixed site content served read-only.
//!
//! A [`Catalog`] is built once at startup and shared by every request.
//! Nothing in it changes for the lifetime of the process.

mod seed;
pub mod types;

use crate::error::ApiError;

pub use types::{
    AvailableTimes, BlogPost, BlogPostStatus, CaseStudy, Service, Testimonial, TimeSlot,
};

/// Read-only collection of site content.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    testimonials: Vec<Testimonial>,
    case_studies: Vec<CaseStudy>,
    blog_posts: Vec<BlogPost>,
    services: Vec<Service>,
    available_times: AvailableTimes,
}

impl Catalog {
    /// Catalog holding the site's shipped content.
    pub fn seeded() -> Self {
        Self::new(
            seed::testimonials(),
            seed::case_studies(),
            seed::blog_posts(),
            seed::services(),
        )
    }

    /// Catalog over the given collections. Time slots are always the
    /// nine hourly [`TimeSlot`] labels.
    pub fn new(
        testimonials: Vec<Testimonial>,
        case_studies: Vec<CaseStudy>,
        blog_posts: Vec<BlogPost>,
        services: Vec<Service>,
    ) -> Self {
        Self {
            testimonials,
            case_studies,
            blog_posts,
            services,
            available_times: AvailableTimes {
                times: TimeSlot::labels(),
            },
        }
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.case_studies
    }

    /// Case study whose id equals `id` exactly.
    pub fn case_study(&self, id: &str) -> Result<&CaseStudy, ApiError> {
        self.case_studies
            .iter()
            .find(|cs| cs.id == id)
            .ok_or_else(|| ApiError::NotFound("Case study not found".to_string()))
    }

    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn available_times(&self) -> &AvailableTimes {
        &self.available_times
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_collections_are_populated() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.testimonials().len(), 5);
        assert_eq!(catalog.case_studies().len(), 3);
        assert_eq!(catalog.blog_posts().len(), 3);
        assert_eq!(catalog.services().len(), 5);
        assert!(catalog.testimonials().iter().all(|t| t.rating == 5));
        assert!(catalog
            .blog_posts()
            .iter()
            .all(|p| p.status == BlogPostStatus::ComingSoon));
    }

    #[test]
    fn case_study_lookup_is_exact() {
        let catalog = Catalog::seeded();

        let cs = catalog.case_study("cs1").unwrap();
        assert_eq!(cs.title, "AI-Powered Customer Service Automation");
        assert_eq!(cs.results.len(), 4);

        assert!(catalog.case_study("does-not-exist").is_err());
        assert!(catalog.case_study("CS1").is_err());
        assert!(catalog.case_study(" cs1").is_err());
    }

    #[test]
    fn available_times_are_distinct() {
        let catalog = Catalog::seeded();
        let times = &catalog.available_times().times;

        let mut unique = times.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(times.len(), 9);
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn ids_are_unique_within_each_collection() {
        let catalog = Catalog::seeded();
        let mut ids: Vec<_> = catalog.case_studies().iter().map(|c| c.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.case_studies().len());

        let mut ids: Vec<_> = catalog.services().iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.services().len());
    }
}
