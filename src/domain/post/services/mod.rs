// src/domain/post/services/mod.rs
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostRepository;
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};

/// Domain service responsible for producing unique slugs for posts.
pub struct PostSlugService {
    repo: Arc<dyn PostRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    /// Counter suffixes tried before falling back to a timestamp suffix.
    /// Keeps the candidate loop finite under concurrent same-title inserts.
    const MAX_COUNTER_ATTEMPTS: u64 = 100;

    pub fn new(repo: Arc<dyn PostRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self { repo, generator }
    }

    /// Derives a unique slug from `title`. When `exclude` is given, a match on
    /// that post does not count as a collision (the update case).
    pub async fn generate_unique_slug(
        &self,
        title: &PostTitle,
        exclude: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        let base = self.generator.slugify(title.as_str());
        let base = if base.is_empty() {
            format!("post-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base.clone();
        let mut counter = 0;
        loop {
            let slug = PostSlug::new(candidate)?;
            match self.repo.find_by_slug(&slug).await? {
                Some(existing) if exclude == Some(existing.id) => return Ok(slug),
                Some(_) if counter < Self::MAX_COUNTER_ATTEMPTS => {
                    counter += 1;
                    candidate = format!("{base}-{counter}");
                }
                Some(_) => break,
                None => return Ok(slug),
            }
        }

        // Counter space exhausted. A millisecond timestamp disambiguates
        // without another round of lookups.
        PostSlug::new(format!("{base}-{}", Utc::now().timestamp_millis()))
    }
}
