// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::posts::PostCommandService,
        ports::{time::Clock, util::SlugGenerator},
        queries::posts::PostQueryService,
    },
    domain::post::{PostRepository, services::PostSlugService},
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
}

impl ApplicationServices {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(PostSlugService::new(Arc::clone(&post_repo), slugger));

        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&post_repo),
            slug_service,
            clock,
        ));

        let post_queries = Arc::new(PostQueryService::new(post_repo));

        Self {
            post_commands,
            post_queries,
        }
    }
}
