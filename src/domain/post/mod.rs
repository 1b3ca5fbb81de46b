pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewPost, Post, PostUpdate};
pub use repository::PostRepository;
pub use value_objects::{
    AuthorId, FeaturedImage, PostContent, PostExcerpt, PostId, PostSlug, PostStatus, PostTitle,
};
