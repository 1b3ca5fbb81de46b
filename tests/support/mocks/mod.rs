pub mod post_repo;
pub mod time;

pub use post_repo::{InMemoryPostRepo, RacingPostRepo};
pub use time::{FixedClock, SteppingClock, fixed_now};
