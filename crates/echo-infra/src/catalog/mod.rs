//! Fixed content the feed starts from: seed posts, topics, help resources
//! and the mystery box.

mod seed;

pub use seed::{box_items, draw_box_item, more_posts, resources, seed_posts, topics};
