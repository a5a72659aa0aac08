pub mod image_sequence_feed;
pub mod synthetic_feed;
