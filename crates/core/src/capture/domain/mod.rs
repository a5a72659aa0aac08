pub mod camera_feed;
