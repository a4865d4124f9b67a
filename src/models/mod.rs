pub mod tracker;
pub mod tracker_log;
pub mod user;
