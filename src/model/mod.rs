pub mod aggregation;
pub mod constants;
pub mod histogram;
pub mod rating_utils;
pub mod record_tracker;
pub mod structures;
pub mod summary;
