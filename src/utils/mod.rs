pub mod progress_utils;
pub mod test_utils;
pub mod tracing_utils;
