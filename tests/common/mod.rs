use rotaeno_rating::{catalog::Catalog, utils::test_utils};
use std::path::PathBuf;

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    test_utils::init_test_env();
}

pub fn test_data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_data").join(file)
}

pub fn test_data(file: &str) -> String {
    std::fs::read_to_string(test_data_path(file)).unwrap()
}

pub fn test_catalog() -> Catalog {
    Catalog::from_path(test_data_path("songs.json")).unwrap()
}
