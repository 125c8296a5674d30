pub mod chart_record;
pub mod difficulty_level;
pub mod enriched_record;
pub mod merge_outcome;
pub mod orphan_policy;
pub mod rating_summary;
pub mod rating_tier;
