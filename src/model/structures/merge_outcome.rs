/// What happened to a candidate record offered to the record tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// No record existed for the chart
    Inserted,
    /// The candidate beat the stored achievement rate and replaced it in place
    Updated,
    /// The stored record was at least as good; the candidate was discarded
    Ignored
}
