/// How aggregation treats records whose chart is missing from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Abort the whole aggregation with a reference integrity error
    #[default]
    Fail,
    /// Drop the record from the output and log it
    Skip
}
