use super::EntityMetadata;

/// Trait for aggregate roots
///
/// Declares the instance accessors and the static class metadata every
/// aggregate in the system provides.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ============================================================================
    // Instance accessors
    // ============================================================================

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Business code (e.g. "INST-0042")
    fn code(&self) -> &str;

    /// Display name of the record
    fn description(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ============================================================================
    // Class metadata (static)
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "institution")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Institution")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Institutions")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full aggregate name (e.g. "a001_institution")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
