use super::AggregateId;

/// Trait for records served by the back office REST API.
///
/// Carries the per-record data the dashboard needs (id, display name) and the
/// static metadata used for tab keys, labels and endpoint paths.
pub trait AggregateRoot {
    /// Record identifier type
    type Id: AggregateId;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Record id
    fn id(&self) -> &Self::Id;

    /// Human readable name of the record
    fn display_name(&self) -> &str;

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// Aggregate index in the dashboard (e.g. "a006")
    fn aggregate_index() -> &'static str;

    /// Collection name, also the REST path segment (e.g. "vehicles")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Vehicle")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Vehicles")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// REST path of the collection (e.g. "/vehicles")
    fn collection_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// REST path of a single record (e.g. "/vehicles/42")
    fn item_path(id: &Self::Id) -> String {
        format!("/{}/{}", Self::collection_name(), id.as_str())
    }
}
