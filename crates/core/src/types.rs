/// Entity identifiers are random UUIDs assigned by the store.
///
/// Clients must treat them as opaque: they are neither sequential nor sortable.
pub type EntityId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh entity identifier.
pub fn new_entity_id() -> EntityId {
    uuid::Uuid::new_v4()
}
