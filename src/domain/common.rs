/// Identifies entities that expose a stable unique identifier.
///
/// Ids are the backend's small integers, not locally minted values; the
/// ranking lookup and detail views key on them.
pub trait Identifiable {
    fn id(&self) -> u32;
}
