use uuid::Uuid;

/// Source of receipt ids.
///
/// Implementations must be callable from many threads at once without
/// coordination between callers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random (v4) UUIDs in hyphenated lowercase form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Whether `id` has the shape of an id this service hands out.
pub fn is_valid_id(id: &str) -> bool {
    Uuid::try_parse(id).is_ok()
}
