use crate::error::ContentError;

/// Records addressable by a unique string id.
pub trait Keyed {
    fn id(&self) -> &str;
}

/// Ordered, read-only collection of content records.
///
/// Display order is insertion order; there are no runtime insert, update, or
/// delete operations. Registries are small (tens of entries), so lookup is a
/// linear scan.
#[derive(Debug, Clone)]
pub struct Registry<T: Keyed> {
    records: Vec<T>,
}

impl<T: Keyed> Registry<T> {
    /// Build a registry, rejecting duplicate ids. `name` labels the registry
    /// in the load error.
    pub fn new(name: &'static str, records: Vec<T>) -> Result<Self, ContentError> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id() == record.id()) {
                return Err(ContentError::DuplicateId {
                    registry: name,
                    id: record.id().to_owned(),
                });
            }
        }
        Ok(Self { records })
    }

    /// First record whose id matches, if any. Never panics.
    pub fn find_by_id(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Prefix of at most `limit` records, in insertion order.
    pub fn windowed(&self, limit: usize) -> &[T] {
        &self.records[..limit.min(self.records.len())]
    }

    pub fn all(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}
