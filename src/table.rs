use crate::models::fields::{FieldSet, OptionalField};
use crate::models::trip::TripRecord;

/// The pipeline's working unit: an ordered collection of trips plus
/// the capability set of optional columns the source file provides.
///
/// Tables are values. Filtering produces a new table; nothing in the
/// pipeline mutates one after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    trips: Vec<TripRecord>,
    fields: FieldSet,
}

impl TripTable {
    pub fn new(trips: Vec<TripRecord>, fields: FieldSet) -> Self {
        Self { trips, fields }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TripRecord> {
        self.trips.iter()
    }

    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    pub fn fields(&self) -> FieldSet {
        self.fields
    }

    /// Whether the source file carries the given optional column.
    pub fn has(&self, field: OptionalField) -> bool {
        self.fields.has(field)
    }
}
