//! The point kinds and their shared behaviour.

pub mod alert;
pub mod current;
pub mod normals;
pub mod weather;

use crate::response::error::ParseError;
use crate::types::field::{FieldSpec, FieldValue, PointKind};
use serde_json::{Map, Value};
use std::fmt::Debug;

/// A record parsed from one element of a response array.
///
/// Implemented by [`weather::WeatherPoint`], [`current::CurrentPoint`],
/// [`normals::NormalsPoint`] and [`alert::AlertPoint`].
pub trait Point: Clone + Debug {
    const KIND: PointKind;
    /// Fields every projected row carries, whatever was requested.
    const KEY_FIELDS: &'static [&'static str];
    /// Sort key. Absent values sort first.
    type Key: Ord;

    /// The field catalog, in projection order.
    fn fields() -> &'static [FieldSpec];

    /// Parses one JSON object.
    ///
    /// # Errors
    ///
    /// [`ParseError::MalformedTimestamp`] when a temporal field does not match its format.
    /// Other fields never fail: unusable values become `None`.
    fn from_object(object: &Map<String, Value>) -> Result<Self, ParseError>;

    fn ordering_key(&self) -> Self::Key;

    /// The value of a catalog field (`FieldValue::Null` when absent), or `None` for
    /// a name outside the catalog.
    fn value(&self, field: &str) -> Option<FieldValue>;

    fn has_field(name: &str) -> bool {
        Self::fields().iter().any(|spec| spec.name == name)
    }
}

/// The field catalog of a point kind.
///
/// # Examples
///
/// ```
/// use weatherbit::{field_catalog, FieldType, PointKind};
///
/// let normals = field_catalog(PointKind::Normals);
/// assert_eq!(normals[0].name, "month");
/// assert_eq!(normals[0].field_type, FieldType::Integer);
/// ```
pub fn field_catalog(kind: PointKind) -> &'static [FieldSpec] {
    match kind {
        PointKind::Weather => weather::WeatherPoint::FIELDS,
        PointKind::Current => current::CurrentPoint::FIELDS,
        PointKind::Normals => normals::NormalsPoint::FIELDS,
        PointKind::Alert => alert::AlertPoint::FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        for kind in [
            PointKind::Weather,
            PointKind::Current,
            PointKind::Normals,
            PointKind::Alert,
        ] {
            let catalog = field_catalog(kind);
            let names: HashSet<&str> = catalog.iter().map(|spec| spec.name).collect();
            assert_eq!(names.len(), catalog.len(), "{kind} catalog has duplicates");
        }
    }

    #[test]
    fn test_key_fields_are_in_the_catalog() {
        assert!(weather::WeatherPoint::KEY_FIELDS
            .iter()
            .all(|f| weather::WeatherPoint::has_field(f)));
        assert!(current::CurrentPoint::KEY_FIELDS
            .iter()
            .all(|f| current::CurrentPoint::has_field(f)));
        assert!(normals::NormalsPoint::KEY_FIELDS
            .iter()
            .all(|f| normals::NormalsPoint::has_field(f)));
        assert!(alert::AlertPoint::KEY_FIELDS
            .iter()
            .all(|f| alert::AlertPoint::has_field(f)));
    }
}
