//! Turns points into rows of named values.

use crate::projection::error::ProjectionError;
use crate::types::field::{FieldValue, Row};
use crate::types::points::Point;

/// Projects `points` into rows, one per point, in the same order.
///
/// * `None` or an empty list: sparse rows with every non-null catalog field.
/// * A non-empty list: dense rows with exactly the named fields, `null` included.
///
/// Both forms always carry the point kind's key fields, first.
///
/// # Errors
///
/// [`ProjectionError::UnknownField`] for a name outside the catalog. Names are checked
/// before any row is built.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use weatherbit::{project, FieldValue, Point, WeatherPoint};
///
/// let point = WeatherPoint::from_object(
///     json!({"datetime": "2024-01-01", "temp": 10}).as_object().unwrap(),
/// )
/// .unwrap();
///
/// let dense = project(&[point], Some(&["temp", "snow"])).unwrap();
/// assert_eq!(dense[0]["temp"], FieldValue::Number(10.0));
/// assert_eq!(dense[0]["snow"], FieldValue::Null);
/// assert!(dense[0].contains_key("timestamp_utc"));
/// ```
pub fn project<P: Point>(points: &[P], fields: Option<&[&str]>) -> Result<Vec<Row>, ProjectionError> {
    match fields.filter(|fields| !fields.is_empty()) {
        None => Ok(points.iter().map(sparse_row).collect()),
        Some(fields) => {
            let names = dense_columns::<P>(fields)?;
            Ok(points.iter().map(|point| dense_row(point, &names)).collect())
        }
    }
}

fn sparse_row<P: Point>(point: &P) -> Row {
    let mut row = Row::new();
    for spec in P::fields() {
        let value = point.value(spec.name).unwrap_or(FieldValue::Null);
        if !value.is_null() || P::KEY_FIELDS.contains(&spec.name) {
            row.insert(spec.name, value);
        }
    }
    row
}

/// Key fields, then the requested ones in request order, without repeats.
fn dense_columns<P: Point>(fields: &[&str]) -> Result<Vec<&'static str>, ProjectionError> {
    let mut columns: Vec<&'static str> = P::KEY_FIELDS.to_vec();
    for field in fields {
        let spec = P::fields()
            .iter()
            .find(|spec| spec.name == *field)
            .ok_or_else(|| ProjectionError::UnknownField {
                field: field.to_string(),
                kind: P::KIND,
            })?;
        if !columns.contains(&spec.name) {
            columns.push(spec.name);
        }
    }
    Ok(columns)
}

fn dense_row<P: Point>(point: &P, columns: &[&'static str]) -> Row {
    columns
        .iter()
        .map(|name| (*name, point.value(name).unwrap_or(FieldValue::Null)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::field::PointKind;
    use crate::types::points::normals::NormalsPoint;
    use crate::types::points::weather::WeatherPoint;
    use serde_json::{json, Value};

    fn weather(value: Value) -> WeatherPoint {
        WeatherPoint::from_object(value.as_object().unwrap()).unwrap()
    }

    fn points() -> Vec<WeatherPoint> {
        vec![
            weather(json!({"datetime": "2024-01-01", "temp": 10, "rh": 80})),
            weather(json!({"datetime": "2024-01-02", "temp": 11, "snow": 2.5})),
        ]
    }

    #[test]
    fn test_sparse_rows_skip_nulls() {
        let rows = project(&points(), None).unwrap();
        assert_eq!(
            rows[0].keys().copied().collect::<Vec<_>>(),
            vec!["datetime", "timestamp_utc", "timestamp_local", "temp", "rh"]
        );
        assert_eq!(
            rows[1].keys().copied().collect::<Vec<_>>(),
            vec!["datetime", "timestamp_utc", "timestamp_local", "temp", "snow"]
        );
    }

    #[test]
    fn test_empty_field_list_is_sparse() {
        let empty: &[&str] = &[];
        assert_eq!(project(&points(), Some(empty)).unwrap(), project(&points(), None).unwrap());
    }

    #[test]
    fn test_dense_rows_keep_nulls_and_keys() {
        let rows = project(&points(), Some(&["snow", "temp", "snow"])).unwrap();
        assert_eq!(
            rows[0].keys().copied().collect::<Vec<_>>(),
            vec!["datetime", "timestamp_utc", "timestamp_local", "snow", "temp"]
        );
        assert_eq!(rows[0]["snow"], FieldValue::Null);
        assert_eq!(rows[1]["snow"], FieldValue::Number(2.5));
    }

    #[test]
    fn test_unknown_field() {
        assert_eq!(
            project(&points(), Some(&["temp", "humidity"])),
            Err(ProjectionError::UnknownField {
                field: "humidity".to_string(),
                kind: PointKind::Weather
            })
        );
        // Checked up front, even with nothing to project.
        assert!(project::<WeatherPoint>(&[], Some(&["humidity"])).is_err());
    }

    #[test]
    fn test_explicit_full_list_is_a_superset_of_sparse() {
        let points = points();
        let sparse = project(&points, None).unwrap();
        let all: Vec<&str> = WeatherPoint::FIELDS.iter().map(|spec| spec.name).collect();
        let dense = project(&points, Some(all.as_slice())).unwrap();
        for (sparse_row, dense_row) in sparse.iter().zip(&dense) {
            assert_eq!(dense_row.len(), WeatherPoint::FIELDS.len());
            for (name, value) in sparse_row {
                assert_eq!(dense_row.get(name), Some(value));
            }
        }
    }

    #[test]
    fn test_projection_is_idempotent() {
        let points = points();
        assert_eq!(
            project(&points, Some(&["temp"])).unwrap(),
            project(&points, Some(&["temp"])).unwrap()
        );
        assert_eq!(project(&points, None).unwrap(), project(&points, None).unwrap());
    }

    #[test]
    fn test_normals_rows_carry_month_day_hour() {
        let point = NormalsPoint::from_object(
            json!({"month": 3, "day": 9, "temp": 4.0}).as_object().unwrap(),
        )
        .unwrap();
        let rows = project(&[point], Some(&["temp"])).unwrap();
        assert_eq!(rows[0]["month"], FieldValue::Integer(3));
        assert_eq!(rows[0]["day"], FieldValue::Integer(9));
        assert_eq!(rows[0]["hour"], FieldValue::Null);
    }
}
