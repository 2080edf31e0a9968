// crates/worldmap-core/src/geometry.rs

//! # Geometry Conversion and Flattening
//!
//! Raw features -> [`CountryGeometry`] -> one [`GeoPoint`] per ring.
//!
//! Both geometry kinds are reduced to outer rings: a `Polygon` keeps its
//! first ring, a `MultiPolygon` keeps the outer ring of each member
//! polygon in order. Ring centroids are plain arithmetic means of the
//! vertex coordinates, not area-weighted; they only need to sit inside
//! the ring's bounding box to place a marker.

use crate::error::{MapError, Result};
use crate::model::{CountryGeometry, GeoPoint, Ring};
use crate::raw::{RawFeature, RawFeatureCollection};

/// Converts parsed GeoJSON features into the domain model.
///
/// Fails with [`MapError::MalformedGeometry`] when a feature's geometry
/// tag is neither `Polygon` nor `MultiPolygon`, when the coordinate
/// nesting does not match the tag, or when any retained ring is empty.
pub fn from_raw(raw: RawFeatureCollection) -> Result<Vec<CountryGeometry>> {
    raw.features.into_iter().map(feature_to_geometry).collect()
}

fn feature_to_geometry(feature: RawFeature) -> Result<CountryGeometry> {
    let name = feature.properties.name;

    let rings = match feature.geometry.kind.as_str() {
        "Polygon" => {
            let polygon = decode_polygon(&name, feature.geometry.coordinates)?;
            vec![outer_ring(&name, polygon)?]
        }
        "MultiPolygon" => {
            let polygons: Vec<Vec<Vec<Vec<f64>>>> =
                serde_json::from_value(feature.geometry.coordinates).map_err(|e| {
                    malformed(&name, format!("multipolygon coordinates: {e}"))
                })?;
            polygons
                .into_iter()
                .map(|polygon| outer_ring(&name, decode_positions(&name, polygon)?))
                .collect::<Result<Vec<Ring>>>()?
        }
        other => {
            return Err(malformed(&name, format!("unsupported geometry kind '{other}'")));
        }
    };

    Ok(CountryGeometry {
        name,
        id: feature.id,
        rings,
    })
}

fn decode_polygon(name: &str, coordinates: serde_json::Value) -> Result<Vec<Ring>> {
    let positions: Vec<Vec<Vec<f64>>> = serde_json::from_value(coordinates)
        .map_err(|e| malformed(name, format!("polygon coordinates: {e}")))?;
    decode_positions(name, positions)
}

/// Checks every position has at least lon and lat; extra components
/// (altitude) are dropped.
fn decode_positions(name: &str, rings: Vec<Vec<Vec<f64>>>) -> Result<Vec<Ring>> {
    rings
        .into_iter()
        .map(|ring| {
            ring.into_iter()
                .map(|pos| match pos.as_slice() {
                    [lng, lat, ..] => Ok([*lng, *lat]),
                    _ => Err(malformed(name, "position with fewer than 2 components".into())),
                })
                .collect::<Result<Ring>>()
        })
        .collect()
}

fn outer_ring(name: &str, mut polygon: Vec<Ring>) -> Result<Ring> {
    if polygon.is_empty() {
        return Err(malformed(name, "polygon has no rings".into()));
    }
    let ring = polygon.swap_remove(0);
    if ring.is_empty() {
        return Err(malformed(name, "empty ring".into()));
    }
    Ok(ring)
}

fn malformed(name: &str, reason: String) -> MapError {
    MapError::MalformedGeometry {
        name: name.to_string(),
        reason,
    }
}

/// Explodes geometries into one representative point per ring.
///
/// A `Polygon` country yields exactly one point; a `MultiPolygon` with k
/// outer rings yields k points, preserving ring order.
pub fn flatten(geometries: &[CountryGeometry]) -> Result<Vec<GeoPoint>> {
    let mut points = Vec::new();
    for geometry in geometries {
        for ring in &geometry.rings {
            let (lng, lat) = ring_centroid(ring).ok_or_else(|| MapError::MalformedGeometry {
                name: geometry.name.clone(),
                reason: "empty ring".into(),
            })?;
            points.push(GeoPoint {
                country: geometry.name.clone(),
                lng,
                lat,
            });
        }
    }
    Ok(points)
}

/// Arithmetic mean of the ring's vertices. `None` for an empty ring.
pub fn ring_centroid(ring: &Ring) -> Option<(f64, f64)> {
    if ring.is_empty() {
        return None;
    }
    let n = ring.len() as f64;
    let (sum_lng, sum_lat) = ring
        .iter()
        .fold((0.0, 0.0), |(lng, lat), pos| (lng + pos[0], lat + pos[1]));
    Some((sum_lng / n, sum_lat / n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collection(json: &str) -> RawFeatureCollection {
        serde_json::from_str(json).expect("fixture parses")
    }

    const SQUARE: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "id": "AAA",
            "properties": {"name": "Squareland"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]]
            }
        }]
    }"#;

    const TWO_ISLANDS: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "id": "BBB",
            "properties": {"name": "Islandia"},
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [
                    [[[10.0, 10.0], [12.0, 10.0], [11.0, 13.0]]],
                    [[[-10.0, -10.0], [-12.0, -10.0], [-11.0, -13.0]]]
                ]
            }
        }]
    }"#;

    #[test]
    fn polygon_keeps_one_outer_ring() {
        let geometries = from_raw(collection(SQUARE)).unwrap();
        assert_eq!(geometries.len(), 1);
        assert_eq!(geometries[0].name, "Squareland");
        assert_eq!(geometries[0].id.as_deref(), Some("AAA"));
        assert_eq!(geometries[0].rings.len(), 1);
        assert_eq!(geometries[0].rings[0].len(), 4);
    }

    #[test]
    fn multipolygon_keeps_outer_ring_per_member_in_order() {
        let geometries = from_raw(collection(TWO_ISLANDS)).unwrap();
        assert_eq!(geometries[0].rings.len(), 2);
        assert_eq!(geometries[0].rings[0][0], [10.0, 10.0]);
        assert_eq!(geometries[0].rings[1][0], [-10.0, -10.0]);
    }

    #[test]
    fn polygon_drops_hole_rings() {
        let geometries = from_raw(collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "properties": {"name": "Donutia"},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [
                            [[0.0, 0.0], [8.0, 0.0], [8.0, 8.0], [0.0, 8.0]],
                            [[3.0, 3.0], [5.0, 3.0], [5.0, 5.0], [3.0, 5.0]]
                        ]
                    }
                }]
            }"#,
        ))
        .unwrap();
        assert_eq!(geometries[0].rings.len(), 1);
    }

    #[test]
    fn unknown_geometry_kind_is_malformed() {
        let err = from_raw(collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "properties": {"name": "Pointland"},
                    "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
                }]
            }"#,
        ))
        .unwrap_err();
        match err {
            MapError::MalformedGeometry { name, reason } => {
                assert_eq!(name, "Pointland");
                assert!(reason.contains("Point"));
            }
            other => panic!("expected MalformedGeometry, got {other:?}"),
        }
    }

    #[test]
    fn empty_ring_is_malformed() {
        let err = from_raw(collection(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "properties": {"name": "Nowhere"},
                    "geometry": {"type": "Polygon", "coordinates": [[]]}
                }]
            }"#,
        ))
        .unwrap_err();
        assert!(matches!(err, MapError::MalformedGeometry { .. }));
    }

    #[test]
    fn flatten_emits_one_point_per_ring() {
        let mut geometries = from_raw(collection(SQUARE)).unwrap();
        geometries.extend(from_raw(collection(TWO_ISLANDS)).unwrap());

        let points = flatten(&geometries).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].country, "Squareland");
        assert_eq!(points[1].country, "Islandia");
        assert_eq!(points[2].country, "Islandia");
    }

    #[test]
    fn centroid_is_the_vertex_mean_and_inside_the_bounding_box() {
        let geometries = from_raw(collection(SQUARE)).unwrap();
        let points = flatten(&geometries).unwrap();
        assert_eq!((points[0].lng, points[0].lat), (2.0, 2.0));

        let islands = from_raw(collection(TWO_ISLANDS)).unwrap();
        let points = flatten(&islands).unwrap();
        for (ring, point) in islands[0].rings.iter().zip(&points) {
            let min_lng = ring.iter().map(|p| p[0]).fold(f64::INFINITY, f64::min);
            let max_lng = ring.iter().map(|p| p[0]).fold(f64::NEG_INFINITY, f64::max);
            let min_lat = ring.iter().map(|p| p[1]).fold(f64::INFINITY, f64::min);
            let max_lat = ring.iter().map(|p| p[1]).fold(f64::NEG_INFINITY, f64::max);
            assert!(point.lng >= min_lng && point.lng <= max_lng);
            assert!(point.lat >= min_lat && point.lat <= max_lat);
        }
    }

    #[test]
    fn centroid_of_empty_ring_is_none() {
        assert_eq!(ring_centroid(&Vec::new()), None);
    }
}
