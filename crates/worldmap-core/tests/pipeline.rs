//! End-to-end pipeline tests: files on disk -> figure.

use std::io::Write;

use worldmap_core::prelude::*;

const GEOMETRY_JSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "id": "AAA",
            "properties": {"name": "A"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]]
            }
        },
        {
            "id": "BBB",
            "properties": {"name": "B"},
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [
                    [[[10.0, 10.0], [12.0, 10.0], [11.0, 13.0]]],
                    [[[-10.0, -10.0], [-12.0, -10.0], [-11.0, -13.0]]]
                ]
            }
        },
        {
            "id": "CCC",
            "properties": {"name": "C"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[30.0, 30.0], [32.0, 30.0], [31.0, 33.0]]]
            }
        }
    ]
}"#;

const METRICS_CSV: &str = "\
Type,Year,Exposure_Mean
A,2015,10
B,2015,50
C,2015,100
C,2013,77
";

fn write_datasets(dir: &std::path::Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let geometry_path = dir.join("countries.geo.json");
    let metrics_path = dir.join("air_quality.csv");
    std::fs::File::create(&geometry_path)
        .unwrap()
        .write_all(GEOMETRY_JSON.as_bytes())
        .unwrap();
    std::fs::File::create(&metrics_path)
        .unwrap()
        .write_all(METRICS_CSV.as_bytes())
        .unwrap();
    (geometry_path, metrics_path)
}

#[test]
fn three_country_example_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let (geometry_path, metrics_path) = write_datasets(dir.path());

    let ctx =
        DashboardContext::from_paths(MapConfig::default(), geometry_path, metrics_path).unwrap();

    // Flatten: A x1, B x2 (two outer rings), C x1.
    assert_eq!(ctx.points().len(), 4);

    // Scores: A -> 9 (bin 0), B -> 47 (bin 4), C -> 95 (bin 9).
    let scored: Vec<(&str, u32, usize)> = ctx
        .scores()
        .iter()
        .map(|s| (s.country.as_str(), s.normalized, s.bin))
        .collect();
    assert_eq!(scored, vec![("A", 9, 0), ("B", 47, 4), ("C", 95, 9)]);

    let mut expected = Partition::new();
    expected.insert(0, vec!["A".to_string()]);
    expected.insert(4, vec!["B".to_string()]);
    expected.insert(9, vec!["C".to_string()]);
    assert_eq!(ctx.partition(), &expected);

    // Figure: 3 occupied bins -> 3 fill/outline pairs, 4 markers,
    // 10 legend entries.
    let figure = ctx.figure("default").unwrap();
    assert_eq!(figure.layers.len(), 6);
    assert_eq!(figure.markers.points.len(), 4);
    assert_eq!(figure.legend.len(), 10);
}

#[test]
fn style_switch_replaces_only_the_style() {
    let dir = tempfile::tempdir().unwrap();
    let (geometry_path, metrics_path) = write_datasets(dir.path());
    let ctx =
        DashboardContext::from_paths(MapConfig::default(), geometry_path, metrics_path).unwrap();

    let before = ctx.figure("default").unwrap();
    assert_eq!(before.style, "mapbox://styles/mapbox/satellite-v8");

    // Unknown key: error surfaced, previous figure still valid.
    assert!(ctx.figure("not-a-style").is_err());
    assert_eq!(ctx.figure("default").unwrap(), before);

    let after = ctx.figure("light").unwrap();
    assert_eq!(after.style, "mapbox://styles/mapbox/light-v9");
    assert_eq!(after.markers, before.markers);
    assert_eq!(after.layers, before.layers);
    assert_eq!(after.legend, before.legend);
}

#[test]
fn figure_serializes_to_consumable_json() {
    let dir = tempfile::tempdir().unwrap();
    let (geometry_path, metrics_path) = write_datasets(dir.path());
    let ctx =
        DashboardContext::from_paths(MapConfig::default(), geometry_path, metrics_path).unwrap();

    let figure = ctx.figure("default").unwrap();
    let json = serde_json::to_value(&figure).unwrap();

    assert_eq!(json["style"], "mapbox://styles/mapbox/satellite-v8");
    assert_eq!(json["camera"]["zoom"], 1.5);
    assert_eq!(json["layers"][0]["kind"], "fill");
    assert_eq!(json["layers"][1]["kind"], "outline");
    assert_eq!(json["legend"][0]["label"], "[0, 10)");
}

#[test]
fn wrong_year_aborts_startup() {
    let dir = tempfile::tempdir().unwrap();
    let (geometry_path, metrics_path) = write_datasets(dir.path());

    let config = MapConfig {
        year: 1990,
        ..MapConfig::default()
    };
    let err = DashboardContext::from_paths(config, geometry_path, metrics_path).unwrap_err();
    assert!(matches!(err, MapError::MissingYear(1990)));
}
