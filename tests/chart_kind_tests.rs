use chart_facade::ChartError;
use chart_facade::core::{ChartCategory, ChartKind, StaticMapDefinitions};
use serde_json::json;

#[test]
fn map_kinds_are_exactly_the_geographic_variants() {
    let map_kinds: Vec<ChartKind> = ChartKind::ALL
        .into_iter()
        .filter(|kind| kind.is_map_kind())
        .collect();

    assert_eq!(
        map_kinds,
        vec![
            ChartKind::WorldMap,
            ChartKind::UsaMap,
            ChartKind::CanadaMap,
            ChartKind::EuropeMap,
        ]
    );
    for kind in ChartKind::ALL {
        assert_eq!(
            kind.category() == ChartCategory::Map,
            kind.is_map_kind(),
            "{kind}"
        );
    }
}

#[test]
fn tags_roundtrip_through_from_str_and_serde() {
    for kind in ChartKind::ALL {
        let parsed: ChartKind = kind.as_str().parse().expect("known tag");
        assert_eq!(parsed, kind);

        let encoded = serde_json::to_value(kind).expect("serialize kind");
        assert_eq!(encoded, json!(kind.as_str()));
    }
    assert_eq!(ChartKind::StackedColumn.to_string(), "stacked-column");
}

#[test]
fn unknown_tag_is_rejected() {
    let err = "radar".parse::<ChartKind>().expect_err("unknown tag");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("radar")));
}

#[test]
fn static_map_definitions_only_accept_map_kinds() {
    let mut definitions = StaticMapDefinitions::new();
    assert!(definitions.is_empty());

    let err = definitions
        .register(ChartKind::Line, json!({}))
        .expect_err("graph kind has no map definition");
    assert!(matches!(
        err,
        ChartError::UnsupportedChartKind {
            kind: ChartKind::Line
        }
    ));

    definitions
        .register(ChartKind::EuropeMap, json!({"id": "europe"}))
        .expect("map kind");
    definitions
        .register(ChartKind::EuropeMap, json!({"id": "europe-v2"}))
        .expect("replace definition");
    assert_eq!(definitions.len(), 1);
    assert!(definitions.contains(ChartKind::EuropeMap));
    assert!(!definitions.contains(ChartKind::UsaMap));
}
