use std::cell::RefCell;
use std::rc::Rc;

use chart_facade::ChartError;
use chart_facade::api::{
    ChartOptions, ChartOptionsUpdate, ChartSession, ConfigurationDocument, EMPTY_STATE_DOCUMENT,
    ENGINE_CREATE_FLAG,
};
use chart_facade::core::{
    ChartData, ChartKind, ColumnDescriptor, ColumnType, Row, StaticMapDefinitions,
};
use chart_facade::render::{EngineCall, NullCanvas, NullEngine, NullEngineHandle};
use indexmap::IndexMap;
use serde_json::{Value, json};

fn data() -> ChartData {
    ChartData::new(vec![
        ColumnDescriptor::new("country", ColumnType::Text, "region"),
        ColumnDescriptor::new("visits", ColumnType::Numeric, "value"),
    ])
    .with_row(Row::keyed([("country", json!("FR")), ("visits", json!(10))]))
    .with_row(Row::keyed([("country", json!("DE")), ("visits", json!(7))]))
}

fn maps() -> StaticMapDefinitions {
    StaticMapDefinitions::new()
        .with_definition(ChartKind::WorldMap, json!({"id": "world"}))
        .expect("world map")
}

fn session(kind: ChartKind, options: ChartOptions) -> ChartSession<NullEngineHandle> {
    let mut factory = NullEngine::default();
    ChartSession::new(&mut factory, kind, data(), options, maps()).expect("session init")
}

fn packet_json(session: &ChartSession<NullEngineHandle>) -> Value {
    serde_json::from_str(session.packet()).expect("packet json")
}

#[test]
fn construction_normalizes_data_and_creates_engine() {
    let mut factory = NullEngine::default();
    let options = ChartOptions::new().with_size(640, 320);
    let session = ChartSession::new(&mut factory, ChartKind::Column, data(), options, maps())
        .expect("session init");

    assert_eq!(factory.created, 1);
    assert!(session.data().is_canonical());
    assert_eq!(
        session.data().rows[0],
        Row::ordered([json!("FR"), json!(10)])
    );

    let handle = session.handle();
    assert_eq!(handle.initial_config, session.packet());
    assert_eq!(handle.initial_state, EMPTY_STATE_DOCUMENT);
    assert!(!handle.use_engine_defaults);
    assert_eq!(handle.flag, ENGINE_CREATE_FLAG);
    assert_eq!(
        *session.canvas(),
        NullCanvas {
            width: 640,
            height: 320
        }
    );
    assert!(handle.calls.is_empty());
}

#[test]
fn construction_rejects_zero_sized_viewport() {
    let mut factory = NullEngine::default();
    let options = ChartOptions::new().with_size(0, 200);
    let result = ChartSession::new(&mut factory, ChartKind::Line, data(), options, maps());

    assert!(matches!(
        result,
        Err(ChartError::InvalidViewport {
            width: 0,
            height: 200
        })
    ));
    assert_eq!(factory.created, 0);
}

#[test]
fn render_honors_animate_flag() {
    let mut animated = session(ChartKind::Line, ChartOptions::new());
    animated.render().expect("render");
    assert_eq!(
        animated.handle().calls,
        vec![EngineCall::Draw {
            skip_animation: false,
            flag: false
        }]
    );

    let mut still = session(ChartKind::Line, ChartOptions::new().with_animate(false));
    still.render().expect("render");
    assert_eq!(
        still.handle().calls,
        vec![EngineCall::Draw {
            skip_animation: true,
            flag: false
        }]
    );
}

#[test]
fn resize_delegates_and_tracks_size() {
    let mut session = session(ChartKind::Bar, ChartOptions::new());
    session.resize(1024, 768).expect("resize");

    assert_eq!(
        session.handle().calls,
        vec![EngineCall::Resize {
            width: 1024,
            height: 768
        }]
    );
    assert_eq!(session.options().width, 1024);
    assert_eq!(session.options().height, 768);

    assert!(matches!(
        session.resize(10, 0),
        Err(ChartError::InvalidViewport { .. })
    ));
}

#[test]
fn update_replaces_data_merges_options_and_pushes_full_packet() {
    let mut session = session(ChartKind::Column, ChartOptions::new().with_animate(false));
    let next = ChartData::new(data().columns).with_row(Row::ordered([json!("IT"), json!(3)]));

    session
        .update(
            next,
            Some(ChartOptionsUpdate::new().with_colors(["#101010", "#202020"])),
        )
        .expect("update");

    assert_eq!(session.handle().update_count(), 1);
    assert_eq!(
        session.handle().calls[0],
        EngineCall::UpdateConfig {
            config: session.packet().to_owned(),
            skip_animation: true,
        }
    );

    let packet = packet_json(&session);
    assert_eq!(packet["datasources"]["default"]["rows"], json!([["IT", 3]]));
    assert_eq!(
        packet["palette"]["colorRanges"][0]["values"],
        json!(["101010", "202020"])
    );
    assert_eq!(session.options().colors.as_ref().map(Vec::len), Some(2));
}

#[test]
fn identical_updates_produce_identical_packets() {
    let mut session = session(ChartKind::Pie, ChartOptions::new().with_colors(["#ff00ff"]));

    session.update(data(), None).expect("first update");
    let first = session.packet().to_owned();
    session.update(data(), None).expect("second update");

    assert_eq!(session.packet(), first);
    assert_eq!(session.handle().update_count(), 2);
}

#[test]
fn set_chart_properties_rebuilds_with_current_data() {
    let mut session = session(ChartKind::Area, ChartOptions::new());
    let mut properties = IndexMap::new();
    properties.insert("legend".to_owned(), json!({"position": "bottom"}));

    session
        .set_chart_properties(properties.clone())
        .expect("set properties");

    let packet = packet_json(&session);
    assert_eq!(
        packet["components"]["graph"]["overrides"],
        json!({"legend": {"position": "bottom"}})
    );
    assert_eq!(packet["datasources"]["default"]["numRows"], 2);
    assert_eq!(session.options().properties, Some(properties));
    assert_eq!(session.handle().update_count(), 1);
}

#[test]
fn reset_color_palette_on_map_kind_drops_palette() {
    let mut session = session(
        ChartKind::WorldMap,
        ChartOptions::new().with_colors(["#aa0000", "#00aa00"]),
    );
    assert!(packet_json(&session).get("palette").is_some());

    session.reset_color_palette().expect("reset palette");

    let packet = packet_json(&session);
    let object = packet.as_object().expect("packet object");
    assert!(!object.contains_key("palette"));
    assert!(packet["components"].get("map").is_some());
    assert!(packet["components"].get("graph").is_none());
    assert_eq!(packet["maps"], json!({"id": "world"}));
    assert!(session.options().colors.is_none());
}

#[test]
fn set_chart_kind_switches_component_variant() {
    let mut session = session(ChartKind::Column, ChartOptions::new());
    session
        .set_chart_kind(ChartKind::WorldMap)
        .expect("switch to map");

    let document = session.document().expect("document");
    assert_eq!(session.kind(), ChartKind::WorldMap);
    assert!(document.components.map().is_some());
    assert!(document.maps.is_some());
}

#[test]
fn failed_rebuild_keeps_previous_configuration() {
    let mut session = session(ChartKind::Column, ChartOptions::new());
    let before = session.packet().to_owned();

    let err = session
        .set_chart_kind(ChartKind::UsaMap)
        .expect_err("no usa definition");
    assert!(matches!(err, ChartError::UnsupportedChartKind { .. }));

    let bad = ChartData::new(data().columns).with_row(Row::ordered([json!("ES")]));
    assert!(matches!(
        session.update(bad, None),
        Err(ChartError::InvalidChartData(_))
    ));

    assert_eq!(session.kind(), ChartKind::Column);
    assert_eq!(session.packet(), before);
    assert_eq!(session.handle().update_count(), 0);
}

#[test]
fn dispose_releases_the_handle() {
    let session = session(ChartKind::Donut, ChartOptions::new());
    let mut handle = session.dispose().expect("dispose");

    assert!(handle.disposed);
    assert_eq!(handle.calls, vec![EngineCall::Dispose]);
    assert!(matches!(
        chart_facade::render::EngineHandle::draw(&mut handle, false, false),
        Err(ChartError::Engine(_))
    ));
}

#[test]
fn packet_decodes_into_document() {
    let session = session(ChartKind::Scatter, ChartOptions::new());
    let decoded = ConfigurationDocument::from_packet_str(session.packet()).expect("decode");
    assert_eq!(decoded.kind(), ChartKind::Scatter);
    assert_eq!(session.document().expect("document"), decoded);
}

#[test]
fn plugins_observe_lifecycle_events() {
    use chart_facade::extensions::{SessionContext, SessionEvent, SessionPlugin};

    struct Recorder {
        events: Rc<RefCell<Vec<(SessionEvent, SessionContext)>>>,
    }

    impl SessionPlugin for Recorder {
        fn id(&self) -> &str {
            "recorder"
        }

        fn on_event(&mut self, event: SessionEvent, context: SessionContext) {
            self.events.borrow_mut().push((event, context));
        }
    }

    let events = Rc::new(RefCell::new(Vec::new()));
    let mut session = session(ChartKind::Line, ChartOptions::new());
    session
        .register_plugin(Box::new(Recorder {
            events: Rc::clone(&events),
        }))
        .expect("register");
    assert!(
        session
            .register_plugin(Box::new(Recorder {
                events: Rc::clone(&events),
            }))
            .is_err()
    );
    assert_eq!(session.plugin_count(), 1);
    assert!(session.has_plugin("recorder"));

    session.render().expect("render");
    session.resize(300, 200).expect("resize");
    session.update(data(), None).expect("update");

    let recorded = events.borrow();
    assert_eq!(recorded.len(), 3);
    assert_eq!(
        recorded[0].0,
        SessionEvent::Rendered {
            skip_animation: false
        }
    );
    assert_eq!(
        recorded[1].0,
        SessionEvent::Resized {
            width: 300,
            height: 200
        }
    );
    assert_eq!(
        recorded[2].0,
        SessionEvent::ConfigUpdated {
            packet_len: session.packet().len()
        }
    );
    assert_eq!(recorded[2].1.num_rows, 2);
    assert_eq!(recorded[2].1.width, 300);
    drop(recorded);

    assert!(session.unregister_plugin("recorder"));
    assert!(!session.unregister_plugin("recorder"));
}
