use adved::catalog::{Catalog, EmbeddedCatalog};
use adved::model::ActionKind;
use adved::statics;
use adved::{AdventureDocument, AdventureFormat, AdventureWorkspace};
use pretty_assertions::assert_eq;
use std::fs;

const ADVENTURE: &str = r#"// Two actions, one general
{
  name: "Bridge",
  generals: [
    { id: 1, type: "anslem", name: "Anslem", capacity: 200 },
  ],
  actions: [
    { type: "load", delay: 5 },
    {
      type: "attack",
      active: false,
      generals: [
        { id: 1, type: "anslem", name: "Anslem", capacity: 200,
          army: { recruit: 10, bowmen: 0 }, relative_coordinates: { x: 3, y: -1 } },
      ],
    },
  ],
}
"#;

#[test]
fn open_reads_json5_adventure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bridge.adv");
    fs::write(&path, ADVENTURE).unwrap();

    let doc = AdventureDocument::open(&path).unwrap();
    assert_eq!(doc.format, AdventureFormat::Json5);
    assert_eq!(doc.adventure.name, "Bridge");
    assert!(!doc.dirty);

    let actions = doc.adventure.actions();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0].kind(), ActionKind::Load);
    assert_eq!(actions[0].delay(), 5);
    assert!(actions[0].active());
    assert!(!actions[1].active());
    let general = &actions[1].generals()[0];
    assert_eq!(general.units("recruit"), Some(10));
    assert!(general.coordinates_learned());
}

#[test]
fn save_then_open_keeps_content_in_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("bridge.adv");
    fs::write(&source, ADVENTURE).unwrap();
    let mut doc = AdventureDocument::open(&source).unwrap();
    let original = doc.adventure.clone();

    for file in ["out.adv", "out.adv.gz"] {
        let target = dir.path().join(file);
        doc.mark_dirty();
        doc.save_to_path(&target).unwrap();
        assert!(!doc.dirty);

        let reopened = AdventureDocument::open(&target).unwrap();
        assert_eq!(reopened.adventure, original);
    }
    assert_eq!(doc.format, AdventureFormat::GzipJson5);
}

#[test]
fn import_json_names_adventure_after_folder() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("harbour_raid");
    fs::create_dir(&folder).unwrap();
    let path = folder.join("adventure.json");
    fs::write(
        &path,
        r#"{"generals": [], "actions": [{"type": "move", "delay": 7, "generals": []}]}"#,
    )
    .unwrap();

    let doc = AdventureDocument::import_json(&path).unwrap();
    assert_eq!(doc.adventure.name, "harbour_raid");
    assert_eq!(doc.adventure.actions()[0].kind(), ActionKind::Move);
    assert!(doc.dirty);
}

#[test]
fn failed_open_leaves_workspace_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("bridge.adv");
    let bad = dir.path().join("broken.adv");
    fs::write(&good, ADVENTURE).unwrap();
    fs::write(&bad, "{ name: \"Broken\", actions: [ { type: \"teleport\" } ] }").unwrap();

    let catalog = Catalog::load(&EmbeddedCatalog).unwrap();
    let mut ws = AdventureWorkspace::new(AdventureDocument::default(), catalog);
    ws.open(&good).unwrap();
    ws.action_click(1);

    let err = ws.open(&bad).unwrap_err();
    assert!(format!("{err:#}").contains("parsing adventure"));
    assert!(ws.open(&dir.path().join("missing.adv")).is_err());

    assert_eq!(ws.adventure().name, "Bridge");
    assert_eq!(ws.actions_panel().table().selected_row(), Some(1));
    assert_eq!(ws.actions_panel().details().detail_tabs().len(), 1);
}

#[test]
fn partial_army_loads_with_every_unit_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bridge.adv");
    fs::write(&path, ADVENTURE).unwrap();

    let mut doc = AdventureDocument::open(&path).unwrap();
    let general = doc
        .adventure
        .actions_mut()
        .get_mut(1)
        .unwrap()
        .general_mut(0)
        .unwrap();
    let keys: Vec<&str> = general.army().keys().map(String::as_str).collect();
    let expected: Vec<&str> = statics::ADV_UNITS.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, expected);
    assert_eq!(general.units("recruit"), Some(10));
    assert_eq!(general.units("militia"), Some(0));
    general.set_units("militia", 200).unwrap();
    assert_eq!(general.units("militia"), Some(200));
}

#[test]
fn over_capacity_army_fails_open_and_keeps_workspace() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("bridge.adv");
    let over = dir.path().join("over.adv");
    fs::write(&good, ADVENTURE).unwrap();
    fs::write(
        &over,
        r#"{ name: "Over", actions: [ { type: "attack", generals: [
            { id: 1, type: "anslem", capacity: 10, army: { recruit: 500 } } ] } ] }"#,
    )
    .unwrap();

    assert!(AdventureDocument::open(&over).is_err());

    let catalog = Catalog::load(&EmbeddedCatalog).unwrap();
    let mut ws = AdventureWorkspace::new(AdventureDocument::default(), catalog);
    ws.open(&good).unwrap();
    let err = ws.open(&over).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("validating adventure"));
    assert!(message.contains("recruit"));
    assert_eq!(ws.adventure().name, "Bridge");
}

#[test]
fn failed_import_leaves_workspace_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("bridge.adv");
    fs::write(&good, ADVENTURE).unwrap();
    let folder = dir.path().join("raid");
    fs::create_dir(&folder).unwrap();
    let malformed = folder.join("malformed.json");
    fs::write(&malformed, r#"{"actions": [{"type": "load",}]}"#).unwrap();
    let unknown_unit = folder.join("unknown.json");
    fs::write(
        &unknown_unit,
        r#"{"generals": [{"type": "anslem", "capacity": 5, "army": {"dragon": 1}}]}"#,
    )
    .unwrap();

    let catalog = Catalog::load(&EmbeddedCatalog).unwrap();
    let mut ws = AdventureWorkspace::new(AdventureDocument::default(), catalog);
    ws.open(&good).unwrap();
    ws.action_click(1);

    assert!(ws.import_json(&malformed).is_err());
    assert!(ws.import_json(&unknown_unit).is_err());
    assert!(ws.import_json(&folder.join("missing.json")).is_err());

    assert_eq!(ws.adventure().name, "Bridge");
    assert!(!ws.document().dirty);
    assert_eq!(ws.actions_panel().table().selected_row(), Some(1));
    assert_eq!(ws.actions_panel().details().detail_tabs().len(), 1);
}
