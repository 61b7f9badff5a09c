use adved::catalog::{Catalog, GeneralArchetype};
use adved::model::{Action, ActionKind};
use adved::statics;
use adved::table::{ActionInsert, CellValue, MenuCommand, records::ACTION_COL_DELAY};
use adved::{Adventure, AdventureDocument, AdventureWorkspace, EditorInput};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn catalog() -> Arc<Catalog> {
    Catalog::from_archetypes(vec![
        GeneralArchetype {
            general_type: "anslem".to_string(),
            name: "Anslem".to_string(),
            capacity: 200,
        },
        GeneralArchetype {
            general_type: "vargus".to_string(),
            name: "Vargus".to_string(),
            capacity: 220,
        },
    ])
}

/// `["load", "attack"]` where only `attack` carries a general.
fn load_attack() -> AdventureWorkspace {
    let catalog = catalog();
    let mut attack = Action::new(ActionKind::Attack);
    attack.insert_general(0, catalog.by_type("anslem").unwrap());

    let mut adventure = Adventure::new("scenario");
    adventure.insert_action(0, Action::new(ActionKind::Load));
    adventure.insert_action(1, attack);
    adventure.insert_general(0, catalog.by_type("vargus").unwrap());
    AdventureWorkspace::new(AdventureDocument::new(adventure), catalog)
}

#[test]
fn selecting_attack_shows_its_general_then_deleting_it_leaves_append_tab() {
    let mut ws = load_attack();
    assert_eq!(
        ws.actions_panel().details().tab_labels(),
        vec![statics::EN_TAB_ADD_GENERAL]
    );

    ws.action_click(1);
    assert_eq!(
        ws.actions_panel().details().tab_labels(),
        vec!["anslem (1)", statics::EN_TAB_ADD_GENERAL]
    );

    ws.close_detail_tab(0).unwrap();
    assert!(ws.adventure().actions()[1].generals().is_empty());
    assert_eq!(
        ws.actions_panel().details().tab_labels(),
        vec![statics::EN_TAB_ADD_GENERAL]
    );
    assert!(ws.document().dirty);
}

#[test]
fn append_tab_cannot_be_closed() {
    let mut ws = load_attack();
    ws.action_click(1);
    let append = ws.actions_panel().details().append_tab_index();
    assert!(ws.close_detail_tab(append).is_err());
    assert_eq!(ws.actions_panel().details().tab_count(), 2);
    assert!(!ws.document().dirty);
}

#[test]
fn adding_from_catalog_offers_only_missing_types() {
    let mut ws = load_attack();
    ws.action_click(1);
    let offers: Vec<String> = ws
        .actions_panel()
        .details()
        .add_offers(ws.adventure().actions())
        .into_iter()
        .map(|a| a.general_type.clone())
        .collect();
    assert_eq!(offers, vec!["vargus".to_string()]);

    // Inserted at the master row index, clamped to the nested length.
    assert_eq!(ws.add_general_to_action("vargus"), Some(1));
    assert_eq!(
        ws.actions_panel().details().tab_labels(),
        vec!["anslem (1)", "vargus (2)", statics::EN_TAB_ADD_GENERAL]
    );
    assert_eq!(ws.actions_panel().details().selected_tab(), 1);
    assert_eq!(ws.add_general_to_action("vargus"), None);
}

#[test]
fn move_down_then_up_restores_order_and_details_follow() {
    let mut ws = load_attack();
    let before = ws.adventure().actions().clone();

    ws.action_click(0);
    assert!(ws.action_activate(&MenuCommand::MoveDown));
    assert_eq!(ws.actions_panel().table().selected_row(), Some(1));
    assert_eq!(ws.adventure().actions()[1].kind(), ActionKind::Load);
    assert_eq!(ws.actions_panel().details().detail_tabs().len(), 0);

    assert!(ws.action_activate(&MenuCommand::MoveUp));
    assert_eq!(ws.actions_panel().table().selected_row(), Some(0));
    assert_eq!(ws.adventure().actions(), &before);
}

#[test]
fn context_menu_on_trailing_row_offers_only_inserts() {
    let mut ws = load_attack();
    let menu = ws.action_secondary_click(2);
    assert_eq!(
        menu.labels(),
        vec![
            statics::EN_CTX_ADD_ACTION_ABOVE,
            statics::EN_CTX_ADD_ACTION_BELOW
        ]
    );
    assert!(ws.action_activate(&MenuCommand::Insert(ActionInsert::Above)));
    assert_eq!(ws.adventure().actions().len(), 3);
    assert_eq!(ws.adventure().actions()[2].kind(), ActionKind::Load);
}

#[test]
fn delay_cell_and_editor_enforce_bounds() {
    let mut ws = load_attack();
    ws.action_click(1);

    assert!(
        ws.action_write_cell(1, ACTION_COL_DELAY, CellValue::Integer(100_000_000))
            .is_err()
    );
    ws.action_write_cell(1, ACTION_COL_DELAY, CellValue::Integer(42))
        .unwrap();
    assert_eq!(ws.adventure().actions()[1].delay(), 42);

    let over = EditorInput::Units {
        key: "militia".to_string(),
        value: 201,
    };
    assert!(ws.apply_editor_input(0, over).is_err());
    let ok = EditorInput::Units {
        key: "militia".to_string(),
        value: 200,
    };
    ws.apply_editor_input(0, ok).unwrap();
    assert_eq!(
        ws.adventure().actions()[1].generals()[0].units("militia"),
        Some(200)
    );
}

#[test]
fn deleting_every_action_unbinds_detail_pane() {
    let mut ws = load_attack();
    assert!(ws.action_activate(&MenuCommand::Delete));
    assert!(ws.action_activate(&MenuCommand::Delete));
    assert!(ws.adventure().actions().is_empty());
    assert_eq!(ws.actions_panel().table().row_count(), 1);
    assert_eq!(ws.actions_panel().details().bound_index(), None);
    assert_eq!(ws.actions_panel().details().detail_tabs().len(), 0);
    assert!(!ws.action_activate(&MenuCommand::Delete));
}

#[test]
fn roster_and_nested_generals_are_separate_collections() {
    let mut ws = load_attack();
    assert_eq!(ws.adventure().generals().len(), 1);
    assert_eq!(ws.adventure().generals()[0].general_type(), "vargus");

    ws.action_click(1);
    ws.close_detail_tab(0).unwrap();
    assert_eq!(ws.adventure().generals().len(), 1);
    assert_eq!(ws.roster().row_count(), 2);
}
