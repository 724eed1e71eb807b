//! Item controls and the command menus they open.

mod common;

use std::sync::Arc;

use common::Fixture;
use horizon_sequence::prelude::*;

fn menu_for(fx: &Fixture, index: usize) -> CommandMenu {
    let item = fx.sequence.get(index).unwrap();
    fx.editor
        .control_for(&item)
        .unwrap()
        .activate()
        .unwrap()
        .unwrap()
}

#[test]
fn test_remove_and_move_table_at_first_index() {
    let options = EditorOptions::default().with_operations(
        OperationSet::none()
            .with(OperationKind::Remove, true)
            .with(OperationKind::MoveTo, true),
    );
    let fx = Fixture::with_options(&["a", "b", "c"], options);
    let menu = menu_for(&fx, 0);

    assert!(menu.find("Add before").is_none());
    assert!(menu.find("Add after").is_none());
    assert!(menu.find("Delete").is_some());
    assert!(menu.find("Move to top").is_none());
    assert!(menu.find("Move up").is_none());
    assert!(menu.find("Move down").is_some());
    assert!(menu.find("Move to bottom").is_some());
    assert!(menu.is_visible());
}

#[test]
fn test_menu_uses_live_index() {
    let fx = Fixture::new(&["a", "b", "c"]);
    let c = fx.sequence.get(2).unwrap();
    let control = fx.editor.control_for(&c).unwrap();

    fx.sequence.remove_item(0).unwrap();
    assert_eq!(control.current_index(), Ok(1));

    let menu = control.activate().unwrap().unwrap();
    assert_eq!(menu.index(), 1);
    assert!(menu.offers(MenuCommand::MoveUp));
    assert!(!menu.offers(MenuCommand::MoveDown));
}

#[test]
fn test_menu_move_reorders_editor() {
    let fx = Fixture::new(&["a", "b", "c"]);
    let mut menu = menu_for(&fx, 0);

    menu.trigger(MenuCommand::MoveToBottom).unwrap();
    assert_eq!(fx.view_order(), ["b", "c", "a"]);
    assert!(!menu.is_visible());

    let mut menu = menu_for(&fx, 1);
    menu.trigger_text("Move up").unwrap();
    assert_eq!(fx.view_order(), ["c", "b", "a"]);
}

#[test]
fn test_menu_delete_reenters_editor() {
    let fx = Fixture::new(&["a", "b"]);
    let item = fx.sequence.get(1).unwrap();
    let control = fx.editor.control_for(&item).unwrap();
    let mut menu = control.activate().unwrap().unwrap();

    menu.trigger(MenuCommand::Delete).unwrap();

    fx.assert_mapping_matches();
    assert!(!fx.editor.contains(&item));
    assert!(fx.host.is_destroyed(control.object_id()));
    assert_eq!(control.current_index(), Err(EditorError::StaleItem));
    assert!(matches!(control.activate(), Err(EditorError::StaleItem)));
}

#[test]
fn test_menu_add_after_inserts_kind() {
    let fx = Fixture::with_options(
        &["a"],
        EditorOptions::default().with_item_kinds([ItemKind::Sequence]),
    );
    let mut menu = menu_for(&fx, 0);
    assert!(!menu.offers(MenuCommand::AddAfter(ItemKind::Pulse)));

    menu.trigger(MenuCommand::AddAfter(ItemKind::Sequence)).unwrap();
    assert_eq!(fx.view_order(), ["a", "sequence-1"]);
    fx.assert_mapping_matches();
}

#[test]
fn test_menu_labels_follow_options() {
    let style = MenuStyle::default().with_delete("Remove pulse");
    let fx = Fixture::with_options(&["a", "b"], EditorOptions::default().with_menu_style(style));
    let menu = menu_for(&fx, 0);
    assert!(menu.find("Remove pulse").is_some());
    assert!(menu.find("Delete").is_none());
}

#[test]
fn test_activation_signal_carries_index() {
    let fx = Fixture::new(&["a", "b"]);
    let item = fx.sequence.get(1).unwrap();
    let control = fx.editor.control_for(&item).unwrap();
    let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let sink = seen.clone();
    control.activated.connect(move |index| sink.lock().push(*index));

    control.activate().unwrap();
    assert_eq!(*seen.lock(), [1]);
}

#[test]
fn test_controls_outliving_editor() {
    let fx = Fixture::new(&["a"]);
    let item = fx.sequence.get(0).unwrap();
    let control = fx.editor.control_for(&item).unwrap();
    let Fixture { editor, .. } = fx;
    drop(editor);

    assert_eq!(control.current_index(), Err(EditorError::EditorDropped));
    assert!(matches!(control.activate(), Err(EditorError::EditorDropped)));
}
