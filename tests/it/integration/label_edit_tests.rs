//! Inline Label Edit Integration Tests

use crate::helpers::{
    TestSessionBuilder, book_and_author, click, double_press, key, label_of, press, release,
    type_text,
};
use erdraft::NodeKind;
use erdraft::input::{InputEvent, Key};

#[test]
fn test_confirm_commits_changed_label() {
    let (mut session, book, _) = book_and_author();
    let undo_before = session.history().undo_len();

    double_press(&mut session, 170.0, 128.0);
    assert_eq!(session.gesture().editing_node(), Some(book));
    assert_eq!(session.gesture().draft(), Some("Book"));

    type_text(&mut session, "  Novel ");
    key(&mut session, Key::Enter);

    assert_eq!(label_of(&session, book), "Novel");
    assert!(session.gesture().is_idle());
    assert_eq!(session.history().undo_len(), undo_before + 1);
}

#[test]
fn test_cancel_reverts() {
    let (mut session, book, _) = book_and_author();
    let undo_before = session.history().undo_len();

    double_press(&mut session, 170.0, 128.0);
    type_text(&mut session, "Scratch");
    key(&mut session, Key::Escape);

    assert_eq!(label_of(&session, book), "Book");
    assert!(session.gesture().is_idle());
    assert_eq!(session.history().undo_len(), undo_before);
}

#[test]
fn test_unchanged_text_does_not_commit() {
    let (mut session, book, _) = book_and_author();
    let undo_before = session.history().undo_len();

    double_press(&mut session, 170.0, 128.0);
    key(&mut session, Key::Enter);

    assert_eq!(label_of(&session, book), "Book");
    assert_eq!(session.history().undo_len(), undo_before);
}

#[test]
fn test_default_label_opens_empty_and_blank_keeps_default() {
    let (mut session, ids) = TestSessionBuilder::new()
        .with_node(NodeKind::WeakEntity, "", (100.0, 100.0))
        .build();
    let undo_before = session.history().undo_len();

    double_press(&mut session, 170.0, 128.0);
    assert_eq!(session.gesture().draft(), Some(""));
    key(&mut session, Key::Enter);

    assert_eq!(label_of(&session, ids[0]), "Weak Entity");
    assert_eq!(session.history().undo_len(), undo_before);
}

#[test]
fn test_blank_text_restores_default_label() {
    let (mut session, book, _) = book_and_author();

    double_press(&mut session, 170.0, 128.0);
    type_text(&mut session, "   ");
    key(&mut session, Key::Enter);

    assert_eq!(label_of(&session, book), "Entity");
}

#[test]
fn test_focus_loss_commits() {
    let (mut session, book, _) = book_and_author();

    double_press(&mut session, 170.0, 128.0);
    type_text(&mut session, "Volume");
    session.dispatch(&InputEvent::FocusLost);

    assert_eq!(label_of(&session, book), "Volume");
}

#[test]
fn test_press_elsewhere_commits_then_acts() {
    let (mut session, book, author) = book_and_author();

    double_press(&mut session, 170.0, 128.0);
    type_text(&mut session, "Volume");
    click(&mut session, 450.0, 140.0);

    assert_eq!(label_of(&session, book), "Volume");
    assert_eq!(session.selected(), Some(author));
}

#[test]
fn test_press_on_edited_node_does_not_drag() {
    let (mut session, book, _) = book_and_author();

    double_press(&mut session, 170.0, 128.0);
    press(&mut session, 130.0, 140.0);

    assert!(session.gesture().is_editing());
    release(&mut session, 230.0, 240.0);
    assert!(session.gesture().is_editing());
    assert_eq!(
        session.scene().node(book).unwrap().position,
        erdraft::Point::new(100.0, 100.0)
    );
}

#[test]
fn test_shortcuts_are_ignored_while_editing() {
    let (mut session, book, _) = book_and_author();

    double_press(&mut session, 170.0, 128.0);
    key(&mut session, Key::Delete);
    crate::helpers::shortcut(&mut session, Key::Char('z'));

    assert!(session.scene().contains(book));
    assert_eq!(session.scene().node_count(), 2);
    assert!(session.gesture().is_editing());
}

#[test]
fn test_commit_refreshes_panel_for_selected_node() {
    let (mut session, book, _) = book_and_author();
    click(&mut session, 130.0, 140.0);

    double_press(&mut session, 170.0, 128.0);
    type_text(&mut session, "Novel");
    key(&mut session, Key::Enter);

    assert_eq!(session.selected(), Some(book));
    assert_eq!(session.panel().label, "Novel");
}

#[test]
fn test_context_menu_edit_opens_editor() {
    let (mut session, book, _) = book_and_author();
    assert!(!session.edit_selected_label());

    click(&mut session, 130.0, 140.0);
    assert!(session.edit_selected_label());
    assert_eq!(session.gesture().editing_node(), Some(book));
}

#[test]
fn test_panel_typing_updates_live_and_commits_once() {
    let (mut session, book, _) = book_and_author();
    click(&mut session, 130.0, 140.0);
    let undo_before = session.history().undo_len();

    session.set_panel_label("N");
    session.set_panel_label("No");
    session.set_panel_label("");
    assert_eq!(label_of(&session, book), "Entity");
    assert_eq!(session.panel().label, "");
    session.set_panel_label("Novel");
    assert_eq!(session.history().undo_len(), undo_before);

    assert!(session.commit_panel_label());
    assert_eq!(label_of(&session, book), "Novel");
    assert_eq!(session.history().undo_len(), undo_before + 1);
}

#[test]
fn test_undo_removing_edited_node_closes_editor() {
    let mut session = erdraft::EditorSession::default();
    let id = session
        .drop_from_palette(NodeKind::Entity, erdraft::Point::new(200.0, 200.0))
        .unwrap();
    assert!(session.begin_label_edit(id));
    type_text(&mut session, "Ghost");

    assert!(session.undo());

    assert!(!session.scene().contains(id));
    assert_eq!(session.gesture().editing_node(), None);
    assert!(session.gesture().is_idle());
}

#[test]
fn test_undo_discards_draft_and_keeps_redo() {
    let (mut session, book, _) = book_and_author();
    session.drop_from_palette(NodeKind::Attribute, erdraft::Point::new(700.0, 400.0));

    double_press(&mut session, 170.0, 128.0);
    type_text(&mut session, "Ghost");
    assert!(session.undo());

    assert!(!session.gesture().is_editing());
    key(&mut session, Key::Enter);
    session.dispatch(&InputEvent::FocusLost);

    assert_eq!(label_of(&session, book), "Book");
    assert!(session.can_redo());
    assert!(session.redo());
    assert_eq!(session.scene().node_count(), 3);
}
