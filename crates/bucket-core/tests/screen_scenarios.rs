//! Screen-level scenarios driven through the public API.

use bucket_core::{
    visible_plans, AlbumTab, BucketBoard, BucketList, Entity, ItemId, ListMode, Plan, PlanMode,
    SecondaryAction, TravelChecklist,
};

fn texts<'a>(plans: impl Iterator<Item = &'a Plan>) -> Vec<(&'a str, bool)> {
    plans.map(|p| (p.text(), p.completed())).collect()
}

#[test]
fn learn_guitar_toggle_moves_step_between_views() {
    let mut list = BucketList::new();
    let id = ItemId::new("1");
    list.import(id.clone(), "Learn guitar", [("Buy a guitar", false), ("Find a teacher", true)]);

    let item = list.get(&id).unwrap();
    assert_eq!(texts(visible_plans(item, PlanMode::Active)), vec![("Buy a guitar", false)]);

    assert_eq!(list.toggle_plan_at(&id, PlanMode::Active, 0), Some(true));

    let item = list.get(&id).unwrap();
    assert!(item.plans().iter().all(Plan::completed));
    assert!(visible_plans(item, PlanMode::Active).next().is_none());
    assert_eq!(
        texts(visible_plans(item, PlanMode::Completed)),
        vec![("Buy a guitar", true), ("Find a teacher", true)]
    );
}

#[test]
fn blank_add_on_three_items_changes_nothing() {
    let mut board = BucketBoard::with_examples();
    let before = board.items();
    assert!(board.press_add("").is_none());
    assert_eq!(board.items().len(), 3);
    assert_eq!(*before, *board.items());
}

#[test]
fn removing_unknown_id_on_three_items_changes_nothing() {
    let mut board = BucketBoard::with_examples();
    let before = board.items();
    assert!(board.remove_item(&ItemId::new("999")).is_none());
    assert_eq!(*before, *board.items());
}

#[test]
fn full_bucket_list_session() {
    let mut board = BucketBoard::with_examples();

    let added = board.press_add("Learn to surf").unwrap();
    assert_eq!(board.items().last().map(|i| i.id()), Some(added.id()));

    assert_eq!(board.press_secondary(added.id()), SecondaryAction::Opened(added.id().clone()));
    assert_eq!(board.editor().mode(), Some(PlanMode::Active));
    let board_step = board.add_step("Buy a board").unwrap();
    board.add_step("Take a lesson");
    board.add_step("   ");
    assert_eq!(board.visible_steps().len(), 2);

    board.toggle_step(board_step);
    assert_eq!(board.visible_steps().len(), 1);
    board.toggle_editor_mode();
    assert_eq!(board.visible_steps()[0].text(), "Buy a board");
    board.close_editor();

    board.press_remove_toggle();
    assert_eq!(board.list_mode(), ListMode::Removing);
    let first = board.items()[0].id().clone();
    assert!(matches!(board.press_secondary(&first), SecondaryAction::Removed(_)));
    let titles: Vec<String> = board.items().iter().map(|i| i.title().to_string()).collect();
    assert_eq!(titles, vec!["Travel to Japan", "Run a marathon", "Learn to surf"]);
}

#[test]
fn travel_checklist_session() {
    let mut travel = TravelChecklist::new();
    let kyoto = travel.add("Kyoto").unwrap();
    travel.add("");
    let lima = travel.add("Lima").unwrap();

    travel.toggle(kyoto.id());
    travel.delete(lima.id());

    let detail = travel.get(kyoto.id()).unwrap();
    assert_eq!(detail.place(), "Kyoto");
    assert!(detail.completed());
    assert_eq!(travel.len(), 1);

    // the detail screen opens on the default tab
    let tab = AlbumTab::default();
    assert_eq!(tab.entries()[0].name, "Grand Hotel");
}
