mod common;
use common::{png_capture, temp_dir};
use guesswho::core::builder::{BuilderSession, BuilderSettings, CropOnReplace, Slot, SlotLayout};
use guesswho::core::capture::encode_data_uri;
use guesswho::core::ids::{FixedClock, IdGenerator};
use guesswho::errors::AppError;
use guesswho::models::Crop;
use guesswho::store::{BoardStore, MemoryStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;

const GIF_BYTES: &[u8] = b"GIF89a\x01\0\x01\0\0\0\0";

fn session(layout: SlotLayout, crop_on_replace: CropOnReplace) -> BuilderSession {
    BuilderSession::new(
        BuilderSettings {
            layout,
            crop_on_replace,
            default_y: 50.0,
        },
        IdGenerator::with_clock(Box::new(FixedClock::from_millis(1_700_000_000_000))),
    )
}

fn fixed() -> BuilderSession {
    session(SlotLayout::Fixed(20), CropOnReplace::Reset)
}

#[test]
fn test_new_fixed_session_has_empty_slots() {
    let s = fixed();
    assert_eq!(s.slots().len(), 20);
    assert!(s.slots().iter().all(|slot| *slot == Slot::Empty));
    assert!(s.characters().is_empty());
}

#[test]
fn test_fill_assigns_id_and_placeholder() {
    let mut s = fixed();
    let c = s.fill(4, png_capture()).expect("fill").clone();

    assert_eq!(c.name, "Person 5");
    assert_eq!(c.id, "1700000000000-4");
    assert!(c.image.starts_with("data:image/png;base64,"));
    assert_eq!(c.crop, Crop::default());
    assert_eq!(s.characters().len(), 1);
}

#[test]
fn test_fill_out_of_range_slot() {
    let mut s = session(SlotLayout::Fixed(3), CropOnReplace::Reset);
    assert!(matches!(s.fill(3, png_capture()), Err(AppError::InvalidSlot(3))));
}

#[test]
fn test_add_uses_first_empty_slot_and_stops_when_full() {
    let mut s = session(SlotLayout::Fixed(2), CropOnReplace::Reset);
    s.fill(0, png_capture()).unwrap();

    assert_eq!(s.add(png_capture()).unwrap(), 1);
    assert!(matches!(s.add(png_capture()), Err(AppError::InvalidArgument(_))));
}

#[test]
fn test_unbounded_layout_appends() {
    let mut s = session(SlotLayout::Unbounded, CropOnReplace::Reset);
    assert!(s.slots().is_empty());

    for expected in 0..25 {
        assert_eq!(s.add(png_capture()).unwrap(), expected);
    }
    assert_eq!(s.characters().len(), 25);

    s.clear(0).unwrap();
    assert_eq!(s.slots().len(), 24);
    assert_eq!(s.characters()[0].name, "Person 2");
}

#[test]
fn test_derived_list_follows_slot_order() {
    let mut s = fixed();
    s.fill(7, png_capture()).unwrap();
    s.fill(2, png_capture()).unwrap();
    s.fill(11, png_capture()).unwrap();

    let names: Vec<&str> = s.characters().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Person 3", "Person 8", "Person 12"]);
}

#[test]
fn test_rename_and_blank_rename() {
    let mut s = fixed();
    s.fill(0, png_capture()).unwrap();
    let id = s.characters()[0].id.clone();

    s.rename(0, "Alice").unwrap();
    assert_eq!(s.characters()[0].name, "Alice");
    assert_eq!(s.characters()[0].id, id);

    s.rename(0, "   ").unwrap();
    assert_eq!(s.characters()[0].name, "Person 1");

    assert!(matches!(s.rename(1, "Bob"), Err(AppError::EmptySlot(1))));
}

#[test]
fn test_clear_fixed_slot() {
    let mut s = fixed();
    s.fill(0, png_capture()).unwrap();
    s.fill(1, png_capture()).unwrap();

    s.clear(0).unwrap();

    assert_eq!(s.slots()[0], Slot::Empty);
    assert_eq!(s.slots().len(), 20);
    assert_eq!(s.characters().len(), 1);
}

#[test]
fn test_crop_editor_commit_is_atomic() {
    let mut s = fixed();
    s.fill(0, png_capture()).unwrap();
    let id = s.characters()[0].id.clone();

    let mut editor = s.open_editor(0).unwrap();
    editor.set_zoom(1.73);
    editor.set_x(12.4);
    // nothing lands before commit
    assert_eq!(s.characters()[0].crop, Crop::default());
    editor.set_y(250.0);

    let committed = editor.commit(&mut s).unwrap();

    assert_eq!(committed, Crop { zoom: 1.7, x: 12.0, y: 100.0 });
    assert_eq!(s.characters()[0].crop, committed);
    assert_eq!(s.characters()[0].id, id);
}

#[test]
fn test_crop_editor_cancel_discards() {
    let mut s = fixed();
    s.fill(0, png_capture()).unwrap();

    let mut editor = s.open_editor(0).unwrap();
    editor.set_zoom(3.0);
    editor.set_x(0.0);
    editor.set_y(0.0);
    editor.cancel();

    assert_eq!(s.characters()[0].crop, Crop::default());
}

#[test]
fn test_crop_editor_clamps_range() {
    let mut s = fixed();
    s.fill(0, png_capture()).unwrap();

    let mut editor = s.open_editor(0).unwrap();
    editor.set_zoom(0.2);
    editor.set_x(-10.0);
    editor.set_y(f64::NAN);

    assert_eq!(editor.draft(), Crop { zoom: 1.0, x: 0.0, y: 50.0 });
}

#[test]
fn test_editor_needs_a_filled_slot() {
    let s = fixed();
    assert!(matches!(s.open_editor(0), Err(AppError::EmptySlot(0))));
    assert!(matches!(s.open_editor(99), Err(AppError::InvalidSlot(99))));
}

#[test]
fn test_editor_rejects_replaced_slot() {
    let mut s = fixed();
    s.fill(0, png_capture()).unwrap();
    let mut editor = s.open_editor(0).unwrap();
    editor.set_zoom(2.0);

    s.fill(0, png_capture()).unwrap();

    assert!(editor.commit(&mut s).is_err());
}

fn framed_then_replaced(policy: CropOnReplace) -> BuilderSession {
    let mut s = session(SlotLayout::Fixed(4), policy);
    s.fill(0, png_capture()).unwrap();
    s.rename(0, "Alice").unwrap();

    let mut editor = s.open_editor(0).unwrap();
    editor.set_zoom(2.0);
    editor.set_x(10.0);
    editor.set_y(20.0);
    editor.commit(&mut s).unwrap();

    let gif = encode_data_uri(GIF_BYTES).unwrap();
    s.fill(0, gif).unwrap();
    s
}

#[test]
fn test_replace_image_resets_crop() {
    let s = framed_then_replaced(CropOnReplace::Reset);
    let c = &s.characters()[0];

    assert!(c.image.starts_with("data:image/gif;base64,"));
    assert_eq!(c.name, "Alice");
    assert_eq!(c.crop, Crop::default());
}

#[test]
fn test_replace_image_keeps_crop() {
    let s = framed_then_replaced(CropOnReplace::Keep);
    let c = &s.characters()[0];

    assert!(c.image.starts_with("data:image/gif;base64,"));
    assert_eq!(c.crop, Crop { zoom: 2.0, x: 10.0, y: 20.0 });
}

#[test]
fn test_replace_image_gets_new_id() {
    let mut s = fixed();
    s.fill(0, png_capture()).unwrap();
    let first = s.characters()[0].id.clone();
    s.fill(0, png_capture()).unwrap();
    assert_ne!(s.characters()[0].id, first);
}

#[test]
fn test_randomize_keeps_slots() {
    let mut s = fixed();
    for i in 0..10 {
        s.fill(i, png_capture()).unwrap();
    }
    let slots_before = s.slots().to_vec();

    s.randomize(&mut StdRng::seed_from_u64(3));

    assert_eq!(s.slots(), slots_before.as_slice());
    let mut ids: Vec<String> = s.characters().iter().map(|c| c.id.clone()).collect();
    let mut slot_ids: Vec<String> = slots_before
        .iter()
        .filter_map(Slot::character)
        .map(|c| c.id.clone())
        .collect();
    ids.sort();
    slot_ids.sort();
    assert_eq!(ids, slot_ids);
}

#[test]
fn test_save_empty_session_fails() {
    let mut s = fixed();
    let mut store = BoardStore::new(MemoryStore::new(), "guess-who-boards");

    let err = s.save(&mut store).unwrap_err();

    assert!(matches!(err, AppError::EmptyBoard("saving")));
    assert_eq!(err.to_string(), "Add at least one character before saving.");
    assert!(store.list().is_empty());
}

#[test]
fn test_download_empty_session_fails_without_writing() {
    let dir = temp_dir("builder_empty_download");
    let mut s = fixed();

    let err = s.download(&dir, false).unwrap_err();

    assert!(matches!(err, AppError::EmptyBoard("downloading")));
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn test_save_my_board_end_to_end() {
    let mut s = fixed();
    s.set_title(" My Board! ");
    s.fill(0, png_capture()).unwrap();
    s.fill(1, png_capture()).unwrap();
    s.rename(0, "").unwrap();
    s.rename(1, "Bob").unwrap();

    let mut store = BoardStore::new(MemoryStore::new(), "guess-who-boards");
    let board = s.save(&mut store).unwrap();

    assert_eq!(board.title, "My Board!");
    assert_eq!(board.characters[0].name, "Person 1");
    assert_eq!(board.characters[1].name, "Bob");
    let re = regex::Regex::new(r"^my-board-\d+$").unwrap();
    assert!(re.is_match(&board.id), "id was {}", board.id);
    assert_eq!(store.get(&board.id), Some(board));
}

#[test]
fn test_download_writes_pretty_json() {
    let dir = temp_dir("builder_download");
    let mut s = fixed();
    s.set_title("Office Crew");
    s.fill(0, png_capture()).unwrap();
    assert_eq!(s.title(), "Office Crew");

    let (board, path) = s.download(&dir, false).unwrap();

    assert_eq!(path, dir.join("office-crew.json"));
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\n  \"title\": \"Office Crew\""));
    assert!(content.contains(&board.id));

    // second download needs force
    assert!(matches!(s.download(&dir, false), Err(AppError::FileExists(_))));
    assert!(s.download(&dir, true).is_ok());
}

#[test]
fn test_untitled_download_file_name() {
    let dir = temp_dir("builder_untitled");
    let mut s = fixed();
    s.set_title("!!!");
    s.fill(0, png_capture()).unwrap();

    let (board, path) = s.download(&dir, false).unwrap();

    assert_eq!(board.title, "!!!");
    assert_eq!(path, dir.join("board.json"));
}

#[test]
fn test_clear_unbounded_slot_shifts_later_slots() {
    let mut s = session(SlotLayout::Unbounded, CropOnReplace::Reset);
    for name in ["Ann", "Ben", "Cid"] {
        let slot = s.add(png_capture()).unwrap();
        s.rename(slot, name).unwrap();
    }
    let cid = s.characters()[2].id.clone();

    s.clear(1).unwrap();

    assert_eq!(s.slots().len(), 2);
    let names: Vec<&str> = s.characters().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Cid"]);
    assert_eq!(s.slots()[1].character().unwrap().id, cid);

    // the next capture appends after the shifted slots
    assert_eq!(s.add(png_capture()).unwrap(), 2);
    assert_eq!(s.characters()[2].name, "Person 3");

    assert!(matches!(s.clear(5), Err(AppError::InvalidSlot(5))));
}
