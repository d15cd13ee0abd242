//! Integration tests for a full drafting session and the palette viewer.
//!
//! These drive the public API the way a UI would: picker callbacks, form
//! submissions, drag-end events and the level/format controls.

use palette_draft::{
    project, ColorEntry, ColorFormat, DraftBuilder, DraftConfig, DraftError, DraftState,
    ErrorKind, Palette, PaletteStore, ShadeRecord, ShadeTable, ViewSelection,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ==================== Fixtures ====================

fn seed_palettes() -> Vec<Palette> {
    vec![
        Palette::new(
            "Material UI Colors",
            vec![
                ColorEntry::new("red", "#F44336"),
                ColorEntry::new("pink", "#E91E63"),
                ColorEntry::new("purple", "#9C27B0"),
            ],
        ),
        Palette::new(
            "Flat UI Colors v1",
            vec![
                ColorEntry::new("Turquoise", "#1abc9c"),
                ColorEntry::new("Emerald", "#2ecc71"),
            ],
        ),
    ]
}

fn swatch(name: &str, hex: &str, rgb: (u8, u8, u8)) -> ShadeRecord {
    let (r, g, b) = rgb;
    ShadeRecord {
        name: name.to_string(),
        hex: hex.to_string(),
        rgb: format!("rgb({},{},{})", r, g, b),
        rgba: format!("rgba({},{},{},1)", r, g, b),
        id: name.to_lowercase().replace(' ', "-"),
    }
}

fn shade_table() -> ShadeTable {
    vec![
        (
            100,
            vec![
                swatch("Ocean", "#bbdefb", (187, 222, 251)),
                swatch("Sand", "#f3efe0", (243, 239, 224)),
            ],
        ),
        (
            500,
            vec![
                swatch("Ocean", "#1e88e5", (30, 136, 229)),
                swatch("Sand", "#c2b280", (194, 178, 128)),
            ],
        ),
    ]
    .into_iter()
    .collect()
}

/// Counts saves so tests can assert on persistence calls.
#[derive(Default)]
struct CountingStore {
    palettes: Vec<Palette>,
    saves: usize,
}

impl PaletteStore for CountingStore {
    fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    fn save_palette(&mut self, palette: Palette) {
        self.saves += 1;
        self.palettes.push(palette);
    }
}

// ==================== Drafting session ====================

#[test]
fn test_full_session_seeded_from_first_palette() {
    let mut store = CountingStore {
        palettes: seed_palettes(),
        saves: 0,
    };
    let mut draft = DraftBuilder::from_seed(DraftConfig::default(), &store.palettes[0].colors);
    assert_eq!(draft.state(), DraftState::Editing);

    // Picker, then form submit
    draft.set_pending_color("#4caf50").unwrap();
    draft.set_color_name("Grass Green").unwrap();
    draft.add_current_color().unwrap();

    // Drag the new color to the front
    draft.reorder(3, 0).unwrap();
    draft.remove_color("pink").unwrap();

    draft.set_working_name("Garden Party").unwrap();
    let palette = draft.commit_to(&mut store).unwrap();

    let ids: Vec<_> = palette.colors.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["grass-green", "red", "purple"]);
    assert_eq!(palette.id, "garden-party");
    assert_eq!(store.saves, 1);
    assert_eq!(store.palettes.len(), 3);

    // The source palette is untouched by the session.
    assert_eq!(store.palettes[0].colors.len(), 3);
}

#[test]
fn test_validation_examples() {
    let mut draft =
        DraftBuilder::from_seed(DraftConfig::default(), &[ColorEntry::new("blue", "#0000ff")]);

    draft.set_pending_color("#1234ab").unwrap();
    let err = draft.add_color("Blue").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NameCollision);
    assert_eq!(err.to_string(), "Color Name Must Be Unique");

    draft.set_pending_color("#0000ff").unwrap();
    let err = draft.add_color("Sky").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueCollision);
    assert_eq!(err.to_string(), "This Color Already Exists");

    assert_eq!(draft.entries(), &[ColorEntry::new("blue", "#0000ff")]);
}

#[test]
fn test_rejected_commit_makes_no_save() {
    let mut store = CountingStore {
        palettes: seed_palettes(),
        saves: 0,
    };
    let mut draft = DraftBuilder::default();

    let err = draft.commit_to(&mut store).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyInput);

    draft.set_working_name("material ui colors").unwrap();
    let err = draft.commit_to(&mut store).unwrap_err();
    assert_eq!(err, DraftError::PaletteNameCollision);

    assert_eq!(store.saves, 0);
    assert_eq!(draft.state(), DraftState::Empty);
}

#[test]
fn test_fill_to_capacity_then_free_a_slot() {
    let saved = seed_palettes();
    let mut rng = StdRng::seed_from_u64(42);
    let mut draft = DraftBuilder::new(DraftConfig::new(4));

    for _ in 0..4 {
        draft.add_random_color(&saved, &mut rng).unwrap();
    }
    assert_eq!(draft.state(), DraftState::Full);

    let err = draft.add_random_color(&saved, &mut rng).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CapacityExceeded);

    draft.set_pending_color("#000000").unwrap();
    let err = draft.add_color("Midnight").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CapacityExceeded);

    let first_id = draft.entries()[0].id.clone();
    draft.remove_color(&first_id).unwrap();
    assert_ne!(draft.state(), DraftState::Full);
}

#[test]
fn test_cancel_then_mutate() {
    let mut draft = DraftBuilder::from_seed(DraftConfig::default(), &seed_palettes()[1].colors);
    draft.cancel().unwrap();
    assert_eq!(draft.state(), DraftState::Cancelled);
    assert_eq!(
        draft.set_working_name("Late").unwrap_err().kind(),
        ErrorKind::DraftClosed
    );
}

// ==================== Viewer ====================

#[test]
fn test_view_level_and_format_changes() {
    let palette = Palette::new("Sea Side", vec![]);
    let table = shade_table();
    let mut selection = ViewSelection::default();

    let hex = project(&palette, &selection, &table).unwrap();
    assert_eq!(hex[0].display_value, "#1e88e5");

    assert_eq!(selection.set_format(ColorFormat::Rgb), "Format Changed to RGB");
    selection.set_level(100).unwrap();
    let rendered: Vec<String> = project(&palette, &selection, &table)
        .unwrap()
        .iter()
        .map(|r| format!("{} {} {}", r.name, r.display_value, r.color_url))
        .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    Ocean rgb(187,222,251) /palette/sea-side/ocean
    Sand rgb(243,239,224) /palette/sea-side/sand
    ");
}

#[test]
fn test_view_missing_level_is_fault() {
    let palette = Palette::new("Sea Side", vec![]);
    let selection = ViewSelection::new(900, ColorFormat::Hex);
    let err = project(&palette, &selection, &shade_table()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownLevel);
    assert!(!err.is_user_facing());
}
