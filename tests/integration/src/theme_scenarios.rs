//! Scenario tests across the whole stack on a real temporary theme.
//!
//! Each scenario builds a project with [`TestTheme`], opens a studio backed
//! by the JSON record store and the local filesystem, and checks both the
//! records and the files left on disk.

use pattern_core::{
    ConfigResolver, Error, JsonRecordStore, PatternQuery, PatternStudio, RecordStore,
};
use pattern_fs::{LocalFileStore, NormalizedPath};
use pattern_meta::{Mode, PatternRecord};
use pattern_test_utils::TestTheme;
use pretty_assertions::assert_eq;
use std::fs;

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Open a studio the way the CLI does in a development environment, with the
/// global layer pointed at an empty directory inside the theme.
fn open(theme: &TestTheme) -> PatternStudio {
    let root = theme.normalized_root();
    let config = ConfigResolver::with_global_config_dir(root.clone(), theme.root().join(".global"))
        .resolve()
        .unwrap();
    let records = JsonRecordStore::at_root(&root);
    PatternStudio::new(root, config, records, LocalFileStore::new())
        .with_environment(Some("development"))
}

const MESSY_HERO: &str = "<?php
/**
 *   title:   Hero Banner
 * CATEGORIES: featured,banner , featured
 * Keywords: hero
 * Viewport Width: 1440px
 * Unknown Field: ignored
 */
?>
<!-- wp:cover /-->";

// =============================================================================
// File mode
// =============================================================================

#[test]
fn auto_import_adopts_existing_theme_patterns() {
    let theme = TestTheme::new();
    theme.write_config("[core]\nmode = \"file\"\n");
    theme.write_pattern_file("hero-banner.php", MESSY_HERO);
    theme.write_pattern(&PatternRecord::new("Footer").with_content("<p>f</p>"));

    let mut studio = open(&theme);
    let report = studio.maybe_auto_import().unwrap().expect("import ran");

    assert!(report.is_clean());
    assert_eq!(report.success, vec!["Footer", "Hero Banner"]);
    theme.assert_file_exists(".patterns/auto-imported");
    theme.assert_file_exists(".patterns/records.json");

    // Imported files are rewritten in canonical form
    let hero = theme.read("patterns/hero-banner.php");
    assert_eq!(
        hero,
        pattern_format::serialize(&studio.get_by_slug("hero-banner").unwrap().record)
    );
    assert!(hero.contains(" * Categories: featured, banner\n"));
    assert!(hero.contains(" * Viewport Width: 1440\n"));
    assert!(!hero.contains("Unknown Field"));

    // The marker makes the import one-shot
    assert!(studio.maybe_auto_import().unwrap().is_none());
}

#[test]
fn records_persist_across_studio_instances() {
    let theme = TestTheme::new();
    theme.init_studio("file");

    {
        let mut studio = open(&theme);
        studio
            .save_by_slug(
                PatternRecord::new("Pricing Table")
                    .with_categories(["commerce"])
                    .with_content("<!-- wp:table /-->"),
            )
            .unwrap();
    }

    let studio = open(&theme);
    let stored = studio.get_by_slug("pricing-table").unwrap();
    assert_eq!(stored.record.categories, vec!["commerce"]);
    theme.assert_file_contains("patterns/pricing-table.php", "<!-- wp:table /-->");
}

#[test]
fn editing_a_pattern_file_and_reimporting_updates_the_record() {
    let theme = TestTheme::new();
    theme.init_studio("file");
    let mut studio = open(&theme);
    studio
        .save_by_slug(PatternRecord::new("Notice").with_content("<p>Old</p>"))
        .unwrap();
    let id = studio.get_by_slug("notice").unwrap().id;

    let path = theme.patterns_dir().join("notice.php");
    let edited = fs::read_to_string(&path)
        .unwrap()
        .replace("<p>Old</p>", "<p>New</p>");
    fs::write(&path, edited).unwrap();

    let report = studio.import(&[NormalizedPath::new(&path)]);
    assert!(report.is_clean());

    let stored = studio.get_by_slug("notice").unwrap();
    assert_eq!(stored.id, id);
    assert_eq!(stored.record.content, "<p>New</p>");
    assert_eq!(studio.list().unwrap().len(), 1);
}

#[test]
fn batch_import_keeps_going_past_bad_files() {
    let theme = TestTheme::new();
    theme.init_studio("file");
    theme.write_pattern_file("broken.php", "<p>no header</p>");
    theme.write_pattern_file("untitled.php", "<?php\n/**\n * Slug: untitled\n */\n?>\n");
    theme.write_pattern(&PatternRecord::new("Good One"));

    let mut studio = open(&theme);
    let report = studio.import_all().unwrap();

    assert_eq!(report.success, vec!["Good One"]);
    assert_eq!(report.errors.len(), 2);
    assert!(
        report
            .errors
            .contains(&"Could not parse pattern file: broken.php".to_string())
    );
    assert!(report.summary().starts_with("Successfully imported 1 patterns"));
    assert_eq!(studio.list().unwrap().len(), 1);
}

#[test]
fn local_overrides_redirect_the_pattern_directory() {
    let theme = TestTheme::new();
    theme.init_studio("file");
    fs::write(
        theme.root().join(".patterns/config.local.toml"),
        "[patterns]\ndirectory = \"parts/patterns\"\n",
    )
    .unwrap();

    let mut studio = open(&theme);
    studio.save_by_slug(PatternRecord::new("Moved")).unwrap();

    theme.assert_file_exists("parts/patterns/moved.php");
    theme.assert_file_not_exists("patterns/moved.php");
}

#[test]
fn query_is_refused_in_file_mode() {
    let theme = TestTheme::new();
    theme.init_studio("file");
    let studio = open(&theme);
    assert!(matches!(
        studio.query(&PatternQuery::default()),
        Err(Error::QueryDisabled)
    ));
}

// =============================================================================
// Api mode
// =============================================================================

#[test]
fn api_mode_never_touches_pattern_files() {
    let theme = TestTheme::new();
    theme.write_config("[core]\nmode = \"api\"\n");
    theme.write_pattern(&PatternRecord::new("Existing"));

    let mut studio = open(&theme);
    assert_eq!(studio.mode(), Mode::Api);
    assert!(studio.maybe_auto_import().unwrap().is_none());

    studio.save_by_slug(PatternRecord::new("Api Only")).unwrap();
    theme.assert_file_not_exists("patterns/api-only.php");
    theme.assert_file_not_exists(".patterns/auto-imported");
    assert!(studio.get_by_slug("existing").is_err());
}

#[test]
fn api_mode_query_pages_over_persisted_records() {
    let theme = TestTheme::new();
    theme.init_studio("api");
    let mut studio = open(&theme);
    for (title, category) in [
        ("delta", "hero"),
        ("Alpha", "hero"),
        ("Charlie", "footer"),
        ("bravo", "hero"),
    ] {
        studio
            .save_by_slug(PatternRecord::new(title).with_categories([category]))
            .unwrap();
    }

    let studio = open(&theme);
    let page = studio
        .query(&PatternQuery {
            category: Some("hero".to_string()),
            per_page: Some(2),
            page: Some(2),
            ..PatternQuery::default()
        })
        .unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 2);
    let titles: Vec<_> = page.patterns.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["delta"]);

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["patterns"][0]["name"], "delta");
}

#[test]
fn switching_to_file_mode_exports_api_records() {
    let theme = TestTheme::new();
    theme.init_studio("api");
    let mut studio = open(&theme);
    studio
        .save_by_slug(PatternRecord::new("Shared").with_content("<p>s</p>"))
        .unwrap();
    theme.assert_file_not_exists("patterns/shared.php");

    theme.init_studio("file");
    let studio = open(&theme);
    let outcomes = studio.export_all().unwrap();

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].written);
    theme.assert_file_contains("patterns/shared.php", " * Title: Shared");
    assert_eq!(
        JsonRecordStore::at_root(&theme.normalized_root())
            .list(&Default::default())
            .unwrap()
            .len(),
        1
    );
}
