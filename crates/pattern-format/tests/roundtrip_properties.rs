//! Property tests: every valid record survives serialize then deserialize.

use pattern_format::{deserialize, serialize};
use pattern_meta::PatternRecord;
use proptest::prelude::*;

// Letters and digits from any script. `*` may appear anywhere but last.
fn header_text() -> impl Strategy<Value = String> {
    "[\\p{L}\\p{N}*][\\p{L}\\p{N} :/'!?.()*-]{0,30}[\\p{L}\\p{N}.!?)]"
}

fn set_entry() -> impl Strategy<Value = String> {
    "[\\p{Ll}\\p{N}*][\\p{Ll}\\p{N}/_ *-]{0,12}[\\p{Ll}\\p{N}]"
}

fn record() -> impl Strategy<Value = PatternRecord> {
    (
        header_text(),
        prop::option::of(header_text()),
        prop::collection::vec(set_entry(), 0..4),
        prop::collection::vec(set_entry(), 0..4),
        prop::collection::vec(set_entry(), 0..3),
        prop::collection::vec(set_entry(), 0..3),
        prop::collection::vec(set_entry(), 0..3),
        1u32..5000,
        any::<bool>(),
        "(?s).{0,200}",
    )
        .prop_map(
            |(
                title,
                description,
                categories,
                keywords,
                block_types,
                post_types,
                template_types,
                width,
                inserter,
                content,
            )| {
                PatternRecord::new(title)
                    .with_description(description.unwrap_or_default())
                    .with_categories(categories)
                    .with_keywords(keywords)
                    .with_block_types(block_types)
                    .with_post_types(post_types)
                    .with_template_types(template_types)
                    .with_viewport_width(width)
                    .with_inserter(inserter)
                    .with_content(content)
            },
        )
        .prop_filter("record must be valid", |record| record.validate().is_ok())
}

proptest! {
    #[test]
    fn serialize_then_deserialize_is_identity(record in record()) {
        let text = serialize(&record);
        let parsed = deserialize(&text).unwrap();
        prop_assert_eq!(parsed, record);
    }

    #[test]
    fn serialize_is_deterministic(record in record()) {
        prop_assert_eq!(serialize(&record), serialize(&record.clone()));
    }

    #[test]
    fn deserialize_never_panics(text in "(?s)<\\?php.{0,120}") {
        let _ = deserialize(&text);
    }
}
