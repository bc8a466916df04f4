use html_reencode_engine::charmap::{decode_windows_1252, windows_1252_char};
use html_reencode_engine::config::Config;
use html_reencode_engine::processor::process_file;
use html_reencode_engine::progress::NoProgress;
use html_reencode_engine::rules::{DEFAULT_FIND, DEFAULT_REPLACE, RenameRule, ReplaceRule};
use proptest::prelude::*;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn every_byte_maps_to_a_distinct_char() {
    let chars: HashSet<char> = (0..=u8::MAX).map(windows_1252_char).collect();
    assert_eq!(chars.len(), 256);
}

proptest! {
    #[test]
    fn every_declaration_is_replaced(
        segments in prop::collection::vec("[a-z <>=\"/]{0,12}", 1..8)
    ) {
        // Segments carry no digits, so the only matches are the joined ones.
        let text = segments.join(DEFAULT_FIND);
        let (out, count) = ReplaceRule::default().apply(&text);
        prop_assert_eq!(out.as_ref(), segments.join(DEFAULT_REPLACE));
        prop_assert_eq!(count, segments.len() - 1);
    }

    #[test]
    fn text_without_declaration_is_untouched(text in "\\PC{0,200}") {
        prop_assume!(!text.contains(DEFAULT_FIND));
        let (out, count) = ReplaceRule::default().apply(&text);
        prop_assert!(matches!(out, Cow::Borrowed(_)));
        prop_assert_eq!(out.as_ref(), text.as_str());
        prop_assert_eq!(count, 0);
    }

    #[test]
    fn applying_twice_changes_nothing(text in "\\PC{0,200}") {
        let rule = ReplaceRule::default();
        let (once, _) = rule.apply(&text);
        let (twice, count) = rule.apply(&once);
        prop_assert_eq!(twice.as_ref(), once.as_ref());
        prop_assert_eq!(count, 0);
    }

    #[test]
    fn mirrored_path_keeps_structure(
        prefix in prop::collection::vec("[a-z]{1,8}", 0..4),
        rest in prop::collection::vec("[a-z]{1,8}", 0..4),
        name in "[a-z]{1,8}\\.html?",
    ) {
        let mut source: PathBuf = prefix.iter().collect();
        source.push("Breviary");
        source.extend(&rest);
        source.push(&name);

        let mut expected: PathBuf = prefix.iter().collect();
        expected.push("Breviary.utf8");
        expected.extend(&rest);
        expected.push(&name);

        let rule = RenameRule::default();
        let derived = rule.derive(&source).unwrap();
        prop_assert_eq!(&derived, &expected);
        prop_assert!(rule.is_mirrored(&derived));
        prop_assert!(!rule.is_mirrored(&source));
    }

    #[test]
    fn windows_1252_decoding_keeps_one_char_per_byte(
        bytes in prop::collection::vec(any::<u8>(), 0..512)
    ) {
        let text = decode_windows_1252(&bytes);
        prop_assert_eq!(text.chars().count(), bytes.len());
        prop_assert_eq!(text.is_ascii(), bytes.is_ascii());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn written_output_is_always_utf8(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let tmp = TempDir::new().unwrap();
        let source = tmp.path().join("Breviary/office.html");
        fs::create_dir_all(source.parent().unwrap()).unwrap();
        fs::write(&source, &bytes).unwrap();

        let conversion = process_file(&source, &Config::default(), &NoProgress).unwrap();

        let written = fs::read(&conversion.destination).unwrap();
        let text = String::from_utf8(written);
        prop_assert!(text.is_ok());
        let decoded = decode_windows_1252(&bytes);
        let (expected, _) = ReplaceRule::default().apply(&decoded);
        prop_assert_eq!(text.unwrap(), expected.into_owned());
    }
}
