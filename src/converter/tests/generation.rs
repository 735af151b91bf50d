use crate::converter::testutil::table_transliterator;
use crate::converter::{Converter, Resolution};

#[test]
fn test_shared_base_gets_increasing_suffixes() {
    let translit = table_transliterator(&[("一", "tesuto"), ("二", "tesuto"), ("三", "tesuto")]);
    let mut conv = Converter::with_transliterator(translit, "JaWord");
    assert_eq!(conv.convert("一"), "JaWordTesuto");
    assert_eq!(conv.convert("二"), "JaWordTesuto1");
    assert_eq!(conv.convert("三"), "JaWordTesuto2");
}

#[test]
fn test_suffix_skips_taken_values() {
    // "二" renders to a base that already ends like a suffixed placeholder.
    let translit = table_transliterator(&[("一", "tesuto"), ("二", "tesuto1"), ("三", "tesuto")]);
    let mut conv = Converter::with_transliterator(translit, "JaWord");
    assert_eq!(conv.convert("一"), "JaWordTesuto");
    assert_eq!(conv.convert("二"), "JaWordTesuto1");
    assert_eq!(conv.convert("三"), "JaWordTesuto2");
}

#[test]
fn test_capitalize_lowercases_tail() {
    let translit = table_transliterator(&[("一", "TESUTO")]);
    let mut conv = Converter::with_transliterator(translit, "P");
    assert_eq!(conv.convert("一"), "PTesuto");
}

#[test]
fn test_non_word_chars_become_filler() {
    let translit = table_transliterator(&[("一", "te-su to"), ("二", "a_b")]);
    let mut conv = Converter::with_transliterator(translit, "P");
    assert_eq!(conv.convert("一"), "PTexsuxto");
    // Underscore is a word character.
    assert_eq!(conv.convert("二"), "PA_b");
}

#[test]
fn test_wide_chars_become_filler() {
    let translit = table_transliterator(&[("一", "ａb漢")]);
    let mut conv = Converter::with_transliterator(translit, "P");
    assert_eq!(conv.convert("一"), "PXbx");
}

#[test]
fn test_non_ascii_narrow_letters_become_filler() {
    // Arabic letters are narrow word characters in Unicode, but placeholders
    // stay ASCII.
    let translit = table_transliterator(&[("一", "sلam")]);
    let mut conv = Converter::with_transliterator(translit, "P");
    assert_eq!(conv.convert("一"), "PSxam");
}

#[test]
fn test_digit_rendering_from_engine() {
    let translit = table_transliterator(&[("一", "1")]);
    let mut conv = Converter::with_transliterator(translit, "P");
    assert_eq!(conv.resolve("一"), Resolution::Resolved("1".to_string()));
    assert_eq!(conv.convert("一"), "1");
    assert!(conv.mapping().is_empty());
}

#[test]
fn test_empty_rendering_from_engine() {
    let translit = |_: &str| -> Vec<String> { Vec::new() };
    let mut conv = Converter::with_transliterator(translit, "P");
    assert_eq!(conv.convert("「何」"), "(何)");
    assert!(conv.mapping().is_empty());
}

#[test]
fn test_fragments_are_concatenated() {
    let translit = |_: &str| vec!["te".to_string(), "su".to_string(), "to".to_string()];
    let mut conv = Converter::with_transliterator(translit, "P");
    assert_eq!(conv.convert("何"), "PTesuto");
}
