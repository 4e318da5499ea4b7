use super::LogFormatter;
use crate::log::LogLevel;

#[test]
fn includes_level_tag_when_enabled() {
    let formatter = LogFormatter::new(false, true);

    assert_eq!(formatter.format(Some(LogLevel::Debug), "hello"), "[DEBUG] hello");
    assert_eq!(formatter.format(Some(LogLevel::Warning), "hello"), "[WARN] hello");
    assert_eq!(formatter.format(Some(LogLevel::Error), "hello"), "[ERROR] hello");
}

#[test]
fn omits_level_tag_without_a_level() {
    let formatter = LogFormatter::new(false, true);
    assert_eq!(formatter.format(None, "hello"), "hello");
}

#[test]
fn timestamp_prefixes_the_message() {
    let formatter = LogFormatter::new(true, false);
    let formatted = formatter.format(None, "hello");

    assert!(formatted.ends_with(" hello"));
    // "YYYY-MM-DD HH:MM:SS.mmm " is 24 chars before the message.
    assert_eq!(formatted.len(), 24 + "hello".len());
}
