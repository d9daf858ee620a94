use fetchfmt::help::format_help;

#[test]
fn test_format_help() {
    let descriptions = vec!["Name".to_string(), "Thread count".to_string()];
    assert_eq!(
        format_help("CPU", "{1} ({2})", &descriptions),
        "CPU format:\n  default: {1} ({2})\n  {1}: Name\n  {2}: Thread count\n"
    );
}

#[test]
fn test_format_help_without_descriptions() {
    assert_eq!(
        format_help("Theme", "{}", &[]),
        "Theme format:\n  default: {}\n"
    );
}
