use jarvis_tools::summary::{extract_summary, summarize, TRUNCATION_SUFFIX};

#[test]
fn explicit_summary_section_wins_regardless_of_budget() {
    let text = "## Summary\nThe short version.\n## Next\nMore detail here.";
    // max_length of 1 would otherwise truncate almost everything.
    assert_eq!(summarize(text, 1, true), "The short version.");
}

#[test]
fn summary_body_is_trimmed() {
    let text = "## Summary\n\n   spaced out body   \n\n## Other";
    assert_eq!(extract_summary(text).as_deref(), Some("spaced out body"));
}

#[test]
fn heading_match_is_case_insensitive() {
    let text = "## SUMMARY\nLoud body.\n## tail";
    assert_eq!(extract_summary(text).as_deref(), Some("Loud body."));
}

#[test]
fn conclusion_heading_is_recognized() {
    let text = "intro\n\n## Conclusion\nWrap-up text.";
    assert_eq!(extract_summary(text).as_deref(), Some("Wrap-up text."));
}

#[test]
fn inline_summary_prefix_is_recognized() {
    let text = "Summary:\nJust the gist.\n\nEverything else.";
    assert_eq!(extract_summary(text).as_deref(), Some("Just the gist."));
}

#[test]
fn in_summary_phrase_is_recognized() {
    let text = "Lots of words. In summary, it worked fine.\n\nAppendix.";
    assert_eq!(extract_summary(text).as_deref(), Some("it worked fine."));
}

#[test]
fn first_pattern_in_priority_order_wins() {
    // Both a `##` summary and a `###` conclusion exist; the `##` summary
    // pattern is earlier in the list so its body must be returned.
    let text = "### Conclusion\nconclusion body\n\n## Summary\nsummary body\n## End";
    assert_eq!(extract_summary(text).as_deref(), Some("summary body"));
}

#[test]
fn no_pattern_returns_none() {
    assert_eq!(extract_summary("plain prose without any markers"), None);
}

#[test]
fn long_text_without_summary_is_truncated_exactly() {
    let text = "a".repeat(50);
    let expected = format!("{}{}", "a".repeat(10), TRUNCATION_SUFFIX);
    assert_eq!(summarize(&text, 10, false), expected);
    // Same outcome when extraction is preferred but nothing matches.
    assert_eq!(summarize(&text, 10, true), expected);
}

#[test]
fn truncation_counts_characters_not_bytes() {
    let text = "é".repeat(20);
    let out = summarize(&text, 5, false);
    assert_eq!(out, format!("{}{}", "é".repeat(5), TRUNCATION_SUFFIX));
}

#[test]
fn short_text_passes_through_unchanged() {
    assert_eq!(summarize("short text", 1000, false), "short text");
    assert_eq!(summarize("short text", 1000, true), "short text");
}

#[test]
fn text_at_exact_budget_is_not_truncated() {
    let text = "x".repeat(10);
    assert_eq!(summarize(&text, 10, false), text);
}
