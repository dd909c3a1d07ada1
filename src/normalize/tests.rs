use super::*;

fn normalizer() -> TextNormalizer {
    TextNormalizer::new(1000, false)
}

#[test]
fn strips_urls() {
    let text = normalizer()
        .normalize("Check this out: http://x.co 😊")
        .unwrap();
    assert_eq!(text.as_str(), "Check this out:");
}

#[test]
fn strips_https_urls_case_insensitively() {
    let text = normalizer()
        .normalize("see HTTPS://Example.COM/path?q=1 now")
        .unwrap();
    assert_eq!(text.as_str(), "see now");
}

#[test]
fn strips_email_addresses() {
    let text = normalizer()
        .normalize("contact support@example.com for help")
        .unwrap();
    assert_eq!(text.as_str(), "contact for help");
}

#[test]
fn strips_emoji_ranges() {
    let text = normalizer().normalize("love it 😍🚀 so much").unwrap();
    assert_eq!(text.as_str(), "love it so much");
}

#[test]
fn collapses_whitespace_and_trims() {
    let text = normalizer()
        .normalize("  too\t\tmany\n\n spaces  ")
        .unwrap();
    assert_eq!(text.as_str(), "too many spaces");
}

#[test]
fn collapses_repeated_punctuation() {
    let text = normalizer().normalize("Great!!! Really??").unwrap();
    assert_eq!(text.as_str(), "Great! Really?");
}

#[test]
fn preserves_case_by_default() {
    let text = normalizer().normalize("Mixed CASE Input").unwrap();
    assert_eq!(text.as_str(), "Mixed CASE Input");
}

#[test]
fn lowercases_when_configured() {
    let text = TextNormalizer::new(1000, true)
        .normalize("Mixed CASE Input")
        .unwrap();
    assert_eq!(text.as_str(), "mixed case input");
}

#[test]
fn idempotent_on_assorted_inputs() {
    let inputs = [
        "plain text",
        "Check this out: http://x.co 😊",
        "  spaced   out\ttext  ",
        "Great!!! mail me at a@b.com or visit https://b.example/x",
        "🚀🚀🚀",
        "ünïcode façade",
        "trailing punct!!",
    ];

    for normalizer in [
        TextNormalizer::new(1000, false),
        TextNormalizer::new(24, false),
        TextNormalizer::new(1000, true),
    ] {
        for input in inputs {
            let Ok(once) = normalizer.normalize(input) else {
                continue;
            };
            let twice = normalizer.normalize(once.as_str()).unwrap();
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}

#[test]
fn truncates_after_cleanup() {
    // Cleanup first: the URL disappears entirely instead of being cut mid-way.
    let text = TextNormalizer::new(10, false)
        .normalize("short http://a-very-long-url.example.com/path")
        .unwrap();
    assert_eq!(text.as_str(), "short");
}

#[test]
fn truncation_rounds_down_to_char_boundary() {
    // "aé" is three bytes; a two-byte limit must not split the 'é'.
    let text = TextNormalizer::new(2, false).normalize("aé").unwrap();
    assert_eq!(text.as_str(), "a");
}

#[test]
fn truncation_trims_exposed_trailing_whitespace() {
    let text = TextNormalizer::new(3, false).normalize("ab cd").unwrap();
    assert_eq!(text.as_str(), "ab");
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(normalizer().normalize(""), Err(NormalizeError::Empty));
    assert_eq!(normalizer().normalize("   \t\n"), Err(NormalizeError::Empty));
}

#[test]
fn input_reduced_to_nothing_is_rejected() {
    assert_eq!(
        normalizer().normalize("http://x.co"),
        Err(NormalizeError::Empty)
    );
    assert_eq!(normalizer().normalize("😊 😊"), Err(NormalizeError::Empty));
}

#[test]
fn truncation_to_nothing_is_rejected() {
    // One byte cannot hold the two-byte 'é'.
    assert_eq!(
        TextNormalizer::new(1, false).normalize("é"),
        Err(NormalizeError::Empty)
    );
}
