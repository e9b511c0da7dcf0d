use crate::*;
use crate::noise::{self, DECORATIVE_POINTS, NOISE_RANGES};
use crate::utf8::{self, Decoder};
use ece_core::SanitizerConfig;
use proptest::prelude::*;

// ========== UTF-8 decoding ==========

#[test]
fn test_decode_ascii() {
    let d = utf8::decode_at(b"a", 0).unwrap();
    assert_eq!(d.codepoint, 'a' as u32);
    assert_eq!(d.len, 1);
    assert!(d.valid);
    assert!(d.is_ascii());
}

#[test]
fn test_decode_two_byte() {
    let d = utf8::decode_at("é".as_bytes(), 0).unwrap();
    assert_eq!(d.codepoint, 0xE9);
    assert_eq!(d.len, 2);
    assert!(d.valid);
    assert!(!d.is_ascii());
}

#[test]
fn test_decode_three_byte() {
    let d = utf8::decode_at("✓".as_bytes(), 0).unwrap();
    assert_eq!(d.codepoint, 0x2713);
    assert_eq!(d.len, 3);
}

#[test]
fn test_decode_four_byte() {
    let d = utf8::decode_at("😀".as_bytes(), 0).unwrap();
    assert_eq!(d.codepoint, 0x1F600);
    assert_eq!(d.len, 4);
}

#[test]
fn test_decode_truncated() {
    let d = utf8::decode_at(&[0xE2, 0x9C], 0).unwrap();
    assert!(!d.valid);
    assert_eq!(d.len, 1);
    assert_eq!(d.codepoint, 0xE2);
}

#[test]
fn test_decode_stray_continuation() {
    let d = utf8::decode_at(&[0x9C], 0).unwrap();
    assert!(!d.valid);
    assert_eq!(d.len, 1);
}

#[test]
fn test_decode_past_end() {
    assert!(utf8::decode_at(b"ab", 2).is_none());
}

#[test]
fn test_overlong_is_not_ascii() {
    let d = utf8::decode_at(&[0xC1, 0x9C], 0).unwrap();
    assert_eq!(d.codepoint, u32::from(b'\\'));
    assert!(!d.is_ascii());
}

#[test]
fn test_decoder_offsets() {
    let units: Vec<(usize, u32)> = Decoder::new("aé✓😀".as_bytes())
        .map(|(offset, d)| (offset, d.codepoint))
        .collect();
    assert_eq!(units, vec![(0, 0x61), (1, 0xE9), (3, 0x2713), (6, 0x1F600)]);
}

#[test]
fn test_decoder_next_byte() {
    let mut decoder = Decoder::new("\\é".as_bytes());
    assert_eq!(decoder.next().unwrap().1.codepoint, u32::from(b'\\'));
    assert_eq!(decoder.next_byte(), Some(0xC3));
    assert_eq!(decoder.position(), 2);
    let (_, stray) = decoder.next().unwrap();
    assert!(!stray.valid);
    assert!(decoder.next().is_none());
}

// ========== Noise tables ==========

#[test]
fn test_tables_sorted() {
    for pair in NOISE_RANGES.windows(2) {
        assert!(pair[0].0 <= pair[0].1);
        assert!(pair[0].1 < pair[1].0);
    }
    for pair in DECORATIVE_POINTS.windows(2) {
        assert!(pair[0] < pair[1]);
    }
}

#[test]
fn test_classify_boundaries() {
    assert_eq!(noise::classify(0x24FF), None);
    assert_eq!(noise::classify(0x2500), Some(NoiseClass::TerminalNoise));
    assert_eq!(noise::classify(0x259F), Some(NoiseClass::TerminalNoise));
    assert_eq!(noise::classify(0x27BF), Some(NoiseClass::TerminalNoise));
    assert_eq!(noise::classify(0x27C0), None);
    assert_eq!(noise::classify(0x1F2FF), None);
    assert_eq!(noise::classify(0x1F300), Some(NoiseClass::DecorativeEmoji));
    assert_eq!(noise::classify(0x1F64F), Some(NoiseClass::DecorativeEmoji));
    assert_eq!(noise::classify(0x1F650), None);
    assert_eq!(noise::classify(0x1F9FF), Some(NoiseClass::DecorativeEmoji));
    assert_eq!(noise::classify(0x1FA00), None);
}

#[test]
fn test_classify_points() {
    assert_eq!(noise::classify(0x2B50), Some(NoiseClass::DecorativeEmoji));
    // Check marks sit inside dingbats, terminal noise wins.
    assert_eq!(noise::classify(0x2713), Some(NoiseClass::TerminalNoise));
    assert!(noise::is_decorative_emoji(0x2713));
    assert!(noise::is_decorative_emoji(0x274E));
}

#[test]
fn test_classify_plain_text() {
    for c in "aZ09 é你好Привет→€".chars() {
        assert_eq!(noise::classify(c as u32), None, "{c}");
    }
}

// ========== Escapes ==========

#[test]
fn test_escape_newline() {
    assert_eq!(cleanse("a\\nb"), "a\nb");
}

#[test]
fn test_escape_carriage_return_dropped() {
    assert_eq!(cleanse("a\\rb"), "ab");
}

#[test]
fn test_escape_tab_quote_backslash() {
    assert_eq!(cleanse("a\\tb"), "a\tb");
    assert_eq!(cleanse("say \\\"hi\\\""), "say \"hi\"");
    assert_eq!(cleanse("C:\\\\dir"), "C:\\dir");
}

#[test]
fn test_escape_unknown_preserved() {
    assert_eq!(cleanse("\\x41 and \\u00e9"), "\\x41 and \\u00e9");
}

#[test]
fn test_escape_dangling() {
    assert_eq!(cleanse("trailing\\"), "trailing");
}

#[test]
fn test_escape_before_multibyte() {
    // The lead byte is taken as the escape terminator, the rest passes through.
    assert_eq!(cleanse("\\✓"), "\\✓");
    assert_eq!(cleanse("\\é"), "\\é");
}

#[test]
fn test_real_newline_untouched() {
    assert_eq!(cleanse("line1\nline2\r\n"), "line1\nline2\r\n");
}

// ========== Noise removal ==========

#[test]
fn test_checkmark_removed() {
    let result = cleanse("ok✓done");
    assert!(!result.contains('\u{2713}'));
    assert_eq!(result, "okdone");
}

#[test]
fn test_four_byte_emoji_removed_whole() {
    let result = cleanse_bytes("a😀b".as_bytes());
    assert_eq!(result, b"ab");
}

#[test]
fn test_box_drawing_removed() {
    assert_eq!(cleanse("┌──┐\n│ cell │\n└──┘"), "\n cell \n");
}

#[test]
fn test_blocks_and_shapes_removed() {
    assert_eq!(cleanse("█▓ progress ■□"), " progress ");
}

#[test]
fn test_star_and_crosses_removed() {
    assert_eq!(cleanse("⭐ rated ❌ failed ❎"), " rated  failed ");
}

#[test]
fn test_pictographs_removed() {
    assert_eq!(cleanse("🚀 launch 🤖 bot 🌍"), " launch  bot ");
}

#[test]
fn test_semantic_unicode_kept() {
    let text = "héllo 你好 Привет → €5 ½";
    assert_eq!(cleanse(text), text);
}

// ========== Markers ==========

#[test]
fn test_truncated_marker() {
    assert_eq!(cleanse("x[Truncated]y"), "xy");
}

#[test]
fn test_ellipsis_marker() {
    assert_eq!(cleanse("x[...]y"), "xy");
}

#[test]
fn test_markers_repeated() {
    assert_eq!(cleanse("[...]a[Truncated]b[...][...]c[Truncated]"), "abc");
}

#[test]
fn test_marker_formed_by_removal() {
    assert_eq!(cleanse("[[...]...]"), "");
    assert_eq!(cleanse("[Trunc[...]ated]end"), "end");
}

#[test]
fn test_marker_formed_by_noise_removal() {
    assert_eq!(cleanse("a[Trunc✓ated]b"), "ab");
    assert_eq!(cleanse("a[..\\r.]b"), "ab");
}

#[test]
fn test_partial_markers_kept() {
    assert_eq!(cleanse("[Truncate] [..] [Truncated"), "[Truncate] [..] [Truncated");
}

#[test]
fn test_marker_stripper_standalone() {
    let stripper = MarkerStripper::new(["<cut>"]);
    assert_eq!(stripper.strip("a<cut>b<c<cut>ut>c"), "abc");
    assert!(MarkerStripper::new([""]).is_empty());
}

// ========== Malformed input ==========

#[test]
fn test_truncated_sequence_passes_through() {
    let input = [b'a', b'b', b'c', 0xE2, 0x9C];
    assert_eq!(cleanse_bytes(&input), input.to_vec());
}

#[test]
fn test_lone_lead_byte_at_end() {
    let input = [b'o', b'k', 0xF0];
    assert_eq!(cleanse_bytes(&input), input.to_vec());
}

#[test]
fn test_truncated_after_noise() {
    let mut input = "█".as_bytes().to_vec();
    input.extend_from_slice(&[0xF0, 0x9F]);
    assert_eq!(cleanse_bytes(&input), vec![0xF0, 0x9F]);
}

#[test]
fn test_empty() {
    assert_eq!(cleanse(""), "");
    assert!(cleanse_bytes(&[]).is_empty());
}

// ========== Configuration ==========

#[test]
fn test_keep_terminal_noise() {
    let config = SanitizerConfig { strip_terminal_noise: false, ..Default::default() };
    let sanitizer = Sanitizer::from_config(&config);
    assert_eq!(sanitizer.cleanse("┌─┐ ok✓ 😀"), "┌─┐ ok ");
}

#[test]
fn test_keep_emoji() {
    let config = SanitizerConfig { strip_decorative_emoji: false, ..Default::default() };
    let sanitizer = Sanitizer::from_config(&config);
    // ✓ is still dingbats noise.
    assert_eq!(sanitizer.cleanse("┌─┐ ok✓ 😀"), " ok 😀");
}

#[test]
fn test_keep_all_noise() {
    let config = SanitizerConfig {
        strip_terminal_noise: false,
        strip_decorative_emoji: false,
        ..Default::default()
    };
    let sanitizer = Sanitizer::from_config(&config);
    assert_eq!(sanitizer.cleanse("┌─┐ ok✓ 😀"), "┌─┐ ok✓ 😀");
}

#[test]
fn test_custom_markers() {
    let config = SanitizerConfig { markers: vec!["<snip>".into()], ..Default::default() };
    let sanitizer = Sanitizer::from_config(&config);
    assert_eq!(sanitizer.cleanse("a<snip>b[...]c"), "ab[...]c");
}

#[test]
fn test_no_markers() {
    let config = SanitizerConfig { markers: Vec::new(), ..Default::default() };
    let sanitizer = Sanitizer::from_config(&config);
    assert_eq!(sanitizer.cleanse("x[Truncated]y"), "x[Truncated]y");
}

// ========== Properties ==========

fn noisy_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("[Truncated]"), Just("[...]"), Just("["), Just("]"), Just("..."),
            Just("Trunc"), Just("ated"), Just("✓"), Just("😀"), Just("─"),
            Just("abc"), Just(" "), Just("\n"), Just("é"), Just("你好"),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_plain_text_unchanged(text in "[a-zA-Z0-9 .,;:!?\n\u{e9}\u{4f60}\u{597d}]{0,64}") {
        prop_assert_eq!(cleanse(&text), text);
    }

    #[test]
    fn prop_idempotent(text in noisy_text()) {
        let once = cleanse(&text);
        prop_assert_eq!(cleanse(&once), once);
    }

    #[test]
    fn prop_output_never_longer(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        prop_assert!(cleanse_bytes(&bytes).len() <= bytes.len());
    }

    #[test]
    fn prop_no_markers_remain(text in any::<String>()) {
        let out = cleanse(&text);
        prop_assert!(!out.contains("[Truncated]"));
        prop_assert!(!out.contains("[...]"));
    }

    #[test]
    fn prop_no_noise_without_escapes(text in any::<String>().prop_filter("no backslash", |s| !s.contains('\\'))) {
        let out = cleanse(&text);
        prop_assert!(out.chars().all(|c| noise::classify(c as u32).is_none()));
    }
}
