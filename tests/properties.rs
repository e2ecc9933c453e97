//! Properties of the token stream that hold for any input.

use aoe2_rms::classify::is_whitespace;
use aoe2_rms::position::PositionTracker;
use aoe2_rms::{lex, Kind, SourceBuffer};
use proptest::prelude::*;

// Biased towards the characters the scanner treats specially.
fn script() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("/*".to_string()),
            Just("*/".to_string()),
            Just("/".to_string()),
            Just("*".to_string()),
            Just("{".to_string()),
            Just("}".to_string()),
            Just(" ".to_string()),
            Just("\t".to_string()),
            Just("\r\n".to_string()),
            Just("\n".to_string()),
            Just("\u{200B}".to_string()),
            Just("\u{00A0}".to_string()),
            "[a-zA-Z0-9_#<>()]{1,8}",
            any::<char>().prop_map(|c| c.to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn lexemes_reconstruct_the_input(input in script()) {
        prop_assert_eq!(lex(&input).reconstruct(), input);
    }

    #[test]
    fn tokens_are_adjacent_and_cover_the_file(input in script()) {
        let stream = lex(&input);
        let tracker = PositionTracker::new(&SourceBuffer::new(&input));
        if let (Some(first), Some(last)) = (stream.tokens().first(), stream.tokens().last()) {
            prop_assert_eq!(first.start(), tracker.position(0));
            prop_assert_eq!(last.end(), tracker.end_of_file());
        } else {
            prop_assert!(input.is_empty());
        }
        for token in stream.iter() {
            prop_assert!(token.start() <= token.end());
            prop_assert!(!token.lexeme().is_empty());
        }
        for pair in stream.tokens().windows(2) {
            prop_assert_eq!(pair[0].end(), pair[1].start());
        }
    }

    #[test]
    fn token_kinds_match_their_characters(input in script()) {
        let stream = lex(&input);
        for token in stream.iter() {
            match token.kind() {
                Kind::Whitespace => {
                    prop_assert!(token.lexeme().chars().all(is_whitespace));
                }
                Kind::Word => {
                    prop_assert!(!token.lexeme().chars().any(is_whitespace));
                }
                Kind::Comment => {
                    prop_assert!(token.lexeme().starts_with("/*"));
                    prop_assert!(token.lexeme().ends_with("*/"));
                    prop_assert!(token.lexeme().len() >= 4);
                }
                Kind::UnterminatedComment => {
                    prop_assert!(token.lexeme().starts_with("/*"));
                    prop_assert!(!token.lexeme()[2..].contains("*/"));
                }
            }
        }
        // Only the last token can be an unterminated comment.
        let count = stream.iter().filter(|t| t.kind() == Kind::UnterminatedComment).count();
        prop_assert!(count <= 1);
        if count == 1 {
            prop_assert!(stream.unterminated_comment().is_some());
        }
    }

    #[test]
    fn words_never_follow_words(input in script()) {
        let stream = lex(&input);
        for pair in stream.tokens().windows(2) {
            prop_assert!(!(pair[0].kind() == Kind::Word && pair[1].kind() == Kind::Word));
            prop_assert!(!(pair[0].is_whitespace() && pair[1].is_whitespace()));
        }
    }
}
