use proptest::prelude::*;
use wikibot::chunker::{chunk, postscript, split_word_safe};

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_éß ,.;:!?()\n-]{0,400}").unwrap()
}

proptest! {
    #[test]
    fn pieces_reassemble_the_input(text in text_strategy(), limit in 1usize..80) {
        let pieces = split_word_safe(&text, limit);
        prop_assert_eq!(pieces.concat(), text.as_str());
        prop_assert!(pieces.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn oversized_pieces_are_a_single_run(text in text_strategy(), limit in 1usize..80) {
        for piece in split_word_safe(&text, limit) {
            if piece.chars().count() > limit {
                let words = piece.chars().all(is_word);
                let gaps = piece.chars().all(|c| !is_word(c));
                prop_assert!(words || gaps, "{piece:?} exceeds {limit}");
            }
        }
    }

    #[test]
    fn cuts_never_land_inside_a_word(text in text_strategy(), limit in 1usize..80) {
        let pieces = split_word_safe(&text, limit);
        for pair in pieces.windows(2) {
            let before = pair[0].chars().last().unwrap();
            let after = pair[1].chars().next().unwrap();
            prop_assert!(
                !(is_word(before) && is_word(after)),
                "cut between {before:?} and {after:?}"
            );
        }
    }

    #[test]
    fn chunks_carry_their_position(text in text_strategy(), limit in 1usize..80) {
        let pieces = split_word_safe(&text, limit);
        let chunks = chunk(&text, limit);
        prop_assert_eq!(chunks.len(), pieces.len().max(1));
        for (i, (c, piece)) in chunks.iter().zip(&pieces).enumerate() {
            let tail = postscript(i, chunks.len());
            prop_assert!(c.ends_with(&tail));
            prop_assert_eq!(&c[..c.len() - tail.len()], piece.trim_end());
        }
    }
}

#[test]
fn long_word_stands_alone() {
    let text = "a supercalifragilistic word";
    assert_eq!(
        split_word_safe(text, 5),
        vec!["a ", "supercalifragilistic", " word"]
    );
}

#[test]
fn empty_text_is_one_chunk() {
    assert_eq!(chunk("", 100), vec![" (1/1)"]);
}
