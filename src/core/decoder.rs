//! Maps free-form roll tokens to die faces and back.

use crate::domain::model::DieFace;

// Scanned in order; the first word the token is a prefix of wins.
const CANDIDATES: [(&str, DieFace); 5] = [
    ("two", DieFace::Two),
    ("three", DieFace::Three),
    ("four", DieFace::Four),
    ("five", DieFace::Five),
    ("six", DieFace::Six),
];

/// Decodes a roll token, case-insensitively.
///
/// The token matches a face when the face's English word starts with it, so
/// `"t"` is `Two`, `"th"` is `Three` and `"s"` is `Six`. The empty token, `"o"`
/// and anything that matches no word decode to `One`; this never fails.
pub fn decode(token: &str) -> DieFace {
    let token = token.to_lowercase();

    if token.is_empty() || token == "o" {
        return DieFace::One;
    }

    match CANDIDATES.iter().find(|(word, _)| word.starts_with(token.as_str())) {
        Some(&(_, face)) => face,
        None => {
            tracing::trace!("unrecognised roll token {:?}, using One", token);
            DieFace::One
        }
    }
}

pub fn encode(face: DieFace) -> &'static str {
    face.word()
}

/// Display word for a raw pip count, `"ERROR"` outside 1..=6.
pub fn encode_value(value: u8) -> &'static str {
    DieFace::from_value(value).map_or("ERROR", encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_words_round_trip() {
        for face in DieFace::ALL {
            let word = face.word();
            assert_eq!(decode(word), face);
            assert_eq!(decode(&word.to_uppercase()), face);
            assert_eq!(decode(&word.to_lowercase()), face);
            assert_eq!(encode(decode(word)), word);
        }
    }

    #[test]
    fn test_empty_and_o_are_one() {
        assert_eq!(decode(""), DieFace::One);
        assert_eq!(decode("o"), DieFace::One);
        assert_eq!(decode("O"), DieFace::One);
    }

    #[test]
    fn test_prefixes_resolve_in_candidate_order() {
        assert_eq!(decode("t"), DieFace::Two);
        assert_eq!(decode("tw"), DieFace::Two);
        assert_eq!(decode("th"), DieFace::Three);
        assert_eq!(decode("THR"), DieFace::Three);
        assert_eq!(decode("f"), DieFace::Four);
        assert_eq!(decode("fi"), DieFace::Five);
        assert_eq!(decode("s"), DieFace::Six);
        assert_eq!(decode("Si"), DieFace::Six);
    }

    #[test]
    fn test_token_longer_than_word_falls_back() {
        // The word must start with the token, not the other way round.
        assert_eq!(decode("sixes"), DieFace::One);
        assert_eq!(decode("twos"), DieFace::One);
    }

    #[test]
    fn test_garbage_falls_back_to_one() {
        assert_eq!(decode("seven"), DieFace::One);
        assert_eq!(decode("on"), DieFace::One);
        assert_eq!(decode(" six"), DieFace::One);
        assert_eq!(decode("6"), DieFace::One);
    }

    #[test]
    fn test_decode_ignores_case() {
        for token in ["", "o", "t", "Th", "fOuR", "FIV", "sIx", "junk", "SiXtY"] {
            let lower = decode(&token.to_lowercase());
            assert_eq!(decode(token), lower);
            assert_eq!(decode(&token.to_uppercase()), lower);
        }
    }

    #[test]
    fn test_encode_value() {
        assert_eq!(encode_value(1), "One");
        assert_eq!(encode_value(6), "Six");
        assert_eq!(encode_value(0), "ERROR");
        assert_eq!(encode_value(7), "ERROR");
    }
}
