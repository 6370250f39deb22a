/// Characters after which a chunk may end without cutting a phrase
const SENTENCE_BREAKS: &[char] = &['.', '!', '?', ',', ';', ':', '।', '\n'];

/// Split text into pieces at sentence punctuation, keeping the punctuation
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if SENTENCE_BREAKS.contains(&ch) {
            push_trimmed(&mut pieces, &current);
            current.clear();
        }
    }
    push_trimmed(&mut pieces, &current);

    pieces
}

/// Split text into chunks of at most `max_chars` characters for speech synthesis.
///
/// Sentences are packed together while they fit; longer sentences fall back
/// to word boundaries, and words longer than the limit are cut.
pub fn split_for_speech(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in split_sentences(text) {
        for part in fit_piece(&sentence, max_chars) {
            pack(&mut chunks, &mut current, part, max_chars);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

fn push_trimmed(pieces: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        pieces.push(trimmed.to_string());
    }
}

fn fit_piece(piece: &str, max_chars: usize) -> Vec<String> {
    if piece.chars().count() <= max_chars {
        return vec![piece.to_string()];
    }

    let mut parts = Vec::new();
    for word in piece.split_whitespace() {
        if word.chars().count() <= max_chars {
            parts.push(word.to_string());
        } else {
            let chars: Vec<char> = word.chars().collect();
            parts.extend(chars.chunks(max_chars).map(|c| c.iter().collect::<String>()));
        }
    }
    parts
}

fn pack(chunks: &mut Vec<String>, current: &mut String, part: String, max_chars: usize) {
    if current.is_empty() {
        *current = part;
        return;
    }

    let joined_len = current.chars().count() + 1 + part.chars().count();
    if joined_len <= max_chars {
        current.push(' ');
        current.push_str(&part);
    } else {
        chunks.push(std::mem::replace(current, part));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_keep_their_punctuation() {
        assert_eq!(
            split_sentences("Hello there. How are you?  Fine"),
            vec!["Hello there.", "How are you?", "Fine"]
        );
    }

    #[test]
    fn short_text_is_a_single_chunk() {
        assert_eq!(split_for_speech("  ನಮಸ್ಕಾರ  ", 100), vec!["ನಮಸ್ಕಾರ"]);
    }

    #[test]
    fn blank_text_yields_no_chunks() {
        assert!(split_for_speech(" \n\t ", 100).is_empty());
    }

    #[test]
    fn sentences_are_packed_until_the_limit() {
        let chunks = split_for_speech("One two. Three four. Five six.", 20);
        assert_eq!(chunks, vec!["One two. Three four.", "Five six."]);
    }

    #[test]
    fn long_sentences_break_on_words() {
        let chunks = split_for_speech("alpha beta gamma delta epsilon", 12);
        assert_eq!(chunks, vec!["alpha beta", "gamma delta", "epsilon"]);
    }

    #[test]
    fn oversized_words_are_cut_by_characters() {
        let chunks = split_for_speech("ಅಆಇಈಉಊಋ", 3);
        assert_eq!(chunks, vec!["ಅಆಇ", "ಈಉಊ", "ಋ"]);
    }

    #[test]
    fn no_chunk_exceeds_the_limit() {
        let text = "The quick brown fox jumps over the lazy dog, again and again; \
                    supercalifragilisticexpialidocious words appear. Then it ends!";
        for chunk in split_for_speech(text, 16) {
            assert!(chunk.chars().count() <= 16, "chunk too long: {chunk:?}");
        }
    }
}
