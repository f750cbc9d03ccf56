use super::token::Token;

/// Splits text on word boundaries, creating tokens of alternating words and
/// whitespace runs. The tokenization is lossless: concatenating the tokens
/// reproduces the input exactly.
///
/// ## Example
///
/// ```not_rust
/// "Hi there!" -> ["Hi", " ", "there!"]
/// ```
pub fn word_tokenizer(text: &str) -> Vec<Token> {
    let mut result = Vec::new();

    let mut previous_boundary_index = 0;
    let mut previous_char_is_whitespace = text.chars().next().is_none_or(char::is_whitespace);

    for (i, c) in text.char_indices() {
        let is_current_char_whitespace = c.is_whitespace();
        if previous_char_is_whitespace != is_current_char_whitespace {
            result.push(text[previous_boundary_index..i].into());
            previous_boundary_index = i;
        }

        previous_char_is_whitespace = is_current_char_whitespace;
    }

    if previous_boundary_index < text.len() {
        result.push(text[previous_boundary_index..].into());
    }

    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(Token::text).collect()
    }

    #[test]
    fn test_splits_on_word_boundaries() {
        assert_eq!(texts(&word_tokenizer("Hi there!")), vec!["Hi", " ", "there!"]);
        assert_eq!(texts(&word_tokenizer("")), Vec::<&str>::new());
        assert_eq!(
            texts(&word_tokenizer(" what? ")),
            vec![" ", "what?", " "]
        );
        assert_eq!(
            texts(&word_tokenizer(" hello, \nwhere are you?")),
            vec![" ", "hello,", " \n", "where", " ", "are", " ", "you?"]
        );
    }

    #[test_case("" ; "empty")]
    #[test_case("single" ; "one word")]
    #[test_case("  padded  with\t\tmixed   gaps " ; "mixed whitespace")]
    #[test_case("szia, világ! 🌍" ; "multi-byte characters")]
    fn test_tokenization_is_lossless(text: &str) {
        let reassembled = word_tokenizer(text)
            .iter()
            .map(Token::text)
            .collect::<String>();

        assert_eq!(reassembled, text);
    }
}
