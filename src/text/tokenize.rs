// Word-level tokenization for English prose.
//
// Whitespace-separated chunks are split further: punctuation at either edge
// becomes its own token, and clitic contractions ("n't", "'s", "'ll", ...)
// are detached from their host word. Punctuation inside a chunk ("u.s.",
// "well-known", "1990s") stays attached, so such tokens are later rejected
// as non-alphabetic rather than split into fragments.

/// Contraction suffixes detached from the host word, longest first.
const CLITICS: &[&str] = &["n't", "'re", "'ve", "'ll", "'s", "'d", "'m"];

/// Split text into word and punctuation tokens, preserving order.
pub fn word_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        let chunk = chunk.replace(['\u{2019}', '\u{2018}'], "'");
        split_chunk(&chunk, &mut tokens);
    }
    tokens
}

fn is_edge_punctuation(c: char) -> bool {
    !c.is_alphanumeric()
}

fn split_chunk(chunk: &str, out: &mut Vec<String>) {
    let without_leading = chunk.trim_start_matches(is_edge_punctuation);
    let leading = &chunk[..chunk.len() - without_leading.len()];
    let core = without_leading.trim_end_matches(is_edge_punctuation);
    let trailing = &without_leading[core.len()..];

    out.extend(leading.chars().map(String::from));

    if !core.is_empty() {
        match detach_clitic(core) {
            Some((host, clitic)) => {
                if !host.is_empty() {
                    out.push(host.to_string());
                }
                out.push(clitic.to_string());
            }
            None => out.push(core.to_string()),
        }
    }

    out.extend(trailing.chars().map(String::from));
}

fn detach_clitic(word: &str) -> Option<(&str, &str)> {
    let lower = word.to_lowercase();
    CLITICS.iter().find_map(|clitic| {
        if lower.ends_with(clitic) && word.len() > clitic.len() {
            let split = word.len() - clitic.len();
            word.is_char_boundary(split)
                .then(|| (&word[..split], &word[split..]))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_punctuation_is_split() {
        assert_eq!(
            word_tokens("hello, world!"),
            vec!["hello", ",", "world", "!"]
        );
    }

    #[test]
    fn contractions_detached() {
        assert_eq!(word_tokens("don't"), vec!["do", "n't"]);
        assert_eq!(word_tokens("nation's"), vec!["nation", "'s"]);
        assert_eq!(word_tokens("we\u{2019}ll"), vec!["we", "'ll"]);
    }

    #[test]
    fn internal_punctuation_kept() {
        assert_eq!(word_tokens("u.s. well-known"), vec!["u.s", ".", "well-known"]);
    }

    #[test]
    fn blank_input() {
        assert!(word_tokens("").is_empty());
        assert!(word_tokens(" \n\t ").is_empty());
    }
}
