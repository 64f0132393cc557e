//! # Text Normalizer
//!
//! Cleanup for noisy social-media text, applied line by line before
//! vocabulary construction and vectorization.

use regex::Regex;

/// Character class for emoticon eyes.
const EYES: &str = "[8:=;]";

/// Character class for an optional emoticon nose.
const NOSE: &str = "['`\\-]?";

/// Line cleanup for noisy social-media text.
///
/// Holds one compiled pattern per substitution step. Substitutions are
/// applied in a fixed order; later patterns can re-match residue left by
/// earlier ones (URLs are stripped before numeral collapsing, for example),
/// so the order is part of the contract.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    url: Regex,
    mention: Regex,
    hashtag: Regex,
    slash: Regex,
    smile: Regex,
    lol: Regex,
    sad: Regex,
    neutral: Regex,
    heart: Regex,
    number: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    /// Compile the substitution patterns.
    ///
    /// ## Panics
    /// Panics if a built-in pattern fails to compile.
    pub fn new() -> Self {
        let compile =
            |pattern: &str| Regex::new(pattern).expect("regex pattern compilation failed");

        Self {
            url: compile(r"https?://\S+\b|www\.(\w+\.)+\S*"),
            mention: compile(r"@\w+"),
            hashtag: compile(r"#\S+"),
            slash: compile("/"),
            smile: compile(&format!("{EYES}{NOSE}[)dD]+|[)dD]+{NOSE}{EYES}")),
            lol: compile(&format!("{EYES}{NOSE}p+")),
            sad: compile(&format!("{EYES}{NOSE}\\(+|\\)+{NOSE}{EYES}")),
            neutral: compile(&format!("{EYES}{NOSE}[/|l*]")),
            heart: compile("<3"),
            number: compile(r"[-+]?[.\d]*[\d]+[:,.\d]*"),
        }
    }

    /// Clean one line of raw text.
    ///
    /// Deterministic and pure; a line that matches no pattern is returned
    /// unchanged. Removes URLs outright, then replaces mentions, hashtags,
    /// emoticons (smile/laugh/sad/neutral families), hearts, and numeral
    /// tokens with a single space, and spaces out standalone slashes.
    ///
    /// ## Arguments
    /// * `line` - The raw input line.
    ///
    /// ## Returns
    /// The cleaned line.
    pub fn normalize(
        &self,
        line: &str,
    ) -> String {
        let line = self.url.replace_all(line, "");
        let line = self.mention.replace_all(&line, " ");
        let line = self.hashtag.replace_all(&line, " ");
        let line = self.slash.replace_all(&line, " / ");
        let line = self.smile.replace_all(&line, " ");
        let line = self.lol.replace_all(&line, " ");
        let line = self.sad.replace_all(&line, " ");
        let line = self.neutral.replace_all(&line, " ");
        let line = self.heart.replace_all(&line, " ");
        let line = self.number.replace_all(&line, " ");
        line.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_removed() {
        let norm = TextNormalizer::new();

        assert_eq!(norm.normalize("see https://example.com/x for more"), "see  for more");
        assert_eq!(norm.normalize("see www.example.com for more"), "see  for more");
    }

    #[test]
    fn test_mentions_and_hashtags() {
        let norm = TextNormalizer::new();

        assert_eq!(norm.normalize("@alice hello"), "  hello");
        assert_eq!(norm.normalize("hello #rustlang world"), "hello   world");
    }

    #[test]
    fn test_slashes_are_spaced() {
        let norm = TextNormalizer::new();

        assert_eq!(norm.normalize("either/or"), "either / or");
    }

    #[test]
    fn test_emoticons() {
        let norm = TextNormalizer::new();

        assert_eq!(norm.normalize("great :)"), "great  ");
        assert_eq!(norm.normalize("great :-D"), "great  ");
        assert_eq!(norm.normalize("oh no :("), "oh no  ");
        assert_eq!(norm.normalize("haha :p"), "haha  ");
        assert_eq!(norm.normalize("hmm :|"), "hmm  ");
        assert_eq!(norm.normalize("love <3 you"), "love   you");
    }

    #[test]
    fn test_numbers_collapse_to_one_space() {
        let norm = TextNormalizer::new();

        assert_eq!(norm.normalize("call 555,123.45 now"), "call   now");
        assert_eq!(norm.normalize("-12 degrees"), "  degrees");
        assert_eq!(norm.normalize("+3.5 stars"), "  stars");
    }

    #[test]
    fn test_url_strip_happens_before_number_collapse() {
        let norm = TextNormalizer::new();

        // The digits inside the URL disappear with it instead of leaving
        // a stray space behind.
        assert_eq!(norm.normalize("https://example.com/42 ok"), " ok");
    }

    #[test]
    fn test_unmatched_text_is_unchanged() {
        let norm = TextNormalizer::new();

        assert_eq!(norm.normalize("plain words only"), "plain words only");
        assert_eq!(norm.normalize(""), "");
    }
}
