//! Text statistics backing the input counter and the post-translation
//! statistics line.

use crate::shared::types::TextAnalysisResponse;
use unicode_segmentation::UnicodeSegmentation;

pub fn analyze(text: &str) -> TextAnalysisResponse {
    TextAnalysisResponse {
        word_count: text.unicode_words().count(),
        char_count: text.chars().count(),
        char_count_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        grapheme_count: text.graphemes(true).count(),
        line_count: if text.is_empty() { 0 } else { text.lines().count() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_ascii_text() {
        let stats = analyze("hello world");
        assert_eq!(stats.word_count, 2);
        assert_eq!(stats.char_count, 11);
        assert_eq!(stats.char_count_no_spaces, 10);
        assert_eq!(stats.line_count, 1);
    }

    #[test]
    fn empty_text_is_all_zeroes() {
        let stats = analyze("");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.char_count, 0);
        assert_eq!(stats.line_count, 0);
    }

    #[test]
    fn counts_lines() {
        assert_eq!(analyze("one\ntwo\nthree").line_count, 3);
    }

    #[test]
    fn graphemes_cluster_combined_emoji() {
        // Family emoji is several scalars but one extended grapheme cluster
        let stats = analyze("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}");
        assert_eq!(stats.grapheme_count, 1);
        assert!(stats.char_count > 1);
    }
}
