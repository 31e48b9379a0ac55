//! Style statistics: vocabulary richness, Spanish readability, dialogue and
//! rhythm. Computed from the same tokens as the quality report but never
//! scored.

use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;
use crate::core::analyzer::{count_words, TextStats};
use crate::types::{PunctuationCounts, ReadingLevel, StyleStatistics, WordFrequency};

/// Words must be longer than this to enter the top-words list
pub const TOP_WORD_MIN_LEN: usize = 3;

/// Entries in the top-words list
pub const TOP_WORDS: usize = 10;

const SPANISH_VOWELS: &str = "aáàäeéèëiíìïoóòöuúùü";

/// Discourse connectives looked up in the case-folded text
pub const CONNECTIVES: &[&str] = &[
    "sin embargo",
    "no obstante",
    "además",
    "por lo tanto",
    "en consecuencia",
    "asimismo",
    "por otro lado",
    "en primer lugar",
    "finalmente",
    "en resumen",
    "por ejemplo",
    "es decir",
    "en otras palabras",
    "aunque",
    "mientras que",
];

lazy_static! {
    /// Quoted speech ("...", «...») or a line introduced by a dash
    static ref RE_DIALOGUE: Regex = Regex::new(r#"["«][^"»]+["»]|[—–][^—–\n]+"#).unwrap();

    static ref RE_ELLIPSIS: Regex = Regex::new(r"\.\.\.|…").unwrap();
}

pub(crate) fn statistics(text: &str, stats: &TextStats<'_>) -> StyleStatistics {
    let word_count = stats.word_count();
    let words = word_count.max(1) as f64;

    let mut freq: HashMap<&str, usize> = HashMap::new();
    for word in &stats.folded {
        *freq.entry(word.as_str()).or_insert(0) += 1;
    }
    let unique_words = freq.len();

    let syllable_total: usize = stats.folded.iter().map(|w| syllables(w)).sum();
    let avg_syllables_per_word = syllable_total as f64 / words;
    let flesch_szigriszt = 206.835
        - 1.015 * stats.avg_words_per_sentence()
        - 60.0 * avg_syllables_per_word;

    let mente = stats
        .folded
        .iter()
        .filter(|w| w.ends_with("mente"))
        .count();

    let dialogue_words: usize = RE_DIALOGUE
        .find_iter(text)
        .map(|m| count_words(m.as_str()))
        .sum();

    let lowered = text.to_lowercase();
    let connectives_found = CONNECTIVES.iter().filter(|c| lowered.contains(*c)).count();

    StyleStatistics {
        unique_words,
        type_token_ratio: unique_words as f64 / words,
        top_words: top_words(&freq),
        avg_syllables_per_word,
        flesch_szigriszt,
        reading_level: ReadingLevel::from_score(flesch_szigriszt),
        mente_adverb_ratio: mente as f64 / words,
        dialogue_ratio: (dialogue_words as f64 / words).min(1.0),
        sentence_length_deviation: std_deviation(&stats.sentence_lengths),
        punctuation: PunctuationCounts {
            semicolons: text.matches(';').count(),
            ellipses: RE_ELLIPSIS.find_iter(text).count(),
            dashes: text.chars().filter(|c| matches!(c, '—' | '–')).count(),
        },
        connectives_found,
        connectives_per_paragraph: connectives_found as f64 / stats.paragraphs.len().max(1) as f64,
    }
}

/// Highest count first, ties alphabetical
fn top_words(freq: &HashMap<&str, usize>) -> Vec<WordFrequency> {
    let mut entries: Vec<(&str, usize)> = freq
        .iter()
        .filter(|(w, _)| w.chars().count() > TOP_WORD_MIN_LEN)
        .map(|(w, c)| (*w, *c))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .take(TOP_WORDS)
        .map(|(word, count)| WordFrequency {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Vowel groups in a lowercase word, at least one
fn syllables(word: &str) -> usize {
    let mut count = 0;
    let mut prev_vowel = false;
    for c in word.chars() {
        let vowel = SPANISH_VOWELS.contains(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    count.max(1)
}

fn std_deviation(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;
    let variance = values
        .iter()
        .map(|&v| (v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use crate::core::TextQualityAnalyzer;
    use crate::types::{ReadingLevel, StyleStatistics};

    fn style_of(text: &str) -> StyleStatistics {
        TextQualityAnalyzer::new().inspect(text).style
    }

    #[test]
    fn test_syllable_groups() {
        assert_eq!(super::syllables("casa"), 2);
        assert_eq!(super::syllables("canción"), 2);
        assert_eq!(super::syllables("murciélago"), 4);
        assert_eq!(super::syllables("y"), 1);
        assert_eq!(super::syllables("2024"), 1);
    }

    #[test]
    fn test_empty_text() {
        let style = style_of("");
        assert_eq!(style.unique_words, 0);
        assert_eq!(style.type_token_ratio, 0.0);
        assert!(style.top_words.is_empty());
        assert_eq!(style.sentence_length_deviation, 0.0);
        assert_eq!(style.dialogue_ratio, 0.0);
        assert_eq!(style.reading_level, ReadingLevel::VeryEasy);
    }

    #[test]
    fn test_type_token_ratio_is_case_folded() {
        let style = style_of("Casa casa CASA perro");
        assert_eq!(style.unique_words, 2);
        assert_eq!(style.type_token_ratio, 0.5);
    }

    #[test]
    fn test_top_words_order_and_length_filter() {
        let style = style_of("perro gato perro luna gato perro sol sol sol sol");
        let top: Vec<(&str, usize)> = style
            .top_words
            .iter()
            .map(|w| (w.word.as_str(), w.count))
            .collect();
        // "sol" has 3 characters and never qualifies
        assert_eq!(top, vec![("perro", 3), ("gato", 2), ("luna", 1)]);
    }

    #[test]
    fn test_top_words_capped() {
        let text = (0..15)
            .map(|i| format!("palabra{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(style_of(&text).top_words.len(), 10);
    }

    #[test]
    fn test_flesch_szigriszt() {
        // 4 words, 1 sentence, syllables 2+2+2+2
        let style = style_of("Casa mesa gato perro.");
        assert_eq!(style.avg_syllables_per_word, 2.0);
        let expected = 206.835 - 1.015 * 4.0 - 60.0 * 2.0;
        assert!((style.flesch_szigriszt - expected).abs() < 1e-9);
        assert_eq!(style.reading_level, ReadingLevel::Easy);
    }

    #[test]
    fn test_mente_adverbs() {
        let style = style_of("Caminaba lentamente y hablaba suavemente");
        assert!((style.mente_adverb_ratio - 2.0 / 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_dialogue_ratio() {
        let style = style_of("Ella dijo \"ven aquí ahora\" y se fue.");
        // 3 of 8 words are quoted
        assert!((style.dialogue_ratio - 3.0 / 8.0).abs() < 1e-12);

        let dashed = style_of("—Ven aquí.\nElla no respondió nada.");
        assert!((dashed.dialogue_ratio - 2.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_sentence_length_deviation() {
        // lengths 2 and 4: mean 3, deviation 1
        let style = style_of("Uno dos. Uno dos tres cuatro.");
        assert_eq!(style.sentence_length_deviation, 1.0);
        assert_eq!(style_of("Uno dos. Tres cuatro.").sentence_length_deviation, 0.0);
    }

    #[test]
    fn test_punctuation_counts() {
        let style = style_of("Esperó... y luego; nada… —dijo— otra vez; fin.");
        assert_eq!(style.punctuation.semicolons, 2);
        assert_eq!(style.punctuation.ellipses, 2);
        assert_eq!(style.punctuation.dashes, 2);
    }

    #[test]
    fn test_connectives() {
        let text = "Sin embargo, llegó tarde.\n\nAdemás, no traía nada. Sin embargo, sonrió.";
        let style = style_of(text);
        assert_eq!(style.connectives_found, 2);
        assert_eq!(style.connectives_per_paragraph, 1.0);
    }

    #[test]
    fn test_style_does_not_move_score() {
        let plain = TextQualityAnalyzer::new().analyze("Caminaba lentamente por la calle mojada.");
        let rich = TextQualityAnalyzer::new().analyze("Caminaba suavemente por la calle mojada.");
        assert_eq!(plain.quality_score, rich.quality_score);
    }
}
