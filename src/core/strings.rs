//! String operations.
//!
//! The free functions work on present text. [`StringService`] accepts absent
//! input and maps it to each operation's neutral result.

use crate::utils::error::{Result, ServiceError};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static NON_ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());

static WORD_START_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w").unwrap());

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

static DIGIT_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

static SPECIAL_CHAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").unwrap());

static WHITESPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const VOWELS: &str = "aeiouAEIOU";

pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Ignores case and anything outside `[a-zA-Z0-9]`.
pub fn is_palindrome(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let cleaned = NON_ALPHANUMERIC_REGEX.replace_all(&lowered, "");
    cleaned.chars().eq(cleaned.chars().rev())
}

pub fn count_vowels(text: &str) -> usize {
    text.chars().filter(|c| VOWELS.contains(*c)).count()
}

pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

/// Lower-cases the text, then upper-cases the first word character after
/// every word boundary. Blank text comes back untouched.
pub fn to_title_case(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    WORD_START_REGEX
        .replace_all(&text.to_lowercase(), |caps: &regex::Captures| {
            caps[0].to_uppercase()
        })
        .into_owned()
}

pub fn remove_duplicates(text: &str) -> String {
    let mut seen = HashSet::new();
    text.chars().filter(|c| seen.insert(*c)).collect()
}

/// Earliest word wins a tie. Length is counted in characters.
pub fn find_longest_word(text: &str) -> String {
    text.split_whitespace()
        .fold(None::<(&str, usize)>, |longest, word| {
            let len = word.chars().count();
            match longest {
                Some((_, best)) if best >= len => longest,
                _ => Some((word, len)),
            }
        })
        .map(|(word, _)| word.to_string())
        .unwrap_or_default()
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Case-insensitive, whitespace is ignored.
pub fn is_anagram(first: &str, second: &str) -> bool {
    fn sorted_letters(text: &str) -> Vec<char> {
        let mut chars: Vec<char> = text
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        chars.sort_unstable();
        chars
    }
    sorted_letters(first) == sorted_letters(second)
}

/// Splits on single spaces, so runs of spaces are kept as-is.
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut capitalized: String = first.to_uppercase().collect();
                    capitalized.push_str(&chars.as_str().to_lowercase());
                    capitalized
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-overlapping literal matches. An empty needle matches at every char
/// boundary.
pub fn count_occurrences(text: &str, substring: &str) -> usize {
    text.matches(substring).count()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn extract_numbers(text: &str) -> Result<Vec<u64>> {
    DIGIT_RUN_REGEX
        .find_iter(text)
        .map(|m| {
            m.as_str()
                .parse::<u64>()
                .map_err(|_| ServiceError::NumberOutOfRange {
                    value: m.as_str().to_string(),
                })
        })
        .collect()
}

pub fn remove_special_chars(text: &str) -> String {
    let spaced = SPECIAL_CHAR_REGEX.replace_all(text, " ");
    WHITESPACE_RUN_REGEX
        .replace_all(&spaced, " ")
        .trim()
        .to_string()
}

/// Null-tolerant front for the string operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringService;

impl StringService {
    pub fn new() -> Self {
        Self
    }

    pub fn reverse(&self, text: Option<&str>) -> Option<String> {
        text.map(reverse)
    }

    pub fn is_palindrome(&self, text: Option<&str>) -> bool {
        text.is_some_and(is_palindrome)
    }

    pub fn count_vowels(&self, text: Option<&str>) -> usize {
        text.map_or(0, count_vowels)
    }

    pub fn to_upper_case(&self, text: Option<&str>) -> Option<String> {
        text.map(to_upper_case)
    }

    pub fn to_lower_case(&self, text: Option<&str>) -> Option<String> {
        text.map(to_lower_case)
    }

    pub fn to_title_case(&self, text: Option<&str>) -> Option<String> {
        text.map(to_title_case)
    }

    pub fn remove_duplicates(&self, text: Option<&str>) -> Option<String> {
        text.map(remove_duplicates)
    }

    pub fn find_longest_word(&self, text: Option<&str>) -> String {
        text.map(find_longest_word).unwrap_or_default()
    }

    pub fn count_words(&self, text: Option<&str>) -> usize {
        text.map_or(0, count_words)
    }

    pub fn is_anagram(&self, first: Option<&str>, second: Option<&str>) -> bool {
        match (first, second) {
            (Some(first), Some(second)) => is_anagram(first, second),
            _ => false,
        }
    }

    pub fn capitalize_words(&self, text: Option<&str>) -> Option<String> {
        text.map(capitalize_words)
    }

    pub fn count_occurrences(&self, text: Option<&str>, substring: Option<&str>) -> usize {
        match (text, substring) {
            (Some(text), Some(substring)) => count_occurrences(text, substring),
            _ => 0,
        }
    }

    pub fn is_valid_email(&self, email: Option<&str>) -> bool {
        email.is_some_and(is_valid_email)
    }

    pub fn extract_numbers(&self, text: Option<&str>) -> Result<Vec<u64>> {
        text.map_or_else(|| Ok(Vec::new()), extract_numbers)
    }

    pub fn remove_special_chars(&self, text: Option<&str>) -> Option<String> {
        text.map(remove_special_chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_boundaries() {
        assert_eq!(to_title_case("hello-world"), "Hello-World");
        assert_eq!(to_title_case("snake_case words"), "Snake_case Words");
    }

    #[test]
    fn test_extract_numbers_overflow() {
        let err = extract_numbers("id 99999999999999999999").unwrap_err();
        assert!(matches!(err, ServiceError::NumberOutOfRange { .. }));
    }

    #[test]
    fn test_reverse_multibyte() {
        assert_eq!(reverse("héllo"), "olléh");
    }
}
