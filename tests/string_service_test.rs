//! Tests for the string operations and the null-tolerant service front.

use demo_services::core::strings;
use demo_services::{ServiceError, StringService};

#[test]
fn test_reverse() {
    let cases = vec![
        ("hello", "olleh"),
        ("world", "dlrow"),
        ("12345", "54321"),
        ("racecar", "racecar"),
        ("A", "A"),
        ("", ""),
    ];

    for (input, expected) in cases {
        assert_eq!(strings::reverse(input), expected, "reverse({:?})", input);
    }
}

#[test]
fn test_is_palindrome() {
    let cases = vec![
        ("racecar", true),
        ("level", true),
        ("deed", true),
        ("Noon", true),
        ("A man, a plan, a canal: Panama", true),
        ("Was it a car or a cat I saw?", true),
        ("", true),
        ("hello", false),
        ("world", false),
        ("java", false),
    ];

    for (input, expected) in cases {
        assert_eq!(strings::is_palindrome(input), expected, "is_palindrome({:?})", input);
    }
}

#[test]
fn test_count_vowels() {
    let cases = vec![
        ("hello", 2),
        ("world", 1),
        ("aeiou", 5),
        ("AEIOU", 5),
        ("rhythm", 0),
        ("programming", 3),
        ("TEST", 1),
        ("", 0),
    ];

    for (input, expected) in cases {
        assert_eq!(strings::count_vowels(input), expected, "count_vowels({:?})", input);
    }
}

#[test]
fn test_upper_and_lower_case() {
    assert_eq!(strings::to_upper_case("HeLLo WoRLd"), "HELLO WORLD");
    assert_eq!(strings::to_upper_case("HELLO"), "HELLO");
    assert_eq!(strings::to_lower_case("HeLLo WoRLd"), "hello world");
    assert_eq!(strings::to_lower_case(""), "");
}

#[test]
fn test_to_title_case() {
    let cases = vec![
        ("hello world", "Hello World"),
        ("python programming", "Python Programming"),
        ("javascript is awesome", "Javascript Is Awesome"),
        ("HELLO WORLD", "Hello World"),
        ("hello   world", "Hello   World"),
        ("a", "A"),
        ("", ""),
        ("   ", "   "),
    ];

    for (input, expected) in cases {
        assert_eq!(strings::to_title_case(input), expected, "to_title_case({:?})", input);
    }
}

#[test]
fn test_remove_duplicates() {
    let cases = vec![
        ("hello", "helo"),
        ("world", "world"),
        ("mississippi", "misp"),
        ("aabbcc", "abc"),
        ("a", "a"),
        ("", ""),
    ];

    for (input, expected) in cases {
        assert_eq!(strings::remove_duplicates(input), expected, "remove_duplicates({:?})", input);
    }
}

#[test]
fn test_find_longest_word() {
    assert_eq!(strings::find_longest_word("The quick brown fox"), "quick");
    assert_eq!(strings::find_longest_word("  spaced   out  words "), "spaced");
    assert_eq!(strings::find_longest_word("one"), "one");
    assert_eq!(strings::find_longest_word("   "), "");
    assert_eq!(strings::find_longest_word(""), "");
}

#[test]
fn test_count_words() {
    assert_eq!(strings::count_words("hello world"), 2);
    assert_eq!(strings::count_words("  leading and trailing  "), 3);
    assert_eq!(strings::count_words("tabs\tand\nnewlines"), 3);
    assert_eq!(strings::count_words("   "), 0);
    assert_eq!(strings::count_words(""), 0);
}

#[test]
fn test_is_anagram() {
    assert!(strings::is_anagram("listen", "silent"));
    assert!(strings::is_anagram("Dormitory", "Dirty room"));
    assert!(strings::is_anagram("", ""));
    assert!(!strings::is_anagram("hello", "world"));
    assert!(!strings::is_anagram("abc", "abcd"));
}

#[test]
fn test_capitalize_words() {
    assert_eq!(strings::capitalize_words("hello world"), "Hello World");
    assert_eq!(strings::capitalize_words("hELLO wORLD"), "Hello World");
    assert_eq!(strings::capitalize_words("hello  world"), "Hello  World");
    assert_eq!(strings::capitalize_words(""), "");
}

#[test]
fn test_count_occurrences() {
    assert_eq!(strings::count_occurrences("hello hello hello", "hello"), 3);
    assert_eq!(strings::count_occurrences("aaaa", "aa"), 2);
    assert_eq!(strings::count_occurrences("hello", "xyz"), 0);
    assert_eq!(strings::count_occurrences("a.b.c", "."), 2);
}

#[test]
fn test_is_valid_email() {
    let valid = [
        "user@example.com",
        "first.last+tag@sub.domain.org",
        "a_b%c-d@host-name.io",
    ];
    let invalid = [
        "",
        "plainaddress",
        "@missing-local.com",
        "user@",
        "user@domain",
        "user@domain.c",
        "user name@example.com",
    ];

    for email in valid {
        assert!(strings::is_valid_email(email), "{} should be valid", email);
    }
    for email in invalid {
        assert!(!strings::is_valid_email(email), "{} should be invalid", email);
    }
}

#[test]
fn test_extract_numbers() {
    assert_eq!(
        strings::extract_numbers("abc123def456ghi789").unwrap(),
        vec![123, 456, 789]
    );
    assert_eq!(strings::extract_numbers("no digits here").unwrap(), Vec::<u64>::new());
    assert_eq!(strings::extract_numbers("-42 and 3.14").unwrap(), vec![42, 3, 14]);
    assert_eq!(strings::extract_numbers("007").unwrap(), vec![7]);
}

#[test]
fn test_extract_numbers_out_of_range() {
    let err = strings::extract_numbers("18446744073709551616").unwrap_err();
    match err {
        ServiceError::NumberOutOfRange { value } => assert_eq!(value, "18446744073709551616"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_remove_special_chars() {
    let cases = vec![
        ("hello@world!", "hello world"),
        ("python#123", "python 123"),
        ("test$string%", "test string"),
        ("hello   world", "hello world"),
        ("@#$%^&*()", ""),
        ("  keep  spacing  tidy ", "keep spacing tidy"),
        ("", ""),
    ];

    for (input, expected) in cases {
        assert_eq!(
            strings::remove_special_chars(input),
            expected,
            "remove_special_chars({:?})",
            input
        );
    }
}

#[test]
fn test_service_passes_present_input_through() {
    let service = StringService::new();

    assert_eq!(service.reverse(Some("hello")), Some("olleh".to_string()));
    assert_eq!(service.to_title_case(Some("hello world")), Some("Hello World".to_string()));
    assert_eq!(service.count_occurrences(Some("banana"), Some("an")), 2);
    assert_eq!(service.extract_numbers(Some("a1b22")).unwrap(), vec![1, 22]);
    assert!(service.is_anagram(Some("listen"), Some("silent")));
}

#[test]
fn test_service_null_guards() {
    let service = StringService::default();

    assert_eq!(service.reverse(None), None);
    assert!(!service.is_palindrome(None));
    assert_eq!(service.count_vowels(None), 0);
    assert_eq!(service.to_upper_case(None), None);
    assert_eq!(service.to_lower_case(None), None);
    assert_eq!(service.to_title_case(None), None);
    assert_eq!(service.remove_duplicates(None), None);
    assert_eq!(service.find_longest_word(None), "");
    assert_eq!(service.count_words(None), 0);
    assert!(!service.is_anagram(None, Some("abc")));
    assert!(!service.is_anagram(Some("abc"), None));
    assert_eq!(service.capitalize_words(None), None);
    assert_eq!(service.count_occurrences(None, Some("a")), 0);
    assert_eq!(service.count_occurrences(Some("a"), None), 0);
    assert!(!service.is_valid_email(None));
    assert!(service.extract_numbers(None).unwrap().is_empty());
    assert_eq!(service.remove_special_chars(None), None);
}

#[test]
fn test_to_title_case_non_ascii() {
    let cases = vec![
        ("éa café", "Éa Café"),
        ("ÉCOLE élémentaire", "École Élémentaire"),
        ("über straße", "Über Straße"),
    ];

    for (input, expected) in cases {
        assert_eq!(strings::to_title_case(input), expected, "to_title_case({:?})", input);
    }
}
