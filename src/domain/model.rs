use clap::{Subcommand, ValueEnum};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Subcommand)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Arithmetic operations
    #[command(subcommand)]
    Calc(CalcOp),
    /// String operations; omit a text argument to pass a null value
    #[command(subcommand)]
    Text(TextOp),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Subcommand)]
#[serde(rename_all = "snake_case")]
pub enum CalcOp {
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    Power {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: f64,
    },
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        number: f64,
    },
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    Average {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    Max {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    Min {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,
    },
    Gcd {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    Lcm {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    IsPrime {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Subcommand)]
#[serde(rename_all = "snake_case")]
pub enum TextOp {
    Reverse {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    IsPalindrome {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    CountVowels {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    ToUpperCase {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    ToLowerCase {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    ToTitleCase {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    RemoveDuplicates {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    FindLongestWord {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    CountWords {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    IsAnagram {
        #[arg(allow_hyphen_values = true)]
        first: Option<String>,
        #[arg(allow_hyphen_values = true)]
        second: Option<String>,
    },
    CapitalizeWords {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    CountOccurrences {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
        #[arg(allow_hyphen_values = true)]
        substring: Option<String>,
    },
    IsValidEmail {
        #[arg(allow_hyphen_values = true)]
        email: Option<String>,
    },
    ExtractNumbers {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
    RemoveSpecialChars {
        #[arg(allow_hyphen_values = true)]
        text: Option<String>,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Calc(op) => match op {
                CalcOp::Add { .. } => "add",
                CalcOp::Subtract { .. } => "subtract",
                CalcOp::Multiply { .. } => "multiply",
                CalcOp::Divide { .. } => "divide",
                CalcOp::Power { .. } => "power",
                CalcOp::Sqrt { .. } => "sqrt",
                CalcOp::Factorial { .. } => "factorial",
                CalcOp::Average { .. } => "average",
                CalcOp::Max { .. } => "max",
                CalcOp::Min { .. } => "min",
                CalcOp::Gcd { .. } => "gcd",
                CalcOp::Lcm { .. } => "lcm",
                CalcOp::IsPrime { .. } => "is_prime",
            },
            Operation::Text(op) => match op {
                TextOp::Reverse { .. } => "reverse",
                TextOp::IsPalindrome { .. } => "is_palindrome",
                TextOp::CountVowels { .. } => "count_vowels",
                TextOp::ToUpperCase { .. } => "to_upper_case",
                TextOp::ToLowerCase { .. } => "to_lower_case",
                TextOp::ToTitleCase { .. } => "to_title_case",
                TextOp::RemoveDuplicates { .. } => "remove_duplicates",
                TextOp::FindLongestWord { .. } => "find_longest_word",
                TextOp::CountWords { .. } => "count_words",
                TextOp::IsAnagram { .. } => "is_anagram",
                TextOp::CapitalizeWords { .. } => "capitalize_words",
                TextOp::CountOccurrences { .. } => "count_occurrences",
                TextOp::IsValidEmail { .. } => "is_valid_email",
                TextOp::ExtractNumbers { .. } => "extract_numbers",
                TextOp::RemoveSpecialChars { .. } => "remove_special_chars",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationOutput {
    Number(#[serde(serialize_with = "serialize_float")] f64),
    Integer(u64),
    Flag(bool),
    Count(usize),
    Text(Option<String>),
    Numbers(Vec<u64>),
}

impl OperationOutput {
    /// Plain-text rendering. `precision` fixes the decimal places of floats.
    pub fn render(&self, precision: Option<usize>) -> String {
        match self {
            OperationOutput::Number(value) => match precision {
                Some(places) => format!("{:.*}", places, value),
                None => value.to_string(),
            },
            OperationOutput::Integer(value) => value.to_string(),
            OperationOutput::Flag(value) => value.to_string(),
            OperationOutput::Count(value) => value.to_string(),
            OperationOutput::Text(Some(text)) => text.clone(),
            OperationOutput::Text(None) => "null".to_string(),
            OperationOutput::Numbers(values) => format!(
                "[{}]",
                values
                    .iter()
                    .map(u64::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

/// JSON has no literal for non-finite floats; emit them as the same strings
/// the text rendering prints so they stay distinct from `null`.
fn serialize_float<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const VALID: [&'static str; 2] = ["text", "json"];
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
