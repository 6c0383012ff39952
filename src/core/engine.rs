use crate::core::calculator;
use crate::core::strings::StringService;
use crate::domain::model::{CalcOp, Operation, OperationOutput, OutputFormat, TextOp};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

pub struct OperationEngine<C: ConfigProvider> {
    config: C,
    strings: StringService,
}

impl<C: ConfigProvider> OperationEngine<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            strings: StringService::new(),
        }
    }

    /// Executes the operation and renders the result in the configured format.
    pub fn run(&self, operation: &Operation) -> Result<String> {
        let output = self.execute(operation).inspect_err(|e| {
            tracing::warn!("{} failed: {} ({:?})", operation.name(), e, e.category());
        })?;

        self.render(operation, &output)
    }

    pub fn execute(&self, operation: &Operation) -> Result<OperationOutput> {
        tracing::debug!("Executing {}", operation.name());

        match operation {
            Operation::Calc(op) => Self::execute_calc(op),
            Operation::Text(op) => self.execute_text(op),
        }
    }

    pub fn render(&self, operation: &Operation, output: &OperationOutput) -> Result<String> {
        match self.config.output_format() {
            OutputFormat::Text => Ok(output.render(self.config.precision())),
            OutputFormat::Json => {
                let body = serde_json::json!({
                    "operation": operation.name(),
                    "result": output,
                });
                Ok(serde_json::to_string(&body)?)
            }
        }
    }

    fn execute_calc(op: &CalcOp) -> Result<OperationOutput> {
        use OperationOutput::{Flag, Integer, Number};

        let output = match op {
            CalcOp::Add { a, b } => Number(calculator::add(*a, *b)),
            CalcOp::Subtract { a, b } => Number(calculator::subtract(*a, *b)),
            CalcOp::Multiply { a, b } => Number(calculator::multiply(*a, *b)),
            CalcOp::Divide { a, b } => Number(calculator::divide(*a, *b)?),
            CalcOp::Power { base, exponent } => Number(calculator::power(*base, *exponent)),
            CalcOp::Sqrt { number } => Number(calculator::sqrt(*number)?),
            CalcOp::Factorial { n } => Integer(calculator::factorial(*n)?),
            CalcOp::Average { numbers } => Number(calculator::average(numbers)?),
            CalcOp::Max { numbers } => Number(calculator::max(numbers)?),
            CalcOp::Min { numbers } => Number(calculator::min(numbers)?),
            CalcOp::Gcd { a, b } => Integer(calculator::gcd(*a, *b)),
            CalcOp::Lcm { a, b } => Integer(calculator::lcm(*a, *b)?),
            CalcOp::IsPrime { n } => Flag(calculator::is_prime(*n)),
        };
        Ok(output)
    }

    fn execute_text(&self, op: &TextOp) -> Result<OperationOutput> {
        use OperationOutput::{Count, Flag, Numbers, Text};

        let s = &self.strings;
        let output = match op {
            TextOp::Reverse { text } => Text(s.reverse(text.as_deref())),
            TextOp::IsPalindrome { text } => Flag(s.is_palindrome(text.as_deref())),
            TextOp::CountVowels { text } => Count(s.count_vowels(text.as_deref())),
            TextOp::ToUpperCase { text } => Text(s.to_upper_case(text.as_deref())),
            TextOp::ToLowerCase { text } => Text(s.to_lower_case(text.as_deref())),
            TextOp::ToTitleCase { text } => Text(s.to_title_case(text.as_deref())),
            TextOp::RemoveDuplicates { text } => Text(s.remove_duplicates(text.as_deref())),
            TextOp::FindLongestWord { text } => Text(Some(s.find_longest_word(text.as_deref()))),
            TextOp::CountWords { text } => Count(s.count_words(text.as_deref())),
            TextOp::IsAnagram { first, second } => {
                Flag(s.is_anagram(first.as_deref(), second.as_deref()))
            }
            TextOp::CapitalizeWords { text } => Text(s.capitalize_words(text.as_deref())),
            TextOp::CountOccurrences { text, substring } => {
                Count(s.count_occurrences(text.as_deref(), substring.as_deref()))
            }
            TextOp::IsValidEmail { email } => Flag(s.is_valid_email(email.as_deref())),
            TextOp::ExtractNumbers { text } => Numbers(s.extract_numbers(text.as_deref())?),
            TextOp::RemoveSpecialChars { text } => {
                Text(s.remove_special_chars(text.as_deref()))
            }
        };
        Ok(output)
    }
}
