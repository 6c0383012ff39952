pub mod calculator;
pub mod engine;
pub mod strings;
