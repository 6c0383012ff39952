use crate::domain::model::OutputFormat;

pub trait ConfigProvider: Send + Sync {
    fn output_format(&self) -> OutputFormat;
    fn precision(&self) -> Option<usize>;
}
