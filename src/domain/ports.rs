use crate::core::serializer::UnknownTypePolicy;
use crate::utils::error::Result;

/// Text storage backing the zoo document. Each write replaces the whole file.
pub trait Storage: Send + Sync {
    fn read_text(&self, path: &str) -> Result<String>;
    fn write_text(&self, path: &str, text: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_dir(&self) -> &str;
    fn file_name(&self) -> &str;
    fn unknown_type_policy(&self) -> UnknownTypePolicy;
}
