use crate::domain::model::{AssembledOutput, Fragment};
use crate::utils::error::Result;
use std::path::PathBuf;

pub trait Storage {
    /// Missing resources surface as `AmalgamError::ResourceNotFound`.
    fn read_file(&self, name: &str) -> Result<Vec<u8>>;
    /// Replaces `name` in full; a failed write leaves any previous content in place.
    fn write_file(&self, name: &str, data: &[u8]) -> Result<()>;
    fn resolve(&self, name: &str) -> PathBuf;
}

pub trait ConfigProvider {
    fn header(&self) -> &str;
    fn load_order(&self) -> &[String];
    fn merge_order(&self) -> &[String];
    fn destination(&self) -> &str;
    fn comment_prefix(&self) -> &str;
    fn guard_macro(&self) -> String;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Fragment>>;
    fn transform(&self, fragments: Vec<Fragment>) -> Result<AssembledOutput>;
    fn load(&self, output: AssembledOutput) -> Result<String>;
}
