use crate::domain::model::Fragment;
use crate::domain::ports::Storage;
use crate::utils::error::{AmalgamError, Result};

pub fn load<S: Storage>(storage: &S, name: &str) -> Result<Fragment> {
    let bytes = storage.read_file(name)?;
    let text = String::from_utf8(bytes).map_err(|_| AmalgamError::InvalidEncoding {
        name: name.to_string(),
    })?;
    let fragment = Fragment::from_text(name, &text);
    tracing::debug!("Loaded {} ({} lines)", name, fragment.len());
    Ok(fragment)
}

/// Loads every name in order, stopping at the first failure.
pub fn load_all<S: Storage>(storage: &S, names: &[String]) -> Result<Vec<Fragment>> {
    names.iter().map(|name| load(storage, name)).collect()
}
