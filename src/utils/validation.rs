use crate::utils::error::{GenError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Only rejects existing directories; missing files and parents are left to the writer.
pub fn validate_destination(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Err(GenError::InvalidDestination {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}
