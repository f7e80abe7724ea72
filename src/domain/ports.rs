use std::path::Path;

use crate::domain::entities::EnvEntry;

// Port for reading an optional env definition file from a directory.
// Ok(None) means the directory has no definition file; entries come back
// in file order.
pub trait EnvSource: Send + Sync {
    fn load(&self, dir: &Path) -> Result<Option<Vec<EnvEntry>>, String>;
}

// Port for process-wide property writes. Writes overwrite existing values.
pub trait PropertySink: Send + Sync {
    fn set(&self, key: &str, value: &str);
}
