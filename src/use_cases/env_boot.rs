use std::path::PathBuf;

use crate::domain::entities::EnvEntry;
use crate::domain::errors::EnvBootError;
use crate::domain::ports::{EnvSource, PropertySink};

// Key that marks a candidate file as the real service configuration.
pub const DATASOURCE_URL_KEY: &str = "SPRING_DATASOURCE_URL";

// Report returned by the environment bootstrap use case.
pub struct EnvBootReport {
    // Entries copied into the property store, in file order.
    pub applied: Vec<EnvEntry>,
    // Candidate directory that won, None when neither had a file.
    pub source_dir: Option<PathBuf>,
}

// Environment bootstrap use case with injected dependencies.
pub struct EnvBootUseCase<S, P> {
    pub source: S,
    pub sink: P,
    pub primary_dir: PathBuf,
    pub fallback_dir: PathBuf,
}

impl<S, P> EnvBootUseCase<S, P>
where
    S: EnvSource,
    P: PropertySink,
{
    pub fn execute(&self) -> Result<EnvBootReport, EnvBootError> {
        let primary = self
            .source
            .load(&self.primary_dir)
            .map_err(EnvBootError::SourceFailure)?;

        // The primary candidate only wins when it names the datasource.
        // Anything else falls through to the fallback directory, replacing
        // the primary entries wholesale rather than merging.
        let selected = match primary {
            Some(entries) if contains_datasource_key(&entries) => {
                Some((self.primary_dir.clone(), entries))
            }
            _ => self
                .source
                .load(&self.fallback_dir)
                .map_err(EnvBootError::SourceFailure)?
                .map(|entries| (self.fallback_dir.clone(), entries)),
        };

        let (source_dir, applied) = match selected {
            Some((dir, entries)) => (Some(dir), entries),
            None => (None, Vec::new()),
        };

        for entry in &applied {
            self.sink.set(&entry.key, &entry.value);
        }

        Ok(EnvBootReport {
            applied,
            source_dir,
        })
    }
}

fn contains_datasource_key(entries: &[EnvEntry]) -> bool {
    entries.iter().any(|entry| entry.key == DATASOURCE_URL_KEY)
}
