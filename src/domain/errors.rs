// Domain-level errors for the environment bootstrap.
#[derive(Debug)]
pub enum EnvBootError {
    // Any load problem other than a missing file: malformed line, I/O or
    // permission failure. Missing files are absorbed by the source itself.
    SourceFailure(String),
}
