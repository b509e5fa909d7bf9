use std::io;

#[derive(Debug)]
pub enum VerifyError {
    Io(io::Error),
    ManifestRead { path: String, source: io::Error },
}

impl From<io::Error> for VerifyError {
    fn from(err: io::Error) -> Self {
        VerifyError::Io(err)
    }
}

impl std::fmt::Display for VerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyError::Io(err) => write!(f, "I/O error: {}", err),
            VerifyError::ManifestRead { path, source } => {
                write!(f, "{}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VerifyError::Io(err) => Some(err),
            VerifyError::ManifestRead { source, .. } => Some(source),
        }
    }
}
