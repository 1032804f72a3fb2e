use thiserror::Error as ThisError;

///
/// Error
///
/// Definition-time error for embedding code (config loaders, host
/// validation). Generation itself never returns it; persistence failures
/// reach callers as the host's own `Persist::Error`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error("invalid enum definition: {message}")]
    Definition { message: String },
}

impl Error {
    pub fn definition(message: impl Into<String>) -> Self {
        Self::Definition {
            message: message.into(),
        }
    }
}
