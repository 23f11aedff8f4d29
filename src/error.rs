#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("dictionary store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("database request failed: {0}")]
    QueryFailed(tokio_rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<tokio_rusqlite::Error> for Error {
    fn from(error: tokio_rusqlite::Error) -> Self {
        match error {
            tokio_rusqlite::Error::Other(error) => {
                if error.downcast_ref::<Self>().is_some() {
                    *error.downcast().unwrap()
                } else {
                    Self::QueryFailed(tokio_rusqlite::Error::Other(error))
                }
            }
            _ => Self::QueryFailed(error),
        }
    }
}

impl From<Error> for tokio_rusqlite::Error {
    fn from(error: Error) -> Self {
        Self::Other(Box::new(error))
    }
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        Self::QueryFailed(error.into())
    }
}
