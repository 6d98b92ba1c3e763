pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("input error: {0}")]
    Input(#[source] anyhow::Error),
    #[error("export error: {0}")]
    Export(#[source] anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn input(err: impl Into<anyhow::Error>) -> Self {
        Self::Input(err.into())
    }

    pub fn export(err: impl Into<anyhow::Error>) -> Self {
        Self::Export(err.into())
    }
}
