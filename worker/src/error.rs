use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("missing {0} in the worker environment")]
    MissingCredential(&'static str),
    #[error("dictionary lookup failed: {0}")]
    Fetch(#[from] worker::Error),
    #[error("dictionary answered with status {0}")]
    Upstream(u16),
}

impl ProxyError {
    /// Status the client sees; every variant reads as a plain server error.
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::MissingCredential(_) | Self::Fetch(_) => 500,
            Self::Upstream(_) => 502,
        }
    }

    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::Upstream(_) => "Bad Gateway",
            Self::MissingCredential(_) | Self::Fetch(_) => "Internal Server Error",
        }
    }
}
