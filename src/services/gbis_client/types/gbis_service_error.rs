use thiserror::Error;

/// Failures talking to the GBIS open API. Callers treat these as
/// "no data from this call" — the client never retries internally.
#[derive(Debug, Error)]
pub enum GbisServiceError {
    #[error("failed to reach provider: {0}")]
    Transport(String),

    #[error("provider returned status {0}")]
    Status(u16),
}

/// Document-level XML failure. Record-level problems are handled inside
/// the parser and never surface as this.
#[derive(Debug, Error)]
#[error("malformed provider response: {0}")]
pub struct XmlParseError(pub String);
