use thiserror::Error;

/// Ways a weather lookup can fail.
#[derive(Debug, Error)]
pub enum LookupError {
    /// City search returned no candidates.
    #[error("Location not found")]
    LocationNotFound,

    /// Current-conditions request returned no records for the resolved key.
    #[error("Weather data not found")]
    ConditionsNotFound,

    /// Transport failure, non-2xx status or unparsable body on any of the
    /// three upstream calls.
    #[error(transparent)]
    Upstream(#[from] anyhow::Error),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::LocationNotFound | Self::ConditionsNotFound)
    }
}
