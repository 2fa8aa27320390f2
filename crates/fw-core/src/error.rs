use thiserror::Error;

pub type FwResult<T> = Result<T, FwError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FwError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Shape mismatch for {what}: expected length {expected}, found {found}")]
    InputShape {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_error_mentions_lengths() {
        let err = FwError::InputShape {
            what: "salinity",
            expected: 4,
            found: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("salinity"));
        assert!(msg.contains('4') && msg.contains('3'));
    }
}
