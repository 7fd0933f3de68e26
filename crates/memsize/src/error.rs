use thiserror::Error;

/// Why a value could not be looked into.
///
/// These never abort a measurement. A value whose introspection fails is
/// charged its own handle and nothing beyond it, and the reason is handed to
/// the diagnostic sink.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum IntrospectError {
    #[error("value is mutably borrowed")]
    Borrowed,

    #[error("lock is poisoned")]
    Poisoned,

    #[error("lock is held elsewhere")]
    Contended,

    #[error("raw pointers are not dereferenced")]
    RawPointer,

    #[error("value is opaque")]
    Opaque,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(IntrospectError::Borrowed.to_string(), "value is mutably borrowed");
        assert_eq!(IntrospectError::Contended.to_string(), "lock is held elsewhere");
        assert_eq!(
            IntrospectError::RawPointer.to_string(),
            "raw pointers are not dereferenced"
        );
    }
}
