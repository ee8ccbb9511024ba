//! Uniform outcome of every store and service operation.
//!
//! Failures never cross a layer as `Err`; they are logged where they happen
//! and travel upward as [`Envelope::Error`].

use strum::Display;

/// The closed set of outcome kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusKind {
    Ok,
    NotFound,
    Error,
    Exists,
}

/// Tagged outcome carrying a payload only when the operation succeeded
/// (`Ok`) or probed for existence (`Exists`).
///
/// Callers inspect [`kind`](Envelope::kind) before extracting; extracting
/// from the wrong kind is a bug and panics.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Envelope<T> {
    Ok(T),
    NotFound,
    Error,
    Exists(bool),
}

impl<T> Envelope<T> {
    pub fn ok(payload: T) -> Self {
        Envelope::Ok(payload)
    }

    pub fn not_found() -> Self {
        Envelope::NotFound
    }

    pub fn error() -> Self {
        Envelope::Error
    }

    pub fn exists(flag: bool) -> Self {
        Envelope::Exists(flag)
    }

    pub fn kind(&self) -> StatusKind {
        match self {
            Envelope::Ok(_) => StatusKind::Ok,
            Envelope::NotFound => StatusKind::NotFound,
            Envelope::Error => StatusKind::Error,
            Envelope::Exists(_) => StatusKind::Exists,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Envelope::Ok(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Envelope::NotFound)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Error)
    }

    /// Borrow the payload of an `Ok` envelope.
    ///
    /// # Panics
    ///
    /// Panics if the envelope is not `Ok`.
    #[track_caller]
    pub fn payload(&self) -> &T {
        match self {
            Envelope::Ok(payload) => payload,
            other => panic!("envelope has no payload: kind is {}", other.kind()),
        }
    }

    /// Take the payload of an `Ok` envelope.
    ///
    /// # Panics
    ///
    /// Panics if the envelope is not `Ok`.
    #[track_caller]
    pub fn into_payload(self) -> T {
        match self {
            Envelope::Ok(payload) => payload,
            other => panic!("envelope has no payload: kind is {}", other.kind()),
        }
    }

    /// The flag of an `Exists` envelope.
    ///
    /// # Panics
    ///
    /// Panics if the envelope is not `Exists`.
    #[track_caller]
    pub fn exists_flag(&self) -> bool {
        match self {
            Envelope::Exists(flag) => *flag,
            other => panic!("envelope is not an existence probe: kind is {}", other.kind()),
        }
    }

    /// The payload of an `Ok` envelope, `None` for every other kind
    pub fn into_option(self) -> Option<T> {
        match self {
            Envelope::Ok(payload) => Some(payload),
            _ => None,
        }
    }

    /// Rewrap an `Ok` payload; other kinds pass through unchanged
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Envelope::Ok(payload) => Envelope::Ok(f(payload)),
            Envelope::NotFound => Envelope::NotFound,
            Envelope::Error => Envelope::Error,
            Envelope::Exists(flag) => Envelope::Exists(flag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_kind_display() {
        assert_eq!(StatusKind::Ok.to_string(), "OK");
        assert_eq!(StatusKind::NotFound.to_string(), "NOT_FOUND");
        assert_eq!(StatusKind::Error.to_string(), "ERROR");
        assert_eq!(StatusKind::Exists.to_string(), "EXISTS");
    }

    #[test]
    fn test_factories_set_kind() {
        assert_eq!(Envelope::ok(1).kind(), StatusKind::Ok);
        assert_eq!(Envelope::<i32>::not_found().kind(), StatusKind::NotFound);
        assert_eq!(Envelope::<i32>::error().kind(), StatusKind::Error);
        assert_eq!(Envelope::<i32>::exists(true).kind(), StatusKind::Exists);

        assert!(Envelope::ok(()).is_ok());
        assert!(Envelope::<()>::not_found().is_not_found());
        assert!(Envelope::<()>::error().is_error());
        assert!(!Envelope::<()>::exists(true).is_ok());
    }

    #[test]
    fn test_payload_extraction() {
        let envelope = Envelope::ok("lamp".to_string());
        assert_eq!(envelope.payload(), "lamp");
        assert_eq!(envelope.into_payload(), "lamp");
        assert!(Envelope::<()>::exists(true).exists_flag());
    }

    #[test]
    #[should_panic(expected = "kind is NOT_FOUND")]
    fn test_payload_of_not_found_panics() {
        let _ = Envelope::<u8>::not_found().into_payload();
    }

    #[test]
    #[should_panic(expected = "kind is ERROR")]
    fn test_borrowed_payload_of_error_panics() {
        let envelope = Envelope::<u8>::error();
        let _ = envelope.payload();
    }

    #[test]
    #[should_panic(expected = "kind is OK")]
    fn test_exists_flag_of_ok_panics() {
        let _ = Envelope::ok(1).exists_flag();
    }

    #[test]
    fn test_into_option() {
        assert_eq!(Envelope::ok(5).into_option(), Some(5));
        assert_eq!(Envelope::<i32>::not_found().into_option(), None);
        assert_eq!(Envelope::<i32>::exists(true).into_option(), None);
    }

    #[test]
    fn test_map_only_touches_ok() {
        assert_eq!(Envelope::ok(2).map(|n| n * 10), Envelope::ok(20));
        assert_eq!(Envelope::<i32>::not_found().map(|n| n * 10), Envelope::NotFound);
        assert_eq!(Envelope::<i32>::error().map(|n| n * 10), Envelope::Error);
        assert_eq!(Envelope::<i32>::exists(true).map(|n| n * 10), Envelope::Exists(true));
    }
}
