use thiserror::Error;

/// The category of an [`AddressError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AddressErrorKind {
    /// The host segment is missing or malformed.
    InvalidHost,
    /// The port segment is not a number, is empty, or is above 65535.
    InvalidPort,
    /// The resource name contains characters outside `[\w-]` or has no
    /// letter in it.
    InvalidResource,
    /// The address names a host but no resource.
    NotResourceProvided,
    /// The address is malformed in a way none of the other kinds covers.
    Other,
}

/// Returned when an address string cannot be parsed.
///
/// Carries the address that was being parsed and, when identifiable, the
/// component at fault, so callers can build precise diagnostics.
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[error("{message}")]
pub struct AddressError {
    kind: AddressErrorKind,
    message: String,
    address: String,
    component: Option<String>,
}

impl AddressError {
    pub(crate) fn new(
        kind: AddressErrorKind,
        message: String,
        address: &str,
        component: Option<&str>,
    ) -> Self {
        Self {
            kind,
            message,
            address: address.to_owned(),
            component: component.map(str::to_owned),
        }
    }

    /// The category of the failure.
    pub fn kind(&self) -> AddressErrorKind {
        self.kind
    }

    /// The address string that failed to parse.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The component the failure points at, if identifiable.
    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }
}
