use crate::{error::AddressError, parse::parse};
use std::{fmt, str::FromStr};

/// A parsed resource address.
///
/// Every field except [`resource`] is optional, and `None` means the part
/// was not present in the input at all, which is not the same as it being
/// empty. A bracketed IPv6 [`host`] keeps its brackets (`"[::1]"`).
///
/// [`resource`]: Address::resource
/// [`host`]: Address::host
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Address {
    /// Scheme preceding a `://` separator, kept as given.
    pub scheme: Option<String>,
    /// User name preceding an `@` separator.
    pub username: Option<String>,
    /// Password between `user:` and `@`. Unset when the colon is omitted
    /// or the password is empty.
    pub password: Option<String>,
    /// Hostname, IPv4 literal, or bracketed IPv6 literal.
    pub host: Option<String>,
    /// Port in `[0, 65535]`.
    pub port: Option<u16>,
    /// The resource name.
    pub resource: String,
    /// Raw query string following the first `?`, unprocessed.
    pub query: Option<String>,
}

/// Formats the address back into its canonical string form, omitting the
/// parts that are unset. Parsing the result yields an equal [`Address`].
///
/// ```
/// use res_address::parse;
///
/// let addr = parse("user@localhost:9999/foo")?;
/// assert_eq!(addr.to_string(), "user@localhost:9999/foo");
/// # Ok::<(), res_address::AddressError>(())
/// ```
impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme}://")?;
        }
        if let Some(username) = &self.username {
            f.write_str(username)?;
            if let Some(password) = &self.password {
                write!(f, ":{password}")?;
            }
            f.write_str("@")?;
        }
        match (&self.host, self.port) {
            (Some(host), Some(port)) => write!(f, "{host}:{port}/")?,
            (Some(host), None) => write!(f, "{host}/")?,
            (None, Some(port)) => write!(f, ":{port}/")?,
            (None, None) => {}
        }
        f.write_str(&self.resource)?;
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
