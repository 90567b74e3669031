//! Parser for compact resource-address strings.
//!
//! An address locates a named resource (a database, a queue, a topic) on a
//! host:
//!
//! ```text
//! [scheme://][user[:password]@][host][:port]/resource[?query]
//! ```
//!
//! Only the resource name is mandatory. [`parse`] splits an address into an
//! [`Address`] record, or reports what is wrong with it as an
//! [`AddressError`] tagged with an [`AddressErrorKind`]:
//!
//! ```
//! use res_address::parse;
//!
//! let addr = parse("localhost:27017/stock")?;
//! assert_eq!(addr.host.as_deref(), Some("localhost"));
//! assert_eq!(addr.port, Some(27017));
//! assert_eq!(addr.resource, "stock");
//!
//! let addr = parse("[::1]:9999/events?expire=200")?;
//! assert_eq!(addr.host.as_deref(), Some("[::1]"));
//! assert_eq!(addr.port, Some(9999));
//! assert_eq!(addr.query.as_deref(), Some("expire=200"));
//! # Ok::<(), res_address::AddressError>(())
//! ```
//!
//! Rejections name the component at fault:
//!
//! ```
//! use res_address::{parse, AddressErrorKind};
//!
//! let err = parse("localhost:99999/stock").unwrap_err();
//! assert_eq!(err.kind(), AddressErrorKind::InvalidPort);
//! assert_eq!(err.component(), Some("99999"));
//! ```
//!
//! # Limitations
//!
//! This is not a general URI parser. The grammar is deliberately narrow:
//! the resource name is a word (`[\w-]` with at least one ASCII letter),
//! the host is a hostname, an IPv4 literal, or a bracketed IPv6 literal,
//! and the query string is kept verbatim without further processing.
//! Percent-escapes are not decoded anywhere.

#![forbid(unsafe_code)]

mod addr;
mod error;
mod parse;

pub use addr::Address;
pub use error::{AddressError, AddressErrorKind};
pub use parse::parse;
