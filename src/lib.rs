//! Reader for DNS master files (RFC 1035 section 5).
//!
//! [`parse_zone`] turns a zone file into a [`Zone`]: `$ORIGIN` and `$TTL`
//! directives are applied, owner names are expanded, owner/TTL/class are
//! carried between records and parenthesised records are joined. Rdata is
//! kept as normalised text and never validated.

pub mod config;
pub use config::*;
pub mod parser;
pub use parser::*;
pub mod render;
