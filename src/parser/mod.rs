mod error;
pub use error::*;
mod fields;
pub use fields::*;
mod record;
pub use record::*;
mod ttl;
pub use ttl::*;
mod zone;
pub use zone::*;
