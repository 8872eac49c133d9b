mod codec;
mod error;
mod identity;
mod model;
mod object_store;

pub mod test;

pub use codec::{decode, encode};
pub use error::{Error, Result};
pub use identity::{CallerIdentity, IdentityProbe};
pub use model::{parse_storage_key, storage_key, Tutorial, TUTORIALS_PREFIX};
pub use object_store::ObjectStore;
