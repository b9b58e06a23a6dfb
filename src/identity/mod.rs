pub mod store;
pub mod traits;

pub use store::ProfileStore;
pub use traits::{ensure_profile, IdentityProvider};
