//! Built-in digest backends
//!
//! Thin adapters over the ecosystem digest crates; each conforms to the
//! backend contract and registers under its well-known algorithm
//! identifier. The router knows nothing about any of them.

use crate::error::Result;
use crate::router::HashRouter;
use crate::store::RegistryStore;
use std::sync::Arc;

mod sha1;
mod sha256;
mod sha384;
mod sha512;
mod sm3;

pub use self::sha1::Sha1Backend;
pub use self::sha256::Sha256Backend;
pub use self::sha384::Sha384Backend;
pub use self::sha512::Sha512Backend;
pub use self::sm3::Sm3Backend;

/// Register every built-in backend with the router.
pub fn register_all<S: RegistryStore>(router: &HashRouter<S>) -> Result<()> {
    router.register_backend(Arc::new(Sha1Backend))?;
    router.register_backend(Arc::new(Sha256Backend))?;
    router.register_backend(Arc::new(Sha384Backend))?;
    router.register_backend(Arc::new(Sha512Backend))?;
    router.register_backend(Arc::new(Sm3Backend))?;
    Ok(())
}
