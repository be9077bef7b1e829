//! Identity Adapters
//!
//! Implementations of the IdentitySynthesizer port.
//!
//! - **BrazilianIdentitySynthesizer** - Realistic Brazilian tax ids, plates, names and amounts
//! - **SequentialIdentitySynthesizer** - Predictable `{field}-{n}` values (testing)

mod brazilian;
mod sequential;

pub use brazilian::BrazilianIdentitySynthesizer;
pub use sequential::SequentialIdentitySynthesizer;
