mod gateway;
mod signer;

pub use gateway::{GatewayError, NetworkGateway};
pub use signer::Signer;

pub use creep::{Cloneable, Context};
