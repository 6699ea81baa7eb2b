mod authorization;
mod body;
mod canonical;
mod digest;
mod facade;
mod key;
mod materialize;
mod policy;
mod request;
mod rsa;
mod signer;

pub use authorization::AuthorizationSigner;
pub use body::Body;
pub use canonical::signing_string;
pub use digest::{ContentDigest, content_digest};
pub use facade::{RequestSigner, SigningOutcome};
pub use key::{KeyIdentifier, load_private_key, parse_private_key_pem};
pub use materialize::{MaterializedRequest, http_date, materialize};
pub use policy::{REQUEST_TARGET, SigningMethod, headers_for};
pub use request::{Headers, HttpRequestDescriptor, SignedRequest};
pub use self::rsa::{RSA_SHA256, RsaSha256Signer};
pub use signer::MessageSigner;
