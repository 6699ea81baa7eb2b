use crate::error::SigningError;

/// Signs canonical bytes with a private key.
///
/// Implementations are sync and must be shareable across threads: one signer
/// serves every worker once it has been built.
pub trait MessageSigner: Send + Sync {
    /// Sign `data`. Returns raw signature bytes.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, SigningError>;

    /// Algorithm name as written in the `Authorization` header.
    fn algorithm(&self) -> &str;
}
