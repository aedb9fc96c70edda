use sha2::{Digest, Sha256};

fn sighash(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);
    let hash = Sha256::digest(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash[..8]);
    discriminator
}

/// Anchor instruction discriminator: first 8 bytes of sha256("global:<method>").
pub fn instruction_discriminator(method: &str) -> [u8; 8] {
    sighash("global", method)
}

/// Anchor account discriminator: first 8 bytes of sha256("account:<TypeName>").
pub fn account_discriminator(type_name: &str) -> [u8; 8] {
    sighash("account", type_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_and_account_namespaces_differ() {
        assert_ne!(instruction_discriminator("stake"), account_discriminator("stake"));
    }

    #[test]
    fn matches_sha256_prefix() {
        let full = Sha256::digest(b"global:initialize");
        assert_eq!(instruction_discriminator("initialize")[..], full[..8]);
    }

    #[test]
    fn is_case_sensitive() {
        assert_ne!(
            account_discriminator("StakeEntry"),
            account_discriminator("stakeEntry")
        );
    }
}
