//! Random opaque token generation.
//!
//! Used for invitation tokens and screen tokens. Tokens are unguessable:
//! OS-sourced randomness, base64url-encoded without padding.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;

/// Entropy for invitation tokens, in bytes.
pub const INVITATION_TOKEN_BYTES: usize = 32;

/// Entropy for screen tokens, in bytes. Screens are scoped to a project and
/// short-lived in practice, so the token is shorter than an invitation's.
pub const SCREEN_TOKEN_BYTES: usize = 16;

/// Generates an opaque token with the given entropy.
pub fn generate_token(bytes: usize) -> String {
    let mut buf = vec![0u8; bytes];
    OsRng.fill_bytes(&mut buf);
    URL_SAFE_NO_PAD.encode(buf)
}

/// Generates an invitation token (32 bytes of entropy).
pub fn invitation_token() -> String {
    generate_token(INVITATION_TOKEN_BYTES)
}

/// Generates a screen token (16 bytes of entropy).
pub fn screen_token() -> String {
    generate_token(SCREEN_TOKEN_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_invitation_token_length() {
        // 32 bytes base64url without padding: ceil(32 * 4 / 3) = 43 chars.
        assert_eq!(invitation_token().len(), 43);
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: HashSet<_> = (0..1000).map(|_| invitation_token()).collect();
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_tokens_are_url_safe() {
        let token = generate_token(64);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }
}
