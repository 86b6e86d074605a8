/// Deterministic bearer-token issuer.
///
/// A token is a toy hash of `"{user_agent}:{secret}"`, so the same client
/// always receives the same token and verification is a re-derivation rather
/// than a lookup. Deliberately worthless as real authentication; the point is
/// an auth handshake clients must perform, not security.
pub struct TokenIssuer {
    secret: String,
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Token for a client identified by its user agent.
    pub fn issue(&self, user_agent: &str) -> String {
        toy_hash(&format!("{}:{}", user_agent, self.secret))
    }

    /// A token is valid iff it matches what `issue` would return for the
    /// same user agent.
    pub fn verify(&self, user_agent: &str, token: &str) -> bool {
        self.issue(user_agent) == token
    }
}

/// 31x accumulation hash over Unicode code points, truncated to 32 bits,
/// rendered as lowercase hex without padding.
fn toy_hash(input: &str) -> String {
    let mut acc: u32 = 0;
    for ch in input.chars() {
        acc = acc
            .wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(u32::from(ch));
    }
    format!("{acc:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toy_hash_known_vectors() {
        assert_eq!(toy_hash(""), "0");
        assert_eq!(toy_hash("a"), "61");
        assert_eq!(toy_hash("ab"), "c21");
        assert_eq!(toy_hash("a:b"), "17389");
    }

    #[test]
    fn issue_hashes_user_agent_and_secret() {
        let issuer = TokenIssuer::new("b");
        assert_eq!(issuer.issue("a"), toy_hash("a:b"));
    }

    #[test]
    fn issued_tokens_are_deterministic() {
        let issuer = TokenIssuer::new("lab-secret-key");
        assert_eq!(issuer.issue("agent/1.0"), issuer.issue("agent/1.0"));
    }

    #[test]
    fn tokens_are_bound_to_the_user_agent() {
        let issuer = TokenIssuer::new("lab-secret-key");
        let token = issuer.issue("agent/1.0");
        assert!(issuer.verify("agent/1.0", &token));
        assert!(!issuer.verify("agent/2.0", &token));
    }

    #[test]
    fn verify_rejects_garbage_tokens() {
        let issuer = TokenIssuer::new("lab-secret-key");
        assert!(!issuer.verify("agent/1.0", "not-a-token"));
    }
}
