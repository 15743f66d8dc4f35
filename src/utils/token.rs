use rand::{distributions::Alphanumeric, thread_rng, Rng};

/// Opaque single-use token the bot presents when fetching its queue entry.
pub fn generate_auth_token(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_alphanumeric_tokens_of_requested_length() {
        let token = generate_auth_token(32);
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn tokens_are_not_repeated() {
        assert_ne!(generate_auth_token(32), generate_auth_token(32));
    }
}
