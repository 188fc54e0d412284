//! Randomized selection for related and featured items.
//!
//! Rows are ordered by a hash of their id salted with a seed, which is a
//! pseudo-random permutation that the database can evaluate with
//! `ORDER BY ... LIMIT`. A caller-supplied seed makes the order
//! reproducible; without one a fresh seed is drawn per request.

/// Default number of related items.
pub const DEFAULT_RELATED_LIMIT: i64 = 4;

/// Default number of featured items.
pub const DEFAULT_FEATURED_LIMIT: i64 = 4;

/// Upper bound for related/featured limits.
pub const MAX_SELECTION_LIMIT: i64 = 50;

/// The seed to order by: the caller's, or a random one.
pub fn selection_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Seed in the textual form bound into the ordering expression.
pub fn seed_salt(seed: u64) -> String {
    format!(":{seed}")
}

/// SQL expression giving each row a pseudo-random sort key for the salt
/// bound at placeholder `$param`.
pub fn random_order_expr(param: usize) -> String {
    format!("md5(id::text || ${param})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_is_kept() {
        assert_eq!(selection_seed(Some(42)), 42);
    }

    #[test]
    fn missing_seed_is_drawn() {
        let draws: Vec<u64> = (0..8).map(|_| selection_seed(None)).collect();
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn salt_is_prefixed() {
        assert_eq!(seed_salt(7), ":7");
        assert_eq!(seed_salt(u64::MAX), format!(":{}", u64::MAX));
    }

    #[test]
    fn order_expr_uses_placeholder() {
        assert_eq!(random_order_expr(3), "md5(id::text || $3)");
    }
}
