use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a supplier exception.
///
/// Identity fields:
/// - check_id
/// - code
/// - supplier_id
pub fn fingerprint_for_supplier(check_id: &str, code: &str, supplier_id: &str) -> String {
    let canonical = [check_id, code, supplier_id].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_field_sensitive() {
        let a = fingerprint_for_supplier("carbon.outlier", "emissions_above_threshold", "SUP-1");
        let b = fingerprint_for_supplier("carbon.outlier", "emissions_above_threshold", "SUP-1");
        let c = fingerprint_for_supplier("carbon.outlier", "emissions_above_threshold", "SUP-2");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
