//! Segwit address prefix matching

use crate::network::NetworkProfile;

/// Separator between the human-readable part and the data of a bech32 address
pub const BECH32_SEPARATOR: char = '1';

/// Whether `prefix` is the segwit address prefix of `profile`
///
/// Used when decoding an address string into a specific address type. The
/// comparison is case-insensitive; the prefix includes the trailing separator.
pub fn is_bech32_segwit_prefix(prefix: &str, profile: &NetworkProfile) -> bool {
    let prefix = prefix.to_lowercase();
    match prefix.strip_suffix(BECH32_SEPARATOR) {
        Some(hrp) => !hrp.is_empty() && hrp == profile.bech32_hrp_segwit,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_case_insensitively() {
        let main = NetworkProfile::mainnet();
        assert!(is_bech32_segwit_prefix("ey1", &main));
        assert!(is_bech32_segwit_prefix("EY1", &main));
        assert!(is_bech32_segwit_prefix("Ey1", &main));
    }

    #[test]
    fn test_rejects_other_prefixes() {
        let main = NetworkProfile::mainnet();
        assert!(!is_bech32_segwit_prefix("xy1", &main));
        assert!(!is_bech32_segwit_prefix("ey", &main));
        assert!(!is_bech32_segwit_prefix("ey11", &main));
        assert!(!is_bech32_segwit_prefix("ty1", &main));
        assert!(!is_bech32_segwit_prefix("", &main));
        assert!(!is_bech32_segwit_prefix("1", &main));
    }

    #[test]
    fn test_each_network_has_its_own_prefix() {
        assert!(is_bech32_segwit_prefix("ty1", &NetworkProfile::testnet()));
        assert!(is_bech32_segwit_prefix("SY1", &NetworkProfile::solonet()));
        assert!(!is_bech32_segwit_prefix("ey1", &NetworkProfile::solonet()));
    }
}
