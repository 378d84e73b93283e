//! ICS20 denomination canonicalization
//!
//! The ICS20 bank contract keys escrowed balances by the canonical string
//! form of a denom, so this must match the on-chain ICS20Lib parsing
//! byte-for-byte. A denom is either a bare ERC20 contract address or a
//! `port-id/channel-id[/...]/base-denom` path recording its cross-chain
//! provenance.

use crate::error::{CliError, CliResult};

/// Minimum segment count for a prefixed denom: one port/channel pair
/// plus the base denom.
const MIN_PREFIXED_SEGMENTS: usize = 3;

/// Convert a denom into the canonical form the ICS20 bank contract expects.
///
/// A bare hex address is lowercased. A prefixed denom keeps every path
/// segment verbatim except the final one, which is lowercased only when it
/// is itself a hex address. Canonicalization is idempotent.
pub fn canonicalize_denom(denom: &str) -> CliResult<String> {
    if is_hex_address(denom) {
        return Ok(denom.to_ascii_lowercase());
    }

    if denom.contains('/') {
        let segments: Vec<&str> = denom.split('/').collect();
        if segments.len() < MIN_PREFIXED_SEGMENTS {
            return Err(CliError::InvalidDenomFormat(denom.to_string()));
        }

        let (prefix, base) = segments.split_at(segments.len() - 1);
        let base = if is_hex_address(base[0]) {
            base[0].to_ascii_lowercase()
        } else {
            base[0].to_string()
        };

        let mut canonical = prefix.join("/");
        canonical.push('/');
        canonical.push_str(&base);
        return Ok(canonical);
    }

    Err(CliError::InvalidDenomFormat(denom.to_string()))
}

/// Whether `s` is a hex-encoded 20-byte address, with or without a `0x`
/// prefix. Mirrors go-ethereum's `common.IsHexAddress`: no checksum check.
pub fn is_hex_address(s: &str) -> bool {
    let hex = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_hex_address() {
        let got = canonicalize_denom("0x4639F884305273E856dBa51AF60c10a5b5E0F482").unwrap();
        assert_eq!(got, "0x4639f884305273e856dba51af60c10a5b5e0f482");
    }

    #[test]
    fn hex_address_case_insensitive() {
        let lower = canonicalize_denom("0x4639f884305273e856dba51af60c10a5b5e0f482").unwrap();
        let upper = canonicalize_denom("0x4639F884305273E856DBA51AF60C10A5B5E0F482").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn canonicalizes_prefixed_denom() {
        let got =
            canonicalize_denom("Port/channel-0/0x4639F884305273E856dBa51AF60c10a5b5E0F482")
                .unwrap();
        assert_eq!(
            got,
            "Port/channel-0/0x4639f884305273e856dba51af60c10a5b5e0f482"
        );
    }

    #[test]
    fn canonicalizes_multi_hop_prefix() {
        let got = canonicalize_denom(
            "Port-0/channel-0/Port-1/channel-1/0x4639F884305273E856dBa51AF60c10a5b5E0F482",
        )
        .unwrap();
        assert_eq!(
            got,
            "Port-0/channel-0/Port-1/channel-1/0x4639f884305273e856dba51af60c10a5b5e0f482"
        );
    }

    #[test]
    fn non_hex_base_denom_left_untouched() {
        let got = canonicalize_denom("transfer/channel-0/uAtom").unwrap();
        assert_eq!(got, "transfer/channel-0/uAtom");
    }

    #[test]
    fn rejects_short_prefix() {
        let err =
            canonicalize_denom("Portchannel-0/0x4639F884305273E856dBa51AF60c10a5b5E0F482")
                .unwrap_err();
        assert!(matches!(err, CliError::InvalidDenomFormat(_)));
    }

    #[test]
    fn rejects_plain_string() {
        let err = canonicalize_denom("invalid address format").unwrap_err();
        assert!(matches!(err, CliError::InvalidDenomFormat(_)));
    }

    #[test]
    fn canonicalization_is_idempotent() {
        for denom in [
            "0x4639F884305273E856dBa51AF60c10a5b5E0F482",
            "Port/channel-0/0x4639F884305273E856dBa51AF60c10a5b5E0F482",
            "transfer/channel-0/uAtom",
        ] {
            let once = canonicalize_denom(denom).unwrap();
            let twice = canonicalize_denom(&once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn hex_address_detection() {
        assert!(is_hex_address("0x4639F884305273E856dBa51AF60c10a5b5E0F482"));
        assert!(is_hex_address("4639f884305273e856dba51af60c10a5b5e0f482"));
        assert!(is_hex_address("0X4639F884305273E856DBA51AF60C10A5B5E0F482"));
        assert!(!is_hex_address("0x4639f884"));
        assert!(!is_hex_address("0xZZ39f884305273e856dba51af60c10a5b5e0f482"));
        assert!(!is_hex_address("uatom"));
    }
}
