//! Jammer and fitting descriptors.
//!
//! Grammar:
//!
//! ```text
//! descriptor = code [ "x" digit ]
//! code       = any catalog code (exactly two characters)
//! digit      = "1" .. "9"
//! ```
//!
//! Codes are fixed width, so the code is simply the first two characters and
//! is resolved with a map lookup. Matching is exact and case-sensitive.

use crate::catalog::{self, CODE_LEN, Catalog, CatalogEntry};
use crate::domain::{FittingInstance, JamInstance, MAX_REPEAT};
use crate::error::CalcError;

/// Parse `text` against `catalog`, returning the entry and its repeat count.
pub fn parse_descriptor<T: CatalogEntry>(
    text: &str,
    catalog: &Catalog<T>,
) -> Result<(&'static T, u8), CalcError> {
    let unrecognized = || CalcError::UnrecognizedDescriptor {
        kind: T::KIND,
        text: text.to_string(),
    };

    // `get` also rejects a split inside a multi-byte character.
    let code = text.get(..CODE_LEN).ok_or_else(unrecognized)?;
    let entry = catalog.get(code).ok_or_else(unrecognized)?;

    let count = match &text[CODE_LEN..] {
        "" => 1,
        suffix => parse_multiplicity(suffix).ok_or_else(unrecognized)?,
    };

    Ok((entry, count))
}

/// `x1`..`x9` → 1..9.
fn parse_multiplicity(suffix: &str) -> Option<u8> {
    match suffix.strip_prefix('x')?.as_bytes() {
        [digit @ b'1'..=b'9'] => Some(digit - b'0'),
        _ => None,
    }
}

pub fn parse_jam(text: &str) -> Result<JamInstance, CalcError> {
    let (kind, count) = parse_descriptor(text, catalog::jammers())?;
    debug_assert!((1..=MAX_REPEAT).contains(&count));
    Ok(JamInstance {
        kind,
        count,
        descriptor: text.to_string(),
    })
}

pub fn parse_fitting(text: &str) -> Result<FittingInstance, CalcError> {
    let (kind, count) = parse_descriptor(text, catalog::fittings())?;
    debug_assert!((1..=MAX_REPEAT).contains(&count));
    Ok(FittingInstance {
        kind,
        count,
        descriptor: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::error::DescriptorKind;

    fn assert_unrecognized(text: &str, kind: DescriptorKind) {
        match parse_descriptor_for(text, kind) {
            Err(CalcError::UnrecognizedDescriptor { kind: k, text: t }) => {
                assert_eq!(k, kind);
                assert_eq!(t, text);
            }
            other => panic!("expected UnrecognizedDescriptor for {text:?}, got {other:?}"),
        }
    }

    fn parse_descriptor_for(text: &str, kind: DescriptorKind) -> Result<(&'static str, u8), CalcError> {
        match kind {
            DescriptorKind::Jammer => parse_descriptor(text, catalog::jammers()).map(|(j, n)| (j.code, n)),
            DescriptorKind::Fitting => parse_descriptor(text, catalog::fittings()).map(|(f, n)| (f.code, n)),
        }
    }

    #[test]
    fn bare_code_defaults_to_one() {
        let jam = parse_jam("M2").unwrap();
        assert_eq!(jam.kind.code, "M2");
        assert_eq!(jam.count, 1);
        assert_eq!(jam.descriptor, "M2");
    }

    #[test]
    fn multiplicity_suffix_is_read() {
        let jam = parse_jam("R2x2").unwrap();
        assert_eq!((jam.kind.code, jam.count), ("R2", 2));

        let fit = parse_fitting("S2x9").unwrap();
        assert_eq!((fit.kind.code, fit.count), ("S2", 9));
    }

    #[test]
    fn malformed_descriptors_are_rejected() {
        for text in [
            "", "Z", "ZZ", "m2", "M2x", "M2x0", "M2x10", "M2X2", "M2x2 ", " M2", "M2y2", "M2xx", "M22",
            "é2", "Mé",
        ] {
            assert_unrecognized(text, DescriptorKind::Jammer);
        }
    }

    #[test]
    fn catalogs_do_not_cross() {
        assert_unrecognized("S2", DescriptorKind::Jammer);
        assert_unrecognized("M2", DescriptorKind::Fitting);
    }

    #[test]
    fn error_message_names_kind_and_text() {
        let err = parse_fitting("Q9x3").unwrap_err();
        assert_eq!(err.to_string(), "unknown fitting: Q9x3");
    }

    proptest! {
        #[test]
        fn every_code_with_every_count_parses(idx in 0usize..29, count in 1u8..=9) {
            let code = catalog::jammers().codes()[idx];
            let text = format!("{code}x{count}");
            prop_assert_eq!(parse_descriptor_for(&text, DescriptorKind::Jammer), Ok((code, count)));
            prop_assert_eq!(parse_descriptor_for(code, DescriptorKind::Jammer), Ok((code, 1)));
        }

        #[test]
        fn parse_accepts_exactly_the_grammar(text in "[A-Za-z0-9]{2}(x[0-9])?") {
            let known = catalog::jammers().get(&text[..2]).is_some();
            let good_suffix = text.len() == 2 || !text.ends_with('0');
            let result = parse_descriptor_for(&text, DescriptorKind::Jammer);
            prop_assert_eq!(result.is_ok(), known && good_suffix);
        }
    }
}
