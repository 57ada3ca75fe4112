use encoding_rs::Encoding;
use std::{fmt::Display, str::FromStr};

/// Wrapper type to parse sizes with optional suffixes (e.g. 10K, 5MiB).
#[derive(Debug, Clone, Copy)]
pub struct SizeArg(pub u64);

impl std::str::FromStr for SizeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, multiplier) = parse_with_suffix(&lower);
        let num: u64 = num_str
            .parse()
            .map_err(|_| format!("Invalid size number: {num_str}"))?;
        num.checked_mul(multiplier)
            .map(Self)
            .ok_or_else(|| format!("Size too large: {s}"))
    }
}

fn parse_with_suffix(s: &str) -> (&str, u64) {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const SUFFIXES: &[(&[&str], u64)] = &[
        (&["gib", "gb", "g"], GB),
        (&["mib", "mb", "m"], MB),
        (&["kib", "kb", "k"], KB),
        (&["b"], 1),
    ];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s, 1)
}

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a `usize` constrained to the inclusive range [1, 512].
///
/// # Errors
/// Returns an error if the input string is not a valid number or is outside the range [1, 512].
pub fn parse_usize_1_to_512(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, Some(512))
}

/// Parse a key=value pair string into a tuple.
///
/// # Errors
/// Returns an error if the input string does not contain an '=' character.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| format!("Expected key=val: {s}"))
}

/// Resolve a WHATWG encoding label such as `shift_jis` or `utf-8`.
///
/// # Errors
/// Returns an error if the label names no known encoding.
pub fn parse_encoding(s: &str) -> Result<&'static Encoding, String> {
    Encoding::for_label(s.trim().as_bytes()).ok_or_else(|| format!("Unknown encoding: {s}"))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_size_arg_no_suffix(n in 0u64..1_000_000_000) {
            let parsed: SizeArg = n.to_string().parse().unwrap();
            prop_assert_eq!(parsed.0, n);
        }

        #[test]
        fn test_size_arg_k_suffix(n in 0u64..1_000_000) {
            let parsed: SizeArg = format!("{n}K").parse().unwrap();
            prop_assert_eq!(parsed.0, n * 1024);
        }

        #[test]
        fn test_size_arg_underscores(a in 1u64..1000, b in 0u64..1000) {
            let parsed: SizeArg = format!("{a}_{b:03}").parse().unwrap();
            prop_assert_eq!(parsed.0, a * 1000 + b);
        }

        #[test]
        fn test_bounded_usize_valid(n in 1usize..=512) {
            prop_assert_eq!(parse_usize_1_to_512(&n.to_string()).unwrap(), n);
        }

        #[test]
        fn test_bounded_usize_rejects_large(n in 513usize..10_000) {
            prop_assert!(parse_usize_1_to_512(&n.to_string()).is_err());
        }

        #[test]
        fn test_key_val_roundtrip(
            key in "[a-zA-Z][a-zA-Z0-9_]{0,20}",
            val in "[a-zA-Z0-9_]{0,50}"
        ) {
            let (k, v) = parse_key_val(&format!("{key}={val}")).unwrap();
            prop_assert_eq!(k, key);
            prop_assert_eq!(v, val);
        }
    }
}
