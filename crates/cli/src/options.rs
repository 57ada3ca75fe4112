use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
    Jsonl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Tokens,
    Size,
    Name,
    Ext,
}

/// `tokens:desc,name` の形式のソート指定
#[derive(Debug, Clone, Default)]
pub struct SortSpec(pub Vec<(SortKey, bool)>);

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let specs = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_single_spec)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(specs))
    }
}

fn parse_single_spec(part: &str) -> Result<(SortKey, bool), String> {
    let (key_str, desc) = part.split_once(':').map_or((part, false), |(k, d)| {
        (k.trim(), matches!(d.trim(), "desc" | "DESC"))
    });

    let key = parse_sort_key(key_str)?;
    Ok((key, desc))
}

fn parse_sort_key(key_str: &str) -> Result<SortKey, String> {
    match key_str.to_ascii_lowercase().as_str() {
        "tokens" => Ok(SortKey::Tokens),
        "size" => Ok(SortKey::Size),
        "name" => Ok(SortKey::Name),
        "ext" => Ok(SortKey::Ext),
        other => Err(format!("Unknown sort key: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_spec_multiple_keys() {
        let spec: SortSpec = "tokens:desc, name".parse().unwrap();
        assert_eq!(spec.0, vec![(SortKey::Tokens, true), (SortKey::Name, false)]);
    }

    #[test]
    fn test_sort_spec_ignores_empty_parts() {
        let spec: SortSpec = "size:DESC,,".parse().unwrap();
        assert_eq!(spec.0, vec![(SortKey::Size, true)]);
    }

    #[test]
    fn test_sort_spec_unknown_key() {
        let err = "lines".parse::<SortSpec>().unwrap_err();
        assert_eq!(err, "Unknown sort key: lines");
    }
}
