//! Reader for Java style `.properties` text, and the country outline tables
//! that map tiles ship in that format.

use indexmap::IndexMap;
use lyon_path::Path;

use crate::{error::TilesCommonError, lyon::parse_svg_path};

/// Parses `.properties` text into an ordered key/value map.
///
/// Supports `#` and `!` comments, `=`, `:` or whitespace separators, trailing
/// backslash line continuations and the standard escapes including `\uXXXX`.
/// When a key repeats, the last value wins.
pub fn parse_properties(text: &str) -> Result<IndexMap<String, String>, TilesCommonError> {
    let mut properties = IndexMap::new();
    let mut lines = text.lines().enumerate();

    while let Some((idx, line)) = lines.next() {
        let line_no = idx + 1;
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        let key = unescape(key, line_no)?;
        let value = unescape(value, line_no)?;
        properties.insert(key, value);
    }

    Ok(properties)
}

// An odd number of trailing backslashes escapes the line break
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\x0c' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches([' ', '\t', '\x0c']);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches([' ', '\t', '\x0c']);
    }
    (key, rest)
}

fn unescape(raw: &str, line: usize) -> Result<String, TilesCommonError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let decoded = u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| hex.len() == 4)
                    .and_then(char::from_u32)
                    .ok_or_else(|| TilesCommonError::InvalidProperties {
                        line,
                        message: format!("malformed \\u escape `\\u{hex}`"),
                    })?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

/// One closed outline of a country, e.g. a single island
#[derive(Debug, Clone)]
pub struct CountryPath {
    pub name: String,
    pub path: Path,
}

/// Country outlines keyed by country code, in file order
#[derive(Debug, Clone, Default)]
pub struct CountryPaths {
    paths: IndexMap<String, Vec<CountryPath>>,
}

impl CountryPaths {
    /// Builds the table from `.properties` text whose values are lists of SVG
    /// path strings separated by `;`
    pub fn from_properties_str(text: &str) -> Result<Self, TilesCommonError> {
        let properties = parse_properties(text)?;
        let mut paths = IndexMap::with_capacity(properties.len());
        for (name, value) in properties {
            let outlines = value
                .split(';')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(|p| -> Result<CountryPath, TilesCommonError> {
                    Ok(CountryPath {
                        name: name.clone(),
                        path: parse_svg_path(p)?,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            paths.insert(name, outlines);
        }
        log::debug!("loaded outlines for {} countries", paths.len());
        Ok(Self { paths })
    }

    pub fn get(&self, name: &str) -> Result<&[CountryPath], TilesCommonError> {
        self.paths
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| TilesCommonError::UnknownCountry(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_and_comments() {
        let text = "# comment\n! also a comment\n\na=1\nb : 2\nc 3\n  d=  spaced value";
        let props = parse_properties(text).unwrap();
        assert_eq!(props.len(), 4);
        assert_eq!(props["a"], "1");
        assert_eq!(props["b"], "2");
        assert_eq!(props["c"], "3");
        assert_eq!(props["d"], "spaced value");
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_continuations_and_escapes() {
        let text = "long = first \\\n       second\nkey\\=with\\:seps = x\nuni=\\u00dcber\\tTab\neven=ends\\\\\nnext=1";
        let props = parse_properties(text).unwrap();
        assert_eq!(props["long"], "first second");
        assert_eq!(props["key=with:seps"], "x");
        assert_eq!(props["uni"], "Über\tTab");
        assert_eq!(props["even"], "ends\\");
        assert_eq!(props["next"], "1");
    }

    #[test]
    fn test_last_value_wins() {
        let props = parse_properties("a=1\na=2").unwrap();
        assert_eq!(props.len(), 1);
        assert_eq!(props["a"], "2");
    }

    #[test]
    fn test_malformed_unicode_escape() {
        let err = parse_properties("ok=1\nbad=\\u12").unwrap_err();
        assert!(matches!(err, TilesCommonError::InvalidProperties { line: 2, .. }));
    }

    #[test]
    fn test_country_paths() {
        let text = "AT=M 0 0 L 10 0 L 10 10 Z\nIT=M 0 0 L 1 0 L 1 1 Z;M 5 5 L 6 5 L 6 6 Z;\n";
        let countries = CountryPaths::from_properties_str(text).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries.names().collect::<Vec<_>>(), vec!["AT", "IT"]);
        assert_eq!(countries.get("AT").unwrap().len(), 1);

        let italy = countries.get("IT").unwrap();
        assert_eq!(italy.len(), 2);
        assert!(italy.iter().all(|p| p.name == "IT"));

        assert!(matches!(
            countries.get("XX"),
            Err(TilesCommonError::UnknownCountry(_))
        ));
    }

    #[test]
    fn test_country_paths_invalid_svg() {
        let err = CountryPaths::from_properties_str("AT=M 0 0 L nope").unwrap_err();
        assert!(matches!(err, TilesCommonError::InvalidSvgPath(_)));
    }
}
