//! Parameter block decoding.
//!
//! The tail of a connection line carries `;`-separated `key=value`
//! pairs. Decoding is order-preserving: later occurrences of a key are
//! handed to the builder after earlier ones and therefore win.

/// One decoded `name=value` pair, borrowing the parameter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Decode a raw parameter block into its ordered pairs.
///
/// Segments split on `;`; each segment splits on its first `=`. A
/// segment without `=` decodes to an empty value; empty segments are
/// dropped, so a trailing `;` is harmless.
pub fn decode(block: &str) -> Vec<Param<'_>> {
    block
        .split(';')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((name, value)) => Param { name, value },
            None => Param {
                name: segment,
                value: "",
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_pairs() {
        let params = decode("timeout=5;verifypeer=1");
        assert_eq!(
            params,
            vec![
                Param {
                    name: "timeout",
                    value: "5"
                },
                Param {
                    name: "verifypeer",
                    value: "1"
                },
            ]
        );
    }

    #[test]
    fn test_value_keeps_later_equals() {
        let params = decode("ciphersuites=a=b");
        assert_eq!(params[0].name, "ciphersuites");
        assert_eq!(params[0].value, "a=b");
    }

    #[test]
    fn test_missing_value() {
        let params = decode("failover");
        assert_eq!(
            params,
            vec![Param {
                name: "failover",
                value: ""
            }]
        );
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert!(decode("").is_empty());
        let params = decode(";;timeout=1;");
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "timeout");
    }
}
