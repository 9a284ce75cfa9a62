use std::fmt;

use uanode_error::{NodeError, Result};

/// A namespace-qualified browse name.
///
/// The name children are looked up by. Two nodes under different parents may
/// share a qualified name; lookup by name is therefore inherently plural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default)]
pub struct QualifiedName {
    pub namespace_index: u16,
    pub name: String,
}

impl QualifiedName {
    /// Create a qualified name.
    #[must_use]
    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        Self {
            namespace_index,
            name: name.into(),
        }
    }

    /// Parse a human-authored name token of the form `"<ns>:<name>"` or bare
    /// `"<name>"`.
    ///
    /// Without a prefix the namespace index is `default_namespace`, the
    /// namespace of the node the name is resolved against. Unqualified child
    /// names are local to their parent's namespace, not to namespace zero.
    ///
    /// A prefix that is empty or does not parse as a u16 is a
    /// [`NodeError::BadNamespacePrefix`] error. An empty name part is
    /// permitted.
    pub fn parse(raw: &str, default_namespace: u16) -> Result<Self> {
        match raw.split_once(':') {
            Some((prefix, name)) => {
                let namespace_index =
                    prefix
                        .parse::<u16>()
                        .map_err(|_| NodeError::BadNamespacePrefix {
                            raw: raw.to_owned(),
                            prefix: prefix.to_owned(),
                        })?;
                Ok(Self::new(namespace_index, name))
            }
            None => Ok(Self::new(default_namespace, raw)),
        }
    }
}

impl fmt::Display for QualifiedName {
    /// Renders `1:Pump` for nonzero namespaces and the bare name for
    /// namespace zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace_index != 0 {
            write!(f, "{}:", self.namespace_index)?;
        }
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixed_ignores_default() {
        let qn = QualifiedName::parse("2:Pump", 7).expect("parse");
        assert_eq!(qn, QualifiedName::new(2, "Pump"));
    }

    #[test]
    fn test_parse_unprefixed_takes_default() {
        let qn = QualifiedName::parse("Pump", 3).expect("parse");
        assert_eq!(qn, QualifiedName::new(3, "Pump"));
    }

    #[test]
    fn test_parse_only_first_colon_splits() {
        let qn = QualifiedName::parse("1:a:b", 0).expect("parse");
        assert_eq!(qn, QualifiedName::new(1, "a:b"));
    }

    #[test]
    fn test_parse_empty_name_allowed() {
        let qn = QualifiedName::parse("4:", 0).expect("parse");
        assert_eq!(qn, QualifiedName::new(4, ""));
    }

    #[test]
    fn test_parse_bad_prefix_rejected() {
        for raw in ["x:Pump", "70000:Pump", ":Pump", "-1:Pump", "1.5:Pump"] {
            let err = QualifiedName::parse(raw, 0).expect_err("should reject");
            assert!(
                matches!(err, NodeError::BadNamespacePrefix { .. }),
                "unexpected error for {raw:?}: {err:?}"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(QualifiedName::new(0, "Objects").to_string(), "Objects");
        assert_eq!(QualifiedName::new(2, "Pump").to_string(), "2:Pump");
    }
}
