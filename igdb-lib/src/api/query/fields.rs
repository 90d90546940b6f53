//! Field selection

/// Which fields a query returns.
///
/// Converts from a single string (used verbatim) or from any list of names
/// (joined with commas).
///
/// ```
/// use igdb_lib::api::query::Fields;
///
/// assert_eq!(Fields::from(["id", "name"]).to_string(), "id,name");
/// assert_eq!(Fields::from("cover.*").to_string(), "cover.*");
/// assert_eq!(Fields::default().to_string(), "*");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Fields {
    /// Every field (`*`).
    #[default]
    All,
    /// The named fields, in order.
    List(Vec<String>),
}

impl Fields {
    /// Returns `true` if this selects every field.
    pub fn is_all(&self) -> bool {
        match self {
            Self::All => true,
            Self::List(fields) => fields.is_empty(),
        }
    }
}

impl std::fmt::Display for Fields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(fields) if !fields.is_empty() => f.write_str(&fields.join(",")),
            _ => f.write_str("*"),
        }
    }
}

impl From<&str> for Fields {
    fn from(fields: &str) -> Self {
        if fields.is_empty() || fields == "*" {
            Self::All
        } else {
            Self::List(vec![fields.to_string()])
        }
    }
}

impl From<String> for Fields {
    fn from(fields: String) -> Self {
        Self::from(fields.as_str())
    }
}

impl From<Vec<String>> for Fields {
    fn from(fields: Vec<String>) -> Self {
        Self::List(fields)
    }
}

impl From<&[&str]> for Fields {
    fn from(fields: &[&str]) -> Self {
        Self::List(fields.iter().map(|f| (*f).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Fields {
    fn from(fields: [&str; N]) -> Self {
        Self::from(&fields[..])
    }
}

impl From<Vec<&str>> for Fields {
    fn from(fields: Vec<&str>) -> Self {
        Self::from(fields.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_is_all() {
        assert_eq!(Fields::from(Vec::<String>::new()).to_string(), "*");
        assert!(Fields::from(Vec::<String>::new()).is_all());
        assert!(Fields::from("").is_all());
    }

    #[test]
    fn test_single_string_verbatim() {
        assert_eq!(Fields::from("id,name,cover.url").to_string(), "id,name,cover.url");
    }

    #[test]
    fn test_list_joined() {
        let fields = Fields::from(vec!["id".to_string(), "platforms.name".to_string()]);
        assert_eq!(fields.to_string(), "id,platforms.name");
    }
}
