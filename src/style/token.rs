/// One argument to [`cn`](super::cn).
///
/// Strings contribute their whitespace-separated classes, maps contribute the
/// keys whose flag is set, lists are flattened depth first and `Empty` (also
/// produced by `None` and `false`) contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClassToken {
    #[default]
    Empty,
    Str(String),
    Map(Vec<(String, bool)>),
    List(Vec<ClassToken>),
}

impl ClassToken {
    /// Conditional classes, kept in the given order.
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, bool)>,
        K: Into<String>,
    {
        ClassToken::Map(entries.into_iter().map(|(k, on)| (k.into(), on)).collect())
    }

    /// Appends the classes of this token to `out`, left to right.
    pub fn flatten_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ClassToken::Empty => {}
            ClassToken::Str(s) => out.extend(s.split_whitespace()),
            ClassToken::Map(entries) => {
                for (key, on) in entries {
                    if *on {
                        out.extend(key.split_whitespace());
                    }
                }
            }
            ClassToken::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }
}

/// Flattens tokens into a space-joined string without resolving conflicts.
pub fn join_classes<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<ClassToken>,
{
    let tokens: Vec<ClassToken> = tokens.into_iter().map(Into::into).collect();
    let mut classes = Vec::new();
    for token in &tokens {
        token.flatten_into(&mut classes);
    }
    classes.join(" ")
}

impl From<&str> for ClassToken {
    fn from(s: &str) -> Self {
        ClassToken::Str(s.to_string())
    }
}

impl From<String> for ClassToken {
    fn from(s: String) -> Self {
        ClassToken::Str(s)
    }
}

impl From<&String> for ClassToken {
    fn from(s: &String) -> Self {
        ClassToken::Str(s.clone())
    }
}

/// `true` alone names no class, so both flags are empty.
impl From<bool> for ClassToken {
    fn from(_: bool) -> Self {
        ClassToken::Empty
    }
}

impl From<(&str, bool)> for ClassToken {
    fn from((class, on): (&str, bool)) -> Self {
        ClassToken::Map(vec![(class.to_string(), on)])
    }
}

impl<T: Into<ClassToken>> From<Option<T>> for ClassToken {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => ClassToken::Empty,
        }
    }
}

impl<T: Into<ClassToken>> From<Vec<T>> for ClassToken {
    fn from(items: Vec<T>) -> Self {
        ClassToken::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassToken>, const N: usize> From<[T; N]> for ClassToken {
    fn from(items: [T; N]) -> Self {
        ClassToken::List(items.into_iter().map(Into::into).collect())
    }
}
