use super::categories::{CategoryTable, ClassCategory};
use super::token::ClassToken;
use std::collections::HashSet;

/// A class split into its parts: `md:hover:!-mt-2` has modifiers
/// `["md", "hover"]`, is important and has base `mt-2`. The sign of a
/// negative value does not change its category, so it is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedClass<'a> {
    pub modifiers: Vec<&'a str>,
    pub important: bool,
    pub base: &'a str,
}

impl<'a> ParsedClass<'a> {
    pub fn parse(class: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0i32;
        let mut start = 0;
        for (i, c) in class.char_indices() {
            match c {
                '[' | '(' => depth += 1,
                ']' | ')' => depth -= 1,
                ':' if depth == 0 => {
                    modifiers.push(&class[start..i]);
                    start = i + 1;
                }
                _ => {}
            }
        }
        let mut base = &class[start..];

        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }

        if let Some(rest) = base.strip_prefix('-') {
            base = rest;
        }

        Self {
            modifiers,
            important,
            base,
        }
    }

    /// Base without a trailing `/postfix` outside brackets, e.g. `bg-red-500/50`.
    pub fn base_without_postfix(&self) -> Option<&'a str> {
        let mut depth = 0i32;
        let mut slash = None;
        for (i, c) in self.base.char_indices() {
            match c {
                '[' | '(' => depth += 1,
                ']' | ')' => depth -= 1,
                '/' if depth == 0 => slash = Some(i),
                _ => {}
            }
        }
        slash.map(|i| &self.base[..i])
    }

    /// `[mask-type:alpha]` sets a single property; its category is the property name.
    fn arbitrary_property(&self) -> Option<&'a str> {
        let inner = self.base.strip_prefix('[')?.strip_suffix(']')?;
        inner.split_once(':').map(|(property, _)| property)
    }

    /// Variant key shared by classes that can conflict. Runs of plain
    /// modifiers are order-insensitive; arbitrary variants keep their position.
    fn variant_key(&self) -> String {
        let mut sorted: Vec<&str> = Vec::with_capacity(self.modifiers.len());
        let mut run: Vec<&str> = Vec::new();
        for &m in &self.modifiers {
            if m.starts_with('[') {
                run.sort_unstable();
                sorted.append(&mut run);
                sorted.push(m);
            } else {
                run.push(m);
            }
        }
        run.sort_unstable();
        sorted.append(&mut run);

        let mut key = sorted.join(":");
        key.push(':');
        if self.important {
            key.push('!');
        }
        key
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ConflictKey<'a> {
    Category(String),
    Literal(&'a str),
}

/// Merges class lists, keeping only the last class of each category.
#[derive(Debug, Clone)]
pub struct ClassMerger {
    table: CategoryTable,
}

impl Default for ClassMerger {
    fn default() -> Self {
        Self::new(CategoryTable::tailwind())
    }
}

impl ClassMerger {
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    fn category_for(&self, parsed: &ParsedClass<'_>) -> Option<&ClassCategory> {
        self.table.category_of(parsed.base).or_else(|| {
            parsed
                .base_without_postfix()
                .and_then(|base| self.table.category_of(base))
        })
    }

    pub fn merge<I, T>(&self, tokens: I) -> String
    where
        I: IntoIterator<Item = T>,
        T: Into<ClassToken>,
    {
        let tokens: Vec<ClassToken> = tokens.into_iter().map(Into::into).collect();
        let mut classes = Vec::new();
        for token in &tokens {
            token.flatten_into(&mut classes);
        }
        self.merge_classes(&classes)
    }

    /// Walks the classes right to left so the last class of a category claims it first.
    pub fn merge_classes(&self, classes: &[&str]) -> String {
        let mut claimed: HashSet<ConflictKey> = HashSet::new();
        let mut kept: Vec<&str> = Vec::with_capacity(classes.len());

        for &class in classes.iter().rev() {
            let parsed = ParsedClass::parse(class);
            let variant = parsed.variant_key();

            let (key, overrides) = if let Some(property) = parsed.arbitrary_property() {
                (ConflictKey::Category(format!("{}[{}]", variant, property)), &[][..])
            } else if let Some(category) = self.category_for(&parsed) {
                (
                    ConflictKey::Category(format!("{}{}", variant, category.id)),
                    category.overrides.as_slice(),
                )
            } else {
                (ConflictKey::Literal(class), &[][..])
            };

            if !claimed.insert(key) {
                continue;
            }
            for id in overrides {
                claimed.insert(ConflictKey::Category(format!("{}{}", variant, id)));
            }
            kept.push(class);
        }

        kept.reverse();
        kept.join(" ")
    }
}
