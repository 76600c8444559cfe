//! Lookup from class name to conflict category.
//!
//! A category groups mutually exclusive classes (`text-red-500` and
//! `text-blue-500` both set the text color). The table is plain data so
//! callers can add categories without touching the merge algorithm.

/// What a prefixed class accepts after its `prefix-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Any non-empty value.
    Any,
    /// Spacing and sizing: numbers, fractions, `px`, `auto`, `full` and any arbitrary value.
    Length,
    /// Integers, or an arbitrary length like `[3px]`.
    Number,
    /// Named font sizes (`sm`, `2xl`), or an arbitrary length.
    FontSize,
    /// Palette colors (`red-500`), the color keywords, any arbitrary value, or a
    /// theme color name such as `primary` or `muted-foreground`. Put this after
    /// the other rules sharing its prefix, since a bare name matches here.
    Color,
    /// One of a fixed set of words.
    Keyword(&'static [&'static str]),
    /// Only a bracketed arbitrary value.
    Arbitrary,
}

const COLOR_KEYWORDS: &[&str] = &["inherit", "current", "transparent", "black", "white"];

/// Palette names understood as colors, in the order Tailwind lists them.
pub const PALETTES: &[&str] = &[
    "slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
    "green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
    "pink", "rose",
];

pub const SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const SIZE_KEYWORDS: &[&str] = &[
    "px", "auto", "full", "screen", "min", "max", "fit", "svh", "lvh", "dvh", "svw", "lvw", "dvw",
];

const RADII: &[&str] = &["none", "sm", "md", "lg", "xl", "2xl", "3xl", "full"];

fn arbitrary_inner(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

fn is_arbitrary_length(value: &str) -> bool {
    match arbitrary_inner(value) {
        Some(inner) => {
            inner.starts_with("length:")
                || inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
                || ["calc(", "min(", "max(", "clamp("]
                    .iter()
                    .any(|f| inner.starts_with(f))
        }
        None => false,
    }
}

fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().map(|n| n.is_finite()).unwrap_or(false)
}

fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_fraction(value: &str) -> bool {
    match value.split_once('/') {
        Some((num, den)) => is_integer(num) && is_integer(den),
        None => false,
    }
}

/// `red-500`, `white`, or an arbitrary value. Does not accept an opacity postfix.
pub fn is_color(value: &str) -> bool {
    if COLOR_KEYWORDS.contains(&value) || arbitrary_inner(value).is_some() {
        return true;
    }
    match value.rsplit_once('-') {
        Some((palette, shade)) => PALETTES.contains(&palette) && SHADES.contains(&shade),
        None => false,
    }
}

/// Theme color token: lowercase words joined by `-`, starting with a letter.
fn is_color_name(value: &str) -> bool {
    value.starts_with(|c: char| c.is_ascii_lowercase())
        && !value.ends_with('-')
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl ValueKind {
    pub fn accepts(&self, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match self {
            ValueKind::Any => true,
            ValueKind::Length => {
                is_number(value)
                    || is_fraction(value)
                    || SIZE_KEYWORDS.contains(&value)
                    || arbitrary_inner(value).is_some()
            }
            ValueKind::Number => is_integer(value) || is_arbitrary_length(value),
            ValueKind::FontSize => FONT_SIZES.contains(&value) || is_arbitrary_length(value),
            ValueKind::Color => is_color(value) || is_color_name(value),
            ValueKind::Keyword(words) => words.contains(&value),
            ValueKind::Arbitrary => arbitrary_inner(value).is_some(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Exact(String),
    Prefix { prefix: String, value: ValueKind },
}

impl Rule {
    fn matches(&self, base: &str) -> bool {
        match self {
            Rule::Exact(name) => base == name,
            Rule::Prefix { prefix, value } => base
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix('-'))
                .is_some_and(|rest| value.accepts(rest)),
        }
    }
}

/// A set of mutually exclusive classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassCategory {
    pub id: String,
    pub rules: Vec<Rule>,
    /// Categories that a class of this one also replaces, e.g. `p` replaces `px`.
    pub overrides: Vec<String>,
}

impl ClassCategory {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rules: Vec::new(),
            overrides: Vec::new(),
        }
    }

    pub fn exact<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules
            .extend(names.into_iter().map(|n| Rule::Exact(n.into())));
        self
    }

    pub fn prefix(mut self, prefix: &str, value: ValueKind) -> Self {
        self.rules.push(Rule::Prefix {
            prefix: prefix.to_string(),
            value,
        });
        self
    }

    pub fn overrides<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.overrides.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn matches(&self, base: &str) -> bool {
        self.rules.iter().any(|r| r.matches(base))
    }
}

/// Ordered category list; the first matching category wins.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    categories: Vec<ClassCategory>,
}

impl CategoryTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a category that is checked before every existing one.
    pub fn with_category(mut self, category: ClassCategory) -> Self {
        self.categories.insert(0, category);
        self
    }

    pub fn push(&mut self, category: ClassCategory) {
        self.categories.push(category);
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category of a class stripped of variants, `!` and a leading `-`.
    pub fn category_of(&self, base: &str) -> Option<&ClassCategory> {
        self.categories.iter().find(|c| c.matches(base))
    }

    /// The default table covering the common Tailwind utilities.
    pub fn tailwind() -> Self {
        use ValueKind::*;

        let mut table = Self::empty();
        let mut add = |c: ClassCategory| table.push(c);

        add(ClassCategory::new("display").exact([
            "block", "inline-block", "inline", "flex", "inline-flex", "table", "inline-table",
            "table-row", "table-cell", "flow-root", "grid", "inline-grid", "contents",
            "list-item", "hidden",
        ]));
        add(ClassCategory::new("position").exact([
            "static", "fixed", "absolute", "relative", "sticky",
        ]));
        add(ClassCategory::new("visibility").exact(["visible", "invisible", "collapse"]));

        for base in ["p", "m"] {
            let axis = |side: &str| format!("{}{}", base, side);
            add(ClassCategory::new(base)
                .prefix(base, Length)
                .overrides(["x", "y", "s", "e", "t", "r", "b", "l"].map(axis)));
            add(ClassCategory::new(axis("x"))
                .prefix(&axis("x"), Length)
                .overrides(["r", "l", "s", "e"].map(axis)));
            add(ClassCategory::new(axis("y"))
                .prefix(&axis("y"), Length)
                .overrides(["t", "b"].map(axis)));
            for side in ["s", "e", "t", "r", "b", "l"] {
                add(ClassCategory::new(axis(side)).prefix(&axis(side), Length));
            }
        }

        add(ClassCategory::new("space-x").prefix("space-x", Length));
        add(ClassCategory::new("space-y").prefix("space-y", Length));
        add(ClassCategory::new("gap").prefix("gap", Length).overrides(["gap-x", "gap-y"]));
        add(ClassCategory::new("gap-x").prefix("gap-x", Length));
        add(ClassCategory::new("gap-y").prefix("gap-y", Length));

        add(ClassCategory::new("size").prefix("size", Any).overrides(["w", "h"]));
        for id in ["w", "h", "min-w", "max-w", "min-h", "max-h"] {
            add(ClassCategory::new(id).prefix(id, Any));
        }

        add(ClassCategory::new("inset")
            .prefix("inset", Length)
            .overrides(["inset-x", "inset-y", "top", "right", "bottom", "left"]));
        add(ClassCategory::new("inset-x").prefix("inset-x", Length).overrides(["right", "left"]));
        add(ClassCategory::new("inset-y").prefix("inset-y", Length).overrides(["top", "bottom"]));
        for id in ["top", "right", "bottom", "left"] {
            add(ClassCategory::new(id).prefix(id, Length));
        }
        add(ClassCategory::new("z").prefix("z", Any));

        add(ClassCategory::new("font-size").prefix("text", FontSize));
        add(ClassCategory::new("text-align").prefix(
            "text",
            Keyword(&["left", "center", "right", "justify", "start", "end"]),
        ));
        add(ClassCategory::new("text-overflow").exact(["truncate", "text-ellipsis", "text-clip"]));
        add(ClassCategory::new("text-color").prefix("text", Color));
        add(ClassCategory::new("font-weight").prefix(
            "font",
            Keyword(&[
                "thin", "extralight", "light", "normal", "medium", "semibold", "bold",
                "extrabold", "black",
            ]),
        ));
        add(ClassCategory::new("font-family").prefix("font", Keyword(&["sans", "serif", "mono"])));
        add(ClassCategory::new("font-style").exact(["italic", "not-italic"]));
        add(ClassCategory::new("text-decoration").exact([
            "underline", "overline", "line-through", "no-underline",
        ]));
        add(ClassCategory::new("text-transform").exact([
            "uppercase", "lowercase", "capitalize", "normal-case",
        ]));
        add(ClassCategory::new("leading").prefix("leading", Any));
        add(ClassCategory::new("tracking").prefix("tracking", Any));
        add(ClassCategory::new("whitespace").prefix("whitespace", Any));
        add(ClassCategory::new("align").prefix(
            "align",
            Keyword(&[
                "baseline", "top", "middle", "bottom", "text-top", "text-bottom", "sub", "super",
            ]),
        ));

        add(ClassCategory::new("bg-color").prefix("bg", Color));

        add(ClassCategory::new("border-w")
            .exact(["border"])
            .prefix("border", Number)
            .overrides([
                "border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b", "border-w-l",
            ]));
        add(ClassCategory::new("border-w-x")
            .exact(["border-x"])
            .prefix("border-x", Number)
            .overrides(["border-w-r", "border-w-l"]));
        add(ClassCategory::new("border-w-y")
            .exact(["border-y"])
            .prefix("border-y", Number)
            .overrides(["border-w-t", "border-w-b"]));
        for side in ["t", "r", "b", "l"] {
            let name = format!("border-{}", side);
            add(ClassCategory::new(format!("border-w-{}", side))
                .exact([name.as_str()])
                .prefix(&name, Number));
        }
        add(ClassCategory::new("border-style").exact([
            "border-solid", "border-dashed", "border-dotted", "border-double", "border-hidden",
            "border-none",
        ]));
        add(ClassCategory::new("border-color").prefix("border", Color));

        add(ClassCategory::new("rounded")
            .exact(["rounded"])
            .prefix("rounded", Keyword(RADII))
            .prefix("rounded", Arbitrary)
            .overrides(["rounded-t", "rounded-r", "rounded-b", "rounded-l"]));
        for side in ["t", "r", "b", "l"] {
            let name = format!("rounded-{}", side);
            add(ClassCategory::new(name.clone())
                .exact([name.as_str()])
                .prefix(&name, Keyword(RADII))
                .prefix(&name, Arbitrary));
        }

        add(ClassCategory::new("shadow")
            .exact(["shadow"])
            .prefix("shadow", Keyword(&["sm", "md", "lg", "xl", "2xl", "inner", "none"])));
        add(ClassCategory::new("shadow-color").prefix("shadow", Color));
        add(ClassCategory::new("ring-w").exact(["ring"]).prefix("ring", Number));
        add(ClassCategory::new("ring-offset-w").prefix("ring-offset", Number));
        add(ClassCategory::new("ring-offset-color").prefix("ring-offset", Color));
        add(ClassCategory::new("ring-color").prefix("ring", Color));
        add(ClassCategory::new("opacity").prefix("opacity", Number));

        add(ClassCategory::new("flex-direction").exact([
            "flex-row", "flex-row-reverse", "flex-col", "flex-col-reverse",
        ]));
        add(ClassCategory::new("flex-wrap").exact([
            "flex-wrap", "flex-wrap-reverse", "flex-nowrap",
        ]));
        add(ClassCategory::new("flex").prefix("flex", Keyword(&["1", "auto", "initial", "none"])));
        add(ClassCategory::new("grow").exact(["grow"]).prefix("grow", Number));
        add(ClassCategory::new("shrink").exact(["shrink"]).prefix("shrink", Number));
        add(ClassCategory::new("grid-cols").prefix("grid-cols", Any));
        add(ClassCategory::new("items").prefix(
            "items",
            Keyword(&["start", "end", "center", "baseline", "stretch"]),
        ));
        add(ClassCategory::new("justify").prefix(
            "justify",
            Keyword(&[
                "normal", "start", "end", "center", "between", "around", "evenly", "stretch",
            ]),
        ));

        const OVERFLOW: &[&str] = &["auto", "hidden", "clip", "visible", "scroll"];
        add(ClassCategory::new("overflow")
            .prefix("overflow", Keyword(OVERFLOW))
            .overrides(["overflow-x", "overflow-y"]));
        add(ClassCategory::new("overflow-x").prefix("overflow-x", Keyword(OVERFLOW)));
        add(ClassCategory::new("overflow-y").prefix("overflow-y", Keyword(OVERFLOW)));

        add(ClassCategory::new("cursor").prefix("cursor", Any));
        add(ClassCategory::new("transition").exact(["transition"]).prefix(
            "transition",
            Keyword(&["none", "all", "colors", "opacity", "shadow", "transform"]),
        ));
        add(ClassCategory::new("duration").prefix("duration", Number));

        table
    }
}
