//! Class-name merging.
//!
//! [`cn`] flattens class tokens and resolves conflicting utilities so that the
//! last class of each category wins:
//!
//! ```
//! use coin_board::cn;
//!
//! assert_eq!(cn!("text-red-500 p-4", "text-blue-500"), "p-4 text-blue-500");
//! ```

mod categories;
mod merge;
pub mod theme;
mod token;

pub use categories::{CategoryTable, ClassCategory, Rule, ValueKind, is_color};
pub use merge::ClassMerger;
pub use token::{ClassToken, join_classes};

use std::sync::LazyLock;

static DEFAULT_MERGER: LazyLock<ClassMerger> = LazyLock::new(ClassMerger::default);

/// Merges tokens with the default Tailwind category table.
pub fn cn<I, T>(tokens: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Into<ClassToken>,
{
    DEFAULT_MERGER.merge(tokens)
}

/// Variadic form of [`cn`](crate::style::cn); arguments may be of different token types.
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($token:expr),+ $(,)?) => {
        $crate::style::cn([$($crate::style::ClassToken::from($token)),+])
    };
}
