//! Uppercase and letter counting over text columns.

use crate::types::CharacterCounts;
use crate::utils::{ColumnKind, columns_of_kind};
use polars::prelude::*;
use tracing::debug;
use unicode_general_category::{GeneralCategory, get_general_category};

/// Count uppercase and letter characters of a single cell.
///
/// The two counters overlap: every uppercase letter is also a letter.
pub fn count_characters(text: &str) -> CharacterCounts {
    text.chars().fold(CharacterCounts::default(), |mut acc, c| {
        if c.is_uppercase() {
            acc.uppercase += 1;
        }
        if is_letter(c) {
            acc.letters += 1;
        }
        acc
    })
}

/// True for the Unicode letter categories (Lu, Ll, Lt, Lm, Lo).
///
/// Narrower than `char::is_alphabetic`, which also accepts letter numerals,
/// circled letters and combining vowel signs.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Sum the character counts of every cell in every text column.
///
/// Non-text columns and null cells contribute nothing.
pub fn analyze_characters(df: &DataFrame) -> PolarsResult<CharacterCounts> {
    let mut total = CharacterCounts::default();

    for name in columns_of_kind(df, ColumnKind::Text) {
        let col = df.column(&name)?;
        let str_series = col.as_materialized_series().str()?;
        let column_total = str_series
            .into_iter()
            .flatten()
            .map(count_characters)
            .fold(CharacterCounts::default(), |acc, counts| acc + counts);

        debug!(
            "Column '{}': {} uppercase, {} letters",
            name,
            column_total.uppercase,
            column_total.letters
        );
        total = total + column_total;
    }

    Ok(total)
}
