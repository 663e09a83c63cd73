//! Compiled remark patterns
//!
//! The patterns are compiled once on first use and shared across the
//! process. Pattern text lives here, next to the token constants it is
//! built from, so the classification rules are reviewable in one place.

use crate::constants::{AREA_GROUP_CODE_LEN, AREA_GROUP_SUFFIX, LEADING_BULLET};
use regex::Regex;
use std::sync::LazyLock;

/// Department designator closing a sales-department remark
///
/// Matches a plain `営業部` suffix or a numbered `営業第N部` suffix, where
/// N is one or more kanji numerals.
pub static SALES_DEPT_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:営業部|営業第[一二三四五六七八九十]+部)$").unwrap());

/// Area-group remark shape
///
/// Capture groups: (1) the 5-character group code, (2) the group name
/// ending in `Gr`, (3) an optional establishment annotation without its
/// surrounding parentheses. The separator is exactly one half-width or
/// full-width space; half- and full-width parentheses pair freely, as they
/// do in the source data.
pub static AREA_GROUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(\w{{{code_len}}})[ \u{{3000}}](.*{suffix})(?:\s*[（(](.*)[）)])?$",
        code_len = AREA_GROUP_CODE_LEN,
        suffix = AREA_GROUP_SUFFIX,
    ))
    .unwrap()
});

/// Strip a single leading list bullet from a remarks value
///
/// Exactly one full-width bullet is removed, and only when it sits at the
/// very start of the text. A half-width period, a bullet preceded by
/// whitespace, and bullets elsewhere in the string are left alone.
pub fn strip_leading_bullet(text: &str) -> &str {
    text.strip_prefix(LEADING_BULLET).unwrap_or(text)
}
