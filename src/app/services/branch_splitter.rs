//! Branch name splitting service
//!
//! Splits a compound organization name into its parent branch part and the
//! sub-unit remainder. Like the remarks classifier this is a pure function
//! with no external state.

use crate::constants::BRANCH_TOKEN;

/// Split a compound name at the first branch token
///
/// The branch part is kept as short as possible: it runs up to and
/// including the **first** occurrence of `支店`. The remainder is returned
/// with surrounding whitespace trimmed. A name with no branch token comes
/// back whole, paired with an empty remainder. `None` passes through as
/// `(None, None)`; absent names are not an error here.
///
/// # Examples
///
/// ```
/// use bpr_reconciler::app::services::branch_splitter::split_branch_name;
///
/// let (branch, rest) = split_branch_name(Some("八重洲通支店営業部"));
/// assert_eq!(branch.as_deref(), Some("八重洲通支店"));
/// assert_eq!(rest.as_deref(), Some("営業部"));
/// ```
pub fn split_branch_name(name: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(name) = name else {
        return (None, None);
    };

    match name.find(BRANCH_TOKEN) {
        Some(idx) => {
            let split = idx + BRANCH_TOKEN.len();
            (
                Some(name[..split].to_string()),
                Some(name[split..].trim().to_string()),
            )
        }
        None => (Some(name.to_string()), Some(String::new())),
    }
}
