//! Remarks classification logic

use crate::app::models::Classification;
use crate::constants::{BRANCH_TOKEN, SALES_DEPT_TOKEN};

use super::patterns::{AREA_GROUP_RE, SALES_DEPT_SUFFIX_RE, strip_leading_bullet};

/// Classify one free-text remarks value
///
/// Absent input yields `Other { raw_text: "" }` without error; missing
/// remarks are a normal, frequent case. The sales-department pattern takes
/// strict priority over the area-group pattern; a value is never evaluated
/// against both.
///
/// # Examples
///
/// ```
/// use bpr_reconciler::app::services::remarks_classifier::classify;
///
/// let c = classify(Some("41002 東日本第一Gr"));
/// assert_eq!(c.group_code(), "41002");
///
/// let c = classify(None);
/// assert!(c.is_other());
/// ```
pub fn classify(remarks: Option<&str>) -> Classification {
    let Some(raw) = remarks else {
        return Classification::Other {
            raw_text: String::new(),
        };
    };

    let text = strip_leading_bullet(raw);

    if SALES_DEPT_SUFFIX_RE.is_match(text) {
        let (branch_name, department_name) = split_sales_affiliation(text);
        return Classification::SalesDepartmentAffiliation {
            branch_name,
            department_name,
        };
    }

    if let Some(caps) = AREA_GROUP_RE.captures(text) {
        return Classification::AreaGroup {
            group_code: caps[1].to_string(),
            group_name: caps[2].to_string(),
            established_date: caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
        };
    }

    Classification::Other {
        raw_text: text.to_string(),
    }
}

/// Split a sales-department remark into branch and department names
///
/// The split point is the earliest occurrence of `支店` or `営業部`
/// scanning from the start: the branch name runs up to and including that
/// token, the department name is the trimmed remainder. A text with no
/// anchor token anywhere (a bare numbered department designator) yields
/// two empty strings; downstream consumers read that as unparseable input,
/// so the behavior is preserved rather than corrected.
fn split_sales_affiliation(text: &str) -> (String, String) {
    let branch_at = text.find(BRANCH_TOKEN);
    let sales_at = text.find(SALES_DEPT_TOKEN);

    let (idx, token) = match (branch_at, sales_at) {
        (Some(b), Some(s)) if b < s => (b, BRANCH_TOKEN),
        (Some(b), None) => (b, BRANCH_TOKEN),
        (_, Some(s)) => (s, SALES_DEPT_TOKEN),
        (None, None) => return (String::new(), String::new()),
    };

    let split = idx + token.len();
    (
        text[..split].to_string(),
        text[split..].trim().to_string(),
    )
}
