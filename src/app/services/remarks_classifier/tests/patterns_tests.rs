//! Tests for compiled remark patterns and bullet stripping

use crate::app::services::remarks_classifier::patterns::{
    AREA_GROUP_RE, SALES_DEPT_SUFFIX_RE, strip_leading_bullet,
};

#[test]
fn test_strip_single_leading_bullet() {
    assert_eq!(strip_leading_bullet("・八重洲通支店営業部"), "八重洲通支店営業部");
}

#[test]
fn test_strip_only_one_bullet_of_a_run() {
    // A run of bullets loses exactly the first one
    assert_eq!(strip_leading_bullet("・・テキスト"), "・テキスト");
}

#[test]
fn test_half_width_period_is_not_stripped() {
    assert_eq!(strip_leading_bullet(".テキスト"), ".テキスト");
}

#[test]
fn test_bullet_after_whitespace_is_not_stripped() {
    assert_eq!(strip_leading_bullet(" ・テキスト"), " ・テキスト");
}

#[test]
fn test_bullet_elsewhere_is_not_stripped() {
    assert_eq!(strip_leading_bullet("本店・支店"), "本店・支店");
}

#[test]
fn test_empty_input_passes_through() {
    assert_eq!(strip_leading_bullet(""), "");
}

#[test]
fn test_sales_dept_suffix_plain() {
    assert!(SALES_DEPT_SUFFIX_RE.is_match("八重洲通支店営業部"));
    assert!(SALES_DEPT_SUFFIX_RE.is_match("営業部"));
}

#[test]
fn test_sales_dept_suffix_numbered() {
    assert!(SALES_DEPT_SUFFIX_RE.is_match("日本橋支店営業第一部"));
    assert!(SALES_DEPT_SUFFIX_RE.is_match("日本橋支店営業第十部"));
}

#[test]
fn test_sales_dept_suffix_must_close_the_text() {
    assert!(!SALES_DEPT_SUFFIX_RE.is_match("営業部テレマーケティング課"));
    assert!(!SALES_DEPT_SUFFIX_RE.is_match("八重洲通支店"));
}

#[test]
fn test_area_group_code_is_exactly_five_chars() {
    assert!(AREA_GROUP_RE.is_match("41002 東日本第一Gr"));
    assert!(!AREA_GROUP_RE.is_match("4100 東日本第一Gr"));
    assert!(!AREA_GROUP_RE.is_match("410023 東日本第一Gr"));
}

#[test]
fn test_area_group_accepts_full_width_space() {
    assert!(AREA_GROUP_RE.is_match("41012　グローバル財務戦略Gr"));
}

#[test]
fn test_area_group_name_must_end_in_suffix() {
    assert!(!AREA_GROUP_RE.is_match("41002 東日本第一グループ"));
}

#[test]
fn test_area_group_optional_annotation_groups() {
    let caps = AREA_GROUP_RE
        .captures("41012　グローバル財務戦略Gr (4/1新設)")
        .unwrap();
    assert_eq!(&caps[1], "41012");
    assert_eq!(&caps[2], "グローバル財務戦略Gr");
    assert_eq!(caps.get(3).unwrap().as_str(), "4/1新設");

    let caps = AREA_GROUP_RE.captures("41002 東日本第一Gr").unwrap();
    assert!(caps.get(3).is_none());
}

#[test]
fn test_area_group_full_width_parentheses() {
    let caps = AREA_GROUP_RE
        .captures("52001　西日本統括Gr（10/1新設）")
        .unwrap();
    assert_eq!(caps.get(3).unwrap().as_str(), "10/1新設");
}
