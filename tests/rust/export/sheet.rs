//! Copyright © 2025-2026 Dunimd Team. All Rights Reserved.
//!
//! This file is part of Fex.
//! The Fex project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

use fex::export::sheet::{
    coerce_cell, csv_to_grid, grid_from_csv, normalize_csv_text, normalize_decimal_separator,
    FexCell,
};

#[test]
fn thousands_separator_space_is_removed() {
    assert_eq!(normalize_csv_text("1 234"), "1234");
}

#[test]
fn spaces_not_between_digits_are_kept() {
    assert_eq!(normalize_csv_text("a b"), "a b");
    assert_eq!(normalize_csv_text("1 a"), "1 a");
    assert_eq!(normalize_csv_text("a 1"), "a 1");
}

#[test]
fn adjacency_is_judged_after_quote_stripping() {
    // both spaces lack digits on both sides, so neither is removed
    assert_eq!(normalize_csv_text("1  2"), "1  2");
    // alternating digits collapse fully
    assert_eq!(normalize_csv_text("1 2 3"), "123");
    // quotes go first, making the digits around this space adjacent
    assert_eq!(normalize_csv_text("\"1\" 2"), "12");
}

#[test]
fn double_quotes_are_stripped() {
    assert_eq!(normalize_csv_text("\"abc\";\"1 234\""), "abc;1234");
}

#[test]
fn decimal_comma_between_digits_becomes_period() {
    assert_eq!(normalize_decimal_separator("3,14"), "3.14");
    assert_eq!(normalize_decimal_separator("a,b"), "a,b");
    assert_eq!(normalize_decimal_separator(",5"), ",5");
    assert_eq!(normalize_decimal_separator("5,"), "5,");
}

#[test]
fn numeric_looking_cells_coerce_to_numbers() {
    assert_eq!(coerce_cell("1234"), FexCell::Number(1234.0));
    assert_eq!(coerce_cell("3,14"), FexCell::Number(3.14));
    assert_eq!(coerce_cell("-7.5"), FexCell::Number(-7.5));
}

#[test]
fn non_numeric_cells_stay_text() {
    assert_eq!(coerce_cell("ABC"), FexCell::Text("ABC".to_string()));
    assert_eq!(coerce_cell("12ab"), FexCell::Text("12ab".to_string()));
}

#[test]
fn blank_cells_coerce_to_zero() {
    assert_eq!(coerce_cell(""), FexCell::Number(0.0));
    assert_eq!(coerce_cell("   "), FexCell::Number(0.0));
}

#[test]
fn surrounding_whitespace_does_not_block_coercion() {
    assert_eq!(coerce_cell(" 42 "), FexCell::Number(42.0));
    assert_eq!(coerce_cell("\t3,14"), FexCell::Number(3.14));
}

#[test]
fn non_finite_spellings_stay_text() {
    assert_eq!(coerce_cell("Infinity"), FexCell::Text("Infinity".to_string()));
    assert_eq!(coerce_cell("NaN"), FexCell::Text("NaN".to_string()));
}

#[test]
fn zero_padded_codes_are_lossily_coerced() {
    // accepted lossy heuristic: "007" is a number after coercion
    assert_eq!(coerce_cell("007"), FexCell::Number(7.0));
}

#[test]
fn coerced_text_keeps_the_original_string() {
    // the comma rewrite applies only when the result parses
    assert_eq!(coerce_cell("x 3,14"), FexCell::Text("x 3,14".to_string()));
}

#[test]
fn grid_splits_rows_on_crlf_and_cells_on_semicolon() {
    let grid = csv_to_grid("a;b\r\n1;2\r\n");
    assert_eq!(grid.len(), 2);
    assert_eq!(grid[0], vec![
        FexCell::Text("a".to_string()),
        FexCell::Text("b".to_string()),
    ]);
    assert_eq!(grid[1], vec![FexCell::Number(1.0), FexCell::Number(2.0)]);
}

#[test]
fn trailing_terminator_does_not_add_a_row() {
    assert_eq!(csv_to_grid("a\r\n").len(), 1);
    assert_eq!(csv_to_grid("a").len(), 1);
}

#[test]
fn full_pipeline_normalizes_quoted_locale_numbers() {
    let grid = grid_from_csv("value;name\r\n\"1 234\";\"ABC\"\r\n\"3,14\";x\r\n");
    assert_eq!(grid[1][0], FexCell::Number(1234.0));
    assert_eq!(grid[1][1], FexCell::Text("ABC".to_string()));
    assert_eq!(grid[2][0], FexCell::Number(3.14));
}
