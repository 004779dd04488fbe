// ABOUTME: Plain-text table rendering for row-oriented content.
// ABOUTME: Sizes each column to its widest cell and separates columns with rules.

use unicode_width::UnicodeWidthStr;

/// Render a header row, a rule, and the data rows as a text block.
///
/// Rows shorter than the header get blank cells; extra cells are dropped.
pub fn table(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        widths
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let cell = cells.get(col).map(String::as_str).unwrap_or("");
                format!("{}{}", cell, " ".repeat(width - cell.width()))
            })
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let rule = widths
        .iter()
        .map(|w| "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─");

    let mut out = vec![format_row(headers), rule];
    out.extend(rows.iter().map(|row| format_row(row)));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn columns_fit_widest_cell() {
        let headers = strings(&["PRICE", "CITY"]);
        let rows = vec![
            strings(&["300000", "FOLKESTONE"]),
            strings(&["5", "DOVER"]),
        ];
        assert_eq!(
            table(&headers, &rows),
            "PRICE  │ CITY\n\
             ───────┼───────────\n\
             300000 │ FOLKESTONE\n\
             5      │ DOVER"
        );
    }

    #[test]
    fn ragged_rows_are_padded_and_cropped() {
        let headers = strings(&["A", "B"]);
        let rows = vec![strings(&["1"]), strings(&["2", "3", "4"])];
        assert_eq!(table(&headers, &rows), "A │ B\n──┼──\n1 │\n2 │ 3");
    }
}
