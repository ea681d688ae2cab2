//! Plain aligned-column rendering for `--format table`.

const MIN_COLUMN_WIDTH: usize = 4;
const MAX_CELL_WIDTH: usize = 48;

/// Render an aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.len())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .clamp(MIN_COLUMN_WIDTH, MAX_CELL_WIDTH)
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.len());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                pad(&truncate(cell, *width), *width)
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = vec![header_line, divider];
    lines.extend(row_lines);
    lines.join("\n")
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn truncate(text: &str, width: usize) -> String {
    if text.len() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(1);
    let mut cut = keep;
    while cut > 0 && !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…", &text[..cut])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn aligns_columns_to_widest_cell() {
        let out = render_table(
            &["id", "title"],
            &[
                vec!["c_1".into(), "Studio".into()],
                vec!["c_22".into(), "Family condo".into()],
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id    title       ");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "c_1   Studio      ");
        assert_eq!(lines[3], "c_22  Family condo");
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let out = render_table(&["a", "b"], &[vec!["x".into()]]);
        assert!(out.lines().nth(2).is_some_and(|line| line.contains('-')));
    }

    #[test]
    fn long_cells_are_truncated() {
        let long = "x".repeat(200);
        let out = render_table(&["v"], &[vec![long]]);
        let row = out.lines().nth(2).expect("row");
        assert!(row.chars().count() <= MAX_CELL_WIDTH);
        assert!(row.ends_with('…'));
    }
}
