use colored::Colorize;

use crate::aggregators::DailyAverage;

/// Lay out a table as plain lines: header, rule, then one line per row
pub fn table_lines(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let col_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.len())
                .fold(header.len(), usize::max)
        })
        .collect();

    let header_line = pad_cells(headers, &col_widths);
    let mut lines = vec![header_line.clone(), "-".repeat(header_line.len())];
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        lines.push(pad_cells(&cells, &col_widths));
    }
    lines
}

fn pad_cells(cells: &[&str], col_widths: &[usize]) -> String {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| format!("{:width$}", cell, width = col_widths.get(i).copied().unwrap_or(0)))
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn daily_average_rows(daily: &[DailyAverage]) -> Vec<Vec<String>> {
    daily
        .iter()
        .map(|d| {
            vec![
                d.date.clone(),
                format!("{:.2}", d.avg_temp),
                format!("{:.2}", d.avg_humidity),
            ]
        })
        .collect()
}

pub fn print_daily_averages(daily: &[DailyAverage]) {
    let rows = daily_average_rows(daily);
    let lines = table_lines(&["Date", "Avg Temp", "Avg Humidity"], &rows);
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            println!("{}", line.bold());
        } else {
            println!("{}", line);
        }
    }
}

/// Format data as JSON
pub fn format_json<T: serde::Serialize>(data: &T) -> String {
    match serde_json::to_string_pretty(data) {
        Ok(json) => json,
        Err(_) => "Unable to format as JSON".to_string(),
    }
}

/// Format a header
pub fn print_header(text: &str) {
    println!();
    println!("{}", text.bold().bright_cyan());
    println!("{}", "=".repeat(text.len()));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_average_rows_use_two_decimals() {
        let rows = daily_average_rows(&[DailyAverage {
            date: "2024-01-01".to_string(),
            avg_temp: 21.0,
            avg_humidity: 3.5,
        }]);
        assert_eq!(rows, vec![vec!["2024-01-01", "21.00", "3.50"]]);
    }

    #[test]
    fn test_table_columns_are_padded() {
        let rows = vec![vec!["2024-01-01".to_string(), "21.00".to_string()]];
        let lines = table_lines(&["Date", "Temp"], &rows);

        assert_eq!(lines[0], "Date       | Temp ");
        assert_eq!(lines[1], "-".repeat(lines[0].len()));
        assert_eq!(lines[2], "2024-01-01 | 21.00");
    }
}
