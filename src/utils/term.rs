use indicatif::{ProgressBar, ProgressStyle};

/// lays out `data` row by row, `n_cols` per row, padding every column to its widest cell
pub fn get_formatted_cols<I, S>(data: I, n_cols: usize) -> String
where
    S: AsRef<str>,
    I: IntoIterator<Item = S>,
{
    let cells: Vec<S> = data.into_iter().collect();
    if n_cols == 0 || cells.is_empty() {
        return String::new();
    }

    let mut n_col_padding: Vec<usize> = vec![0; n_cols];
    for (i, cell) in cells.iter().enumerate() {
        let j = i % n_cols;
        n_col_padding[j] = n_col_padding[j].max(cell.as_ref().chars().count());
    }

    let rows: Vec<String> = cells
        .chunks(n_cols)
        .map(|row| {
            let mut row_str = String::new();
            for (j, cell) in row.iter().enumerate() {
                row_str += &format!("{0:<1$}  ", cell.as_ref(), n_col_padding[j]);
            }
            row_str.trim_end().to_string()
        })
        .collect();

    rows.join("\n")
}

pub fn get_spinner(msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_columns() {
        let out = get_formatted_cols(["a", "1", "longer key", "22"], 2);
        assert_eq!(out, "a           1\nlonger key  22");
    }

    #[test]
    fn handles_ragged_last_row() {
        let out = get_formatted_cols(vec!["x", "y", "z"], 2);
        assert_eq!(out, "x  y\nz");
    }

    #[test]
    fn empty_input() {
        assert_eq!(get_formatted_cols(Vec::<String>::new(), 2), "");
        assert_eq!(get_formatted_cols(["a"], 0), "");
    }
}
