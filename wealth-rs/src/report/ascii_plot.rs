use crate::Real;
use std::iter;

/// ASCII plot of a sequence of non-negative values.
///
/// Each point becomes a column filled with '*'s up to its height, scaled so
/// the maximum reaches `height` rows. The bottom row is always filled.
pub fn plot_vbars(values: &[Real], height: usize) -> String {
    if values.is_empty() || height == 0 {
        return String::new();
    }
    let max = values.iter().cloned().fold(0.0, Real::max);
    let step = max / height as Real;

    let mut out = String::with_capacity((values.len() + 1) * (height + 1));
    for i in 0..height + 1 {
        let h = (height - i) as Real * step;
        for &x in values {
            out.push(if x >= h { '*' } else { ' ' });
        }
        out.push('\n');
    }
    return out;
}

/// ASCII plot of labeled values, one horizontal bar per row.
pub fn plot_hbars<L: ToString>(rows: &[(L, Real)], width: usize) -> String {
    let max = rows.iter().map(|(_, x)| *x).fold(0.0, Real::max);
    if rows.is_empty() || max <= 0.0 {
        return String::new();
    }
    let labels: Vec<String> = rows.iter().map(|(l, _)| l.to_string()).collect();
    let pad = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (label, (_, x)) in labels.iter().zip(rows) {
        let n = (x / max * width as Real).round() as usize;
        out.push_str(&format!("{:>pad$} |", label, pad = pad));
        out.extend(iter::repeat('=').take(n));
        out.push('\n');
    }
    return out;
}
