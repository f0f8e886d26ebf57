//! Rendering of statistics for the report table
//!
//! Values are rounded to two decimals and printed in their shortest decimal
//! form, which always keeps a fractional part (`0.5`, `1.0`, `-0.0`). The
//! text is then right-padded with `'0'` to at least four characters, so
//! `0.5` becomes `0.50` while `-1.5` and `10.5` are left as they are.

/// Number of decimals every reported statistic is rounded to
pub const DECIMALS: usize = 2;

/// Minimum width of a rendered statistic
pub const MIN_WIDTH: usize = 4;

/// Round `value` to `decimals` places.
///
/// Rounding goes through the exact decimal expansion of the binary value, so
/// `0.825` (stored as `0.82499999...`) rounds down. Non-finite values are
/// returned unchanged.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Shortest decimal representation of `value` that round-trips.
///
/// Integral values keep a trailing `.0`, NaN is `nan` and infinities are
/// `inf` / `-inf`.
pub fn shortest_repr(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        (if value > 0.0 { "inf" } else { "-inf" }).to_string()
    } else {
        format!("{value:?}")
    }
}

/// Right-pad `text` with `'0'` up to `width` characters
pub fn pad_zeros(text: &str, width: usize) -> String {
    format!("{text:0<width$}")
}

/// Render an already-rounded value for the report
pub fn render_rounded(rounded: f64) -> String {
    pad_zeros(&shortest_repr(rounded), MIN_WIDTH)
}

/// Round and render a statistic for the report
pub fn format_statistic(value: f64) -> String {
    render_rounded(round_to(value, DECIMALS))
}
