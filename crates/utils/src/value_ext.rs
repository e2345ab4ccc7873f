use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Better scientific number formatting
    ///
    /// The default `{:e}` output drops the exponent sign and padding, so
    /// `1e-6` prints as `1e-6` and `1e6` as `1e6`. This always gives a signed,
    /// zero-padded exponent.
    ///
    /// ```rust
    /// # use bmtools_utils::ValueExt;
    /// assert_eq!((1e-6).sci(5, 2), "1.00000e-06".to_string());
    /// assert_eq!((-250.0).sci(2, 2), "-2.50e+02".to_string());
    /// assert_eq!((1.0).sci(3, 3), "1.000e+000".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;

    /// Fixed point formatting that never shows a negative zero
    ///
    /// Coordinates a hair below zero otherwise print as `-0.000000`, which
    /// looks like a different location to `0.000000` in a vertex listing.
    ///
    /// ```rust
    /// # use bmtools_utils::ValueExt;
    /// assert_eq!((0.5).fixed(3), "0.500".to_string());
    /// assert_eq!((-1e-9).fixed(6), "0.000000".to_string());
    /// assert_eq!((-0.25).fixed(2), "-0.25".to_string());
    /// ```
    fn fixed(&self, precision: usize) -> String;
}

impl<T: std::fmt::LowerExp + std::fmt::Display> ValueExt for T {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let formatted = f!("{:.precision$e}", self, precision = precision);

        // `LowerExp` always writes an 'e', fall back to the raw string anyway
        let Some((mantissa, exponent)) = formatted.split_once('e') else {
            return formatted;
        };

        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };

        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }

    fn fixed(&self, precision: usize) -> String {
        let formatted = f!("{:.precision$}", self, precision = precision);
        match formatted.strip_prefix('-') {
            Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
            _ => formatted,
        }
    }
}
