use crate::UNDEFINED;

/// Render `x` with `digits` significant digits.
///
/// Trailing zeros are kept, so 50 at three digits reads `50.0`. Zero reads
/// `0` and non-finite values read as undefined.
pub fn sig(x: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if !x.is_finite() {
        return UNDEFINED.to_string();
    }
    if x == 0. {
        return "0".to_string();
    }
    // scientific notation rounds to the right number of digits first,
    // so 99.96 at three digits is seen as 1.00e2 rather than 9.99e1
    let scientific = format!("{:.*e}", digits - 1, x);
    let exponent = scientific
        .rsplit('e')
        .next()
        .and_then(|e| e.parse::<i32>().ok())
        .unwrap_or_default();
    let rounded = scientific.parse::<f64>().unwrap_or(x);
    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    format!("{:.*}", decimals, rounded)
}

/// Render an optional ratio, undefined when absent.
pub fn cell(x: Option<f64>, digits: usize) -> String {
    x.map(|x| sig(x, digits))
        .unwrap_or_else(|| UNDEFINED.to_string())
}

/// `numerator / denominator`, or `None` for a zero or non-finite denominator.
pub fn fraction(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator != 0. && denominator.is_finite()).then(|| numerator / denominator)
}
