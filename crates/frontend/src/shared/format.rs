//! Number formatting for the price-reference panel, fixed es-AR style:
//! "." groups thousands, "," separates decimals.

/// Formats a reference price: whole values without decimals, fractional
/// values with two. `1234567.0` -> `"1.234.567"`, `1234.5` -> `"1.234,50"`.
pub fn format_precio(value: f64) -> String {
    let formatted = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    };

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Insert "." every 3 digits, walking from the end of the integer part
    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push('.');
        }
        grouped.push(*c);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{},{}", integer_grouped, d),
        None => integer_grouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_precio(0.0), "0");
        assert_eq!(format_precio(999.0), "999");
        assert_eq!(format_precio(1234.0), "1.234");
        assert_eq!(format_precio(1234567.0), "1.234.567");
    }

    #[test]
    fn fractional_values_get_a_decimal_comma() {
        assert_eq!(format_precio(1234.5), "1.234,50");
        assert_eq!(format_precio(0.25), "0,25");
    }

    #[test]
    fn negative_values_keep_the_sign_in_place() {
        assert_eq!(format_precio(-1234.0), "-1.234");
        assert_eq!(format_precio(-1234567.0), "-1.234.567");
    }
}
