//! Number and label formatting shared by the renderer and the tooltip.
//!
//! Numbers follow the browser's conventions so markup written here reads the
//! same as markup produced in the page itself: `js_number` matches
//! `Number.prototype.toString`, `to_fixed` matches `toFixed` (ties round up
//! on the exact binary value).

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name for a 1-based month number.
pub fn month_name(month: i32) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[(month - 1) as usize])
    } else {
        None
    }
}

pub fn js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{:e}", value);
        return match s.split_once('e') {
            Some((mantissa, exp)) if exp.starts_with('-') => format!("{}e{}", mantissa, exp),
            Some((mantissa, exp)) => format!("{}e+{}", mantissa, exp),
            None => s,
        };
    }
    format!("{}", value)
}

/// Past 1e21 the browser gives up on fixed notation and returns `String(x)`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return js_number(value);
    }
    let negative = value < 0.0;
    // Wide enough to hold the exact expansion of any ordinary magnitude.
    let exact = format!("{:.*}", digits + 60, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .map(|b| b - b'0')
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .map(|&b| b >= b'5')
        .unwrap_or(false);

    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, 1);
                break;
            }
            i -= 1;
            if kept[i] == 9 {
                kept[i] = 0;
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|d| (b'0' + d) as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|d| (b'0' + d) as char));
    }
    out
}
