//! Human-readable `c1x_1 + c2x_2 = k` rendering.

use std::fmt;

use rust_decimal::Decimal;

use super::Line;

const DECIMAL_PLACES: u32 = 3;

/// Round half-to-even; integral values print without a fraction,
/// everything else with exactly `DECIMAL_PLACES` places.
fn render_number(x: Decimal) -> String {
    let mut r = x.round_dp(DECIMAL_PLACES);
    if r.is_zero() {
        return "0".to_string();
    }
    if r.fract().is_zero() {
        return r.trunc().normalize().to_string();
    }
    r.rescale(DECIMAL_PLACES);
    r.to_string()
}

fn write_term(out: &mut String, coefficient: Decimal, index: usize, is_initial: bool) {
    if coefficient.is_sign_negative() {
        out.push('-');
    } else if !is_initial {
        out.push('+');
    }
    if !is_initial {
        out.push(' ');
    }
    let magnitude = coefficient.abs();
    if magnitude != Decimal::ONE {
        out.push_str(&render_number(magnitude));
    }
    out.push_str(&format!("x_{}", index + 1));
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lhs = String::new();
        for (i, &c) in self.normal.iter().enumerate() {
            let c = c.round_dp(DECIMAL_PLACES);
            if c.is_zero() {
                continue;
            }
            // Initial means first *printed*: a leading coefficient that rounds
            // to 0 (`0.0004, 2`) is dropped, so `2x_2` gets no leading `+`.
            let is_initial = lhs.is_empty();
            if !is_initial {
                lhs.push(' ');
            }
            write_term(&mut lhs, c, i, is_initial);
        }
        if lhs.is_empty() {
            lhs.push('0');
        }
        write!(f, "{lhs} = {}", render_number(self.constant))
    }
}
