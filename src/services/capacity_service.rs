/// ============================================================
///  PV array sizing for a solar water pump
///
///   1. Pump rating       – CV → kW (÷ 1.36)
///   2. Daily demand      – kW × hours of operation (kWh/day)
///   3. IPV efficiency    – η_inv × (1 − (L_ac + L_dc))
///   4. Global efficiency – IPV efficiency × 0.9 derating
///   5. Capacity          – demand / (η_global × irradiance)
///
///  Irradiance is not checked: zero gives an infinite capacity,
///  a negative value a negative one.
/// ============================================================

use crate::models::capacity::{CalculationInput, CapacityBreakdown, LossFactors};

// ─── Constants ───────────────────────────────────────────────
const CV_PER_KW: f64 = 1.36;
const GLOBAL_DERATING: f64 = 0.9;

/// Required PV capacity (kWc).
pub fn calculate_pv_capacity(
    pump_power_cv: f64,
    operation_hours: f64,
    solar_irradiance: f64,
    ac_loss: f64,
    dc_loss: f64,
    inverter_efficiency: f64,
) -> f64 {
    let pump_power_kw = pump_power_cv / CV_PER_KW;
    let daily_energy_requirement = pump_power_kw * operation_hours;
    let ipv_efficiency = inverter_efficiency * (1.0 - (ac_loss + dc_loss));
    let global_efficiency = ipv_efficiency * GLOBAL_DERATING;
    daily_energy_requirement / (global_efficiency * solar_irradiance)
}

/// Same computation as [`calculate_pv_capacity`], keeping every intermediate.
pub fn breakdown(input: &CalculationInput) -> CapacityBreakdown {
    let LossFactors { ac_loss, dc_loss, inverter_efficiency } = input.losses;

    let pump_power_kw = input.pump_power_cv / CV_PER_KW;
    let daily_energy_kwh = pump_power_kw * input.operation_hours;
    let ipv_efficiency = inverter_efficiency * (1.0 - (ac_loss + dc_loss));
    let global_efficiency = ipv_efficiency * GLOBAL_DERATING;
    let capacity_kwc = calculate_pv_capacity(
        input.pump_power_cv,
        input.operation_hours,
        input.solar_irradiance,
        ac_loss,
        dc_loss,
        inverter_efficiency,
    );

    tracing::debug!(
        pump_power_cv = input.pump_power_cv,
        operation_hours = input.operation_hours,
        solar_irradiance = input.solar_irradiance,
        capacity_kwc,
        "PV capacity computed"
    );

    CapacityBreakdown {
        pump_power_kw,
        daily_energy_kwh,
        ipv_efficiency,
        global_efficiency,
        capacity_kwc,
    }
}

/// Two decimals, rendered the way the browser's `toFixed(2)` does.
pub fn format_capacity(kwc: f64) -> String {
    to_fixed_2(kwc)
}

/// `Number.prototype.toFixed(2)`: exact decimal rounding with ties away from
/// zero, `-0` prints as `0.00`, and magnitudes ≥ 1e21 fall back to exponent
/// notation.
pub fn to_fixed_2(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if x < 0.0 { "-" } else { "" };
    let abs = x.abs();
    if abs >= 1e21 {
        // Shortest round-trip digits, exponent always positive here
        return format!("{}{}", sign, format!("{:e}", abs).replace('e', "e+"));
    }

    let thousandths = floor_thousandths(abs);
    let hundredths = thousandths / 10 + u128::from(thousandths % 10 >= 5);
    format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100)
}

/// `floor(x × 1000)` computed exactly from the IEEE 754 bits, for
/// finite `0 ≤ x < 1e21`.
fn floor_thousandths(x: f64) -> u128 {
    let bits = x.to_bits();
    let biased_exp = ((bits >> 52) & 0x7ff) as i32;
    let fraction = u128::from(bits & ((1u64 << 52) - 1));
    let (mantissa, exp) = if biased_exp == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u128 << 52), biased_exp - 1075)
    };

    if exp >= 0 {
        (mantissa << exp) * 1000
    } else {
        let shift = (-exp) as u32;
        if shift >= 128 { 0 } else { (mantissa * 1000) >> shift }
    }
}

/// Coerce a raw form value the way JavaScript's `Number()` does: blank → 0,
/// `Infinity` and `0x`/`0o`/`0b` literals accepted, anything else that is
/// not a plain decimal literal → NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_integer(&trimmed[2..], radix);
    }

    if is_decimal_literal(trimmed) {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn parse_radix_integer(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0_f64;
    for ch in digits.chars() {
        match ch.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    acc
}

/// `[+-] digits [. digits] [(e|E) [+-] digits]`, at least one mantissa digit.
fn is_decimal_literal(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(i) => (&body[..i], Some(&body[i + 1..])),
        None => (body, None),
    };

    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((i, f)) => (i, f),
        None => (mantissa, ""),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) || int_part.len() + frac_part.len() == 0 {
        return false;
    }

    match exponent {
        None => true,
        Some(e) => {
            let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
            !digits.is_empty() && all_digits(digits)
        }
    }
}
