// File: crates/linechart-core/src/grid.rs
// Summary: Tick layout helpers ("nice" 1/2/5 steps) and tick label formatting.

/// Default number of value-axis ticks requested.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Step and integer bounds for ticks between `start` and `stop`.
/// A negative step means "divide by -step" to keep fractional steps exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let e10 = 50f64.sqrt();
    let e5 = 10f64.sqrt();
    let e2 = 2f64.sqrt();

    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= e10 {
        10.0
    } else if error >= e5 {
        5.0
    } else if error >= e2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inc_pos = 10f64.powf(-power) / factor;
        i1 = (start * inc_pos).round();
        i2 = (stop * inc_pos).round();
        if i1 / inc_pos < start { i1 += 1.0; }
        if i2 / inc_pos > stop { i2 -= 1.0; }
        inc = -inc_pos;
    } else {
        let inc_pos = 10f64.powf(power) * factor;
        i1 = (start / inc_pos).round();
        i2 = (stop / inc_pos).round();
        if i1 * inc_pos < start { i1 += 1.0; }
        if i2 * inc_pos > stop { i2 -= 1.0; }
        inc = inc_pos;
    }
    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Roughly `count` evenly spaced round values covering `[start, stop]`.
///
/// A collapsed interval yields that single value.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }
    let n = (i2 - i1 + 1.0) as usize;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 { k / -inc } else { k * inc }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Spacing between consecutive ticks (0 when fewer than two).
pub fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => (b - a).abs(),
        _ => 0.0,
    }
}

/// Format a tick value with at most as many decimals as `step` needs, no
/// trailing zeros and `,` thousands grouping.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10().floor()) as usize
    } else {
        0
    };
    let text = format!("{:.*}", decimals, value);
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, Some(f.trim_end_matches('0')).filter(|f| !f.is_empty())),
        None => (body, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    // "-0" reads oddly on an axis
    let sign = if grouped.chars().all(|c| c == '0' || c == ',') && frac_part.map_or(true, |f| f.chars().all(|c| c == '0')) {
        ""
    } else {
        sign
    };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_zero_to_twenty() {
        assert_eq!(
            nice_ticks(0.0, 20.0, 10),
            vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 18.0, 20.0]
        );
    }

    #[test]
    fn ticks_fractional_domain() {
        let t = nice_ticks(0.0, 1.0, 5);
        assert_eq!(t, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn ticks_uneven_max_stay_inside() {
        let t = nice_ticks(0.0, 97.0, 10);
        assert_eq!(t.first(), Some(&0.0));
        assert_eq!(t.last(), Some(&90.0));
        assert_eq!(tick_step(&t), 10.0);
    }

    #[test]
    fn collapsed_interval_single_tick() {
        assert_eq!(nice_ticks(0.0, 0.0, 10), vec![0.0]);
        assert!(nice_ticks(0.0, f64::NAN, 10).is_empty());
    }

    #[test]
    fn formats_with_step_precision() {
        assert_eq!(format_tick(2.0, 2.0), "2");
        assert_eq!(format_tick(0.4, 0.2), "0.4");
        assert_eq!(format_tick(0.05, 0.05), "0.05");
        assert_eq!(format_tick(12000.0, 2000.0), "12,000");
        assert_eq!(format_tick(1234567.0, 1.0), "1,234,567");
        assert_eq!(format_tick(-1500.0, 500.0), "-1,500");
        assert_eq!(format_tick(-0.0, 1.0), "0");
    }

    #[test]
    fn small_domain_labels_drop_trailing_zeros() {
        let ticks = nice_ticks(0.0, 0.1, DEFAULT_TICK_COUNT);
        let step = tick_step(&ticks);
        let labels: Vec<_> = ticks.iter().map(|&v| format_tick(v, step)).collect();
        assert_eq!(labels.first().map(String::as_str), Some("0"));
        assert_eq!(labels.get(1).map(String::as_str), Some("0.01"));
        assert_eq!(labels.last().map(String::as_str), Some("0.1"));
        assert!(labels.iter().all(|l| !l.contains('.') || !l.ends_with('0')));

        assert_eq!(format_tick(0.001, 0.0001), "0.001");
        assert_eq!(format_tick(0.1, 0.02), "0.1");
        assert_eq!(format_tick(-0.004, 0.001), "-0.004");
    }
}
