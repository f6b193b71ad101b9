//! Startup questions asked through browser dialogs, and how their raw
//! answers turn into a [`SimConfig`].

use crate::api::config::{SimConfig, ValueRange, DEFAULT_MAX_SPEED, DEFAULT_PARTICLE_COUNT, DEFAULT_RADIUS};

/// One question per dialog, in the order they are asked.
pub struct Prompt {
    pub key: &'static str,
    pub message: String,
}

/// Raw dialog answers. `None` means the dialog was cancelled.
#[derive(Debug, Clone, Default)]
pub struct OptionAnswers {
    pub count: Option<String>,
    pub size: Option<String>,
    pub speed: Option<String>,
    pub energy: Option<String>,
    pub coverage: Option<String>,
    /// Answer to "Disable gravity?".
    pub disable_gravity: bool,
}

/// Questions for the numeric options. `energy` depends on the speed answer
/// because its suggested default is a quarter of the chosen speed.
pub fn prompts_before_energy() -> Vec<Prompt> {
    vec![
        Prompt {
            key: "count",
            message: format!("How many balls can ya handle?\n\nDefault: {}", DEFAULT_PARTICLE_COUNT),
        },
        Prompt {
            key: "size",
            message: format!("How big should they be? (px)\n\nDefault: {}", DEFAULT_RADIUS),
        },
        Prompt {
            key: "speed",
            message: format!("How fast do you want 'em? (px/s)\n\nDefault: {}", DEFAULT_MAX_SPEED),
        },
    ]
}

pub fn energy_prompt(max_speed: f64) -> Prompt {
    Prompt {
        key: "energy",
        message: format!(
            "How much energy do you want to give 'em? (px/s\u{00B2})\n\nDefault: {}",
            (max_speed / 4.0).trunc()
        ),
    }
}

pub fn coverage_prompt() -> Prompt {
    Prompt {
        key: "coverage",
        message: String::from(
            "How much of the screen should they cover?\n\n\
             0 = only right in the middle (boring)\n\
             0.5 = half the screen (interesting)\n\
             1 = the entire screen (fun)\n\n\
             Default: 1",
        ),
    }
}

pub const GRAVITY_QUESTION: &str = "Disable gravity?";

impl OptionAnswers {
    /// Store an answer under the key of the prompt that produced it.
    pub fn set(&mut self, key: &str, answer: Option<String>) {
        match key {
            "count" => self.count = answer,
            "size" => self.size = answer,
            "speed" => self.speed = answer,
            "energy" => self.energy = answer,
            "coverage" => self.coverage = answer,
            other => log::warn!("unknown option key '{}'", other),
        }
    }

    /// Speed answer as the dialogs would use it for the energy default.
    pub fn max_speed(&self) -> f64 {
        parse_float(self.speed.as_deref()).unwrap_or(DEFAULT_MAX_SPEED)
    }

    /// Build a sanitized config. Unparseable, cancelled or zero answers fall
    /// back to defaults; coverage is clamped to `[0, 1]` and a zero coverage
    /// also falls back to the full screen.
    pub fn into_config(self) -> SimConfig {
        let defaults = SimConfig::default();

        let count = parse_int(self.count.as_deref())
            .filter(|n| *n > 0)
            .map(|n| n as usize)
            .unwrap_or(defaults.particle_count);
        let radius = parse_int(self.size.as_deref())
            .map(|n| n as f64)
            .unwrap_or(DEFAULT_RADIUS);
        let max_speed = self.max_speed();
        let max_accel = parse_float(self.energy.as_deref()).unwrap_or(max_speed / 4.0);
        let coverage = parse_float_allow_zero(self.coverage.as_deref())
            .map(|c| c.clamp(0.0, 1.0))
            .filter(|c| *c > 0.0)
            .unwrap_or(1.0);

        SimConfig {
            particle_count: count,
            size: ValueRange::exactly(radius),
            speed: ValueRange::new(0.0, max_speed),
            acceleration: Some(ValueRange::new(0.0, max_accel)),
            gravity: !self.disable_gravity,
            coverage,
            ..defaults
        }
        .sanitized()
    }
}

/// Leading-integer parse; zero counts as "no answer".
fn parse_int(answer: Option<&str>) -> Option<i64> {
    let s = answer?.trim();
    let end = s
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse::<i64>().ok().filter(|n| *n != 0)
}

/// Leading-float parse; zero and non-finite count as "no answer".
fn parse_float(answer: Option<&str>) -> Option<f64> {
    parse_float_allow_zero(answer).filter(|v| *v != 0.0)
}

fn parse_float_allow_zero(answer: Option<&str>) -> Option<f64> {
    let s = answer?.trim();
    s[..numeric_prefix_len(s)]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Length of the leading `[+-]digits[.digits][e[+-]digits]` run, so "12px" reads as 12.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    end = digits(end);
    if b.get(end) == Some(&b'.') {
        end = digits(end + 1);
    }
    if matches!(b.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(b.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits(exp);
        // A bare "e" is not part of the number.
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(count: &str, size: &str, speed: &str, energy: &str, coverage: &str) -> OptionAnswers {
        OptionAnswers {
            count: Some(count.into()),
            size: Some(size.into()),
            speed: Some(speed.into()),
            energy: Some(energy.into()),
            coverage: Some(coverage.into()),
            disable_gravity: false,
        }
    }

    #[test]
    fn cancelled_dialogs_use_defaults() {
        let cfg = OptionAnswers::default().into_config();
        assert_eq!(cfg.particle_count, 100);
        assert_eq!(cfg.size, ValueRange::exactly(10.0));
        assert_eq!(cfg.speed.max, 100.0);
        assert_eq!(cfg.acceleration_range().max, 25.0);
        assert_eq!(cfg.coverage, 1.0);
        assert!(cfg.gravity);
    }

    #[test]
    fn numeric_answers_are_used() {
        let mut a = answers("25", "7", "300", "40", "0.5");
        a.disable_gravity = true;
        let cfg = a.into_config();
        assert_eq!(cfg.particle_count, 25);
        assert_eq!(cfg.size, ValueRange::exactly(7.0));
        assert_eq!(cfg.speed, ValueRange::new(0.0, 300.0));
        assert_eq!(cfg.acceleration_range(), ValueRange::new(0.0, 40.0));
        assert_eq!(cfg.coverage, 0.5);
        assert!(!cfg.gravity);
        assert_eq!(cfg.restitution_range(), ValueRange::exactly(1.0));
    }

    #[test]
    fn garbage_and_zero_fall_back() {
        let cfg = answers("lots", "0", "fast", "", "0").into_config();
        assert_eq!(cfg.particle_count, 100);
        assert_eq!(cfg.size, ValueRange::exactly(10.0));
        assert_eq!(cfg.speed.max, 100.0);
        assert_eq!(cfg.acceleration_range().max, 25.0);
        assert_eq!(cfg.coverage, 1.0);
    }

    #[test]
    fn energy_default_follows_speed() {
        let cfg = answers("10", "5", "80", "nope", "1").into_config();
        assert_eq!(cfg.acceleration_range().max, 20.0);
    }

    #[test]
    fn leading_numbers_parse_like_a_browser() {
        assert_eq!(parse_int(Some("12px")), Some(12));
        assert_eq!(parse_int(Some(" 3.9 ")), Some(3));
        assert_eq!(parse_float(Some("2.5e1 px/s")), Some(25.0));
        assert_eq!(parse_float(Some("abc")), None);
        assert_eq!(parse_float(Some("-.5e")), Some(-0.5));
        assert_eq!(parse_float(Some("4e+2x")), Some(400.0));
        assert_eq!(parse_float(Some(".")), None);
    }

    #[test]
    fn long_answers_read_only_the_leading_number() {
        let answer = format!("0.75{}", "x".repeat(100_000));
        assert_eq!(numeric_prefix_len(&answer), 4);
        assert_eq!(parse_float_allow_zero(Some(&answer)), Some(0.75));
        let digits = "9".repeat(400);
        assert_eq!(parse_float(Some(&digits)), None, "overflows to infinity");
    }

    #[test]
    fn coverage_is_clamped() {
        assert_eq!(answers("1", "1", "1", "1", "7").into_config().coverage, 1.0);
        assert_eq!(answers("1", "1", "1", "1", "-2").into_config().coverage, 1.0);
        assert_eq!(answers("1", "1", "1", "1", "0.25").into_config().coverage, 0.25);
    }

    #[test]
    fn set_routes_by_key() {
        let mut a = OptionAnswers::default();
        for prompt in prompts_before_energy() {
            a.set(prompt.key, Some("3".into()));
        }
        a.set(energy_prompt(a.max_speed()).key, Some("1".into()));
        a.set(coverage_prompt().key, None);
        let cfg = a.into_config();
        assert_eq!(cfg.particle_count, 3);
        assert_eq!(cfg.speed.max, 3.0);
        assert_eq!(cfg.acceleration_range().max, 1.0);
    }
}
