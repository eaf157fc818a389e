//! Text rendering of flag values.

use std::path::PathBuf;
use std::time::Duration;

/// A value that can back a command-line flag.
///
/// The rendered text is what documentation shows as the default value.
pub trait FlagValue {
    /// Renders the value as flag text.
    fn render(&self) -> String;
}

macro_rules! render_with_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FlagValue for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

render_with_display!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, String
);

impl FlagValue for PathBuf {
    fn render(&self) -> String {
        self.display().to_string()
    }
}

impl FlagValue for Duration {
    /// Renders like Go's `time.Duration`: `1h30m0s`, `1.5s`, `250ms`, `500µs`, `40ns`.
    fn render(&self) -> String {
        const NANOS_PER_MICRO: u128 = 1_000;
        const NANOS_PER_MILLI: u128 = 1_000_000;
        const NANOS_PER_SEC: u128 = 1_000_000_000;

        let nanos = self.as_nanos();
        if nanos == 0 {
            return "0s".to_string();
        }
        if nanos < NANOS_PER_MICRO {
            return format!("{nanos}ns");
        }
        if nanos < NANOS_PER_MILLI {
            return format!("{}µs", decimal(nanos, NANOS_PER_MICRO));
        }
        if nanos < NANOS_PER_SEC {
            return format!("{}ms", decimal(nanos, NANOS_PER_MILLI));
        }

        let secs = self.as_secs();
        let (hours, minutes) = (secs / 3600, secs % 3600 / 60);
        let seconds = decimal(
            u128::from(secs % 60) * NANOS_PER_SEC + u128::from(self.subsec_nanos()),
            NANOS_PER_SEC,
        );
        if hours > 0 {
            format!("{hours}h{minutes}m{seconds}s")
        } else if minutes > 0 {
            format!("{minutes}m{seconds}s")
        } else {
            format!("{seconds}s")
        }
    }
}

/// Formats `value / unit` with the remainder as trimmed decimal digits.
fn decimal(value: u128, unit: u128) -> String {
    let (whole, rest) = (value / unit, value % unit);
    if rest == 0 {
        return whole.to_string();
    }
    let width = unit.ilog10() as usize;
    let digits = format!("{rest:0width$}");
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

impl<T: FlagValue> FlagValue for Vec<T> {
    fn render(&self) -> String {
        self.iter()
            .map(FlagValue::render)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<T: FlagValue> FlagValue for Option<T> {
    fn render(&self) -> String {
        self.as_ref().map(FlagValue::render).unwrap_or_default()
    }
}
