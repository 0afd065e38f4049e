//! Default logging setup for the disjoint-set tools.
//!
//! The log filter is read from `DSF_LOG` (defaulting to `info`) and the color choice from
//! `DSF_LOG_STYLE`, using the usual `env_logger` syntax.
#![deny(unsafe_code)]
#![warn(missing_docs)]

use std::{sync::Mutex, time::Instant};

/// Environment variable holding the log filter.
pub const FILTER_ENV: &str = "DSF_LOG";
/// Environment variable selecting when to use colors.
pub const STYLE_ENV: &str = "DSF_LOG_STYLE";

const TIMESTAMP_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::BrightBlack)));

const TARGET_STYLE: anstyle::Style =
    anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Magenta)));

/// Returns a logger builder configured from the environment with the default output format.
///
/// Every line starts with the time elapsed since the builder was created. Whenever the log target
/// changes, a header line naming the new target is written first.
pub fn builder() -> env_logger::Builder {
    let start_time = Instant::now();
    let last_target = Mutex::new(String::new());

    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or(FILTER_ENV, "info")
            .write_style(STYLE_ENV),
    );
    builder.format(move |buf, record| {
        use std::io::Write;

        let timestamp = start_time.elapsed();
        let level = record.level();
        let target = record.target();

        let mut last_target = last_target.lock().unwrap_or_else(|err| err.into_inner());

        if target != *last_target {
            last_target.clear();
            last_target.push_str(target);

            writeln!(
                buf,
                "{} {}",
                format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
                format_args!("{style}{target}{style:#}", style = TARGET_STYLE)
            )?;
        }
        writeln!(
            buf,
            "{} {} {}",
            format_args!("{style}{timestamp:>9.2?}{style:#}", style = TIMESTAMP_STYLE),
            format_args!(
                "{style}{level}{style:#}",
                style = buf.default_level_style(level),
            ),
            record.args(),
        )
    });
    builder
}

/// Perform the default logging setup used by the disjoint-set tools.
///
/// Does nothing if a logger was already installed.
pub fn setup() {
    if builder().try_init().is_err() {
        log::debug!("logger already initialized");
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn repeated_setup() {
        super::setup();
        super::setup();
        log::info!("logger installed");
    }
}
