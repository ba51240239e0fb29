use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins; otherwise start from the
/// configured level and go one step louder per `-v`.
pub fn init(configured: &str, verbose: u8) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level(configured, verbose)).or_raise(|| ErrorKind::Logging)?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| std::io::Error::other(err.to_string()))
        .or_raise(|| ErrorKind::Logging)
}

fn level(configured: &str, verbose: u8) -> &str {
    const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];
    match LEVELS.iter().position(|level| level.eq_ignore_ascii_case(configured)) {
        Some(index) if verbose > 0 => LEVELS[(index + usize::from(verbose)).min(LEVELS.len() - 1)],
        _ if verbose > 0 => LEVELS[(2 + usize::from(verbose)).min(LEVELS.len() - 1)],
        _ => configured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("info", 0, "info")]
    #[case("info", 1, "debug")]
    #[case("info", 2, "trace")]
    #[case("info", 9, "trace")]
    #[case("WARN", 1, "info")]
    #[case("off", 0, "off")]
    #[case("off", 1, "debug")]
    fn test_level(#[case] configured: &str, #[case] verbose: u8, #[case] expected: &str) {
        assert_eq!(level(configured, verbose), expected);
    }
}
