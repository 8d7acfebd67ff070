use std::cmp;
use std::env;
use std::io;
use std::str::FromStr;

use chrono::Local;
use error_chain::ChainedError;
use fern::Dispatch;
use log::LevelFilter;

use errors::*;

// Info for everything except rusoto, which is very chatty below warn.
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const NOISY_TARGETS: &[&str] = &["rusoto_core", "rusoto_s3", "hyper"];

/// Parsed form of an env_logger style `RUST_LOG` value: `<level>[,<target>=<level>]*`.
///
/// A bare target enables every level for it. Unparseable directives are skipped.
#[derive(Debug, PartialEq)]
struct LogSpec {
    level: LevelFilter,
    targets: Vec<(String, LevelFilter)>,
}

fn parse_log_spec(spec: &str) -> LogSpec {
    let mut parsed = LogSpec {
        level: DEFAULT_LOG_LEVEL,
        targets: Vec::new(),
    };

    for directive in spec.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        let mut parts = directive.splitn(2, '=');
        let name = parts.next().unwrap_or("").trim();
        match parts.next() {
            Some(level) => match LevelFilter::from_str(level.trim()) {
                Ok(level) if !name.is_empty() => parsed.targets.push((name.to_owned(), level)),
                _ => {}
            },
            None => match LevelFilter::from_str(name) {
                Ok(level) => parsed.level = level,
                Err(_) => parsed.targets.push((name.to_owned(), LevelFilter::Trace)),
            },
        }
    }

    // Failures must always reach stderr.
    parsed.level = cmp::max(parsed.level, LevelFilter::Error);
    parsed
}

/// `init_logger` installs the process logger. Records go to stderr so that stage output never
/// mixes with anything a caller pipes from stdout.
pub fn init_logger() -> Result<()> {
    let spec = match env::var("RUST_LOG") {
        Ok(value) => parse_log_spec(&value),
        Err(_) => parse_log_spec(""),
    };

    let mut dispatch = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(spec.level);

    for target in NOISY_TARGETS {
        if !spec.targets.iter().any(|&(ref name, _)| name == target) {
            dispatch = dispatch.level_for(*target, LevelFilter::Warn);
        }
    }
    for (target, level) in spec.targets {
        dispatch = dispatch.level_for(target, level);
    }

    dispatch.chain(io::stderr()).apply().chain_err(
        || "Failed to initialise logging",
    )?;
    Ok(())
}

fn error_lines<E: ChainedError>(err: &E) -> Vec<String> {
    let mut lines = vec![err.to_string()];

    for e in err.iter().skip(1) {
        lines.push(format!("caused by: {}", e));
    }

    if let Some(backtrace) = err.backtrace() {
        lines.push(format!("backtrace: {:?}", backtrace));
    }
    lines
}

/// `output_error` logs a chained error followed by each of its causes.
pub fn output_error<E: ChainedError>(err: &E) {
    for line in error_lines(err) {
        error!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_spec_uses_default_level() {
        let spec = parse_log_spec("");

        assert_eq!(LevelFilter::Info, spec.level);
        assert!(spec.targets.is_empty());
    }

    #[test]
    fn parses_level_with_target_directives() {
        let spec = parse_log_spec("debug, rusoto_core=warn,wordcount::runner=trace");

        assert_eq!(LevelFilter::Debug, spec.level);
        assert_eq!(
            vec![
                ("rusoto_core".to_owned(), LevelFilter::Warn),
                ("wordcount::runner".to_owned(), LevelFilter::Trace),
            ],
            spec.targets
        );
    }

    #[test]
    fn bare_target_enables_all_levels() {
        let spec = parse_log_spec("util");

        assert_eq!(LevelFilter::Info, spec.level);
        assert_eq!(vec![("util".to_owned(), LevelFilter::Trace)], spec.targets);
    }

    #[test]
    fn invalid_directives_are_skipped() {
        let spec = parse_log_spec("hyper=loud,=debug,warn");

        assert_eq!(LevelFilter::Warn, spec.level);
        assert!(spec.targets.is_empty());
    }

    #[test]
    fn errors_are_never_silenced() {
        assert_eq!(LevelFilter::Error, parse_log_spec("off").level);
    }

    #[test]
    fn error_lines_include_every_cause() {
        let failed: ::std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        let err = failed
            .chain_err(|| "Unable to write object")
            .chain_err(|| "Error uploading s3://work/final.json")
            .unwrap_err();

        let lines = error_lines(&err);

        assert!(lines.len() >= 3);
        assert_eq!(
            vec![
                "Error uploading s3://work/final.json",
                "caused by: Unable to write object",
                "caused by: disk full",
            ],
            &lines[..3]
        );
    }
}
