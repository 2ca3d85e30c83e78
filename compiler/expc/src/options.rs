//! Command-line options shared by `run`, `lex` and `parse`.

use exp_diagnostic::emitter::ColorMode;
use exp_eval::DEFAULT_MAX_CALL_DEPTH;

/// Parsed options following the command name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    pub path: String,
    /// `None` means unlimited.
    pub max_depth: Option<usize>,
    pub color: ColorMode,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("missing file path")]
    MissingPath,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value '{value}' for {option}")]
    InvalidValue { option: &'static str, value: String },
}

impl CliOptions {
    /// Parse everything after the command name. Flags may precede the path.
    pub fn parse(args: &[String]) -> Result<Self, OptionError> {
        let mut path = None;
        let mut max_depth = Some(DEFAULT_MAX_CALL_DEPTH);
        let mut color = ColorMode::Auto;

        for arg in args {
            if let Some(value) = arg.strip_prefix("--max-depth=") {
                max_depth = parse_depth(value)?;
            } else if let Some(value) = arg.strip_prefix("--color=") {
                color = ColorMode::parse(value).ok_or_else(|| OptionError::InvalidValue {
                    option: "--color",
                    value: value.to_string(),
                })?;
            } else if arg.starts_with('-') {
                return Err(OptionError::UnknownOption(arg.clone()));
            } else if path.is_none() {
                path = Some(arg.clone());
            } else {
                return Err(OptionError::UnexpectedArgument(arg.clone()));
            }
        }

        Ok(CliOptions {
            path: path.ok_or(OptionError::MissingPath)?,
            max_depth,
            color,
        })
    }
}

fn parse_depth(value: &str) -> Result<Option<usize>, OptionError> {
    if value == "unlimited" {
        return Ok(None);
    }
    match value.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(Some(depth)),
        _ => Err(OptionError::InvalidValue {
            option: "--max-depth",
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn defaults() {
        let opts = CliOptions::parse(&args(&["prog.exp"])).unwrap();
        assert_eq!(
            opts,
            CliOptions {
                path: "prog.exp".into(),
                max_depth: Some(DEFAULT_MAX_CALL_DEPTH),
                color: ColorMode::Auto,
            }
        );
    }

    #[test]
    fn flags_in_any_position() {
        let opts =
            CliOptions::parse(&args(&["--color=never", "a.exp", "--max-depth=unlimited"]))
                .unwrap();
        assert_eq!(opts.path, "a.exp");
        assert_eq!(opts.max_depth, None);
        assert_eq!(opts.color, ColorMode::Never);

        let opts = CliOptions::parse(&args(&["a.exp", "--max-depth=64"])).unwrap();
        assert_eq!(opts.max_depth, Some(64));
    }

    #[test]
    fn errors() {
        assert_eq!(CliOptions::parse(&[]), Err(OptionError::MissingPath));
        assert_eq!(
            CliOptions::parse(&args(&["a.exp", "b.exp"])),
            Err(OptionError::UnexpectedArgument("b.exp".into()))
        );
        assert_eq!(
            CliOptions::parse(&args(&["--fast", "a.exp"])),
            Err(OptionError::UnknownOption("--fast".into()))
        );
        assert_eq!(
            CliOptions::parse(&args(&["a.exp", "--max-depth=0"])).unwrap_err().to_string(),
            "invalid value '0' for --max-depth"
        );
        assert_eq!(
            CliOptions::parse(&args(&["a.exp", "--color=rainbow"])).unwrap_err().to_string(),
            "invalid value 'rainbow' for --color"
        );
    }
}
