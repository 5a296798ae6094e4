//! `clexc lex` arguments.

use crate::CliError;

/// Output settings for `clexc lex`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Drop comment tokens from the output. The scanner still produces them.
    pub skip_comments: bool,
    /// Print a JSON array instead of one token per line.
    pub json: bool,
    /// Fail when the input contains illegal tokens.
    pub deny_illegal: bool,
}

/// A fully parsed `clexc lex` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexCommand {
    pub path: String,
    pub options: LexOptions,
}

/// Parse the arguments after `lex`.
///
/// Flags may appear before or after the path. Exactly one path is required.
pub fn parse_lex_args(args: &[String]) -> Result<LexCommand, CliError> {
    let mut options = LexOptions::default();
    let mut path: Option<String> = None;

    for arg in args {
        match arg.as_str() {
            "--skip-comments" => options.skip_comments = true,
            "--json" => options.json = true,
            "--deny-illegal" => options.deny_illegal = true,
            // A lone `-` is a path, not a flag.
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::UnknownOption(flag.to_owned()));
            }
            _ if path.is_some() => return Err(CliError::UnexpectedArgument(arg.clone())),
            _ => path = Some(arg.clone()),
        }
    }

    let path = path.ok_or(CliError::MissingPath)?;
    Ok(LexCommand { path, options })
}
