//! Subcommand extraction and flag normalisation.
//!
//! Runs on the raw argument list before clap sees it. Subcommands are
//! data-driven (one per registered template), so they are peeled off here
//! rather than declared to clap, and the single-dash long flags
//! (`-aspect 16:9`) are rewritten into the `--aspect` form clap expects.

use crate::core::templates;

/// Commands that are not templates.
pub const PSEUDO_COMMANDS: &[&str] = &["help", "version", "setup", "install-skill"];

/// Flags that consume the following argument.
const VALUE_FLAGS: &[&str] = &["i", "o", "aspect", "size", "model", "log-level", "claude-dir"];

/// Long flags also accepted with a single dash.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &[
    "aspect",
    "size",
    "model",
    "version",
    "help",
    "log-level",
    "verbose",
    "claude-dir",
];

/// Whether `name` is a registered command or a pseudo-command.
#[must_use]
pub fn is_known_command(name: &str) -> bool {
    templates::get_command(name).is_some() || PSEUDO_COMMANDS.contains(&name)
}

/// Flag name without dashes, or `None` for non-flag tokens.
fn flag_name(token: &str) -> Option<&str> {
    let stripped = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;
    Some(stripped.split_once('=').map_or(stripped, |(name, _)| name))
}

/// Whether `token` is a value-taking flag whose value is the next argument.
fn takes_separate_value(token: &str) -> bool {
    !token.contains('=') && flag_name(token).is_some_and(|name| VALUE_FLAGS.contains(&name))
}

/// Remove a leading subcommand from `args`.
///
/// Flags (and the values of value-taking flags) are skipped; the first
/// remaining token is the candidate. A known command is removed and returned.
/// Anything else, including a `--` terminator before any candidate, leaves
/// `args` untouched and yields an empty command name.
#[must_use]
pub fn extract_subcommand(args: &[String]) -> (String, Vec<String>) {
    let mut i = 0;
    while i < args.len() {
        let token = &args[i];
        if token == "--" {
            break;
        }
        if token.starts_with('-') {
            i += if takes_separate_value(token) { 2 } else { 1 };
            continue;
        }

        if is_known_command(token) {
            let mut rest = args.to_vec();
            let command = rest.remove(i);
            return (command, rest);
        }
        break;
    }
    (String::new(), args.to_vec())
}

/// Rewrite `-aspect`-style flags as `--aspect`. Flag values pass through
/// untouched, as does everything after a `--` terminator.
#[must_use]
pub fn normalize_flags(args: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();

    while let Some(token) = iter.next() {
        if token == "--" {
            out.push(token);
            out.extend(iter.by_ref());
            break;
        }

        let expects_value = takes_separate_value(&token);
        let is_single_dash_long = !token.starts_with("--")
            && flag_name(&token).is_some_and(|name| SINGLE_DASH_LONG_FLAGS.contains(&name));

        out.push(if is_single_dash_long {
            format!("-{token}")
        } else {
            token
        });

        if expects_value {
            if let Some(value) = iter.next() {
                out.push(value);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn every_registered_command_round_trips() {
        for cmd in templates::COMMANDS {
            let (name, rest) = extract_subcommand(&args(&[cmd.name, "x"]));
            assert_eq!(name, cmd.name);
            assert_eq!(rest, args(&["x"]));
        }
        for pseudo in PSEUDO_COMMANDS {
            let (name, rest) = extract_subcommand(&args(&[pseudo]));
            assert_eq!(name, *pseudo);
            assert!(rest.is_empty());
        }
    }

    #[test]
    fn unknown_leading_token_stays_in_prompt() {
        let input = args(&["a", "cute", "cat"]);
        let (name, rest) = extract_subcommand(&input);
        assert_eq!(name, "");
        assert_eq!(rest, input);
    }

    #[test]
    fn only_first_positional_is_considered() {
        let input = args(&["draw", "a", "dashboard"]);
        let (name, rest) = extract_subcommand(&input);
        assert_eq!(name, "");
        assert_eq!(rest, input);
    }

    #[test]
    fn flag_values_are_never_commands() {
        let input = args(&["-o", "icon", "a", "cat"]);
        let (name, rest) = extract_subcommand(&input);
        assert_eq!(name, "");
        assert_eq!(rest, input);

        let input = args(&["--model", "slide", "hello"]);
        assert_eq!(extract_subcommand(&input).0, "");
    }

    #[test]
    fn command_after_flags_is_extracted() {
        let (name, rest) = extract_subcommand(&args(&[
            "-aspect", "4:3", "-v", "-i", "in.png", "dashboard", "sales", "data",
        ]));
        assert_eq!(name, "dashboard");
        assert_eq!(
            rest,
            args(&["-aspect", "4:3", "-v", "-i", "in.png", "sales", "data"])
        );
    }

    #[test]
    fn equals_form_is_one_token() {
        let (name, rest) = extract_subcommand(&args(&["--size=2K", "icon", "rocket"]));
        assert_eq!(name, "icon");
        assert_eq!(rest, args(&["--size=2K", "rocket"]));
    }

    #[test]
    fn terminator_stops_command_scan() {
        let (name, rest) = extract_subcommand(&args(&["--", "dashboard", "words"]));
        assert_eq!(name, "");
        assert_eq!(rest, args(&["--", "dashboard", "words"]));

        let (name, rest) = extract_subcommand(&args(&["-size", "2K", "--", "icon"]));
        assert_eq!(name, "");
        assert_eq!(rest, args(&["-size", "2K", "--", "icon"]));
    }

    #[test]
    fn empty_input() {
        let (name, rest) = extract_subcommand(&[]);
        assert_eq!(name, "");
        assert!(rest.is_empty());
    }

    #[test]
    fn single_dash_long_flags_are_normalized() {
        let out = normalize_flags(args(&[
            "-aspect", "16:9", "-size=2K", "-model", "m", "-i", "a.png", "-o", "out.png",
            "-version", "-v", "-h", "--verbose", "prompt",
        ]));
        assert_eq!(
            out,
            args(&[
                "--aspect", "16:9", "--size=2K", "--model", "m", "-i", "a.png", "-o", "out.png",
                "--version", "-v", "-h", "--verbose", "prompt",
            ])
        );
    }

    #[test]
    fn flag_values_are_not_normalized() {
        let out = normalize_flags(args(&["-o", "-size", "x"]));
        assert_eq!(out, args(&["-o", "-size", "x"]));
    }

    #[test]
    fn terminator_stops_normalization() {
        let out = normalize_flags(args(&["--", "-aspect", "words"]));
        assert_eq!(out, args(&["--", "-aspect", "words"]));
    }
}
