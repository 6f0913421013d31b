use std::ffi::OsString;

use clap::{ArgAction, Parser};
use gostruct_go::Config;

/// Generate a Go struct from the JSON object on stdin
#[derive(Parser, Debug)]
#[command(name = "gostruct", version, about)]
pub struct Args {
    /// Name for your struct
    #[arg(long, default_value = "Foo", allow_hyphen_values = true)]
    pub name: String,

    /// make variables public
    #[arg(
        long,
        action = ArgAction::Set,
        value_parser = parse_bool,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = true
    )]
    pub public: bool,

    /// make getters
    #[arg(
        long,
        action = ArgAction::Set,
        value_parser = parse_bool,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false
    )]
    pub getters: bool,

    /// make setters
    #[arg(
        long,
        action = ArgAction::Set,
        value_parser = parse_bool,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false
    )]
    pub setters: bool,

    /// make a constructor with empty arguments
    #[arg(
        long,
        action = ArgAction::Set,
        value_parser = parse_bool,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = true
    )]
    pub constructor: bool,

    /// package name
    #[arg(long, default_value = "main", allow_hyphen_values = true)]
    pub package: String,

    /// diagnostics filter, e.g. `debug` or `gostruct=trace`
    #[arg(long, default_value = "warn", allow_hyphen_values = true)]
    pub log_level: String,

    /// flag parsing stops at the first non-flag argument, as in Go
    #[arg(hide = true, trailing_var_arg = true)]
    pub ignored: Vec<OsString>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            struct_name: args.name,
            public_fields: args.public,
            getters: args.getters,
            setters: args.setters,
            constructor: args.constructor,
            package: args.package,
        }
    }
}

/// flags that take a separate value, as in `-name Foo`
const TEXT_FLAGS: [&str; 3] = ["name", "package", "log-level"];

/// Rewrites Go style `-flag` arguments to `--flag` so clap accepts both
/// spellings. Single character flags (`-h`, `-V`), flag values and
/// everything after `--` or after the first non-flag are left alone.
pub fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = vec![];
    let mut expects_value = false;
    let mut passthrough = false;

    for (idx, arg) in args.into_iter().map(Into::into).enumerate() {
        if idx == 0 || passthrough || std::mem::take(&mut expects_value) {
            normalized.push(arg);
            continue;
        }

        let rewritten = arg
            .to_str()
            .and_then(|text| rewrite(text, &mut expects_value, &mut passthrough));
        normalized.push(rewritten.map(OsString::from).unwrap_or(arg));
    }

    normalized
}

fn rewrite(text: &str, expects_value: &mut bool, passthrough: &mut bool) -> Option<String> {
    if text == "--" {
        *passthrough = true;
        return None;
    }

    let Some(flag) = text.strip_prefix("--").or_else(|| text.strip_prefix('-')) else {
        *passthrough = true;
        return None;
    };
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    *expects_value = !flag.contains('=') && TEXT_FLAGS.contains(&name);

    match text.starts_with("--") || name.chars().count() < 2 {
        true => None,
        false => Some(format!("-{}", text)),
    }
}

/// Same spellings Go's `strconv.ParseBool` accepts.
fn parse_bool(s: &str) -> Result<bool, String> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(format!("invalid boolean value {:?}", s)),
    }
}
