use std::{collections::HashMap, fs};

use clap::Parser;
use embex::{evaluate, interpreter::value::Value};

/// embex is a minimal embeddable expression language with host-injected
/// contexts and dynamic resolvers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells embex to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Static bindings injected into the evaluation, as `name=value` pairs.
    /// Values must be numeric.
    #[arg(short, long, value_name = "NAME=VALUE")]
    context: Vec<String>,

    /// Also print the final environment and the provenance of each binding.
    #[arg(short, long)]
    env: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let context = parse_context_args(&args.context).unwrap_or_else(|message| {
                                                       eprintln!("{message}");
                                                       std::process::exit(1);
                                                   });

    match evaluate(&script, context, None) {
        Ok(result) => {
            println!("{}", result.value);
            if args.env {
                let mut names: Vec<_> = result.env.keys().collect();
                names.sort();
                for name in names {
                    let origin = result.provenance
                                       .get(name)
                                       .map_or_else(String::new, |o| format!(" ({o})"));
                    println!("{name} = {}{origin}", result.env[name]);
                }
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Parses `name=value` pairs into context bindings.
///
/// This is the untyped boundary of the system, so the numeric validation
/// happens here: a value parses as an integer first, then as a real, and
/// anything else is rejected before evaluation starts.
fn parse_context_args(pairs: &[String]) -> Result<HashMap<String, Value>, String> {
    let mut context = HashMap::new();

    for pair in pairs {
        let Some((name, raw)) = pair.split_once('=') else {
            return Err(format!("Invalid context binding '{pair}'. Expected NAME=VALUE."));
        };

        let value = if let Ok(n) = raw.parse::<i64>() {
            Value::Integer(n)
        } else if let Ok(r) = raw.parse::<f64>() {
            Value::Real(r)
        } else {
            return Err(format!("Context value for '{name}' must be numeric, got '{raw}'."));
        };

        context.insert(name.to_string(), value);
    }

    Ok(context)
}
