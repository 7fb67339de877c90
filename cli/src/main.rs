//! `cmdr` — demo front-end for the command router.
//!
//! `argv[1]` selects the command; everything after it is handed to the
//! tokenizer. Two demo commands are registered: `status` (positional echo
//! with a 0..=1 arity bound) and `inspect` (JSON dump of the tokenized
//! argument groups, with an option group and help text).
//!
//! Log output is controlled by `RUST_LOG` and goes to stderr.

use std::env;

use command_router_core::{ArgGroup, CommandSpec, Registry};

const INSPECT_HELP: &str = "usage: cmdr inspect [tokens...]

Prints the tokenized argument groups as JSON, one object per positional
with the options attached to it.

options:
  -p, --pretty    pretty-print the JSON";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let registry = build_registry();

    let mut args = env::args().skip(1);
    let Some(command) = args.next() else {
        print_usage(&registry);
        return;
    };
    let raw: Vec<String> = args.collect();

    registry.execute(&command, raw);
}

fn build_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(CommandSpec::new("status", status_cmd).with_max_args(1));
    registry.register(
        CommandSpec::new("inspect", inspect_cmd)
            .with_option_group(["p", "pretty"])
            .with_help(INSPECT_HELP),
    );
    registry
}

fn print_usage(registry: &Registry) {
    eprintln!("usage: cmdr <command> [arguments] [options]");
    eprintln!("commands: {}", registry.names().join(", "));
}

/// Greets and echoes the positional arguments, one per line.
fn status_cmd(args: &[ArgGroup]) {
    println!("cmdr: ready");
    for group in args {
        println!("{}", group.positional);
    }
}

/// Dumps the tokenized invocation as JSON; `-p`/`--pretty` anywhere
/// switches to pretty-printing.
fn inspect_cmd(args: &[ArgGroup]) {
    let pretty = args.iter().any(|group| group.has_option("p"));
    let rendered = if pretty {
        serde_json::to_string_pretty(args)
    } else {
        serde_json::to_string(args)
    };
    match rendered {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("inspect: {err}"),
    }
}
