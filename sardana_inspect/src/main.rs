//! # Sardana Definitions Inspector
//!
//! Queries the data type normalizer, the element type registry and the
//! interface graph from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Everything a Motor implements
//! sardana_inspect expand Motor
//!
//! # Capability test
//! sardana_inspect is-a PseudoCounter ExpChannel
//!
//! # Normalize a type descriptor (several arguments form a sequence)
//! sardana_inspect dtype PyTango.DevVarDoubleArray
//! sardana_inspect dtype '[["float"]]'
//!
//! # Normalize an access descriptor
//! sardana_inspect access READ_WRITE
//!
//! # Classification sets of an element type
//! sardana_inspect classify CTExpChannel
//!
//! # Would the change filter report a new reading?
//! sardana_inspect --config /etc/sardana/sardana.toml changed 1.0 1.0000001
//!
//! # Machine-readable output
//! sardana_inspect --json classify Motor
//! ```

#![deny(warnings)]

use clap::{Parser, Subcommand};
use sardana_common::consts::DEFAULT_CONFIG_PATH;
use sardana_common::prelude::*;
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Sardana definitions inspector
#[derive(Parser, Debug)]
#[command(name = "sardana_inspect")]
#[command(version)]
#[command(about = "Inspect sardana data type, element type and interface definitions")]
#[command(long_about = None)]
struct Args {
    /// Path to the configuration file. Defaults apply when omitted and
    /// the default path does not exist.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs and results in JSON format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every interface NAME implements, itself included
    Expand { name: String },

    /// Test whether NAME implements INTERFACE
    IsA { name: String, interface: String },

    /// Normalize a data type descriptor
    ///
    /// `none` is an absent descriptor. A single argument starting with `[`
    /// is read as a JSON sequence; several arguments form a sequence of names.
    Dtype {
        #[arg(required = true, num_args = 1..)]
        descriptors: Vec<String>,
    },

    /// Normalize an access descriptor (`none` is an absent descriptor)
    Access { descriptor: String },

    /// Show the classification sets and interfaces of an element type
    Classify { element_type: String },

    /// Apply the scalar change filter to two readings given as JSON values
    Changed { previous: String, current: String },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = run() {
        error!("sardana_inspect failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            setup_tracing(&args, LogLevel::default());
            return Err(e.into());
        }
    };
    setup_tracing(&args, config.shared.log_level);

    let ctx = SardanaContext::init(&config)?;
    info!(
        "{} v{} ready",
        config.shared.service_name,
        env!("CARGO_PKG_VERSION")
    );

    let output = execute(&ctx, &args.command)?;
    print_output(&output, args.json);
    Ok(())
}

/// Load `--config`, or the default path when it exists, or built-in defaults.
fn load_config(args: &Args) -> Result<SardanaConfig, ConfigError> {
    match &args.config {
        Some(path) => SardanaConfig::load_validated(path),
        None => match SardanaConfig::load_validated(std::path::Path::new(DEFAULT_CONFIG_PATH)) {
            Err(ConfigError::FileNotFound) => Ok(SardanaConfig::default()),
            other => other,
        },
    }
}

/// Run one query. The result is a JSON value so text and JSON output share
/// one code path.
fn execute(ctx: &SardanaContext, command: &Command) -> Result<Value, Box<dyn std::error::Error>> {
    let graph = ctx.interfaces();

    let output = match command {
        Command::Expand { name } => {
            let expanded = graph
                .expand(name)
                .ok_or_else(|| format!("unknown interface '{name}'"))?;
            json!(expanded)
        }

        Command::IsA { name, interface } => json!(graph.is_a(name, interface)),

        Command::Dtype { descriptors } => {
            let descriptor = parse_type_descriptor(descriptors)?;
            debug!(?descriptor, "normalizing type descriptor");
            let (data_type, data_format) = normalize_type(&descriptor);
            json!({ "type": data_type, "format": data_format })
        }

        Command::Access { descriptor } => {
            let descriptor = if descriptor.eq_ignore_ascii_case("none") {
                AccessDescriptor::Absent
            } else {
                AccessDescriptor::from(descriptor.as_str())
            };
            json!(normalize_access(&descriptor))
        }

        Command::Classify { element_type } => {
            let element_type: ElementType = element_type.parse()?;
            let classes: Vec<ElementClass> = ElementClass::of(element_type).collect();
            let interfaces = element_type.interface().and_then(|name| graph.expand(name));
            json!({
                "element_type": element_type,
                "classes": classes,
                "interfaces": interfaces,
            })
        }

        Command::Changed { previous, current } => {
            let previous = parse_value(previous);
            let current = parse_value(current);
            json!({
                "changed": ctx.filter().changed(&previous, &current),
                "epsilon": ctx.filter().epsilon,
                "numbers": [is_number(&previous), is_number(&current)],
            })
        }
    };

    Ok(output)
}

fn parse_type_descriptor(args: &[String]) -> Result<TypeDescriptor, serde_json::Error> {
    let one = |arg: &String| -> Result<TypeDescriptor, serde_json::Error> {
        if arg.eq_ignore_ascii_case("none") {
            Ok(TypeDescriptor::Absent)
        } else if arg.starts_with('[') {
            let value: Value = serde_json::from_str(arg)?;
            Ok(TypeDescriptor::from(&value))
        } else {
            Ok(TypeDescriptor::from(arg.as_str()))
        }
    };

    match args {
        [single] => one(single),
        many => Ok(TypeDescriptor::Seq(
            many.iter().map(one).collect::<Result<_, _>>()?,
        )),
    }
}

/// JSON if it parses, the raw text as a string otherwise.
fn parse_value(raw: &str) -> AttrValue {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => AttrValue::from(value),
        Err(_) => AttrValue::String(raw.to_string()),
    }
}

fn print_output(output: &Value, json: bool) {
    if json {
        println!("{output}");
        return;
    }

    match output {
        Value::Array(items) => {
            for item in items {
                println!("{}", plain(item));
            }
        }
        Value::Object(map) => {
            for (key, value) in map {
                println!("{key}: {}", plain(value));
            }
        }
        other => println!("{}", plain(other)),
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        Value::Array(items) => items.iter().map(plain).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Setup tracing subscriber from CLI arguments and the configured level.
///
/// Logs go to stderr so query results on stdout stay parseable.
fn setup_tracing(args: &Args, level: LogLevel) {
    let directive = if args.verbose {
        LogLevel::Debug.as_directive()
    } else {
        level.as_directive()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> SardanaContext {
        SardanaContext::init(&SardanaConfig::default()).unwrap()
    }

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sardana_inspect").chain(argv.iter().copied()))
            .unwrap()
    }

    #[test]
    fn expand_lists_sorted_interfaces() {
        let out = execute(&ctx(), &args(&["expand", "ExpChannel"]).command).unwrap();
        assert_eq!(out[0], "Acquirable");
        assert!(out.as_array().unwrap().contains(&json!("ExpChannel")));
    }

    #[test]
    fn expand_unknown_is_an_error() {
        assert!(execute(&ctx(), &args(&["expand", "Teleporter"]).command).is_err());
    }

    #[test]
    fn is_a() {
        let out = execute(&ctx(), &args(&["is-a", "Motor", "Moveable"]).command).unwrap();
        assert_eq!(out, json!(true));
    }

    #[test]
    fn dtype_forms() {
        let c = ctx();
        let run = |argv: &[&str]| execute(&c, &args(argv).command).unwrap();

        assert_eq!(
            run(&["dtype", "none"]),
            json!({"type": "Double", "format": "Scalar"})
        );
        assert_eq!(
            run(&["dtype", "DevVarLongArray"]),
            json!({"type": "Integer", "format": "OneD"})
        );
        assert_eq!(
            run(&["dtype", "[[\"float\"]]"]),
            json!({"type": "Double", "format": "TwoD"})
        );
        assert_eq!(
            run(&["dtype", "str", "str"]),
            json!({"type": "String", "format": "OneD"})
        );
    }

    #[test]
    fn access() {
        let c = ctx();
        let run = |d: &str| execute(&c, &args(&["access", d]).command).unwrap();
        assert_eq!(run("READ"), json!("ReadOnly"));
        assert_eq!(run("weird_token"), json!("ReadWrite"));
        assert_eq!(run("none"), json!("Invalid"));
    }

    #[test]
    fn classify() {
        let out = execute(&ctx(), &args(&["classify", "PseudoMotor"]).command).unwrap();
        assert_eq!(
            out["classes"],
            json!(["Controllable", "Moveable", "Acquirable", "Pseudo"])
        );
        assert!(execute(&ctx(), &args(&["classify", "motor"]).command).is_err());

        let unknown = execute(&ctx(), &args(&["classify", "Unknown"]).command).unwrap();
        assert_eq!(unknown["interfaces"], Value::Null);
    }

    #[test]
    fn changed_uses_filter() {
        let c = ctx();
        let run = |a: &str, b: &str| execute(&c, &args(&["changed", a, b]).command).unwrap();
        assert_eq!(run("1.0", "1.0")["changed"], json!(false));
        assert_eq!(run("1", "2")["changed"], json!(true));
        assert_eq!(run("On", "On")["changed"], json!(false));
        assert_eq!(run("On", "On")["numbers"], json!([false, false]));
        assert_eq!(
            run("9007199254740992", "9007199254740993")["changed"],
            json!(true)
        );
    }
}
