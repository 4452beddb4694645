//! Print transform matrices from the command line.
//!
//! ```bash
//! gl-transform perspective 60 1.777 0.1 100
//! gl-transform rotation 0 1 0 1.5708
//! gl-transform list
//! ```

use gl_transform::hash::const_hash;
use gl_transform::ops::Operations;

const LIST: u64 = const_hash("list");
const HELP: u64 = const_hash("help");

const USAGE_STATUS: i32 = 2;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let operations = Operations::new();

    let name = match args.first() {
        Some(name) => name.as_str(),
        None => {
            usage(&operations);
            std::process::exit(USAGE_STATUS);
        }
    };

    match gl_transform::hash(name) {
        LIST | HELP => {
            usage(&operations);
            return;
        }
        _ => (),
    }

    let values = match parse_values(&args[1..]) {
        Ok(values) => values,
        Err(arg) => {
            eprintln!("Not a number: \"{}\"", arg);
            std::process::exit(USAGE_STATUS);
        }
    };

    match operations.run(name, &values) {
        Ok(matrix) => println!("{}", matrix),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(USAGE_STATUS);
        }
    }
}

fn parse_values(args: &[String]) -> Result<Vec<f32>, &str> {
    args.iter()
        .map(|arg| arg.parse::<f32>().map_err(|_| arg.as_str()))
        .collect()
}

fn usage(operations: &Operations) {
    println!("Usage: gl-transform <operation> <args...>\n");
    println!("Operations:");

    for operation in operations.iter() {
        println!("  {} {}", operation.name, operation.params.join(" "));
    }
}
