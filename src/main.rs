use sqlerd::model::ErdModel;
use sqlerd::sql::{generate_sql, parse_sql, Dialect};
use sqlerd::templates;
use std::env;
use std::fs;
use std::process;

fn usage(program: &str) {
    eprintln!("Usage: {} <input.sql> [options]", program);
    eprintln!("       {} --generate <model.json> [options]", program);
    eprintln!("       {} --template <name> [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <file>     Output file (default: stdout)");
    eprintln!("  -d, --dialect <name>    SQL dialect: generic, postgresql (default: generic)");
    eprintln!("  -g, --generate          Read an ERD model JSON and emit SQL");
    eprintln!("  -t, --template <name>   Emit SQL for a predefined template");
    eprintln!("      --list-templates    Print available template names");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        usage(&args[0]);
        process::exit(1);
    }

    let mut input_path: Option<String> = None;
    let mut output_path: Option<String> = None;
    let mut dialect = Dialect::Generic;
    let mut generate = false;
    let mut template_name: Option<String> = None;
    let mut list_templates = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                if i < args.len() {
                    output_path = Some(args[i].clone());
                }
            }
            "-d" | "--dialect" => {
                i += 1;
                if i < args.len() {
                    dialect = Dialect::from_str(&args[i]).unwrap_or_else(|| {
                        eprintln!("Unknown dialect: {}", args[i]);
                        process::exit(1);
                    });
                }
            }
            "-g" | "--generate" => generate = true,
            "-t" | "--template" => {
                i += 1;
                if i < args.len() {
                    template_name = Some(args[i].clone());
                }
            }
            "--list-templates" => list_templates = true,
            other if !other.starts_with('-') && input_path.is_none() => {
                input_path = Some(other.to_string());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    if list_templates {
        for name in templates::template_names() {
            println!("{}", name);
        }
        return;
    }

    let output = if let Some(name) = template_name {
        let model = templates::template(&name).unwrap_or_else(|| {
            eprintln!("Unknown template: {}", name);
            process::exit(1);
        });
        generate_sql(&model, dialect)
    } else if generate {
        let path = require_input(input_path, &args[0]);
        let json = read_file(&path);
        let model: ErdModel = serde_json::from_str(&json).unwrap_or_else(|e| {
            eprintln!("Failed to parse model {}: {}", path, e);
            process::exit(1);
        });
        generate_sql(&model, dialect)
    } else {
        let path = require_input(input_path, &args[0]);
        let sql = read_file(&path);
        let model = parse_sql(&sql).unwrap_or_else(|e| {
            eprintln!("Parse error: {}", e);
            process::exit(1);
        });
        serde_json::to_string_pretty(&model).unwrap_or_else(|e| {
            eprintln!("Failed to encode model: {}", e);
            process::exit(1);
        })
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &output) {
                eprintln!("Failed to write {}: {}", path, e);
                process::exit(1);
            }
        }
        None => println!("{}", output),
    }
}

fn require_input(input_path: Option<String>, program: &str) -> String {
    input_path.unwrap_or_else(|| {
        usage(program);
        process::exit(1);
    })
}

fn read_file(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            process::exit(1);
        }
    }
}
