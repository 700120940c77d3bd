//! PSI Compiler CLI

use psic::commands::{parse_report_args, print_lexemes, report_error};

fn main() {
    psic::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "report" => {
            let options = match parse_report_args(&args[2..]) {
                Ok(options) => options,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!(
                        "Usage: psi report <file> <line> <column> <message...> [--color=<mode>]"
                    );
                    std::process::exit(2);
                }
            };

            match report_error(&options) {
                // The report describes an error in the input, so still fail.
                Ok(()) => std::process::exit(1),
                Err(err) => {
                    eprintln!("error: {err}");
                    std::process::exit(1);
                }
            }
        }
        "lexemes" => print_lexemes(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("PSI Compiler");
    println!();
    println!("Usage: psi <command> [options]");
    println!();
    println!("Commands:");
    println!("  report <file> <line> <column> <message...>");
    println!("                 Show an error report for a position in <file>");
    println!("  lexemes        Print the operator lexeme table in matching order");
    println!("  help           Show this message");
    println!();
    println!("Options:");
    println!("  --color=<mode> Color the report: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  RUST_LOG       Enable tracing output (e.g. RUST_LOG=debug)");
    println!("  PSI_LOG_TREE   Print tracing output as an indented tree");
}
