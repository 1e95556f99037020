use std::{net::SocketAddr, process::ExitCode};

use calcd::{
    config::{DEFAULT_ADDR, DEFAULT_MAX_BODY_BYTES, DEFAULT_ROUTE, ServerConfig, SyntaxStatusPolicy},
    error::EvaluationError,
    evaluate,
    transport::server::CalcServer,
};
use clap::{Parser, Subcommand};

/// calcd evaluates arithmetic expressions made of numbers, `+ - * /` and
/// parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates one expression and prints the result.
    Eval {
        /// The expression, e.g. "(1 + 1) * 2".
        expression: String,
    },
    /// Serves `POST {"expression": ...}` requests over HTTP.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "CALCD_ADDR", default_value_t = DEFAULT_ADDR)]
        addr: SocketAddr,

        /// Path of the calculation endpoint.
        #[arg(long, default_value = DEFAULT_ROUTE)]
        route: String,

        /// Largest request body accepted, in bytes.
        #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES)]
        max_body_bytes: usize,

        /// Status code policy for syntax errors.
        #[arg(long, value_enum, default_value_t = SyntaxStatusPolicy::Compatible)]
        syntax_status: SyntaxStatusPolicy,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Eval { expression } => match evaluate(&expression) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                match e {
                    EvaluationError::Syntax(_) => ExitCode::from(1),
                    EvaluationError::Runtime(_) => ExitCode::from(2),
                }
            },
        },
        Command::Serve { addr,
                         route,
                         max_body_bytes,
                         syntax_status, } => {
            let config = ServerConfig { addr,
                                        route,
                                        max_body_bytes,
                                        syntax_status };
            match CalcServer::bind(config).and_then(|server| server.run()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::FAILURE
                },
            }
        },
    }
}
