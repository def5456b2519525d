use clap::Parser;
use dexpr::{Bindings, Engine, EngineOptions, Literal, render_error, stdlib};
use miette::{IntoDiagnostic, Result};
use std::io::BufRead;

mod repl;
mod vars;

/// dexpr - Evaluate dynamic expressions
#[derive(Parser, Debug)]
#[command(name = "dexpr")]
#[command(about = "Evaluate dexpr expressions", long_about = None)]
struct Args {
    /// Bind a variable (NAME=VALUE, may be repeated)
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = vars::parse_var)]
    vars: Vec<(String, Literal)>,

    /// Require every expression to evaluate to a boolean
    #[arg(long)]
    bool: bool,

    /// Print the parsed AST (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

struct Session<'a> {
    engine: Engine,
    vars: Bindings,
    args: &'a Args,
    failures: usize,
}

impl Session<'_> {
    /// Evaluate one expression and print the result or the rendered error.
    fn interpret(&mut self, input: &str) {
        let expr = match self.engine.compile(input) {
            Ok(expr) => expr,
            Err(e) => {
                render_error(&e);
                self.failures += 1;
                return;
            }
        };

        if self.args.debug_parse {
            println!("=== Parsed AST ===");
            println!("{:#?}", expr.ast());
            println!();
        }

        let result = if self.args.bool {
            expr.evaluate_bool(&self.vars).map(|b| b.to_string())
        } else {
            expr.evaluate(&self.vars).map(|value| value.to_string())
        };
        match result {
            Ok(shown) => println!("{}", shown),
            Err(e) => {
                render_error(&e);
                self.failures += 1;
            }
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // RUST_LOG controls the level, warn by default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut session = Session {
        engine: Engine::new(EngineOptions::default(), stdlib::register),
        vars: args.vars.iter().cloned().collect(),
        args: &args,
        failures: 0,
    };
    tracing::debug!(vars = session.vars.len(), "bound variables");

    if let Some(expr) = &args.expression {
        session.interpret(expr);
    } else if atty::is(atty::Stream::Stdin) {
        let names = repl::Repl::names(&session.engine, &session.vars);
        repl::Repl::new(names).run(|line| session.interpret(line))?;
    } else {
        for line in std::io::stdin().lock().lines() {
            let line = line.into_diagnostic()?;
            if !line.trim().is_empty() {
                session.interpret(&line);
            }
        }
    }

    if session.failures > 0 {
        miette::bail!("{} expression(s) failed", session.failures);
    }
    Ok(())
}
