use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use intcalc::{eval::evaluate, lexer::Lexer, parser::Config};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// What to print for the parsed expression.
    #[arg(long, value_enum, default_value_t = Emit::Value)]
    emit: Emit,

    /// The maximum nesting depth of parentheses.
    #[arg(long, default_value_t = Config::DEFAULT_MAX_NESTING_DEPTH)]
    max_depth: usize,

    /// The arithmetic expression to evaluate, e.g. "(1 + 2) * 3".
    expression: String,
}

#[derive(Debug, Copy, Clone, PartialEq, ValueEnum)]
enum Emit {
    /// The integer result.
    Value,
    /// The syntax tree in prefix notation.
    Lisp,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::debug!("parsed CLI args = {:?}", args);

    let output = run(&args)
        .with_context(|| anyhow::anyhow!("failed to evaluate {:?}", args.expression))?;
    println!("{}", output);

    Ok(())
}

fn run(args: &Args) -> anyhow::Result<String> {
    let mut config = Config::new();
    config.max_nesting_depth(args.max_depth);

    let parser = intcalc::parser::Parser::new(Lexer::new(&args.expression), config)?;
    let expr = parser.parse()?;

    match args.emit {
        Emit::Value => Ok(evaluate(&expr)?.to_string()),
        Emit::Lisp => Ok(expr.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("intcalc").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn emit_value() {
        assert_eq!(run(&args(&["11 + 31"])).unwrap(), "42");
    }

    #[test]
    fn emit_lisp() {
        assert_eq!(
            run(&args(&["--emit", "lisp", "1 + 2 * 3"])).unwrap(),
            "(+ 1 (* 2 3))"
        );
    }

    #[test]
    fn max_depth() {
        assert!(run(&args(&["--max-depth", "1", "((1))"])).is_err());
        assert_eq!(run(&args(&["--max-depth", "2", "((1))"])).unwrap(), "1");
    }

    #[test]
    fn errors_are_propagated() {
        let err = run(&args(&["5 / 0"])).unwrap_err();
        assert_eq!(err.to_string(), "division by zero");
    }

    #[test]
    fn long_chain() {
        let input = vec!["1"; 100_000].join(" + ");
        assert_eq!(run(&args(&[input.as_str()])).unwrap(), "100000");

        let rendered = run(&args(&["--emit", "lisp", input.as_str()])).unwrap();
        assert!(rendered.starts_with(&"(+ ".repeat(99_999)));
        assert!(rendered.ends_with(" 1) 1)"));
    }
}
