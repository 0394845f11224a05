use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use numdiff::differentiation::first::first_derivative;
use numdiff::differentiation::second::second_derivative;
use numdiff::differentiation::{parse_node, parse_points_delimited, DerivativeCfg};
use numdiff::expression::Expression;
use numdiff::extrapolation::{richardson_expr, richardson_tableau, RichardsonCfg};
use numdiff::format::{format_fixed, validate_decimals, DEFAULT_DECIMALS};

#[derive(Parser)]
#[command(author, version, about = "Numerical differentiation and Richardson extrapolation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct Output {
    /// Decimal places every reported value is truncated to
    #[arg(long, default_value_t = DEFAULT_DECIMALS)]
    decimals: u32,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// First derivative per interval and per node of "x1,y1;x2,y2;..."
    First {
        #[arg(long, allow_hyphen_values = true)]
        points: String,
        #[arg(long, allow_hyphen_values = true)]
        node: String,
        #[command(flatten)]
        output: Output,
    },

    /// Second derivative at an interior node of "x1,y1;x2,y2;..."
    Second {
        #[arg(long, allow_hyphen_values = true)]
        points: String,
        #[arg(long, allow_hyphen_values = true)]
        node: String,
        #[command(flatten)]
        output: Output,
    },

    /// Richardson extrapolation of the central difference of f at x
    Richardson {
        /// f(x), e.g. "x^3" or "sin(x) * exp(x)"
        #[arg(long, allow_hyphen_values = true)]
        function: String,
        /// Evaluation point; a constant expression such as "pi/4"
        #[arg(long, allow_hyphen_values = true)]
        x: String,
        /// Step h1; h2 = h1 / 2
        #[arg(long, allow_hyphen_values = true)]
        h: String,
        #[command(flatten)]
        output: Output,
    },

    /// One Richardson step from A(h), A(h/2) and error order p
    Tableau {
        #[arg(long, allow_negative_numbers = true)]
        ah: f64,
        #[arg(long, allow_negative_numbers = true)]
        ah2: f64,
        #[arg(long, allow_negative_numbers = true)]
        order: f64,
        #[command(flatten)]
        output: Output,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::First { points, node, output } => {
            let set    = parse_points_delimited(&points)?;
            let node   = parse_node(node)?;
            let cfg    = DerivativeCfg::new().with_decimals(output.decimals);
            let report = first_derivative(&set, node, cfg)?;
            if output.json {
                return print_json(&report);
            }

            let text = report.formatted();
            println!("method:               {}", report.method);
            println!("per-interval slopes:  {}", text.per_interval_slopes);
            println!("per-node derivatives: {}", text.per_node_derivatives);
            println!("average:              {}", text.average);
            match text.at_requested_node {
                Some(v) => println!("f'({node}) = {v}"),
                None    => println!("f'({node}) = node not found"),
            }
        }

        Command::Second { points, node, output } => {
            let set    = parse_points_delimited(&points)?;
            let node   = parse_node(node)?;
            let cfg    = DerivativeCfg::new().with_decimals(output.decimals);
            let report = second_derivative(&set, node, cfg)?;
            if output.json {
                return print_json(&report);
            }
            println!("f''({node}) = {}", report.formatted_value());
        }

        Command::Richardson { function, x, h, output } => {
            let f      = Expression::parse(&function)?;
            let x      = Expression::parse_constant(&x)?;
            let h      = Expression::parse_constant(&h)?;
            let cfg    = RichardsonCfg::new().with_decimals(output.decimals);
            let report = richardson_expr(&f, x, h, cfg)?;
            if output.json {
                return print_json(&report);
            }

            let text = report.formatted();
            println!("f(x) = {f}");
            println!("x:  {}", text.x);
            println!("h1: {}  |  D(h1): {}", text.h1, text.d_h1);
            println!("h2: {}  |  D(h2): {}", text.h2, text.d_h2);
            println!("D ≈ (4/3)·D(h2) − (1/3)·D(h1) = {}", text.extrapolated);
        }

        Command::Tableau { ah, ah2, order, output } => {
            let d      = validate_decimals(output.decimals)?;
            let report = richardson_tableau(ah, ah2, order)?;
            if output.json {
                return print_json(&report);
            }

            let text = report.formatted(d);
            println!("A(h) = {}, A(h/2) = {}, p = {order}", format_fixed(ah, d), format_fixed(ah2, d));
            println!("A(h/2) - A(h)      = {}", text.difference);
            println!("2^p - 1            = {}", text.denominator);
            println!("correction         = {}", text.correction);
            println!("R = A(h/2) + corr. = {}", text.extrapolated);
        }
    }
    Ok(())
}
