use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;
use smatrix::{multiply, read_matrix, write_matrix, FormatConfig};

#[derive(Parser, Debug)]
#[command(
    name = "smatrix",
    version,
    about = "Multiply two sparse matrix files and save the product"
)]
struct Cli {
    /// Left operand A
    a: PathBuf,

    /// Right operand B
    b: PathBuf,

    /// Where to save C = A*B
    output: PathBuf,

    /// Decimal places for values in the saved file
    #[arg(long, default_value_t = smatrix::matrix::config::DEFAULT_WRITE_PRECISION)]
    precision: usize,

    /// Mantissa digits when printing A, B and C
    #[arg(long, default_value_t = smatrix::matrix::config::DEFAULT_PRINT_PRECISION)]
    print_precision: usize,

    /// Do not print A, B and C to stdout
    #[arg(long)]
    quiet: bool,
}

fn run(cli: &Cli) -> smatrix::Result<()> {
    let config = FormatConfig::default()
        .with_write_precision(cli.precision)
        .with_print_precision(cli.print_precision);

    let a = read_matrix(&cli.a)?;
    let b = read_matrix(&cli.b)?;
    let c = multiply(&a, &b)?;
    info!("product has {} nonzeros", c.nnz());

    if !cli.quiet {
        let p = config.print_precision;
        print!("A:\n{:.*}", p, a);
        print!("B:\n{:.*}", p, b);
        print!("C(=A*B):\n{:.*}", p, c);
    }

    write_matrix(&cli.output, &c, &config)?;
    println!("results saved in '{}'", cli.output.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("[smatrix] {}", e);
        process::exit(1);
    }
}
