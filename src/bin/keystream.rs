// Command-line front end for the keystream generators.
// 3 sub-commands
// - filter  (one register, function of its full state)
// - combine (one bit per register into the function)
// - xor     (apply a keystream to a message)
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{debug, info};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    Filter {
        /// Initial register contents, e.g. 1101111011010011
        #[arg(long)]
        seed: String,

        /// Linear feedback function, e.g. x2+x4+x7+x12
        #[arg(long)]
        taps: String,

        /// Filter function over the register, e.g. x1*x4+x5*x7+x11
        #[arg(long)]
        function: String,

        #[arg(long, default_value_t = 128)]
        length: usize,
    },
    Combine {
        /// One seed per register, repeated in register order
        #[arg(long = "seed", required = true)]
        seeds: Vec<String>,

        /// One feedback function per register, in the same order as --seed
        #[arg(long = "taps", required = true)]
        taps: Vec<String>,

        /// Combining function; x<k> is the bit leaving register k
        #[arg(long)]
        function: String,

        #[arg(long, default_value_t = 128)]
        length: usize,
    },
    Xor {
        #[arg(long)]
        message: String,

        #[arg(long)]
        keystream: String,
    },
}

#[derive(Parser, Debug, Clone)]
#[command(version, about = "LFSR filter and combining keystream generators")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Default log filter; RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn init_logging(max_level: &str) {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(max_level));
}

fn run(command: Command) -> keystream::Result<String> {
    match command {
        Command::Filter {
            seed,
            taps,
            function,
            length,
        } => {
            info!("filter generator, {length} bits");
            keystream::filter_generator(&seed, &taps, &function, length)
        }
        Command::Combine {
            seeds,
            taps,
            function,
            length,
        } => {
            info!("combining generator over {} registers, {length} bits", seeds.len());
            keystream::combining_generator(&seeds, &taps, &function, length)
        }
        Command::Xor {
            message,
            keystream: key,
        } => keystream::xor_bits(&message, &key),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli.command) {
        Ok(bits) => {
            println!("{bits}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("failed with {}", e.kind());
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
