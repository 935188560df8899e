use std::io;
use std::process;

use dnaweave::fasta;
use dnaweave::input;
use dnaweave::logger;
use dnaweave::seq;
use dnaweave::stats;

use log::{debug, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "dnaweave", about = "Random DNA sequence generation with name watermarking and FASTA output")]
struct Opt {
    /// Seed for the random number generator (entropy-seeded when omitted)
    #[structopt(short, long)]
    seed: Option<u64>,

    /// Verbose logging (-v for debug, -vv for trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u64,
}

fn main() {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    logger::init_logger(level).expect("Error installing logger");

    let mut rng = match opt.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input_handle = stdin.lock();
    let mut output_handle = stdout.lock();

    let length = input::prompt_length(&mut input_handle, &mut output_handle)
        .expect("Error reading sequence length");
    let seq_id = input::prompt_line(&mut input_handle, &mut output_handle, "Enter the sequence ID: ")
        .expect("Error reading sequence ID");
    let description = input::prompt_line(&mut input_handle, &mut output_handle, "Provide a description of the sequence: ")
        .expect("Error reading description");
    let name = input::prompt_line(&mut input_handle, &mut output_handle, "Enter your name: ")
        .expect("Error reading name");

    drop(input_handle);
    drop(output_handle);

    let raw_sequence = seq::generate(length, &mut rng);
    debug!("generated {} random bases", raw_sequence.len());

    let (final_sequence, position) = seq::insert_name(&raw_sequence, &name, &mut rng);
    debug!("spliced name at offset {}", position);

    let composition = match stats::composition(&final_sequence) {
        Ok(composition) => composition,
        Err(e) => {
            eprintln!("Cannot compute statistics: {}", e);
            process::exit(1);
        }
    };

    let filename = format!("{}.fasta", seq_id);
    let header = format!("{} {}", seq_id, description);
    fasta::write_record(&filename, &header, &final_sequence).expect("Error writing FASTA file");
    debug!("wrote {} sequence bytes to {}", final_sequence.len(), filename);

    println!("\nThe sequence was saved to the file {}", filename);
    println!("Sequence statistics:");
    println!("A: {:>5.1}%", composition.a);
    println!("C: {:>5.1}%", composition.c);
    println!("G: {:>5.1}%", composition.g);
    println!("T: {:>5.1}%", composition.t);
    println!("%CG: {:>5.1}", composition.cg);
}
