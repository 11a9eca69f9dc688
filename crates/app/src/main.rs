//! huffdec: decode a Huffman-packed response body saved from the service.

mod config;

use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use config::{print_help, Command, Config};
use huffdec_core::framing::parse_frame;
use huffdec_core::{decode_frame, HuffmanTree};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match Config::from_args(&args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("run with --help for usage");
            return ExitCode::from(2);
        }
    };

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(config: &Config) -> huffdec_core::Result<()> {
    let bytes = match &config.input_file {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    log::info!("read {} bytes", bytes.len());

    let frame = parse_frame(&bytes)?;
    let tree = HuffmanTree::from_table(&frame.table)?;

    if config.dump_tree {
        eprintln!("=== Code Tree ===");
        eprint!("{}", tree);
        eprintln!();
    }

    let unpacked = decode_frame(&frame, &tree, &config.decode_options())?;

    match &config.output_file {
        Some(path) => fs::write(path, unpacked.text.as_bytes())?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(unpacked.text.as_bytes())?;
            stdout.flush()?;
        }
    }

    if config.print_metrics {
        eprintln!("{}", unpacked.stats);
    }

    Ok(())
}
