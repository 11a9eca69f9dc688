//! Configuration for the huffdec command-line tool.
//!
//! Handles parsing command-line arguments. The tool works with zero
//! arguments: it reads a frame from stdin and writes the decoded text to
//! stdout.

use std::path::PathBuf;

use huffdec_core::codec::DEFAULT_MAX_OUTPUT_BYTES;
use huffdec_core::DecodeOptions;

/// Complete configuration for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // === Files ===
    /// Frame to decode (None = stdin)
    pub input_file: Option<PathBuf>,

    /// Where to write the text (None = stdout)
    pub output_file: Option<PathBuf>,

    // === Decoding ===
    /// Cross-check decoded counts against the header
    pub validate: bool,

    /// Limit for output not backed by payload bits
    pub max_output_bytes: usize,

    // === Behavior ===
    /// Print the tree structure to stderr before decoding
    pub dump_tree: bool,

    /// Whether to print the resolved config
    pub print_config: bool,

    /// Whether to print the decode summary to stderr
    pub print_metrics: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded).
    pub fn from_args(args: &[String]) -> Result<Command, String> {
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut max_output_bytes: Option<usize> = None;
        let mut validate = false;
        let mut dump_tree = false;
        let mut print_config = false;
        let mut print_metrics = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--max-output" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--max-output requires a number".to_string());
                    }
                    max_output_bytes = Some(args[i].parse().map_err(|_| "invalid max-output")?);
                }
                "--validate" => {
                    validate = true;
                }
                "--dump-tree" => {
                    dump_tree = true;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--metrics" => {
                    print_metrics = true;
                }
                "--help" | "-h" => {
                    return Ok(Command::Help);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        Ok(Command::Run(Config {
            input_file,
            output_file,
            validate,
            max_output_bytes: max_output_bytes.unwrap_or(DEFAULT_MAX_OUTPUT_BYTES),
            dump_tree,
            print_config,
            print_metrics,
        }))
    }

    /// Options handed to the decoder.
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions::new()
            .validate(self.validate)
            .max_output_bytes(self.max_output_bytes)
    }

    /// Print the configuration in human-readable form (to stderr, stdout
    /// may carry the decoded text).
    pub fn print(&self) {
        let show = |p: &Option<PathBuf>, default: &str| {
            p.as_ref()
                .map_or_else(|| default.to_string(), |p| p.display().to_string())
        };

        eprintln!("=== Configuration ===");
        eprintln!("Input:  {}", show(&self.input_file, "(stdin)"));
        eprintln!("Output: {}", show(&self.output_file, "(stdout)"));
        eprintln!("Validate counts: {}", self.validate);
        eprintln!(
            "Max output: {} bytes ({} MiB)",
            self.max_output_bytes,
            self.max_output_bytes / 1024 / 1024
        );
        eprintln!();
    }
}

pub fn print_help() {
    println!("huffdec: decode Huffman-packed response bodies");
    println!();
    println!("USAGE:");
    println!("    huffdec [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>          Frame to decode (default: stdin)");
    println!("    --out <PATH>         Output file (default: stdout)");
    println!();
    println!("    --validate           Check decoded counts against the header");
    println!("    --max-output <N>     Limit for single-symbol output (default: 268435456)");
    println!();
    println!("    --dump-tree          Print the code tree to stderr");
    println!("    --print-config       Print resolved configuration");
    println!("    --metrics            Print a decode summary to stderr");
    println!("    --help, -h           Print this help");
    println!();
    println!("LOGGING:");
    println!("    RUST_LOG=debug       Header and tree details");
    println!("    RUST_LOG=trace       Also the payload bit string");
    println!();
    println!("EXAMPLES:");
    println!("    huffdec --in body.bin                  # Decode a saved response");
    println!("    curl -s ... | huffdec --validate       # Decode from a pipe");
    println!();
}
