//! Command-line configuration for huffc

use huff::consts::PAYLOAD_EXTENSION;
use std::path::{Path, PathBuf};

/// What the tool was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Compress,
    Decompress,
    /// Print the code table and size statistics without writing anything
    Codes,
    Help,
}

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub command: Command,
    pub input: PathBuf,
    pub output: PathBuf,
    /// Decode each payload after compressing and compare with the input
    pub verify: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (program name excluded)
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut command: Option<Command> = None;
        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut verify = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--help" | "-h" => {
                    command = Some(Command::Help);
                }
                "--out" | "-o" => {
                    i += 1;
                    if i >= args.len() {
                        return Err(format!("{} requires a path", args[i - 1]));
                    }
                    output = Some(PathBuf::from(&args[i]));
                }
                "--verify" => {
                    verify = true;
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(format!("unknown argument: {}", flag));
                }
                word if command.is_none() => {
                    command = Some(match word {
                        "compress" | "c" => Command::Compress,
                        "decompress" | "d" => Command::Decompress,
                        "codes" => Command::Codes,
                        other => return Err(format!("unknown command: {}", other)),
                    });
                }
                path if input.is_none() => {
                    input = Some(PathBuf::from(path));
                }
                extra => {
                    return Err(format!("unexpected argument: {}", extra));
                }
            }
            i += 1;
        }

        let command = command.ok_or_else(|| "missing command".to_string())?;
        if command == Command::Help {
            return Ok(Self {
                command,
                input: PathBuf::new(),
                output: PathBuf::new(),
                verify,
            });
        }

        let input = input.ok_or_else(|| "missing input file".to_string())?;
        let output = output.unwrap_or_else(|| default_output(command, &input));

        Ok(Self {
            command,
            input,
            output,
            verify,
        })
    }

    /// Print the configuration in human-readable form
    pub fn print(&self) {
        println!("Command: {:?}", self.command);
        println!("Input:   {}", self.input.display());
        if self.command != Command::Codes {
            println!("Output:  {}", self.output.display());
        }
    }
}

/// `name` -> `name.huff` when compressing, `name.huff` -> `name` (or
/// `name.out` for other names) when decompressing
fn default_output(command: Command, input: &Path) -> PathBuf {
    match command {
        Command::Compress => {
            let mut name = input.as_os_str().to_owned();
            name.push(".");
            name.push(PAYLOAD_EXTENSION);
            PathBuf::from(name)
        }
        Command::Decompress => {
            if input.extension().is_some_and(|ext| ext == PAYLOAD_EXTENSION) {
                input.with_extension("")
            } else {
                input.with_extension("out")
            }
        }
        Command::Codes | Command::Help => PathBuf::new(),
    }
}

pub fn print_help() {
    println!("huffc: Huffman compressor");
    println!();
    println!("USAGE:");
    println!("    huffc <COMMAND> <INPUT> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    compress, c     Compress INPUT (default output: INPUT.huff)");
    println!("    decompress, d   Restore a .huff payload (default output: INPUT without .huff)");
    println!("    codes           Print the Huffman code table and sizes for INPUT");
    println!();
    println!("OPTIONS:");
    println!("    --out, -o <PATH>  Output file");
    println!("    --verify          Check each compressed payload decodes to the input");
    println!("    --help, -h        Print this help");
    println!();
    println!("Set RUST_LOG=debug for codec diagnostics.");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compress_default_output() {
        let config = Config::from_args(&args(&["compress", "notes.txt"])).unwrap();
        assert_eq!(config.command, Command::Compress);
        assert_eq!(config.input, PathBuf::from("notes.txt"));
        assert_eq!(config.output, PathBuf::from("notes.txt.huff"));
        assert!(!config.verify);
    }

    #[test]
    fn test_decompress_default_output() {
        let config = Config::from_args(&args(&["d", "notes.txt.huff"])).unwrap();
        assert_eq!(config.command, Command::Decompress);
        assert_eq!(config.output, PathBuf::from("notes.txt"));

        let config = Config::from_args(&args(&["decompress", "blob.bin"])).unwrap();
        assert_eq!(config.output, PathBuf::from("blob.out"));
    }

    #[test]
    fn test_explicit_output_and_verify() {
        let config =
            Config::from_args(&args(&["c", "in.txt", "-o", "out.bin", "--verify"])).unwrap();
        assert_eq!(config.output, PathBuf::from("out.bin"));
        assert!(config.verify);
    }

    #[test]
    fn test_help() {
        let config = Config::from_args(&args(&["--help"])).unwrap();
        assert_eq!(config.command, Command::Help);
    }

    #[test]
    fn test_errors() {
        assert!(Config::from_args(&args(&[])).is_err());
        assert!(Config::from_args(&args(&["compress"])).is_err());
        assert!(Config::from_args(&args(&["explode", "x"])).is_err());
        assert!(Config::from_args(&args(&["c", "x", "--bogus"])).is_err());
        assert!(Config::from_args(&args(&["c", "x", "-o"])).is_err());
        assert!(Config::from_args(&args(&["c", "x", "y"])).is_err());
    }
}
