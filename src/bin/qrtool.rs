use clap::{Parser, Subcommand, ValueEnum};
use qr_encode::encoder::segmenter::SegmentScanner;
use qr_encode::{ECLevel, Mode, ModeHint, QrEncoder};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "qr_encode CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and print the data codeword package
    Encode {
        text: String,
        #[arg(long, value_enum, default_value = "m")]
        level: Level,
        /// Enable double-byte detection during segmentation
        #[arg(long)]
        kanji: bool,
    },
    /// Print the segmentation the scanner chooses for text
    Segments {
        text: String,
        #[arg(long)]
        kanji: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Level {
    L,
    M,
    Q,
    H,
}

impl From<Level> for ECLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::L => ECLevel::L,
            Level::M => ECLevel::M,
            Level::Q => ECLevel::Q,
            Level::H => ECLevel::H,
        }
    }
}

fn mode_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Numeric => "numeric",
        Mode::Alphanumeric => "alphanumeric",
        Mode::Byte => "byte",
        Mode::Kanji => "kanji",
    }
}

fn main() -> ExitCode {
    match Cli::parse().command {
        Command::Encode { text, level, kanji } => {
            let hint = if kanji { ModeHint::Kanji } else { ModeHint::Auto };
            let encoder = QrEncoder::new(level.into());
            match encoder.encode_with_hint(text.as_bytes(), hint) {
                Ok(package) => {
                    println!(
                        "version {} ({}x{} modules), level {:?}",
                        package.version.number(),
                        package.width,
                        package.width,
                        package.level
                    );
                    println!(
                        "{} data + {} ecc codewords, {} data bits",
                        package.data_codewords, package.ecc_codewords, package.bit_count
                    );
                    let hex: Vec<String> =
                        package.bytes.iter().map(|b| format!("{b:02x}")).collect();
                    println!("{}", hex.join(" "));
                    ExitCode::SUCCESS
                }
                Err(err) => {
                    eprintln!("encode failed: {err}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Segments { text, kanji } => {
            let segments = SegmentScanner::scan(text.as_bytes(), kanji);
            for segment in &segments {
                println!(
                    "{:<12} {:>5} bytes  {}",
                    mode_name(segment.mode),
                    segment.len(),
                    String::from_utf8_lossy(&segment.data)
                );
            }
            println!("{} segment(s)", segments.len());
            ExitCode::SUCCESS
        }
    }
}
