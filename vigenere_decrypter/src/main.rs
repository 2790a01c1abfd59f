use std::io::{self, Write};
use std::process;

use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;
use vigenere_analysis::{
    key_length_candidates, recover_key, FrequencyProfile, Vigenere, VigenereError,
    DEFAULT_LENGTH_RATIO,
};

/// Command-line arguments for the Vigenère decryptor program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,

    /// Skip the ranking and try exactly this key length
    #[arg(short, long, help = "Force a single key length instead of ranking candidates")]
    key_length: Option<usize>,

    /// Largest key length tried is the letter count divided by this ratio
    #[arg(
        short,
        long,
        help = "Ratio of text length to the largest candidate key length",
        default_value_t = DEFAULT_LENGTH_RATIO
    )]
    ratio: usize,

    /// Accept the best candidate without asking
    #[arg(short, long, help = "Accept the first candidate without confirmation")]
    auto: bool,

    /// Cipher alphabet to analyze with
    #[arg(
        long,
        help = "Cipher alphabet (german/german-eszett)",
        default_value = "german"
    )]
    alphabet: AlphabetChoice,
}

/// Enum selecting the cipher alphabet.
#[derive(Clone, Debug, ValueEnum)]
enum AlphabetChoice {
    /// 26-letter German alphabet, umlauts transliterated beforehand
    German,
    /// 27-letter German alphabet that includes ẞ
    GermanEszett,
}

impl AlphabetChoice {
    fn profile(&self) -> FrequencyProfile {
        match self {
            AlphabetChoice::German => FrequencyProfile::german(),
            AlphabetChoice::GermanEszett => FrequencyProfile::german_with_eszett(),
        }
    }
}

/// How much of a candidate decryption the operator gets to see
const PREVIEW_LENGTH: usize = 80;

fn main() {
    let cli: Cli = Cli::parse();

    println!("{}", "Vigenère decryption tool for German ciphertext".cyan());

    let input: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    let profile = cli.alphabet.profile();

    let letters = profile.alphabet().normalize(&input).chars().count();
    if letters < 50 {
        eprintln!("Warning: Text may be too short for reliable analysis");
    }

    let candidates = match candidate_lengths(&cli, &profile, &input) {
        Ok(candidates) => candidates,
        Err(error) => {
            eprintln!("{}", format!("Error: {}", error).red());
            process::exit(1);
        }
    };

    if candidates.is_empty() {
        println!("{}", "Sorry, this program cannot crack this text :(".yellow());
        process::exit(1);
    }

    let cipher = Vigenere::new(profile.alphabet().clone());

    for length in candidates {
        let key = match recover_key(&profile, &input, length) {
            Ok(key) => key,
            Err(error) => {
                eprintln!("{}", format!("Skipping key length {}: {}", length, error).red());
                continue;
            }
        };

        let decoded = match cipher.decode(&input, &key) {
            Ok(decoded) => decoded,
            Err(error) => {
                eprintln!("{}", format!("Skipping key '{}': {}", key, error).red());
                continue;
            }
        };

        println!("Found key length {} with key '{}'", length, key.as_str().green());
        println!("{}", preview(&decoded).black().on_white());

        if cli.auto || confirm_decryption() {
            std::fs::write(&cli.output, &decoded)
                .expect("Failed to write output file");
            println!(
                "Great! Key: '{}'. The decrypted text was saved to '{}'.",
                key.as_str().green(),
                cli.output.as_str().underlined()
            );
            return;
        }
    }

    println!("{}", "Sorry, this program cannot crack this text :(".yellow());
    process::exit(1);
}

/// Candidate key lengths to walk through, best guess first.
///
/// A forced length bypasses the ranking entirely; otherwise the lengths
/// come from the index of coincidence ranking at the configured ratio.
fn candidate_lengths(
    cli: &Cli,
    profile: &FrequencyProfile,
    input: &str,
) -> Result<Vec<usize>, VigenereError> {
    if let Some(length) = cli.key_length {
        if length == 0 {
            return Err(VigenereError::EmptyKey);
        }
        return Ok(vec![length]);
    }

    let candidates = key_length_candidates(profile, input, cli.ratio)?;
    Ok(candidates
        .into_iter()
        .map(|candidate| candidate.length)
        .collect())
}

/// First characters of a candidate decryption, with an ellipsis when cut.
fn preview(text: &str) -> String {
    let mut shown: String = text.chars().take(PREVIEW_LENGTH).collect();
    if text.chars().count() > PREVIEW_LENGTH {
        shown.push_str("...");
    }
    shown
}

/// Asks the operator whether the candidate reads as German clear text.
///
/// Re-prompts until the answer is exactly 'y' or 'n'; end of input counts
/// as a rejection.
fn confirm_decryption() -> bool {
    print!(
        "{} y/n: ",
        "Does this look like readable German plaintext?".underlined()
    );

    let mut answer = String::new();
    loop {
        if io::stdout().flush().is_err() {
            return false;
        }

        answer.clear();
        match io::stdin().read_line(&mut answer) {
            Ok(0) | Err(_) => return false,
            Ok(_) => match answer.trim() {
                "y" => return true,
                "n" => return false,
                _ => print!("{}", "Please answer with 'y' or 'n': ".red()),
            },
        }
    }
}
