use clap::{Parser, ValueEnum};
use vigenere_analysis::{FrequencyProfile, Vigenere};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Cipher alphabet to work with
    #[arg(
        short,
        long,
        help = "Cipher alphabet (german/german-eszett)",
        default_value = "german"
    )]
    alphabet: AlphabetChoice,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
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

/// Main entry point for the Vigenère cipher program.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    let cipher = Vigenere::new(cli.alphabet.profile().alphabet().clone());

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", cli.key);
            cipher.encode(&content, &cli.key)
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", cli.key);
            cipher.decode(&content, &cli.key)
        }
    };

    let result = match result {
        Ok(text) => text,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };

    // Write result to output file
    std::fs::write(&cli.output, result)
        .expect("Failed to write output file");

    println!("Operation completed successfully! Output saved to: {}", cli.output);
}
