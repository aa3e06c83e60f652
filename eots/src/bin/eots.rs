//! Command-line front end for generating keys, signing, verifying and
//! extracting keys from nonce reuse. All values are exchanged as hex.

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use eots::{EotsError, Nonce, extract, generate_key_pair, hash_message, hex};
use tracing::{error, info};

const VERBOSE_FLAG: &str = "verbose";

const KEYGEN_CMD: &str = "keygen";
const NONCE_CMD: &str = "nonce";
const HASH_CMD: &str = "hash";
const SIGN_CMD: &str = "sign";
const VERIFY_CMD: &str = "verify";
const EXTRACT_CMD: &str = "extract";

fn hex_arg(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id).long(id).required(true).help(help)
}

fn main() -> ExitCode {
    let matches = Command::new("eots")
        .about("Extractable one-time signatures over secp256k1")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg(
            Arg::new(VERBOSE_FLAG)
                .short('v')
                .long(VERBOSE_FLAG)
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new(KEYGEN_CMD).about("Generate a private/public key pair"))
        .subcommand(Command::new(NONCE_CMD).about("Generate a random nonce"))
        .subcommand(
            Command::new(HASH_CMD)
                .about("SHA-256 digest of a message")
                .arg(
                    Arg::new("message")
                        .long("message")
                        .required(true)
                        .help("Message text to hash"),
                ),
        )
        .subcommand(
            Command::new(SIGN_CMD)
                .about("Sign a digest")
                .arg(hex_arg("key", "Private key (64 hex characters)"))
                .arg(hex_arg("digest", "Message digest (64 hex characters)"))
                .arg(
                    Arg::new("nonce")
                        .long("nonce")
                        .required(false)
                        .help("Explicit nonce (64 hex characters); derived from key and digest if omitted"),
                ),
        )
        .subcommand(
            Command::new(VERIFY_CMD)
                .about("Verify a signature")
                .arg(hex_arg("public-key", "Compressed public key (66 hex characters)"))
                .arg(hex_arg("digest", "Message digest (64 hex characters)"))
                .arg(hex_arg("r", "Signature r (64 hex characters)"))
                .arg(hex_arg("s", "Signature s (64 hex characters)")),
        )
        .subcommand(
            Command::new(EXTRACT_CMD)
                .about("Recover a private key from two signatures sharing a nonce")
                .arg(hex_arg("r1", "First signature r"))
                .arg(hex_arg("s1", "First signature s"))
                .arg(hex_arg("digest1", "First digest"))
                .arg(hex_arg("r2", "Second signature r"))
                .arg(hex_arg("s2", "Second signature s"))
                .arg(hex_arg("digest2", "Second digest")),
        )
        .get_matches();

    // Create logger
    let level = if matches.get_flag(VERBOSE_FLAG) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match matches.subcommand() {
        Some((KEYGEN_CMD, _)) => keygen(),
        Some((NONCE_CMD, _)) => nonce(),
        Some((HASH_CMD, matches)) => hash(matches),
        Some((SIGN_CMD, matches)) => sign(matches),
        Some((VERIFY_CMD, matches)) => verify(matches),
        Some((EXTRACT_CMD, matches)) => extract_key(matches),
        _ => Ok(ExitCode::FAILURE),
    };
    match result {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

/// Required arguments are enforced by clap before handlers run.
fn value<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}

fn keygen() -> Result<ExitCode, EotsError> {
    let (sk, pk) = generate_key_pair(&mut rand::rng());
    println!("private key: {}", hex::encode(&sk.to_bytes()));
    println!("public key:  {}", hex::encode(&pk.to_bytes()));
    Ok(ExitCode::SUCCESS)
}

fn nonce() -> Result<ExitCode, EotsError> {
    let nonce = Nonce::random(&mut rand::rng());
    println!("{}", hex::encode(nonce.as_bytes()));
    Ok(ExitCode::SUCCESS)
}

fn hash(matches: &ArgMatches) -> Result<ExitCode, EotsError> {
    let digest = hash_message(value(matches, "message").as_bytes());
    println!("{}", hex::encode(digest.as_bytes()));
    Ok(ExitCode::SUCCESS)
}

fn sign(matches: &ArgMatches) -> Result<ExitCode, EotsError> {
    let sk = hex::signing_key(value(matches, "key"))?;
    let digest = hex::digest(value(matches, "digest"))?;
    let nonce = matches
        .get_one::<String>("nonce")
        .map(|text| hex::nonce(text))
        .transpose()?;

    let sig = sk.sign(&digest, nonce.as_ref())?;
    println!("r: {}", hex::encode(&sig.r));
    println!("s: {}", hex::encode(&sig.s));
    Ok(ExitCode::SUCCESS)
}

fn verify(matches: &ArgMatches) -> Result<ExitCode, EotsError> {
    let pk = hex::verifying_key(value(matches, "public-key"))?;
    let digest = hex::digest(value(matches, "digest"))?;
    let sig = hex::signature(value(matches, "r"), value(matches, "s"))?;

    if pk.verify(&digest, &sig) {
        println!("valid");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("invalid");
        Ok(ExitCode::FAILURE)
    }
}

fn extract_key(matches: &ArgMatches) -> Result<ExitCode, EotsError> {
    let sig1 = eots::Signature::new(
        hex::decode("r1", value(matches, "r1"))?,
        hex::decode("s1", value(matches, "s1"))?,
    );
    let sig2 = eots::Signature::new(
        hex::decode("r2", value(matches, "r2"))?,
        hex::decode("s2", value(matches, "s2"))?,
    );
    let digest1 = hex::digest(value(matches, "digest1"))?;
    let digest2 = hex::digest(value(matches, "digest2"))?;

    let sk = extract(&sig1, &sig2, &digest1, &digest2)?;
    info!("nonce reuse detected");
    println!("private key: {}", hex::encode(&sk.to_bytes()));
    println!("public key:  {}", hex::encode(&sk.verifying_key().to_bytes()));
    Ok(ExitCode::SUCCESS)
}
