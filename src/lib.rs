//! Wordlist Passphrase
//!
//! Generates passphrases by drawing words uniformly at random, from the operating system's
//! secure random source, out of a plain or EFF dice wordlist.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::num::NonZeroUsize;
//! use wordlist_passphrase::commands::{GenerateConfig, generate_passphrase};
//! use wordlist_passphrase::core::WordlistFormat;
//! use wordlist_passphrase::wordlists::loader::load_from_file;
//!
//! let wordlist = load_from_file("eff_large_wordlist.txt", WordlistFormat::DicelistEff).unwrap();
//! let config = GenerateConfig::new(NonZeroUsize::new(6).unwrap());
//! let result = generate_passphrase(&config, &wordlist, &mut rand::rng()).unwrap();
//! println!("{}", result.passphrase);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Command line options and the generation run
pub mod cli;
