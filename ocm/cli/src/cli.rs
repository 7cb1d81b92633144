//! Command line definition and dispatch.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, CanonicalizeOptions};
use crate::document::DocumentKind;
use crate::error::CliError;
use crate::input::Input;

/// Decode, canonicalize and inspect OpenShift Cluster Manager model documents
#[derive(Parser, Debug)]
#[command(name = "ocm-model")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the document kinds accepted by --kind
    Kinds,

    /// Decode a document and write its canonical JSON encoding
    Canonicalize {
        /// Model type of the document (see `ocm-model kinds`)
        #[arg(short, long, value_name = "KIND")]
        kind: DocumentKind,

        /// The input is a JSON array of documents
        #[arg(long)]
        list: bool,

        /// Indent the output
        #[arg(long, env = "OCM_MODEL_PRETTY")]
        pretty: bool,

        /// Input file, stdin when missing or "-"
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Decode a document and show its identity and attributes
    Inspect {
        /// Model type of the document (see `ocm-model kinds`)
        #[arg(short, long, value_name = "KIND")]
        kind: DocumentKind,

        /// Input file, stdin when missing or "-"
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}

/// Runs the selected command and returns what it prints.
pub fn run(command: Commands) -> Result<String, CliError> {
    match command {
        Commands::Kinds => Ok(commands::render_kinds()),
        Commands::Canonicalize {
            kind,
            list,
            pretty,
            file,
        } => {
            let source = Input::from_arg(file).open()?;
            commands::canonicalize(kind, source, CanonicalizeOptions { list, pretty })
        }
        Commands::Inspect { kind, file } => {
            let source = Input::from_arg(file).open()?;
            Ok(commands::inspect(kind, source)?.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_canonicalize() {
        let cli = Cli::try_parse_from([
            "ocm-model",
            "-vv",
            "canonicalize",
            "--kind",
            "machine_pool",
            "--list",
            "pools.json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Canonicalize {
                kind, list, file, ..
            } => {
                assert_eq!(kind, DocumentKind::MachinePool);
                assert!(list);
                assert_eq!(file, Some(PathBuf::from("pools.json")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = Cli::try_parse_from(["ocm-model", "inspect", "--kind", "spaceship"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn runs_against_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id":"us-east-1","kind":"CloudRegion","display_name":"N. Virginia"}}"#)
            .unwrap();

        let out = run(Commands::Canonicalize {
            kind: DocumentKind::CloudRegion,
            list: false,
            pretty: false,
            file: Some(file.path().to_path_buf()),
        })
        .unwrap();

        assert_eq!(
            out,
            r#"{"kind":"CloudRegion","id":"us-east-1","display_name":"N. Virginia"}"#
        );
    }

    #[test]
    fn missing_file_fails() {
        let err = run(Commands::Inspect {
            kind: DocumentKind::Cluster,
            file: Some(PathBuf::from("/nonexistent/cluster.json")),
        })
        .unwrap_err();
        assert!(matches!(err, CliError::Open { .. }));
    }
}
