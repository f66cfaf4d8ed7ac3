use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;

use crate::io::{read_breakend_records, ClassifiedWriter, DedupInput};
use crate::variants::classify_all;

#[derive(Debug, StructOpt, Clone)]
#[structopt(
    name = "svdedup",
    about = "Classify structural variant breakends and resolve duplicate breakend calls."
)]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
pub struct Svdedup {
    #[structopt(long, short, help = "Print debug messages.")]
    pub verbose: bool,
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt, Clone)]
pub enum Command {
    #[structopt(
        name = "classify",
        about = "Classify breakends given as TSV with columns id, chrom, pos, ref and alt. \
                 Writes id, SV type, length, orientation and canonical ALT as TSV to STDOUT."
    )]
    Classify {
        #[structopt(
            parse(from_os_str),
            long,
            help = "TSV file with breakends (if omitted, read from STDIN)."
        )]
        input: Option<PathBuf>,
        #[structopt(
            long,
            help = "Abort on breakends with malformed ALT instead of skipping them."
        )]
        strict: bool,
    },
    #[structopt(
        name = "dedup",
        about = "Resolve duplicate breakends given variants and their alternate paths as YAML. \
                 Writes duplicates and rescued variants as JSON to STDOUT."
    )]
    Dedup {
        #[structopt(
            parse(from_os_str),
            long,
            help = "YAML file with variants and alternate paths (if omitted, read from STDIN)."
        )]
        input: Option<PathBuf>,
    },
}

fn reader(path: Option<PathBuf>) -> Result<Box<dyn io::Read>> {
    Ok(match path {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    })
}

pub fn run(opt: Svdedup) -> Result<()> {
    match opt.command {
        Command::Classify { input, strict } => {
            classify(reader(input)?, io::stdout(), strict)?;
        }
        Command::Dedup { input } => {
            dedup(reader(input)?, io::stdout())?;
        }
    }
    Ok(())
}

/// Classify all breakends from the given TSV, returning the number of
/// skipped records.
pub fn classify<R: io::Read, W: io::Write>(input: R, output: W, strict: bool) -> Result<usize> {
    let records = read_breakend_records(input)?;
    let mut writer = ClassifiedWriter::new(output);
    let mut skipped = 0;

    for (record, variant) in records.iter().zip(classify_all(&records)) {
        match variant {
            Ok(variant) => writer.write(record, &variant)?,
            Err(e) if !strict => {
                warn!("Skipping breakend {}: {}", record.id(), e);
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }
    writer.flush()?;

    info!(
        "Classified {} breakends, skipped {}.",
        records.len() - skipped,
        skipped
    );
    Ok(skipped)
}

pub fn dedup<R: io::Read, W: io::Write>(input: R, mut output: W) -> Result<()> {
    let input = DedupInput::from_reader(input)?;
    let dedup = input.resolve()?;
    serde_json::to_writer_pretty(&mut output, &dedup)?;
    writeln!(output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let opt = Svdedup::from_iter(&["svdedup", "-v", "classify", "--strict"]);
        assert!(opt.verbose);
        assert!(matches!(
            opt.command,
            Command::Classify {
                input: None,
                strict: true
            }
        ));

        let opt = Svdedup::from_iter(&["svdedup", "dedup", "--input", "paths.yaml"]);
        assert!(!opt.verbose);
        match opt.command {
            Command::Dedup { input } => assert_eq!(input, Some(PathBuf::from("paths.yaml"))),
            _ => panic!("expected dedup subcommand"),
        }
    }

    #[test]
    fn test_classify_skips_malformed() {
        let tsv = "id\tchrom\tpos\tref\talt\n\
                   a\t1\t200\tA\tA[1:300[\n\
                   b\t1\t200\tA\t<DEL>\n";
        let mut out = Vec::new();
        let skipped = classify(tsv.as_bytes(), &mut out, false).unwrap();
        assert_eq!(skipped, 1);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("a\tDEL\t100\t+\tA[1:300["));
        assert!(!out.contains("\nb\t"));
    }

    #[test]
    fn test_classify_strict() {
        let tsv = "id\tchrom\tpos\tref\talt\nb\t1\t200\tA\t<DEL>\n";
        assert!(classify(tsv.as_bytes(), Vec::new(), true).is_err());
    }

    #[test]
    fn test_dedup() {
        let yaml = "
variants:
  - id: v1
    qual: 10.0
    imprecise: true
  - id: v2
    qual: 5.0
alternate_paths:
  - vcf_id: v1
    mate_id: v1m
    path:
      - link: asm1
        vcf_id: v1
        other_vcf_id: v2
";
        let mut out = Vec::new();
        dedup(yaml.as_bytes(), &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["duplicates"], serde_json::json!(["v1"]));
        assert_eq!(json["rescue"], serde_json::json!([]));
    }
}
