use clap::{ArgAction, Parser};
use renshuu::{
    DocumentRenderer, FilesystemFontSource, PipelineError, RecordingRenderer, WorksheetBuilder,
};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Generate a handwriting practice worksheet (PDF) for a set of characters.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TrueType or OpenType font to draw the characters with
    #[arg(long, value_name = "FILE")]
    font: PathBuf,

    /// Paper preset
    #[arg(long, default_value = "letter")]
    paper: String,

    /// Where to write the PDF [default: renshuu-out.pdf]
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Only read the font tables needed to name the font; `false` also counts glyphs
    #[arg(long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    low_memory: bool,

    /// Read characters from a text file; whitespace is ignored
    #[arg(long, value_name = "FILE", conflicts_with = "characters")]
    chars_file: Option<PathBuf>,

    /// Lay out and count pages without writing a PDF
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Characters to practise; every character of every argument gets a block
    characters: Vec<String>,
}

/// Splits the input into one entry per Unicode scalar value, dropping
/// whitespace.
fn split_characters<'a>(inputs: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    inputs
        .into_iter()
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .map(String::from)
        .collect()
}

fn glyph_summary(glyph_count: Option<u16>) -> String {
    glyph_count
        .map(|count| format!(", {} glyphs", count))
        .unwrap_or_default()
}

fn main() -> Result<(), PipelineError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "renshuu=info");
        }
    }
    env_logger::init();

    let args = Args::parse();

    let characters = match &args.chars_file {
        Some(path) => split_characters([fs::read_to_string(path)?.as_str()]),
        None => split_characters(args.characters.iter().map(String::as_str)),
    };
    if characters.is_empty() {
        log::warn!("No characters given; the worksheet will be a single blank page");
    }

    let generator = WorksheetBuilder::new()
        .with_paper_name(&args.paper)?
        .with_low_memory(args.low_memory)
        .build()?;
    let font = FilesystemFontSource::new(&args.font);

    if args.dry_run {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let descriptor = rt.block_on(generator.load_font(&font))?;
        let mut renderer = RecordingRenderer::new();
        let report = generator.assemble(&descriptor, &characters, &mut renderer)?;
        println!(
            "{} character(s), {} page(s), {} drawing call(s), font '{}'{}",
            report.characters,
            renderer.page_count(),
            renderer.calls().len(),
            report.font_name,
            glyph_summary(report.glyph_count)
        );
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(generator.output_name()));
    let report = generator.generate_to_file(&font, &characters, &output)?;

    println!(
        "Wrote {} ({} character(s), {} page(s), font '{}'{})",
        output.display(),
        report.characters,
        report.pages,
        report.font_name,
        glyph_summary(report.glyph_count)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_arguments_into_scalars() {
        assert_eq!(split_characters(["あい", "字"]), vec!["あ", "い", "字"]);
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(split_characters(["a b\n\tc "]), vec!["a", "b", "c"]);
        assert!(split_characters(["  \n"]).is_empty());
    }

    #[test]
    fn cli_rejects_characters_with_chars_file() {
        let parsed = Args::try_parse_from([
            "renshuu", "--font", "f.ttf", "--chars-file", "c.txt", "あ",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn cli_defaults() {
        let args = Args::try_parse_from(["renshuu", "--font", "f.ttf", "あい"]).unwrap();
        assert_eq!(args.paper, "letter");
        assert!(args.output.is_none());
        assert!(args.low_memory);
        assert_eq!(args.characters, vec!["あい"]);
    }

    #[test]
    fn cli_can_turn_off_low_memory() {
        let args =
            Args::try_parse_from(["renshuu", "--font", "f.ttf", "--low-memory", "false", "あ"])
                .unwrap();
        assert!(!args.low_memory);
        assert_eq!(glyph_summary(Some(42)), ", 42 glyphs");
        assert_eq!(glyph_summary(None), "");
    }
}
