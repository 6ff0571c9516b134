use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use witchify::config::Config;
use witchify::editor::{self, TextBuffer};
use witchify::glyphs::GlyphTable;
use witchify::intercept::{Options, activate};
use witchify::logging::init_logger;

/// Witchify
///
/// Type or paste text and watch it turn into glitchy look-alike letters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Use this configuration file instead of the default one
    #[arg(long, short, global = true, env = "WITCHIFY_CONFIG")]
    config: Option<PathBuf>,

    /// Keep the first glyph picked for each character
    #[arg(long, global = true)]
    no_randomize: bool,

    /// Seed the random source for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Always use GLYPH for KEY when not randomizing
    #[arg(long, short, global = true, value_name = "KEY=GLYPH")]
    dictionary: Vec<String>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Type into an interactive editor (the default)
    Edit,

    /// Translate text given as arguments or on standard input
    Translate {
        /// The text to translate
        text: Vec<String>,
    },

    /// Show the glyphs available for a character, or for all of them
    Glyphs {
        character: Option<char>,
    },
}

impl Cli {
    fn options(&self) -> anyhow::Result<Options> {
        let mut config = Config::load(self.config.as_deref()).context("loading configuration")?;
        if self.no_randomize {
            config.randomize = false;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        for entry in &self.dictionary {
            config.add_dictionary_entry(entry)?;
        }
        Ok(config.into_options()?)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_file.as_deref()).context("opening log file")?;
    let options = cli.options()?;
    let table = GlyphTable::builtin();

    match &cli.command {
        None | Some(Command::Edit) => edit(table, &options),
        Some(Command::Translate { text }) => translate(table, &options, text),
        Some(Command::Glyphs { character }) => {
            show_glyphs(table, *character);
            Ok(())
        }
    }
}

fn edit(table: &GlyphTable, options: &Options) -> anyhow::Result<()> {
    if !io::stdin().is_terminal() {
        anyhow::bail!("the editor needs a terminal; use `witchify translate` for piped input");
    }
    let activation = activate([TextBuffer::new()], table, options).remove(0);
    let text = editor::run(activation).context("running editor")?;
    println!("{text}");
    Ok(())
}

fn translate(table: &GlyphTable, options: &Options, text: &[String]) -> anyhow::Result<()> {
    let input = if text.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).context("reading standard input")?;
        input
    } else {
        text.join(" ")
    };

    let mut translator = options.translator(table, 0);
    let output = translator.translate_text(&input, &options.translator_config());
    if text.is_empty() {
        print!("{output}");
    } else {
        println!("{output}");
    }
    Ok(())
}

fn show_glyphs(table: &GlyphTable, character: Option<char>) {
    match character {
        Some(ch) => match table.lookup(ch) {
            Some(glyphs) => println!("{}", format_glyphs(glyphs)),
            None => println!("no glyphs for {ch:?}, it is kept as {:?}", ch.to_uppercase().collect::<String>()),
        },
        None => {
            for (key, glyphs) in table.entries() {
                println!("{key}  {}", format_glyphs(glyphs));
            }
        }
    }
}

fn format_glyphs(glyphs: &[&str]) -> String {
    glyphs.iter().map(|glyph| if glyph.is_empty() { "(strip)" } else { *glyph }).collect::<Vec<_>>().join(" ")
}
