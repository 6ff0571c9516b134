use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, io};

/// Set up logging.
///
/// Logs go to standard error unless a file is given; the editor owns the terminal, so anything
/// written there while it runs would end up mixed into the text.
pub fn init_logger(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = Builder::new();
    builder.format(|formatter, record| {
        writeln!(
            formatter,
            "{} [{}] ({}): {}",
            formatter.timestamp_seconds(),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else {
        // if no RUST_LOG provided, only report problems
        builder.filter(None, LevelFilter::Warn);
    }

    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
