use std::fs;
use std::io::{IsTerminal, Read, Write};
use std::path::PathBuf;

use crate::{bootstrap::BootStrap, clap_app};
use clap::ArgMatches;
use nu_ansi_term::Color::Yellow;
use texttools::{
    command,
    config::MainConfig,
    debug,
    error::*,
    processor::{Options, TextProcessor},
    transforms::TransformRegistry,
    validator::validate,
};

pub struct App {
    pub matches: ArgMatches,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Builds the execution options from the configured defaults,
    /// switching on the modes requested in the command line.
    fn build_options(&self, config: &MainConfig) -> Options {
        let defaults = config.options();
        Options {
            multiline: defaults.multiline || self.matches.get_flag("multiline"),
            word_mode: defaults.word_mode || self.matches.get_flag("word"),
        }
    }

    /// Expands `~` and environment variables in a path supplied in the command line
    fn expand_path(&self, id: &str) -> Result<Option<PathBuf>> {
        match self.matches.get_one::<String>(id) {
            Some(path) => shellexpand::full(path)
                .map(|p| Some(PathBuf::from(p.as_ref())))
                .map_err(|e| Error::InterpolationError {
                    cause: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Reads the whole input text from the input file or stdin
    fn read_input(&self) -> Result<String> {
        let text = match self.expand_path("infile")? {
            Some(path) => fs::read_to_string(&path).map_err(|e| {
                Error::ArgsProcessingError(format!(
                    "unable to read input file \"{}\" : {}",
                    path.to_string_lossy(),
                    e
                ))
            })?,
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            }
        };
        Ok(normalize_input(&text))
    }

    /// Writes the result to the output file or stdout
    fn write_output(&self, result: &str, trailing_newline: bool) -> Result<()> {
        let newline = if trailing_newline { "\n" } else { "" };
        match self.expand_path("outfile")? {
            Some(path) => fs::write(&path, format!("{}{}", result, newline)).map_err(|e| {
                Error::ArgsProcessingError(format!(
                    "unable to write output file \"{}\" : {}",
                    path.to_string_lossy(),
                    e
                ))
            }),
            None => {
                let mut stdout = std::io::stdout().lock();
                write!(stdout, "{}{}", result, newline)?;
                stdout.flush()?;
                Ok(())
            }
        }
    }

    /// Start the application, loads the configuration and runs the command over the input text.
    ///
    /// # Errors
    /// The first error raised while loading the configuration, reading the input,
    /// running the command or writing the result
    pub fn start(&self) -> Result<()> {
        if self.matches.get_flag("list") {
            println!("{}", clap_app::operations_help());
            return Ok(());
        }

        let bootstrap = BootStrap::new()?;
        let config = bootstrap.get_config();

        let command = self
            .matches
            .get_one::<String>("command")
            .map(|c| config.resolve_command(c))
            .ok_or_else(|| Error::ArgsProcessingError("Missing command".to_string()))?;
        let options = self.build_options(config);

        if self.matches.get_flag("verbose") {
            eprintln!(
                "{}",
                Yellow.paint(format!(
                    "Running: '{}' multiline: {} word mode: {}",
                    command, options.multiline, options.word_mode
                ))
            );
        }

        let operations = command::parse(command)?;
        debug!("Parsed operations: {:?}", operations);
        let steps = validate(&operations, TransformRegistry::global())?;
        debug!(
            "Resolved steps: {}",
            steps
                .iter()
                .map(|s| format!("{} ({})", s.operation, s.kind))
                .collect::<Vec<String>>()
                .join(" -> ")
        );

        let text = self.read_input()?;
        let result = TextProcessor::new(options).process(&text, &steps)?;

        let trailing_newline =
            config.defaults.trailing_newline && !self.matches.get_flag("no-newline");
        self.write_output(&result, trailing_newline)
    }
}

/// Turns `\r\n` line endings into `\n` and drops a single trailing line ending,
/// which is added back when writing the result
fn normalize_input(text: &str) -> String {
    let mut text = text.replace("\r\n", "\n");
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use texttools::processor::run_command;

    #[test]
    fn test_normalize_input_line_endings() {
        assert_eq!(normalize_input("b a\r\nd c\r\n"), "b a\nd c");
        assert_eq!(normalize_input("one\ntwo\n"), "one\ntwo");
        assert_eq!(normalize_input("one\n\n"), "one\n");
        assert_eq!(normalize_input("lone\rcarriage"), "lone\rcarriage");
        assert_eq!(normalize_input(""), "");
    }

    #[test]
    fn test_crlf_input_in_multiline_word_mode() {
        let options = Options {
            multiline: true,
            word_mode: false,
        };
        let text = normalize_input("b a\r\nd c\r\n");
        assert_eq!(run_command(&text, "sort(w)", &options).unwrap(), "a b\nc d");
    }
}
