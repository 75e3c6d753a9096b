use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, Arg, ColorChoice, Command,
};
use texttools::transforms::TransformRegistry;

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

/// Lists the available operations grouped by kind
pub fn operations_help() -> String {
    let registry = TransformRegistry::global();
    format!(
        "Chainables:\n{}\n\nScalars:\n{}",
        registry.chainable_names().join("\n"),
        registry.scalar_names().join("\n")
    )
}

fn after_help() -> String {
    format!(
        "Example:\n\
        $ echo \"  hello world! \" | {name} \"trim->remove('!')->title_case\"\n\
        Hello world\n\n\
        Operations\n{operations}\n",
        name = crate_name!(),
        operations = operations_help()
    )
}

// Builds the application command line interface defining the arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .after_long_help(after_help())
    .arg(
        Arg::new("command")
        .value_name("COMMAND")
        .required_unless_present("list")
        .help("The command to perform on the text: operation[->operation...]")
        .long_help(
            "The chain of operations to apply, e.g. \"trim->remove('!')->title_case\". \
                    The first operation can be any operation, the following ones must be chainable. \
                    The name of an alias defined in the configuration file is also accepted.",
        ),
    )
    .arg(
        Arg::new("infile")
        .value_name("INFILE")
        .help("File source for the text to transform, default is stdin"),
    )
    .arg(
        Arg::new("outfile")
        .value_name("OUTFILE")
        .help("File destination for result, default is stdout"),
    )
    .arg(
        arg!(-m --multiline "Apply multiline mode to command")
        .long_help("Applies every operation to each line of the text independently."),
    )
    .arg(
        arg!(-w --word "Apply word mode to all transforms where it is applicable")
        .long_help(
            "Makes word aware operations (e.g. sort, reverse) work on space delimited words \
                    instead of characters. Same as passing \"w\" to each of them.",
        ),
    )
    .arg(
        arg!(-v --verbose "Display information about running command")
    )
    .arg(
        arg!(-n --"no-newline" "Supress new line after the result.")
        .long_help("Prevents writing a trailing newline after the transformed text.")
    )
    .arg(
        arg!(-l --list "List the available operations.")
        .long_help("Displays the chainable and scalar operations that can be used in commands.")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_definition() {
        build_app(false).debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let matches = build_app(false)
            .try_get_matches_from(["texttools", "-m", "trim->sort", "in.txt", "out.txt"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("command").map(String::as_str),
            Some("trim->sort")
        );
        assert_eq!(
            matches.get_one::<String>("infile").map(String::as_str),
            Some("in.txt")
        );
        assert_eq!(
            matches.get_one::<String>("outfile").map(String::as_str),
            Some("out.txt")
        );
        assert!(matches.get_flag("multiline"));
        assert!(!matches.get_flag("word"));
    }

    #[test]
    fn test_command_required_unless_listing() {
        assert!(build_app(false).try_get_matches_from(["texttools"]).is_err());
        let matches = build_app(false)
            .try_get_matches_from(["texttools", "--list"])
            .unwrap();
        assert!(matches.get_flag("list"));
    }

    #[test]
    fn test_operations_help() {
        let help = operations_help();
        assert!(help.starts_with("Chainables:\nrot13\n"));
        assert!(help.contains("Scalars:\ncount_words\ncount_lines\ncount_characters"));
    }
}
