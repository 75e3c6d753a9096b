//! Module for shared constants used across the codebase

/// Command string grammar
pub mod command {
    /// Delimiter between chained operations
    pub const CHAIN_SYMBOL: &str = "->";

    /// Pattern matched at the start of every chain segment.
    /// Captures: 1=operation name, 2=raw argument list
    pub const OPERATION_PATTERN: &str = r"^(\w+)(?:\((.*)\))*";

    /// Separator between raw arguments
    pub const ARGUMENT_SEPARATOR: char = ',';

    /// Separator between the name and value of a named argument
    pub const NAMED_ARGUMENT_SEPARATOR: char = '=';
}

/// Word mode shortcut
pub mod word_mode {
    /// Parameter declared by operations able to work on words
    pub const PARAM: &str = "operate_on_word";

    /// Positional token standing for `operate_on_word=True`
    pub const TOKEN: &str = "w";

    /// Delimiter between words when operating on words
    pub const WORD_DELIMITER: &str = " ";
}

pub mod config {
    /// Default configuration file name
    pub const DEFAULT_CONF_FILE: &str = "texttools.toml";

    /// Contents of the configuration file created on first run
    pub const DEFAULT_CONF: &str = "# File automatically generated on ${date}\n\
                                [defaults]\n\
                                multiline        = false\n\
                                word_mode        = false\n\
                                trailing_newline = true\n\n\
                                [aliases]\n\
                                shout = \"trim->upper_case->add_after('!')\"\n";
}
