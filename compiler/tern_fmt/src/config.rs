//! Formatter configuration.
//!
//! Option values arrive already parsed from an outer configuration layer.
//! Every option has exactly one meaning; an unrecognised spelling is an
//! error, never a silent fallback to the default.

use std::fmt;
use std::str::FromStr;

use tern_doc::RenderOptions;

use crate::ConfigError;

/// Default maximum line width.
pub const DEFAULT_PRINT_WIDTH: usize = 80;

/// Default spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Configuration for the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "kebab-case")
)]
#[allow(
    clippy::struct_excessive_bools,
    reason = "each bool is an independent on/off formatting option"
)]
pub struct FormatConfig {
    /// Maximum line width before groups break.
    pub print_width: usize,

    /// Indentation size in spaces.
    pub indent_width: usize,

    /// When trailing commas are printed in broken lists.
    pub trailing_comma: TrailingComma,

    /// Where the opening brace of a block goes.
    pub brace_style: BraceStyle,

    /// Print single-statement `get`/`set` bodies as `{ stmt }` when the
    /// accessor is short enough.
    pub accessor_one_line: bool,

    /// Reorder class members by visibility.
    pub class_member_order: ClassMemberOrder,

    /// Pack all-numeric arrays many-per-line instead of one-per-line.
    pub concise_arrays: bool,

    /// Keep the source's row breaks in concise arrays that form a grid.
    pub matrix_arrays: bool,

    /// Keep blank lines after `{` and before `}` of blocks.
    pub preserve_blank_lines: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            print_width: DEFAULT_PRINT_WIDTH,
            indent_width: DEFAULT_INDENT_WIDTH,
            trailing_comma: TrailingComma::Es5,
            brace_style: BraceStyle::Default,
            accessor_one_line: false,
            class_member_order: ClassMemberOrder::None,
            concise_arrays: true,
            matrix_arrays: false,
            preserve_blank_lines: false,
        }
    }
}

impl FormatConfig {
    /// Create a new config with the specified print width.
    pub fn with_print_width(print_width: usize) -> Self {
        Self {
            print_width,
            ..Default::default()
        }
    }

    /// Check the numeric options.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.print_width == 0 {
            return Err(ConfigError::ZeroWidth {
                option: "print-width",
            });
        }
        if self.indent_width == 0 {
            return Err(ConfigError::ZeroWidth {
                option: "indent-width",
            });
        }
        Ok(())
    }

    /// Set an option from its kebab-case name and textual value.
    pub fn set(&mut self, option: &str, value: &str) -> Result<(), ConfigError> {
        match option {
            "print-width" => self.print_width = parse_number("print-width", value)?,
            "indent-width" => self.indent_width = parse_number("indent-width", value)?,
            "trailing-comma" => self.trailing_comma = value.parse()?,
            "brace-style" => self.brace_style = value.parse()?,
            "accessor-one-line" => self.accessor_one_line = parse_bool("accessor-one-line", value)?,
            "class-member-order" => self.class_member_order = value.parse()?,
            "concise-arrays" => self.concise_arrays = parse_bool("concise-arrays", value)?,
            "matrix-arrays" => self.matrix_arrays = parse_bool("matrix-arrays", value)?,
            "preserve-blank-lines" => self.preserve_blank_lines = parse_bool("preserve-blank-lines", value)?,
            _ => {
                return Err(ConfigError::UnknownOption {
                    option: option.to_owned(),
                })
            }
        }
        Ok(())
    }

    /// Parameters for the document renderer.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_width: self.print_width,
            indent_width: self.indent_width,
        }
    }
}

fn parse_number(option: &'static str, value: &str) -> Result<usize, ConfigError> {
    value.parse().map_err(|_| ConfigError::UnknownValue {
        option,
        value: value.to_owned(),
        expected: "a non-negative integer",
    })
}

fn parse_bool(option: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::UnknownValue {
            option,
            value: value.to_owned(),
            expected: "true or false",
        }),
    }
}

/// Defines a config enum together with its kebab-case spellings.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $option:literal {
            $($(#[$vmeta:meta])* $variant:ident => $spelling:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(rename_all = "kebab-case")
        )]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $spelling),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ConfigError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($spelling => Ok($name::$variant),)+
                    _ => Err(ConfigError::UnknownValue {
                        option: $option,
                        value: value.to_owned(),
                        expected: concat!("one of:", $(" ", $spelling),+),
                    }),
                }
            }
        }
    };
}

option_enum! {
    /// Trailing comma behavior for broken lists.
    TrailingComma, "trailing-comma" {
        /// Never print trailing commas (except where the language requires one).
        None => "none",
        /// Trailing commas in array/object literals.
        Es5 => "es5",
        /// Also in parameter lists.
        All => "all",
    }
}

impl TrailingComma {
    /// Whether array and object literals get a trailing comma when broken.
    #[inline]
    pub fn in_literals(self) -> bool {
        !matches!(self, TrailingComma::None)
    }

    /// Whether parameter lists get a trailing comma when broken.
    #[inline]
    pub fn in_parameters(self) -> bool {
        matches!(self, TrailingComma::All)
    }
}

option_enum! {
    /// Placement of a block's opening brace.
    BraceStyle, "brace-style" {
        /// `if (x) {`
        Default => "default",
        /// Opening brace on its own line.
        Allman => "allman",
    }
}

option_enum! {
    /// Visibility-based ordering of class members.
    ClassMemberOrder, "class-member-order" {
        /// Keep source order.
        None => "none",
        /// `#private` members before public ones.
        PrivateFirst => "private-first",
        /// Public members before `#private` ones.
        PrivateLast => "private-last",
    }
}
