//! Feature-flag configuration shared by the lexer and the parser.

/// An immutable bundle of feature flags selecting which non-strict,
/// JSON5-adjacent productions the lexer and parser accept.
///
/// The default value is strict mode: every flag is `false`, which is
/// exactly the set of productions defined by ECMA-404. Each `with_*`
/// method consumes `self` and returns a new `Config` with a single flag
/// overridden, so calls can be chained in any order; flags are
/// independent of one another and last-writer-wins on repeated calls to
/// the same method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    allow_extra_ws: bool,
    allow_hex_numbers: bool,
    allow_point_edge_numbers: bool,
    allow_infinity: bool,
    allow_nan: bool,
    allow_leading_plus: bool,
    allow_unquoted: bool,
    allow_single_quotes: bool,
    allow_newline_in_strings: bool,
    allow_other_escape_chars: bool,
    allow_trailing_comma_array: bool,
    allow_trailing_comma_object: bool,
    allow_line_comments: bool,
    allow_block_comments: bool,
}

macro_rules! flag {
    ($getter:ident, $setter:ident) => {
        /// See the field of the same name in the module documentation.
        pub fn $getter(&self) -> bool {
            self.$getter
        }

        pub fn $setter(mut self, value: bool) -> Self {
            self.$getter = value;
            self
        }
    };
}

impl Config {
    /// Strict ECMA-404 configuration: every feature flag disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with every feature flag enabled, approximating
    /// acceptance of the JSON5 superset.
    pub fn json5_preset() -> Self {
        Self {
            allow_extra_ws: true,
            allow_hex_numbers: true,
            allow_point_edge_numbers: true,
            allow_infinity: true,
            allow_nan: true,
            allow_leading_plus: true,
            allow_unquoted: true,
            allow_single_quotes: true,
            allow_newline_in_strings: true,
            allow_other_escape_chars: true,
            allow_trailing_comma_array: true,
            allow_trailing_comma_object: true,
            allow_line_comments: true,
            allow_block_comments: true,
        }
    }

    flag!(allow_extra_ws, with_extra_ws);
    flag!(allow_hex_numbers, with_hex_numbers);
    flag!(allow_point_edge_numbers, with_point_edge_numbers);
    flag!(allow_infinity, with_infinity);
    flag!(allow_nan, with_nan);
    flag!(allow_leading_plus, with_leading_plus);
    flag!(allow_unquoted, with_unquoted);
    flag!(allow_single_quotes, with_single_quotes);
    flag!(allow_newline_in_strings, with_newline_in_strings);
    flag!(allow_other_escape_chars, with_other_escape_chars);
    flag!(allow_trailing_comma_array, with_trailing_comma_array);
    flag!(allow_trailing_comma_object, with_trailing_comma_object);
    flag!(allow_line_comments, with_line_comments);
    flag!(allow_block_comments, with_block_comments);
}
