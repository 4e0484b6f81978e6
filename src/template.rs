//! Module block template.
//!
//! Every block is the same fixed text with one substitution point: the
//! integer identifier in the header line.

use std::io::{self, Write};

use tracing::trace;

/// Everything that follows the header line of a block.
pub const TEMPLATE_BODY: &str = concat!(
    "     data true, false\n",
    "\n",
    "     namespace F:G (\n",
    "         def and =\n",
    "             [ true true -> true | _ _ -> false ]\n",
    "     )\n",
    "\n",
    "     namespace I:J (\n",
    "         def or =\n",
    "             [ false false -> true | _ _ -> true ]\n",
    "     )\n",
    "\n",
    "     def not =\n",
    "         [ false -> true | _ -> false ]\n",
    "\n",
    ")\n",
);

/// Returns the header line for module `n`, without the trailing newline.
#[must_use]
pub fn header_line(n: i64) -> String {
    format!("namespace Test{n} (")
}

/// Writes the block for module `n` to `out`.
///
/// # Errors
///
/// Returns whatever error the sink reports.
pub fn write_block<W: Write + ?Sized>(out: &mut W, n: i64) -> io::Result<()> {
    trace!(module = n, "writing block");
    writeln!(out, "{}", header_line(n))?;
    out.write_all(TEMPLATE_BODY.as_bytes())
}

/// Renders the block for module `n` into an owned string.
#[must_use]
pub fn render_block(n: i64) -> String {
    let mut block = header_line(n);
    block.push('\n');
    block.push_str(TEMPLATE_BODY);
    block
}

#[cfg(test)]
mod tests {
    use super::{header_line, render_block, write_block, TEMPLATE_BODY};

    const BLOCK_ZERO: &str = "namespace Test0 (
     data true, false

     namespace F:G (
         def and =
             [ true true -> true | _ _ -> false ]
     )

     namespace I:J (
         def or =
             [ false false -> true | _ _ -> true ]
     )

     def not =
         [ false -> true | _ -> false ]

)
";

    #[test]
    fn block_zero_matches_literal_layout() {
        assert_eq!(render_block(0), BLOCK_ZERO);
    }

    #[test]
    fn header_has_no_padding_or_sign() {
        assert_eq!(header_line(0), "namespace Test0 (");
        assert_eq!(header_line(1999), "namespace Test1999 (");
        assert_eq!(header_line(7), "namespace Test7 (");
    }

    #[test]
    fn negative_and_large_ids_are_interpolated() {
        assert_eq!(header_line(-3), "namespace Test-3 (");
        assert_eq!(header_line(i64::MAX), format!("namespace Test{} (", i64::MAX));
    }

    #[test]
    fn write_matches_render() {
        let mut out = Vec::new();
        write_block(&mut out, 42).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render_block(42));
    }

    #[test]
    fn consecutive_blocks_concatenate_without_separator() {
        let mut out = Vec::new();
        write_block(&mut out, 0).unwrap();
        write_block(&mut out, 1).unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = format!("namespace Test0 (\n{TEMPLATE_BODY}namespace Test1 (\n{TEMPLATE_BODY}");
        assert_eq!(text, expected);

        let headers: Vec<&str> = text.lines().filter(|l| l.starts_with("namespace Test")).collect();
        assert_eq!(headers, ["namespace Test0 (", "namespace Test1 ("]);
    }

    #[test]
    fn body_is_sixteen_lines() {
        assert_eq!(TEMPLATE_BODY.lines().count(), 16);
        assert!(TEMPLATE_BODY.ends_with(")\n"));
    }
}
