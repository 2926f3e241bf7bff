use super::Selection;
use crate::value::Value;
use std::fmt::{self, Display, Write};

fn write_literal(value: &Value, buffer: &mut impl Write) -> fmt::Result {
    match value {
        Value::I16(i) => write!(buffer, "{}", i),
        Value::I32(i) => write!(buffer, "{}", i),
        Value::I64(i) => write!(buffer, "{}", i),
        Value::F64(f) => write!(buffer, "{}", f),
        Value::Bool(b) => buffer.write_str(if *b { "true" } else { "false" }),
        Value::String(s) => {
            buffer.write_char('\'')?;
            for c in s.chars() {
                match c {
                    '\'' => buffer.write_str("''")?, // SQL-standard quote escaping
                    '\0' => continue,
                    _ => buffer.write_char(c)?,
                }
            }
            buffer.write_char('\'')
        }
    }
}

fn write_selection(selection: &Selection, buffer: &mut impl Write) -> fmt::Result {
    match selection {
        Selection::True => buffer.write_str("TRUE"),
        Selection::Comparison { field, operator, value } => {
            buffer.write_str(field)?;
            buffer.write_char(' ')?;
            buffer.write_str(operator.as_sql())?;
            buffer.write_char(' ')?;
            write_literal(value, buffer)
        }
        Selection::And(left, right) => {
            write_and_operand(left, buffer)?;
            buffer.write_str(" AND ")?;
            write_and_operand(right, buffer)
        }
        Selection::Or(left, right) => {
            write_selection(left, buffer)?;
            buffer.write_str(" OR ")?;
            write_selection(right, buffer)
        }
    }
}

// An OR under an AND needs parentheses to read as the fold evaluates it
fn write_and_operand(selection: &Selection, buffer: &mut impl Write) -> fmt::Result {
    if let Selection::Or(..) = selection {
        buffer.write_char('(')?;
        write_selection(selection, buffer)?;
        buffer.write_char(')')
    } else {
        write_selection(selection, buffer)
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write_selection(self, f) }
}
