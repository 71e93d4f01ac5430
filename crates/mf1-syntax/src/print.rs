//! Print a tree back to MF1 source.
//!
//! The output re-parses to the same tree (ignoring spans). Literal text is
//! re-quoted: apostrophes are doubled and runs of `{`, `}`, `<` and `#` are
//! wrapped in a single quoted span.

use crate::{
    ArgName, DateField, DateTimeFormatOptions, DateTimeStyle, Node, NodeKind, NumberFormatOptions,
    SKELETON_SYMBOLS,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    #[error("cannot print {0} node")]
    Invalid(&'static str),
    #[error("number argument `{name}` subtracts {subtract} outside a plural over `{name}`")]
    DetachedSubtract { name: String, subtract: u64 },
    #[error("number options of `{0}` have no MF1 style")]
    NumberStyle(String),
    #[error("date/time options of `{0}` are neither a style nor a skeleton")]
    DateTime(String),
}

/// Serialize a tree to MF1 source.
pub fn to_source(node: &Node) -> Result<String, PrintError> {
    let mut printer = Printer::default();
    printer.node(node, None)?;
    Ok(printer.out)
}

/// The plural whose count `#` stands for.
#[derive(Clone, Copy)]
struct HashContext<'a> {
    name: &'a ArgName,
    subtract: u64,
}

#[derive(Default)]
struct Printer {
    out: String,
}

impl Printer {
    fn node(&mut self, node: &Node, hash: Option<HashContext<'_>>) -> Result<(), PrintError> {
        match &node.kind {
            NodeKind::Text { value } => self.text(value),
            NodeKind::Concat { nodes } => {
                for node in nodes {
                    self.node(node, hash)?;
                }
            }
            NodeKind::StringArg { name } => {
                self.out.push_str(&format!("{{{}}}", name));
            }
            NodeKind::NumberArg {
                name,
                options,
                subtract,
            } => {
                let is_hash = hash.is_some_and(|ctx| ctx.name == name && ctx.subtract == *subtract);
                if is_hash && options.is_default() {
                    self.out.push('#');
                } else if *subtract != 0 {
                    return Err(PrintError::DetachedSubtract {
                        name: name.to_string(),
                        subtract: *subtract,
                    });
                } else {
                    match number_style(name, options)? {
                        Some(style) => self.out.push_str(&format!("{{{}, number, {}}}", name, style)),
                        None => self.out.push_str(&format!("{{{}, number}}", name)),
                    }
                }
            }
            NodeKind::DateTimeArg { name, options } => self.date_time(name, options)?,
            NodeKind::Plural {
                name,
                subtract,
                branches,
                fallback,
            } => {
                let ctx = HashContext {
                    name,
                    subtract: *subtract,
                };
                self.out.push_str(&format!("{{{}, plural,", name));
                if *subtract != 0 {
                    self.out.push_str(&format!(" offset:{}", subtract));
                }
                for branch in branches {
                    self.out.push_str(&format!(" {} {{", branch.selector));
                    self.node(&branch.message, Some(ctx))?;
                    self.out.push('}');
                }
                self.out.push_str(" other {");
                self.node(fallback, Some(ctx))?;
                self.out.push_str("}}");
            }
            NodeKind::Element { name, message } => match message {
                None => self.out.push_str(&format!("<{}/>", name)),
                Some(message) => {
                    self.out.push_str(&format!("<{}>", name));
                    self.node(message, hash)?;
                    self.out.push_str(&format!("</{}>", name));
                }
            },
            NodeKind::InvalidArg { .. } => return Err(PrintError::Invalid("an invalid argument")),
            NodeKind::InvalidPlural { .. } => return Err(PrintError::Invalid("an invalid plural")),
            NodeKind::InvalidElement { .. } => {
                return Err(PrintError::Invalid("an invalid element"));
            }
        }
        Ok(())
    }

    fn text(&mut self, value: &str) {
        let mut quoted = false;
        for ch in value.chars() {
            match ch {
                '\'' => self.out.push_str("''"),
                '{' | '}' | '<' | '#' => {
                    if !quoted {
                        self.out.push('\'');
                        quoted = true;
                    }
                    self.out.push(ch);
                }
                _ => {
                    if quoted {
                        self.out.push('\'');
                        quoted = false;
                    }
                    self.out.push(ch);
                }
            }
        }
        if quoted {
            self.out.push('\'');
        }
    }

    fn date_time(&mut self, name: &ArgName, options: &DateTimeFormatOptions) -> Result<(), PrintError> {
        let fields_only = DateTimeFormatOptions {
            date_style: None,
            time_style: None,
            ..options.clone()
        };
        let has_fields = fields_only != DateTimeFormatOptions::default();
        match (options.date_style, options.time_style, has_fields) {
            (Some(style), None, false) => self.styled(name, "date", style),
            (None, Some(style), false) => self.styled(name, "time", style),
            (None, None, true) => {
                let skeleton =
                    skeleton(options).ok_or_else(|| PrintError::DateTime(name.to_string()))?;
                self.out.push_str(&format!("{{{}, date, ::{}}}", name, skeleton));
            }
            _ => return Err(PrintError::DateTime(name.to_string())),
        }
        Ok(())
    }

    fn styled(&mut self, name: &ArgName, arg_type: &str, style: DateTimeStyle) {
        if style == DateTimeStyle::Medium {
            self.out.push_str(&format!("{{{}, {}}}", name, arg_type));
        } else {
            self.out
                .push_str(&format!("{{{}, {}, {}}}", name, arg_type, style.as_str()));
        }
    }
}

fn number_style(name: &ArgName, options: &NumberFormatOptions) -> Result<Option<&'static str>, PrintError> {
    if options.is_default() {
        Ok(None)
    } else if *options == NumberFormatOptions::integer() {
        Ok(Some("integer"))
    } else if *options == NumberFormatOptions::percent() {
        Ok(Some("percent"))
    } else {
        Err(PrintError::NumberStyle(name.to_string()))
    }
}

/// Rebuild a skeleton from the field table, in canonical field order.
fn skeleton(options: &DateTimeFormatOptions) -> Option<String> {
    if options.hour_cycle.is_some() && options.hour.is_none() {
        return None;
    }
    let mut skeleton = String::new();
    for field in DateField::ALL {
        let Some(value) = options.get(field) else {
            continue;
        };
        let (letter, count) = SKELETON_SYMBOLS
            .iter()
            .filter(|symbol| symbol.field == field)
            .filter(|symbol| field != DateField::Hour || symbol.hour_cycle == options.hour_cycle)
            .find_map(|symbol| {
                symbol
                    .values
                    .iter()
                    .position(|candidate| *candidate == Some(value))
                    .map(|index| (symbol.letter, index + 1))
            })?;
        skeleton.extend(std::iter::repeat_n(letter, count));
    }
    Some(skeleton)
}
