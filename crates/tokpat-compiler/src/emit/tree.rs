//! Structured output tree and its pretty printer.
//!
//! The builder produces [`Node`]s; nothing is serialized until the emitter
//! renders a definition. Collapsing of single-entry arrays and objects happens
//! here, on the tree, so that string contents never need re-parsing.

/// Indentation unit of generated files.
pub const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Verbatim TypeScript expression: identifier, enum member, regex literal.
    Raw(String),
    /// String literal, quoted on render.
    Str(String),
    Array(Vec<Node>),
    Object(Vec<Item>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Member {
        key: String,
        value: Node,
        /// Block comment written after the trailing comma.
        annotation: Option<String>,
    },
    /// `// text` line.
    Comment(String),
    Blank,
}

impl Item {
    pub fn member(key: impl Into<String>, value: Node) -> Self {
        Self::Member {
            key: key.into(),
            value,
            annotation: None,
        }
    }

    pub fn annotated(key: impl Into<String>, value: Node, annotation: impl Into<String>) -> Self {
        Self::Member {
            key: key.into(),
            value,
            annotation: Some(annotation.into()),
        }
    }
}

impl Node {
    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// Whether the node renders on a single line.
    pub fn is_inline(&self) -> bool {
        match self {
            Node::Raw(_) | Node::Str(_) => true,
            Node::Array(elements) => match elements.as_slice() {
                [] => true,
                [only] => only.nests_inline(),
                _ => false,
            },
            Node::Object(items) => match items.as_slice() {
                [] => true,
                [Item::Member { value, .. }] => value.nests_inline(),
                _ => false,
            },
        }
    }

    /// Whether the node can share a line with its parent's brackets.
    ///
    /// A collapsed object ending in a block comment cannot.
    fn nests_inline(&self) -> bool {
        let annotated = matches!(
            self,
            Node::Object(items) if matches!(items.as_slice(), [Item::Member { annotation: Some(_), .. }])
        );
        !annotated && self.is_inline()
    }

    /// Render at nesting depth `depth`; the first line is not indented.
    pub fn render(&self, depth: usize) -> String {
        let mut out = String::new();
        self.write(&mut out, depth);
        out
    }

    fn write(&self, out: &mut String, depth: usize) {
        match self {
            Node::Raw(expr) => out.push_str(expr),
            Node::Str(s) => out.push_str(&quote(s)),
            Node::Array(elements) => write_array(out, elements, depth),
            Node::Object(items) => write_object(out, items, depth),
        }
    }
}

fn write_array(out: &mut String, elements: &[Node], depth: usize) {
    if elements.is_empty() {
        out.push_str("[]");
        return;
    }
    if let [only] = elements
        && only.nests_inline()
    {
        out.push('[');
        only.write(out, depth);
        out.push(']');
        return;
    }

    out.push_str("[\n");
    for element in elements {
        push_indent(out, depth + 1);
        element.write(out, depth + 1);
        out.push_str(",\n");
    }
    push_indent(out, depth);
    out.push(']');
}

fn write_object(out: &mut String, items: &[Item], depth: usize) {
    match items {
        [] => {
            out.push_str("{}");
            return;
        }
        [Item::Member {
            key,
            value,
            annotation,
        }] if value.nests_inline() => {
            out.push_str("{ ");
            out.push_str(key);
            out.push_str(": ");
            value.write(out, depth);
            if let Some(annotation) = annotation {
                out.push_str(", ");
                out.push_str(annotation);
            }
            out.push_str(" }");
            return;
        }
        _ => {}
    }

    out.push_str("{\n");
    for (i, item) in items.iter().enumerate() {
        match item {
            Item::Member {
                key,
                value,
                annotation,
            } => {
                push_indent(out, depth + 1);
                out.push_str(key);
                out.push_str(": ");
                value.write(out, depth + 1);
                out.push(',');
                if let Some(annotation) = annotation {
                    out.push(' ');
                    out.push_str(annotation);
                }
                out.push('\n');
            }
            Item::Comment(text) => {
                push_indent(out, depth + 1);
                out.push_str("//");
                if !text.is_empty() {
                    out.push(' ');
                    out.push_str(text);
                }
                out.push('\n');
            }
            Item::Blank => {
                let followed = items[i + 1..].iter().any(|next| !matches!(next, Item::Blank));
                let doubled = i > 0 && matches!(items[i - 1], Item::Blank);
                if i > 0 && followed && !doubled {
                    out.push('\n');
                }
            }
        }
    }
    push_indent(out, depth);
    out.push('}');
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

/// Double-quoted string literal with JSON escaping, which TypeScript accepts.
pub fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}
