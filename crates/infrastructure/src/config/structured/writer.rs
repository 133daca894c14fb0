//! Serializes the registry as a nested TOML document.
//!
//! Tables follow registry order and list their own keys before their
//! sub-tables. Headers are indented two spaces per nesting level below the
//! top, keys one level deeper than their header. Every key is preceded by
//! its help text as comments; a value that differs from its default is
//! marked with a trailing comment naming the default.

use ferrous_ftl_domain::{ConfigEnum, ConfigItem, ConfigRegistry, ConfigValue};
use std::io::{self, Write};

use super::escape::quote;

const INDENT: &str = "  ";

const FILE_HEADER: &str = "\
# Ferrous FTL configuration file
# Encoding: UTF-8
# Comments and ordering in this file are regenerated whenever it is saved.
";

/// A table in the output document with its direct items and sub-tables
struct TableNode<'a> {
    name: &'static str,
    path: String,
    items: Vec<&'a ConfigItem>,
    children: Vec<TableNode<'a>>,
}

impl<'a> TableNode<'a> {
    fn new(name: &'static str, path: String) -> Self {
        Self {
            name,
            path,
            items: Vec::new(),
            children: Vec::new(),
        }
    }

    fn child(&mut self, name: &'static str) -> &mut TableNode<'a> {
        let pos = match self.children.iter().position(|c| c.name == name) {
            Some(pos) => pos,
            None => {
                let path = if self.path.is_empty() {
                    name.to_string()
                } else {
                    format!("{}.{}", self.path, name)
                };
                self.children.push(TableNode::new(name, path));
                self.children.len() - 1
            }
        };
        &mut self.children[pos]
    }
}

fn build_tree(registry: &ConfigRegistry) -> TableNode<'_> {
    let mut root = TableNode::new("", String::new());
    for item in registry.iter() {
        let mut node = &mut root;
        for segment in item.tables() {
            node = node.child(segment);
        }
        node.items.push(item);
    }
    root
}

pub fn write_registry<W: Write>(out: &mut W, registry: &ConfigRegistry) -> io::Result<()> {
    writeln!(out, "{FILE_HEADER}")?;
    write_table(out, &build_tree(registry), 0)
}

fn write_table<W: Write>(out: &mut W, node: &TableNode<'_>, depth: usize) -> io::Result<()> {
    if depth > 0 && !node.items.is_empty() {
        writeln!(out, "{}[{}]", INDENT.repeat(depth - 1), node.path)?;
    }

    let indent = INDENT.repeat(depth);
    for item in &node.items {
        write_item(out, item, &indent)?;
    }
    for child in &node.children {
        write_table(out, child, depth + 1)?;
    }
    Ok(())
}

fn write_item<W: Write>(out: &mut W, item: &ConfigItem, indent: &str) -> io::Result<()> {
    for line in item.help().lines() {
        writeln!(out, "{indent}# {line}")?;
    }
    if let Some(options) = item.possible_values() {
        writeln!(out, "{indent}# Possible values are: {options}")?;
    }

    write!(out, "{indent}{} = {}", item.leaf(), render_value(item.value()))?;
    if !item.is_default() {
        write!(out, " ### CHANGED, default = {}", render_value(item.default_value()))?;
    }
    writeln!(out)?;
    writeln!(out)
}

/// A value in TOML notation
pub fn render_value(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Bool(b) => b.to_string(),
        ConfigValue::Int(i) => i.to_string(),
        ConfigValue::UInt(u) => u.to_string(),
        ConfigValue::Long(l) => l.to_string(),
        ConfigValue::ULong(u) => u.to_string(),
        ConfigValue::String(s) => quote(s),
        ConfigValue::Ipv4(addr) => quote(&addr.to_string()),
        ConfigValue::Ipv6(addr) => quote(&addr.to_string()),
        ConfigValue::PtrType(v) => quote(v.as_str()),
        ConfigValue::BusyReply(v) => quote(v.as_str()),
        ConfigValue::BlockingMode(v) => quote(v.as_str()),
        ConfigValue::RefreshHostnames(v) => quote(v.as_str()),
        ConfigValue::PrivacyLevel(v) => v.level().to_string(),
    }
}
