//! UML notation parser
//!
//! Rebuilds a [`Structure`] from loosely formatted diagram text. Declarations
//! are collected first, then standalone lines are matched as inline members,
//! compositions and plain associations, in that order.

use anyhow::Result;
use tracing::{debug, span, trace, Level};

use super::chumsky_parser::{
    ChumskyUmlParser, Declaration, DeclarationKind, MemberKinds, MemberLine, ParsedAssociation,
    ParsedAttribute, ParsedMethod,
};
use super::modifiers::{strip_modifiers, LineModifiers, StrippedLine};
use crate::core::{
    Association, Attribute, Class, Enum, EnumProperty, Interface, Method, Multiplicity, Parser,
    Structure, Visibility,
};

/// One line of a declaration body with the modifiers of its source line
#[derive(Debug, Clone)]
struct BodyLine<'a> {
    text: &'a str,
    modifiers: LineModifiers,
}

/// Collect the body of the declaration on `lines[header]`.
///
/// The body opens either on the header line itself (`rest` is the text after
/// its `{`) or on the next non-blank line starting with `{`. It ends at the
/// matching `}`. Returns the body lines and the index of the closing line, or
/// `None` when there is no body or it is never closed.
fn collect_body<'a>(
    lines: &'a [StrippedLine],
    header: usize,
    rest: Option<&'a str>,
) -> Option<(Vec<BodyLine<'a>>, usize)> {
    let (first, mut next) = match rest {
        Some(rest) => ((rest, lines[header].modifiers, header), header + 1),
        None => {
            let (index, line) = lines
                .iter()
                .enumerate()
                .skip(header + 1)
                .find(|(_, line)| !line.text.trim().is_empty())?;
            let opened = line.text.trim_start().strip_prefix('{')?;
            ((opened, line.modifiers, index), index + 1)
        }
    };

    let mut body = Vec::new();
    let mut depth = 1usize;
    let mut current = Some(first);

    while let Some((text, modifiers, index)) = current {
        for (pos, c) in text.char_indices() {
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        body.push(BodyLine {
                            text: &text[..pos],
                            modifiers,
                        });
                        return Some((body, index));
                    }
                }
                _ => {}
            }
        }
        body.push(BodyLine { text, modifiers });

        current = lines.get(next).map(|line| (line.text.as_str(), line.modifiers, next));
        next += 1;
    }

    None
}

/// UML notation parser
pub struct UmlParser {
    grammar: ChumskyUmlParser,
}

impl UmlParser {
    pub fn new() -> Self {
        Self {
            grammar: ChumskyUmlParser::new(),
        }
    }

    /// Parse `input` into a fresh structure
    pub fn parse_str(&self, input: &str) -> Structure {
        let mut structure = Structure::new();
        self.populate(input, &mut structure);
        structure
    }

    fn populate(&self, input: &str, structure: &mut Structure) {
        let parse_span = span!(Level::INFO, "parse_uml", input_len = input.len());
        let _enter = parse_span.enter();

        let lines = strip_modifiers(input);
        let mut standalone = Vec::new();
        let mut index = 0;

        while index < lines.len() {
            let line = &lines[index];
            match self.grammar.parse_declaration(&line.text) {
                Some(Declaration { name, kind, body }) => {
                    let (body, end) = collect_body(&lines, index, body.as_deref())
                        .unwrap_or((Vec::new(), index));
                    self.register_declaration(name, kind, line.modifiers, &body, structure);
                    index = end + 1;
                }
                None => {
                    standalone.push(line);
                    index += 1;
                }
            }
        }

        debug!(
            class_count = structure.class_count(),
            interface_count = structure.interface_count(),
            enum_count = structure.enum_count(),
            "Parsed declarations"
        );

        let mut remaining = Vec::new();
        for line in standalone {
            match self
                .grammar
                .parse_inline_member(&line.text, MemberKinds::ALL)
            {
                Some(inline) => {
                    note_marker(&inline.target, inline.member.is_method(), line.modifiers);
                    Self::attach_inline(inline.target, inline.member, line.modifiers, structure)
                }
                None => remaining.push(line),
            }
        }

        let mut plain = Vec::new();
        for line in remaining {
            match self.grammar.parse_composition(&line.text) {
                Some(parsed) => structure.add_association(build_association(parsed)),
                None => plain.push(line),
            }
        }

        for line in plain {
            match self.grammar.parse_association(&line.text) {
                Some(parsed) => structure.add_association(build_association(parsed)),
                None if !line.text.trim().is_empty() => {
                    trace!(line = %line.text, "Skipping unrecognized line");
                }
                None => {}
            }
        }

        debug!(
            association_count = structure.association_count(),
            "Parsed associations"
        );
    }

    fn register_declaration(
        &self,
        name: String,
        kind: DeclarationKind,
        header_modifiers: LineModifiers,
        body: &[BodyLine<'_>],
        structure: &mut Structure,
    ) {
        match kind {
            DeclarationKind::Class {
                is_abstract,
                extends,
                implements,
            } => {
                let mut class = Class::new(name)
                    .with_abstract(is_abstract || header_modifiers.is_abstract);
                class.extends = extends;
                class.implements = implements;

                for line in body {
                    let member = self.grammar.parse_member(line.text, MemberKinds::ALL);
                    if let Some(member) = &member {
                        note_marker(&class.name, member.is_method(), line.modifiers);
                    }
                    match member {
                        Some(MemberLine::Attribute(parsed)) => {
                            class.add_attribute(build_attribute(parsed, line.modifiers));
                        }
                        Some(MemberLine::Method(parsed)) => {
                            class.add_method(build_method(parsed, line.modifiers));
                        }
                        None => skip_body_line(&class.name, line.text),
                    }
                }

                structure.add_class(class);
            }
            DeclarationKind::Interface => {
                let mut interface = Interface::new(name);

                for line in body {
                    match self.grammar.parse_member(line.text, MemberKinds::METHODS) {
                        Some(MemberLine::Method(parsed)) => {
                            note_marker(&interface.name, true, line.modifiers);
                            interface.add_method(build_method(parsed, line.modifiers));
                        }
                        _ => skip_body_line(&interface.name, line.text),
                    }
                }

                structure.add_interface(interface);
            }
            DeclarationKind::Enum => {
                let mut enumeration = Enum::new(name);

                for line in body {
                    if let Some((name, value)) = self.grammar.parse_enum_property(line.text) {
                        enumeration.add_property(EnumProperty::new(name, value.unwrap_or_default()));
                    }
                }

                structure.add_enum(enumeration);
            }
        }
    }

    fn attach_inline(
        target: String,
        member: MemberLine,
        modifiers: LineModifiers,
        structure: &mut Structure,
    ) {
        match member {
            MemberLine::Attribute(parsed) => match structure.get_class_mut(&target) {
                Some(class) => class.add_attribute(build_attribute(parsed, modifiers)),
                None => debug!(class = %target, "Dropping inline attribute for unknown class"),
            },
            MemberLine::Method(parsed) => {
                let method = build_method(parsed, modifiers);
                if let Some(class) = structure.get_class_mut(&target) {
                    class.add_method(method);
                } else if let Some(interface) = structure.get_interface_mut(&target) {
                    interface.add_method(method);
                } else {
                    debug!(owner = %target, "Dropping inline method for unknown type");
                }
            }
        }
    }
}

impl Default for UmlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for UmlParser {
    fn parse(&self, input: &str, structure: &mut Structure) -> Result<()> {
        self.populate(input, structure);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "uml"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        input.contains("@startuml")
            || input.lines().any(|line| {
                ChumskyUmlParser::new()
                    .parse_declaration(&line.replace("{abstract}", ""))
                    .is_some()
            })
    }
}

/// `{field}` and `{method}` are recorded only; the grammar decides the member kind
fn note_marker(owner: &str, is_method: bool, modifiers: LineModifiers) {
    if modifiers.contradicts(is_method) {
        trace!(
            owner,
            parsed_as = if is_method { "method" } else { "attribute" },
            "Member kind marker does not match the parsed member"
        );
    }
}

fn skip_body_line(owner: &str, text: &str) {
    if !text.trim().is_empty() {
        trace!(owner, line = text, "Skipping unrecognized body line");
    }
}

/// Unmarked attributes are private
fn build_attribute(parsed: ParsedAttribute, modifiers: LineModifiers) -> Attribute {
    Attribute::new(parsed.name, parsed.ty)
        .with_visibility(parsed.visibility.unwrap_or(Visibility::Private))
        .with_static(modifiers.is_static)
}

/// Unmarked methods are public and return `void` when no type is written
fn build_method(parsed: ParsedMethod, modifiers: LineModifiers) -> Method {
    let method = Method::new(parsed.name)
        .with_parameters(parsed.parameters)
        .with_visibility(parsed.visibility.unwrap_or(Visibility::Public))
        .with_abstract(parsed.is_abstract || modifiers.is_abstract)
        .with_static(modifiers.is_static);

    match parsed.return_type {
        Some(return_type) => method.with_return_type(return_type),
        None => method,
    }
}

/// The multiplicity written next to the left class describes the right-to-left end
fn build_association(parsed: ParsedAssociation) -> Association {
    Association::new(parsed.left, parsed.right)
        .with_separator(parsed.separator)
        .with_multiplicities(
            Multiplicity::from_literal(parsed.right_multiplicity.as_deref()),
            Multiplicity::from_literal(parsed.left_multiplicity.as_deref()),
        )
        .with_name(parsed.label.unwrap_or_default())
}
