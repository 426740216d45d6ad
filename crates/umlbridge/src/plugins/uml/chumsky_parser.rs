//! UML line grammars using chumsky
//!
//! Each construct of the diagram notation is recognized one line at a time.
//! Grammars are tried in a fixed order by the caller; the first match wins.

use chumsky::prelude::*;

use crate::core::chumsky_utils::{inline_whitespace, inline_whitespace_required, word};
use crate::core::{Parameter, Visibility};

/// Attribute recognized on a body or inline line
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAttribute {
    pub visibility: Option<Visibility>,
    pub name: String,
    pub ty: String,
}

/// Method recognized on a body or inline line
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMethod {
    pub visibility: Option<Visibility>,
    pub is_abstract: bool,
    pub name: String,
    pub return_type: Option<String>,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MemberLine {
    Attribute(ParsedAttribute),
    Method(ParsedMethod),
}

impl MemberLine {
    pub fn is_method(&self) -> bool {
        matches!(self, MemberLine::Method(_))
    }
}

/// Member attached from outside a body, `Target : member`
#[derive(Debug, Clone, PartialEq)]
pub struct InlineMember {
    pub target: String,
    pub member: MemberLine,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationKind {
    Class {
        is_abstract: bool,
        extends: Option<String>,
        implements: Vec<String>,
    },
    Interface,
    Enum,
}

/// A `class`, `interface` or `enum` header line
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    /// Text following an opening `{` on the header line
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAssociation {
    pub left: String,
    pub left_multiplicity: Option<String>,
    pub separator: String,
    pub right_multiplicity: Option<String>,
    pub right: String,
    pub label: Option<String>,
}

/// Which member grammars a line may be matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberKinds {
    pub attributes: bool,
    pub methods: bool,
}

impl MemberKinds {
    pub const ALL: MemberKinds = MemberKinds {
        attributes: true,
        methods: true,
    };
    pub const METHODS: MemberKinds = MemberKinds {
        attributes: false,
        methods: true,
    };
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Chumsky-based UML line parser
pub struct ChumskyUmlParser;

impl ChumskyUmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a declaration header such as `abstract class A extends B implements C, D {`
    pub fn parse_declaration(&self, line: &str) -> Option<Declaration> {
        Self::declaration_parser().parse(line).into_result().ok()
    }

    /// Match a body line against the member grammars allowed by `kinds`.
    ///
    /// Order: `Name : Type`, `Type Name`, `Name(Params) : Type`, `[Type] Name(Params)`.
    pub fn parse_member(&self, line: &str, kinds: MemberKinds) -> Option<MemberLine> {
        if kinds.attributes {
            if let Ok(member) = Self::full_line(Self::attribute_name_type()).parse(line).into_result() {
                return Some(member);
            }
            if let Ok(member) = Self::full_line(Self::attribute_type_name()).parse(line).into_result() {
                return Some(member);
            }
        }

        if kinds.methods {
            if let Ok(member) = Self::full_line(Self::method_name_type()).parse(line).into_result() {
                return Some(member);
            }
            if let Ok(member) = Self::full_line(Self::method_type_name()).parse(line).into_result() {
                return Some(member);
            }
        }

        None
    }

    /// Match an inline member line, `Target : [vis] Type name` or `Target : [vis] [Type] name(Params)`
    pub fn parse_inline_member(&self, line: &str, kinds: MemberKinds) -> Option<InlineMember> {
        if kinds.attributes {
            if let Ok(member) = Self::full_line(Self::inline_attribute()).parse(line).into_result() {
                return Some(member);
            }
        }

        if kinds.methods {
            if let Ok(member) = Self::full_line(Self::inline_method()).parse(line).into_result() {
                return Some(member);
            }
        }

        None
    }

    /// Match an enum body line, `NAME [(=|:) VALUE]`, anywhere on the line
    pub fn parse_enum_property(&self, line: &str) -> Option<(String, Option<String>)> {
        let value = inline_whitespace()
            .ignore_then(one_of("=:"))
            .ignore_then(inline_whitespace())
            .ignore_then(word());

        any()
            .filter(|c: &char| !is_word_char(*c))
            .repeated()
            .ignore_then(word())
            .then(value.or_not())
            .then_ignore(any().repeated())
            .map(|(name, value): (&str, Option<&str>)| (name.to_string(), value.map(str::to_string)))
            .parse(line)
            .into_result()
            .ok()
    }

    /// Match a composition line such as `A "1" *--> "*" B : label`
    pub fn parse_composition(&self, line: &str) -> Option<ParsedAssociation> {
        let left_to_right = one_of("*o")
            .then(just('-').repeated().at_least(1))
            .then(just('>').or_not())
            .to_slice();
        let right_to_left = just('<')
            .or_not()
            .then(just('-').repeated().at_least(1))
            .then(one_of("*o"))
            .to_slice();
        let operator = left_to_right.or(right_to_left).map(str::to_string);

        Self::association_parser(operator).parse(line).into_result().ok()
    }

    /// Match a plain association line such as `A "*" -- "0..1" B`
    ///
    /// The separator is normalized to `--`.
    pub fn parse_association(&self, line: &str) -> Option<ParsedAssociation> {
        let operator = just('-')
            .repeated()
            .at_least(1)
            .to("--".to_string());

        Self::association_parser(operator).parse(line).into_result().ok()
    }

    fn full_line<'src, T>(
        parser: impl Parser<'src, &'src str, T> + Clone,
    ) -> impl Parser<'src, &'src str, T> + Clone {
        inline_whitespace()
            .ignore_then(parser)
            .then_ignore(inline_whitespace())
            .then_ignore(end())
    }

    /// A type expression: a word with optional `<...>` or `[...]` suffixes
    fn type_parser<'src>() -> impl Parser<'src, &'src str, String> + Clone {
        let generic = just('<')
            .then(none_of("<>").repeated().at_least(1))
            .then(just('>'))
            .ignored();
        let array = just('[').then(word().or_not()).then(just(']')).ignored();

        word()
            .then(generic.or(array).repeated())
            .to_slice()
            .map(|s: &str| s.to_string())
    }

    fn visibility_parser<'src>() -> impl Parser<'src, &'src str, Option<Visibility>> + Clone {
        one_of("+-#~")
            .or_not()
            .map(|marker: Option<char>| marker.and_then(Visibility::from_marker))
    }

    fn abstract_keyword<'src>() -> impl Parser<'src, &'src str, bool> + Clone {
        text::keyword("abstract")
            .then_ignore(inline_whitespace_required())
            .or_not()
            .map(|keyword| keyword.is_some())
    }

    fn parameter_list<'src>() -> impl Parser<'src, &'src str, Vec<Parameter>> + Clone {
        just('(')
            .ignore_then(none_of("()").repeated().to_slice())
            .then_ignore(just(')'))
            .map(parse_parameters)
    }

    fn attribute_name_type<'src>() -> impl Parser<'src, &'src str, MemberLine> + Clone {
        Self::visibility_parser()
            .then_ignore(inline_whitespace())
            .then(word())
            .then_ignore(inline_whitespace())
            .then_ignore(just(':'))
            .then_ignore(inline_whitespace())
            .then(Self::type_parser())
            .map(|((visibility, name), ty)| {
                MemberLine::Attribute(ParsedAttribute {
                    visibility,
                    name: name.to_string(),
                    ty,
                })
            })
    }

    fn attribute_type_name<'src>() -> impl Parser<'src, &'src str, MemberLine> + Clone {
        Self::visibility_parser()
            .then_ignore(inline_whitespace())
            .then(Self::type_parser())
            .then_ignore(inline_whitespace_required())
            .then(word())
            .map(|((visibility, ty), name)| {
                MemberLine::Attribute(ParsedAttribute {
                    visibility,
                    name: name.to_string(),
                    ty,
                })
            })
    }

    fn method_name_type<'src>() -> impl Parser<'src, &'src str, MemberLine> + Clone {
        Self::visibility_parser()
            .then_ignore(inline_whitespace())
            .then(Self::abstract_keyword())
            .then(word())
            .then_ignore(inline_whitespace())
            .then(Self::parameter_list())
            .then_ignore(inline_whitespace())
            .then_ignore(just(':'))
            .then_ignore(inline_whitespace())
            .then(Self::type_parser())
            .map(|((((visibility, is_abstract), name), parameters), return_type)| {
                MemberLine::Method(ParsedMethod {
                    visibility,
                    is_abstract,
                    name: name.to_string(),
                    return_type: Some(return_type),
                    parameters,
                })
            })
    }

    fn method_type_name<'src>() -> impl Parser<'src, &'src str, MemberLine> + Clone {
        Self::visibility_parser()
            .then_ignore(inline_whitespace())
            .then(Self::abstract_keyword())
            .then(
                Self::type_parser()
                    .then_ignore(inline_whitespace_required())
                    .or_not(),
            )
            .then(word())
            .then_ignore(inline_whitespace())
            .then(Self::parameter_list())
            .map(|((((visibility, is_abstract), return_type), name), parameters)| {
                MemberLine::Method(ParsedMethod {
                    visibility,
                    is_abstract,
                    name: name.to_string(),
                    return_type,
                    parameters,
                })
            })
    }

    /// `[vis] Target : [vis]`, yielding the target and whichever visibility was written
    fn inline_prefix<'src>() -> impl Parser<'src, &'src str, (String, Option<Visibility>)> + Clone {
        Self::visibility_parser()
            .then_ignore(inline_whitespace())
            .then(word())
            .then_ignore(inline_whitespace())
            .then_ignore(just(':'))
            .then_ignore(inline_whitespace())
            .then(Self::visibility_parser())
            .then_ignore(inline_whitespace())
            .map(|((outer, target), inner)| (target.to_string(), inner.or(outer)))
    }

    fn inline_attribute<'src>() -> impl Parser<'src, &'src str, InlineMember> + Clone {
        Self::inline_prefix()
            .then(Self::type_parser())
            .then_ignore(inline_whitespace_required())
            .then(word())
            .map(|(((target, visibility), ty), name)| InlineMember {
                target,
                member: MemberLine::Attribute(ParsedAttribute {
                    visibility,
                    name: name.to_string(),
                    ty,
                }),
            })
    }

    fn inline_method<'src>() -> impl Parser<'src, &'src str, InlineMember> + Clone {
        Self::inline_prefix()
            .then(Self::abstract_keyword())
            .then(
                Self::type_parser()
                    .then_ignore(inline_whitespace_required())
                    .or_not(),
            )
            .then(word())
            .then_ignore(inline_whitespace())
            .then(Self::parameter_list())
            .map(
                |(((((target, visibility), is_abstract), return_type), name), parameters)| {
                    InlineMember {
                        target,
                        member: MemberLine::Method(ParsedMethod {
                            visibility,
                            is_abstract,
                            name: name.to_string(),
                            return_type,
                            parameters,
                        }),
                    }
                },
            )
    }

    fn declaration_parser<'src>() -> impl Parser<'src, &'src str, Declaration> {
        let name = word().map(|s: &str| s.to_string());

        let extends = text::keyword("extends")
            .ignore_then(inline_whitespace_required())
            .ignore_then(name.clone())
            .then_ignore(inline_whitespace());

        let implements = text::keyword("implements")
            .ignore_then(inline_whitespace_required())
            .ignore_then(
                name.clone()
                    .separated_by(inline_whitespace().then(just(',')).then(inline_whitespace()))
                    .at_least(1)
                    .collect::<Vec<_>>(),
            )
            .then_ignore(inline_whitespace());

        let class = Self::abstract_keyword()
            .then_ignore(text::keyword("class"))
            .then_ignore(inline_whitespace_required())
            .then(name.clone())
            .then_ignore(inline_whitespace())
            .then(extends.or_not())
            .then(implements.or_not())
            .map(|(((is_abstract, name), extends), implements)| {
                (
                    name,
                    DeclarationKind::Class {
                        is_abstract,
                        extends,
                        implements: implements.unwrap_or_default(),
                    },
                )
            });

        let interface = text::keyword("interface")
            .ignore_then(inline_whitespace_required())
            .ignore_then(name.clone())
            .map(|name| (name, DeclarationKind::Interface));

        let enumeration = text::keyword("enum")
            .ignore_then(inline_whitespace_required())
            .ignore_then(name)
            .map(|name| (name, DeclarationKind::Enum));

        // Anything between the header and `{`, such as stereotypes, is skipped
        let opening = none_of("{")
            .repeated()
            .ignore_then(
                just('{')
                    .ignore_then(any().repeated().to_slice())
                    .map(|s: &str| s.to_string())
                    .or_not(),
            );

        inline_whitespace()
            .ignore_then(choice((class, interface, enumeration)))
            .then(opening)
            .then_ignore(end())
            .map(|((name, kind), body)| Declaration { name, kind, body })
    }

    fn association_parser<'src>(
        operator: impl Parser<'src, &'src str, String> + Clone,
    ) -> impl Parser<'src, &'src str, ParsedAssociation> {
        let multiplicity = just('"')
            .ignore_then(
                any()
                    .filter(|c: &char| is_word_char(*c) || *c == '*' || *c == '.')
                    .repeated()
                    .at_least(1)
                    .to_slice(),
            )
            .then_ignore(just('"'))
            .map(|s: &str| s.to_string());

        let left = word()
            .map(|s: &str| s.to_string())
            .then_ignore(inline_whitespace_required())
            .then(
                multiplicity
                    .clone()
                    .then_ignore(inline_whitespace_required())
                    .or_not(),
            );

        let right = inline_whitespace_required()
            .ignore_then(multiplicity)
            .or_not()
            .then_ignore(inline_whitespace_required())
            .then(word().map(|s: &str| s.to_string()));

        let label = inline_whitespace()
            .ignore_then(just(':'))
            .ignore_then(inline_whitespace())
            .ignore_then(
                any()
                    .filter(|c: &char| is_word_char(*c) || *c == ' ' || *c == '\t')
                    .repeated()
                    .at_least(1)
                    .to_slice(),
            )
            .map(|s: &str| s.trim().to_string());

        inline_whitespace()
            .ignore_then(left)
            .then(operator)
            .then(right)
            .then(label.or_not())
            .then_ignore(inline_whitespace())
            .then_ignore(end())
            .map(
                |((((left, left_multiplicity), separator), (right_multiplicity, right)), label)| {
                    ParsedAssociation {
                        left,
                        left_multiplicity,
                        separator,
                        right_multiplicity,
                        right,
                        label,
                    }
                },
            )
    }
}

impl Default for ChumskyUmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split a parameter list on top-level commas.
///
/// Commas nested inside `<...>` or `[...]` belong to a type expression.
fn split_parameters(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, c) in input.char_indices() {
        match c {
            '<' | '[' => depth += 1,
            '>' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&input[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);

    parts
}

/// Parse the text between a method's parentheses.
///
/// Each entry is `Type name` or `name : Type`; entries matching neither are
/// dropped.
pub fn parse_parameters(input: &str) -> Vec<Parameter> {
    let type_name = ChumskyUmlParser::type_parser()
        .then_ignore(inline_whitespace_required())
        .then(word())
        .map(|(ty, name)| Parameter::new(name, ty));

    let name_type = word()
        .then_ignore(inline_whitespace())
        .then_ignore(just(':'))
        .then_ignore(inline_whitespace())
        .then(ChumskyUmlParser::type_parser())
        .map(|(name, ty)| Parameter::new(name, ty));

    let parameter = ChumskyUmlParser::full_line(type_name.or(name_type));

    split_parameters(input)
        .into_iter()
        .filter_map(|entry| parameter.parse(entry).into_result().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attribute(line: &str) -> ParsedAttribute {
        match ChumskyUmlParser::new().parse_member(line, MemberKinds::ALL) {
            Some(MemberLine::Attribute(attribute)) => attribute,
            other => panic!("expected attribute for {line:?}, got {other:?}"),
        }
    }

    fn method(line: &str) -> ParsedMethod {
        match ChumskyUmlParser::new().parse_member(line, MemberKinds::ALL) {
            Some(MemberLine::Method(method)) => method,
            other => panic!("expected method for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_attribute_name_type() {
        let parsed = attribute("  - test : String");
        assert_eq!(parsed.visibility, Some(Visibility::Private));
        assert_eq!(parsed.name, "test");
        assert_eq!(parsed.ty, "String");
    }

    #[test]
    fn test_attribute_type_name() {
        let parsed = attribute("\t# Map<String, Integer> scores");
        assert_eq!(parsed.visibility, Some(Visibility::Protected));
        assert_eq!(parsed.ty, "Map<String, Integer>");
        assert_eq!(parsed.name, "scores");

        let array = attribute("int[] values");
        assert_eq!(array.visibility, None);
        assert_eq!(array.ty, "int[]");
    }

    #[test]
    fn test_method_name_type() {
        let parsed = method("+ getTitle(id : int, lang : String) : String");
        assert_eq!(parsed.name, "getTitle");
        assert_eq!(parsed.return_type.as_deref(), Some("String"));
        assert_eq!(
            parsed.parameters,
            vec![Parameter::new("id", "int"), Parameter::new("lang", "String")]
        );
    }

    #[test]
    fn test_method_type_name() {
        let parsed = method("+ void run()");
        assert_eq!(parsed.return_type.as_deref(), Some("void"));
        assert_eq!(parsed.name, "run");
        assert!(parsed.parameters.is_empty());

        let bare = method("stop()");
        assert_eq!(bare.return_type, None);
        assert_eq!(bare.visibility, None);
    }

    #[test]
    fn test_abstract_keyword_on_method() {
        let parsed = method("# abstract double area(Shape other)");
        assert!(parsed.is_abstract);
        assert_eq!(parsed.return_type.as_deref(), Some("double"));
        assert_eq!(parsed.parameters, vec![Parameter::new("other", "Shape")]);
    }

    #[test]
    fn test_interface_bodies_use_method_grammars_only() {
        let parser = ChumskyUmlParser::new();
        assert!(parser.parse_member("+ name : String", MemberKinds::METHODS).is_none());
        assert!(parser.parse_member("+ run()", MemberKinds::METHODS).is_some());
    }

    #[test]
    fn test_unrecognized_member_line() {
        let parser = ChumskyUmlParser::new();
        assert!(parser.parse_member("this is not a member", MemberKinds::ALL).is_none());
        assert!(parser.parse_member("", MemberKinds::ALL).is_none());
    }

    #[test]
    fn test_parameters_respect_nested_commas() {
        let params = parse_parameters("Map<String, Integer> scores, int[] ids, name : String");
        assert_eq!(
            params,
            vec![
                Parameter::new("scores", "Map<String, Integer>"),
                Parameter::new("ids", "int[]"),
                Parameter::new("name", "String"),
            ]
        );
        assert!(parse_parameters("").is_empty());
        assert_eq!(parse_parameters("int a, ???, bool b").len(), 2);
    }

    #[test]
    fn test_class_declaration() {
        let parser = ChumskyUmlParser::new();
        let decl = parser
            .parse_declaration("abstract class Dog extends Animal implements Pet, Named {")
            .unwrap();
        assert_eq!(decl.name, "Dog");
        assert_eq!(decl.body.as_deref(), Some(""));
        assert_eq!(
            decl.kind,
            DeclarationKind::Class {
                is_abstract: true,
                extends: Some("Animal".to_string()),
                implements: vec!["Pet".to_string(), "Named".to_string()],
            }
        );

        let bare = parser.parse_declaration("class class01").unwrap();
        assert_eq!(bare.body, None);
        assert!(parser.parse_declaration("subclass Foo").is_none());
        assert!(parser.parse_declaration("classDiagram").is_none());
    }

    #[test]
    fn test_interface_and_enum_declarations() {
        let parser = ChumskyUmlParser::new();
        let interface = parser.parse_declaration("interface Repo {").unwrap();
        assert_eq!(interface.kind, DeclarationKind::Interface);

        let enumeration = parser.parse_declaration("enum Color { RED").unwrap();
        assert_eq!(enumeration.kind, DeclarationKind::Enum);
        assert_eq!(enumeration.body.as_deref(), Some(" RED"));
    }

    #[test]
    fn test_inline_members() {
        let parser = ChumskyUmlParser::new();
        let attribute = parser
            .parse_inline_member("Book : - String title", MemberKinds::ALL)
            .unwrap();
        assert_eq!(attribute.target, "Book");
        assert!(matches!(
            attribute.member,
            MemberLine::Attribute(ParsedAttribute { visibility: Some(Visibility::Private), .. })
        ));

        let method = parser
            .parse_inline_member("+Repo : Book find(int id)", MemberKinds::ALL)
            .unwrap();
        assert_eq!(method.target, "Repo");
        match method.member {
            MemberLine::Method(m) => {
                assert_eq!(m.visibility, Some(Visibility::Public));
                assert_eq!(m.return_type.as_deref(), Some("Book"));
                assert_eq!(m.parameters, vec![Parameter::new("id", "int")]);
            }
            other => panic!("expected method, got {other:?}"),
        }
    }

    #[test]
    fn test_enum_property() {
        let parser = ChumskyUmlParser::new();
        assert_eq!(
            parser.parse_enum_property("  RED = 0,"),
            Some(("RED".to_string(), Some("0".to_string())))
        );
        assert_eq!(
            parser.parse_enum_property("GREEN : LIGHT"),
            Some(("GREEN".to_string(), Some("LIGHT".to_string())))
        );
        assert_eq!(parser.parse_enum_property("\tBLUE,"), Some(("BLUE".to_string(), None)));
        assert_eq!(parser.parse_enum_property("   "), None);
    }

    #[test]
    fn test_composition() {
        let parser = ChumskyUmlParser::new();
        let parsed = parser
            .parse_composition(r#"class01 "1" o-- "1..*" class02 : Nom assoc"#)
            .unwrap();
        assert_eq!(parsed.left, "class01");
        assert_eq!(parsed.left_multiplicity.as_deref(), Some("1"));
        assert_eq!(parsed.separator, "o--");
        assert_eq!(parsed.right_multiplicity.as_deref(), Some("1..*"));
        assert_eq!(parsed.right, "class02");
        assert_eq!(parsed.label.as_deref(), Some("Nom assoc"));

        let reverse = parser.parse_composition("Wheel <--* Car").unwrap();
        assert_eq!(reverse.separator, "<--*");
        assert!(parser.parse_composition(r#"class01 "*" -- "0..1" class02"#).is_none());
    }

    #[test]
    fn test_plain_association() {
        let parser = ChumskyUmlParser::new();
        let parsed = parser
            .parse_association(r#"class01 "*" -- "0..1" class02"#)
            .unwrap();
        assert_eq!(parsed.separator, "--");
        assert_eq!(parsed.left_multiplicity.as_deref(), Some("*"));
        assert_eq!(parsed.right_multiplicity.as_deref(), Some("0..1"));
        assert_eq!(parsed.label, None);

        assert!(parser.parse_association("A ---- B : owns").is_some());
        assert!(parser.parse_association("A --> B").is_none());
    }
}
