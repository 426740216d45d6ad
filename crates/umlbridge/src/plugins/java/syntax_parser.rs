//! Java subset parser using chumsky
//!
//! Produces a [`CompilationUnit`] from Java source. Declarations are parsed
//! structurally; method bodies, initializers and annotation arguments are
//! skipped as balanced groups.

use chumsky::prelude::*;

use super::cst::{
    ClassDeclaration, ClassType, ClassTypeSegment, CompilationUnit, EnumDeclaration,
    FieldDeclaration, FormalParameter, InterfaceDeclaration, MethodDeclaration, Member, Modifier,
    TypeArgument, TypeDeclaration, UnannType, VariableDeclarator,
};
use crate::core::chumsky_utils::{block_comment, java_trivia, line_comment, RichExtra};
use crate::core::TranslateError;

const PRIMITIVES: [&str; 8] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

const RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while",
];

/// Convert a byte offset into a 1-based line and column
fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let prefix = source.get(..offset).unwrap_or(source);
    let line = prefix.matches('\n').count() + 1;
    let column = prefix
        .rsplit('\n')
        .next()
        .map_or(0, |current| current.chars().count())
        + 1;
    (line, column)
}

/// Chumsky-based Java subset parser
pub struct JavaSyntaxParser;

impl JavaSyntaxParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one source file.
    ///
    /// The first reported error is returned with its line and column.
    pub fn parse_compilation_unit(&self, source: &str) -> Result<CompilationUnit, TranslateError> {
        Self::compilation_unit()
            .parse(source)
            .into_result()
            .map_err(|errors| {
                let (message, offset) = errors
                    .into_iter()
                    .next()
                    .map(|error| (error.to_string(), error.span().start))
                    .unwrap_or_else(|| ("unexpected input".to_string(), 0));
                let (line, column) = line_column(source, offset);
                TranslateError::parse_error(message, line, column)
            })
    }

    fn token<'src>(symbol: &'static str) -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
        just(symbol).ignored().then_ignore(java_trivia())
    }

    fn keyword<'src>(word: &'static str) -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
        text::keyword(word).ignored().then_ignore(java_trivia())
    }

    /// An identifier that is not a reserved word
    fn identifier<'src>() -> impl Parser<'src, &'src str, String, RichExtra<'src>> + Clone {
        text::ident()
            .try_map(|word: &str, span| {
                if RESERVED.contains(&word) {
                    Err(Rich::custom(span, format!("unexpected keyword `{}`", word)))
                } else {
                    Ok(word.to_string())
                }
            })
            .then_ignore(java_trivia())
    }

    fn string_literal<'src>() -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
        let escape = just('\\').then(any()).ignored();
        just('"')
            .then(none_of("\"\\").ignored().or(escape).repeated())
            .then(just('"'))
            .ignored()
    }

    fn char_literal<'src>() -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
        let escape = just('\\').then(any()).ignored();
        just('\'')
            .then(none_of("'\\").ignored().or(escape).repeated())
            .then(just('\''))
            .ignored()
    }

    /// Skip a group delimited by `open` and `close`, honoring nesting,
    /// literals and comments
    fn balanced<'src>(
        open: char,
        close: char,
    ) -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
        recursive(move |nested| {
            let slash = just('/')
                .and_is(just("//").not())
                .and_is(just("/*").not())
                .ignored();
            let other = any()
                .filter(move |c: &char| *c != open && *c != close && !"\"'/".contains(*c))
                .ignored();

            choice((
                nested,
                Self::string_literal(),
                Self::char_literal(),
                line_comment(),
                block_comment(),
                slash,
                other,
            ))
            .repeated()
            .delimited_by(just(open), just(close))
            .ignored()
        })
    }

    /// Skip `<...>` type parameters; a group never spans a `;` or a brace
    fn angle_group<'src>() -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
        recursive(|nested| {
            just('<')
                .ignore_then(nested.or(none_of("<>;{}").ignored()).repeated())
                .then_ignore(just('>'))
                .ignored()
        })
    }

    fn annotation<'src>() -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
        just('@')
            .then(java_trivia())
            .then(
                Self::identifier()
                    .separated_by(Self::token("."))
                    .at_least(1),
            )
            .then(
                Self::balanced('(', ')')
                    .then_ignore(java_trivia())
                    .or_not(),
            )
            .ignored()
    }

    fn modifier<'src>() -> impl Parser<'src, &'src str, Modifier, RichExtra<'src>> + Clone {
        just("non-sealed")
            .to(Modifier::NonSealed)
            .or(text::ident().try_map(|word: &str, span| {
                Modifier::from_keyword(word)
                    .ok_or_else(|| Rich::custom(span, format!("expected modifier, found `{}`", word)))
            }))
            .then_ignore(java_trivia())
    }

    /// Modifiers interleaved with annotations; annotations are dropped
    fn modifiers<'src>() -> impl Parser<'src, &'src str, Vec<Modifier>, RichExtra<'src>> + Clone {
        Self::annotation()
            .to(None)
            .or(Self::modifier().map(Some))
            .repeated()
            .collect::<Vec<_>>()
            .map(|modifiers| modifiers.into_iter().flatten().collect())
    }

    fn dims<'src>() -> impl Parser<'src, &'src str, usize, RichExtra<'src>> + Clone {
        Self::token("[")
            .then(Self::token("]"))
            .repeated()
            .collect::<Vec<_>>()
            .map(|dims| dims.len())
    }

    fn type_parser<'src>() -> impl Parser<'src, &'src str, UnannType, RichExtra<'src>> + Clone {
        recursive(|ty| {
            let wildcard = Self::token("?")
                .then(
                    Self::keyword("extends")
                        .or(Self::keyword("super"))
                        .then(ty.clone())
                        .or_not(),
                )
                .to(TypeArgument::Wildcard);
            let argument = wildcard.or(ty.map(TypeArgument::Type));
            let arguments = Self::token("<")
                .ignore_then(argument.separated_by(Self::token(",")).collect::<Vec<_>>())
                .then_ignore(Self::token(">"));

            let segment = Self::identifier()
                .then(arguments.or_not())
                .map(|(name, arguments)| ClassTypeSegment { name, arguments });
            let class_type = segment
                .clone()
                .then(Self::token(".").ignore_then(segment).repeated().collect::<Vec<_>>())
                .map(|(first, rest)| {
                    let mut segments = vec![first];
                    segments.extend(rest);
                    ClassType { segments }
                });

            let primitive = text::ident()
                .try_map(|word: &str, span| {
                    if PRIMITIVES.contains(&word) {
                        Ok(word.to_string())
                    } else {
                        Err(Rich::custom(span, format!("expected primitive type, found `{}`", word)))
                    }
                })
                .then_ignore(java_trivia());

            primitive
                .then(Self::dims())
                .map(|(name, dims)| UnannType::Primitive { name, dims })
                .or(class_type
                    .then(Self::dims())
                    .map(|(class, dims)| UnannType::Reference { class, dims }))
        })
    }

    /// A class type without array dimensions, as in `extends` clauses
    fn class_type<'src>() -> impl Parser<'src, &'src str, ClassType, RichExtra<'src>> + Clone {
        Self::type_parser().try_map(|ty, span| match ty {
            UnannType::Reference { class, dims: 0 } => Ok(class),
            other => Err(Rich::custom(span, format!("expected class type, found `{}`", other))),
        })
    }

    fn class_type_list<'src>() -> impl Parser<'src, &'src str, Vec<ClassType>, RichExtra<'src>> + Clone {
        Self::class_type()
            .separated_by(Self::token(","))
            .at_least(1)
            .collect()
    }

    fn parameter<'src>() -> impl Parser<'src, &'src str, FormalParameter, RichExtra<'src>> + Clone {
        let typed = Self::type_parser()
            .then(Self::token("...").or_not().map(|dots| dots.is_some()))
            .then(Self::identifier())
            .then(Self::dims())
            .map(|(((ty, is_varargs), name), dims)| FormalParameter {
                ty: Some(ty.with_extra_dims(dims)),
                name,
                is_varargs,
            });
        let untyped = Self::identifier().map(|name| FormalParameter {
            ty: None,
            name,
            is_varargs: false,
        });

        Self::modifiers().ignore_then(typed.or(untyped))
    }

    fn parameters<'src>() -> impl Parser<'src, &'src str, Vec<FormalParameter>, RichExtra<'src>> + Clone {
        Self::token("(")
            .ignore_then(Self::parameter().separated_by(Self::token(",")).collect())
            .then_ignore(Self::token(")"))
    }

    fn throws_clause<'src>() -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
        Self::keyword("throws")
            .then(Self::class_type_list())
            .ignored()
    }

    fn block<'src>() -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
        Self::balanced('{', '}').then_ignore(java_trivia())
    }

    /// Skip a field initializer up to the next top-level `,` or `;`
    fn variable_initializer<'src>() -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
        choice((
            Self::balanced('{', '}'),
            Self::balanced('(', ')'),
            Self::balanced('[', ']'),
            Self::angle_group(),
            Self::string_literal(),
            Self::char_literal(),
            line_comment(),
            block_comment(),
            any()
                .filter(|c: &char| !",;{}()[]\"'".contains(*c))
                .ignored(),
        ))
        .repeated()
        .ignored()
    }

    fn field<'src>() -> impl Parser<'src, &'src str, (UnannType, Vec<VariableDeclarator>), RichExtra<'src>> + Clone {
        let declarator = Self::identifier()
            .then(Self::dims())
            .then_ignore(
                Self::token("=")
                    .then(Self::variable_initializer())
                    .or_not(),
            )
            .map(|(name, dims)| VariableDeclarator { name, dims });

        Self::type_parser()
            .then(
                declarator
                    .separated_by(Self::token(","))
                    .at_least(1)
                    .collect::<Vec<_>>(),
            )
            .then_ignore(Self::token(";"))
    }

    fn method<'src>() -> impl Parser<'src, &'src str, (Option<UnannType>, String, Vec<FormalParameter>), RichExtra<'src>> + Clone {
        let result = Self::keyword("void")
            .to(None)
            .or(Self::type_parser().map(Some));
        let body = Self::block().ignored().or(Self::token(";").ignored());

        Self::angle_group()
            .then_ignore(java_trivia())
            .or_not()
            .ignore_then(result)
            .then(Self::identifier())
            .then(Self::parameters())
            .then_ignore(Self::dims())
            .then_ignore(Self::throws_clause().or_not())
            .then_ignore(body)
            .map(|((result, name), parameters)| (result, name, parameters))
    }

    fn constructor<'src>() -> impl Parser<'src, &'src str, String, RichExtra<'src>> + Clone {
        Self::angle_group()
            .then_ignore(java_trivia())
            .or_not()
            .ignore_then(Self::identifier())
            .then_ignore(Self::parameters())
            .then_ignore(Self::throws_clause().or_not())
            .then_ignore(Self::block())
    }

    /// A class, interface or enum body member; `None` for a stray `;`
    fn member<'src, D>(type_declaration: D) -> impl Parser<'src, &'src str, Option<Member>, RichExtra<'src>> + Clone
    where
        D: Parser<'src, &'src str, TypeDeclaration, RichExtra<'src>> + Clone + 'src,
    {
        let declared = Self::modifiers().then(choice((
            Self::method().map(|(result, name, parameters)| MemberKind::Method(result, name, parameters)),
            Self::field().map(|(ty, declarators)| MemberKind::Field(ty, declarators)),
            Self::constructor().map(MemberKind::Constructor),
            Self::block().to(MemberKind::Initializer),
        )));

        choice((
            Self::token(";").to(None),
            type_declaration.map(|declaration| Some(Member::Type(declaration))),
            declared.map(|(modifiers, kind)| Some(kind.into_member(modifiers))),
        ))
    }

    fn type_declaration<'src>() -> impl Parser<'src, &'src str, TypeDeclaration, RichExtra<'src>> + Clone {
        recursive(|declaration| {
            let members = Self::member(declaration)
                .repeated()
                .collect::<Vec<_>>()
                .map(|members| members.into_iter().flatten().collect::<Vec<_>>());
            let body = Self::token("{")
                .ignore_then(members.clone())
                .then_ignore(Self::token("}"));
            let type_parameters = Self::angle_group().then_ignore(java_trivia()).or_not();
            let permits = Self::keyword("permits").then(Self::class_type_list()).or_not();

            let class = Self::keyword("class")
                .ignore_then(Self::identifier())
                .then_ignore(type_parameters.clone())
                .then(Self::keyword("extends").ignore_then(Self::class_type()).or_not())
                .then(
                    Self::keyword("implements")
                        .ignore_then(Self::class_type_list())
                        .or_not(),
                )
                .then_ignore(permits.clone())
                .then(body.clone())
                .map(|(((name, superclass), interfaces), members)| {
                    TypeDeclaration::Class(ClassDeclaration {
                        modifiers: Vec::new(),
                        name,
                        superclass,
                        interfaces: interfaces.unwrap_or_default(),
                        members,
                    })
                });

            let interface = Self::keyword("interface")
                .ignore_then(Self::identifier())
                .then_ignore(type_parameters)
                .then(
                    Self::keyword("extends")
                        .ignore_then(Self::class_type_list())
                        .or_not(),
                )
                .then_ignore(permits)
                .then(body)
                .map(|((name, extends), members)| {
                    TypeDeclaration::Interface(InterfaceDeclaration {
                        modifiers: Vec::new(),
                        name,
                        extends: extends.unwrap_or_default(),
                        members,
                    })
                });

            let constant = Self::annotation()
                .repeated()
                .ignore_then(Self::identifier())
                .then_ignore(Self::balanced('(', ')').then_ignore(java_trivia()).or_not())
                .then_ignore(Self::block().or_not());
            let enumeration = Self::keyword("enum")
                .ignore_then(Self::identifier())
                .then(
                    Self::keyword("implements")
                        .ignore_then(Self::class_type_list())
                        .or_not(),
                )
                .then_ignore(Self::token("{"))
                .then(
                    constant
                        .separated_by(Self::token(","))
                        .allow_trailing()
                        .collect::<Vec<_>>(),
                )
                .then(Self::token(";").ignore_then(members).or_not())
                .then_ignore(Self::token("}"))
                .map(|(((name, interfaces), constants), members)| {
                    TypeDeclaration::Enum(EnumDeclaration {
                        modifiers: Vec::new(),
                        name,
                        interfaces: interfaces.unwrap_or_default(),
                        constants,
                        members: members.unwrap_or_default(),
                    })
                });

            Self::modifiers()
                .then(choice((class, interface, enumeration)))
                .map(|(modifiers, declaration)| with_modifiers(declaration, modifiers))
        })
    }

    fn compilation_unit<'src>() -> impl Parser<'src, &'src str, CompilationUnit, RichExtra<'src>> {
        let package = Self::annotation()
            .repeated()
            .ignore_then(Self::keyword("package"))
            .ignore_then(
                Self::identifier()
                    .separated_by(Self::token("."))
                    .at_least(1)
                    .collect::<Vec<_>>(),
            )
            .then_ignore(Self::token(";"));

        let import = Self::keyword("import")
            .ignore_then(none_of(";").repeated().to_slice())
            .map(|path: &str| path.split_whitespace().collect::<Vec<_>>().join(" "))
            .then_ignore(Self::token(";"));

        java_trivia()
            .ignore_then(package.or_not())
            .then(import.repeated().collect::<Vec<_>>())
            .then(
                Self::type_declaration()
                    .map(Some)
                    .or(Self::token(";").to(None))
                    .repeated()
                    .collect::<Vec<_>>(),
            )
            .then_ignore(end())
            .map(|((package, imports), types)| CompilationUnit {
                package: package.unwrap_or_default(),
                imports,
                types: types.into_iter().flatten().collect(),
            })
    }
}

impl Default for JavaSyntaxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Member shape recognized after the shared modifier prefix
#[derive(Debug, Clone)]
enum MemberKind {
    Method(Option<UnannType>, String, Vec<FormalParameter>),
    Field(UnannType, Vec<VariableDeclarator>),
    Constructor(String),
    Initializer,
}

impl MemberKind {
    fn into_member(self, modifiers: Vec<Modifier>) -> Member {
        match self {
            MemberKind::Method(result, name, parameters) => Member::Method(MethodDeclaration {
                modifiers,
                result,
                name,
                parameters,
            }),
            MemberKind::Field(ty, declarators) => Member::Field(FieldDeclaration {
                modifiers,
                ty,
                declarators,
            }),
            MemberKind::Constructor(name) => Member::Constructor { name },
            MemberKind::Initializer => Member::Initializer,
        }
    }
}

fn with_modifiers(declaration: TypeDeclaration, modifiers: Vec<Modifier>) -> TypeDeclaration {
    match declaration {
        TypeDeclaration::Class(class) => TypeDeclaration::Class(ClassDeclaration { modifiers, ..class }),
        TypeDeclaration::Interface(interface) => {
            TypeDeclaration::Interface(InterfaceDeclaration { modifiers, ..interface })
        }
        TypeDeclaration::Enum(enumeration) => {
            TypeDeclaration::Enum(EnumDeclaration { modifiers, ..enumeration })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> CompilationUnit {
        JavaSyntaxParser::new()
            .parse_compilation_unit(source)
            .unwrap_or_else(|error| panic!("failed to parse: {error}"))
    }

    fn single_class(unit: &CompilationUnit) -> &ClassDeclaration {
        match unit.types.as_slice() {
            [TypeDeclaration::Class(class)] => class,
            other => panic!("expected one class, got {other:?}"),
        }
    }

    #[test]
    fn test_line_column() {
        assert_eq!(line_column("abc", 0), (1, 1));
        assert_eq!(line_column("ab\ncd", 4), (2, 2));
        assert_eq!(line_column("ab\n", 3), (2, 1));
    }

    #[test]
    fn test_package_and_imports() {
        let unit = parse(
            "// header\npackage com.example.library;\n\nimport java.util.*;\nimport static java.lang.Math.max;\n\nclass A {}",
        );
        assert_eq!(unit.package, vec!["com", "example", "library"]);
        assert_eq!(unit.imports, vec!["java.util.*", "static java.lang.Math.max"]);
        assert_eq!(unit.types.len(), 1);
    }

    #[test]
    fn test_class_header() {
        let unit = parse(
            "@Entity\npublic abstract class Dog<T extends Comparable<T>> extends Animal implements Pet, java.io.Serializable {}",
        );
        let class = single_class(&unit);
        assert_eq!(class.name, "Dog");
        assert_eq!(class.modifiers, vec![Modifier::Public, Modifier::Abstract]);
        assert_eq!(class.superclass.as_ref().map(ToString::to_string).as_deref(), Some("Animal"));
        let interfaces: Vec<_> = class.interfaces.iter().map(ClassType::qualified_name).collect();
        assert_eq!(interfaces, vec!["Pet", "java.io.Serializable"]);
    }

    #[test]
    fn test_fields_and_methods() {
        let unit = parse(
            r#"public class Library {
    private static final String NAME = "lib{rary}", OTHER;
    protected int[] counts, matrix[] = {{1}, {2}};
    ArrayList<Book> books = new ArrayList<>();

    public Library() { this.books = new ArrayList<>(); }

    static { System.out.println("init"); }

    /** Find a book */
    public Book find(String title, int... ids) throws NotFoundException {
        if (title == null) { return null; }
        return books.get(0);
    }

    abstract void close();
}"#,
        );
        let class = single_class(&unit);
        assert_eq!(class.members.len(), 7);

        match &class.members[0] {
            Member::Field(field) => {
                assert_eq!(field.modifiers, vec![Modifier::Private, Modifier::Static, Modifier::Final]);
                assert_eq!(field.ty.to_string(), "String");
                let names: Vec<_> = field.declarators.iter().map(|d| d.name.as_str()).collect();
                assert_eq!(names, vec!["NAME", "OTHER"]);
            }
            other => panic!("expected field, got {other:?}"),
        }

        match &class.members[1] {
            Member::Field(field) => {
                assert_eq!(field.ty.to_string(), "int[]");
                assert_eq!(field.declarators[1].dims, 1);
            }
            other => panic!("expected field, got {other:?}"),
        }

        match &class.members[2] {
            Member::Field(field) => assert_eq!(field.ty.to_string(), "ArrayList<Book>"),
            other => panic!("expected field, got {other:?}"),
        }

        assert!(matches!(&class.members[3], Member::Constructor { name } if name == "Library"));
        assert!(matches!(class.members[4], Member::Initializer));

        match &class.members[5] {
            Member::Method(method) => {
                assert_eq!(method.name, "find");
                assert_eq!(method.result.as_ref().map(ToString::to_string).as_deref(), Some("Book"));
                assert_eq!(method.parameters.len(), 2);
                assert!(method.parameters[1].is_varargs);
                assert_eq!(
                    method.parameters[1].ty.as_ref().map(ToString::to_string).as_deref(),
                    Some("int")
                );
            }
            other => panic!("expected method, got {other:?}"),
        }

        match &class.members[6] {
            Member::Method(method) => {
                assert_eq!(method.result, None);
                assert!(method.parameters.is_empty());
            }
            other => panic!("expected method, got {other:?}"),
        }
    }

    #[test]
    fn test_generic_types() {
        let unit = parse(
            "class A { Map<String, List<? extends Number>> index; java.util.Map.Entry<K, V>[] entries; }",
        );
        let class = single_class(&unit);
        let types: Vec<_> = class
            .members
            .iter()
            .filter_map(|member| match member {
                Member::Field(field) => Some(field.ty.to_string()),
                _ => None,
            })
            .collect();
        assert_eq!(
            types,
            vec!["Map<String, List<?>>", "java.util.Map.Entry<K, V>[]"]
        );
    }

    #[test]
    fn test_interface_and_enum() {
        let unit = parse(
            r#"public interface Library extends Named {
    int LIMIT = 10;
    public void addBook(Book b);
    default int size() { return 0; }
}

enum Genre implements Labeled, Sorted {
    NOVEL("n"), POETRY { }, ESSAY,;
    private final String code;
    Genre() { this("x"); }
}"#,
        );
        assert_eq!(unit.types.len(), 2);

        match &unit.types[0] {
            TypeDeclaration::Interface(interface) => {
                assert_eq!(interface.name, "Library");
                assert_eq!(interface.extends.len(), 1);
                assert_eq!(interface.members.len(), 3);
            }
            other => panic!("expected interface, got {other:?}"),
        }

        match &unit.types[1] {
            TypeDeclaration::Enum(enumeration) => {
                assert_eq!(enumeration.constants, vec!["NOVEL", "POETRY", "ESSAY"]);
                assert_eq!(enumeration.interfaces.len(), 2);
                assert_eq!(enumeration.members.len(), 2);
            }
            other => panic!("expected enum, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_types_are_members() {
        let unit = parse("class Outer { static class Inner { int x; } enum Kind { A } }");
        let class = single_class(&unit);
        assert_eq!(class.members.len(), 2);
        assert!(matches!(class.members[0], Member::Type(TypeDeclaration::Class(_))));
        assert!(matches!(class.members[1], Member::Type(TypeDeclaration::Enum(_))));
    }

    #[test]
    fn test_untyped_parameter() {
        let unit = parse("class A { void run(x) {} }");
        match &single_class(&unit).members[0] {
            Member::Method(method) => {
                assert_eq!(method.parameters[0].ty, None);
                assert_eq!(method.parameters[0].name, "x");
            }
            other => panic!("expected method, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_position() {
        let error = JavaSyntaxParser::new()
            .parse_compilation_unit("public class Broken {\n  int x }")
            .unwrap_err();
        match error {
            TranslateError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_source() {
        let unit = parse("  /* nothing here */\n");
        assert!(unit.types.is_empty());
        assert!(unit.package.is_empty());
    }
}
