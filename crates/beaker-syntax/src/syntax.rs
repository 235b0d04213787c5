use std::iter::FusedIterator;
use std::slice;

use beaker_span::SourceRange;
use beaker_tokenizer::Token;

use crate::SyntaxKind::{self, *};
use crate::{DisplayTree, Shape};

type Slot = Option<Box<Syntax>>;

/// Leading and trailing token of a non-atom node.
type Tokens = [Option<Token>; 2];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Repr {
    Atom(Token),
    Unary(Tokens, [Slot; 1]),
    Binary(Tokens, [Slot; 2]),
    Ternary(Tokens, [Slot; 3]),
    Multiary(Vec<Syntax>),
}

/// A node of the concrete syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syntax {
    kind: SyntaxKind,
    repr: Repr,
}

fn slot(syntax: Syntax) -> Slot {
    Some(Box::new(syntax))
}

fn opt_slot(syntax: Option<Syntax>) -> Slot {
    syntax.map(Box::new)
}

impl Syntax {
    fn unary(kind: SyntaxKind, tokens: Tokens, operand: Slot) -> Self {
        Self { kind, repr: Repr::Unary(tokens, [operand]) }
    }

    fn binary(kind: SyntaxKind, token: Option<Token>, lhs: Slot, rhs: Slot) -> Self {
        Self { kind, repr: Repr::Binary([token, None], [lhs, rhs]) }
    }

    pub fn literal(token: Token) -> Self {
        Self { kind: LITERAL, repr: Repr::Atom(token) }
    }

    pub fn identifier(token: Token) -> Self {
        Self { kind: IDENTIFIER, repr: Repr::Atom(token) }
    }

    pub fn prefix(operator: Token, operand: Syntax) -> Self {
        Self::unary(PREFIX, [Some(operator), None], slot(operand))
    }

    pub fn postfix(operand: Syntax, operator: Token) -> Self {
        Self::unary(POSTFIX, [Some(operator), None], slot(operand))
    }

    /// A bracketed term; `term` is `None` for an empty pair of delimiters.
    pub fn enclosure(open: Token, term: Option<Syntax>, close: Token) -> Self {
        Self::unary(ENCLOSURE, [Some(open), Some(close)], opt_slot(term))
    }

    /// The root of a parsed file, holding the sequence of its declarations.
    pub fn file(declarations: Option<Syntax>) -> Self {
        Self::unary(FILE, [None, None], opt_slot(declarations))
    }

    pub fn infix(lhs: Syntax, operator: Token, rhs: Syntax) -> Self {
        Self::binary(INFIX, Some(operator), slot(lhs), slot(rhs))
    }

    pub fn array(token: Option<Token>, specifier: Syntax, result: Syntax) -> Self {
        Self::binary(ARRAY, token, slot(specifier), slot(result))
    }

    pub fn function(token: Option<Token>, specifier: Syntax, result: Syntax) -> Self {
        Self::binary(FUNCTION, token, slot(specifier), slot(result))
    }

    pub fn template(token: Option<Token>, specifier: Syntax, result: Syntax) -> Self {
        Self::binary(TEMPLATE, token, slot(specifier), slot(result))
    }

    pub fn call(applicant: Syntax, arguments: Syntax) -> Self {
        Self::binary(CALL, None, slot(applicant), slot(arguments))
    }

    pub fn index(applicant: Syntax, arguments: Syntax) -> Self {
        Self::binary(INDEX, None, slot(applicant), slot(arguments))
    }

    pub fn control(keyword: Token, head: Option<Syntax>, body: Option<Syntax>) -> Self {
        Self::binary(CONTROL, Some(keyword), opt_slot(head), opt_slot(body))
    }

    /// `type? is pattern`.
    pub fn constraint(is: Token, ty: Option<Syntax>, pattern: Syntax) -> Self {
        Self::binary(CONSTRAINT, Some(is), opt_slot(ty), slot(pattern))
    }

    /// A lambda's capture list followed by its parameters.
    pub fn capture(captures: Syntax, parameters: Syntax) -> Self {
        Self::binary(CAPTURE, None, slot(captures), slot(parameters))
    }

    pub fn declaration(
        introducer: Option<Token>,
        declarator: Option<Syntax>,
        ty: Option<Syntax>,
        initializer: Option<Syntax>,
        terminator: Option<Token>,
    ) -> Self {
        Self {
            kind: DECLARATION,
            repr: Repr::Ternary(
                [introducer, terminator],
                [opt_slot(declarator), opt_slot(ty), opt_slot(initializer)],
            ),
        }
    }

    pub fn list(terms: Vec<Syntax>) -> Self {
        Self { kind: LIST, repr: Repr::Multiary(terms) }
    }

    pub fn sequence(terms: Vec<Syntax>) -> Self {
        Self { kind: SEQUENCE, repr: Repr::Multiary(terms) }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn shape(&self) -> Shape {
        self.kind.shape()
    }

    /// The token of an atom, or the leading token of any other node: its
    /// operator, keyword, introducer, constructor token or opening delimiter.
    pub fn token(&self) -> Option<&Token> {
        match &self.repr {
            Repr::Atom(token) => Some(token),
            Repr::Unary([token, _], _)
            | Repr::Binary([token, _], _)
            | Repr::Ternary([token, _], _) => token.as_ref(),
            Repr::Multiary(_) => None,
        }
    }

    /// Closing delimiter of an enclosure or terminator of a declaration.
    pub fn trailing_token(&self) -> Option<&Token> {
        match &self.repr {
            Repr::Unary([_, token], _)
            | Repr::Binary([_, token], _)
            | Repr::Ternary([_, token], _) => token.as_ref(),
            Repr::Atom(_) | Repr::Multiary(_) => None,
        }
    }

    /// The operand in slot `index`, or the `index`-th term of a multiary node.
    pub fn operand(&self, index: usize) -> Option<&Syntax> {
        match &self.repr {
            Repr::Atom(_) => None,
            Repr::Unary(_, slots) => slots.get(index)?.as_deref(),
            Repr::Binary(_, slots) => slots.get(index)?.as_deref(),
            Repr::Ternary(_, slots) => slots.get(index)?.as_deref(),
            Repr::Multiary(terms) => terms.get(index),
        }
    }

    /// Terms of a multiary node; empty for every other shape.
    pub fn terms(&self) -> &[Syntax] {
        match &self.repr {
            Repr::Multiary(terms) => terms,
            _ => &[],
        }
    }

    /// Spelling of an atom's token.
    pub fn spelling(&self) -> Option<&str> {
        match &self.repr {
            Repr::Atom(token) => Some(token.spelling()),
            _ => None,
        }
    }

    /// Every operand slot in order, absent ones included. Atoms have no
    /// children and multiary nodes yield each of their terms.
    pub fn children(&self) -> Children<'_> {
        let repr = match &self.repr {
            Repr::Atom(_) => ChildrenRepr::Slots(Default::default()),
            Repr::Unary(_, slots) => ChildrenRepr::Slots(slots.iter()),
            Repr::Binary(_, slots) => ChildrenRepr::Slots(slots.iter()),
            Repr::Ternary(_, slots) => ChildrenRepr::Slots(slots.iter()),
            Repr::Multiary(terms) => ChildrenRepr::Terms(terms.iter()),
        };
        Children { repr }
    }

    /// The source range the node covers, or [`SourceRange::INVALID`] when it
    /// spans no tokens at all.
    pub fn location(&self) -> SourceRange {
        let tokens: &[Option<Token>] = match &self.repr {
            Repr::Atom(token) => return token.range(),
            Repr::Unary(tokens, _) | Repr::Binary(tokens, _) | Repr::Ternary(tokens, _) => {
                tokens.as_slice()
            }
            Repr::Multiary(_) => &[],
        };

        let from_tokens = tokens.iter().flatten().map(Token::range);
        let from_children = self.children().flatten().map(Syntax::location);

        from_tokens.chain(from_children).fold(SourceRange::INVALID, SourceRange::cover)
    }

    /// A `Display` adapter printing the indented tree, one node per line.
    pub fn display_tree(&self) -> DisplayTree<'_> {
        DisplayTree::new(self)
    }

    /// Prints the tree to stderr.
    pub fn dump(&self) {
        eprint!("{}", self.display_tree());
    }
}

#[derive(Clone)]
enum ChildrenRepr<'a> {
    Slots(slice::Iter<'a, Slot>),
    Terms(slice::Iter<'a, Syntax>),
}

/// Iterator over the children of a [`Syntax`] node.
#[derive(Clone)]
pub struct Children<'a> {
    repr: ChildrenRepr<'a>,
}

impl<'a> Iterator for Children<'a> {
    type Item = Option<&'a Syntax>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.repr {
            ChildrenRepr::Slots(slots) => slots.next().map(Option::as_deref),
            ChildrenRepr::Terms(terms) => terms.next().map(Some),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.repr {
            ChildrenRepr::Slots(slots) => slots.size_hint(),
            ChildrenRepr::Terms(terms) => terms.size_hint(),
        }
    }
}

impl DoubleEndedIterator for Children<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.repr {
            ChildrenRepr::Slots(slots) => slots.next_back().map(Option::as_deref),
            ChildrenRepr::Terms(terms) => terms.next_back().map(Some),
        }
    }
}

impl ExactSizeIterator for Children<'_> {}

impl FusedIterator for Children<'_> {}

#[cfg(test)]
mod tests {
    use beaker_span::{SourceLocation, SymbolTable};
    use beaker_tokenizer::tokenize;
    use expect_test::expect;

    use super::*;

    fn lex(text: &str) -> Vec<Token> {
        let mut symbols = SymbolTable::new();
        tokenize(&mut symbols, text)
    }

    #[test]
    fn atoms() {
        let tokens = lex("x 42");
        let x = Syntax::identifier(tokens[0].clone());
        let n = Syntax::literal(tokens[1].clone());

        assert_eq!(x.kind(), IDENTIFIER);
        assert_eq!(x.shape(), Shape::Atom);
        assert_eq!(x.spelling(), Some("x"));
        assert_eq!(n.spelling(), Some("42"));
        assert_eq!(x.children().count(), 0);
        assert_eq!(n.location().to_string(), "1:3-5");
        assert!(x.trailing_token().is_none());
    }

    #[test]
    fn call() {
        let tokens = lex("f(1)");
        let arguments = Syntax::enclosure(
            tokens[1].clone(),
            Some(Syntax::literal(tokens[2].clone())),
            tokens[3].clone(),
        );
        let call = Syntax::call(Syntax::identifier(tokens[0].clone()), arguments);

        assert!(call.kind().is_application());
        assert!(call.token().is_none());
        assert_eq!(call.operand(0).and_then(Syntax::spelling), Some("f"));
        assert_eq!(call.operand(1).map(Syntax::kind), Some(ENCLOSURE));
        assert!(call.operand(2).is_none());

        expect![[r#"
            Call @1:1-5
              Identifier @1:1-2 identifier='f'
              Enclosure @1:2-5 kind='()'
                Literal @1:3-4 value='1'
        "#]]
        .assert_eq(&call.display_tree().to_string());
    }

    #[test]
    fn empty_enclosure() {
        let tokens = lex("()");
        let unit = Syntax::enclosure(tokens[0].clone(), None, tokens[1].clone());

        assert!(unit.operand(0).is_none());
        assert_eq!(unit.children().collect::<Vec<_>>(), vec![None]);
        assert_eq!(unit.trailing_token().map(Token::spelling), Some(")"));
        assert_eq!(unit.display_tree().to_string(), "Enclosure @1:1-3 kind='()'\n");
    }

    #[test]
    fn declaration_covers_introducer_and_terminator() {
        let tokens = lex("def x : int;");
        let declaration = Syntax::declaration(
            Some(tokens[0].clone()),
            Some(Syntax::identifier(tokens[1].clone())),
            Some(Syntax::literal(tokens[3].clone())),
            None,
            Some(tokens[4].clone()),
        );

        assert_eq!(declaration.shape(), Shape::Ternary);
        assert_eq!(declaration.children().filter(Option::is_some).count(), 2);
        assert_eq!(
            declaration.location(),
            SourceRange::new(SourceLocation::new(1, 1), SourceLocation::new(1, 13))
        );

        expect![[r#"
            Declaration @1:1-13 introducer='def'
              Identifier @1:5-6 identifier='x'
              Literal @1:9-12 value='int'
        "#]]
        .assert_eq(&declaration.display_tree().to_string());
    }

    #[test]
    fn declaration_without_introducer() {
        let tokens = lex("x = 1");
        let declaration = Syntax::declaration(
            None,
            Some(Syntax::identifier(tokens[0].clone())),
            None,
            Some(Syntax::literal(tokens[2].clone())),
            None,
        );

        assert_eq!(declaration.location().to_string(), "1:1-6");
        assert!(declaration.token().is_none());
    }

    #[test]
    fn multi_line_infix() {
        let tokens = lex("a\n+ b");
        let sum = Syntax::infix(
            Syntax::identifier(tokens[0].clone()),
            tokens[1].clone(),
            Syntax::identifier(tokens[2].clone()),
        );

        assert_eq!(sum.location().to_string(), "1:1..2:4");
        expect![[r#"
            Infix @1:1..2:4 operator='+'
              Identifier @1:1-2 identifier='a'
              Identifier @2:3-4 identifier='b'
        "#]]
        .assert_eq(&sum.display_tree().to_string());
    }

    #[test]
    fn constructor_token_after_specifier() {
        let tokens = lex("() -> int");
        let function = Syntax::function(
            Some(tokens[2].clone()),
            Syntax::enclosure(tokens[0].clone(), None, tokens[1].clone()),
            Syntax::literal(tokens[3].clone()),
        );

        assert!(function.kind().is_constructor());
        expect![[r#"
            Function @1:1-10 constructor='->'
              Enclosure @1:1-3 kind='()'
              Literal @1:7-10 value='int'
        "#]]
        .assert_eq(&function.display_tree().to_string());
    }

    #[test]
    fn constructor_keyword_before_specifier() {
        let tokens = lex("array [3] int");
        let array = Syntax::array(
            Some(tokens[0].clone()),
            Syntax::enclosure(
                tokens[1].clone(),
                Some(Syntax::literal(tokens[2].clone())),
                tokens[3].clone(),
            ),
            Syntax::literal(tokens[4].clone()),
        );

        assert_eq!(array.location().to_string(), "1:1-14");
    }

    #[test]
    fn empty_multiary_has_no_location() {
        let sequence = Syntax::sequence(Vec::new());

        assert!(sequence.location().is_invalid());
        assert!(sequence.terms().is_empty());
        assert_eq!(sequence.display_tree().to_string(), "Sequence\n");

        let file = Syntax::file(None);
        assert!(file.location().is_invalid());
        assert_eq!(file.display_tree().to_string(), "File\n");
    }

    #[test]
    fn control_children_keep_absent_slots() {
        let tokens = lex("do {}");
        let block = Syntax::enclosure(tokens[1].clone(), None, tokens[2].clone());
        let control = Syntax::control(tokens[0].clone(), Some(block), None);

        let children: Vec<_> = control.children().map(|child| child.map(Syntax::kind)).collect();
        assert_eq!(children, vec![Some(ENCLOSURE), None]);
        assert_eq!(control.children().next_back(), Some(None));

        expect![[r#"
            Control @1:1-6 keyword='do'
              Enclosure @1:4-6 kind='{}'
        "#]]
        .assert_eq(&control.display_tree().to_string());
    }

    #[test]
    fn list_terms() {
        let tokens = lex("a, b");
        let list = Syntax::list(vec![
            Syntax::identifier(tokens[0].clone()),
            Syntax::identifier(tokens[2].clone()),
        ]);

        assert_eq!(list.terms().len(), 2);
        assert_eq!(list.children().len(), 2);
        assert_eq!(list.operand(1).and_then(Syntax::spelling), Some("b"));
        assert_eq!(list.location().to_string(), "1:1-5");
    }
}
