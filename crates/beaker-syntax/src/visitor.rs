use crate::Syntax;
use crate::SyntaxKind::*;

/// Read-only traversal over a tree.
///
/// Each kind has its own method, which by default forwards to the method of
/// the kind's shape. Shape methods in turn default to visiting every present
/// child, so an implementation only overrides what it cares about.
pub trait Visitor {
    fn visit(&mut self, syntax: &Syntax) {
        match syntax.kind() {
            LITERAL => self.visit_literal(syntax),
            IDENTIFIER => self.visit_identifier(syntax),
            PREFIX => self.visit_prefix(syntax),
            POSTFIX => self.visit_postfix(syntax),
            ENCLOSURE => self.visit_enclosure(syntax),
            FILE => self.visit_file(syntax),
            INFIX => self.visit_infix(syntax),
            ARRAY => self.visit_array(syntax),
            FUNCTION => self.visit_function(syntax),
            TEMPLATE => self.visit_template(syntax),
            CALL => self.visit_call(syntax),
            INDEX => self.visit_index(syntax),
            CONTROL => self.visit_control(syntax),
            CONSTRAINT => self.visit_constraint(syntax),
            CAPTURE => self.visit_capture(syntax),
            DECLARATION => self.visit_declaration(syntax),
            LIST => self.visit_list(syntax),
            SEQUENCE => self.visit_sequence(syntax),
        }
    }

    fn visit_atom(&mut self, _syntax: &Syntax) {}

    fn visit_unary(&mut self, syntax: &Syntax) {
        walk_children(self, syntax);
    }

    fn visit_binary(&mut self, syntax: &Syntax) {
        walk_children(self, syntax);
    }

    fn visit_ternary(&mut self, syntax: &Syntax) {
        walk_children(self, syntax);
    }

    fn visit_multiary(&mut self, syntax: &Syntax) {
        walk_children(self, syntax);
    }

    fn visit_literal(&mut self, syntax: &Syntax) {
        self.visit_atom(syntax);
    }

    fn visit_identifier(&mut self, syntax: &Syntax) {
        self.visit_atom(syntax);
    }

    fn visit_prefix(&mut self, syntax: &Syntax) {
        self.visit_unary(syntax);
    }

    fn visit_postfix(&mut self, syntax: &Syntax) {
        self.visit_unary(syntax);
    }

    fn visit_enclosure(&mut self, syntax: &Syntax) {
        self.visit_unary(syntax);
    }

    fn visit_file(&mut self, syntax: &Syntax) {
        self.visit_unary(syntax);
    }

    fn visit_infix(&mut self, syntax: &Syntax) {
        self.visit_binary(syntax);
    }

    fn visit_array(&mut self, syntax: &Syntax) {
        self.visit_binary(syntax);
    }

    fn visit_function(&mut self, syntax: &Syntax) {
        self.visit_binary(syntax);
    }

    fn visit_template(&mut self, syntax: &Syntax) {
        self.visit_binary(syntax);
    }

    fn visit_call(&mut self, syntax: &Syntax) {
        self.visit_binary(syntax);
    }

    fn visit_index(&mut self, syntax: &Syntax) {
        self.visit_binary(syntax);
    }

    fn visit_control(&mut self, syntax: &Syntax) {
        self.visit_binary(syntax);
    }

    fn visit_constraint(&mut self, syntax: &Syntax) {
        self.visit_binary(syntax);
    }

    fn visit_capture(&mut self, syntax: &Syntax) {
        self.visit_binary(syntax);
    }

    fn visit_declaration(&mut self, syntax: &Syntax) {
        self.visit_ternary(syntax);
    }

    fn visit_list(&mut self, syntax: &Syntax) {
        self.visit_multiary(syntax);
    }

    fn visit_sequence(&mut self, syntax: &Syntax) {
        self.visit_multiary(syntax);
    }
}

/// Visits every present child of `syntax` in order.
pub fn walk_children<V: Visitor + ?Sized>(visitor: &mut V, syntax: &Syntax) {
    for child in syntax.children().flatten() {
        visitor.visit(child);
    }
}

#[cfg(test)]
mod tests {
    use beaker_span::SymbolTable;
    use beaker_tokenizer::tokenize;

    use super::*;

    #[derive(Default)]
    struct Counter {
        identifiers: Vec<String>,
        binaries: usize,
        atoms: usize,
    }

    impl Visitor for Counter {
        fn visit_identifier(&mut self, syntax: &Syntax) {
            self.identifiers.extend(syntax.spelling().map(str::to_owned));
            self.visit_atom(syntax);
        }

        fn visit_atom(&mut self, _syntax: &Syntax) {
            self.atoms += 1;
        }

        fn visit_binary(&mut self, syntax: &Syntax) {
            self.binaries += 1;
            walk_children(self, syntax);
        }
    }

    #[test]
    fn kinds_forward_to_their_shape() {
        let mut symbols = SymbolTable::new();
        let tokens = tokenize(&mut symbols, "a * (b + 1)");

        let sum = Syntax::infix(
            Syntax::identifier(tokens[3].clone()),
            tokens[4].clone(),
            Syntax::literal(tokens[5].clone()),
        );
        let group = Syntax::enclosure(tokens[2].clone(), Some(sum), tokens[6].clone());
        let product = Syntax::infix(Syntax::identifier(tokens[0].clone()), tokens[1].clone(), group);

        let mut counter = Counter::default();
        counter.visit(&product);

        assert_eq!(counter.identifiers, vec!["a", "b"]);
        assert_eq!(counter.binaries, 2);
        assert_eq!(counter.atoms, 3);
    }

    #[test]
    fn absent_children_are_skipped() {
        let mut symbols = SymbolTable::new();
        let tokens = tokenize(&mut symbols, "def x;");
        let declaration = Syntax::declaration(
            Some(tokens[0].clone()),
            Some(Syntax::identifier(tokens[1].clone())),
            None,
            None,
            Some(tokens[2].clone()),
        );

        let mut counter = Counter::default();
        counter.visit(&declaration);

        assert_eq!(counter.identifiers, vec!["x"]);
        assert_eq!(counter.binaries, 0);
    }
}
