//! Tree walking.

use crate::{AccountNode, DefinedTypeNode, ErrorNode, InstructionNode, ProgramNode, RootNode};

/// Hooks called while walking a [`RootNode`].
///
/// Every hook defaults to doing nothing, so renderers only implement the
/// node kinds they emit something for.
pub trait Visitor {
    fn visit_program(&mut self, _program: &ProgramNode) {}
    fn visit_account(&mut self, _account: &AccountNode) {}
    fn visit_instruction(&mut self, _instruction: &InstructionNode) {}
    fn visit_defined_type(&mut self, _defined_type: &DefinedTypeNode) {}
    fn visit_error(&mut self, _error: &ErrorNode) {}
}

impl RootNode {
    /// Walk the tree: program, then accounts, instructions, defined types
    /// and errors, each in declaration order.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        let program = &self.program;
        visitor.visit_program(program);
        for account in &program.accounts {
            visitor.visit_account(account);
        }
        for instruction in &program.instructions {
            visitor.visit_instruction(instruction);
        }
        for defined_type in &program.defined_types {
            visitor.visit_defined_type(defined_type);
        }
        for error in &program.errors {
            visitor.visit_error(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::tests::sample_root;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        fn visit_program(&mut self, program: &ProgramNode) {
            self.events.push(format!("program:{}", program.name));
        }
        fn visit_account(&mut self, account: &AccountNode) {
            self.events.push(format!("account:{}", account.name));
        }
        fn visit_instruction(&mut self, instruction: &InstructionNode) {
            self.events.push(format!("instruction:{}", instruction.name));
        }
        fn visit_defined_type(&mut self, defined_type: &DefinedTypeNode) {
            self.events.push(format!("type:{}", defined_type.name));
        }
        fn visit_error(&mut self, error: &ErrorNode) {
            self.events.push(format!("error:{}", error.name));
        }
    }

    #[test]
    fn test_accept_visits_in_order() {
        let mut recorder = Recorder::default();
        sample_root().accept(&mut recorder);
        assert_eq!(
            recorder.events,
            [
                "program:abl",
                "account:listConfig",
                "instruction:createList",
                "type:mode",
                "type:walletEntry",
                "error:invalidInstruction",
            ]
        );
    }

    #[test]
    fn test_default_hooks_are_noops() {
        struct CountErrors(usize);
        impl Visitor for CountErrors {
            fn visit_error(&mut self, _error: &ErrorNode) {
                self.0 += 1;
            }
        }

        let mut counter = CountErrors(0);
        sample_root().accept(&mut counter);
        assert_eq!(counter.0, 1);
    }
}
