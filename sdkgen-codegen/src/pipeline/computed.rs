//! Computed data from root analysis.
//!
//! [`ComputedData`] holds results every renderer and report would otherwise
//! recompute: borsh sizes and how often each defined type is referenced.

use indexmap::IndexMap;
use sdkgen_ir::{
    AccountNode, DefinedTypeNode, InstructionNode, RootNode, TypeNode, Visitor,
};

/// Pre-computed data from root analysis.
///
/// Maps keep declaration order. A size of `None` means the encoded length
/// depends on the value (strings, vectors, options).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ComputedData {
    /// Encoded size of each account, discriminator included
    pub account_sizes: IndexMap<String, Option<usize>>,
    /// Encoded size of each defined type
    pub type_sizes: IndexMap<String, Option<usize>>,
    /// Encoded size of each instruction's data, discriminator included
    pub instruction_data_sizes: IndexMap<String, Option<usize>>,
    /// Number of references to each defined type
    pub type_usage: IndexMap<String, usize>,
}

impl ComputedData {
    pub fn from_root(root: &RootNode) -> Self {
        let mut collector = Collector {
            root,
            data: ComputedData::default(),
        };
        for defined_type in &root.program.defined_types {
            collector.data.type_usage.insert(defined_type.name.clone(), 0);
        }
        root.accept(&mut collector);
        collector.data
    }

    /// Defined types nothing refers to.
    pub fn unused_types(&self) -> impl Iterator<Item = &str> {
        self.type_usage
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(name, _)| name.as_str())
    }

    /// Number of accounts whose size is known up front.
    pub fn fixed_size_account_count(&self) -> usize {
        self.account_sizes.values().filter(|s| s.is_some()).count()
    }
}

struct Collector<'a> {
    root: &'a RootNode,
    data: ComputedData,
}

impl Collector<'_> {
    fn count_uses(&mut self, ty: &TypeNode) {
        let usage = &mut self.data.type_usage;
        ty.for_each_defined(&mut |name| {
            if let Some(count) = usage.get_mut(name) {
                *count += 1;
            }
        });
    }
}

impl Visitor for Collector<'_> {
    fn visit_account(&mut self, account: &AccountNode) {
        let size = self.root.account_size(account);
        self.data.account_sizes.insert(account.name.clone(), size);
        for field in &account.fields {
            self.count_uses(&field.ty);
        }
    }

    fn visit_instruction(&mut self, instruction: &InstructionNode) {
        let size = self.root.instruction_data_size(instruction);
        self.data
            .instruction_data_sizes
            .insert(instruction.name.clone(), size);
        for arg in &instruction.arguments {
            self.count_uses(&arg.ty);
        }
    }

    fn visit_defined_type(&mut self, defined_type: &DefinedTypeNode) {
        let size = self.root.defined_type_size(defined_type);
        self.data.type_sizes.insert(defined_type.name.clone(), size);
        for field in defined_type.fields() {
            self.count_uses(&field.ty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_root;

    #[test]
    fn test_sample_sizes() {
        let computed = ComputedData::from_root(&sample_root());

        // discriminator + authority + seed + walletsCount + mode
        assert_eq!(computed.account_sizes["listConfig"], Some(1 + 32 + 32 + 8 + 1));
        assert_eq!(computed.account_sizes["walletEntry"], Some(1 + 32 + 32));
        assert_eq!(computed.type_sizes["mode"], Some(1));
        assert_eq!(computed.instruction_data_sizes["createList"], Some(1 + 1 + 32));
        assert_eq!(computed.instruction_data_sizes["addWallet"], Some(1));
        assert_eq!(computed.fixed_size_account_count(), 2);
    }

    #[test]
    fn test_type_usage() {
        let computed = ComputedData::from_root(&sample_root());
        // listConfig.mode and createList.mode
        assert_eq!(computed.type_usage["mode"], 2);
        assert_eq!(computed.unused_types().count(), 0);
    }

    #[test]
    fn test_declaration_order_kept() {
        let computed = ComputedData::from_root(&sample_root());
        let names: Vec<_> = computed.instruction_data_sizes.keys().cloned().collect();
        assert_eq!(
            names,
            [
                "createList",
                "addWallet",
                "removeWallet",
                "setupExtraMetas",
                "deleteList",
                "canThawPermissionless"
            ]
        );
    }
}
