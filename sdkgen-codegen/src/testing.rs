//! Test utilities for renderers.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use sdkgen_idl::Idl;
use sdkgen_ir::RootNode;

use crate::pipeline::Pipeline;

/// Program address used by the fixtures.
pub const SAMPLE_ADDRESS: &str = "ABL37q2e55mQ87KTRe6yF89TJoeysHKipwVwSRRPbTNY";

/// An IDL that declares a program and nothing else.
pub fn minimal_idl() -> Idl {
    parse(&format!(r#"{{"name": "abl", "address": "{SAMPLE_ADDRESS}"}}"#))
}

/// The allow/block list program: two accounts, a mode enum, six
/// instructions and its error codes.
pub fn sample_idl() -> Idl {
    parse(SAMPLE_IDL)
}

/// [`sample_idl`] run through the default pipeline.
pub fn sample_root() -> RootNode {
    let mut ctx = match Pipeline::new().run(sample_idl()) {
        Ok(ctx) => ctx,
        Err(e) => panic!("sample IDL should compile: {e:?}"),
    };
    match ctx.take_root() {
        Ok(root) => root,
        Err(e) => panic!("pipeline should produce a root: {e:?}"),
    }
}

/// Compare generated content line by line, reporting the first difference.
pub fn assert_content_eq(actual: &str, expected: &str) {
    for (i, (a, e)) in actual.lines().zip(expected.lines()).enumerate() {
        assert_eq!(a, e, "line {} differs\n--- actual ---\n{}", i + 1, actual);
    }
    assert_eq!(
        actual.lines().count(),
        expected.lines().count(),
        "line count differs\n--- actual ---\n{}",
        actual
    );
}

fn parse(json: &str) -> Idl {
    match json.parse::<Idl>() {
        Ok(idl) => idl,
        Err(e) => panic!("fixture IDL should parse: {e:?}"),
    }
}

const SAMPLE_IDL: &str = r#"{
  "name": "abl",
  "version": "0.1.0",
  "address": "ABL37q2e55mQ87KTRe6yF89TJoeysHKipwVwSRRPbTNY",
  "docs": ["Allow and block lists for token accounts"],
  "instructions": [
    {
      "name": "createList",
      "discriminator": 1,
      "docs": ["Create a new list owned by the authority"],
      "accounts": [
        { "name": "authority", "writable": true, "signer": true },
        { "name": "listConfig", "writable": true },
        { "name": "systemProgram", "address": "11111111111111111111111111111111" }
      ],
      "args": [
        { "name": "mode", "type": { "defined": "mode" } },
        { "name": "seed", "type": "publicKey" }
      ]
    },
    {
      "name": "addWallet",
      "discriminator": 2,
      "docs": ["Add a wallet to a list"],
      "accounts": [
        { "name": "authority", "writable": true, "signer": true },
        { "name": "listConfig", "writable": true },
        { "name": "wallet" },
        { "name": "walletEntry", "writable": true },
        { "name": "systemProgram", "address": "11111111111111111111111111111111" }
      ]
    },
    {
      "name": "removeWallet",
      "discriminator": 3,
      "docs": ["Remove a wallet from a list"],
      "accounts": [
        { "name": "authority", "writable": true, "signer": true },
        { "name": "listConfig", "writable": true },
        { "name": "walletEntry", "writable": true }
      ]
    },
    {
      "name": "setupExtraMetas",
      "discriminator": 4,
      "docs": ["Point a mint's extra account metas at a set of lists"],
      "accounts": [
        { "name": "authority", "writable": true, "signer": true },
        { "name": "ebaltsMintConfig" },
        { "name": "mint" },
        { "name": "extraMetas", "writable": true },
        { "name": "systemProgram", "address": "11111111111111111111111111111111" }
      ]
    },
    {
      "name": "deleteList",
      "discriminator": 5,
      "docs": ["Close an empty list"],
      "accounts": [
        { "name": "authority", "writable": true, "signer": true },
        { "name": "listConfig", "writable": true }
      ]
    },
    {
      "name": "canThawPermissionless",
      "discriminator": 8,
      "docs": ["Gate permissionless thaw on list membership"],
      "accounts": [
        { "name": "authority", "signer": true },
        { "name": "tokenAccount" },
        { "name": "mint" },
        { "name": "owner" },
        { "name": "extraMetas" },
        { "name": "listConfig", "optional": true },
        { "name": "walletEntry", "optional": true }
      ]
    }
  ],
  "accounts": [
    {
      "name": "listConfig",
      "discriminator": 1,
      "fields": [
        { "name": "authority", "type": "publicKey" },
        { "name": "seed", "type": "publicKey" },
        { "name": "walletsCount", "type": "u64" },
        { "name": "mode", "type": { "defined": "mode" } }
      ]
    },
    {
      "name": "walletEntry",
      "discriminator": 2,
      "fields": [
        { "name": "walletAddress", "type": "publicKey" },
        { "name": "listConfig", "type": "publicKey" }
      ]
    }
  ],
  "types": [
    {
      "name": "mode",
      "type": {
        "kind": "enum",
        "variants": [
          { "name": "allow" },
          { "name": "allowAllEoas" },
          { "name": "block" }
        ]
      }
    }
  ],
  "errors": [
    { "code": 0, "name": "invalidInstruction", "message": "Invalid instruction" },
    { "code": 1, "name": "invalidAuthority", "message": "Invalid authority" },
    { "code": 2, "name": "accountBlocked", "message": "Account blocked" },
    { "code": 3, "name": "notEnoughAccounts", "message": "Not enough accounts" },
    { "code": 4, "name": "invalidAccountData", "message": "Invalid account data" },
    { "code": 5, "name": "uninitializedAccount", "message": "Uninitialized account" },
    { "code": 6, "name": "invalidSystemProgram", "message": "Invalid system program" },
    { "code": 7, "name": "invalidConfigAccount", "message": "Invalid config account" },
    { "code": 8, "name": "accountNotWritable", "message": "Account not writable" },
    { "code": 9, "name": "invalidMint", "message": "Invalid mint" },
    { "code": 10, "name": "invalidExtraMetasAccount", "message": "Invalid extra metas account" },
    { "code": 11, "name": "immutableOwnerExtensionMissing", "message": "Immutable owner extension missing" },
    { "code": 12, "name": "invalidData", "message": "Invalid data" },
    { "code": 13, "name": "invalidEbaltsMintConfig" }
  ]
}"#;
