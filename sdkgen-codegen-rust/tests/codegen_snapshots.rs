//! Snapshot tests for Rust code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use sdkgen_codegen::testing::sample_root;
use sdkgen_codegen_rust::{Generator, LanguageCodegen, PreviewFile, RenderOptions, RustOptions};

fn generate_files() -> Vec<PreviewFile> {
    let root = sample_root();
    Generator::new(&root).preview()
}

fn get_file<'a>(files: &'a [PreviewFile], path: &str) -> &'a str {
    files
        .iter()
        .find(|f| f.path == path)
        .map(|f| f.content.as_str())
        .unwrap_or_else(|| panic!("{path} not generated"))
}

#[test]
fn test_programs_rs() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "programs.rs"), @r#"
    // This file was generated by sdkgen from the program IDL. Do not edit it by hand.

    use solana_program::{pubkey, pubkey::Pubkey};

    /// `abl` program ID.
    pub const ABL_ID: Pubkey = pubkey!("ABL37q2e55mQ87KTRe6yF89TJoeysHKipwVwSRRPbTNY");
    "#);
}

#[test]
fn test_root_mod_rs() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "mod.rs"), @r"
    // This file was generated by sdkgen from the program IDL. Do not edit it by hand.

    pub mod accounts;
    pub mod errors;
    pub mod instructions;
    pub mod programs;
    pub mod types;

    pub(crate) use programs::*;
    ");
}

#[test]
fn test_enum_type() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "types/mode.rs"), @r"
    // This file was generated by sdkgen from the program IDL. Do not edit it by hand.

    use borsh::{BorshDeserialize, BorshSerialize};

    #[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Hash)]
    pub enum Mode {
        Allow,
        AllowAllEoas,
        Block,
    }
    ");
}

#[test]
fn test_account_with_discriminator() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "accounts/list_config.rs"), @r#"
    // This file was generated by sdkgen from the program IDL. Do not edit it by hand.

    use borsh::{BorshDeserialize, BorshSerialize};
    use solana_program::pubkey::Pubkey;

    use crate::generated::types::Mode;

    #[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
    pub struct ListConfig {
        pub discriminator: u8,
        pub authority: Pubkey,
        pub seed: Pubkey,
        pub wallets_count: u64,
        pub mode: Mode,
    }

    impl ListConfig {
        pub const DISCRIMINATOR: u8 = 1;
        pub const LEN: usize = 74;

        #[inline(always)]
        pub fn from_bytes(data: &[u8]) -> Result<Self, std::io::Error> {
            let mut data = data;
            let account = Self::deserialize(&mut data)?;
            if account.discriminator != Self::DISCRIMINATOR {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "invalid ListConfig discriminator",
                ));
            }
            Ok(account)
        }
    }

    impl<'a> TryFrom<&solana_program::account_info::AccountInfo<'a>> for ListConfig {
        type Error = std::io::Error;

        fn try_from(account_info: &solana_program::account_info::AccountInfo<'a>) -> Result<Self, Self::Error> {
            let data = account_info.data.borrow();
            Self::from_bytes(&data)
        }
    }
    "#);
}

#[test]
fn test_instruction_with_args() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "instructions/create_list.rs"), @r#"
    // This file was generated by sdkgen from the program IDL. Do not edit it by hand.

    use borsh::{BorshDeserialize, BorshSerialize};
    use solana_program::instruction::{AccountMeta, Instruction};
    use solana_program::pubkey::Pubkey;

    use crate::generated::types::Mode;

    /// Create a new list owned by the authority
    #[derive(Debug)]
    pub struct CreateList {
        pub authority: Pubkey,
        pub list_config: Pubkey,
        pub system_program: Pubkey,
    }

    impl CreateList {
        pub fn instruction(&self, args: CreateListInstructionArgs) -> Instruction {
            let mut accounts = Vec::with_capacity(3);
            accounts.push(AccountMeta::new(self.authority, true));
            accounts.push(AccountMeta::new(self.list_config, false));
            accounts.push(AccountMeta::new_readonly(self.system_program, false));
            let mut data = borsh::to_vec(&CreateListInstructionData::new()).unwrap();
            let mut args = borsh::to_vec(&args).unwrap();
            data.append(&mut args);

            Instruction {
                program_id: crate::generated::programs::ABL_ID,
                accounts,
                data,
            }
        }
    }

    #[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
    pub struct CreateListInstructionData {
        discriminator: u8,
    }

    impl CreateListInstructionData {
        pub fn new() -> Self {
            Self { discriminator: 1 }
        }
    }

    impl Default for CreateListInstructionData {
        fn default() -> Self {
            Self::new()
        }
    }

    #[derive(BorshSerialize, BorshDeserialize, Clone, Debug, Eq, PartialEq)]
    pub struct CreateListInstructionArgs {
        pub mode: Mode,
        pub seed: Pubkey,
    }

    /// Builds a [`CreateList`] instruction.
    #[derive(Clone, Debug, Default)]
    pub struct CreateListBuilder {
        authority: Option<Pubkey>,
        list_config: Option<Pubkey>,
        system_program: Option<Pubkey>,
        mode: Option<Mode>,
        seed: Option<Pubkey>,
    }

    impl CreateListBuilder {
        pub fn new() -> Self {
            Self::default()
        }

        #[inline(always)]
        pub fn authority(&mut self, authority: Pubkey) -> &mut Self {
            self.authority = Some(authority);
            self
        }

        #[inline(always)]
        pub fn list_config(&mut self, list_config: Pubkey) -> &mut Self {
            self.list_config = Some(list_config);
            self
        }

        /// `[optional account, default to '11111111111111111111111111111111']`
        #[inline(always)]
        pub fn system_program(&mut self, system_program: Pubkey) -> &mut Self {
            self.system_program = Some(system_program);
            self
        }

        #[inline(always)]
        pub fn mode(&mut self, mode: Mode) -> &mut Self {
            self.mode = Some(mode);
            self
        }

        #[inline(always)]
        pub fn seed(&mut self, seed: Pubkey) -> &mut Self {
            self.seed = Some(seed);
            self
        }

        pub fn instruction(&self) -> Instruction {
            let accounts = CreateList {
                authority: self.authority.expect("authority is not set"),
                list_config: self.list_config.expect("list_config is not set"),
                system_program: self.system_program.unwrap_or(solana_program::pubkey!("11111111111111111111111111111111")),
            };
            let args = CreateListInstructionArgs {
                mode: self.mode.clone().expect("mode is not set"),
                seed: self.seed.clone().expect("seed is not set"),
            };

            accounts.instruction(args)
        }
    }
    "#);
}

#[test]
fn test_instruction_optional_accounts() {
    let files = generate_files();
    let content = get_file(&files, "instructions/can_thaw_permissionless.rs");

    assert!(content.contains(
        "        if let Some(list_config) = self.list_config {\n\
         \x20           accounts.push(AccountMeta::new_readonly(list_config, false));\n\
         \x20       } else {\n\
         \x20           accounts.push(AccountMeta::new_readonly(crate::generated::programs::ABL_ID, false));\n\
         \x20       }\n"
    ));
    assert!(content.contains("    pub list_config: Option<Pubkey>,\n"));
    assert!(content.contains("    /// `[optional account]`\n"));
    assert!(content.contains("pub fn wallet_entry(&mut self, wallet_entry: Option<Pubkey>) -> &mut Self {"));
    // no args: the data is the discriminator alone
    assert!(content.contains("let data = borsh::to_vec(&CanThawPermissionlessInstructionData::new()).unwrap();"));
    assert!(!content.contains("CanThawPermissionlessInstructionArgs"));
    assert!(content.contains("        accounts.instruction()\n"));
}

#[test]
fn test_errors_rs() {
    let files = generate_files();
    let content = get_file(&files, "errors/abl.rs");

    assert!(content.contains("use num_derive::FromPrimitive;\nuse thiserror::Error;\n"));
    assert!(content.contains(
        "#[derive(Clone, Debug, Eq, Error, FromPrimitive, PartialEq)]\npub enum AblError {\n"
    ));
    assert!(content.contains(
        "    /// 10 - Invalid extra metas account\n\
         \x20   #[error(\"Invalid extra metas account\")]\n\
         \x20   InvalidExtraMetasAccount = 0xa,\n"
    ));
    // falls back to the error name when there is no message
    assert!(content.contains("    #[error(\"invalidEbaltsMintConfig\")]\n    InvalidEbaltsMintConfig = 0xd,\n"));
    assert!(content.contains(
        "impl From<AblError> for solana_program::program_error::ProgramError {\n\
         \x20   fn from(e: AblError) -> Self {\n\
         \x20       solana_program::program_error::ProgramError::Custom(e as u32)\n"
    ));
}

#[test]
fn test_category_mods() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "accounts/mod.rs"), @r"
    // This file was generated by sdkgen from the program IDL. Do not edit it by hand.

    pub(crate) mod list_config;
    pub(crate) mod wallet_entry;

    pub use self::list_config::*;
    pub use self::wallet_entry::*;
    ");
}

#[test]
fn test_generate_writes_tree() {
    let root = sample_root();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("src/generated");
    std::fs::create_dir_all(&out).unwrap();
    std::fs::write(out.join("stale.rs"), "// old").unwrap();

    let generator = Generator::with_options(
        &root,
        RustOptions {
            render: RenderOptions {
                format_code: false,
                delete_folder_before_rendering: true,
            },
            crate_folder: Some(dir.path().to_path_buf()),
            ..Default::default()
        },
    );
    let result = generator.generate(&out).unwrap();

    assert!(result.cleaned);
    assert_eq!(result.file_count(), generator.preview().len());
    assert!(!out.join("stale.rs").exists());
    assert!(out.join("instructions/create_list.rs").exists());

    let manifest = generator.package_manifest().unwrap().unwrap();
    assert!(manifest.content().contains("name = \"abl-client\""));
    manifest.write().unwrap();
    assert!(generator.package_manifest().unwrap().is_none());
}
