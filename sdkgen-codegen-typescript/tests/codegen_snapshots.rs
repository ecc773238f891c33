//! Snapshot tests for TypeScript code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use sdkgen_codegen::testing::sample_root;
use sdkgen_codegen_typescript::{
    Generator, LanguageCodegen, PreviewFile, RenderOptions, TypeScriptOptions,
};

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
fn test_program_ts() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "programs/abl.ts"), @r#"
    // This file was generated by sdkgen from the program IDL. Do not edit it by hand.

    import { type Address } from "@solana/kit";

    export const ABL_PROGRAM_ADDRESS = "ABL37q2e55mQ87KTRe6yF89TJoeysHKipwVwSRRPbTNY" as Address<"ABL37q2e55mQ87KTRe6yF89TJoeysHKipwVwSRRPbTNY">;

    export enum AblInstruction {
      CreateList = 1,
      AddWallet = 2,
      RemoveWallet = 3,
      SetupExtraMetas = 4,
      DeleteList = 5,
      CanThawPermissionless = 8,
    }
    "#);
}

#[test]
fn test_root_index_ts() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "index.ts"), @r#"
    // This file was generated by sdkgen from the program IDL. Do not edit it by hand.

    export * from "./accounts";
    export * from "./errors";
    export * from "./instructions";
    export * from "./programs";
    export * from "./types";
    "#);
}

#[test]
fn test_enum_type() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "types/mode.ts"), @r#"
    // This file was generated by sdkgen from the program IDL. Do not edit it by hand.

    import { combineCodec, getEnumDecoder, getEnumEncoder, type Codec, type Decoder, type Encoder } from "@solana/kit";

    export enum Mode {
      Allow,
      AllowAllEoas,
      Block,
    }

    export type ModeArgs = Mode;

    export function getModeEncoder(): Encoder<ModeArgs> {
      return getEnumEncoder(Mode);
    }

    export function getModeDecoder(): Decoder<Mode> {
      return getEnumDecoder(Mode);
    }

    export function getModeCodec(): Codec<ModeArgs, Mode> {
      return combineCodec(getModeEncoder(), getModeDecoder());
    }
    "#);
}

#[test]
fn test_instruction_with_args() {
    let files = generate_files();
    insta::assert_snapshot!(get_file(&files, "instructions/createList.ts"), @r#"
    // This file was generated by sdkgen from the program IDL. Do not edit it by hand.

    import { AccountRole, combineCodec, getAddressDecoder, getAddressEncoder, getStructDecoder, getStructEncoder, getU8Decoder, getU8Encoder, transformEncoder, type Address, type Codec, type Decoder, type Encoder, type Instruction, type TransactionSigner } from "@solana/kit";
    import { ABL_PROGRAM_ADDRESS } from "../programs";
    import { getModeDecoder, getModeEncoder, type Mode, type ModeArgs } from "../types";

    export const CREATE_LIST_DISCRIMINATOR = 1;

    export type CreateListInstructionData = {
      discriminator: number;
      mode: Mode;
      seed: Address;
    };

    export type CreateListInstructionDataArgs = {
      mode: ModeArgs;
      seed: Address;
    };

    export function getCreateListInstructionDataEncoder(): Encoder<CreateListInstructionDataArgs> {
      return transformEncoder(
        getStructEncoder([
          ["discriminator", getU8Encoder()],
          ["mode", getModeEncoder()],
          ["seed", getAddressEncoder()],
        ]),
        (value) => ({ ...value, discriminator: CREATE_LIST_DISCRIMINATOR }),
      );
    }

    export function getCreateListInstructionDataDecoder(): Decoder<CreateListInstructionData> {
      return getStructDecoder([
        ["discriminator", getU8Decoder()],
        ["mode", getModeDecoder()],
        ["seed", getAddressDecoder()],
      ]);
    }

    export function getCreateListInstructionDataCodec(): Codec<CreateListInstructionDataArgs, CreateListInstructionData> {
      return combineCodec(getCreateListInstructionDataEncoder(), getCreateListInstructionDataDecoder());
    }

    export type CreateListInput = {
      authority: TransactionSigner;
      listConfig: Address;
      systemProgram?: Address;
      mode: CreateListInstructionDataArgs["mode"];
      seed: CreateListInstructionDataArgs["seed"];
    };

    /** Create a new list owned by the authority */
    export function getCreateListInstruction(input: CreateListInput): Instruction {
      const accounts = [
        { address: input.authority.address, role: AccountRole.WRITABLE_SIGNER, signer: input.authority },
        { address: input.listConfig, role: AccountRole.WRITABLE },
        { address: input.systemProgram ?? ("11111111111111111111111111111111" as Address<"11111111111111111111111111111111">), role: AccountRole.READONLY },
      ];

      return {
        programAddress: ABL_PROGRAM_ADDRESS,
        accounts,
        data: getCreateListInstructionDataEncoder().encode(input),
      };
    }
    "#);
}

#[test]
fn test_instruction_optional_accounts() {
    let files = generate_files();
    let content = get_file(&files, "instructions/canThawPermissionless.ts");

    assert!(content.contains("  authority: TransactionSigner;\n  tokenAccount: Address;\n"));
    assert!(content.contains("  listConfig?: Address;\n  walletEntry?: Address;\n"));
    assert!(content.contains(
        "{ address: input.authority.address, role: AccountRole.READONLY_SIGNER, signer: input.authority },"
    ));
    assert!(content.contains(
        "{ address: input.walletEntry ?? ABL_PROGRAM_ADDRESS, role: AccountRole.READONLY },"
    ));
    assert!(content.contains("data: getCanThawPermissionlessInstructionDataEncoder().encode({}),"));
    assert!(content.contains("export type CanThawPermissionlessInstructionDataArgs = {};"));
}

#[test]
fn test_account_helpers() {
    let files = generate_files();
    let content = get_file(&files, "accounts/listConfig.ts");

    assert!(content.contains("export const LIST_CONFIG_DISCRIMINATOR = 1;"));
    assert!(content.contains(
        "export function decodeListConfig<TAddress extends string = string>(encodedAccount: EncodedAccount<TAddress>): Account<ListConfig, TAddress> {"
    ));
    assert!(content.contains(
        "export async function fetchListConfig<TAddress extends string = string>(rpc: Parameters<typeof fetchEncodedAccount>[0], address: Address<TAddress>, config?: FetchAccountConfig): Promise<Account<ListConfig, TAddress>> {"
    ));
    assert!(content.contains("export function getListConfigSize(): number {\n  return 74;\n}\n"));
}

#[test]
fn test_errors_ts() {
    let files = generate_files();
    let content = get_file(&files, "errors/abl.ts");

    assert!(content.contains(
        "/** InvalidAuthority: Invalid authority */\nexport const ABL_ERROR__INVALID_AUTHORITY = 0x1;\n"
    ));
    // no message falls back to the error name
    assert!(content.contains(
        "/** InvalidEbaltsMintConfig: invalidEbaltsMintConfig */\nexport const ABL_ERROR__INVALID_EBALTS_MINT_CONFIG = 0xd;\n"
    ));
    assert!(content.contains("export type AblError = typeof ABL_ERROR__INVALID_INSTRUCTION | "));
    assert!(content.contains("  [ABL_ERROR__INVALID_MINT]: \"Invalid mint\",\n"));
    assert!(content.contains("export function getAblErrorMessage(code: AblError): string {"));
    assert!(content.contains(
        "return isProgramError<TProgramErrorCode>(error, transactionMessage, ABL_PROGRAM_ADDRESS, code);"
    ));
}

#[test]
fn test_generate_to_dir() {
    let root = sample_root();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("src/generated");
    std::fs::create_dir_all(&output).unwrap();
    std::fs::write(output.join("stale.ts"), "export {};\n").unwrap();

    let generator = Generator::with_options(
        &root,
        TypeScriptOptions {
            render: RenderOptions {
                format_code: false,
                delete_folder_before_rendering: true,
            },
            package_folder: Some(dir.path().to_path_buf()),
        },
    );
    let result = generator.generate(&output).unwrap();

    assert!(result.cleaned);
    assert!(!output.join("stale.ts").exists());
    assert_eq!(result.file_count(), generator.preview().len());
    assert!(output.join("instructions/createList.ts").exists());

    let manifest = generator.package_manifest().unwrap().unwrap();
    manifest.write().unwrap();
    assert!(generator.package_manifest().unwrap().is_none());
}
