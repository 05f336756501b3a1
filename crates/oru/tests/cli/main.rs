//! Contains various tests for checking oru commands

use oru_test_utils::{TestCommand, orutest, str};

mod highlight;
mod snippet;

const USDT: &str = "0xdAC17F958D2ee523a2206206994597C13D831ec7";

/// Stores the demo contract and returns its id.
fn scan_demo(cmd: &mut TestCommand) -> String {
    let id = cmd.fuse().args(["scan", "--demo"]).stdout_lossy();
    cmd.fuse();
    id.trim().to_string()
}

// tests `--help` is printed to stdout
orutest!(print_help, |_prj, cmd| {
    let out = cmd.arg("--help").stdout_lossy();
    assert!(out.contains("Usage: oru"), "{out}");
    assert!(out.contains("snippet"), "{out}");
});

// tests that the network labels are printed in order
orutest!(networks, |_prj, cmd| {
    cmd.arg("networks").assert_success().stdout_eq(str![[r#"
Ethereum Mainnet
Sepolia Testnet
Polygon Mainnet
Arbitrum One
Optimism
Base
Avalanche C-Chain

"#]]);
});

// tests that a scanned demo contract can be viewed
orutest!(scan_demo_then_view, |prj, cmd| {
    prj.write_config("line_numbers = false\n");
    let id = scan_demo(&mut cmd);
    assert_eq!(prj.stored_files().len(), 1);
    assert!(prj.stored_files()[0].ends_with(format!("oru-contract-{id}.json")));

    let out = cmd.args(["view", &id]).stdout_lossy();
    assert_eq!(
        out,
        format!(
            r#"Lensed Artifact
  Address: {USDT}
  Network: Ethereum Mainnet
  Library: wagmi

Read (1) | Write (1) | Events (1)

Read Functions
Query state without gas costs

balanceOf [Read] view
  account: address
  Provider: Global JSON-RPC | Execution: Query
import {{ useReadContract }} from 'wagmi'

const {{ data, isLoading }} = useReadContract({{
  address: '{USDT}',
  abi: [...], // Your Contract ABI here
  functionName: 'balanceOf',
  args: [""],
}})
"#
        )
    );
});

// tests the category, library and guide flags of `oru view`
orutest!(view_events_guide, |_prj, cmd| {
    let id = scan_demo(&mut cmd);

    let out = cmd.args(["view", &id, "--category", "events", "--guide"]).stdout_lossy();
    assert!(out.contains("\nEvents\nReal-time event listeners\n"), "{out}");
    assert!(out.contains("Transfer [Write] Standard"), "{out}");
    assert!(out.contains("  value: uint256"), "{out}");
    assert!(out.contains("  Event listeners are essential for UI reactivity."), "{out}");
    assert!(!out.contains("useWatchContractEvent"), "{out}");

    let out = cmd.fuse().args(["view", &id, "-c", "write", "-l", "viem"]).stdout_lossy();
    assert!(out.contains("Library: Viem"), "{out}");
    assert!(out.contains("transfer [Write] nonpayable"), "{out}");
    assert!(out.contains("client.writeContract({"), "{out}");
    assert!(out.contains(r#"args: ["", ""]"#), "{out}");
});

// tests that a search without matches prints `No results`
orutest!(view_no_results, |_prj, cmd| {
    let id = scan_demo(&mut cmd);
    let out = cmd.args(["view", &id, "--search", "approve"]).stdout_lossy();
    assert!(out.contains("Read (0) | Write (0) | Events (0)"), "{out}");
    assert!(out.ends_with("Query state without gas costs\n\nNo results\n"), "{out}");

    let out = cmd.fuse().args(["view", &id, "-s", "TRANS", "-c", "write"]).stdout_lossy();
    assert!(out.contains("Read (0) | Write (1) | Events (1)"), "{out}");
});

// tests that an unparsable ABI is rejected and nothing is stored
orutest!(scan_invalid_abi, |prj, cmd| {
    prj.create_file("bad.json", "{not json");
    let assert = cmd.args(["scan", "--address", USDT, "--abi", "bad.json"]).assert_failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("ABI JSON format invalid"), "{stderr}");
    assert!(prj.stored_files().is_empty());
});

// tests that an ABI can be scanned from stdin and an invalid address is only a warning
orutest!(scan_stdin_artifact, |prj, cmd| {
    let artifact = r#"{"contractName":"Vault","abi":[{"type":"function","name":"deposit","inputs":[],"outputs":[],"stateMutability":"payable"}]}"#;
    let assert = cmd
        .args(["scan", "--address", "vault.eth", "--name", "Vault", "--network", "Base"])
        .stdin(artifact)
        .assert_success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("Warning: `vault.eth` is not a valid address"), "{stderr}");

    let records = cmd.fuse().args(["list", "--json"]).stdout_lossy();
    assert!(records.contains(r#""name": "Vault""#), "{records}");
    assert!(records.contains(r#""address": "vault.eth""#), "{records}");
    assert!(records.contains(r#""network": "Base""#), "{records}");
    assert_eq!(prj.stored_files().len(), 1);
});

// tests that `oru list` prints a table of stored contracts
orutest!(list_table, |_prj, cmd| {
    cmd.arg("list").assert_success().stdout_eq(str![[r#"
No contracts stored

"#]]);

    let id = scan_demo(&mut cmd);
    let out = cmd.args(["list", "--markdown"]).stdout_lossy();
    assert!(out.contains("| ID"), "{out}");
    assert!(out.contains(&id), "{out}");
    assert!(out.contains("Lensed Artifact"), "{out}");
    assert!(out.contains(USDT), "{out}");
});

// tests that removed contracts are gone
orutest!(remove_contract, |prj, cmd| {
    let id = scan_demo(&mut cmd);
    cmd.args(["remove", &id]).assert_success();
    assert!(prj.stored_files().is_empty());

    let assert = cmd.fuse().args(["view", &id]).assert_failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains(&format!("no contract with id `{id}`")), "{stderr}");

    cmd.fuse().args(["remove", &id]).assert_failure();
});

// tests that the store directory follows the config
orutest!(custom_store_dir, |prj, cmd| {
    prj.write_config("store_dir = \"abis\"\n");
    let id = scan_demo(&mut cmd);
    assert!(prj.root().join("abis").join(format!("oru-contract-{id}.json")).is_file());
});

// tests that a broken config is reported
orutest!(invalid_config, |prj, cmd| {
    prj.write_config("library = \"web3\"\n");
    let assert = cmd.arg("list").assert_failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("oru.toml error"), "{stderr}");
});

// tests that completions are generated
orutest!(completions, |_prj, cmd| {
    let out = cmd.args(["completions", "bash"]).stdout_lossy();
    assert!(out.contains("oru"), "{out}");
});
