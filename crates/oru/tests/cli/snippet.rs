use crate::{USDT, scan_demo};
use oru_test_utils::{orutest, str};

// tests the snippet for a stored write function with ethers
orutest!(ethers_write_snippet, |_prj, cmd| {
    let id = scan_demo(&mut cmd);
    cmd.args(["snippet", "transfer", "--id", &id, "--library", "ethers"])
        .assert_success()
        .stdout_eq(str![[r#"
import { ethers } from 'ethers';

const provider = new ethers.BrowserProvider(window.ethereum);
const signer = await provider.getSigner();
const contract = new ethers.Contract('0xdAC17F958D2ee523a2206206994597C13D831ec7', ABI, signer);

// Calling transfer
const result = await contract.transfer("", "");

"#]]);
});

// tests that unknown libraries produce the unsupported comment
orutest!(unsupported_library, |_prj, cmd| {
    let id = scan_demo(&mut cmd);
    cmd.args(["snippet", "balanceOf", "--id", &id, "--library", "web3"])
        .assert_success()
        .stdout_eq(str![[r#"
// Framework snippet not supported

"#]]);
});

// tests snippets straight from an ABI file, using the configured library
orutest!(snippet_from_abi_file, |prj, cmd| {
    prj.create_file(
        "abi.json",
        r#"[{"type":"event","name":"Paused","inputs":[]},{"type":"function","name":"pause","inputs":[]}]"#,
    );
    prj.write_config("library = \"viem\"\n");

    let out = cmd.args(["snippet", "Paused", "--abi", "abi.json", "-a", USDT]).stdout_lossy();
    assert!(out.contains("client.watchContractEvent({"), "{out}");
    assert!(out.contains("eventName: 'Paused'"), "{out}");

    let out = cmd
        .fuse()
        .args(["snippet", "pause", "--abi", "abi.json", "-a", USDT])
        .env("ORU_LIBRARY", "wagmi")
        .stdout_lossy();
    assert!(out.contains("useWriteContract()"), "{out}");
    assert!(out.contains("args: [],"), "{out}");
});

// tests that a missing item is an error
orutest!(snippet_unknown_item, |_prj, cmd| {
    let id = scan_demo(&mut cmd);
    let assert = cmd.args(["snippet", "approve", "--id", &id]).assert_failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("no function or event named `approve`"), "{stderr}");
});

// tests that errors are not snippet targets even when the name matches
orutest!(snippet_skips_errors, |prj, cmd| {
    prj.create_file(
        "abi.json",
        r#"[{"type":"error","name":"Unauthorized","inputs":[]},{"type":"modifier","name":"onlyOwner"}]"#,
    );
    let assert =
        cmd.args(["snippet", "Unauthorized", "--abi", "abi.json", "-a", USDT]).assert_failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("no function or event named `Unauthorized`"), "{stderr}");
});
