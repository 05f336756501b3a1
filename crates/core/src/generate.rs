//! Integration snippet generation.
//!
//! Every (library, item classification) pair maps to one fixed template. The libraries have
//! incompatible call shapes (declarative hooks, a contract object bound to a runner, and
//! separate public/wallet clients), so templates are plain text rather than a shared AST.
//!
//! Generation never fails: missing names become [`ANONYMOUS`](crate::abi::ANONYMOUS), each
//! input becomes an empty string placeholder, and the ABI itself is never embedded.

use crate::{AbiItem, TargetLibrary};
use itertools::Itertools;

/// Returned by [`generate_named`] for library ids that are not supported.
pub const UNSUPPORTED_TARGET: &str = "// Framework snippet not supported";

/// How an ABI item is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A `pure` or `view` function.
    ReadFunction,
    /// Any other function, including ones without a declared mutability.
    WriteFunction,
    Event,
    /// Errors, constructors, `receive` and `fallback`.
    Unsupported,
}

impl Classification {
    /// Classifies an ABI item.
    pub fn of(item: &AbiItem) -> Self {
        if item.is_function() {
            if item.is_read() { Self::ReadFunction } else { Self::WriteFunction }
        } else if item.is_event() {
            Self::Event
        } else {
            Self::Unsupported
        }
    }
}

/// Generates the integration snippet for `item` in the idiom of `library`.
///
/// Returns an empty string for items that are neither functions nor events.
pub fn generate(library: TargetLibrary, address: &str, item: &AbiItem) -> String {
    use Classification::*;
    use TargetLibrary::*;

    let name = item.display_name();
    let args = placeholder_args(item);

    match (library, Classification::of(item)) {
        (_, Unsupported) => String::new(),

        (Wagmi, ReadFunction) => format!(
            r#"import {{ useReadContract }} from 'wagmi'

const {{ data, isLoading }} = useReadContract({{
  address: '{address}',
  abi: [...], // Your Contract ABI here
  functionName: '{name}',
  args: [{args}],
}})"#
        ),
        (Wagmi, WriteFunction) => format!(
            r#"import {{ useWriteContract }} from 'wagmi'

const {{ writeContract, isPending }} = useWriteContract()

const handleCall = () => {{
  writeContract({{
    address: '{address}',
    abi: [...],
    functionName: '{name}',
    args: [{args}],
  }})
}}"#
        ),
        (Wagmi, Event) => format!(
            r#"import {{ useWatchContractEvent }} from 'wagmi'

useWatchContractEvent({{
  address: '{address}',
  abi: [...],
  eventName: '{name}',
  onLogs(logs) {{
    console.log('New logs!', logs)
  }},
}})"#
        ),

        (Ethers, class @ (ReadFunction | WriteFunction)) => {
            let runner = if class == ReadFunction { "provider" } else { "signer" };
            format!(
                r#"import {{ ethers }} from 'ethers';

const provider = new ethers.BrowserProvider(window.ethereum);
const signer = await provider.getSigner();
const contract = new ethers.Contract('{address}', ABI, {runner});

// Calling {name}
const result = await contract.{name}({args});"#
            )
        }
        (Ethers, Event) => format!(
            r#"import {{ ethers }} from 'ethers';

const provider = new ethers.BrowserProvider(window.ethereum);
const contract = new ethers.Contract('{address}', ABI, provider);

contract.on('{name}', (from, to, value, event) => {{
    console.log('Event received:', {{ from, to, value }});
}});"#
        ),

        // The client lines end in a space.
        (Viem, ReadFunction) => format!(
            r#"import {{ createPublicClient, http }} from 'viem'
import {{ mainnet }} from 'viem/chains'

const client = createPublicClient({{ 
  chain: mainnet, 
  transport: http() 
}})

const data = await client.readContract({{
  address: '{address}',
  abi: [...],
  functionName: '{name}',
  args: [{args}]
}})"#
        ),
        (Viem, WriteFunction) => format!(
            r#"import {{ createWalletClient, custom }} from 'viem'
import {{ mainnet }} from 'viem/chains'

const client = createWalletClient({{
  chain: mainnet,
  transport: custom(window.ethereum)
}})

const [account] = await client.getAddresses()

const hash = await client.writeContract({{
  account,
  address: '{address}',
  abi: [...],
  functionName: '{name}',
  args: [{args}]
}})"#
        ),
        (Viem, Event) => format!(
            r#"import {{ createPublicClient, http }} from 'viem'
import {{ mainnet }} from 'viem/chains'

const client = createPublicClient({{ chain: mainnet, transport: http() }})

client.watchContractEvent({{
  address: '{address}',
  abi: [...],
  eventName: '{name}',
  onLogs: logs => console.log(logs)
}})"#
        ),
    }
}

/// Same as [`generate`], but resolves the library from its identifier.
///
/// Unknown identifiers produce [`UNSUPPORTED_TARGET`].
pub fn generate_named(library: &str, address: &str, item: &AbiItem) -> String {
    match library.parse::<TargetLibrary>() {
        Ok(library) => generate(library, address, item),
        Err(_) => {
            debug!(%library, "unsupported snippet target");
            UNSUPPORTED_TARGET.to_string()
        }
    }
}

/// One `""` per declared input. Real values are unknowable without an execution context.
fn placeholder_args(item: &AbiItem) -> String {
    item.inputs.iter().map(|_| r#""""#).join(", ")
}
