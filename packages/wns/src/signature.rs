use cosmwasm_std::{Api, StdError, StdResult};
use hex;

use crate::utils::keccak256;

pub const EVM_ADDRESS_LENGTH: usize = 20;
pub const SIGNATURE_LENGTH: usize = 65;
const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

pub const SET_NAME_FOR_ADDR_WITH_SIGNATURE: &str =
    "setNameForAddrWithSignature(address,string,uint256,bytes)";
pub const SET_NAME_FOR_ADDR_WITH_SIGNATURE_AND_OWNABLE: &str =
    "setNameForAddrWithSignatureAndOwnable(address,address,string,uint256,bytes)";
pub const SET_TEXT_FOR_ADDR_WITH_SIGNATURE: &str =
    "setTextForAddrWithSignature(address,string,string,uint256,bytes)";
pub const SET_TEXT_FOR_ADDR_WITH_SIGNATURE_AND_OWNABLE: &str =
    "setTextForAddrWithSignatureAndOwnable(address,address,string,string,uint256,bytes)";

pub type EvmAddress = [u8; EVM_ADDRESS_LENGTH];

/// First four bytes of the keccak256 of a function signature.
pub fn selector(function: &str) -> [u8; 4] {
    let hash = keccak256(function.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Parses a hex address, with or without `0x`, in any case.
pub fn parse_evm_address(address: &str) -> StdResult<EvmAddress> {
    let stripped = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    let bytes = hex::decode(stripped)
        .map_err(|_| StdError::generic_err(format!("{} is not a hex address", address)))?;
    if bytes.len() != EVM_ADDRESS_LENGTH {
        return Err(StdError::generic_err(format!(
            "{} is not a 20 byte address",
            address
        )));
    }
    let mut out = [0u8; EVM_ADDRESS_LENGTH];
    out.copy_from_slice(&bytes);
    Ok(out)
}

pub fn format_evm_address(address: &EvmAddress) -> String {
    format!("0x{}", hex::encode(address))
}

/// `abi.encodePacked` style payload: fields are appended without padding,
/// integers as 32 byte big endian words.
#[derive(Clone, Debug, PartialEq)]
pub struct PackedPayload {
    buf: Vec<u8>,
}

impl PackedPayload {
    pub fn new(function: &str) -> Self {
        PackedPayload {
            buf: selector(function).to_vec(),
        }
    }

    pub fn address(mut self, address: &EvmAddress) -> Self {
        self.buf.extend_from_slice(address);
        self
    }

    pub fn string(mut self, value: &str) -> Self {
        self.buf.extend_from_slice(value.as_bytes());
        self
    }

    pub fn uint(mut self, value: u64) -> Self {
        let mut word = [0u8; 32];
        word[24..].copy_from_slice(&value.to_be_bytes());
        self.buf.extend_from_slice(&word);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn digest(&self) -> Vec<u8> {
        keccak256(&self.buf)
    }
}

pub fn set_name_digest(addr: &EvmAddress, name: &str, signature_expiry: u64) -> Vec<u8> {
    PackedPayload::new(SET_NAME_FOR_ADDR_WITH_SIGNATURE)
        .address(addr)
        .string(name)
        .uint(signature_expiry)
        .digest()
}

pub fn set_name_with_ownable_digest(
    contract_addr: &EvmAddress,
    owner: &EvmAddress,
    name: &str,
    signature_expiry: u64,
) -> Vec<u8> {
    PackedPayload::new(SET_NAME_FOR_ADDR_WITH_SIGNATURE_AND_OWNABLE)
        .address(contract_addr)
        .address(owner)
        .string(name)
        .uint(signature_expiry)
        .digest()
}

pub fn set_text_digest(addr: &EvmAddress, key: &str, value: &str, signature_expiry: u64) -> Vec<u8> {
    PackedPayload::new(SET_TEXT_FOR_ADDR_WITH_SIGNATURE)
        .address(addr)
        .string(key)
        .string(value)
        .uint(signature_expiry)
        .digest()
}

pub fn set_text_with_ownable_digest(
    contract_addr: &EvmAddress,
    owner: &EvmAddress,
    key: &str,
    value: &str,
    signature_expiry: u64,
) -> Vec<u8> {
    PackedPayload::new(SET_TEXT_FOR_ADDR_WITH_SIGNATURE_AND_OWNABLE)
        .address(contract_addr)
        .address(owner)
        .string(key)
        .string(value)
        .uint(signature_expiry)
        .digest()
}

/// EIP-191 hash of a 32 byte digest, the value wallets actually sign.
pub fn eth_signed_message_hash(digest: &[u8]) -> Vec<u8> {
    keccak256(&[SIGNED_MESSAGE_PREFIX, digest].concat())
}

pub fn evm_address_from_pubkey(pubkey: &[u8]) -> StdResult<EvmAddress> {
    // uncompressed sec1: 0x04 || x || y
    if pubkey.len() != 65 || pubkey[0] != 4 {
        return Err(StdError::generic_err("expected an uncompressed public key"));
    }
    let hash = keccak256(&pubkey[1..]);
    let mut out = [0u8; EVM_ADDRESS_LENGTH];
    out.copy_from_slice(&hash[12..]);
    Ok(out)
}

/// Address that produced `signature` (r || s || v) over `hash`, or None when the
/// signature is malformed or nothing can be recovered from it.
pub fn recover_signer(api: &dyn Api, hash: &[u8], signature: &[u8]) -> Option<EvmAddress> {
    if signature.len() != SIGNATURE_LENGTH {
        return None;
    }
    let v = signature[64];
    let recovery_param = if v >= 27 { v - 27 } else { v };
    if recovery_param > 1 {
        return None;
    }
    let pubkey = api
        .secp256k1_recover_pubkey(hash, &signature[..64], recovery_param)
        .ok()?;
    evm_address_from_pubkey(&pubkey).ok()
}
