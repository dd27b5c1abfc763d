mod tests {
    use crate::contract::{execute, instantiate, query, DEFAULT_MAX_SIGNATURE_LIFETIME};
    use crate::error::ContractError;
    use crate::mock_querier::{
        mock_dependencies, OWNABLE_CONTRACT, WALLET_CONTRACT, WALLET_SIGNATURE,
    };
    use cosmwasm_std::testing::{mock_env, mock_info};
    use cosmwasm_std::{from_binary, Addr, Api, Binary, Deps, DepsMut};
    use k256::ecdsa::signature::Signer;
    use k256::ecdsa::{recoverable, SigningKey};
    use k256::elliptic_curve::sec1::ToEncodedPoint;
    use wns::reverse_registrar::{
        reverse_node, ConfigResponse, ExecuteMsg, InstantiateMsg, NameResponse, NodeResponse,
        QueryMsg, TextResponse,
    };
    use wns::signature::{
        evm_address_from_pubkey, format_evm_address, set_name_digest,
        set_name_with_ownable_digest, set_text_digest, EvmAddress,
    };
    use wns::utils::{convert_namehash_to_hex_string, namehash};

    const ALICE: &str = "0x314159265dd8dbb310642f98f50c066173c1259b";
    const CHAIN_ACCOUNT: &str = "wasm1qyqszqgpqyqszqgpqyqszqgpqyqszqgpjnp7du";

    fn setup(mut deps: DepsMut) {
        let msg = InstantiateMsg {
            reverse_name: String::from("addr.reverse"),
            max_signature_lifetime: None,
        };
        instantiate(deps.branch(), mock_env(), mock_info("creator", &[]), msg).unwrap();
        let msg = ExecuteMsg::SetController {
            controller: String::from("controller"),
            enabled: true,
        };
        execute(deps, mock_env(), mock_info("creator", &[]), msg).unwrap();
    }

    fn signer(seed: u8) -> SigningKey {
        SigningKey::from_bytes(&[seed; 32]).unwrap()
    }

    fn address_of(key: &SigningKey) -> EvmAddress {
        let point = key.verifying_key().to_encoded_point(false);
        evm_address_from_pubkey(point.as_bytes()).unwrap()
    }

    fn sign(key: &SigningKey, digest: &[u8]) -> Binary {
        // the keccak256 signer hashes the EIP-191 preimage, i.e. signs eth_signed_message_hash(digest)
        let preimage = [&b"\x19Ethereum Signed Message:\n32"[..], digest].concat();
        let signature: recoverable::Signature = key.sign(&preimage);
        let mut out = signature.as_ref()[..64].to_vec();
        out.push(u8::from(signature.recovery_id()) + 27);
        Binary::from(out)
    }

    fn name_of(deps: Deps, address: &str) -> String {
        let msg = QueryMsg::Node {
            address: String::from(address),
        };
        let node: NodeResponse = from_binary(&query(deps, mock_env(), msg).unwrap()).unwrap();
        let msg = QueryMsg::Name { node: node.node };
        let res: NameResponse = from_binary(&query(deps, mock_env(), msg).unwrap()).unwrap();
        res.name
    }

    fn text_of(deps: Deps, address: &str, key: &str) -> String {
        let msg = QueryMsg::Node {
            address: String::from(address),
        };
        let node: NodeResponse = from_binary(&query(deps, mock_env(), msg).unwrap()).unwrap();
        let msg = QueryMsg::Text {
            node: node.node,
            key: String::from(key),
        };
        let res: TextResponse = from_binary(&query(deps, mock_env(), msg).unwrap()).unwrap();
        res.value
    }

    fn now() -> u64 {
        mock_env().block.time.seconds()
    }

    #[test]
    fn proper_initialization() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        let res = query(deps.as_ref(), mock_env(), QueryMsg::GetConfig {}).unwrap();
        let config: ConfigResponse = from_binary(&res).unwrap();
        assert_eq!(
            config,
            ConfigResponse {
                parent_node: namehash("addr.reverse"),
                max_signature_lifetime: DEFAULT_MAX_SIGNATURE_LIFETIME,
                owner: Addr::unchecked("creator"),
            }
        );

        let msg = QueryMsg::Node {
            address: String::from(ALICE),
        };
        let node: NodeResponse = from_binary(&query(deps.as_ref(), mock_env(), msg).unwrap()).unwrap();
        assert_eq!(
            convert_namehash_to_hex_string(node.node),
            convert_namehash_to_hex_string(namehash(
                "314159265dd8dbb310642f98f50c066173c1259b.addr.reverse"
            ))
        );
    }

    #[test]
    fn set_name_and_text_for_sender() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        let msg = ExecuteMsg::SetName {
            name: String::from("alice.wbt"),
        };
        execute(deps.as_mut(), mock_env(), mock_info(ALICE, &[]), msg).unwrap();
        assert_eq!(name_of(deps.as_ref(), ALICE), "alice.wbt");

        let msg = ExecuteMsg::SetText {
            key: String::from("avatar"),
            value: String::from("ipfs://avatar"),
        };
        execute(deps.as_mut(), mock_env(), mock_info(ALICE, &[]), msg).unwrap();
        assert_eq!(text_of(deps.as_ref(), ALICE, "avatar"), "ipfs://avatar");
        assert_eq!(text_of(deps.as_ref(), ALICE, "url"), "");

        // Chain accounts get their own record, apart from the hex one
        let msg = ExecuteMsg::SetName {
            name: String::from("creator.wbt"),
        };
        execute(deps.as_mut(), mock_env(), mock_info(CHAIN_ACCOUNT, &[]), msg).unwrap();
        assert_eq!(name_of(deps.as_ref(), CHAIN_ACCOUNT), "creator.wbt");
        assert_eq!(name_of(deps.as_ref(), ALICE), "alice.wbt");

        let msg = ExecuteMsg::SetText {
            key: String::from("url"),
            value: String::from("https://creator.example"),
        };
        execute(deps.as_mut(), mock_env(), mock_info(CHAIN_ACCOUNT, &[]), msg).unwrap();
        assert_eq!(
            text_of(deps.as_ref(), CHAIN_ACCOUNT, "url"),
            "https://creator.example"
        );

        let msg = ExecuteMsg::SetName {
            name: String::from("x.wbt"),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("ab", &[]), msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidAddress {
                address: String::from("ab")
            }
        );
    }

    #[test]
    fn controller_sets_name_for_chain_address() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        // Same message the registrar controller emits after a registration
        for (addr, name) in [("alice", "alice.wbt"), (CHAIN_ACCOUNT, "bech.wbt")] {
            let msg = ExecuteMsg::SetNameForAddr {
                addr: String::from(addr),
                name: String::from(name),
            };
            execute(deps.as_mut(), mock_env(), mock_info("controller", &[]), msg).unwrap();
            assert_eq!(name_of(deps.as_ref(), addr), name);
        }

        let canonical = deps.api.addr_canonicalize("alice").unwrap();
        let msg = QueryMsg::Node {
            address: String::from("alice"),
        };
        let node: NodeResponse = from_binary(&query(deps.as_ref(), mock_env(), msg).unwrap()).unwrap();
        assert_eq!(node.node, reverse_node(&namehash("addr.reverse"), canonical.as_slice()));

        // The account itself may write its record, others may not
        let msg = |name: &str| ExecuteMsg::SetNameForAddr {
            addr: String::from("alice"),
            name: String::from(name),
        };
        execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), msg("main.wbt")).unwrap();
        assert_eq!(name_of(deps.as_ref(), "alice"), "main.wbt");
        let err = execute(deps.as_mut(), mock_env(), mock_info("bob", &[]), msg("evil.wbt"))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::Unauthorized {
                sender: String::from("bob"),
                addr: String::from("alice"),
            }
        );
    }

    #[test]
    fn set_name_for_addr() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        let msg = |name: &str| ExecuteMsg::SetNameForAddr {
            addr: String::from(ALICE),
            name: String::from(name),
        };
        execute(deps.as_mut(), mock_env(), mock_info("controller", &[]), msg("alice.wbt")).unwrap();
        assert_eq!(name_of(deps.as_ref(), ALICE), "alice.wbt");

        // Upper case hex is the same address
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("0x314159265DD8dbb310642f98f50C066173C1259b", &[]),
            msg("main.wbt"),
        )
        .unwrap();
        assert_eq!(name_of(deps.as_ref(), ALICE), "main.wbt");

        let err = execute(deps.as_mut(), mock_env(), mock_info("mallory", &[]), msg("evil.wbt"))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::Unauthorized {
                sender: String::from("mallory"),
                addr: String::from(ALICE),
            }
        );

        let msg = ExecuteMsg::SetController {
            controller: String::from("controller"),
            enabled: false,
        };
        execute(deps.as_mut(), mock_env(), mock_info("creator", &[]), msg).unwrap();
        let msg = ExecuteMsg::SetNameForAddr {
            addr: String::from(ALICE),
            name: String::from("again.wbt"),
        };
        execute(deps.as_mut(), mock_env(), mock_info("controller", &[]), msg).unwrap_err();
    }

    #[test]
    fn set_name_with_signature() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        let key = signer(7);
        let addr = address_of(&key);
        let expiry = now() + 3_600;
        let signature = sign(&key, &set_name_digest(&addr, "alice.wbt", expiry));
        let msg = |name: &str, signature_expiry: u64, signature: &Binary| {
            ExecuteMsg::SetNameForAddrWithSignature {
                addr: format_evm_address(&addr),
                name: String::from(name),
                signature_expiry,
                signature: signature.clone(),
            }
        };

        // Tampered payload
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            msg("mallory.wbt", expiry, &signature),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::InvalidSignature {});

        // Signed by someone else
        let forged = sign(&signer(8), &set_name_digest(&addr, "alice.wbt", expiry));
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            msg("alice.wbt", expiry, &forged),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::InvalidSignature {});

        let malformed = Binary::from(vec![1u8; 10]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            msg("alice.wbt", expiry, &malformed),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::InvalidSignature {});

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            msg("alice.wbt", expiry, &signature),
        )
        .unwrap();
        assert_eq!(
            name_of(deps.as_ref(), &format_evm_address(&addr)),
            "alice.wbt"
        );
    }

    #[test]
    fn signature_expiry_bounds() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        let key = signer(7);
        let addr = address_of(&key);
        let msg = |signature_expiry: u64| ExecuteMsg::SetNameForAddrWithSignature {
            addr: format_evm_address(&addr),
            name: String::from("alice.wbt"),
            signature_expiry,
            signature: sign(&key, &set_name_digest(&addr, "alice.wbt", signature_expiry)),
        };

        let err = execute(deps.as_mut(), mock_env(), mock_info("relayer", &[]), msg(now() - 1))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::SignatureExpired {
                expiry: now() - 1,
                now: now(),
            }
        );

        let too_far = now() + DEFAULT_MAX_SIGNATURE_LIFETIME + 1;
        let err = execute(deps.as_mut(), mock_env(), mock_info("relayer", &[]), msg(too_far))
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::SignatureExpiryTooHigh {
                expiry: too_far,
                max: now() + DEFAULT_MAX_SIGNATURE_LIFETIME,
            }
        );

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            msg(now() + DEFAULT_MAX_SIGNATURE_LIFETIME),
        )
        .unwrap();
        execute(deps.as_mut(), mock_env(), mock_info("relayer", &[]), msg(now())).unwrap();
    }

    #[test]
    fn set_text_with_signature() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        let key = signer(9);
        let addr = address_of(&key);
        let expiry = now() + 60;
        let msg = ExecuteMsg::SetTextForAddrWithSignature {
            addr: format_evm_address(&addr),
            key: String::from("url"),
            value: String::from("https://alice.example"),
            signature_expiry: expiry,
            signature: sign(
                &key,
                &set_text_digest(&addr, "url", "https://alice.example", expiry),
            ),
        };
        execute(deps.as_mut(), mock_env(), mock_info("relayer", &[]), msg).unwrap();
        assert_eq!(
            text_of(deps.as_ref(), &format_evm_address(&addr), "url"),
            "https://alice.example"
        );
    }

    #[test]
    fn set_name_for_ownable_contract() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        let key = signer(7);
        let owner = format_evm_address(&address_of(&key));
        deps.querier.with_contract_owner(&owner);

        let contract = wns::signature::parse_evm_address(OWNABLE_CONTRACT).unwrap();
        let expiry = now() + 60;
        let digest =
            set_name_with_ownable_digest(&contract, &address_of(&key), "vault.wbt", expiry);
        let msg = |owner: &str, signature: Binary| ExecuteMsg::SetNameForAddrWithSignatureAndOwnable {
            contract_addr: String::from(OWNABLE_CONTRACT),
            owner: String::from(owner),
            name: String::from("vault.wbt"),
            signature_expiry: expiry,
            signature,
        };

        // Claimed owner must match what the contract reports
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            msg(ALICE, sign(&key, &digest)),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::NotOwnerOfContract {
                owner: String::from(ALICE),
                contract: String::from(OWNABLE_CONTRACT),
            }
        );

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            msg(&owner, sign(&signer(8), &digest)),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::InvalidSignature {});

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            msg(&owner, sign(&key, &digest)),
        )
        .unwrap();
        assert_eq!(name_of(deps.as_ref(), OWNABLE_CONTRACT), "vault.wbt");
    }

    #[test]
    fn contract_wallet_owner_validates_signature() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());
        deps.querier.with_contract_owner(WALLET_CONTRACT);

        let msg = |signature: &[u8]| ExecuteMsg::SetTextForAddrWithSignatureAndOwnable {
            contract_addr: String::from(OWNABLE_CONTRACT),
            owner: String::from(WALLET_CONTRACT),
            key: String::from("description"),
            value: String::from("treasury"),
            signature_expiry: now() + 60,
            signature: Binary::from(signature),
        };

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            msg(b"not approved"),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::InvalidSignature {});

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            msg(WALLET_SIGNATURE),
        )
        .unwrap();
        assert_eq!(
            text_of(deps.as_ref(), OWNABLE_CONTRACT, "description"),
            "treasury"
        );
    }

    #[test]
    fn test_set_config() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        let msg = ExecuteMsg::SetConfig {
            max_signature_lifetime: 60,
            owner: String::from("new_owner"),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("random", &[]), msg.clone())
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::NotOwner {
                sender: String::from("random"),
                owner: String::from("creator"),
            }
        );

        execute(deps.as_mut(), mock_env(), mock_info("creator", &[]), msg).unwrap();
        let res = query(deps.as_ref(), mock_env(), QueryMsg::GetConfig {}).unwrap();
        let config: ConfigResponse = from_binary(&res).unwrap();
        assert_eq!(config.max_signature_lifetime, 60);
        assert_eq!(config.owner, Addr::unchecked("new_owner"));
    }
}
