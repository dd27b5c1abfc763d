mod tests {
    use crate::contract::{execute, instantiate, query};
    use crate::error::ContractError;
    use crate::mock_querier::{mock_dependencies, REGISTRAR_ADDRESS, REGISTRAR_EXPIRES};
    use cosmwasm_std::testing::{mock_env, mock_info, MOCK_CONTRACT_ADDR};
    use cosmwasm_std::{from_binary, to_binary, Addr, CosmosMsg, Deps, DepsMut, Env, WasmMsg};
    use wns::fuses::{Fuse, Fuses};
    use wns::name_wrapper::{
        ConfigResponse, ExecuteMsg, GetDataResponse, InstantiateMsg, IsWrappedResponse, QueryMsg,
    };
    use wns::registrar::ExecuteMsg as RegistrarExecuteMsg;
    use wns::registry::ExecuteMsg as RegistryExecuteMsg;
    use wns::utils::{
        convert_namehash_to_hex_string, get_label_from_name, get_token_id_from_label, namehash,
    };

    const GRACE: u64 = 2_592_000;
    const DURATION: u64 = 31_536_000;

    fn setup(mut deps: DepsMut) {
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
            registrar_address: String::from(REGISTRAR_ADDRESS),
            base_name: String::from("wbt"),
            grace_period: None,
        };
        instantiate(deps.branch(), mock_env(), mock_info("owner", &[]), msg).unwrap();
        let msg = ExecuteMsg::SetController {
            controller: String::from("controller"),
            active: true,
        };
        execute(deps, mock_env(), mock_info("owner", &[]), msg).unwrap();
    }

    fn wrap_alice(deps: DepsMut, owner_controlled_fuses: u16) {
        let msg = ExecuteMsg::RegisterAndWrap {
            label: String::from("alice"),
            owner: String::from("alice"),
            duration: DURATION,
            resolver: None,
            owner_controlled_fuses,
        };
        execute(deps, mock_env(), mock_info("controller", &[]), msg).unwrap();
    }

    fn data_at(deps: Deps, env: Env) -> GetDataResponse {
        let msg = QueryMsg::GetData {
            node: namehash("alice.wbt"),
        };
        from_binary(&query(deps, env, msg).unwrap()).unwrap()
    }

    fn prohibited() -> ContractError {
        ContractError::OperationProhibited {
            node: convert_namehash_to_hex_string(namehash("alice.wbt")),
        }
    }

    #[test]
    fn proper_initialization() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        let res = query(deps.as_ref(), mock_env(), QueryMsg::GetConfig {}).unwrap();
        let config: ConfigResponse = from_binary(&res).unwrap();
        assert_eq!(config.base_node, namehash("wbt"));
        assert_eq!(config.grace_period, GRACE);
        assert_eq!(config.owner, Addr::unchecked("owner"));
    }

    #[test]
    fn register_and_wrap() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        let msg = ExecuteMsg::RegisterAndWrap {
            label: String::from("alice"),
            owner: String::from("alice"),
            duration: DURATION,
            resolver: Some(String::from("resolver")),
            owner_controlled_fuses: 0,
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), msg.clone())
            .unwrap_err();
        assert_eq!(
            err,
            ContractError::NotController {
                sender: String::from("alice")
            }
        );

        let res = execute(deps.as_mut(), mock_env(), mock_info("controller", &[]), msg).unwrap();
        assert_eq!(res.messages.len(), 2);
        assert_eq!(
            res.messages[0].msg,
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: String::from(REGISTRAR_ADDRESS),
                msg: to_binary(&RegistrarExecuteMsg::Register {
                    id: get_token_id_from_label(&get_label_from_name(&String::from("alice"))),
                    owner: String::from(MOCK_CONTRACT_ADDR),
                    duration: DURATION,
                    name: String::from("alice"),
                })
                .unwrap(),
                funds: vec![],
            })
        );
        assert_eq!(
            res.messages[1].msg,
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: String::from("registry_address"),
                msg: to_binary(&RegistryExecuteMsg::SetResolver {
                    node: namehash("alice.wbt"),
                    resolver: Some(String::from("resolver")),
                })
                .unwrap(),
                funds: vec![],
            })
        );

        let data = data_at(deps.as_ref(), mock_env());
        assert_eq!(data.owner, Some(Addr::unchecked("alice")));
        assert_eq!(
            data.fuses,
            Fuses::empty()
                .with(Fuse::ParentCannotControl)
                .with(Fuse::IsDotEth)
        );
        assert_eq!(
            data.expiry,
            mock_env().block.time.seconds() + DURATION + GRACE
        );
    }

    #[test]
    fn owner_fuses_burn_cannot_unwrap() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());
        wrap_alice(deps.as_mut(), Fuse::CannotTransfer.bit() as u16);

        let fuses = data_at(deps.as_ref(), mock_env()).fuses;
        assert!(fuses.contains(Fuse::CannotUnwrap));
        assert!(fuses.contains(Fuse::CannotTransfer));

        let msg = ExecuteMsg::TransferName {
            node: namehash("alice.wbt"),
            recipient: String::from("bob"),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), msg).unwrap_err();
        assert_eq!(err, prohibited());

        let msg = ExecuteMsg::Unwrap {
            label: String::from("alice"),
            registrant: String::from("alice"),
            controller: String::from("alice"),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), msg).unwrap_err();
        assert_eq!(err, prohibited());
    }

    #[test]
    fn renew_keeps_fuses() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());
        wrap_alice(deps.as_mut(), Fuse::CannotSetTtl.bit() as u16);
        let before = data_at(deps.as_ref(), mock_env());

        let msg = ExecuteMsg::Renew {
            label: String::from("alice"),
            duration: DURATION,
        };
        let res = execute(deps.as_mut(), mock_env(), mock_info("controller", &[]), msg).unwrap();
        assert_eq!(
            res.messages[0].msg,
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: String::from(REGISTRAR_ADDRESS),
                msg: to_binary(&RegistrarExecuteMsg::Renew {
                    id: get_token_id_from_label(&get_label_from_name(&String::from("alice"))),
                    duration: DURATION,
                })
                .unwrap(),
                funds: vec![],
            })
        );

        let after = data_at(deps.as_ref(), mock_env());
        assert_eq!(after.fuses, before.fuses);
        assert_eq!(after.expiry, REGISTRAR_EXPIRES + DURATION + GRACE);
    }

    #[test]
    fn renew_of_unwrapped_name_leaves_wrapper_untouched() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());

        let msg = ExecuteMsg::Renew {
            label: String::from("bob"),
            duration: DURATION,
        };
        let res = execute(deps.as_mut(), mock_env(), mock_info("controller", &[]), msg).unwrap();
        assert_eq!(res.messages.len(), 1);

        let msg = QueryMsg::IsWrapped {
            node: namehash("bob.wbt"),
        };
        let res: IsWrappedResponse =
            from_binary(&query(deps.as_ref(), mock_env(), msg).unwrap()).unwrap();
        assert!(!res.is_wrapped);
    }

    #[test]
    fn renew_after_lapse_drops_stale_wrapping() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());
        wrap_alice(deps.as_mut(), Fuse::CannotUnwrap.bit() as u16);

        // Lapsed past grace, then registered unwrapped elsewhere
        let mut later = mock_env();
        later.block.time = later.block.time.plus_seconds(DURATION + GRACE + 1_000);
        deps.querier.with_token_owner(Some("bob"));

        let msg = ExecuteMsg::Renew {
            label: String::from("alice"),
            duration: DURATION,
        };
        let res = execute(deps.as_mut(), later.clone(), mock_info("controller", &[]), msg).unwrap();
        assert_eq!(res.messages.len(), 1);

        let data = data_at(deps.as_ref(), later.clone());
        assert_eq!(data.owner, None);
        assert!(data.fuses.is_empty());
        assert_eq!(data.expiry, 0);
        let msg = QueryMsg::IsWrapped {
            node: namehash("alice.wbt"),
        };
        let res: IsWrappedResponse =
            from_binary(&query(deps.as_ref(), later, msg).unwrap()).unwrap();
        assert!(!res.is_wrapped);
    }

    #[test]
    fn renew_after_lapse_keeps_name_still_held() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());
        wrap_alice(deps.as_mut(), 0);

        let mut later = mock_env();
        later.block.time = later.block.time.plus_seconds(DURATION + GRACE + 1_000);
        let msg = ExecuteMsg::Renew {
            label: String::from("alice"),
            duration: DURATION,
        };
        execute(deps.as_mut(), later.clone(), mock_info("controller", &[]), msg).unwrap();

        let data = data_at(deps.as_ref(), later);
        assert_eq!(data.owner, Some(Addr::unchecked("alice")));
        assert_eq!(data.expiry, REGISTRAR_EXPIRES + DURATION + GRACE);
    }

    #[test]
    fn set_fuses_only_adds() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());
        wrap_alice(deps.as_mut(), 0);

        let burn = |bits: u32| ExecuteMsg::SetFuses {
            node: namehash("alice.wbt"),
            owner_controlled_fuses: bits as u16,
        };

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("bob", &[]),
            burn(Fuse::CannotUnwrap.bit()),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::Unauthorized {
                sender: String::from("bob"),
                node: convert_namehash_to_hex_string(namehash("alice.wbt")),
            }
        );

        // Needs CannotUnwrap alongside any other fuse
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &[]),
            burn(Fuse::CannotTransfer.bit()),
        )
        .unwrap_err();
        assert_eq!(err, prohibited());

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &[]),
            burn(Fuse::CannotUnwrap.bit() | Fuse::CannotTransfer.bit()),
        )
        .unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &[]),
            burn(Fuse::CannotBurnFuses.bit()),
        )
        .unwrap();

        let fuses = data_at(deps.as_ref(), mock_env()).fuses;
        assert!(fuses.contains(Fuse::CannotUnwrap));
        assert!(fuses.contains(Fuse::CannotTransfer));
        assert!(fuses.contains(Fuse::CannotBurnFuses));
        assert!(fuses.contains(Fuse::ParentCannotControl));

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("alice", &[]),
            burn(Fuse::CannotSetTtl.bit()),
        )
        .unwrap_err();
        assert_eq!(err, prohibited());
    }

    #[test]
    fn unwrap_hands_back_token_and_registry_record() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());
        wrap_alice(deps.as_mut(), 0);

        let msg = ExecuteMsg::Unwrap {
            label: String::from("alice"),
            registrant: String::from("alice"),
            controller: String::from("alice_manager"),
        };
        let res = execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), msg).unwrap();
        let id = get_token_id_from_label(&get_label_from_name(&String::from("alice")));
        assert_eq!(
            res.messages[0].msg,
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: String::from(REGISTRAR_ADDRESS),
                msg: to_binary(&RegistrarExecuteMsg::Reclaim {
                    id: id.clone(),
                    owner: String::from("alice_manager"),
                })
                .unwrap(),
                funds: vec![],
            })
        );
        assert_eq!(
            res.messages[1].msg,
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: String::from(REGISTRAR_ADDRESS),
                msg: to_binary(&RegistrarExecuteMsg::TransferNft {
                    recipient: String::from("alice"),
                    token_id: id,
                })
                .unwrap(),
                funds: vec![],
            })
        );
        assert_eq!(data_at(deps.as_ref(), mock_env()).owner, None);
    }

    #[test]
    fn transfer_and_expiry() {
        let mut deps = mock_dependencies(&[]);
        setup(deps.as_mut());
        wrap_alice(deps.as_mut(), 0);

        let msg = ExecuteMsg::TransferName {
            node: namehash("alice.wbt"),
            recipient: String::from("bob"),
        };
        execute(deps.as_mut(), mock_env(), mock_info("alice", &[]), msg).unwrap();
        assert_eq!(
            data_at(deps.as_ref(), mock_env()).owner,
            Some(Addr::unchecked("bob"))
        );

        let mut later = mock_env();
        later.block.time = later.block.time.plus_seconds(DURATION + GRACE);
        let data = data_at(deps.as_ref(), later.clone());
        assert_eq!(data.owner, None);
        assert!(data.fuses.is_empty());

        // Expired names cannot be moved
        let msg = ExecuteMsg::TransferName {
            node: namehash("alice.wbt"),
            recipient: String::from("carol"),
        };
        execute(deps.as_mut(), later, mock_info("bob", &[]), msg).unwrap_err();
    }
}
