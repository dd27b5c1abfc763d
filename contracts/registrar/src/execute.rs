use crate::error::ContractError;
use crate::state::{Approval, BaseRegistrar, Config, TokenInfo, CONFIG, CONTROLLERS, EXPIRIES};
use cosmwasm_std::{
    to_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
    WasmMsg,
};
use cw0::Expiration;
use cw2::set_contract_version;
use cw721::Cw721ReceiveMsg;
use wns::pricing::DEFAULT_GRACE_PERIOD;
use wns::registrar::{ContractInfoResponse, ExecuteMsg, InstantiateMsg, MigrateMsg};
use wns::registry::ExecuteMsg as RegistryExecuteMsg;
use wns::utils::{get_label_from_name, namehash};

const CONTRACT_NAME: &str = "crates.io:wns-registrar";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

fn decode_id(id: &str) -> Result<Vec<u8>, ContractError> {
    hex::decode(id).map_err(|_| ContractError::BytesFormatError {})
}

impl<'a> BaseRegistrar<'a> {
    pub fn instantiate(
        &self,
        deps: DepsMut,
        _env: Env,
        info: MessageInfo,
        msg: InstantiateMsg,
    ) -> Result<Response, ContractError> {
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

        let base_node = decode_id(&msg.base_node)?;
        if namehash(msg.base_name.as_str()) != base_node {
            return Err(ContractError::NameAndHashNotMatch {});
        }

        let info_response = ContractInfoResponse {
            name: msg.name,
            symbol: msg.symbol,
        };
        self.contract_info.save(deps.storage, &info_response)?;
        self.token_count.save(deps.storage, &0u64)?;

        let config = Config {
            grace_period: msg.grace_period.unwrap_or(DEFAULT_GRACE_PERIOD),
            registry_address: deps.api.addr_canonicalize(msg.registry_address.as_str())?,
            owner: deps.api.addr_canonicalize(info.sender.as_str())?,
            base_node,
            base_name: msg.base_name.clone(),
        };
        CONFIG.save(deps.storage, &config)?;

        Ok(Response::new()
            .add_attribute("method", "instantiate")
            .add_attribute("base_name", msg.base_name)
            .add_attribute("grace_period", config.grace_period.to_string()))
    }

    pub fn execute(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, ContractError> {
        match msg {
            ExecuteMsg::Register {
                id,
                owner,
                duration,
                name,
            } => self.register(deps, env, info, id, owner, duration, name),
            ExecuteMsg::Renew { id, duration } => self.renew(deps, env, info, id, duration),
            ExecuteMsg::Reclaim { id, owner } => self.reclaim(deps, env, info, id, owner),
            ExecuteMsg::AddController { address } => self.add_controller(deps, info, address),
            ExecuteMsg::RemoveController { address } => {
                self.remove_controller(deps, info, address)
            }
            ExecuteMsg::SetConfig {
                grace_period,
                registry_address,
                owner,
            } => self.set_config(deps, info, grace_period, registry_address, owner),
            ExecuteMsg::TransferNft {
                recipient,
                token_id,
            } => self.transfer_nft(deps, env, info, recipient, token_id),
            ExecuteMsg::SendNft {
                contract,
                token_id,
                msg,
            } => self.send_nft(deps, env, info, contract, token_id, msg),
            ExecuteMsg::Approve {
                spender,
                token_id,
                expires,
            } => self.approve(deps, env, info, spender, token_id, expires),
            ExecuteMsg::Revoke { spender, token_id } => {
                self.revoke(deps, env, info, spender, token_id)
            }
            ExecuteMsg::ApproveAll { operator, expires } => {
                self.approve_all(deps, env, info, operator, expires)
            }
            ExecuteMsg::RevokeAll { operator } => self.revoke_all(deps, info, operator),
        }
    }

    pub fn migrate(&self, deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
        Ok(Response::default())
    }

    fn only_owner(&self, deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
        let config = CONFIG.load(deps.storage)?;
        let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
        if sender != config.owner {
            return Err(ContractError::NotOwner {
                sender: info.sender.to_string(),
                owner: deps.api.addr_humanize(&config.owner)?.to_string(),
            });
        }
        Ok(())
    }

    fn only_controller(&self, deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
        let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
        let is_controller = CONTROLLERS
            .may_load(deps.storage, sender.to_vec())?
            .unwrap_or(false);
        if !is_controller {
            return Err(ContractError::NotController {
                sender: info.sender.to_string(),
            });
        }
        Ok(())
    }

    /// Token ids are the hex keccak256 of the label they were registered for.
    fn validate_id(&self, id: &str, name: &str) -> Result<Vec<u8>, ContractError> {
        let label = decode_id(id)?;
        if get_label_from_name(&name.to_string()) != label {
            return Err(ContractError::IdAndNameNotMatch {});
        }
        Ok(label)
    }

    fn set_subnode_owner_msg(
        &self,
        deps: Deps,
        config: &Config,
        label: Vec<u8>,
        owner: String,
    ) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: deps.api.addr_humanize(&config.registry_address)?.to_string(),
            msg: to_binary(&RegistryExecuteMsg::SetSubnodeOwner {
                node: config.base_node.clone(),
                label,
                owner,
            })?,
            funds: vec![],
        }))
    }

    #[allow(clippy::too_many_arguments)]
    pub fn register(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        id: String,
        owner: String,
        duration: u64,
        name: String,
    ) -> Result<Response, ContractError> {
        self.only_controller(deps.as_ref(), &info)?;
        let label = self.validate_id(&id, &name)?;
        if !self.is_available(deps.as_ref(), &env, id.clone())?.available {
            return Err(ContractError::NotAvailable { id });
        }

        let config = CONFIG.load(deps.storage)?;
        let now = env.block.time.seconds();
        let expires = now
            .checked_add(duration)
            .filter(|expires| expires.checked_add(config.grace_period).is_some())
            .ok_or_else(|| StdError::generic_err("registration duration overflows"))?;
        EXPIRIES.save(deps.storage, id.clone(), &expires)?;

        let owner_addr = deps.api.addr_validate(&owner)?;
        // A lapsed token is handed over in place rather than minted twice
        let previous = self.tokens.may_load(deps.storage, &id)?;
        self.tokens.save(
            deps.storage,
            &id,
            &TokenInfo {
                owner: owner_addr,
                approvals: vec![],
                name: name.clone(),
            },
        )?;
        if previous.is_none() {
            self.increment_tokens(deps.storage)?;
        }

        let msg = self.set_subnode_owner_msg(deps.as_ref(), &config, label, owner.clone())?;
        Ok(Response::new()
            .add_message(msg)
            .add_attribute("method", "register")
            .add_attribute("id", id)
            .add_attribute("name", name)
            .add_attribute("owner", owner)
            .add_attribute("expires", expires.to_string()))
    }

    pub fn renew(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        id: String,
        duration: u64,
    ) -> Result<Response, ContractError> {
        self.only_controller(deps.as_ref(), &info)?;
        let config = CONFIG.load(deps.storage)?;
        let now = env.block.time.seconds();
        let expires = match EXPIRIES.may_load(deps.storage, id.clone())? {
            Some(expires) if expires.saturating_add(config.grace_period) >= now => expires,
            _ => return Err(ContractError::NotRegistered { id }),
        };
        let expires = expires
            .checked_add(duration)
            .filter(|expires| expires.checked_add(config.grace_period).is_some())
            .ok_or_else(|| StdError::generic_err("renewal duration overflows"))?;
        EXPIRIES.save(deps.storage, id.clone(), &expires)?;

        Ok(Response::new()
            .add_attribute("method", "renew")
            .add_attribute("id", id)
            .add_attribute("expires", expires.to_string()))
    }

    pub fn reclaim(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        id: String,
        owner: String,
    ) -> Result<Response, ContractError> {
        let token = self.load_live_token(deps.as_ref(), &env, &id)?;
        self.check_can_send(deps.as_ref(), &env, &info, &token)?;

        let config = CONFIG.load(deps.storage)?;
        let msg = self.set_subnode_owner_msg(deps.as_ref(), &config, decode_id(&id)?, owner.clone())?;
        Ok(Response::new()
            .add_message(msg)
            .add_attribute("method", "reclaim")
            .add_attribute("id", id)
            .add_attribute("owner", owner))
    }

    pub fn add_controller(
        &self,
        deps: DepsMut,
        info: MessageInfo,
        address: String,
    ) -> Result<Response, ContractError> {
        self.only_owner(deps.as_ref(), &info)?;
        let controller = deps.api.addr_canonicalize(address.as_str())?;
        CONTROLLERS.save(deps.storage, controller.to_vec(), &true)?;
        Ok(Response::new()
            .add_attribute("method", "add_controller")
            .add_attribute("controller", address))
    }

    pub fn remove_controller(
        &self,
        deps: DepsMut,
        info: MessageInfo,
        address: String,
    ) -> Result<Response, ContractError> {
        self.only_owner(deps.as_ref(), &info)?;
        let controller = deps.api.addr_canonicalize(address.as_str())?;
        CONTROLLERS.remove(deps.storage, controller.to_vec());
        Ok(Response::new()
            .add_attribute("method", "remove_controller")
            .add_attribute("controller", address))
    }

    pub fn set_config(
        &self,
        deps: DepsMut,
        info: MessageInfo,
        grace_period: u64,
        registry_address: String,
        owner: String,
    ) -> Result<Response, ContractError> {
        self.only_owner(deps.as_ref(), &info)?;
        let mut config = CONFIG.load(deps.storage)?;
        config.grace_period = grace_period;
        config.registry_address = deps.api.addr_canonicalize(registry_address.as_str())?;
        config.owner = deps.api.addr_canonicalize(owner.as_str())?;
        CONFIG.save(deps.storage, &config)?;

        Ok(Response::new()
            .add_attribute("method", "set_config")
            .add_attribute("grace_period", grace_period.to_string())
            .add_attribute("registry_address", registry_address)
            .add_attribute("owner", owner))
    }

    pub fn transfer_nft(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        recipient: String,
        token_id: String,
    ) -> Result<Response, ContractError> {
        self._transfer_nft(deps, &env, &info, &recipient, &token_id)?;

        Ok(Response::new()
            .add_attribute("method", "transfer_nft")
            .add_attribute("sender", info.sender)
            .add_attribute("recipient", recipient)
            .add_attribute("token_id", token_id))
    }

    pub fn send_nft(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        contract: String,
        token_id: String,
        msg: Binary,
    ) -> Result<Response, ContractError> {
        self._transfer_nft(deps, &env, &info, &contract, &token_id)?;

        let send = Cw721ReceiveMsg {
            sender: info.sender.to_string(),
            token_id: token_id.clone(),
            msg,
        };

        Ok(Response::new()
            .add_message(send.into_cosmos_msg(contract.clone())?)
            .add_attribute("method", "send_nft")
            .add_attribute("sender", info.sender)
            .add_attribute("recipient", contract)
            .add_attribute("token_id", token_id))
    }

    pub fn approve(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        spender: String,
        token_id: String,
        expires: Option<Expiration>,
    ) -> Result<Response, ContractError> {
        self._update_approvals(deps, &env, &info, &spender, &token_id, true, expires)?;

        Ok(Response::new()
            .add_attribute("method", "approve")
            .add_attribute("sender", info.sender)
            .add_attribute("spender", spender)
            .add_attribute("token_id", token_id))
    }

    pub fn revoke(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        spender: String,
        token_id: String,
    ) -> Result<Response, ContractError> {
        self._update_approvals(deps, &env, &info, &spender, &token_id, false, None)?;

        Ok(Response::new()
            .add_attribute("method", "revoke")
            .add_attribute("sender", info.sender)
            .add_attribute("spender", spender)
            .add_attribute("token_id", token_id))
    }

    pub fn approve_all(
        &self,
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        operator: String,
        expires: Option<Expiration>,
    ) -> Result<Response, ContractError> {
        // reject expired data as invalid
        let expires = expires.unwrap_or_default();
        if expires.is_expired(&env.block) {
            return Err(ContractError::Expired {});
        }

        let operator_addr = deps.api.addr_validate(&operator)?;
        self.operators.save(
            deps.storage,
            (
                info.sender.as_bytes().to_vec(),
                operator_addr.as_bytes().to_vec(),
            ),
            &expires,
        )?;

        Ok(Response::new()
            .add_attribute("method", "approve_all")
            .add_attribute("sender", info.sender)
            .add_attribute("operator", operator))
    }

    pub fn revoke_all(
        &self,
        deps: DepsMut,
        info: MessageInfo,
        operator: String,
    ) -> Result<Response, ContractError> {
        let operator_addr = deps.api.addr_validate(&operator)?;
        self.operators.remove(
            deps.storage,
            (
                info.sender.as_bytes().to_vec(),
                operator_addr.as_bytes().to_vec(),
            ),
        );

        Ok(Response::new()
            .add_attribute("method", "revoke_all")
            .add_attribute("sender", info.sender)
            .add_attribute("operator", operator))
    }
}

// helpers
impl<'a> BaseRegistrar<'a> {
    /// Loads a token whose registration has not expired yet.
    pub fn load_live_token(
        &self,
        deps: Deps,
        env: &Env,
        token_id: &str,
    ) -> Result<TokenInfo, ContractError> {
        let token = self.tokens.load(deps.storage, token_id)?;
        let expires = EXPIRIES
            .may_load(deps.storage, token_id.to_string())?
            .unwrap_or(0);
        if expires <= env.block.time.seconds() {
            return Err(ContractError::TokenExpired {
                id: token_id.to_string(),
            });
        }
        Ok(token)
    }

    pub fn _transfer_nft(
        &self,
        deps: DepsMut,
        env: &Env,
        info: &MessageInfo,
        recipient: &str,
        token_id: &str,
    ) -> Result<TokenInfo, ContractError> {
        let mut token = self.load_live_token(deps.as_ref(), env, token_id)?;
        self.check_can_send(deps.as_ref(), env, info, &token)?;
        // set owner and remove existing approvals
        token.owner = deps.api.addr_validate(recipient)?;
        token.approvals = vec![];
        self.tokens.save(deps.storage, token_id, &token)?;
        Ok(token)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn _update_approvals(
        &self,
        deps: DepsMut,
        env: &Env,
        info: &MessageInfo,
        spender: &str,
        token_id: &str,
        // if add == false, remove. if add == true, remove then set with this expiration
        add: bool,
        expires: Option<Expiration>,
    ) -> Result<TokenInfo, ContractError> {
        let mut token = self.load_live_token(deps.as_ref(), env, token_id)?;
        self.check_can_approve(deps.as_ref(), env, info, &token)?;

        let spender_addr = deps.api.addr_validate(spender)?;
        token.approvals = token
            .approvals
            .into_iter()
            .filter(|apr| apr.spender != spender_addr)
            .collect();

        if add {
            let expires = expires.unwrap_or_default();
            if expires.is_expired(&env.block) {
                return Err(ContractError::Expired {});
            }
            token.approvals.push(Approval {
                spender: spender_addr,
                expires,
            });
        }

        self.tokens.save(deps.storage, token_id, &token)?;
        Ok(token)
    }

    fn check_operator(
        &self,
        deps: Deps,
        env: &Env,
        info: &MessageInfo,
        token: &TokenInfo,
    ) -> Result<(), ContractError> {
        let op = self.operators.may_load(
            deps.storage,
            (
                token.owner.as_bytes().to_vec(),
                info.sender.as_bytes().to_vec(),
            ),
        )?;
        match op {
            Some(ex) if ex.is_expired(&env.block) => Err(ContractError::Unauthorized {
                description: Some(String::from("expired")),
            }),
            Some(_) => Ok(()),
            None => Err(ContractError::Unauthorized {
                description: Some(String::from("sender is neither owner nor operator")),
            }),
        }
    }

    /// returns true iff the sender can execute approve or reject on the contract
    pub fn check_can_approve(
        &self,
        deps: Deps,
        env: &Env,
        info: &MessageInfo,
        token: &TokenInfo,
    ) -> Result<(), ContractError> {
        if token.owner == info.sender {
            return Ok(());
        }
        self.check_operator(deps, env, info, token)
    }

    /// returns true iff the sender can transfer ownership of the token
    pub fn check_can_send(
        &self,
        deps: Deps,
        env: &Env,
        info: &MessageInfo,
        token: &TokenInfo,
    ) -> Result<(), ContractError> {
        if token.owner == info.sender {
            return Ok(());
        }
        if token
            .approvals
            .iter()
            .any(|apr| apr.spender == info.sender && !apr.is_expired(&env.block))
        {
            return Ok(());
        }
        self.check_operator(deps, env, info, token)
    }
}
