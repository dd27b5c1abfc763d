use crate::state::{BaseRegistrar, TokenInfo, CONFIG, CONTROLLERS, EXPIRIES};
use cosmwasm_std::{to_binary, Binary, BlockInfo, Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;
use wns::registrar::{
    Approval, ConfigResponse, ContractInfoResponse, GetBaseNodeResponse, GetExpiresResponse,
    GetGracePeriodResponse, GetRegistryResponse, IsAvailableResponse, IsControllerResponse,
    NftInfoResponse, NumTokensResponse, OwnerOfResponse, QueryMsg, TokensResponse,
};
use wns::utils::convert_namehash_to_hex_string;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

impl<'a> BaseRegistrar<'a> {
    pub fn contract_info(&self, deps: Deps) -> StdResult<ContractInfoResponse> {
        self.contract_info.load(deps.storage)
    }

    pub fn num_tokens(&self, deps: Deps) -> StdResult<NumTokensResponse> {
        let count = self.token_count(deps.storage)?;
        Ok(NumTokensResponse { count })
    }

    pub fn nft_info(&self, deps: Deps, token_id: String) -> StdResult<NftInfoResponse> {
        let info = self.tokens.load(deps.storage, &token_id)?;
        let expires = EXPIRIES.may_load(deps.storage, token_id)?.unwrap_or(0);
        Ok(NftInfoResponse {
            name: info.name,
            expires,
        })
    }

    /// Fails once the registration has expired, even inside the grace period.
    pub fn owner_of(
        &self,
        deps: Deps,
        env: Env,
        token_id: String,
        include_expired: bool,
    ) -> StdResult<OwnerOfResponse> {
        let info = self.tokens.load(deps.storage, &token_id)?;
        let expires = EXPIRIES.may_load(deps.storage, token_id.clone())?.unwrap_or(0);
        if expires <= env.block.time.seconds() {
            return Err(StdError::generic_err(format!("{} has expired", token_id)));
        }
        Ok(OwnerOfResponse {
            owner: info.owner.to_string(),
            approvals: humanize_approvals(&env.block, &info, include_expired),
        })
    }

    pub fn all_tokens(
        &self,
        deps: Deps,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> StdResult<TokensResponse> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);

        let tokens: StdResult<Vec<String>> = self
            .tokens
            .range(deps.storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| {
                item.and_then(|(k, _)| String::from_utf8(k).map_err(StdError::invalid_utf8))
            })
            .collect();
        Ok(TokensResponse { tokens: tokens? })
    }

    pub fn is_available(&self, deps: Deps, env: &Env, id: String) -> StdResult<IsAvailableResponse> {
        let config = CONFIG.load(deps.storage)?;
        let expiry = EXPIRIES.may_load(deps.storage, id)?.unwrap_or(0);
        let available = expiry.saturating_add(config.grace_period) < env.block.time.seconds();
        Ok(IsAvailableResponse { available })
    }

    pub fn get_expires(&self, deps: Deps, id: String) -> StdResult<GetExpiresResponse> {
        let expires = EXPIRIES.may_load(deps.storage, id)?.unwrap_or(0);
        Ok(GetExpiresResponse { expires })
    }

    pub fn get_base_node(&self, deps: Deps) -> StdResult<GetBaseNodeResponse> {
        let base_node = CONFIG.load(deps.storage)?.base_node;
        Ok(GetBaseNodeResponse {
            base_node: convert_namehash_to_hex_string(base_node),
        })
    }

    pub fn get_registry(&self, deps: Deps) -> StdResult<GetRegistryResponse> {
        let registry_address = CONFIG.load(deps.storage)?.registry_address;
        let registry = deps.api.addr_humanize(&registry_address)?;
        Ok(GetRegistryResponse { registry })
    }

    pub fn get_grace_period(&self, deps: Deps) -> StdResult<GetGracePeriodResponse> {
        let grace_period = CONFIG.load(deps.storage)?.grace_period;
        Ok(GetGracePeriodResponse { grace_period })
    }

    pub fn is_controller(&self, deps: Deps, address: String) -> StdResult<IsControllerResponse> {
        let address = deps.api.addr_canonicalize(address.as_str())?;
        let is_controller = CONTROLLERS
            .may_load(deps.storage, address.to_vec())?
            .unwrap_or(false);
        Ok(IsControllerResponse { is_controller })
    }

    pub fn get_config(&self, deps: Deps) -> StdResult<ConfigResponse> {
        let config = CONFIG.load(deps.storage)?;
        Ok(ConfigResponse {
            grace_period: config.grace_period,
            registry_address: deps.api.addr_humanize(&config.registry_address)?,
            owner: deps.api.addr_humanize(&config.owner)?,
            base_node: config.base_node,
            base_name: config.base_name,
        })
    }

    pub fn query(&self, deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
        match msg {
            QueryMsg::IsAvailable { id } => to_binary(&self.is_available(deps, &env, id)?),
            QueryMsg::GetExpires { id } => to_binary(&self.get_expires(deps, id)?),
            QueryMsg::GetBaseNode {} => to_binary(&self.get_base_node(deps)?),
            QueryMsg::GetRegistry {} => to_binary(&self.get_registry(deps)?),
            QueryMsg::GetGracePeriod {} => to_binary(&self.get_grace_period(deps)?),
            QueryMsg::GetConfig {} => to_binary(&self.get_config(deps)?),
            QueryMsg::IsController { address } => to_binary(&self.is_controller(deps, address)?),
            QueryMsg::OwnerOf {
                token_id,
                include_expired,
            } => {
                to_binary(&self.owner_of(deps, env, token_id, include_expired.unwrap_or(false))?)
            }
            QueryMsg::NumTokens {} => to_binary(&self.num_tokens(deps)?),
            QueryMsg::ContractInfo {} => to_binary(&self.contract_info(deps)?),
            QueryMsg::NftInfo { token_id } => to_binary(&self.nft_info(deps, token_id)?),
            QueryMsg::AllTokens { start_after, limit } => {
                to_binary(&self.all_tokens(deps, start_after, limit)?)
            }
        }
    }
}

fn humanize_approvals(block: &BlockInfo, info: &TokenInfo, include_expired: bool) -> Vec<Approval> {
    info.approvals
        .iter()
        .filter(|apr| include_expired || !apr.is_expired(block))
        .map(|approval| Approval {
            spender: approval.spender.to_string(),
            expires: approval.expires,
        })
        .collect()
}
