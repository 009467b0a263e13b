use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{OWNER, PROFESSIONS};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // deployer owns the registry for its whole lifetime
    OWNER.save(deps.storage, &info.sender)?;
    PROFESSIONS.save(deps.storage, &Vec::new())?;

    deps.api.debug(&format!("user-register: instantiated, owner {}", info.sender));

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    use ExecuteMsg::*;

    match msg {
        CreateProfession { names } => execute::create_profession(deps, info, names),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(
    deps: Deps,
    _env: Env,
    msg: QueryMsg
) -> StdResult<Binary> {
    use QueryMsg::*;

    match msg {
        ShowProfession {} => to_json_binary(&query::show_profession(deps)?),
        Owner {} => to_json_binary(&query::owner(deps)?),
    }
}

mod execute {
    use super::*;

    pub fn create_profession(
        deps: DepsMut,
        info: MessageInfo,
        names: Vec<String>,
    ) -> Result<Response, ContractError> {
        let owner = OWNER.load(deps.storage)?;
        if info.sender != owner {
            deps.api.debug(&format!("user-register: rejected create_profession from {}", info.sender));
            return Err(ContractError::Unauthorized {
                sender: info.sender.into_string(),
            });
        }

        let added = names.len();
        let professions = PROFESSIONS.update(deps.storage, |mut professions| -> StdResult<_> {
            professions.extend(names);
            Ok(professions)
        })?;

        deps.api.debug(&format!(
            "user-register: {} professions added, {} registered",
            added,
            professions.len()
        ));

        Ok(Response::new()
            .add_attribute("method", "create_profession")
            .add_attribute("added", added.to_string())
            .add_attribute("total", professions.len().to_string()))
    }
}

mod query {
    use crate::msg::{OwnerResp, ShowProfessionResp};

    use super::*;

    pub fn show_profession(deps: Deps) -> StdResult<ShowProfessionResp> {
        let professions = PROFESSIONS.load(deps.storage)?;
        Ok(ShowProfessionResp { professions })
    }

    pub fn owner(deps: Deps) -> StdResult<OwnerResp> {
        let owner = OWNER.load(deps.storage)?;
        Ok(OwnerResp { owner })
    }
}
