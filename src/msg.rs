use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// INSTANTIATE -------------------------------------------
// the sender of the instantiate message becomes the owner
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Debug, Clone)]
pub struct InstantiateMsg {
}

// EXECUTE ------------------------------------------------
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Debug, Clone)]
pub enum ExecuteMsg {
    /// Owner only. Appends every name, in order.
    CreateProfession {
        names: Vec<String>
    },
}


// QUERY --------------------------------------------------
#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Debug, Clone)]
pub enum QueryMsg {
    // the curly braces keep the serialized json as an object: {"ShowProfession":{}}
    ShowProfession {},
    Owner {},
}

#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Debug, Clone)]
pub struct ShowProfessionResp {
    pub professions: Vec<String>,
}

#[derive(Serialize, Deserialize, JsonSchema, PartialEq, Debug, Clone)]
pub struct OwnerResp {
    pub owner: Addr,
}
