use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use wns::controller::{
    InstantiateMsg, ExecuteMsg, QueryMsg, MigrateMsg, RentPriceResponse, AvailableResponse,
    MakeCommitmentResponse, CommitmentTimestampResponse, TokenIdResponse, ConfigResponse,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(RentPriceResponse), &out_dir);
    export_schema(&schema_for!(AvailableResponse), &out_dir);
    export_schema(&schema_for!(MakeCommitmentResponse), &out_dir);
    export_schema(&schema_for!(CommitmentTimestampResponse), &out_dir);
    export_schema(&schema_for!(TokenIdResponse), &out_dir);
    export_schema(&schema_for!(ConfigResponse), &out_dir);
}
